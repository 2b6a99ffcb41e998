use std::sync::Arc;

use crate::{
    auth::{AuthConfig, AuthManager},
    config::{Config, LogFormat},
    domain_events::WebDomainEventSink,
    events::EventBus,
};
use budgetbuddy_core::{
    analytics::{AnalyticsService, AnalyticsServiceTrait},
    budgets::{BudgetService, BudgetServiceTrait},
    categories::{CategoryService, CategoryServiceTrait},
    events::DomainEventSink,
    forecast::{ForecastService, ForecastServiceTrait},
    goals::{GoalService, GoalServiceTrait},
    transactions::{TransactionRepositoryTrait, TransactionService, TransactionServiceTrait},
    users::{UserService, UserServiceTrait},
};
use budgetbuddy_storage_sqlite::{
    budgets::BudgetRepository, categories::CategoryRepository, db, goals::GoalRepository,
    transactions::TransactionRepository, users::UserRepository,
};
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

pub struct AppState {
    pub category_service: Arc<dyn CategoryServiceTrait>,
    pub transaction_service: Arc<dyn TransactionServiceTrait>,
    pub budget_service: Arc<dyn BudgetServiceTrait>,
    pub goal_service: Arc<dyn GoalServiceTrait>,
    pub analytics_service: Arc<dyn AnalyticsServiceTrait>,
    pub forecast_service: Arc<dyn ForecastServiceTrait>,
    pub user_service: Arc<dyn UserServiceTrait>,
    pub event_bus: EventBus,
    pub auth: Arc<AuthManager>,
}

pub fn init_tracing(format: LogFormat) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let registry = tracing_subscriber::registry().with(filter);
    match format {
        LogFormat::Json => registry
            .with(fmt::layer().json().with_current_span(false))
            .init(),
        LogFormat::Text => registry
            .with(fmt::layer().with_target(true).with_line_number(true))
            .init(),
    }
}

pub async fn build_state(config: &Config) -> anyhow::Result<Arc<AppState>> {
    let db_path = db::init(&config.db_path)?;
    tracing::info!("Database path in use: {}", db_path);

    let pool = db::create_pool(&db_path)?;
    db::run_migrations(&pool)?;
    let writer = db::spawn_writer((*pool).clone());

    let event_bus = EventBus::new(256);
    let event_sink: Arc<dyn DomainEventSink> =
        Arc::new(WebDomainEventSink::new(event_bus.clone()));

    let category_repository = Arc::new(CategoryRepository::new(pool.clone(), writer.clone()));
    let category_service: Arc<dyn CategoryServiceTrait> =
        Arc::new(CategoryService::new(category_repository));

    let transaction_repository: Arc<dyn TransactionRepositoryTrait> =
        Arc::new(TransactionRepository::new(pool.clone(), writer.clone()));

    let budget_service: Arc<dyn BudgetServiceTrait> = Arc::new(BudgetService::new(
        Arc::new(BudgetRepository::new(pool.clone(), writer.clone())),
        transaction_repository.clone(),
        category_service.clone(),
    ));

    let transaction_service: Arc<dyn TransactionServiceTrait> = Arc::new(TransactionService::new(
        transaction_repository.clone(),
        category_service.clone(),
        budget_service.clone(),
        event_sink,
    ));

    let goal_repository = Arc::new(GoalRepository::new(pool.clone(), writer.clone()));
    let goal_service: Arc<dyn GoalServiceTrait> = Arc::new(GoalService::new(goal_repository));

    let analytics_service: Arc<dyn AnalyticsServiceTrait> =
        Arc::new(AnalyticsService::new(transaction_repository));
    let forecast_service: Arc<dyn ForecastServiceTrait> = Arc::new(ForecastService::new(
        goal_service.clone(),
        analytics_service.clone(),
    ));

    let user_service: Arc<dyn UserServiceTrait> = Arc::new(UserService::new(Arc::new(
        UserRepository::new(pool.clone(), writer),
    )));

    let auth = Arc::new(AuthManager::new(&AuthConfig {
        jwt_secret: config.jwt_secret.clone(),
        access_token_ttl: config.token_ttl,
    }));
    tracing::info!("Access tokens expire after {}s", config.token_ttl.as_secs());

    Ok(Arc::new(AppState {
        category_service,
        transaction_service,
        budget_service,
        goal_service,
        analytics_service,
        forecast_service,
        user_service,
        event_bus,
        auth,
    }))
}
