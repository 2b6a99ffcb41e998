use std::sync::Arc;

use axum::{middleware, routing::get, Json, Router};
use budgetbuddy_core::utils::{time_utils::today, MonthKey};
use serde_json::json;
use tower_http::{
    cors::{Any, CorsLayer},
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::{auth::require_jwt, config::Config, error::ApiResult, main_lib::AppState};

mod analytics;
mod budgets;
mod categories;
mod extract;
mod goals;
mod transactions;
mod users;
mod ws;

async fn healthz() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

/// Parses a `YYYY-MM` query value, or the current month when absent.
pub(crate) fn month_or_current(raw: Option<&str>) -> ApiResult<MonthKey> {
    match raw {
        Some(raw) => Ok(MonthKey::parse(raw)?),
        None => Ok(MonthKey::from_date(today())),
    }
}

fn cors_layer(config: &Config) -> CorsLayer {
    if config.cors_allow.iter().any(|o| o == "*") {
        return CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any);
    }
    let origins = config
        .cors_allow
        .iter()
        .filter_map(|o| match o.parse() {
            Ok(origin) => Some(origin),
            Err(_) => {
                tracing::warn!("Ignoring invalid CORS origin '{}'", o);
                None
            }
        })
        .collect::<Vec<_>>();
    CorsLayer::new()
        .allow_origin(origins)
        .allow_methods(Any)
        .allow_headers(Any)
}

pub fn app_router(state: Arc<AppState>, config: &Config) -> Router {
    let protected = Router::new()
        .merge(users::protected_router())
        .merge(transactions::router())
        .merge(categories::router())
        .merge(goals::router())
        .merge(budgets::router())
        .merge(analytics::router())
        .route_layer(middleware::from_fn_with_state(state.clone(), require_jwt));

    let api = Router::new()
        .route("/healthz", get(healthz))
        .merge(users::public_router())
        // The socket resolves its own token so browsers can pass it as a query parameter.
        .merge(ws::router())
        .merge(protected);

    Router::new()
        .nest("/api/v1", api)
        .with_state(state)
        .layer(cors_layer(config))
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(TimeoutLayer::new(config.request_timeout))
        .layer(TraceLayer::new_for_http())
}
