use std::sync::Arc;

use axum::{
    extract::State,
    routing::get,
    Extension, Json, Router,
};
use budgetbuddy_core::analytics::{CategorySpending, DayOfWeekAverage, MonthlyTrend};
use budgetbuddy_core::forecast::SavingsForecast;
use serde::Deserialize;

use super::extract::ApiQuery;
use super::month_or_current;
use crate::{auth::AuthUser, error::ApiResult, main_lib::AppState};

#[derive(Deserialize)]
struct MonthQuery {
    month: Option<String>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct ForecastQuery {
    goal_id: i64,
}

async fn spending_by_category(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<AuthUser>,
    ApiQuery(query): ApiQuery<MonthQuery>,
) -> ApiResult<Json<Vec<CategorySpending>>> {
    let month = month_or_current(query.month.as_deref())?;
    let spending = state
        .analytics_service
        .spending_by_category(user.id, month)?;
    Ok(Json(spending))
}

async fn income_expense_trends(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<AuthUser>,
) -> ApiResult<Json<Vec<MonthlyTrend>>> {
    Ok(Json(state.analytics_service.income_expense_trends(user.id)?))
}

async fn average_spending(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<AuthUser>,
) -> ApiResult<Json<Vec<DayOfWeekAverage>>> {
    let averages = state
        .analytics_service
        .average_spending_by_day_of_week(user.id)?;
    Ok(Json(averages))
}

async fn forecast_savings(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<AuthUser>,
    ApiQuery(query): ApiQuery<ForecastQuery>,
) -> ApiResult<Json<SavingsForecast>> {
    let forecast = state
        .forecast_service
        .forecast_savings(user.id, query.goal_id)?;
    Ok(Json(forecast))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/analytics/spending", get(spending_by_category))
        .route("/analytics/trends", get(income_expense_trends))
        .route("/analytics/average-spending", get(average_spending))
        .route("/analytics/forecast", get(forecast_savings))
}
