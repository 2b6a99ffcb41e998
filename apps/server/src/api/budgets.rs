use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{delete, get},
    Extension, Json, Router,
};
use budgetbuddy_core::budgets::{Budget, BudgetStatus, BudgetVsActual, NewBudget};
use budgetbuddy_core::utils::MonthKey;
use rust_decimal::Decimal;
use serde::Deserialize;

use super::extract::{ApiJson, ApiQuery};
use super::month_or_current;
use crate::{auth::AuthUser, error::ApiResult, main_lib::AppState};

#[derive(Deserialize)]
struct MonthQuery {
    month: Option<String>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct CheckQuery {
    category_id: i64,
    month: Option<String>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct BudgetRequest {
    category_id: i64,
    amount: Decimal,
    month: Option<String>,
}

async fn get_budgets(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<AuthUser>,
    ApiQuery(query): ApiQuery<MonthQuery>,
) -> ApiResult<Json<Vec<Budget>>> {
    let month = query.month.as_deref().map(MonthKey::parse).transpose()?;
    let budgets = state.budget_service.get_budgets(user.id, month)?;
    Ok(Json(budgets))
}

async fn save_budget(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<AuthUser>,
    ApiJson(body): ApiJson<BudgetRequest>,
) -> ApiResult<Json<Budget>> {
    let new_budget = NewBudget {
        category_id: body.category_id,
        amount: body.amount,
        month: month_or_current(body.month.as_deref())?,
    };
    let budget = state.budget_service.save_budget(user.id, new_budget).await?;
    Ok(Json(budget))
}

async fn delete_budget(
    Path(id): Path<i64>,
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<AuthUser>,
) -> ApiResult<StatusCode> {
    state.budget_service.delete_budget(user.id, id).await?;
    Ok(StatusCode::NO_CONTENT)
}

async fn check_budget(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<AuthUser>,
    ApiQuery(query): ApiQuery<CheckQuery>,
) -> ApiResult<Json<BudgetStatus>> {
    let month = month_or_current(query.month.as_deref())?;
    let status = state
        .budget_service
        .check_budget(user.id, query.category_id, month)?;
    Ok(Json(status))
}

async fn budget_vs_actual(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<AuthUser>,
    ApiQuery(query): ApiQuery<MonthQuery>,
) -> ApiResult<Json<Vec<BudgetVsActual>>> {
    let month = month_or_current(query.month.as_deref())?;
    let report = state.budget_service.get_budget_vs_actual(user.id, month)?;
    Ok(Json(report))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/budgets", get(get_budgets).post(save_budget))
        .route("/budgets/check", get(check_budget))
        .route("/budgets/vs-actual", get(budget_vs_actual))
        .route("/budgets/{id}", delete(delete_budget))
}
