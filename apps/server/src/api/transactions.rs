use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    routing::{get, post},
    Extension, Json, Router,
};
use budgetbuddy_core::transactions::{
    NewTransaction, RecordedTransaction, Transaction, TransactionKind,
};
use budgetbuddy_core::utils::time_utils::parse_date;
use rust_decimal::Decimal;
use serde::Deserialize;

use super::extract::{ApiJson, ApiQuery};
use crate::{auth::AuthUser, error::ApiResult, main_lib::AppState};

/// Body of `POST /income` and `POST /expense`; the kind comes from the path.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct TransactionRequest {
    amount: Decimal,
    category_id: i64,
    subcategory_id: Option<i64>,
    #[serde(default)]
    description: String,
    #[serde(default)]
    tags: Vec<String>,
    date: String,
    #[serde(default)]
    note: String,
}

impl TransactionRequest {
    fn into_new_transaction(self, kind: TransactionKind) -> ApiResult<NewTransaction> {
        Ok(NewTransaction {
            kind,
            amount: self.amount,
            category_id: self.category_id,
            subcategory_id: self.subcategory_id,
            description: self.description,
            tags: self.tags,
            date: parse_date(&self.date)?,
            note: self.note,
        })
    }
}

#[derive(Deserialize)]
struct KindQuery {
    #[serde(rename = "type")]
    kind: String,
}

async fn record(
    state: &AppState,
    user: &AuthUser,
    kind: TransactionKind,
    body: TransactionRequest,
) -> ApiResult<(StatusCode, Json<RecordedTransaction>)> {
    let new_transaction = body.into_new_transaction(kind)?;
    let recorded = state
        .transaction_service
        .record_transaction(user.id, new_transaction)
        .await?;
    Ok((StatusCode::CREATED, Json(recorded)))
}

async fn add_income(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<AuthUser>,
    ApiJson(body): ApiJson<TransactionRequest>,
) -> ApiResult<(StatusCode, Json<RecordedTransaction>)> {
    record(&state, &user, TransactionKind::Income, body).await
}

async fn add_expense(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<AuthUser>,
    ApiJson(body): ApiJson<TransactionRequest>,
) -> ApiResult<(StatusCode, Json<RecordedTransaction>)> {
    record(&state, &user, TransactionKind::Expense, body).await
}

async fn list_transactions(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<AuthUser>,
    ApiQuery(query): ApiQuery<KindQuery>,
) -> ApiResult<Json<Vec<Transaction>>> {
    let kind: TransactionKind = query.kind.parse()?;
    let transactions = state.transaction_service.get_transactions(user.id, kind)?;
    Ok(Json(transactions))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/income", post(add_income))
        .route("/expense", post(add_expense))
        .route("/transactions", get(list_transactions))
}
