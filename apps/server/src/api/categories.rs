use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    routing::get,
    Json, Router,
};
use budgetbuddy_core::categories::{
    Category, CategoryKind, CategoryWithSubcategories, NewCategory, NewSubcategory, Subcategory,
};
use serde::Deserialize;

use super::extract::{ApiJson, ApiQuery};
use crate::{error::ApiResult, main_lib::AppState};

#[derive(Deserialize)]
struct KindQuery {
    #[serde(rename = "type")]
    kind: Option<String>,
}

impl KindQuery {
    fn parse(&self) -> ApiResult<Option<CategoryKind>> {
        Ok(self
            .kind
            .as_deref()
            .map(str::parse::<CategoryKind>)
            .transpose()?)
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct SubcategoryQuery {
    category_id: i64,
}

async fn get_categories(
    State(state): State<Arc<AppState>>,
    ApiQuery(query): ApiQuery<KindQuery>,
) -> ApiResult<Json<Vec<Category>>> {
    let categories = state.category_service.get_categories(query.parse()?)?;
    Ok(Json(categories))
}

async fn get_category_tree(
    State(state): State<Arc<AppState>>,
    ApiQuery(query): ApiQuery<KindQuery>,
) -> ApiResult<Json<Vec<CategoryWithSubcategories>>> {
    let tree = state
        .category_service
        .get_categories_with_subcategories(query.parse()?)?;
    Ok(Json(tree))
}

async fn create_category(
    State(state): State<Arc<AppState>>,
    ApiJson(category): ApiJson<NewCategory>,
) -> ApiResult<(StatusCode, Json<Category>)> {
    let created = state.category_service.create_category(category).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

async fn get_subcategories(
    State(state): State<Arc<AppState>>,
    ApiQuery(query): ApiQuery<SubcategoryQuery>,
) -> ApiResult<Json<Vec<Subcategory>>> {
    let subcategories = state
        .category_service
        .get_subcategories(query.category_id)?;
    Ok(Json(subcategories))
}

async fn create_subcategory(
    State(state): State<Arc<AppState>>,
    ApiJson(subcategory): ApiJson<NewSubcategory>,
) -> ApiResult<(StatusCode, Json<Subcategory>)> {
    let created = state
        .category_service
        .create_subcategory(subcategory)
        .await?;
    Ok((StatusCode::CREATED, Json(created)))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/categories", get(get_categories).post(create_category))
        .route("/categories/tree", get(get_category_tree))
        .route(
            "/subcategories",
            get(get_subcategories).post(create_subcategory),
        )
}
