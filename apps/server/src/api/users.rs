use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    routing::{get, post, put},
    Extension, Json, Router,
};
use budgetbuddy_core::errors::ValidationError;
use budgetbuddy_core::users::{normalize_email, NewUser, UserProfile};
use serde::{Deserialize, Serialize};

use super::extract::ApiJson;
use crate::{
    auth::{AuthError, AuthUser},
    error::{ApiError, ApiResult},
    main_lib::AppState,
};

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RegisterRequest {
    email: String,
    password: String,
    name: String,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct LoginRequest {
    email: String,
    password: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct TokenResponse {
    token: String,
    token_type: &'static str,
    expires_in: u64,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct UpdateProfileRequest {
    name: String,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct ChangePasswordRequest {
    old_password: String,
    new_password: String,
}

fn require_password(password: &str, field: &str) -> ApiResult<()> {
    if password.is_empty() {
        return Err(ApiError::Core(
            ValidationError::MissingField(field.to_string()).into(),
        ));
    }
    Ok(())
}

fn token_response(state: &AppState, user_id: i64, email: &str) -> ApiResult<TokenResponse> {
    let token = state.auth.issue_token(user_id, email)?;
    Ok(TokenResponse {
        token,
        token_type: "Bearer",
        expires_in: state.auth.expires_in().as_secs(),
    })
}

async fn register(
    State(state): State<Arc<AppState>>,
    ApiJson(body): ApiJson<RegisterRequest>,
) -> ApiResult<(StatusCode, Json<TokenResponse>)> {
    require_password(&body.password, "password")?;
    let password_hash = state.auth.hash_password(&body.password)?;
    let user = state
        .user_service
        .register(NewUser {
            email: body.email,
            password_hash,
            name: body.name,
        })
        .await?;
    tracing::info!("Registered user {}", user.id);
    let response = token_response(&state, user.id, &user.email)?;
    Ok((StatusCode::CREATED, Json(response)))
}

async fn login(
    State(state): State<Arc<AppState>>,
    ApiJson(body): ApiJson<LoginRequest>,
) -> ApiResult<Json<TokenResponse>> {
    let user = state
        .user_service
        .find_by_email(&normalize_email(&body.email))?
        .ok_or(AuthError::InvalidCredentials)?;
    state
        .auth
        .verify_password(&user.password_hash, &body.password)?;
    Ok(Json(token_response(&state, user.id, &user.email)?))
}

async fn get_profile(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<AuthUser>,
) -> ApiResult<Json<UserProfile>> {
    let profile: UserProfile = state.user_service.get_user(user.id)?.into();
    Ok(Json(profile))
}

async fn update_profile(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<AuthUser>,
    ApiJson(body): ApiJson<UpdateProfileRequest>,
) -> ApiResult<Json<UserProfile>> {
    let updated = state.user_service.update_name(user.id, body.name).await?;
    Ok(Json(updated.into()))
}

async fn change_password(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<AuthUser>,
    ApiJson(body): ApiJson<ChangePasswordRequest>,
) -> ApiResult<StatusCode> {
    require_password(&body.new_password, "newPassword")?;
    let stored = state.user_service.get_user(user.id)?;
    state
        .auth
        .verify_password(&stored.password_hash, &body.old_password)?;
    let password_hash = state.auth.hash_password(&body.new_password)?;
    state
        .user_service
        .update_password_hash(user.id, password_hash)
        .await?;
    Ok(StatusCode::NO_CONTENT)
}

pub fn public_router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/register", post(register))
        .route("/login", post(login))
}

pub fn protected_router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/profile", get(get_profile).put(update_profile))
        .route("/password", put(change_password))
}
