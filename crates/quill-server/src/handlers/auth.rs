use axum::extract::{Json, State};
use axum::http::HeaderMap;
use axum::response::IntoResponse;
use serde::{Deserialize, Serialize};
use serde_json::json;

use quill_auth::{LoginRequest, NewAccount};
use quill_types::{Avatar, UserPublic};

use crate::cookies::{self, REFRESH_COOKIE};
use crate::error::{ApiError, ApiResult};
use crate::extract::CurrentUser;
use crate::response::ApiResponse;
use crate::state::AppState;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct LoginData {
    user: UserPublic,
    access_token: String,
    refresh_token: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RefreshBody {
    #[serde(default)]
    refresh_token: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChangePasswordBody {
    old_password: String,
    new_password: String,
    confirm_password: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateAccountBody {
    display_name: String,
    email: String,
}

#[derive(Debug, Deserialize)]
pub struct UpdateAvatarBody {
    avatar: Avatar,
}

pub async fn register(
    State(state): State<AppState>,
    Json(body): Json<NewAccount>,
) -> ApiResult<ApiResponse<UserPublic>> {
    let user = state.sessions.register(body).await?;
    Ok(ApiResponse::created(user, "user registered successfully"))
}

pub async fn login(
    State(state): State<AppState>,
    Json(body): Json<LoginRequest>,
) -> ApiResult<impl IntoResponse> {
    let outcome = state.sessions.login(body).await?;
    let headers = cookies::session_headers(
        &outcome.tokens,
        state.sessions.token_issuer(),
        state.config.secure_cookies,
    );
    let data = LoginData {
        user: outcome.user,
        access_token: outcome.tokens.access_token,
        refresh_token: outcome.tokens.refresh_token,
    };
    Ok((headers, ApiResponse::ok(data, "user logged in successfully")))
}

/// Rotate the session from the refresh cookie or a body-carried token.
pub async fn refresh_token(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Option<Json<RefreshBody>>,
) -> ApiResult<impl IntoResponse> {
    let token = cookies::read_cookie(&headers, REFRESH_COOKIE)
        .or_else(|| body.and_then(|Json(body)| body.refresh_token))
        .ok_or_else(|| ApiError::Auth("unauthorized request".into()))?;
    let tokens = state.sessions.refresh(&token).await?;
    let headers = cookies::session_headers(
        &tokens,
        state.sessions.token_issuer(),
        state.config.secure_cookies,
    );
    Ok((headers, ApiResponse::ok(tokens, "session refreshed successfully")))
}

pub async fn logout(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
) -> ApiResult<impl IntoResponse> {
    state.sessions.logout(&user.id).await?;
    Ok((
        cookies::clear_session_headers(state.config.secure_cookies),
        ApiResponse::ok(json!({}), "user logged out successfully"),
    ))
}

pub async fn change_password(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Json(body): Json<ChangePasswordBody>,
) -> ApiResult<ApiResponse<serde_json::Value>> {
    state
        .sessions
        .change_password(
            &user.id,
            &body.old_password,
            &body.new_password,
            &body.confirm_password,
        )
        .await?;
    Ok(ApiResponse::ok(json!({}), "password changed successfully"))
}

pub async fn current_user(CurrentUser(user): CurrentUser) -> ApiResponse<UserPublic> {
    ApiResponse::ok(user, "current user fetched successfully")
}

pub async fn update_account(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Json(body): Json<UpdateAccountBody>,
) -> ApiResult<ApiResponse<UserPublic>> {
    let updated = state
        .sessions
        .update_account(&user.id, &body.display_name, &body.email)
        .await?;
    Ok(ApiResponse::ok(updated, "account details updated successfully"))
}

pub async fn update_avatar(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Json(body): Json<UpdateAvatarBody>,
) -> ApiResult<ApiResponse<UserPublic>> {
    let updated = state.sessions.update_avatar(&user.id, body.avatar).await?;
    Ok(ApiResponse::ok(updated, "avatar updated successfully"))
}
