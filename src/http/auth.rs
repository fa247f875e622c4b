use axum::{Json, extract::State, http::StatusCode};

use crate::{
    app::{AppState, ServiceError},
    jwt::Claims,
};

#[derive(serde::Deserialize)]
pub struct RegisterPayload {
    username: String,
    password: String,
    favorite_team: Option<String>,
}

#[axum::debug_handler]
pub async fn register(
    State(app_state): State<AppState>,
    Json(payload): Json<RegisterPayload>,
) -> Result<StatusCode, ServiceError> {
    app_state
        .user_service
        .register(&payload.username, &payload.password, payload.favorite_team)?;
    Ok(StatusCode::CREATED)
}

#[derive(serde::Deserialize)]
pub struct LoginPayload {
    username: String,
    password: String,
}

#[derive(serde::Serialize)]
pub struct AuthBody {
    token: String,
}

pub async fn login(
    State(app_state): State<AppState>,
    Json(payload): Json<LoginPayload>,
) -> Result<Json<AuthBody>, ServiceError> {
    let token = app_state
        .user_service
        .login(&payload.username, &payload.password)?;
    Ok(Json(AuthBody { token }))
}

#[derive(serde::Serialize)]
pub struct JsonProfile {
    username: String,
    favorite_team: Option<String>,
}

pub async fn get_profile(
    claims: Claims,
    State(app_state): State<AppState>,
) -> Result<Json<JsonProfile>, ServiceError> {
    let user = app_state.user_service.get_user(&claims.sub)?;
    Ok(Json(JsonProfile {
        username: user.username,
        favorite_team: user.favorite_team,
    }))
}

#[derive(serde::Deserialize)]
pub struct FavoriteTeamPayload {
    favorite_team: String,
}

pub async fn set_favorite_team(
    claims: Claims,
    State(app_state): State<AppState>,
    Json(payload): Json<FavoriteTeamPayload>,
) -> Result<StatusCode, ServiceError> {
    app_state
        .user_service
        .set_favorite_team(&claims.sub, &payload.favorite_team)?;
    Ok(StatusCode::NO_CONTENT)
}
