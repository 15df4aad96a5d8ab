// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Taskdesk

use axum::{extract::State, http::StatusCode, Json};

use crate::{
    auth::{Auth, AuthService},
    error::ApiError,
    models::{AuthSession, LoginRequest, RegisterRequest, User},
    state::AppState,
};

#[utoipa::path(
    post,
    path = "/v1/auth/register",
    request_body = RegisterRequest,
    tag = "Auth",
    responses(
        (status = 201, body = AuthSession),
        (status = 400, description = "Missing or invalid credentials"),
        (status = 409, description = "Email already registered")
    )
)]
pub async fn register(
    State(state): State<AppState>,
    Json(request): Json<RegisterRequest>,
) -> Result<(StatusCode, Json<AuthSession>), ApiError> {
    let session = AuthService::new(&state.storage, &state.tokens).register(request)?;
    Ok((StatusCode::CREATED, Json(session)))
}

#[utoipa::path(
    post,
    path = "/v1/auth/login",
    request_body = LoginRequest,
    tag = "Auth",
    responses(
        (status = 200, body = AuthSession),
        (status = 401, description = "Invalid email or password")
    )
)]
pub async fn login(
    State(state): State<AppState>,
    Json(request): Json<LoginRequest>,
) -> Result<Json<AuthSession>, ApiError> {
    let session = AuthService::new(&state.storage, &state.tokens).login(request)?;
    Ok(Json(session))
}

#[utoipa::path(
    get,
    path = "/v1/auth/me",
    tag = "Auth",
    responses(
        (status = 200, body = User),
        (status = 401, description = "Missing or invalid token")
    )
)]
pub async fn me(
    State(state): State<AppState>,
    Auth(user): Auth,
) -> Result<Json<User>, ApiError> {
    let identity = AuthService::new(&state.storage, &state.tokens).identity(&user.user_id.0)?;
    Ok(Json(identity))
}
