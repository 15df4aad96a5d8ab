// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Taskdesk

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use crate::{
    auth::Auth,
    error::ApiError,
    models::{CreateRecipientRequest, Recipient, UpdateRecipientRequest},
    state::AppState,
    storage::RecipientRepository,
};

#[utoipa::path(
    get,
    path = "/v1/recipients",
    tag = "Recipients",
    responses((status = 200, body = [Recipient]), (status = 401))
)]
pub async fn list_recipients(
    State(state): State<AppState>,
    Auth(user): Auth,
) -> Result<Json<Vec<Recipient>>, ApiError> {
    let recipients = RecipientRepository::new(&state.storage).list_by_owner(&user.user_id.0)?;
    Ok(Json(recipients.into_iter().map(Recipient::from).collect()))
}

#[utoipa::path(
    post,
    path = "/v1/recipients",
    request_body = CreateRecipientRequest,
    tag = "Recipients",
    responses(
        (status = 201, body = Recipient),
        (status = 400, description = "Full name is required"),
        (status = 401)
    )
)]
pub async fn create_recipient(
    State(state): State<AppState>,
    Auth(user): Auth,
    Json(request): Json<CreateRecipientRequest>,
) -> Result<(StatusCode, Json<Recipient>), ApiError> {
    if request.full_name.trim().is_empty() {
        return Err(ApiError::bad_request("Full name is required"));
    }
    let recipient = RecipientRepository::new(&state.storage).create(&user.user_id.0, request)?;
    Ok((StatusCode::CREATED, Json(recipient.into())))
}

#[utoipa::path(
    get,
    path = "/v1/recipients/{recipient_id}",
    params(("recipient_id" = String, Path, description = "Recipient identifier")),
    tag = "Recipients",
    responses((status = 200, body = Recipient), (status = 401), (status = 404))
)]
pub async fn get_recipient(
    State(state): State<AppState>,
    Auth(user): Auth,
    Path(recipient_id): Path<String>,
) -> Result<Json<Recipient>, ApiError> {
    let recipient = RecipientRepository::new(&state.storage).get(&user.user_id.0, &recipient_id)?;
    Ok(Json(recipient.into()))
}

#[utoipa::path(
    put,
    path = "/v1/recipients/{recipient_id}",
    params(("recipient_id" = String, Path, description = "Recipient identifier")),
    request_body = UpdateRecipientRequest,
    tag = "Recipients",
    responses((status = 200, body = Recipient), (status = 401), (status = 404))
)]
pub async fn update_recipient(
    State(state): State<AppState>,
    Auth(user): Auth,
    Path(recipient_id): Path<String>,
    Json(request): Json<UpdateRecipientRequest>,
) -> Result<Json<Recipient>, ApiError> {
    if let Some(full_name) = &request.full_name {
        if full_name.trim().is_empty() {
            return Err(ApiError::bad_request("Full name is required"));
        }
    }
    let recipient =
        RecipientRepository::new(&state.storage).update(&user.user_id.0, &recipient_id, request)?;
    Ok(Json(recipient.into()))
}

#[utoipa::path(
    delete,
    path = "/v1/recipients/{recipient_id}",
    params(("recipient_id" = String, Path, description = "Recipient identifier")),
    tag = "Recipients",
    responses((status = 204), (status = 401), (status = 404))
)]
pub async fn delete_recipient(
    State(state): State<AppState>,
    Auth(user): Auth,
    Path(recipient_id): Path<String>,
) -> Result<StatusCode, ApiError> {
    RecipientRepository::new(&state.storage).delete(&user.user_id.0, &recipient_id)?;
    Ok(StatusCode::NO_CONTENT)
}
