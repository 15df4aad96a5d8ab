// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Taskdesk

use axum::{
    extract::{Path, Query, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use base64ct::{Base64, Encoding};
use serde::Deserialize;
use utoipa::IntoParams;

use crate::{
    auth::Auth,
    error::ApiError,
    models::{Attachment, UploadAttachmentRequest},
    state::AppState,
    storage::{AttachmentRepository, TaskRepository},
};

#[derive(Deserialize, IntoParams)]
pub struct AttachmentQuery {
    /// Task whose attachments to list.
    pub task_id: String,
}

#[utoipa::path(
    get,
    path = "/v1/attachments",
    params(AttachmentQuery),
    tag = "Attachments",
    responses((status = 200, body = [Attachment]), (status = 401))
)]
pub async fn list_attachments(
    State(state): State<AppState>,
    Auth(user): Auth,
    Query(params): Query<AttachmentQuery>,
) -> Result<Json<Vec<Attachment>>, ApiError> {
    let attachments =
        AttachmentRepository::new(&state.storage).list_by_task(&user.user_id.0, &params.task_id)?;
    Ok(Json(attachments.into_iter().map(Attachment::from).collect()))
}

#[utoipa::path(
    post,
    path = "/v1/attachments",
    request_body = UploadAttachmentRequest,
    tag = "Attachments",
    responses(
        (status = 201, body = Attachment),
        (status = 400, description = "Invalid base64 payload"),
        (status = 401),
        (status = 404, description = "Task not found")
    )
)]
pub async fn upload_attachment(
    State(state): State<AppState>,
    Auth(user): Auth,
    Json(request): Json<UploadAttachmentRequest>,
) -> Result<(StatusCode, Json<Attachment>), ApiError> {
    // The task must exist and belong to the caller before any bytes land.
    TaskRepository::new(&state.storage).get(&user.user_id.0, &request.task_id)?;

    let data = Base64::decode_vec(&request.file_data)
        .map_err(|_| ApiError::bad_request("Invalid file data"))?;

    let attachment = AttachmentRepository::new(&state.storage).create(
        &user.user_id.0,
        &request.task_id,
        &request.file_name,
        &request.content_type,
        &data,
    )?;
    Ok((StatusCode::CREATED, Json(attachment.into())))
}

#[utoipa::path(
    get,
    path = "/v1/attachments/{attachment_id}",
    params(("attachment_id" = String, Path, description = "Attachment identifier")),
    tag = "Attachments",
    responses((status = 200, body = Attachment), (status = 401), (status = 404))
)]
pub async fn get_attachment(
    State(state): State<AppState>,
    Auth(user): Auth,
    Path(attachment_id): Path<String>,
) -> Result<Json<Attachment>, ApiError> {
    let attachment =
        AttachmentRepository::new(&state.storage).get(&user.user_id.0, &attachment_id)?;
    Ok(Json(attachment.into()))
}

#[utoipa::path(
    get,
    path = "/v1/attachments/{attachment_id}/data",
    params(("attachment_id" = String, Path, description = "Attachment identifier")),
    tag = "Attachments",
    responses(
        (status = 200, description = "Raw file bytes"),
        (status = 401),
        (status = 404)
    )
)]
pub async fn download_attachment(
    State(state): State<AppState>,
    Auth(user): Auth,
    Path(attachment_id): Path<String>,
) -> Result<Response, ApiError> {
    let (attachment, data) =
        AttachmentRepository::new(&state.storage).read_blob(&user.user_id.0, &attachment_id)?;

    let headers = [
        (header::CONTENT_TYPE, attachment.content_type.clone()),
        (
            header::CONTENT_DISPOSITION,
            format!("attachment; filename=\"{}\"", attachment.file_name),
        ),
    ];
    Ok((headers, data).into_response())
}

#[utoipa::path(
    delete,
    path = "/v1/attachments/{attachment_id}",
    params(("attachment_id" = String, Path, description = "Attachment identifier")),
    tag = "Attachments",
    responses((status = 204), (status = 401), (status = 404))
)]
pub async fn delete_attachment(
    State(state): State<AppState>,
    Auth(user): Auth,
    Path(attachment_id): Path<String>,
) -> Result<StatusCode, ApiError> {
    AttachmentRepository::new(&state.storage).delete(&user.user_id.0, &attachment_id)?;
    Ok(StatusCode::NO_CONTENT)
}
