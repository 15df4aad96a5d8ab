// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Taskdesk

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;
use utoipa::IntoParams;

use crate::{
    auth::Auth,
    error::ApiError,
    models::{CreateDocumentRequest, Document, DocumentCategory, UpdateDocumentRequest},
    state::AppState,
    storage::DocumentRepository,
};

#[derive(Deserialize, IntoParams)]
pub struct DocumentQuery {
    /// Restrict the listing to one category. Unrecognized values are
    /// ignored rather than rejected.
    pub category: Option<String>,
}

impl DocumentQuery {
    fn category_filter(&self) -> Option<DocumentCategory> {
        self.category.as_deref().and_then(DocumentCategory::parse)
    }
}

#[utoipa::path(
    get,
    path = "/v1/documents",
    params(DocumentQuery),
    tag = "Documents",
    responses((status = 200, body = [Document]), (status = 401))
)]
pub async fn list_documents(
    State(state): State<AppState>,
    Auth(user): Auth,
    Query(params): Query<DocumentQuery>,
) -> Result<Json<Vec<Document>>, ApiError> {
    let documents = DocumentRepository::new(&state.storage)
        .list_by_owner(&user.user_id.0, params.category_filter())?;
    Ok(Json(documents.into_iter().map(Document::from).collect()))
}

#[utoipa::path(
    post,
    path = "/v1/documents",
    request_body = CreateDocumentRequest,
    tag = "Documents",
    responses((status = 201, body = Document), (status = 401))
)]
pub async fn create_document(
    State(state): State<AppState>,
    Auth(user): Auth,
    Json(request): Json<CreateDocumentRequest>,
) -> Result<(StatusCode, Json<Document>), ApiError> {
    let document = DocumentRepository::new(&state.storage).create(&user.user_id.0, request)?;
    Ok((StatusCode::CREATED, Json(document.into())))
}

#[utoipa::path(
    get,
    path = "/v1/documents/{document_id}",
    params(("document_id" = String, Path, description = "Document identifier")),
    tag = "Documents",
    responses((status = 200, body = Document), (status = 401), (status = 404))
)]
pub async fn get_document(
    State(state): State<AppState>,
    Auth(user): Auth,
    Path(document_id): Path<String>,
) -> Result<Json<Document>, ApiError> {
    let document = DocumentRepository::new(&state.storage).get(&user.user_id.0, &document_id)?;
    Ok(Json(document.into()))
}

#[utoipa::path(
    put,
    path = "/v1/documents/{document_id}",
    params(("document_id" = String, Path, description = "Document identifier")),
    request_body = UpdateDocumentRequest,
    tag = "Documents",
    responses((status = 200, body = Document), (status = 401), (status = 404))
)]
pub async fn update_document(
    State(state): State<AppState>,
    Auth(user): Auth,
    Path(document_id): Path<String>,
    Json(request): Json<UpdateDocumentRequest>,
) -> Result<Json<Document>, ApiError> {
    let document =
        DocumentRepository::new(&state.storage).update(&user.user_id.0, &document_id, request)?;
    Ok(Json(document.into()))
}

#[utoipa::path(
    delete,
    path = "/v1/documents/{document_id}",
    params(("document_id" = String, Path, description = "Document identifier")),
    tag = "Documents",
    responses((status = 204), (status = 401), (status = 404))
)]
pub async fn delete_document(
    State(state): State<AppState>,
    Auth(user): Auth,
    Path(document_id): Path<String>,
) -> Result<StatusCode, ApiError> {
    DocumentRepository::new(&state.storage).delete(&user.user_id.0, &document_id)?;
    Ok(StatusCode::NO_CONTENT)
}
