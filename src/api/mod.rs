// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Taskdesk

use axum::{
    http::HeaderName,
    routing::{get, post},
    Router,
};
use tower_http::{
    cors::CorsLayer,
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    trace::TraceLayer,
};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::{
    models::{
        Attachment, AuthSession, CreateDocumentRequest, CreateRecipientRequest, CreateTaskRequest,
        Document, LoginRequest, Recipient, RegisterRequest, Task, UpdateDocumentRequest,
        UpdateRecipientRequest, UpdateTaskRequest, UploadAttachmentRequest, User,
    },
    state::AppState,
};

pub mod attachments;
pub mod auth;
pub mod documents;
pub mod health;
pub mod recipients;
pub mod tasks;

const REQUEST_ID_HEADER: HeaderName = HeaderName::from_static("x-request-id");

pub fn router(state: AppState) -> Router {
    let v1_routes = Router::new()
        .route("/auth/register", post(auth::register))
        .route("/auth/login", post(auth::login))
        .route("/auth/me", get(auth::me))
        .route("/tasks", get(tasks::list_tasks).post(tasks::create_task))
        .route(
            "/tasks/{task_id}",
            get(tasks::get_task)
                .put(tasks::update_task)
                .delete(tasks::delete_task),
        )
        .route(
            "/documents",
            get(documents::list_documents).post(documents::create_document),
        )
        .route(
            "/documents/{document_id}",
            get(documents::get_document)
                .put(documents::update_document)
                .delete(documents::delete_document),
        )
        .route(
            "/recipients",
            get(recipients::list_recipients).post(recipients::create_recipient),
        )
        .route(
            "/recipients/{recipient_id}",
            get(recipients::get_recipient)
                .put(recipients::update_recipient)
                .delete(recipients::delete_recipient),
        )
        .route(
            "/attachments",
            get(attachments::list_attachments).post(attachments::upload_attachment),
        )
        .route(
            "/attachments/{attachment_id}",
            get(attachments::get_attachment).delete(attachments::delete_attachment),
        )
        .route(
            "/attachments/{attachment_id}/data",
            get(attachments::download_attachment),
        );

    Router::new()
        .nest("/v1", v1_routes)
        .route("/health", get(health::health))
        .route("/health/live", get(health::liveness))
        .route("/health/ready", get(health::readiness))
        .with_state(state)
        .merge(SwaggerUi::new("/docs").url("/api-doc/openapi.json", ApiDoc::openapi()))
        .layer(CorsLayer::permissive())
        .layer(PropagateRequestIdLayer::new(REQUEST_ID_HEADER))
        .layer(TraceLayer::new_for_http())
        .layer(SetRequestIdLayer::new(REQUEST_ID_HEADER, MakeRequestUuid))
}

#[derive(OpenApi)]
#[openapi(
    paths(
        auth::register,
        auth::login,
        auth::me,
        tasks::list_tasks,
        tasks::create_task,
        tasks::get_task,
        tasks::update_task,
        tasks::delete_task,
        documents::list_documents,
        documents::create_document,
        documents::get_document,
        documents::update_document,
        documents::delete_document,
        recipients::list_recipients,
        recipients::create_recipient,
        recipients::get_recipient,
        recipients::update_recipient,
        recipients::delete_recipient,
        attachments::list_attachments,
        attachments::upload_attachment,
        attachments::get_attachment,
        attachments::download_attachment,
        attachments::delete_attachment,
        health::health,
        health::liveness,
        health::readiness
    ),
    components(
        schemas(
            User,
            AuthSession,
            RegisterRequest,
            LoginRequest,
            Task,
            CreateTaskRequest,
            UpdateTaskRequest,
            Document,
            CreateDocumentRequest,
            UpdateDocumentRequest,
            Recipient,
            CreateRecipientRequest,
            UpdateRecipientRequest,
            Attachment,
            UploadAttachmentRequest
        )
    ),
    tags(
        (name = "Auth", description = "Registration, login, and identity"),
        (name = "Tasks", description = "Per-user task management"),
        (name = "Documents", description = "Per-user document management"),
        (name = "Recipients", description = "Per-user address book"),
        (name = "Attachments", description = "Task file attachments"),
        (name = "Health", description = "Service health")
    )
)]
struct ApiDoc;
