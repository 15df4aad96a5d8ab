// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Taskdesk

use axum::{extract::State, http::StatusCode, Json};
use serde_json::{json, Value};

use crate::state::AppState;

/// Liveness plus a storage write probe. Unauthenticated.
#[utoipa::path(
    get,
    path = "/health",
    tag = "Health",
    responses(
        (status = 200, description = "Service is healthy"),
        (status = 503, description = "Storage probe failed")
    )
)]
pub async fn health(State(state): State<AppState>) -> (StatusCode, Json<Value>) {
    match state.storage.health_check() {
        Ok(()) => (StatusCode::OK, Json(json!({ "status": "healthy" }))),
        Err(e) => {
            tracing::error!(error = %e, "storage health check failed");
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(json!({ "status": "unhealthy" })),
            )
        }
    }
}

/// Liveness only: the process is up and serving.
#[utoipa::path(
    get,
    path = "/health/live",
    tag = "Health",
    responses((status = 200, description = "Process is alive"))
)]
pub async fn liveness() -> (StatusCode, Json<Value>) {
    (StatusCode::OK, Json(json!({ "status": "alive" })))
}

/// Readiness: storage must accept writes before traffic is routed here.
#[utoipa::path(
    get,
    path = "/health/ready",
    tag = "Health",
    responses(
        (status = 200, description = "Ready for traffic"),
        (status = 503, description = "Storage not ready")
    )
)]
pub async fn readiness(State(state): State<AppState>) -> (StatusCode, Json<Value>) {
    match state.storage.health_check() {
        Ok(()) => (StatusCode::OK, Json(json!({ "status": "ready" }))),
        Err(e) => {
            tracing::warn!(error = %e, "readiness probe failed");
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(json!({ "status": "not ready" })),
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        auth::TokenCodec,
        storage::{JsonStorage, StoragePaths},
    };
    use std::sync::Arc;
    use tempfile::TempDir;

    #[tokio::test]
    async fn healthy_when_storage_initialized() {
        let dir = TempDir::new().unwrap();
        let mut storage = JsonStorage::new(StoragePaths::new(dir.path()));
        storage.initialize().unwrap();
        let state = AppState::new(Arc::new(storage), Arc::new(TokenCodec::new("s")));

        let (status, Json(body)) = health(State(state)).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "healthy");
    }

    #[tokio::test]
    async fn liveness_needs_no_storage() {
        let (status, Json(body)) = liveness().await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "alive");
    }

    #[tokio::test]
    async fn unhealthy_before_initialization() {
        let dir = TempDir::new().unwrap();
        let storage = JsonStorage::new(StoragePaths::new(dir.path()));
        let state = AppState::new(Arc::new(storage), Arc::new(TokenCodec::new("s")));

        let (status, _) = health(State(state)).await;
        assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    }
}
