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
    models::{CreateTaskRequest, Task, UpdateTaskRequest},
    state::AppState,
    storage::TaskRepository,
};

#[utoipa::path(
    get,
    path = "/v1/tasks",
    tag = "Tasks",
    responses((status = 200, body = [Task]), (status = 401))
)]
pub async fn list_tasks(
    State(state): State<AppState>,
    Auth(user): Auth,
) -> Result<Json<Vec<Task>>, ApiError> {
    let tasks = TaskRepository::new(&state.storage).list_by_owner(&user.user_id.0)?;
    Ok(Json(tasks.into_iter().map(Task::from).collect()))
}

#[utoipa::path(
    post,
    path = "/v1/tasks",
    request_body = CreateTaskRequest,
    tag = "Tasks",
    responses(
        (status = 201, body = Task),
        (status = 400, description = "Title is required"),
        (status = 401)
    )
)]
pub async fn create_task(
    State(state): State<AppState>,
    Auth(user): Auth,
    Json(request): Json<CreateTaskRequest>,
) -> Result<(StatusCode, Json<Task>), ApiError> {
    if request.title.trim().is_empty() {
        return Err(ApiError::bad_request("Title is required"));
    }
    let task = TaskRepository::new(&state.storage).create(&user.user_id.0, request)?;
    Ok((StatusCode::CREATED, Json(task.into())))
}

#[utoipa::path(
    get,
    path = "/v1/tasks/{task_id}",
    params(("task_id" = String, Path, description = "Task identifier")),
    tag = "Tasks",
    responses((status = 200, body = Task), (status = 401), (status = 404))
)]
pub async fn get_task(
    State(state): State<AppState>,
    Auth(user): Auth,
    Path(task_id): Path<String>,
) -> Result<Json<Task>, ApiError> {
    let task = TaskRepository::new(&state.storage).get(&user.user_id.0, &task_id)?;
    Ok(Json(task.into()))
}

#[utoipa::path(
    put,
    path = "/v1/tasks/{task_id}",
    params(("task_id" = String, Path, description = "Task identifier")),
    request_body = UpdateTaskRequest,
    tag = "Tasks",
    responses(
        (status = 200, body = Task),
        (status = 400, description = "No fields to update"),
        (status = 401),
        (status = 404)
    )
)]
pub async fn update_task(
    State(state): State<AppState>,
    Auth(user): Auth,
    Path(task_id): Path<String>,
    Json(request): Json<UpdateTaskRequest>,
) -> Result<Json<Task>, ApiError> {
    if request.is_empty() {
        return Err(ApiError::bad_request("No fields to update"));
    }
    let task = TaskRepository::new(&state.storage).update(&user.user_id.0, &task_id, request)?;
    Ok(Json(task.into()))
}

#[utoipa::path(
    delete,
    path = "/v1/tasks/{task_id}",
    params(("task_id" = String, Path, description = "Task identifier")),
    tag = "Tasks",
    responses((status = 204), (status = 401), (status = 404))
)]
pub async fn delete_task(
    State(state): State<AppState>,
    Auth(user): Auth,
    Path(task_id): Path<String>,
) -> Result<StatusCode, ApiError> {
    TaskRepository::new(&state.storage).archive(&user.user_id.0, &task_id)?;
    Ok(StatusCode::NO_CONTENT)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        auth::{AuthorizedUser, TokenCodec},
        models::{TaskStatus, UserId},
        storage::{JsonStorage, StoragePaths},
    };
    use std::sync::Arc;
    use tempfile::TempDir;

    fn test_state(dir: &TempDir) -> AppState {
        let mut storage = JsonStorage::new(StoragePaths::new(dir.path()));
        storage.initialize().expect("initialize");
        AppState::new(Arc::new(storage), Arc::new(TokenCodec::new("test-secret")))
    }

    fn as_user(id: &str) -> Auth {
        Auth(AuthorizedUser {
            user_id: UserId(id.to_string()),
        })
    }

    fn create_request(title: &str) -> CreateTaskRequest {
        CreateTaskRequest {
            title: title.to_string(),
            description: String::new(),
            priority: Default::default(),
            due_date: None,
        }
    }

    #[tokio::test]
    async fn create_rejects_blank_title() {
        let dir = TempDir::new().unwrap();
        let state = test_state(&dir);

        let err = create_task(State(state), as_user("u-1"), Json(create_request("   ")))
            .await
            .unwrap_err();
        assert_eq!(err.status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn list_is_scoped_to_the_caller() {
        let dir = TempDir::new().unwrap();
        let state = test_state(&dir);

        create_task(State(state.clone()), as_user("u-1"), Json(create_request("mine")))
            .await
            .unwrap();
        create_task(State(state.clone()), as_user("u-2"), Json(create_request("theirs")))
            .await
            .unwrap();

        let Json(tasks) = list_tasks(State(state), as_user("u-1")).await.unwrap();
        assert_eq!(tasks.len(), 1);
        assert_eq!(tasks[0].title, "mine");
    }

    #[tokio::test]
    async fn foreign_task_reads_as_not_found() {
        let dir = TempDir::new().unwrap();
        let state = test_state(&dir);
        let (_, Json(task)) =
            create_task(State(state.clone()), as_user("u-1"), Json(create_request("mine")))
                .await
                .unwrap();

        let err = get_task(State(state), as_user("u-2"), Path(task.id))
            .await
            .unwrap_err();
        assert_eq!(err.status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn empty_update_is_rejected() {
        let dir = TempDir::new().unwrap();
        let state = test_state(&dir);
        let (_, Json(task)) =
            create_task(State(state.clone()), as_user("u-1"), Json(create_request("mine")))
                .await
                .unwrap();

        let err = update_task(
            State(state),
            as_user("u-1"),
            Path(task.id),
            Json(UpdateTaskRequest::default()),
        )
        .await
        .unwrap_err();
        assert_eq!(err.status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn delete_archives_instead_of_removing() {
        let dir = TempDir::new().unwrap();
        let state = test_state(&dir);
        let (_, Json(task)) =
            create_task(State(state.clone()), as_user("u-1"), Json(create_request("mine")))
                .await
                .unwrap();

        let status = delete_task(State(state.clone()), as_user("u-1"), Path(task.id.clone()))
            .await
            .unwrap();
        assert_eq!(status, StatusCode::NO_CONTENT);

        let Json(archived) = get_task(State(state), as_user("u-1"), Path(task.id))
            .await
            .unwrap();
        assert_eq!(archived.status, TaskStatus::Archived);
    }

    #[tokio::test]
    async fn completing_a_task_stamps_completed_at() {
        let dir = TempDir::new().unwrap();
        let state = test_state(&dir);
        let (_, Json(task)) =
            create_task(State(state.clone()), as_user("u-1"), Json(create_request("mine")))
                .await
                .unwrap();

        let Json(updated) = update_task(
            State(state),
            as_user("u-1"),
            Path(task.id),
            Json(UpdateTaskRequest {
                status: Some(TaskStatus::Completed),
                ..Default::default()
            }),
        )
        .await
        .unwrap();

        assert_eq!(updated.status, TaskStatus::Completed);
        assert!(updated.completed_at.is_some());
    }
}
