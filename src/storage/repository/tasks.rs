// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Taskdesk

//! Task repository.
//!
//! Each task is a JSON file under `tasks/`, stamped with its owner. Every
//! read and mutation is scoped by owner; deleting archives the task instead
//! of removing the row.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::{CreateTaskRequest, Task, TaskPriority, TaskStatus, UpdateTaskRequest};

use super::super::{JsonStorage, OwnedResource, OwnershipCheck, StorageError, StorageResult};

/// Task record on disk.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoredTask {
    pub id: String,
    /// Owner user ID; the scoping key for every operation.
    pub owner_user_id: String,
    pub title: String,
    pub description: String,
    pub priority: TaskPriority,
    pub status: TaskStatus,
    pub due_date: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub completed_at: Option<DateTime<Utc>>,
}

impl OwnedResource for StoredTask {
    fn owner_user_id(&self) -> &str {
        &self.owner_user_id
    }

    fn resource_kind() -> &'static str {
        "Task"
    }
}

impl From<StoredTask> for Task {
    fn from(stored: StoredTask) -> Self {
        Task {
            id: stored.id,
            title: stored.title,
            description: stored.description,
            priority: stored.priority,
            status: stored.status,
            due_date: stored.due_date,
            created_at: stored.created_at,
            completed_at: stored.completed_at,
        }
    }
}

/// Repository for task operations.
pub struct TaskRepository<'a> {
    storage: &'a JsonStorage,
}

impl<'a> TaskRepository<'a> {
    pub fn new(storage: &'a JsonStorage) -> Self {
        Self { storage }
    }

    fn load(&self, task_id: &str) -> StorageResult<StoredTask> {
        let path = self.storage.paths().task(task_id);
        if !self.storage.exists(&path) {
            return Err(StorageError::NotFound("Task".to_string()));
        }
        self.storage.read_json(path)
    }

    /// Get a task owned by `owner_user_id`.
    pub fn get(&self, owner_user_id: &str, task_id: &str) -> StorageResult<StoredTask> {
        self.load(task_id).owned_by(owner_user_id)
    }

    /// Create a task for `owner_user_id`.
    pub fn create(
        &self,
        owner_user_id: &str,
        request: CreateTaskRequest,
    ) -> StorageResult<StoredTask> {
        let task = StoredTask {
            id: Uuid::new_v4().to_string(),
            owner_user_id: owner_user_id.to_string(),
            title: request.title,
            description: request.description,
            priority: request.priority,
            status: TaskStatus::Active,
            due_date: request.due_date,
            created_at: Utc::now(),
            completed_at: None,
        };

        self.storage
            .write_json(self.storage.paths().task(&task.id), &task)?;
        Ok(task)
    }

    /// List all tasks owned by a user, newest first.
    pub fn list_by_owner(&self, owner_user_id: &str) -> StorageResult<Vec<StoredTask>> {
        let ids = self
            .storage
            .list_files(self.storage.paths().tasks_dir(), "json")?;

        let mut tasks = Vec::new();
        for id in ids {
            if let Ok(task) = self.load(&id) {
                if task.owner_user_id == owner_user_id {
                    tasks.push(task);
                }
            }
        }

        tasks.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(tasks)
    }

    /// Apply a partial update to a task owned by `owner_user_id`.
    ///
    /// Transitioning to `completed` stamps `completed_at`; back to `active`
    /// clears it.
    pub fn update(
        &self,
        owner_user_id: &str,
        task_id: &str,
        request: UpdateTaskRequest,
    ) -> StorageResult<StoredTask> {
        let mut task = self.get(owner_user_id, task_id)?;

        if let Some(title) = request.title {
            task.title = title;
        }
        if let Some(description) = request.description {
            task.description = description;
        }
        if let Some(priority) = request.priority {
            task.priority = priority;
        }
        if let Some(status) = request.status {
            task.status = status;
            match status {
                TaskStatus::Completed => task.completed_at = Some(Utc::now()),
                TaskStatus::Active => task.completed_at = None,
                TaskStatus::Archived => {}
            }
        }
        if let Some(due_date) = request.due_date {
            task.due_date = due_date;
        }

        self.storage
            .write_json(self.storage.paths().task(&task.id), &task)?;
        Ok(task)
    }

    /// Archive a task owned by `owner_user_id` (soft delete).
    pub fn archive(&self, owner_user_id: &str, task_id: &str) -> StorageResult<()> {
        let mut task = self.get(owner_user_id, task_id)?;
        task.status = TaskStatus::Archived;
        self.storage
            .write_json(self.storage.paths().task(&task.id), &task)
    }
}
