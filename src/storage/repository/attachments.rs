// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Taskdesk

//! Attachment repository.
//!
//! Metadata lives as JSON under `attachments/`; the file bytes live as raw
//! blobs under `blobs/`. Creating writes both; deleting removes both.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::Attachment;

use super::super::{JsonStorage, OwnedResource, OwnershipCheck, StorageError, StorageResult};

/// Attachment metadata on disk.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoredAttachment {
    pub id: String,
    /// Owner user ID; the scoping key for every operation.
    pub owner_user_id: String,
    pub task_id: String,
    pub file_name: String,
    pub file_size: u64,
    pub content_type: String,
    pub created_at: DateTime<Utc>,
}

impl OwnedResource for StoredAttachment {
    fn owner_user_id(&self) -> &str {
        &self.owner_user_id
    }

    fn resource_kind() -> &'static str {
        "Attachment"
    }
}

impl From<StoredAttachment> for Attachment {
    fn from(stored: StoredAttachment) -> Self {
        Attachment {
            id: stored.id,
            task_id: stored.task_id,
            file_name: stored.file_name,
            file_size: stored.file_size,
            content_type: stored.content_type,
            created_at: stored.created_at,
        }
    }
}

/// Replace path separators so a client-supplied name cannot escape the
/// blob directory or confuse downloads.
pub fn sanitize_file_name(name: &str) -> String {
    name.replace(['/', '\\'], "_")
}

/// Repository for attachment operations.
pub struct AttachmentRepository<'a> {
    storage: &'a JsonStorage,
}

impl<'a> AttachmentRepository<'a> {
    pub fn new(storage: &'a JsonStorage) -> Self {
        Self { storage }
    }

    fn load(&self, attachment_id: &str) -> StorageResult<StoredAttachment> {
        let path = self.storage.paths().attachment(attachment_id);
        if !self.storage.exists(&path) {
            return Err(StorageError::NotFound("Attachment".to_string()));
        }
        self.storage.read_json(path)
    }

    /// Get attachment metadata owned by `owner_user_id`.
    pub fn get(
        &self,
        owner_user_id: &str,
        attachment_id: &str,
    ) -> StorageResult<StoredAttachment> {
        self.load(attachment_id).owned_by(owner_user_id)
    }

    /// Store a new attachment: metadata plus blob bytes.
    pub fn create(
        &self,
        owner_user_id: &str,
        task_id: &str,
        file_name: &str,
        content_type: &str,
        data: &[u8],
    ) -> StorageResult<StoredAttachment> {
        let attachment = StoredAttachment {
            id: Uuid::new_v4().to_string(),
            owner_user_id: owner_user_id.to_string(),
            task_id: task_id.to_string(),
            file_name: sanitize_file_name(file_name),
            file_size: data.len() as u64,
            content_type: content_type.to_string(),
            created_at: Utc::now(),
        };

        self.storage
            .write_raw(self.storage.paths().blob(&attachment.id), data)?;
        self.storage
            .write_json(self.storage.paths().attachment(&attachment.id), &attachment)?;
        Ok(attachment)
    }

    /// List attachments for a task owned by a user, newest first.
    pub fn list_by_task(
        &self,
        owner_user_id: &str,
        task_id: &str,
    ) -> StorageResult<Vec<StoredAttachment>> {
        let ids = self
            .storage
            .list_files(self.storage.paths().attachments_dir(), "json")?;

        let mut attachments = Vec::new();
        for id in ids {
            if let Ok(attachment) = self.load(&id) {
                if attachment.owner_user_id == owner_user_id && attachment.task_id == task_id {
                    attachments.push(attachment);
                }
            }
        }

        attachments.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(attachments)
    }

    /// Read the blob for an attachment owned by `owner_user_id`.
    pub fn read_blob(
        &self,
        owner_user_id: &str,
        attachment_id: &str,
    ) -> StorageResult<(StoredAttachment, Vec<u8>)> {
        let attachment = self.get(owner_user_id, attachment_id)?;
        let data = self.storage.read_raw(self.storage.paths().blob(&attachment.id))?;
        Ok((attachment, data))
    }

    /// Delete an attachment owned by `owner_user_id`: metadata and blob.
    pub fn delete(&self, owner_user_id: &str, attachment_id: &str) -> StorageResult<()> {
        let attachment = self.get(owner_user_id, attachment_id)?;

        self.storage
            .delete(self.storage.paths().attachment(&attachment.id))?;
        // Blob may be gone already if a previous delete half-finished.
        match self.storage.delete(self.storage.paths().blob(&attachment.id)) {
            Ok(()) | Err(StorageError::NotFound(_)) => Ok(()),
            Err(e) => Err(e),
        }
    }
}
