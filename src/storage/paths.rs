// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Taskdesk

//! Path constants and utilities for the JSON storage layout.

use std::path::{Path, PathBuf};

/// Base directory for all persistent storage.
pub const DATA_ROOT: &str = "/data";

/// Storage path utilities for the data directory.
#[derive(Debug, Clone)]
pub struct StoragePaths {
    root: PathBuf,
}

impl Default for StoragePaths {
    fn default() -> Self {
        Self::new(DATA_ROOT)
    }
}

impl StoragePaths {
    /// Create a new StoragePaths with a custom root (useful for testing).
    pub fn new(root: impl AsRef<Path>) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
        }
    }

    /// Root directory for all data.
    pub fn root(&self) -> &Path {
        &self.root
    }

    // ========== User Paths ==========

    /// Directory containing all user records.
    pub fn users_dir(&self) -> PathBuf {
        self.root.join("users")
    }

    /// Path to a specific user record.
    pub fn user(&self, user_id: &str) -> PathBuf {
        self.users_dir().join(format!("{user_id}.json"))
    }

    // ========== Task Paths ==========

    /// Directory containing all tasks.
    pub fn tasks_dir(&self) -> PathBuf {
        self.root.join("tasks")
    }

    /// Path to a specific task file.
    pub fn task(&self, task_id: &str) -> PathBuf {
        self.tasks_dir().join(format!("{task_id}.json"))
    }

    // ========== Document Paths ==========

    /// Directory containing all documents.
    pub fn documents_dir(&self) -> PathBuf {
        self.root.join("documents")
    }

    /// Path to a specific document file.
    pub fn document(&self, document_id: &str) -> PathBuf {
        self.documents_dir().join(format!("{document_id}.json"))
    }

    // ========== Recipient Paths ==========

    /// Directory containing all recipients.
    pub fn recipients_dir(&self) -> PathBuf {
        self.root.join("recipients")
    }

    /// Path to a specific recipient file.
    pub fn recipient(&self, recipient_id: &str) -> PathBuf {
        self.recipients_dir().join(format!("{recipient_id}.json"))
    }

    // ========== Attachment Paths ==========

    /// Directory containing attachment metadata.
    pub fn attachments_dir(&self) -> PathBuf {
        self.root.join("attachments")
    }

    /// Path to a specific attachment metadata file.
    pub fn attachment(&self, attachment_id: &str) -> PathBuf {
        self.attachments_dir().join(format!("{attachment_id}.json"))
    }

    /// Directory containing attachment blobs.
    pub fn blobs_dir(&self) -> PathBuf {
        self.root.join("blobs")
    }

    /// Path to the stored blob for an attachment.
    pub fn blob(&self, attachment_id: &str) -> PathBuf {
        self.blobs_dir().join(format!("{attachment_id}.bin"))
    }
}
