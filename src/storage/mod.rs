// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Taskdesk

//! # Storage Module
//!
//! Persistent storage as plain JSON files under the data directory.
//!
//! ## Storage Layout
//!
//! ```text
//! /data/
//!   users/{user_id}.json           # Credential records (incl. password hash)
//!   tasks/{task_id}.json
//!   documents/{document_id}.json
//!   recipients/{recipient_id}.json
//!   attachments/{attachment_id}.json
//!   blobs/{attachment_id}.bin      # Attachment file bytes
//! ```
//!
//! Every resource record carries its `owner_user_id`, and every repository
//! operation filters by it (see [`ownership`]).

pub mod json_fs;
pub mod ownership;
pub mod paths;
pub mod repository;

pub use json_fs::{JsonStorage, StorageError, StorageResult};
pub use ownership::{OwnedResource, OwnershipCheck};
pub use paths::StoragePaths;
pub use repository::{
    normalize_email, AttachmentRepository, DocumentRepository, RecipientRepository,
    StoredAttachment, StoredDocument, StoredRecipient, StoredTask, StoredUser, TaskRepository,
    UserRepository,
};
