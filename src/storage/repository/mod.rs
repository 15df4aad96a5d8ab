// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Taskdesk

//! Repository layer providing typed access to JSON storage.
//!
//! Each repository provides CRUD operations for a specific entity type,
//! using the JsonStorage for all file operations. Every method is scoped
//! by the owning user id.

pub mod attachments;
pub mod documents;
pub mod recipients;
pub mod tasks;
pub mod users;

pub use attachments::{AttachmentRepository, StoredAttachment};
pub use documents::{DocumentRepository, StoredDocument};
pub use recipients::{RecipientRepository, StoredRecipient};
pub use tasks::{StoredTask, TaskRepository};
pub use users::{normalize_email, StoredUser, UserRepository};
