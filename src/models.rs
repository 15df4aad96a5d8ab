// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Taskdesk

//! # API Data Models
//!
//! This module defines the request and response data structures used by
//! the REST API. All types derive `Serialize`, `Deserialize`, and `ToSchema`
//! for automatic JSON handling and OpenAPI documentation.
//!
//! ## User ID Type
//!
//! The [`UserId`] newtype wraps the opaque user identifier carried in bearer
//! tokens and stamped onto every owned resource. It provides type safety and
//! clear semantics.
//!
//! ## Model Categories
//!
//! - **Auth**: Registration, login, and session payloads
//! - **Tasks**: Per-user to-do items with priority and status
//! - **Documents**: Per-user text documents grouped by category
//! - **Recipients**: Per-user address-book entries
//! - **Attachments**: File metadata linked to tasks

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use utoipa::ToSchema;

// =============================================================================
// User ID Type
// =============================================================================

/// Opaque user identifier.
///
/// Created at registration and carried verbatim inside bearer tokens. The
/// value is never interpreted, only compared.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct UserId(pub String);

impl std::fmt::Display for UserId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for UserId {
    fn from(value: String) -> Self {
        UserId(value)
    }
}

impl From<&str> for UserId {
    fn from(value: &str) -> Self {
        UserId(value.to_string())
    }
}

impl From<UserId> for String {
    fn from(value: UserId) -> Self {
        value.0
    }
}

// =============================================================================
// Auth Models
// =============================================================================

/// Public user identity, as returned by registration, login, and `/auth/me`.
///
/// The password hash never leaves the storage layer.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq, Eq)]
pub struct User {
    /// Opaque user identifier.
    pub id: UserId,
    /// Normalized (trimmed, lower-cased) email address. Unique.
    pub email: String,
    /// Display name.
    pub name: String,
    /// When the account was created.
    pub created_at: DateTime<Utc>,
}

/// Request to register a new account.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct RegisterRequest {
    /// Email address (will be normalized).
    pub email: String,
    /// Password, minimum 6 characters.
    pub password: String,
    /// Display name.
    #[serde(default)]
    pub name: String,
}

/// Request to log in with existing credentials.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// A freshly minted session: bearer token plus the identity it proves.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct AuthSession {
    /// Bearer token in `<user_id>:<unix_ts>:<hex_signature>` format.
    pub token: String,
    /// The authenticated identity.
    pub user: User,
}

// =============================================================================
// Task Models
// =============================================================================

/// Task priority level.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, ToSchema, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum TaskPriority {
    Low,
    Medium,
    High,
}

impl Default for TaskPriority {
    fn default() -> Self {
        TaskPriority::Medium
    }
}

/// Task lifecycle status.
///
/// Deleting a task archives it rather than removing the row.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, ToSchema, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum TaskStatus {
    Active,
    Completed,
    Archived,
}

impl Default for TaskStatus {
    fn default() -> Self {
        TaskStatus::Active
    }
}

/// A task owned by a single user.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct Task {
    /// Unique task identifier.
    pub id: String,
    pub title: String,
    pub description: String,
    pub priority: TaskPriority,
    pub status: TaskStatus,
    /// Optional due date.
    pub due_date: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    /// Set when the task transitions to `completed`, cleared on `active`.
    pub completed_at: Option<DateTime<Utc>>,
}

/// Request to create a task.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CreateTaskRequest {
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub priority: TaskPriority,
    #[serde(default)]
    pub due_date: Option<DateTime<Utc>>,
}

/// Partial task update. Absent fields are left untouched.
///
/// `due_date` distinguishes "absent" (keep) from explicit `null` (clear)
/// via the double-`Option` pattern.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct UpdateTaskRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority: Option<TaskPriority>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<TaskStatus>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "double_option"
    )]
    pub due_date: Option<Option<DateTime<Utc>>>,
}

impl UpdateTaskRequest {
    /// True when no field was supplied at all.
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.description.is_none()
            && self.priority.is_none()
            && self.status.is_none()
            && self.due_date.is_none()
    }
}

/// Deserialize a present-but-possibly-null field into `Some(Option<T>)`.
fn double_option<'de, T, D>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    Deserialize::deserialize(deserializer).map(Some)
}

// =============================================================================
// Document Models
// =============================================================================

/// Document category.
///
/// Unknown categories supplied by clients coerce to `Other` rather than
/// failing deserialization.
#[derive(Debug, Clone, Copy, Serialize, ToSchema, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum DocumentCategory {
    Letters,
    Internal,
    Other,
}

impl DocumentCategory {
    /// Strict parse; `None` for anything unrecognized. Used for list
    /// filters, where an unknown value means "no filter" instead of an
    /// empty result set.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "letters" => Some(DocumentCategory::Letters),
            "internal" => Some(DocumentCategory::Internal),
            "other" => Some(DocumentCategory::Other),
            _ => None,
        }
    }
}

impl<'de> Deserialize<'de> for DocumentCategory {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        Ok(Self::parse(&raw).unwrap_or(DocumentCategory::Other))
    }
}

impl Default for DocumentCategory {
    fn default() -> Self {
        DocumentCategory::Other
    }
}

/// A text document owned by a single user.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct Document {
    pub id: String,
    pub title: String,
    pub content: String,
    pub category: DocumentCategory,
    pub created_at: DateTime<Utc>,
    /// Stamped on every update.
    pub updated_at: DateTime<Utc>,
}

/// Request to create a document.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CreateDocumentRequest {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub category: DocumentCategory,
}

/// Partial document update. Absent fields are left untouched.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct UpdateDocumentRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<DocumentCategory>,
}

// =============================================================================
// Recipient Models
// =============================================================================

/// An address-book entry owned by a single user.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct Recipient {
    pub id: String,
    pub full_name: String,
    pub organization: String,
    pub position: String,
    pub address: String,
    /// Zero or more email addresses; blank entries are dropped on write.
    pub emails: Vec<String>,
    pub created_at: DateTime<Utc>,
}

/// Request to create a recipient. `full_name` is required.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CreateRecipientRequest {
    pub full_name: String,
    #[serde(default)]
    pub organization: String,
    #[serde(default)]
    pub position: String,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub emails: Vec<String>,
}

/// Partial recipient update. Absent fields are left untouched.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct UpdateRecipientRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub full_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub organization: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub emails: Option<Vec<String>>,
}

// =============================================================================
// Attachment Models
// =============================================================================

/// Metadata for a file attached to a task.
///
/// The blob itself is stored separately and served from the download
/// endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq, Eq)]
pub struct Attachment {
    pub id: String,
    /// Task this file belongs to.
    pub task_id: String,
    /// Sanitized file name (path separators replaced).
    pub file_name: String,
    /// Decoded blob size in bytes.
    pub file_size: u64,
    pub content_type: String,
    pub created_at: DateTime<Utc>,
}

/// Request to upload a file attachment.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct UploadAttachmentRequest {
    pub task_id: String,
    #[serde(default = "default_file_name")]
    pub file_name: String,
    #[serde(default = "default_content_type")]
    pub content_type: String,
    /// Base64-encoded file contents.
    pub file_data: String,
}

fn default_file_name() -> String {
    "file".to_string()
}

fn default_content_type() -> String {
    "application/octet-stream".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_id_from_and_into_string() {
        let from_str: UserId = "abc".into();
        assert_eq!(from_str.0, "abc");

        let from_string: UserId = String::from("def").into();
        assert_eq!(from_string.0, "def");

        let to_string: String = UserId("ghi".into()).into();
        assert_eq!(to_string, "ghi");
    }

    #[test]
    fn task_priority_and_status_default() {
        assert_eq!(TaskPriority::default(), TaskPriority::Medium);
        assert_eq!(TaskStatus::default(), TaskStatus::Active);
        assert_eq!(DocumentCategory::default(), DocumentCategory::Other);
    }

    #[test]
    fn update_task_distinguishes_absent_and_null_due_date() {
        let absent: UpdateTaskRequest = serde_json::from_str(r#"{"title":"t"}"#).unwrap();
        assert!(absent.due_date.is_none());

        let cleared: UpdateTaskRequest = serde_json::from_str(r#"{"due_date":null}"#).unwrap();
        assert_eq!(cleared.due_date, Some(None));

        let set: UpdateTaskRequest =
            serde_json::from_str(r#"{"due_date":"2026-01-15T00:00:00Z"}"#).unwrap();
        assert!(matches!(set.due_date, Some(Some(_))));
    }

    #[test]
    fn empty_update_detected() {
        let empty: UpdateTaskRequest = serde_json::from_str("{}").unwrap();
        assert!(empty.is_empty());

        let non_empty: UpdateTaskRequest = serde_json::from_str(r#"{"title":"x"}"#).unwrap();
        assert!(!non_empty.is_empty());
    }

    #[test]
    fn unknown_document_category_coerces_to_other() {
        let unknown: DocumentCategory = serde_json::from_str(r#""contracts""#).unwrap();
        assert_eq!(unknown, DocumentCategory::Other);

        let known: DocumentCategory = serde_json::from_str(r#""letters""#).unwrap();
        assert_eq!(known, DocumentCategory::Letters);

        let request: CreateDocumentRequest =
            serde_json::from_str(r#"{"title":"t","content":"c","category":"contracts"}"#).unwrap();
        assert_eq!(request.category, DocumentCategory::Other);
    }

    #[test]
    fn strict_category_parse_rejects_unknown() {
        assert_eq!(
            DocumentCategory::parse("internal"),
            Some(DocumentCategory::Internal)
        );
        assert_eq!(DocumentCategory::parse("contracts"), None);
        assert_eq!(DocumentCategory::parse("Letters"), None);
    }

    #[test]
    fn enums_serialize_lowercase() {
        assert_eq!(
            serde_json::to_string(&TaskPriority::High).unwrap(),
            r#""high""#
        );
        assert_eq!(
            serde_json::to_string(&TaskStatus::Completed).unwrap(),
            r#""completed""#
        );
        assert_eq!(
            serde_json::to_string(&DocumentCategory::Letters).unwrap(),
            r#""letters""#
        );
    }
}
