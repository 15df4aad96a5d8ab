// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Taskdesk

//! User credential repository.
//!
//! Each user record is a JSON file under `users/`. Email uniqueness is
//! enforced here at insert time; all lookups normalize the email first.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::{User, UserId};

use super::super::{JsonStorage, StorageError, StorageResult};

/// User record on disk, including the password hash.
///
/// The hash never crosses the API boundary; convert to [`User`] first.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoredUser {
    pub id: String,
    /// Normalized (trimmed, lower-cased) email.
    pub email: String,
    pub name: String,
    /// bcrypt hash of the password.
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
}

impl From<StoredUser> for User {
    fn from(stored: StoredUser) -> Self {
        User {
            id: UserId(stored.id),
            email: stored.email,
            name: stored.name,
            created_at: stored.created_at,
        }
    }
}

/// Normalize an email for storage and lookup.
pub fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

/// Repository for user credential records.
pub struct UserRepository<'a> {
    storage: &'a JsonStorage,
}

impl<'a> UserRepository<'a> {
    pub fn new(storage: &'a JsonStorage) -> Self {
        Self { storage }
    }

    /// Check if a user record exists.
    pub fn exists(&self, user_id: &str) -> bool {
        self.storage.exists(self.storage.paths().user(user_id))
    }

    /// Get a user by ID.
    pub fn get(&self, user_id: &str) -> StorageResult<StoredUser> {
        let path = self.storage.paths().user(user_id);
        if !self.storage.exists(&path) {
            return Err(StorageError::NotFound("User".to_string()));
        }
        self.storage.read_json(path)
    }

    /// Find a user by normalized email.
    pub fn find_by_email(&self, email: &str) -> StorageResult<Option<StoredUser>> {
        let needle = normalize_email(email);
        let ids = self
            .storage
            .list_files(self.storage.paths().users_dir(), "json")?;

        for id in ids {
            if let Ok(user) = self.get(&id) {
                if user.email == needle {
                    return Ok(Some(user));
                }
            }
        }
        Ok(None)
    }

    /// Insert a new user record.
    ///
    /// # Errors
    /// `StorageError::AlreadyExists` if the id or normalized email is taken.
    pub fn insert(&self, user: &StoredUser) -> StorageResult<()> {
        if self.exists(&user.id) {
            return Err(StorageError::AlreadyExists("User".to_string()));
        }
        if self.find_by_email(&user.email)?.is_some() {
            return Err(StorageError::AlreadyExists("User".to_string()));
        }

        self.storage
            .write_json(self.storage.paths().user(&user.id), user)
    }
}
