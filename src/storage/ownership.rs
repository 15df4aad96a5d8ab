// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Taskdesk

//! Ownership enforcement for all storage operations.
//!
//! Every resource row carries its owner's user id, and every read, update,
//! or delete filters by it. A resource owned by someone else is reported as
//! not found, never as forbidden, so existence is not revealed to
//! non-owners.

use super::{StorageError, StorageResult};

/// Trait for resources that have an owner.
pub trait OwnedResource {
    /// Get the owner's user ID.
    fn owner_user_id(&self) -> &str;

    /// Human-readable resource kind for error messages ("Task", "Document").
    fn resource_kind() -> &'static str;
}

/// Extension trait gating access to a loaded resource by owner.
pub trait OwnershipCheck<T> {
    /// Return the resource if it exists and is owned by `user_id`,
    /// `StorageError::NotFound` otherwise.
    fn owned_by(self, user_id: &str) -> StorageResult<T>;
}

impl<T: OwnedResource> OwnershipCheck<T> for StorageResult<T> {
    fn owned_by(self, user_id: &str) -> StorageResult<T> {
        let resource = self?;
        if resource.owner_user_id() == user_id {
            Ok(resource)
        } else {
            Err(StorageError::NotFound(T::resource_kind().to_string()))
        }
    }
}

impl<T: OwnedResource> OwnershipCheck<T> for Option<T> {
    fn owned_by(self, user_id: &str) -> StorageResult<T> {
        match self {
            Some(resource) if resource.owner_user_id() == user_id => Ok(resource),
            // Missing and not-owned are deliberately indistinguishable.
            _ => Err(StorageError::NotFound(T::resource_kind().to_string())),
        }
    }
}
