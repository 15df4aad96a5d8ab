// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Taskdesk

//! Recipient (address book) repository.
//!
//! Each recipient is a JSON file under `recipients/`. Listing is ordered by
//! full name. Email lists are cleaned on every write: entries are trimmed
//! and blanks dropped.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::{CreateRecipientRequest, Recipient, UpdateRecipientRequest};

use super::super::{JsonStorage, OwnedResource, OwnershipCheck, StorageError, StorageResult};

/// Recipient record on disk.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoredRecipient {
    pub id: String,
    /// Owner user ID; the scoping key for every operation.
    pub owner_user_id: String,
    pub full_name: String,
    pub organization: String,
    pub position: String,
    pub address: String,
    pub emails: Vec<String>,
    pub created_at: DateTime<Utc>,
}

impl OwnedResource for StoredRecipient {
    fn owner_user_id(&self) -> &str {
        &self.owner_user_id
    }

    fn resource_kind() -> &'static str {
        "Recipient"
    }
}

impl From<StoredRecipient> for Recipient {
    fn from(stored: StoredRecipient) -> Self {
        Recipient {
            id: stored.id,
            full_name: stored.full_name,
            organization: stored.organization,
            position: stored.position,
            address: stored.address,
            emails: stored.emails,
            created_at: stored.created_at,
        }
    }
}

/// Drop blank entries and surrounding whitespace from an email list.
fn clean_emails(emails: Vec<String>) -> Vec<String> {
    emails
        .into_iter()
        .map(|e| e.trim().to_string())
        .filter(|e| !e.is_empty())
        .collect()
}

/// Repository for recipient operations.
pub struct RecipientRepository<'a> {
    storage: &'a JsonStorage,
}

impl<'a> RecipientRepository<'a> {
    pub fn new(storage: &'a JsonStorage) -> Self {
        Self { storage }
    }

    fn load(&self, recipient_id: &str) -> StorageResult<StoredRecipient> {
        let path = self.storage.paths().recipient(recipient_id);
        if !self.storage.exists(&path) {
            return Err(StorageError::NotFound("Recipient".to_string()));
        }
        self.storage.read_json(path)
    }

    /// Get a recipient owned by `owner_user_id`.
    pub fn get(&self, owner_user_id: &str, recipient_id: &str) -> StorageResult<StoredRecipient> {
        self.load(recipient_id).owned_by(owner_user_id)
    }

    /// Create a recipient for `owner_user_id`.
    pub fn create(
        &self,
        owner_user_id: &str,
        request: CreateRecipientRequest,
    ) -> StorageResult<StoredRecipient> {
        let recipient = StoredRecipient {
            id: Uuid::new_v4().to_string(),
            owner_user_id: owner_user_id.to_string(),
            full_name: request.full_name,
            organization: request.organization,
            position: request.position,
            address: request.address,
            emails: clean_emails(request.emails),
            created_at: Utc::now(),
        };

        self.storage
            .write_json(self.storage.paths().recipient(&recipient.id), &recipient)?;
        Ok(recipient)
    }

    /// List recipients owned by a user, ordered by full name.
    pub fn list_by_owner(&self, owner_user_id: &str) -> StorageResult<Vec<StoredRecipient>> {
        let ids = self
            .storage
            .list_files(self.storage.paths().recipients_dir(), "json")?;

        let mut recipients = Vec::new();
        for id in ids {
            if let Ok(recipient) = self.load(&id) {
                if recipient.owner_user_id == owner_user_id {
                    recipients.push(recipient);
                }
            }
        }

        recipients.sort_by(|a, b| a.full_name.cmp(&b.full_name));
        Ok(recipients)
    }

    /// Apply a partial update to a recipient owned by `owner_user_id`.
    pub fn update(
        &self,
        owner_user_id: &str,
        recipient_id: &str,
        request: UpdateRecipientRequest,
    ) -> StorageResult<StoredRecipient> {
        let mut recipient = self.get(owner_user_id, recipient_id)?;

        if let Some(full_name) = request.full_name {
            recipient.full_name = full_name;
        }
        if let Some(organization) = request.organization {
            recipient.organization = organization;
        }
        if let Some(position) = request.position {
            recipient.position = position;
        }
        if let Some(address) = request.address {
            recipient.address = address;
        }
        if let Some(emails) = request.emails {
            recipient.emails = clean_emails(emails);
        }

        self.storage
            .write_json(self.storage.paths().recipient(&recipient.id), &recipient)?;
        Ok(recipient)
    }

    /// Delete a recipient owned by `owner_user_id`.
    pub fn delete(&self, owner_user_id: &str, recipient_id: &str) -> StorageResult<()> {
        let recipient = self.get(owner_user_id, recipient_id)?;
        self.storage
            .delete(self.storage.paths().recipient(&recipient.id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::StoragePaths;
    use tempfile::TempDir;

    fn test_storage() -> (JsonStorage, TempDir) {
        let dir = TempDir::new().expect("temp dir");
        let mut storage = JsonStorage::new(StoragePaths::new(dir.path()));
        storage.initialize().expect("initialize");
        (storage, dir)
    }

    fn create_request(full_name: &str) -> CreateRecipientRequest {
        CreateRecipientRequest {
            full_name: full_name.to_string(),
            organization: "Acme".to_string(),
            position: "Manager".to_string(),
            address: "1 Main St".to_string(),
            emails: vec!["a@x.com".to_string()],
        }
    }

    #[test]
    fn create_cleans_email_list() {
        let (storage, _dir) = test_storage();
        let repo = RecipientRepository::new(&storage);

        let recipient = repo
            .create(
                "u-1",
                CreateRecipientRequest {
                    emails: vec![
                        " a@x.com ".to_string(),
                        "".to_string(),
                        "   ".to_string(),
                        "b@x.com".to_string(),
                    ],
                    ..create_request("Ann")
                },
            )
            .unwrap();

        assert_eq!(recipient.emails, vec!["a@x.com", "b@x.com"]);
    }

    #[test]
    fn list_orders_by_full_name() {
        let (storage, _dir) = test_storage();
        let repo = RecipientRepository::new(&storage);

        repo.create("u-1", create_request("Zoe")).unwrap();
        repo.create("u-1", create_request("Ann")).unwrap();
        repo.create("u-1", create_request("Mia")).unwrap();
        repo.create("u-2", create_request("Bob")).unwrap();

        let names: Vec<String> = repo
            .list_by_owner("u-1")
            .unwrap()
            .into_iter()
            .map(|r| r.full_name)
            .collect();
        assert_eq!(names, vec!["Ann", "Mia", "Zoe"]);
    }

    #[test]
    fn update_replaces_email_list() {
        let (storage, _dir) = test_storage();
        let repo = RecipientRepository::new(&storage);
        let recipient = repo.create("u-1", create_request("Ann")).unwrap();

        let updated = repo
            .update(
                "u-1",
                &recipient.id,
                UpdateRecipientRequest {
                    emails: Some(vec!["new@x.com".to_string()]),
                    ..Default::default()
                },
            )
            .unwrap();

        assert_eq!(updated.emails, vec!["new@x.com"]);
        assert_eq!(updated.full_name, "Ann");
    }

    #[test]
    fn foreign_recipient_is_invisible() {
        let (storage, _dir) = test_storage();
        let repo = RecipientRepository::new(&storage);
        let recipient = repo.create("u-1", create_request("Ann")).unwrap();

        assert!(matches!(
            repo.get("u-2", &recipient.id),
            Err(StorageError::NotFound(_))
        ));
        assert!(matches!(
            repo.delete("u-2", &recipient.id),
            Err(StorageError::NotFound(_))
        ));
    }
}
