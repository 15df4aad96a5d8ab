// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Taskdesk

//! Document repository.
//!
//! Each document is a JSON file under `documents/`. Listing may filter by
//! category and is ordered by last update, newest first.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::{CreateDocumentRequest, Document, DocumentCategory, UpdateDocumentRequest};

use super::super::{JsonStorage, OwnedResource, OwnershipCheck, StorageError, StorageResult};

/// Document record on disk.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoredDocument {
    pub id: String,
    /// Owner user ID; the scoping key for every operation.
    pub owner_user_id: String,
    pub title: String,
    pub content: String,
    pub category: DocumentCategory,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl OwnedResource for StoredDocument {
    fn owner_user_id(&self) -> &str {
        &self.owner_user_id
    }

    fn resource_kind() -> &'static str {
        "Document"
    }
}

impl From<StoredDocument> for Document {
    fn from(stored: StoredDocument) -> Self {
        Document {
            id: stored.id,
            title: stored.title,
            content: stored.content,
            category: stored.category,
            created_at: stored.created_at,
            updated_at: stored.updated_at,
        }
    }
}

/// Repository for document operations.
pub struct DocumentRepository<'a> {
    storage: &'a JsonStorage,
}

impl<'a> DocumentRepository<'a> {
    pub fn new(storage: &'a JsonStorage) -> Self {
        Self { storage }
    }

    fn load(&self, document_id: &str) -> StorageResult<StoredDocument> {
        let path = self.storage.paths().document(document_id);
        if !self.storage.exists(&path) {
            return Err(StorageError::NotFound("Document".to_string()));
        }
        self.storage.read_json(path)
    }

    /// Get a document owned by `owner_user_id`.
    pub fn get(&self, owner_user_id: &str, document_id: &str) -> StorageResult<StoredDocument> {
        self.load(document_id).owned_by(owner_user_id)
    }

    /// Create a document for `owner_user_id`.
    pub fn create(
        &self,
        owner_user_id: &str,
        request: CreateDocumentRequest,
    ) -> StorageResult<StoredDocument> {
        let now = Utc::now();
        let document = StoredDocument {
            id: Uuid::new_v4().to_string(),
            owner_user_id: owner_user_id.to_string(),
            title: request.title,
            content: request.content,
            category: request.category,
            created_at: now,
            updated_at: now,
        };

        self.storage
            .write_json(self.storage.paths().document(&document.id), &document)?;
        Ok(document)
    }

    /// List documents owned by a user, optionally filtered by category,
    /// most recently updated first.
    pub fn list_by_owner(
        &self,
        owner_user_id: &str,
        category: Option<DocumentCategory>,
    ) -> StorageResult<Vec<StoredDocument>> {
        let ids = self
            .storage
            .list_files(self.storage.paths().documents_dir(), "json")?;

        let mut documents = Vec::new();
        for id in ids {
            if let Ok(document) = self.load(&id) {
                if document.owner_user_id != owner_user_id {
                    continue;
                }
                if let Some(filter) = category {
                    if document.category != filter {
                        continue;
                    }
                }
                documents.push(document);
            }
        }

        documents.sort_by(|a, b| b.updated_at.cmp(&a.updated_at));
        Ok(documents)
    }

    /// Apply a partial update, stamping `updated_at`.
    pub fn update(
        &self,
        owner_user_id: &str,
        document_id: &str,
        request: UpdateDocumentRequest,
    ) -> StorageResult<StoredDocument> {
        let mut document = self.get(owner_user_id, document_id)?;

        if let Some(title) = request.title {
            document.title = title;
        }
        if let Some(content) = request.content {
            document.content = content;
        }
        if let Some(category) = request.category {
            document.category = category;
        }
        document.updated_at = Utc::now();

        self.storage
            .write_json(self.storage.paths().document(&document.id), &document)?;
        Ok(document)
    }

    /// Delete a document owned by `owner_user_id`.
    pub fn delete(&self, owner_user_id: &str, document_id: &str) -> StorageResult<()> {
        let document = self.get(owner_user_id, document_id)?;
        self.storage
            .delete(self.storage.paths().document(&document.id))
    }
}
