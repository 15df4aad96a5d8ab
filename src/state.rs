// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Taskdesk

//! Shared application state passed to every handler.

use std::sync::Arc;

use crate::{auth::TokenCodec, storage::JsonStorage};

/// State shared across all routes. Cheap to clone; both members are
/// read-only after startup.
#[derive(Clone)]
pub struct AppState {
    pub storage: Arc<JsonStorage>,
    pub tokens: Arc<TokenCodec>,
}

impl AppState {
    pub fn new(storage: Arc<JsonStorage>, tokens: Arc<TokenCodec>) -> Self {
        Self { storage, tokens }
    }
}
