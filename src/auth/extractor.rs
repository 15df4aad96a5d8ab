// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Taskdesk

//! Authorization gate, expressed as an axum extractor.
//!
//! Handlers that take an [`Auth`] argument only run for requests carrying a
//! valid bearer token in the `X-Authorization` header; everything else is
//! rejected with 401 before the handler body executes. The gate verifies
//! the token signature and expiry and confirms the embedded user still
//! exists, so a handler can treat `auth.0.user_id` as trusted.

use axum::{extract::FromRequestParts, http::request::Parts};

use crate::{models::UserId, state::AppState, storage::UserRepository};

use super::AuthError;

/// Header carrying the bearer token.
pub const AUTH_HEADER: &str = "x-authorization";

const BEARER_PREFIX: &str = "Bearer ";

/// Identity established by the gate for the current request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthorizedUser {
    pub user_id: UserId,
}

/// Extractor wrapper that runs the gate.
///
/// ```ignore
/// async fn list_tasks(State(state): State<AppState>, Auth(user): Auth) { ... }
/// ```
#[derive(Debug)]
pub struct Auth(pub AuthorizedUser);

impl FromRequestParts<AppState> for Auth {
    type Rejection = AuthError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let header = parts
            .headers
            .get(AUTH_HEADER)
            .ok_or(AuthError::MissingToken)?;
        let header = header.to_str().map_err(|_| AuthError::InvalidAuthHeader)?;

        let token = header
            .strip_prefix(BEARER_PREFIX)
            .ok_or(AuthError::InvalidAuthHeader)?;

        let user_id = state.tokens.verify(token)?;
        if !UserRepository::new(&state.storage).exists(&user_id) {
            tracing::warn!(user_id = %user_id, "valid token for a missing user");
            return Err(AuthError::UnknownUser);
        }

        Ok(Auth(AuthorizedUser {
            user_id: UserId(user_id),
        }))
    }
}
