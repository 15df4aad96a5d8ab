// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Taskdesk

//! Authentication and authorization error types.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// Why a request failed the authorization gate.
///
/// Every variant maps to 401; the distinctions exist for logging and for
/// the machine-readable `error_code` in the response body.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AuthError {
    /// No X-Authorization header on the request.
    #[error("Missing token")]
    MissingToken,

    /// Header present but not of the form `Bearer <token>`.
    #[error("Invalid authorization header format. Expected 'Bearer <token>'")]
    InvalidAuthHeader,

    /// Token does not split into the three expected fields, or its
    /// timestamp field is not numeric.
    #[error("Invalid token")]
    MalformedToken,

    /// Signature did not match the payload.
    #[error("Invalid token")]
    InvalidSignature,

    /// Signature valid but the token is past its lifetime.
    #[error("Token expired")]
    TokenExpired,

    /// Token verified but the embedded user no longer exists.
    #[error("User not found")]
    UnknownUser,
}

impl AuthError {
    pub fn error_code(&self) -> &'static str {
        match self {
            AuthError::MissingToken => "MISSING_TOKEN",
            AuthError::InvalidAuthHeader => "INVALID_AUTH_HEADER",
            AuthError::MalformedToken => "MALFORMED_TOKEN",
            AuthError::InvalidSignature => "INVALID_SIGNATURE",
            AuthError::TokenExpired => "TOKEN_EXPIRED",
            AuthError::UnknownUser => "UNKNOWN_USER",
        }
    }

    pub fn status_code(&self) -> StatusCode {
        StatusCode::UNAUTHORIZED
    }
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        let body = json!({
            "error": self.to_string(),
            "error_code": self.error_code(),
        });
        (self.status_code(), Json(body)).into_response()
    }
}
