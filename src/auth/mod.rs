// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Taskdesk

//! # Authentication Module
//!
//! Stateless HMAC bearer tokens and the per-request authorization gate.
//!
//! - [`TokenCodec`] issues and verifies tokens. No session state is kept:
//!   the signed token itself is the proof, and it cannot be revoked before
//!   expiry.
//! - [`AuthService`] handles registration, login, and identity lookup,
//!   hashing passwords with bcrypt.
//! - [`Auth`] is the extractor every protected handler takes; it rejects
//!   the request with 401 unless the `X-Authorization: Bearer <token>`
//!   header verifies and the user still exists.

pub mod error;
pub mod extractor;
pub mod service;
pub mod token;

pub use error::AuthError;
pub use extractor::{Auth, AuthorizedUser, AUTH_HEADER};
pub use service::AuthService;
pub use token::{TokenCodec, TOKEN_TTL_SECS};
