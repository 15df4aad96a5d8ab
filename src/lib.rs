// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Taskdesk

//! # Taskdesk Server
//!
//! Multi-tenant backend for tasks, documents, recipients, and file
//! attachments. Every resource belongs to exactly one user; every request
//! to a protected route must carry a stateless HMAC bearer token in the
//! `X-Authorization` header.
//!
//! ## Architecture
//!
//! - [`auth`]: token codec, authorization gate, and account service
//! - [`api`]: axum route handlers and the OpenAPI surface
//! - [`storage`]: JSON file persistence and per-entity repositories
//! - [`models`]: wire-level request and response types

pub mod api;
pub mod auth;
pub mod config;
pub mod error;
pub mod models;
pub mod state;
pub mod storage;
