// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Taskdesk

//! Account registration, login, and identity lookup.
//!
//! Passwords are hashed with bcrypt before they touch disk. Login failures
//! are reported with one uniform message whether the email is unknown or
//! the password wrong, so the endpoint cannot be used to probe for
//! registered addresses.

use crate::{
    error::ApiError,
    models::{AuthSession, LoginRequest, RegisterRequest, User},
    storage::{normalize_email, JsonStorage, StorageError, StoredUser, UserRepository},
};
use chrono::Utc;
use uuid::Uuid;

use super::TokenCodec;

const MIN_PASSWORD_CHARS: usize = 6;
const LOGIN_FAILED: &str = "Invalid email or password";

/// Authentication operations over the user store and token codec.
pub struct AuthService<'a> {
    storage: &'a JsonStorage,
    tokens: &'a TokenCodec,
}

impl<'a> AuthService<'a> {
    pub fn new(storage: &'a JsonStorage, tokens: &'a TokenCodec) -> Self {
        Self { storage, tokens }
    }

    /// Create an account and return a session for it.
    pub fn register(&self, request: RegisterRequest) -> Result<AuthSession, ApiError> {
        let email = normalize_email(&request.email);
        if email.is_empty() || request.password.is_empty() {
            return Err(ApiError::bad_request("Email and password are required"));
        }
        if request.password.chars().count() < MIN_PASSWORD_CHARS {
            return Err(ApiError::bad_request(
                "Password must be at least 6 characters",
            ));
        }

        let users = UserRepository::new(self.storage);
        if users.find_by_email(&email)?.is_some() {
            return Err(ApiError::conflict("Email already registered"));
        }

        let password_hash = bcrypt::hash(&request.password, bcrypt::DEFAULT_COST)
            .map_err(|e| ApiError::internal(format!("Password hashing failed: {e}")))?;

        let user = StoredUser {
            id: Uuid::new_v4().to_string(),
            email,
            name: request.name.trim().to_string(),
            password_hash,
            created_at: Utc::now(),
        };
        users.insert(&user).map_err(|e| match e {
            // Lost a race with a concurrent registration for the same email.
            StorageError::AlreadyExists(_) => ApiError::conflict("Email already registered"),
            other => other.into(),
        })?;

        tracing::info!(user_id = %user.id, "registered new account");
        Ok(self.session_for(user))
    }

    /// Verify credentials and return a fresh session.
    pub fn login(&self, request: LoginRequest) -> Result<AuthSession, ApiError> {
        let users = UserRepository::new(self.storage);
        let user = users
            .find_by_email(&request.email)?
            .ok_or_else(|| ApiError::unauthorized(LOGIN_FAILED))?;

        let matches = bcrypt::verify(&request.password, &user.password_hash)
            .map_err(|e| ApiError::internal(format!("Password verification failed: {e}")))?;
        if !matches {
            return Err(ApiError::unauthorized(LOGIN_FAILED));
        }

        Ok(self.session_for(user))
    }

    /// Load the public identity behind an already-verified user id.
    pub fn identity(&self, user_id: &str) -> Result<User, ApiError> {
        UserRepository::new(self.storage)
            .get(user_id)
            .map(User::from)
            .map_err(|_| ApiError::unauthorized("User not found"))
    }

    fn session_for(&self, user: StoredUser) -> AuthSession {
        AuthSession {
            token: self.tokens.issue(&user.id),
            user: user.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::StoragePaths;
    use axum::http::StatusCode;
    use tempfile::TempDir;

    fn test_storage() -> (JsonStorage, TempDir) {
        let dir = TempDir::new().expect("temp dir");
        let mut storage = JsonStorage::new(StoragePaths::new(dir.path()));
        storage.initialize().expect("initialize");
        (storage, dir)
    }

    fn register_request(email: &str, password: &str) -> RegisterRequest {
        RegisterRequest {
            email: email.to_string(),
            password: password.to_string(),
            name: "Test User".to_string(),
        }
    }

    #[test]
    fn register_then_login_round_trips() {
        let (storage, _dir) = test_storage();
        let tokens = TokenCodec::new("test-secret");
        let service = AuthService::new(&storage, &tokens);

        let session = service
            .register(register_request("Ann@Example.com", "hunter22"))
            .unwrap();
        assert_eq!(session.user.email, "ann@example.com");
        assert_eq!(tokens.verify(&session.token).unwrap(), session.user.id.0);

        let login = service
            .login(LoginRequest {
                email: "ann@example.com".to_string(),
                password: "hunter22".to_string(),
            })
            .unwrap();
        assert_eq!(login.user.id, session.user.id);
    }

    #[test]
    fn password_length_boundary() {
        let (storage, _dir) = test_storage();
        let tokens = TokenCodec::new("test-secret");
        let service = AuthService::new(&storage, &tokens);

        let err = service
            .register(register_request("a@x.com", "12345"))
            .unwrap_err();
        assert_eq!(err.status, StatusCode::BAD_REQUEST);

        // Exactly six characters is accepted.
        service
            .register(register_request("a@x.com", "123456"))
            .unwrap();
    }

    #[test]
    fn missing_fields_rejected() {
        let (storage, _dir) = test_storage();
        let tokens = TokenCodec::new("test-secret");
        let service = AuthService::new(&storage, &tokens);

        for (email, password) in [("", "longenough"), ("a@x.com", ""), ("   ", "longenough")] {
            let err = service
                .register(register_request(email, password))
                .unwrap_err();
            assert_eq!(err.status, StatusCode::BAD_REQUEST);
        }
    }

    #[test]
    fn duplicate_email_conflicts_case_insensitively() {
        let (storage, _dir) = test_storage();
        let tokens = TokenCodec::new("test-secret");
        let service = AuthService::new(&storage, &tokens);

        service
            .register(register_request("ann@example.com", "hunter22"))
            .unwrap();
        let err = service
            .register(register_request("ANN@EXAMPLE.COM", "other-pass"))
            .unwrap_err();
        assert_eq!(err.status, StatusCode::CONFLICT);
    }

    #[test]
    fn login_failure_message_is_uniform() {
        let (storage, _dir) = test_storage();
        let tokens = TokenCodec::new("test-secret");
        let service = AuthService::new(&storage, &tokens);
        service
            .register(register_request("ann@example.com", "hunter22"))
            .unwrap();

        let unknown = service
            .login(LoginRequest {
                email: "nobody@example.com".to_string(),
                password: "hunter22".to_string(),
            })
            .unwrap_err();
        let wrong_password = service
            .login(LoginRequest {
                email: "ann@example.com".to_string(),
                password: "wrong-pass".to_string(),
            })
            .unwrap_err();

        assert_eq!(unknown.status, StatusCode::UNAUTHORIZED);
        assert_eq!(unknown.message, wrong_password.message);
    }

    #[test]
    fn stored_password_is_not_plaintext() {
        let (storage, _dir) = test_storage();
        let tokens = TokenCodec::new("test-secret");
        let service = AuthService::new(&storage, &tokens);

        let session = service
            .register(register_request("ann@example.com", "hunter22"))
            .unwrap();
        let stored = UserRepository::new(&storage)
            .get(&session.user.id.0)
            .unwrap();
        assert_ne!(stored.password_hash, "hunter22");
        assert!(stored.password_hash.starts_with("$2"));
    }

    #[test]
    fn identity_of_deleted_user_is_unauthorized() {
        let (storage, _dir) = test_storage();
        let tokens = TokenCodec::new("test-secret");
        let service = AuthService::new(&storage, &tokens);

        let err = service.identity("ghost").unwrap_err();
        assert_eq!(err.status, StatusCode::UNAUTHORIZED);
    }
}
