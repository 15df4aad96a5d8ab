// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Taskdesk

//! Stateless bearer token codec.
//!
//! A token is `<user_id>:<unix_ts>:<hex_signature>` where the signature is
//! HMAC-SHA256 over `<user_id>:<unix_ts>`, hex-encoded and truncated to 32
//! characters. Possession of a correctly signed, non-expired token is the
//! entire authorization proof: nothing is persisted server-side, and there
//! is no revocation path. A leaked token stays valid until it expires,
//! regardless of password changes or logout.

use chrono::Utc;
use hmac::{Hmac, Mac};
use sha2::Sha256;
use subtle::ConstantTimeEq;

use super::AuthError;

type HmacSha256 = Hmac<Sha256>;

/// Token lifetime: 30 days. Fixed; there is no sliding renewal.
pub const TOKEN_TTL_SECS: i64 = 30 * 24 * 3600;

/// Length of the truncated hex signature (16 bytes).
const SIGNATURE_HEX_LEN: usize = 32;

/// Issues and verifies bearer tokens with a process-wide secret.
///
/// The secret is injected at construction and read-only afterwards. Both
/// operations are pure, synchronous CPU work; the codec holds no mutable
/// state and is safe to share across requests.
pub struct TokenCodec {
    secret: Vec<u8>,
}

impl TokenCodec {
    pub fn new(secret: impl AsRef<[u8]>) -> Self {
        Self {
            secret: secret.as_ref().to_vec(),
        }
    }

    /// Issue a token for `user_id` at the current time.
    pub fn issue(&self, user_id: &str) -> String {
        self.issue_at(user_id, Utc::now().timestamp())
    }

    fn issue_at(&self, user_id: &str, issued_at: i64) -> String {
        let payload = format!("{user_id}:{issued_at}");
        let signature = self.sign(&payload);
        format!("{payload}:{signature}")
    }

    /// Verify a token and return the embedded user id.
    ///
    /// The id is returned verbatim as an opaque string; whether that user
    /// still exists is the authenticator's concern, not the codec's.
    pub fn verify(&self, token: &str) -> Result<String, AuthError> {
        self.verify_at(token, Utc::now().timestamp())
    }

    fn verify_at(&self, token: &str, now: i64) -> Result<String, AuthError> {
        let parts: Vec<&str> = token.split(':').collect();
        // Exactly three fields, or we never touch the signature.
        let [user_id, issued_at, signature] = parts.as_slice() else {
            return Err(AuthError::MalformedToken);
        };

        let expected = self.sign(&format!("{user_id}:{issued_at}"));
        if signature
            .as_bytes()
            .ct_eq(expected.as_bytes())
            .unwrap_u8()
            != 1
        {
            return Err(AuthError::InvalidSignature);
        }

        let issued_at: i64 = issued_at
            .parse()
            .map_err(|_| AuthError::MalformedToken)?;
        if now - issued_at > TOKEN_TTL_SECS {
            return Err(AuthError::TokenExpired);
        }

        Ok(user_id.to_string())
    }

    fn sign(&self, payload: &str) -> String {
        let mut mac = HmacSha256::new_from_slice(&self.secret)
            .expect("HMAC accepts keys of any length");
        mac.update(payload.as_bytes());
        let digest = hex::encode(mac.finalize().into_bytes());
        digest[..SIGNATURE_HEX_LEN].to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn codec() -> TokenCodec {
        TokenCodec::new("test-secret")
    }

    #[test]
    fn verify_round_trips_issue() {
        let codec = codec();
        for user_id in ["u-1", "user_abc", "7f3b2c1d-0000"] {
            let token = codec.issue(user_id);
            assert_eq!(codec.verify(&token).unwrap(), user_id);
        }
    }

    #[test]
    fn token_has_three_fields_and_truncated_signature() {
        let token = codec().issue("u-1");
        let parts: Vec<&str> = token.split(':').collect();
        assert_eq!(parts.len(), 3);
        assert_eq!(parts[0], "u-1");
        assert_eq!(parts[2].len(), SIGNATURE_HEX_LEN);
    }

    #[test]
    fn any_flipped_signature_character_rejects() {
        let codec = codec();
        let token = codec.issue("u-1");
        let (payload, signature) = token.rsplit_once(':').unwrap();

        for i in 0..signature.len() {
            let mut bytes = signature.as_bytes().to_vec();
            bytes[i] = if bytes[i] == b'0' { b'1' } else { b'0' };
            let tampered = format!("{payload}:{}", String::from_utf8(bytes).unwrap());
            assert!(matches!(
                codec.verify(&tampered),
                Err(AuthError::InvalidSignature)
            ));
        }
    }

    #[test]
    fn expired_token_rejected_despite_valid_signature() {
        let codec = codec();
        let now = Utc::now().timestamp();

        let stale = codec.issue_at("u-1", now - TOKEN_TTL_SECS - 1);
        assert!(matches!(
            codec.verify_at(&stale, now),
            Err(AuthError::TokenExpired)
        ));

        // One second inside the window still passes.
        let fresh = codec.issue_at("u-1", now - TOKEN_TTL_SECS);
        assert_eq!(codec.verify_at(&fresh, now).unwrap(), "u-1");
    }

    #[test]
    fn wrong_field_count_is_malformed() {
        let codec = codec();
        for bad in ["", "u-1", "u-1:123", "u-1:123:sig:extra", ":::"] {
            assert!(matches!(
                codec.verify(bad),
                Err(AuthError::MalformedToken) | Err(AuthError::InvalidSignature)
            ));
        }
        // The canonical cases: too few and too many fields.
        assert!(matches!(
            codec.verify("u-1:123"),
            Err(AuthError::MalformedToken)
        ));
        assert!(matches!(
            codec.verify("u-1:123:sig:extra"),
            Err(AuthError::MalformedToken)
        ));
    }

    #[test]
    fn different_timestamps_give_different_signatures() {
        let codec = codec();
        let now = Utc::now().timestamp();
        let a = codec.issue_at("u-1", now);
        let b = codec.issue_at("u-1", now + 1);

        let sig = |t: &str| t.rsplit(':').next().unwrap().to_string();
        assert_ne!(sig(&a), sig(&b));
    }

    #[test]
    fn different_secrets_reject_each_other() {
        let token = TokenCodec::new("secret-a").issue("u-1");
        assert!(matches!(
            TokenCodec::new("secret-b").verify(&token),
            Err(AuthError::InvalidSignature)
        ));
    }

    #[test]
    fn non_numeric_timestamp_fails_before_expiry_check() {
        let codec = codec();
        // Forge a correctly signed token with a garbage timestamp.
        let payload = "u-1:notanumber";
        let token = format!("{payload}:{}", codec.sign(payload));
        assert!(matches!(
            codec.verify(&token),
            Err(AuthError::MalformedToken)
        ));
    }
}
