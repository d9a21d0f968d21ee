//! Authorization gate for content writes.
//!
//! Verifies `Authorization: Basic base64(email:password)` headers against a
//! local JSON list of admin users. Emails match case-insensitively;
//! passwords verify against stored argon2 hashes. A successful check yields
//! the editor identity used for commit attribution.

use argon2::{password_hash::PasswordHash, Argon2, PasswordVerifier};
use base64::prelude::*;
use serde::Deserialize;

use jaipurtv_core::session::EditorIdentity;

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminUserRecord {
    pub email: String,
    pub password_hash: String,
}

#[derive(Debug, thiserror::Error)]
pub enum AuthGateError {
    #[error("failed to read admin users file {path}: {source}")]
    Read {
        path: String,
        source: std::io::Error,
    },

    #[error("failed to parse admin users file {path}: {source}")]
    Parse {
        path: String,
        source: serde_json::Error,
    },
}

#[derive(Clone)]
pub struct AuthGate {
    users: Vec<AdminUserRecord>,
}

impl AuthGate {
    /// Load the admin users file once at startup.
    pub fn load(path: &str) -> Result<Self, AuthGateError> {
        let raw = std::fs::read_to_string(path).map_err(|source| AuthGateError::Read {
            path: path.to_string(),
            source,
        })?;
        let users = serde_json::from_str(&raw).map_err(|source| AuthGateError::Parse {
            path: path.to_string(),
            source,
        })?;
        Ok(Self { users })
    }

    pub fn from_records(users: Vec<AdminUserRecord>) -> Self {
        Self { users }
    }

    /// Verify a raw `Authorization` header value. `None` for anything other
    /// than a well-formed Basic credential matching a known user.
    pub fn verify_header(&self, authorization: Option<&str>) -> Option<EditorIdentity> {
        let header = authorization?;
        let token = header.strip_prefix("Basic ")?.trim();
        let decoded = BASE64_STANDARD.decode(token).ok()?;
        let decoded = String::from_utf8(decoded).ok()?;
        let (email, password) = decoded.split_once(':')?;
        if email.is_empty() || password.is_empty() {
            return None;
        }
        self.verify(email, password)
    }

    fn verify(&self, email: &str, password: &str) -> Option<EditorIdentity> {
        let record = self
            .users
            .iter()
            .find(|user| user.email.eq_ignore_ascii_case(email))?;
        let parsed = PasswordHash::new(&record.password_hash).ok()?;
        Argon2::default()
            .verify_password(password.as_bytes(), &parsed)
            .ok()?;
        Some(EditorIdentity {
            email: record.email.clone(),
        })
    }
}

impl std::fmt::Debug for AuthGate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthGate")
            .field("users", &self.users.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use argon2::password_hash::{rand_core::OsRng, PasswordHasher, SaltString};

    fn gate_with(email: &str, password: &str) -> AuthGate {
        let salt = SaltString::generate(&mut OsRng);
        let hash = Argon2::default()
            .hash_password(password.as_bytes(), &salt)
            .unwrap()
            .to_string();
        AuthGate::from_records(vec![AdminUserRecord {
            email: email.to_string(),
            password_hash: hash,
        }])
    }

    fn basic_header(email: &str, password: &str) -> String {
        format!(
            "Basic {}",
            BASE64_STANDARD.encode(format!("{email}:{password}"))
        )
    }

    #[test]
    fn accepts_a_valid_credential() {
        let gate = gate_with("sameer@jaipurtv.com", "hunter2");
        let identity = gate
            .verify_header(Some(&basic_header("sameer@jaipurtv.com", "hunter2")))
            .unwrap();
        assert_eq!(identity.email, "sameer@jaipurtv.com");
    }

    #[test]
    fn email_match_is_case_insensitive() {
        let gate = gate_with("sameer@jaipurtv.com", "hunter2");
        assert!(gate
            .verify_header(Some(&basic_header("SAMEER@jaipurtv.com", "hunter2")))
            .is_some());
    }

    #[test]
    fn rejects_a_wrong_password() {
        let gate = gate_with("sameer@jaipurtv.com", "hunter2");
        assert!(gate
            .verify_header(Some(&basic_header("sameer@jaipurtv.com", "nope")))
            .is_none());
    }

    #[test]
    fn rejects_unknown_users_and_malformed_headers() {
        let gate = gate_with("sameer@jaipurtv.com", "hunter2");
        assert!(gate
            .verify_header(Some(&basic_header("other@jaipurtv.com", "hunter2")))
            .is_none());
        assert!(gate.verify_header(None).is_none());
        assert!(gate.verify_header(Some("Bearer token")).is_none());
        assert!(gate.verify_header(Some("Basic !!!")).is_none());
        let no_colon = format!("Basic {}", BASE64_STANDARD.encode("no-colon-here"));
        assert!(gate.verify_header(Some(&no_colon)).is_none());
    }
}
