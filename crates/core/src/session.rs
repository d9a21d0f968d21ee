use base64::prelude::*;
use serde::{Deserialize, Serialize};

/// An editor's identity as established by the authorization gate. Carried on
/// commits for attribution.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EditorIdentity {
    pub email: String,
}

/// A signed-in editor session: identity plus an opaque credential the store
/// forwards to backends that need it. The store never inspects the
/// credential; verification happens at the authorization gate.
#[derive(Clone)]
pub struct Session {
    identity: EditorIdentity,
    authorization: String,
}

impl Session {
    /// Build a session whose credential is an HTTP Basic authorization
    /// header value.
    pub fn basic(email: &str, password: &str) -> Self {
        let token = BASE64_STANDARD.encode(format!("{email}:{password}"));
        Self {
            identity: EditorIdentity {
                email: email.to_string(),
            },
            authorization: format!("Basic {token}"),
        }
    }

    /// Build a session from an already-encoded authorization header value.
    pub fn with_authorization(email: &str, authorization: String) -> Self {
        Self {
            identity: EditorIdentity {
                email: email.to_string(),
            },
            authorization,
        }
    }

    pub fn identity(&self) -> &EditorIdentity {
        &self.identity
    }

    pub fn editor_email(&self) -> &str {
        &self.identity.email
    }

    /// The credential, ready to send as an `Authorization` header.
    pub fn authorization(&self) -> &str {
        &self.authorization
    }
}

// Credential stays out of logs.
impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session")
            .field("email", &self.identity.email)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn basic_session_encodes_credentials() {
        let session = Session::basic("editor@jaipurtv.com", "secret");
        assert_eq!(session.editor_email(), "editor@jaipurtv.com");
        assert!(session.authorization().starts_with("Basic "));
        let token = session.authorization().trim_start_matches("Basic ");
        let decoded = BASE64_STANDARD.decode(token).unwrap();
        assert_eq!(decoded, b"editor@jaipurtv.com:secret");
    }

    #[test]
    fn debug_hides_the_credential() {
        let session = Session::basic("editor@jaipurtv.com", "secret");
        let rendered = format!("{session:?}");
        assert!(!rendered.contains("secret"));
        assert!(rendered.contains("editor@jaipurtv.com"));
    }
}
