pub mod contact;
pub mod content;
pub mod health;

use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::trace::TraceLayer;

use crate::state::AppState;

/// Requests carry whole documents; cap them well above any realistic size.
const MAX_BODY_BYTES: usize = 2 * 1024 * 1024;

/// Assemble the full router with all route groups and middleware.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .merge(health::routes())
        .merge(content::routes())
        .merge(contact::routes())
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer())
        .layer(RequestBodyLimitLayer::new(MAX_BODY_BYTES))
        .with_state(state)
}

/// Permissive: the public site and the admin console are served from
/// arbitrary origins.
fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any)
}

#[cfg(test)]
pub(crate) mod test_support {
    use std::sync::Arc;

    use argon2::password_hash::{rand_core::OsRng, PasswordHasher, SaltString};
    use argon2::Argon2;
    use axum::Router;
    use base64::prelude::*;

    use jaipurtv_core::backend::{ChannelBackend, GitHubConfig};

    use crate::auth::{AdminUserRecord, AuthGate};
    use crate::config::AppConfig;
    use crate::mailer::{ContactMailer, MailerConfig};
    use crate::state::AppState;

    pub const TEST_EMAIL: &str = "sameer@jaipurtv.com";
    pub const TEST_PASSWORD: &str = "hunter2";

    pub fn basic_header() -> String {
        format!(
            "Basic {}",
            BASE64_STANDARD.encode(format!("{TEST_EMAIL}:{TEST_PASSWORD}"))
        )
    }

    /// The full router over an empty channel backend and a single known
    /// admin user.
    pub fn test_router() -> Router {
        let salt = SaltString::generate(&mut OsRng);
        let hash = Argon2::default()
            .hash_password(TEST_PASSWORD.as_bytes(), &salt)
            .unwrap()
            .to_string();
        let gate = AuthGate::from_records(vec![AdminUserRecord {
            email: TEST_EMAIL.to_string(),
            password_hash: hash,
        }]);

        let mailer_config = MailerConfig {
            smtp_host: "localhost".to_string(),
            smtp_port: 1025,
            smtp_user: None,
            smtp_pass: None,
            from_name: "JaipurTV Contact".to_string(),
            recipient: "sameer@jaipurtv.in".to_string(),
        };

        let config = AppConfig {
            host: "127.0.0.1".to_string(),
            port: 0,
            github: GitHubConfig::new(
                "test-token".to_string(),
                "jaipurtv/site-content".to_string(),
            ),
            admin_users_path: "config/admin-users.json".to_string(),
            mailer: mailer_config.clone(),
            log_level: "info".to_string(),
        };

        let state = AppState::new(
            Arc::new(ChannelBackend::default()),
            gate,
            ContactMailer::new(mailer_config),
            config,
        );
        super::build_router(state)
    }
}
