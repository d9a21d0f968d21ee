use std::env;

use jaipurtv_core::backend::{config::github_config_from_env, ConfigError, GitHubConfig};

use crate::mailer::MailerConfig;

/// Application configuration loaded from environment variables.
///
/// The GitHub settings are required: a content API without a repository to
/// commit to cannot start (the public site degrades to bundled defaults on
/// its own; the server does not).
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Server host to bind to.
    pub host: String,
    /// Server port to bind to.
    pub port: u16,
    /// Hosted-file backend settings (token, repo, branch, path, author).
    pub github: GitHubConfig,
    /// Path of the admin users JSON file for Basic-auth verification.
    pub admin_users_path: String,
    /// Outbound mail relay settings for the contact endpoint.
    pub mailer: MailerConfig,
    /// Log level (e.g., "info", "debug", "trace").
    pub log_level: String,
}

impl AppConfig {
    /// Load configuration from environment variables with sensible defaults.
    pub fn from_env() -> Result<Self, ConfigError> {
        let smtp_user = env::var("SMTP_USER").ok();
        let contact_recipient = env::var("CONTACT_RECIPIENT")
            .ok()
            .or_else(|| smtp_user.clone())
            .unwrap_or_else(|| "hello@jaipurtv.in".to_string());

        Ok(Self {
            host: env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port: env::var("PORT")
                .unwrap_or_else(|_| "8787".to_string())
                .parse()
                .expect("PORT must be a valid u16"),
            github: github_config_from_env()?,
            admin_users_path: env::var("ADMIN_USERS_PATH")
                .unwrap_or_else(|_| "config/admin-users.json".to_string()),
            mailer: MailerConfig {
                smtp_host: env::var("SMTP_HOST")
                    .unwrap_or_else(|_| "smtp.hostinger.com".to_string()),
                smtp_port: env::var("SMTP_PORT")
                    .unwrap_or_else(|_| "465".to_string())
                    .parse()
                    .expect("SMTP_PORT must be a valid u16"),
                smtp_user,
                smtp_pass: env::var("SMTP_PASS").ok(),
                from_name: "JaipurTV Contact".to_string(),
                recipient: contact_recipient,
            },
            log_level: env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string()),
        })
    }

    /// Build the socket address string.
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
