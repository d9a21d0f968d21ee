//! Backend selection from ambient deployment configuration.
//!
//! Server processes treat a selection failure as fatal; client-style callers
//! fall back to the channel backend and serve compiled-in defaults.

use std::env;
use std::sync::Arc;

use super::{BackendAdapter, ChannelBackend, GitHubBackend, GitHubConfig, RestBackend, RestConfig};

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("missing required environment variable {0}")]
    MissingVar(&'static str),

    #[error("invalid repository {0:?}, expected \"owner/repo\"")]
    InvalidRepo(String),

    #[error("unknown content backend {0:?}, expected memory, rest, or github")]
    UnknownKind(String),

    #[error("failed to construct http client: {0}")]
    HttpClient(String),
}

#[derive(Debug, Clone)]
pub enum BackendConfig {
    /// In-process channel store; also the offline fallback.
    Channel,
    Rest(RestConfig),
    GitHub(GitHubConfig),
}

impl BackendConfig {
    /// Read the backend selection from the environment.
    ///
    /// `CONTENT_BACKEND` picks the variant (`memory` when unset); the
    /// chosen variant then reads its own settings.
    pub fn from_env() -> Result<Self, ConfigError> {
        let kind = env::var("CONTENT_BACKEND").unwrap_or_else(|_| "memory".to_string());
        match kind.as_str() {
            "memory" => Ok(Self::Channel),
            "rest" => Ok(Self::Rest(RestConfig {
                base_url: env::var("CONTENT_API_BASE_URL")
                    .map_err(|_| ConfigError::MissingVar("CONTENT_API_BASE_URL"))?,
            })),
            "github" => Ok(Self::GitHub(github_config_from_env()?)),
            _ => Err(ConfigError::UnknownKind(kind)),
        }
    }

    /// Build the adapter this configuration describes.
    pub fn build(self) -> Result<Arc<dyn BackendAdapter>, ConfigError> {
        match self {
            Self::Channel => Ok(Arc::new(ChannelBackend::default())),
            Self::Rest(config) => Ok(Arc::new(RestBackend::new(config)?)),
            Self::GitHub(config) => Ok(Arc::new(GitHubBackend::new(config)?)),
        }
    }

    /// Client-side entry point: never fails. Configuration trouble degrades
    /// to the channel backend, so the public site renders bundled defaults
    /// instead of an error state. Server processes use [`Self::from_env`]
    /// and treat errors as fatal.
    pub fn adapter_or_fallback() -> Arc<dyn BackendAdapter> {
        match Self::from_env().and_then(Self::build) {
            Ok(adapter) => adapter,
            Err(err) => {
                tracing::warn!("content backend misconfigured, serving bundled defaults: {err}");
                Arc::new(ChannelBackend::default())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn selection_defaults_to_memory_and_rejects_unknown_kinds() {
        env::remove_var("CONTENT_BACKEND");
        assert!(matches!(
            BackendConfig::from_env().unwrap(),
            BackendConfig::Channel
        ));

        env::set_var("CONTENT_BACKEND", "carrier-pigeon");
        assert!(matches!(
            BackendConfig::from_env(),
            Err(ConfigError::UnknownKind(_))
        ));
        env::remove_var("CONTENT_BACKEND");
    }

    #[test]
    fn channel_config_builds_an_adapter() {
        assert!(BackendConfig::Channel.build().is_ok());
    }
}

pub fn github_config_from_env() -> Result<GitHubConfig, ConfigError> {
    let token = env::var("GITHUB_TOKEN").map_err(|_| ConfigError::MissingVar("GITHUB_TOKEN"))?;
    let repo = env::var("GITHUB_REPO").map_err(|_| ConfigError::MissingVar("GITHUB_REPO"))?;

    let mut config = GitHubConfig::new(token, repo);
    if let Ok(branch) = env::var("GITHUB_BRANCH") {
        config.branch = branch;
    }
    if let Ok(path) = env::var("CONTENT_FILE_PATH") {
        config.content_path = path;
    }
    if let Ok(name) = env::var("COMMIT_AUTHOR_NAME") {
        config.commit_author_name = name;
    }
    if let Ok(email) = env::var("COMMIT_AUTHOR_EMAIL") {
        config.commit_author_email = email;
    }
    Ok(config)
}
