//! Pluggable persistence backends for the site document.
//!
//! One adapter interface over three remotes: an in-process channel store
//! (subscription-style), a REST content API, and a GitHub-hosted JSON file.
//! The deployment picks one via [`BackendConfig`].

pub mod channel;
pub mod config;
pub mod github;
pub mod rest;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use tokio::sync::broadcast;

use crate::content::model::{PartialSiteContent, SiteContent};
use crate::session::Session;

pub use channel::ChannelBackend;
pub use config::{BackendConfig, ConfigError};
pub use github::{GitHubBackend, GitHubConfig};
pub use rest::{RestBackend, RestConfig};

#[derive(Debug, thiserror::Error)]
pub enum BackendError {
    /// Transport failure. Surfaced to the editor, never auto-retried.
    #[error("remote unavailable: {0}")]
    Unavailable(String),

    /// Authorization or validation failure from the remote; fatal per call.
    #[error("remote rejected the request: {0}")]
    Rejected(String),

    /// Document shape mismatch. Indicates a defect, not a runtime condition.
    #[error("document could not be encoded or decoded: {0}")]
    Serialization(String),

    #[error("backend not configured: {0}")]
    NotConfigured(String),
}

impl From<reqwest::Error> for BackendError {
    fn from(err: reqwest::Error) -> Self {
        BackendError::Unavailable(err.to_string())
    }
}

impl From<serde_json::Error> for BackendError {
    fn from(err: serde_json::Error) -> Self {
        BackendError::Serialization(err.to_string())
    }
}

/// Classify a reqwest failure on a response body: decode problems are shape
/// mismatches, everything else is transport.
pub(crate) fn decode_error(err: reqwest::Error) -> BackendError {
    if err.is_decode() {
        BackendError::Serialization(err.to_string())
    } else {
        BackendError::Unavailable(err.to_string())
    }
}

/// A remote document plus the backend's version token, when the backend
/// tracks one (the GitHub blob sha, the REST API's `sha` field).
#[derive(Debug, Clone)]
pub struct FetchedDocument {
    pub document: PartialSiteContent,
    pub version: Option<String>,
}

/// What a successful persist reports back to the caller.
#[derive(Debug, Clone, Default)]
pub struct PersistReceipt {
    /// New version token, if the backend tracks one.
    pub version: Option<String>,
    /// Browsable revision URL for backends where every write is a commit.
    pub commit_url: Option<String>,
    /// Path of the persisted document inside the backend, if meaningful.
    pub path: Option<String>,
}

/// A document pushed by a subscription-capable backend.
#[derive(Debug, Clone)]
pub struct DocumentChange {
    pub document: PartialSiteContent,
    pub changed_at: DateTime<Utc>,
}

#[async_trait]
pub trait BackendAdapter: Send + Sync {
    /// Read the remote document. `Ok(None)` means it does not exist yet.
    async fn fetch_document(&self) -> Result<Option<FetchedDocument>, BackendError>;

    /// Persist the full document. Every mutating store operation funnels
    /// through here; there is no partial write path at this layer.
    async fn persist_document(
        &self,
        document: &SiteContent,
        session: &Session,
        message: Option<&str>,
    ) -> Result<PersistReceipt, BackendError>;

    /// Seed an initial document when none exists. Subscription-style
    /// backends store it immediately; fetch-based backends leave creation
    /// to the first admin write.
    async fn seed_document(&self, _document: &SiteContent) -> Result<(), BackendError> {
        Ok(())
    }

    /// Change push channel, for backends that can notify.
    fn subscribe(&self) -> Option<broadcast::Receiver<DocumentChange>> {
        None
    }
}
