//! In-process subscription backend.
//!
//! Holds the document in memory and pushes every write over a broadcast
//! channel, standing in for a hosted realtime document store. Also the
//! fallback backend when no remote is configured: an empty channel store
//! makes the content store serve compiled-in defaults.

use chrono::Utc;
use tokio::sync::{broadcast, RwLock};

use super::{
    BackendAdapter, BackendError, DocumentChange, FetchedDocument, PersistReceipt,
};
use crate::content::model::{PartialSiteContent, SiteContent};
use crate::session::Session;

pub struct ChannelBackend {
    document: RwLock<Option<serde_json::Value>>,
    sender: broadcast::Sender<DocumentChange>,
}

impl ChannelBackend {
    pub fn new(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity);
        Self {
            document: RwLock::new(None),
            sender,
        }
    }

    /// Number of live subscription receivers.
    pub fn subscriber_count(&self) -> usize {
        self.sender.receiver_count()
    }

    async fn store_and_notify(&self, document: &SiteContent) -> Result<(), BackendError> {
        let value = serde_json::to_value(document)?;
        let partial: PartialSiteContent = serde_json::from_value(value.clone())?;
        *self.document.write().await = Some(value);
        // No receivers is fine; the channel store does not require listeners.
        let _ = self.sender.send(DocumentChange {
            document: partial,
            changed_at: Utc::now(),
        });
        Ok(())
    }
}

impl Default for ChannelBackend {
    fn default() -> Self {
        Self::new(64)
    }
}

#[async_trait::async_trait]
impl BackendAdapter for ChannelBackend {
    async fn fetch_document(&self) -> Result<Option<FetchedDocument>, BackendError> {
        let guard = self.document.read().await;
        match guard.as_ref() {
            Some(value) => {
                let document: PartialSiteContent = serde_json::from_value(value.clone())?;
                Ok(Some(FetchedDocument {
                    document,
                    version: None,
                }))
            }
            None => Ok(None),
        }
    }

    async fn persist_document(
        &self,
        document: &SiteContent,
        _session: &Session,
        _message: Option<&str>,
    ) -> Result<PersistReceipt, BackendError> {
        self.store_and_notify(document).await?;
        Ok(PersistReceipt::default())
    }

    async fn seed_document(&self, document: &SiteContent) -> Result<(), BackendError> {
        tracing::info!("seeding channel backend with default content");
        self.store_and_notify(document).await
    }

    fn subscribe(&self) -> Option<broadcast::Receiver<DocumentChange>> {
        Some(self.sender.subscribe())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::defaults::default_content;

    #[tokio::test]
    async fn fetch_before_seed_reports_missing() {
        let backend = ChannelBackend::default();
        assert!(backend.fetch_document().await.unwrap().is_none());
    }

    #[tokio::test]
    async fn seed_then_fetch_round_trips() {
        let backend = ChannelBackend::default();
        let defaults = default_content();
        backend.seed_document(&defaults).await.unwrap();

        let fetched = backend.fetch_document().await.unwrap().unwrap();
        assert_eq!(
            fetched.document.contact.unwrap().email_address.as_deref(),
            Some("hello@jaipurtv.com")
        );
        assert!(fetched.version.is_none());
    }

    #[tokio::test]
    async fn persist_pushes_a_change() {
        let backend = ChannelBackend::default();
        let mut rx = backend.subscribe().unwrap();
        let session = Session::basic("editor@jaipurtv.com", "pw");

        let mut doc = default_content();
        doc.hero.headline = "Pushed".to_string();
        backend.persist_document(&doc, &session, None).await.unwrap();

        let change = rx.recv().await.unwrap();
        assert_eq!(
            change.document.hero.unwrap().headline.as_deref(),
            Some("Pushed")
        );
    }
}
