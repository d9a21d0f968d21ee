//! The authoritative in-memory site document.
//!
//! One store owns the snapshot; consumers read clones and route every
//! mutation through the update API, which applies the change optimistically
//! and rolls it back if the backend write fails.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Weak};

use chrono::Utc;
use tokio::sync::{broadcast, RwLock};

use super::error::StoreError;
use super::events::{ContentBus, ContentEvent};
use crate::backend::{BackendAdapter, DocumentChange, PersistReceipt};
use crate::content::defaults::default_content;
use crate::content::merge::{merge_hero, merge_with_defaults};
use crate::content::model::{PartialHeroContent, SiteContent};
use crate::content::section::{SectionKey, SectionUpdate};
use crate::session::Session;

pub struct ContentStore {
    adapter: Arc<dyn BackendAdapter>,
    defaults: SiteContent,
    snapshot: RwLock<SiteContent>,
    session: RwLock<Option<Session>>,
    ready: AtomicBool,
    bus: ContentBus,
}

impl ContentStore {
    pub fn new(adapter: Arc<dyn BackendAdapter>) -> Self {
        let defaults = default_content();
        Self {
            adapter,
            snapshot: RwLock::new(defaults.clone()),
            defaults,
            session: RwLock::new(None),
            ready: AtomicBool::new(false),
            bus: ContentBus::default(),
        }
    }

    /// Load the remote document and merge it over the compiled-in defaults.
    ///
    /// Never fails: a missing document is seeded (where the backend supports
    /// it) and a failed fetch leaves the defaults in place. The store
    /// becomes ready exactly once, whatever the outcome, so consumers never
    /// block on readiness. Subscription-capable backends get a background
    /// task that re-merges every pushed document.
    pub async fn initialize(self: &Arc<Self>) {
        match self.adapter.fetch_document().await {
            Ok(Some(fetched)) => {
                let merged = merge_with_defaults(&self.defaults, fetched.document);
                *self.snapshot.write().await = merged;
                tracing::info!(version = ?fetched.version, "loaded remote site content");
            }
            Ok(None) => {
                tracing::info!("remote document missing, seeding defaults");
                if let Err(err) = self.adapter.seed_document(&self.defaults).await {
                    tracing::error!("failed to seed site content: {err}");
                }
            }
            Err(err) => {
                tracing::warn!("failed to load site content, serving defaults: {err}");
            }
        }

        if let Some(rx) = self.adapter.subscribe() {
            let store = Arc::downgrade(self);
            tokio::spawn(Self::pump_changes(store, rx));
        }

        self.mark_ready();
    }

    /// Current document. A clone: consumers never hold a reference into the
    /// store.
    pub async fn snapshot(&self) -> SiteContent {
        self.snapshot.read().await.clone()
    }

    pub fn defaults(&self) -> &SiteContent {
        &self.defaults
    }

    pub fn is_ready(&self) -> bool {
        self.ready.load(Ordering::SeqCst)
    }

    pub fn subscribe_events(&self) -> broadcast::Receiver<ContentEvent> {
        self.bus.subscribe()
    }

    /// Attach the signed-in editor session used for persist calls.
    pub async fn set_session(&self, session: Session) {
        *self.session.write().await = Some(session);
    }

    pub async fn clear_session(&self) {
        *self.session.write().await = None;
    }

    /// Replace one section: optimistic locally, durable on success, rolled
    /// back on failure.
    pub async fn update_section(
        &self,
        update: SectionUpdate,
    ) -> Result<PersistReceipt, StoreError> {
        let key = update.key();
        let next = {
            let guard = self.snapshot.read().await;
            let mut next = guard.clone();
            next.apply(update);
            next
        };
        let receipt = self
            .commit(next, &format!("chore(content): update {key}"))
            .await?;
        self.bus.publish(ContentEvent::SectionChanged {
            section: key,
            changed_at: Utc::now(),
        });
        Ok(receipt)
    }

    /// Partial hero edit: provided fields over the current hero, stats
    /// wholesale-or-current.
    pub async fn update_hero(
        &self,
        patch: PartialHeroContent,
    ) -> Result<PersistReceipt, StoreError> {
        let hero = {
            let guard = self.snapshot.read().await;
            merge_hero(&guard.hero, Some(patch))
        };
        self.update_section(SectionUpdate::Hero(hero)).await
    }

    /// Restore one section to its compiled-in default.
    pub async fn reset_section(&self, key: SectionKey) -> Result<PersistReceipt, StoreError> {
        let next = {
            let guard = self.snapshot.read().await;
            let mut next = guard.clone();
            next.apply(SectionUpdate::from_document(&self.defaults, key));
            next
        };
        let receipt = self
            .commit(next, &format!("chore(content): reset {key}"))
            .await?;
        self.bus.publish(ContentEvent::SectionChanged {
            section: key,
            changed_at: Utc::now(),
        });
        Ok(receipt)
    }

    /// Restore and persist the full default document.
    pub async fn reset_all(&self) -> Result<PersistReceipt, StoreError> {
        let receipt = self
            .commit(
                self.defaults.clone(),
                "chore(content): reset site content",
            )
            .await?;
        self.bus.publish(ContentEvent::DocumentReplaced {
            changed_at: Utc::now(),
        });
        Ok(receipt)
    }

    /// The optimistic transaction shared by every mutating operation: swap
    /// the snapshot in before the network call, restore the exact previous
    /// value if the write fails. No partial application either way.
    async fn commit(
        &self,
        next: SiteContent,
        message: &str,
    ) -> Result<PersistReceipt, StoreError> {
        let session = self
            .session
            .read()
            .await
            .clone()
            .ok_or(StoreError::AuthRequired)?;

        let previous = {
            let mut guard = self.snapshot.write().await;
            std::mem::replace(&mut *guard, next.clone())
        };

        match self
            .adapter
            .persist_document(&next, &session, Some(message))
            .await
        {
            Ok(receipt) => Ok(receipt),
            Err(err) => {
                *self.snapshot.write().await = previous;
                self.bus.publish(ContentEvent::DocumentReplaced {
                    changed_at: Utc::now(),
                });
                tracing::error!("persist failed, rolled back local snapshot: {err}");
                Err(StoreError::Persistence(err))
            }
        }
    }

    fn mark_ready(&self) {
        if !self.ready.swap(true, Ordering::SeqCst) {
            self.bus.publish(ContentEvent::Ready);
        }
    }

    async fn pump_changes(store: Weak<Self>, mut rx: broadcast::Receiver<DocumentChange>) {
        loop {
            match rx.recv().await {
                Ok(change) => {
                    let Some(store) = store.upgrade() else { break };
                    store.apply_remote(change).await;
                }
                Err(broadcast::error::RecvError::Lagged(skipped)) => {
                    tracing::warn!("dropped {skipped} remote change notifications");
                }
                Err(broadcast::error::RecvError::Closed) => break,
            }
        }
    }

    async fn apply_remote(&self, change: DocumentChange) {
        let merged = merge_with_defaults(&self.defaults, change.document);
        let mut guard = self.snapshot.write().await;
        if *guard != merged {
            *guard = merged;
            drop(guard);
            self.bus.publish(ContentEvent::DocumentReplaced {
                changed_at: change.changed_at,
            });
        }
    }
}
