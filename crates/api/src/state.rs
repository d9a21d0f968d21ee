use std::sync::Arc;

use jaipurtv_core::backend::BackendAdapter;

use crate::auth::AuthGate;
use crate::config::AppConfig;
use crate::mailer::ContactMailer;

/// Shared application state, passed to all handlers via Axum's `State`
/// extractor. Wrapped in `Arc` so cloning is cheap.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<InnerState>,
}

struct InnerState {
    adapter: Arc<dyn BackendAdapter>,
    auth: AuthGate,
    mailer: ContactMailer,
    config: AppConfig,
}

impl AppState {
    pub fn new(
        adapter: Arc<dyn BackendAdapter>,
        auth: AuthGate,
        mailer: ContactMailer,
        config: AppConfig,
    ) -> Self {
        Self {
            inner: Arc::new(InnerState {
                adapter,
                auth,
                mailer,
                config,
            }),
        }
    }

    pub fn adapter(&self) -> &Arc<dyn BackendAdapter> {
        &self.inner.adapter
    }

    pub fn auth(&self) -> &AuthGate {
        &self.inner.auth
    }

    pub fn mailer(&self) -> &ContactMailer {
        &self.inner.mailer
    }

    #[allow(dead_code)]
    pub fn config(&self) -> &AppConfig {
        &self.inner.config
    }
}
