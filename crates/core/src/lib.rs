//! Content core for the JaipurTV site: the typed site document, its
//! compiled-in defaults and merge semantics, the optimistic content store,
//! and the pluggable persistence backends.

pub mod backend;
pub mod content;
pub mod session;
pub mod store;

pub use backend::{BackendAdapter, BackendConfig, BackendError};
pub use content::{default_content, SiteContent};
pub use session::{EditorIdentity, Session};
pub use store::{ContentStore, StoreError};
