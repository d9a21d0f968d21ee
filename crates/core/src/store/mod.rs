pub mod content_store;
pub mod error;
pub mod events;

pub use content_store::ContentStore;
pub use error::StoreError;
pub use events::{ContentBus, ContentEvent};
