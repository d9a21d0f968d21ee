use crate::backend::BackendError;

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// A write was attempted without a signed-in editor session. Raised
    /// before any network call.
    #[error("write requires a signed-in editor session")]
    AuthRequired,

    /// The backend write failed; the optimistic snapshot was rolled back.
    #[error("failed to persist content: {0}")]
    Persistence(#[source] BackendError),
}

impl StoreError {
    /// The backend failure behind a persistence error, if that is what this
    /// is. Lets admin surfaces distinguish transport trouble from rejection.
    pub fn backend_error(&self) -> Option<&BackendError> {
        match self {
            Self::Persistence(err) => Some(err),
            Self::AuthRequired => None,
        }
    }
}
