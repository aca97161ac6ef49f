use crate::StoreError;

use fl_api::ApiError;
use thiserror::Error;

/// Errors surfaced by session transitions that talk to both the API and
/// the credential store.
#[derive(Error, Debug)]
pub enum SessionError {
    #[error(transparent)]
    Api(#[from] ApiError),

    #[error(transparent)]
    Store(#[from] StoreError),
}

pub type Result<T> = std::result::Result<T, SessionError>;
