pub mod service;

use thiserror::Error;

use crate::storage::StorageError;

/// Failure outcomes of the extension operations. All of them are expected,
/// caller-recoverable results; only `Storage` carries faults from the
/// external collaborators, propagated unchanged.
#[derive(Debug, Error)]
pub enum ExtensionError {
    #[error("token type `{0}` has no schema")]
    SchemaNotFound(String),
    #[error("attribute `{0}` is not declared by the token type")]
    UnknownAttribute(String),
    #[error("literal `{literal}` is invalid for attribute `{attribute}`")]
    InvalidAttributeValue { attribute: String, literal: String },
    #[error("uri mapping must hold exactly the `hash` and `path` keys")]
    InvalidUriShape,
    #[error("`{0}` is not a uri key")]
    UnknownUriKey(String),
    #[error("token `{0}` already exists")]
    DuplicateId(String),
    #[error("token `{0}` not found")]
    NotFound(String),
    #[error("schema default `{literal}` is invalid for attribute `{attribute}`")]
    InvalidDefault { attribute: String, literal: String },
    #[error("storage error: {0}")]
    Storage(StorageError),
}

impl From<StorageError> for ExtensionError {
    fn from(err: StorageError) -> Self {
        // A missing token is part of the operation taxonomy, not a
        // storage fault.
        match err {
            StorageError::NotFound(id) => ExtensionError::NotFound(id),
            other => ExtensionError::Storage(other),
        }
    }
}
