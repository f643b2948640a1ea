pub mod memory;

use thiserror::Error;

use crate::token::Token;

/// Key-addressable ledger state as exposed by the host runtime. The host
/// serializes transactions against the same keys; implementations only
/// provide single-operation consistency.
pub trait Ledger {
    fn get(&self, key: &str) -> Result<Option<Vec<u8>>, StorageError>;

    fn put(&mut self, key: &str, bytes: Vec<u8>) -> Result<(), StorageError>;

    /// Equality query over the stored token records. Result order is
    /// whatever the backend provides, but must be stable per backend.
    fn query(&self, selector: &Selector) -> Result<Vec<Vec<u8>>, StorageError>;
}

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("token `{0}` not found")]
    NotFound(String),
    #[error("serialization error: {0}")]
    Serialization(String),
    #[error("backend error: {0}")]
    Backend(String),
}

impl From<serde_json::Error> for StorageError {
    fn from(err: serde_json::Error) -> Self {
        StorageError::Serialization(err.to_string())
    }
}

/// Restricts a token scan to owner and/or token type equality.
#[derive(Debug, Clone, Default)]
pub struct Selector {
    pub owner: Option<String>,
    pub token_type: Option<String>,
}

impl Selector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_owner(mut self, owner: &str) -> Self {
        self.owner = Some(String::from(owner));
        self
    }

    pub fn with_type(mut self, token_type: &str) -> Self {
        self.token_type = Some(String::from(token_type));
        self
    }

    pub fn test(&self, token: &Token) -> bool {
        self.owner.as_deref().map_or(true, |owner| token.owner == owner)
            && self
                .token_type
                .as_deref()
                .map_or(true, |token_type| token.token_type == token_type)
    }
}
