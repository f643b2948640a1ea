use std::collections::BTreeMap;

use crate::storage::{Ledger, Selector, StorageError};
use crate::token::Token;

/// BTree-backed ledger, the reference backend for tests and embeddings
/// without a host chain. Key order makes query results deterministic.
#[derive(Debug, Default)]
pub struct InMemoryLedger {
    entries: BTreeMap<String, Vec<u8>>,
}

impl InMemoryLedger {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Ledger for InMemoryLedger {
    fn get(&self, key: &str) -> Result<Option<Vec<u8>>, StorageError> {
        Ok(self.entries.get(key).cloned())
    }

    fn put(&mut self, key: &str, bytes: Vec<u8>) -> Result<(), StorageError> {
        self.entries.insert(String::from(key), bytes);
        Ok(())
    }

    fn query(&self, selector: &Selector) -> Result<Vec<Vec<u8>>, StorageError> {
        // Entries that do not parse as token records (the schema document
        // among them) are not part of the scan.
        Ok(self
            .entries
            .values()
            .filter(|bytes| {
                serde_json::from_slice::<Token>(bytes)
                    .map(|token| selector.test(&token))
                    .unwrap_or(false)
            })
            .cloned()
            .collect())
    }
}
