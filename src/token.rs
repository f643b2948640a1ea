use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::storage::{Ledger, StorageError};
use crate::value::Value;

pub const HASH_KEY: &str = "hash";
pub const PATH_KEY: &str = "path";

/// External-resource reference carried by every token: a content hash and
/// a path or URI to the resource itself. Both fields default to empty.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Uri {
    pub hash: String,
    pub path: String,
}

impl Uri {
    /// Accepts a caller-supplied mapping only when it holds exactly the
    /// `hash` and `path` keys, nothing more, nothing less.
    pub fn from_map(map: &HashMap<String, String>) -> Option<Self> {
        if map.len() != 2 || !map.contains_key(HASH_KEY) || !map.contains_key(PATH_KEY) {
            return None;
        }
        Some(Self {
            hash: map[HASH_KEY].clone(),
            path: map[PATH_KEY].clone(),
        })
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        match key {
            HASH_KEY => Some(&self.hash),
            PATH_KEY => Some(&self.path),
            _ => None,
        }
    }

    /// Replaces one field. Returns false when `key` names neither field,
    /// leaving the bag untouched.
    pub fn set(&mut self, key: &str, value: &str) -> bool {
        match key {
            HASH_KEY => self.hash = String::from(value),
            PATH_KEY => self.path = String::from(value),
            _ => return false,
        }
        true
    }
}

/// One NFT record, persisted as JSON under its id key. After a successful
/// mint the xattr key set equals the attribute set its type declares.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Token {
    pub id: String,
    #[serde(rename = "type")]
    pub token_type: String,
    pub owner: String,
    pub approvee: String,
    pub xattr: HashMap<String, Value>,
    pub uri: Uri,
}

impl Token {
    pub fn exists<L: Ledger>(ledger: &L, id: &str) -> Result<bool, StorageError> {
        Ok(ledger.get(id)?.is_some())
    }

    pub fn load<L: Ledger>(ledger: &L, id: &str) -> Result<Self, StorageError> {
        let bytes = ledger
            .get(id)?
            .ok_or_else(|| StorageError::NotFound(String::from(id)))?;
        Ok(serde_json::from_slice(&bytes)?)
    }

    /// Writes the complete record, replacing any prior value for the id.
    /// Only reached once validation has fully succeeded.
    pub fn store<L: Ledger>(&self, ledger: &mut L) -> Result<(), StorageError> {
        ledger.put(&self.id, serde_json::to_vec(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::memory::InMemoryLedger;

    fn uri_map(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(key, value)| (String::from(*key), String::from(*value)))
            .collect()
    }

    #[test]
    fn uri_accepts_exactly_hash_and_path() {
        let uri = Uri::from_map(&uri_map(&[("hash", "abc"), ("path", "/a")])).unwrap();
        assert_eq!("abc", uri.hash);
        assert_eq!("/a", uri.path);
    }

    #[test]
    fn uri_rejects_missing_extra_or_misnamed_keys() {
        assert_eq!(None, Uri::from_map(&uri_map(&[("hash", "abc")])));
        assert_eq!(
            None,
            Uri::from_map(&uri_map(&[("hash", "a"), ("path", "b"), ("mime", "c")]))
        );
        assert_eq!(None, Uri::from_map(&uri_map(&[("hash", "a"), ("uri", "b")])));
        assert_eq!(None, Uri::from_map(&uri_map(&[])));
    }

    #[test]
    fn uri_fields_are_addressable_by_key() {
        let mut uri = Uri::default();
        assert_eq!(Some(""), uri.get("hash"));

        assert!(uri.set("path", "/assets/1"));
        assert_eq!(Some("/assets/1"), uri.get("path"));

        assert!(!uri.set("mime", "png"));
        assert_eq!(None, uri.get("mime"));
    }

    #[test]
    fn record_round_trips_through_the_ledger() {
        let mut ledger = InMemoryLedger::new();
        let token = Token {
            id: String::from("T1"),
            token_type: String::from("Widget"),
            owner: String::from("alice"),
            approvee: String::new(),
            xattr: HashMap::from([(String::from("weight"), Value::Integer(7))]),
            uri: Uri::default(),
        };

        assert!(!Token::exists(&ledger, "T1").unwrap());
        token.store(&mut ledger).unwrap();
        assert!(Token::exists(&ledger, "T1").unwrap());

        assert_eq!(token, Token::load(&ledger, "T1").unwrap());
    }

    #[test]
    fn loading_an_absent_token_is_not_found() {
        let ledger = InMemoryLedger::new();
        assert!(matches!(
            Token::load(&ledger, "T1"),
            Err(StorageError::NotFound(id)) if id == "T1"
        ));
    }

    #[test]
    fn record_serializes_its_type_under_the_type_field() {
        let token = Token {
            id: String::from("T1"),
            token_type: String::from("Widget"),
            owner: String::from("alice"),
            approvee: String::new(),
            xattr: HashMap::new(),
            uri: Uri::default(),
        };

        let json: serde_json::Value = serde_json::to_value(&token).unwrap();
        assert_eq!("Widget", json["type"]);
    }
}
