//! The per-type attribute schemas, kept in one ledger document and loaded
//! once per operation.

use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::storage::{Ledger, StorageError};
use crate::value::DataKind;

/// Reserved ledger key holding the type-schema document.
pub const TOKEN_TYPES_KEY: &str = "token_types";

/// Schema entry for one extensible attribute: its data kind and the
/// literal minted in when the caller omits the attribute. Persisted as a
/// `[tag, default]` pair.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(into = "(String, String)", try_from = "(String, String)")]
pub struct AttributeSchema {
    pub kind: DataKind,
    pub default: String,
}

impl From<AttributeSchema> for (String, String) {
    fn from(attribute: AttributeSchema) -> Self {
        (String::from(attribute.kind.tag()), attribute.default)
    }
}

impl TryFrom<(String, String)> for AttributeSchema {
    type Error = UnknownKindTag;

    fn try_from((tag, default): (String, String)) -> Result<Self, Self::Error> {
        let kind = DataKind::from_tag(&tag).ok_or(UnknownKindTag(tag))?;
        Ok(Self { kind, default })
    }
}

pub struct UnknownKindTag(String);

impl fmt::Display for UnknownKindTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown data kind tag `{}`", self.0)
    }
}

/// The declared attribute set for one token type. Attribute names are
/// unique within the type.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TypeSchema(HashMap<String, AttributeSchema>);

impl TypeSchema {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_attribute(mut self, name: &str, kind: DataKind, default: &str) -> Self {
        self.0.insert(
            String::from(name),
            AttributeSchema {
                kind,
                default: String::from(default),
            },
        );
        self
    }

    pub fn get(&self, attribute: &str) -> Option<&AttributeSchema> {
        self.0.get(attribute)
    }

    pub fn contains(&self, attribute: &str) -> bool {
        self.0.contains_key(attribute)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &AttributeSchema)> {
        self.0.iter()
    }
}

/// All declared token types. Absence of a type or attribute is a normal
/// outcome; every caller branches on it explicitly.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TypeRegistry(HashMap<String, TypeSchema>);

impl TypeRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reads the schema document; an absent document is an empty registry.
    pub fn load<L: Ledger>(ledger: &L) -> Result<Self, StorageError> {
        match ledger.get(TOKEN_TYPES_KEY)? {
            Some(bytes) => Ok(serde_json::from_slice(&bytes)?),
            None => Ok(Self::default()),
        }
    }

    pub fn save<L: Ledger>(&self, ledger: &mut L) -> Result<(), StorageError> {
        ledger.put(TOKEN_TYPES_KEY, serde_json::to_vec(self)?)
    }

    pub fn define_type(&mut self, name: &str, schema: TypeSchema) {
        self.0.insert(String::from(name), schema);
    }

    pub fn get_type(&self, name: &str) -> Option<&TypeSchema> {
        self.0.get(name)
    }

    pub fn get_attribute(&self, type_name: &str, attribute: &str) -> Option<&AttributeSchema> {
        self.get_type(type_name)?.get(attribute)
    }
}
