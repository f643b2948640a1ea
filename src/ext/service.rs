use std::collections::HashMap;

use log::{debug, info};

use crate::codec;
use crate::event::{EventSink, TransferEvent, TRANSFER_EVENT, XATTR_EVENT};
use crate::ext::ExtensionError;
use crate::identity::CallerIdentity;
use crate::schema::TypeRegistry;
use crate::storage::{Ledger, Selector, StorageError};
use crate::token::{Token, Uri};
use crate::value::Value;

/// Entry point for the ledger-transaction dispatcher. Every operation is
/// one synchronous unit of work: all validation completes before the
/// single store call, so a failure never leaves a half-applied record.
pub struct ExtensionService<L, I, E> {
    ledger: L,
    identity: I,
    events: E,
}

impl<L: Ledger, I: CallerIdentity, E: EventSink> ExtensionService<L, I, E> {
    pub fn new(ledger: L, identity: I, events: E) -> Self {
        Self {
            ledger,
            identity,
            events,
        }
    }

    pub fn ledger(&self) -> &L {
        &self.ledger
    }

    pub fn ledger_mut(&mut self) -> &mut L {
        &mut self.ledger
    }

    pub fn events(&self) -> &E {
        &self.events
    }

    /// Creates a token of a declared type. The supplied xattr mapping may
    /// cover any subset of the type's attributes; the schema defaults fill
    /// the rest. Supplied values are kept as-is and their kinds are not
    /// re-checked, only unknown keys are rejected.
    pub fn mint(
        &mut self,
        id: &str,
        type_name: &str,
        xattr: Option<HashMap<String, Value>>,
        uri: Option<HashMap<String, String>>,
    ) -> Result<(), ExtensionError> {
        let registry = TypeRegistry::load(&self.ledger)?;
        let schema = registry
            .get_type(type_name)
            .ok_or_else(|| ExtensionError::SchemaNotFound(String::from(type_name)))?;

        let mut xattr = xattr.unwrap_or_default();
        if let Some(unknown) = xattr.keys().find(|key| !schema.contains(key.as_str())) {
            debug!("mint {}: unknown attribute `{}`", id, unknown);
            return Err(ExtensionError::UnknownAttribute(unknown.clone()));
        }

        for (name, attribute) in schema.iter() {
            if xattr.contains_key(name) {
                continue;
            }
            let value = codec::decode(attribute.kind, &attribute.default).ok_or_else(|| {
                ExtensionError::InvalidDefault {
                    attribute: name.clone(),
                    literal: attribute.default.clone(),
                }
            })?;
            xattr.insert(name.clone(), value);
        }

        let uri = match uri {
            None => Uri::default(),
            Some(map) => Uri::from_map(&map).ok_or(ExtensionError::InvalidUriShape)?,
        };

        if Token::exists(&self.ledger, id)? {
            return Err(ExtensionError::DuplicateId(String::from(id)));
        }

        let owner = self.identity.caller();
        let token = Token {
            id: String::from(id),
            token_type: String::from(type_name),
            owner: owner.clone(),
            approvee: String::new(),
            xattr,
            uri,
        };
        token.store(&mut self.ledger)?;

        self.emit_transfer("", &owner, id)?;
        info!("minted token `{}` of type `{}` for `{}`", id, type_name, owner);
        Ok(())
    }

    /// Number of tokens of `type_name` held by `owner`.
    pub fn balance_of(&self, owner: &str, type_name: &str) -> Result<usize, ExtensionError> {
        Ok(self.token_ids_of(owner, type_name)?.len())
    }

    /// Ids of the tokens of `type_name` held by `owner`, in the order the
    /// query backend returns them.
    pub fn token_ids_of(&self, owner: &str, type_name: &str) -> Result<Vec<String>, ExtensionError> {
        let selector = Selector::new().with_owner(owner).with_type(type_name);
        let mut ids = Vec::new();
        for bytes in self.ledger.query(&selector)? {
            let token: Token = serde_json::from_slice(&bytes).map_err(StorageError::from)?;
            ids.push(token.id);
        }
        Ok(ids)
    }

    pub fn get_uri(&self, id: &str, key: &str) -> Result<Option<String>, ExtensionError> {
        let token = Token::load(&self.ledger, id)?;
        Ok(token.uri.get(key).map(String::from))
    }

    /// Replaces one uri field. `Ok(())` means the record was mutated and
    /// stored; an unrecognized key rejects without touching it.
    pub fn set_uri(&mut self, id: &str, key: &str, value: &str) -> Result<(), ExtensionError> {
        let mut token = Token::load(&self.ledger, id)?;
        if !token.uri.set(key, value) {
            return Err(ExtensionError::UnknownUriKey(String::from(key)));
        }
        token.store(&mut self.ledger)?;

        self.emit_xattr_update(id, key, value);
        Ok(())
    }

    /// Reads one attribute back in its canonical string form. Absent on a
    /// key the token does not carry or the type's schema does not declare.
    pub fn get_xattr(&self, id: &str, key: &str) -> Result<Option<String>, ExtensionError> {
        let token = Token::load(&self.ledger, id)?;
        let value = match token.xattr.get(key) {
            Some(value) => value,
            None => return Ok(None),
        };

        let registry = TypeRegistry::load(&self.ledger)?;
        if registry.get_attribute(&token.token_type, key).is_none() {
            return Ok(None);
        }
        Ok(Some(codec::encode(value)))
    }

    /// Decodes `literal` against the attribute's declared kind and
    /// replaces the stored value. Rejections leave the prior value intact.
    pub fn set_xattr(&mut self, id: &str, key: &str, literal: &str) -> Result<(), ExtensionError> {
        let mut token = Token::load(&self.ledger, id)?;
        if !token.xattr.contains_key(key) {
            return Err(ExtensionError::UnknownAttribute(String::from(key)));
        }

        let registry = TypeRegistry::load(&self.ledger)?;
        let attribute = registry
            .get_attribute(&token.token_type, key)
            .ok_or_else(|| ExtensionError::UnknownAttribute(String::from(key)))?;
        let value = codec::decode(attribute.kind, literal).ok_or_else(|| {
            debug!("set_xattr {}: bad literal `{}` for `{}`", id, literal, key);
            ExtensionError::InvalidAttributeValue {
                attribute: String::from(key),
                literal: String::from(literal),
            }
        })?;

        token.xattr.insert(String::from(key), value);
        token.store(&mut self.ledger)?;

        self.emit_xattr_update(id, key, literal);
        Ok(())
    }

    fn emit_transfer(&mut self, from: &str, to: &str, id: &str) -> Result<(), ExtensionError> {
        let event = TransferEvent {
            from: String::from(from),
            to: String::from(to),
            id: String::from(id),
        };
        let payload = serde_json::to_vec(&event).map_err(StorageError::from)?;
        self.events.emit(TRANSFER_EVENT, &payload);
        Ok(())
    }

    fn emit_xattr_update(&mut self, id: &str, key: &str, value: &str) {
        let message = format!("Update attribute {} to {} in Token {}", key, value, id);
        self.events.emit(XATTR_EVENT, message.as_bytes());
    }
}
