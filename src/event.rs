use serde::{Deserialize, Serialize};

/// Name of the transfer-style notification emitted by mint.
pub const TRANSFER_EVENT: &str = "Transfer";

/// Name of the notification emitted on attribute and uri updates.
pub const XATTR_EVENT: &str = "ExtensibleAttribute";

/// Sink for notifications emitted on successful mutations. Delivery is
/// the host runtime's concern; emitting cannot fail.
pub trait EventSink {
    fn emit(&mut self, name: &str, payload: &[u8]);
}

/// Payload of the mint notification. `from` is empty on mint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransferEvent {
    pub from: String,
    pub to: String,
    pub id: String,
}

/// Captures events instead of delivering them.
#[derive(Debug, Default)]
pub struct RecordedEvents {
    pub events: Vec<(String, Vec<u8>)>,
}

impl RecordedEvents {
    pub fn new() -> Self {
        Self::default()
    }
}

impl EventSink for RecordedEvents {
    fn emit(&mut self, name: &str, payload: &[u8]) {
        self.events.push((String::from(name), payload.to_vec()));
    }
}
