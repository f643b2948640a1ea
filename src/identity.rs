/// Resolves the address of the transaction caller. The host runtime
/// provides the real implementation; mint stamps its result as the owner.
pub trait CallerIdentity {
    fn caller(&self) -> String;
}

/// Fixed caller address, for tests and single-tenant embeddings.
#[derive(Debug, Clone)]
pub struct StaticIdentity {
    address: String,
}

impl StaticIdentity {
    pub fn new(address: &str) -> Self {
        Self {
            address: String::from(address),
        }
    }
}

impl CallerIdentity for StaticIdentity {
    fn caller(&self) -> String {
        self.address.clone()
    }
}
