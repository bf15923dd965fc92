//! Domain-specific identifier types.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Address of a target contract (bech32 string as configured).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ContractAddress(pub String);

impl ContractAddress {
    /// Create a contract address from anything string-like.
    pub fn new(address: impl Into<String>) -> Self {
        Self(address.into())
    }

    /// Get the address as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ContractAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ContractAddress {
    fn from(address: &str) -> Self {
        Self::new(address)
    }
}
