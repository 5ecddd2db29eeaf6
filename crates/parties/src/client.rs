use serde::{Deserialize, Serialize};

use depot_core::ValueObject;

/// The customer an order ships to.
///
/// Pure value: equal when all fields are equal, never looked up by id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Client {
    pub name: String,
    pub address: String,
    pub phone: String,
}

impl Client {
    pub fn new(
        name: impl Into<String>,
        address: impl Into<String>,
        phone: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            address: address.into(),
            phone: phone.into(),
        }
    }
}

impl ValueObject for Client {}

impl core::fmt::Display for Client {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        writeln!(f, "client: {}", self.name)?;
        writeln!(f, "  address: {}", self.address)?;
        write!(f, "  phone: {}", self.phone)
    }
}
