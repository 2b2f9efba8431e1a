use serde::{Deserialize, Serialize};

/// A person record as served over the wire.
///
/// Field order is the serialization order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Person {
    pub name: String,
    pub age: u32,
    pub email: String,
    pub active: bool,
}

impl Person {
    pub fn new(name: impl Into<String>, age: u32, email: impl Into<String>, active: bool) -> Self {
        Self {
            name: name.into(),
            age,
            email: email.into(),
            active,
        }
    }

    /// The fixed record served by [`crate::StaticProvider`].
    pub fn john_doe() -> Self {
        Self::new("John Doe", 30, "john.doe@example.com", true)
    }
}
