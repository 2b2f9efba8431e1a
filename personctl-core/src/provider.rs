//! Data provider port.

use std::sync::Arc;

use crate::error::Result;
use crate::person::Person;

/// Supplies one person record per call.
///
/// Calls are synchronous and bounded. Implementations hold no per-request
/// state, so a single provider is shared across all requests.
pub trait PersonProvider: Send + Sync + 'static {
    fn get_person(&self) -> Result<Person>;
}

impl<P: PersonProvider + ?Sized> PersonProvider for Arc<P> {
    fn get_person(&self) -> Result<Person> {
        (**self).get_person()
    }
}

/// Stub provider returning [`Person::john_doe`]. Never fails.
#[derive(Debug, Clone, Copy, Default)]
pub struct StaticProvider;

impl PersonProvider for StaticProvider {
    fn get_person(&self) -> Result<Person> {
        Ok(Person::john_doe())
    }
}
