//! personctl-core: the person record and the provider port that serves it.
//!
//! The HTTP layer lives in `personctl-server`; this crate has no I/O.

pub mod error;
pub mod person;
pub mod provider;

pub use error::{ProviderError, Result};
pub use person::Person;
pub use provider::{PersonProvider, StaticProvider};
