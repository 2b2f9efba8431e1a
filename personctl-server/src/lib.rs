//! personctl-server: HTTP front for the person provider
//!
//! Serves `GET /person` through a handler that owns its collaborators:
//! an injected [`Logger`] and a [`PersonProvider`]. The same handler can
//! be wired into axum three ways (see [`wiring`]); all of them answer
//! identically.

pub mod envelope;
pub mod error;
pub mod handler;
pub mod logger;
pub mod response;
pub mod server;
pub mod wiring;

#[cfg(any(test, feature = "test-support"))]
pub mod test_support;

pub use envelope::{ErrorEnvelope, PersonEnvelope};
pub use error::{ServerError, ServerResult};
pub use handler::{respond_person, PersonHandler};
pub use logger::Logger;
pub use personctl_core::{Person, PersonProvider, ProviderError, StaticProvider};
pub use response::{return_json, DEGRADED_BODY};
pub use server::{build_router, run_server, serve, ServerConfig};
pub use wiring::{bundle_closure, params_closure, Wiring};
