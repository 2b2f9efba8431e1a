//! The person handler and the operation it serves.

use std::sync::Arc;

use axum::http::StatusCode;
use axum::response::Response;
use axum::routing::{get, MethodRouter};
use personctl_core::PersonProvider;
use tracing::{error, info};

use crate::envelope::{ErrorEnvelope, PersonEnvelope};
use crate::logger::Logger;
use crate::response::return_json;

/// Dependency bundle: a logger and a provider.
///
/// Holds no per-request state; one instance serves every request.
#[derive(Debug)]
pub struct PersonHandler<P> {
    logger: Logger,
    provider: P,
}

impl<P: PersonProvider> PersonHandler<P> {
    pub fn new(logger: Logger, provider: P) -> Self {
        Self { logger, provider }
    }

    pub fn logger(&self) -> &Logger {
        &self.logger
    }

    pub fn provider(&self) -> &P {
        &self.provider
    }

    /// GET /person
    pub fn get_person(&self) -> Response {
        respond_person(&self.logger, &self.provider)
    }

    /// Logs the call and writes no body.
    pub fn health(&self) -> StatusCode {
        self.logger.in_scope(|| info!("Health check called"));
        StatusCode::OK
    }

    /// Route for [`Self::health`]. Not mounted by [`crate::build_router`].
    pub fn health_route(self: Arc<Self>) -> MethodRouter {
        get(move || {
            let handler = Arc::clone(&self);
            async move { handler.health() }
        })
    }
}

/// Fetch the record and encode the outcome.
///
/// Provider failures are logged once and answered with a generic 500
/// envelope; the record is answered with 200. Nothing is logged on success.
pub fn respond_person<P>(logger: &Logger, provider: &P) -> Response
where
    P: PersonProvider + ?Sized,
{
    let person = match provider.get_person() {
        Ok(person) => person,
        Err(err) => {
            logger.in_scope(|| error!(err = %err, "Error while retrieving data"));
            return return_json(
                logger,
                StatusCode::INTERNAL_SERVER_ERROR,
                &ErrorEnvelope::internal(),
            );
        }
    };

    return_json(logger, StatusCode::OK, &PersonEnvelope { person })
}
