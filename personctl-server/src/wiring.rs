//! Three ways to hand the handler's collaborators to axum
//!
//! - [`bundle_closure`]: the whole [`PersonHandler`] is captured by a closure
//! - [`PersonHandler::method_closure`]: the bundle builds its own route
//! - [`params_closure`]: logger and provider are passed in separately
//!
//! All three serve `GET` only and answer identically.

use std::sync::Arc;

use axum::routing::{get, MethodRouter};
use clap::ValueEnum;
use personctl_core::PersonProvider;

use crate::handler::{respond_person, PersonHandler};
use crate::logger::Logger;

/// Dependency bundle captured by a closure built here.
pub fn bundle_closure<P: PersonProvider>(handler: Arc<PersonHandler<P>>) -> MethodRouter {
    get(move || {
        let handler = Arc::clone(&handler);
        async move { handler.get_person() }
    })
}

impl<P: PersonProvider> PersonHandler<P> {
    /// Route bound to this handler.
    pub fn method_closure(self: Arc<Self>) -> MethodRouter {
        get(move || {
            let handler = Arc::clone(&self);
            async move { handler.get_person() }
        })
    }
}

/// Raw collaborators passed as parameters.
pub fn params_closure<P: PersonProvider>(logger: Logger, provider: Arc<P>) -> MethodRouter {
    get(move || {
        let logger = logger.clone();
        let provider = Arc::clone(&provider);
        async move { respond_person(&logger, provider.as_ref()) }
    })
}

/// Wiring style selected at startup
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum Wiring {
    /// Handler bundle captured by a free-function closure
    Bundle,
    /// Route built by a method on the handler
    #[default]
    Method,
    /// Logger and provider passed as parameters
    Params,
}

impl Wiring {
    /// Build the `GET /person` route in this style.
    pub fn person_route<P: PersonProvider>(self, logger: Logger, provider: P) -> MethodRouter {
        match self {
            Self::Bundle => bundle_closure(Arc::new(PersonHandler::new(logger, provider))),
            Self::Method => Arc::new(PersonHandler::new(logger, provider)).method_closure(),
            Self::Params => params_closure(logger, Arc::new(provider)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::capture_logger;
    use axum::body::{to_bytes, Body};
    use axum::http::{Request, StatusCode};
    use axum::Router;
    use personctl_core::{Person, ProviderError, StaticProvider};
    use tower::ServiceExt;

    struct Failing;

    impl PersonProvider for Failing {
        fn get_person(&self) -> personctl_core::Result<Person> {
            Err(ProviderError::NotFound)
        }
    }

    const ALL: [Wiring; 3] = [Wiring::Bundle, Wiring::Method, Wiring::Params];

    async fn call(route: MethodRouter, method: &str) -> (StatusCode, Vec<u8>) {
        let app = Router::new().route("/person", route);
        let response = app
            .oneshot(
                Request::builder()
                    .method(method)
                    .uri("/person")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        let status = response.status();
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, body.to_vec())
    }

    #[tokio::test]
    async fn all_styles_answer_identically_on_success() {
        let mut answers = Vec::new();
        for wiring in ALL {
            let (logger, capture) = capture_logger();
            answers.push(call(wiring.person_route(logger, StaticProvider), "GET").await);
            assert!(capture.is_empty(), "{wiring:?} logged on success");
        }

        assert_eq!(answers[0].0, StatusCode::OK);
        assert!(answers.iter().all(|a| *a == answers[0]));
    }

    #[tokio::test]
    async fn all_styles_answer_identically_on_failure() {
        for wiring in ALL {
            let (logger, capture) = capture_logger();
            let (status, body) = call(wiring.person_route(logger, Failing), "GET").await;

            assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR, "{wiring:?}");
            assert_eq!(body, br#"{"error":"Internal server error"}"#, "{wiring:?}");
            assert_eq!(capture.events().len(), 1, "{wiring:?}");
        }
    }

    #[tokio::test]
    async fn only_get_is_routed() {
        for wiring in ALL {
            let (logger, _capture) = capture_logger();
            let (status, _) = call(wiring.person_route(logger, StaticProvider), "POST").await;
            assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED, "{wiring:?}");
        }
    }

    #[test]
    fn method_is_the_default_style() {
        assert_eq!(Wiring::default(), Wiring::Method);
        assert_eq!(
            Wiring::from_str("params", true).unwrap(),
            Wiring::Params
        );
    }
}
