//! JSON response writer shared by every handler.

use std::fmt::Debug;

use axum::body::Body;
use axum::http::{header, HeaderValue, StatusCode};
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use crate::logger::Logger;

/// Written verbatim when the chosen envelope cannot be encoded.
pub const DEGRADED_BODY: &str = r#"{"error":"Internal server error"}"#;

/// Encode `data` and respond with it as `application/json`.
///
/// The body is encoded before anything is committed to the response, so an
/// encoding failure replaces the whole response: the error is logged with the
/// offending payload and [`DEGRADED_BODY`] goes out with a 500.
pub fn return_json<T>(logger: &Logger, status: StatusCode, data: &T) -> Response
where
    T: Serialize + Debug + ?Sized,
{
    match serde_json::to_vec(data) {
        Ok(body) => json_response(status, body),
        Err(err) => {
            logger.in_scope(|| {
                tracing::error!(err = %err, data = ?data, "Error while marshaling data");
            });
            json_response(StatusCode::INTERNAL_SERVER_ERROR, DEGRADED_BODY)
        }
    }
}

fn json_response(status: StatusCode, body: impl Into<Body>) -> Response {
    let body: Body = body.into();
    (
        status,
        [(
            header::CONTENT_TYPE,
            HeaderValue::from_static("application/json"),
        )],
        body,
    )
        .into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::envelope::ErrorEnvelope;
    use crate::test_support::capture_logger;
    use axum::body::to_bytes;
    use std::collections::BTreeMap;
    use tracing::Level;

    /// Tuple keys have no JSON object-key form.
    #[derive(Debug, Serialize)]
    struct Unencodable {
        name: &'static str,
        scores: BTreeMap<(u8, u8), u32>,
    }

    fn unencodable() -> Unencodable {
        Unencodable {
            name: "John Doe",
            scores: BTreeMap::from([((1, 2), 3)]),
        }
    }

    async fn body_string(response: Response) -> String {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    #[tokio::test]
    async fn writes_status_header_and_compact_body() {
        let (logger, capture) = capture_logger();
        let response = return_json(&logger, StatusCode::CREATED, &ErrorEnvelope::internal());

        assert_eq!(response.status(), StatusCode::CREATED);
        assert_eq!(
            response.headers()[header::CONTENT_TYPE],
            "application/json"
        );
        assert_eq!(
            body_string(response).await,
            r#"{"error":"Internal server error"}"#
        );
        assert!(capture.is_empty());
    }

    #[tokio::test]
    async fn encoding_failure_degrades_to_fixed_body() {
        let (logger, capture) = capture_logger();
        let response = return_json(&logger, StatusCode::OK, &unencodable());

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            response.headers()[header::CONTENT_TYPE],
            "application/json"
        );
        assert_eq!(body_string(response).await, DEGRADED_BODY);

        let events = capture.events();
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].level, Level::ERROR);
        assert!(events[0].message.contains("marshaling"));
        assert!(events[0].fields["data"].contains("John Doe"));
        assert!(events[0].fields["err"].contains("key must be"));
        assert_eq!(capture.count_at(Level::INFO), 0);
    }
}
