//! Request tagging and access logging.
//!
//! Every response carries an `x-request-id`. Chat responses additionally
//! carry the [`MatchLayer`] that resolved the question as a response
//! extension, which the access log reports next to status and latency.

use axum::extract::Request;
use axum::http::HeaderValue;
use axum::middleware::Next;
use axum::response::Response;
use faqbot::MatchLayer;
use std::time::Instant;

pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// Correlation id of the current request, reused from the caller when sent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestId(pub String);

impl RequestId {
    fn from_request(request: &Request) -> Self {
        let id = request
            .headers()
            .get(REQUEST_ID_HEADER)
            .and_then(|v| v.to_str().ok())
            .filter(|id| !id.is_empty())
            .map(str::to_owned)
            .unwrap_or_else(|| uuid::Uuid::new_v4().to_string());
        Self(id)
    }
}

/// Attach a [`RequestId`] to the request and echo it on the response.
pub async fn request_id(mut request: Request, next: Next) -> Response {
    let id = RequestId::from_request(&request);
    request.extensions_mut().insert(id.clone());

    let mut response = next.run(request).await;
    if let Ok(value) = HeaderValue::from_str(&id.0) {
        response.headers_mut().insert(REQUEST_ID_HEADER, value);
    }
    response
}

/// One log line per request, with the resolution layer for chat calls.
pub async fn log_requests(request: Request, next: Next) -> Response {
    let method = request.method().clone();
    let path = request.uri().path().to_owned();
    let request_id = request
        .extensions()
        .get::<RequestId>()
        .map(|id| id.0.clone())
        .unwrap_or_default();
    let start = Instant::now();

    let response = next.run(request).await;

    let status = response.status();
    let latency_ms = start.elapsed().as_millis() as u64;
    match response.extensions().get::<MatchLayer>() {
        Some(layer) => tracing::info!(
            %method,
            %path,
            %status,
            latency_ms,
            %request_id,
            layer = layer.as_str(),
            "question answered"
        ),
        None => tracing::info!(
            %method,
            %path,
            %status,
            latency_ms,
            %request_id,
            "request completed"
        ),
    }

    response
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;

    #[test]
    fn caller_request_id_is_reused() {
        let request = Request::builder()
            .header(REQUEST_ID_HEADER, "abc-123")
            .body(Body::empty())
            .unwrap();
        assert_eq!(RequestId::from_request(&request).0, "abc-123");
    }

    #[test]
    fn missing_or_empty_request_id_is_generated() {
        let request = Request::builder()
            .header(REQUEST_ID_HEADER, "")
            .body(Body::empty())
            .unwrap();
        let id = RequestId::from_request(&request);
        assert!(uuid::Uuid::parse_str(&id.0).is_ok());

        let request = Request::builder().body(Body::empty()).unwrap();
        assert_ne!(RequestId::from_request(&request), id);
    }
}
