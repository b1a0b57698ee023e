use std::convert::Infallible;
use std::fmt::{Display, Formatter};

use axum::{extract::FromRequestParts, http::request::Parts};
use uuid::Uuid;

pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// Per-request correlation identifier, set by the request-id layer.
/// Falls back to a fresh UUID when a handler runs without that layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CorrelationId(pub String);

impl Display for CorrelationId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl<S> FromRequestParts<S> for CorrelationId
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    fn from_request_parts(
        parts: &mut Parts,
        _state: &S,
    ) -> impl std::future::Future<Output = Result<Self, Self::Rejection>> + Send {
        let id = parts
            .headers
            .get(REQUEST_ID_HEADER)
            .and_then(|h| h.to_str().ok())
            .map(str::trim)
            .filter(|id| !id.is_empty())
            .map(str::to_string)
            .unwrap_or_else(|| Uuid::new_v4().to_string());

        async move { Ok(CorrelationId(id)) }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::Request;

    async fn extract(request: Request<()>) -> CorrelationId {
        let (mut parts, _) = request.into_parts();
        CorrelationId::from_request_parts(&mut parts, &())
            .await
            .unwrap()
    }

    #[tokio::test]
    async fn test_reads_header() {
        let request = Request::builder()
            .header(REQUEST_ID_HEADER, "abc-123")
            .body(())
            .unwrap();
        assert_eq!(extract(request).await, CorrelationId("abc-123".to_string()));
    }

    #[tokio::test]
    async fn test_generates_uuid_when_absent() {
        let id = extract(Request::builder().body(()).unwrap()).await;
        assert!(Uuid::parse_str(&id.0).is_ok());
    }
}
