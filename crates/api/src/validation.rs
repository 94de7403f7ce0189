//! Request-time validation of product payloads.
//!
//! [`Validated`] is an extractor: the handler only runs once the body has been
//! decoded into a typed, checked payload. Anything else is answered with 400.

use axum::async_trait;
use axum::extract::{FromRequest, Request};
use axum::Json;
use serde_json::Value;

use storefront_core::DomainResult;
use storefront_products::{NewProduct, ProductPatch};

use crate::app::errors::ApiError;

/// A payload type that can be checked from raw JSON.
pub trait ValidatedPayload: Sized {
    fn from_json(value: Value) -> DomainResult<Self>;
}

impl ValidatedPayload for NewProduct {
    fn from_json(value: Value) -> DomainResult<Self> {
        NewProduct::from_json(value)
    }
}

impl ValidatedPayload for ProductPatch {
    fn from_json(value: Value) -> DomainResult<Self> {
        ProductPatch::from_json(value)
    }
}

/// Extracts and validates a JSON body as `T`.
#[derive(Debug, Clone)]
pub struct Validated<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for Validated<T>
where
    S: Send + Sync,
    T: ValidatedPayload,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<Value>::from_request(req, state).await?;
        Ok(Self(T::from_json(value)?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::header::CONTENT_TYPE;
    use axum::http::StatusCode;
    use storefront_products::INVALID_PRODUCT_FIELDS;

    fn json_request(body: &str) -> Request {
        axum::http::Request::builder()
            .method("POST")
            .uri("/api/products")
            .header(CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    #[tokio::test]
    async fn accepts_valid_new_product() {
        let req = json_request(
            r#"{"name":"Desk","description":"Oak","price":10,"category":"furniture","inStock":true}"#,
        );
        let Validated(input) = Validated::<NewProduct>::from_request(req, &()).await.unwrap();
        assert_eq!(input.category, "furniture");
    }

    #[tokio::test]
    async fn rejects_string_price_with_fixed_message() {
        let req = json_request(
            r#"{"name":"Desk","description":"Oak","price":"10","category":"furniture","inStock":true}"#,
        );
        let err = Validated::<NewProduct>::from_request(req, &()).await.unwrap_err();
        assert!(matches!(err, ApiError::Validation(ref m) if m == INVALID_PRODUCT_FIELDS));
    }

    #[tokio::test]
    async fn malformed_json_is_a_bad_request() {
        let err = Validated::<ProductPatch>::from_request(json_request("{not json"), &())
            .await
            .unwrap_err();
        assert!(matches!(err, ApiError::Rejected { .. }));
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn missing_content_type_keeps_unsupported_media_type() {
        let req = axum::http::Request::builder()
            .method("POST")
            .uri("/api/products")
            .body(Body::from(r#"{"name":"Desk"}"#))
            .unwrap();
        let err = Validated::<NewProduct>::from_request(req, &()).await.unwrap_err();
        assert_eq!(err.status(), StatusCode::UNSUPPORTED_MEDIA_TYPE);
    }
}
