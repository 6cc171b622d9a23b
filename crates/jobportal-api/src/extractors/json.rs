//! JSON body extractors that run `validator` rules.
//!
//! [`ValidatedJson`] parses while extracting, for public routes. [`JsonBody`]
//! only buffers the bytes, so a handler can settle who the caller is
//! before the payload is judged.

use std::marker::PhantomData;

use axum::Json;
use axum::body::Bytes;
use axum::extract::rejection::BytesRejection;
use axum::extract::{FromRequest, Request};
use serde::de::DeserializeOwned;
use validator::Validate;

use jobportal_core::error::AppError;

use crate::error::ApiError;

/// Deserialized and validated JSON payload.
///
/// Malformed JSON and rule violations both reject with `400`.
#[derive(Debug, Clone)]
pub struct ValidatedJson<T>(pub T);

impl<S, T> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|e| AppError::validation(format!("Invalid JSON: {}", e.body_text())))?;

        Ok(ValidatedJson(validated(value)?))
    }
}

/// Buffered JSON body, parsed on demand with [`JsonBody::parse`].
///
/// Extraction fails only when the body cannot be read (for example past
/// the body limit).
#[derive(Debug, Clone)]
pub struct JsonBody<T> {
    bytes: Bytes,
    _marker: PhantomData<fn() -> T>,
}

impl<T> JsonBody<T>
where
    T: DeserializeOwned + Validate,
{
    /// Deserialize and validate the buffered body.
    pub fn parse(self) -> Result<T, ApiError> {
        let Json(value) = Json::<T>::from_bytes(&self.bytes)
            .map_err(|e| AppError::validation(format!("Invalid JSON: {}", e.body_text())))?;
        validated(value)
    }
}

impl<S, T> FromRequest<S> for JsonBody<T>
where
    S: Send + Sync,
{
    type Rejection = BytesRejection;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = Bytes::from_request(req, state).await?;
        Ok(Self {
            bytes,
            _marker: PhantomData,
        })
    }
}

fn validated<T: Validate>(value: T) -> Result<T, ApiError> {
    value.validate().map_err(|errors| {
        let details = serde_json::to_value(&errors).unwrap_or_default();
        ApiError::from(AppError::validation("Request validation failed")).with_details(details)
    })?;
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use jobportal_core::error::ErrorKind;
    use serde::Deserialize;

    #[derive(Debug, Deserialize, Validate)]
    struct Named {
        #[validate(length(min = 1))]
        name: String,
    }

    fn body(raw: &str) -> JsonBody<Named> {
        JsonBody {
            bytes: Bytes::copy_from_slice(raw.as_bytes()),
            _marker: PhantomData,
        }
    }

    #[test]
    fn test_parse_valid_body() {
        let named = body(r#"{"name":"Ada"}"#).parse().unwrap();
        assert_eq!(named.name, "Ada");
    }

    #[test]
    fn test_parse_rejects_malformed_and_invalid() {
        for raw in ["{", "{}", r#"{"name":""}"#] {
            let err = body(raw).parse().unwrap_err();
            assert_eq!(err.inner().kind, ErrorKind::Validation, "{raw}");
        }
    }
}
