//! JSON request bodies.
//!
//! A body counts as JSON only when it is declared as such (`application/json`
//! or a `+json` suffix), is non-empty, parses, and is not `null`. Anything
//! else is answered with 415 before a handler runs.

use axum::{
    body::Bytes,
    extract::{FromRequest, Request},
    http::{header, HeaderMap},
    response::{IntoResponse, Response},
};
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::{AppError, AppResult};
use crate::validation::Schema;

const NOT_JSON: &str = "Request content type must be JSON";

/// An untyped JSON document, checked against a [`Schema`] before use.
#[derive(Debug, Clone)]
pub struct JsonDocument(pub Value);

impl<S> FromRequest<S> for JsonDocument
where
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        if !has_json_content_type(req.headers()) {
            return Err(AppError::UnsupportedMediaType(NOT_JSON.to_string()).into_response());
        }

        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(IntoResponse::into_response)?;

        Self::from_body(&bytes).map_err(IntoResponse::into_response)
    }
}

impl JsonDocument {
    /// Decode an already-buffered body, for handlers that must do other
    /// checks before the body is judged.
    ///
    /// # Errors
    ///
    /// `AppError::UnsupportedMediaType` under the same rules as the extractor.
    pub fn decode(headers: &HeaderMap, body: &[u8]) -> AppResult<Self> {
        if !has_json_content_type(headers) {
            return Err(AppError::UnsupportedMediaType(NOT_JSON.to_string()));
        }
        Self::from_body(body)
    }

    fn from_body(body: &[u8]) -> AppResult<Self> {
        match serde_json::from_slice::<Value>(body) {
            Ok(Value::Null) | Err(_) => Err(AppError::UnsupportedMediaType(NOT_JSON.to_string())),
            Ok(value) => Ok(Self(value)),
        }
    }

    /// Validate against `schema`, then deserialize into `T`.
    ///
    /// # Errors
    ///
    /// `AppError::Validation` on a schema violation, `AppError::BadRequest`
    /// if the validated document still does not fit `T` (e.g. an integer out
    /// of range).
    pub fn parse<T: DeserializeOwned>(self, schema: &Schema) -> AppResult<T> {
        schema.validate(&self.0)?;
        serde_json::from_value(self.0).map_err(|e| AppError::BadRequest(e.to_string()))
    }
}

fn has_json_content_type(headers: &HeaderMap) -> bool {
    let Some(content_type) = headers
        .get(header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
    else {
        return false;
    };

    let mime = content_type
        .split(';')
        .next()
        .unwrap_or_default()
        .trim()
        .to_ascii_lowercase();

    mime == "application/json" || (mime.starts_with("application/") && mime.ends_with("+json"))
}
