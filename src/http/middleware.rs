//! Request body validation middleware.
//!
//! Mirrors the body-parsing stage of the middleware pipeline: requests
//! carrying a JSON or form-urlencoded content type have their body buffered
//! and parsed up front. A malformed body fails the request with HTTP 400
//! before any feature router handler runs. The buffered bytes are restored
//! onto the request so downstream extractors still see the original body,
//! and the parsed payload is exposed as a request extension.

use axum::{
    body::Body,
    extract::Request,
    http::header::CONTENT_TYPE,
    middleware::Next,
    response::Response,
};
use http_body_util::BodyExt;

use super::error::AppError;

/// Structured payload extracted from a validated request body.
#[derive(Debug, Clone)]
pub struct ParsedBody(pub serde_json::Value);

/// Content types this middleware validates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum BodyKind {
    Json,
    Form,
}

fn body_kind(req: &Request) -> Option<BodyKind> {
    let content_type = req.headers().get(CONTENT_TYPE)?.to_str().ok()?;
    // Strip parameters such as "; charset=utf-8".
    let essence = content_type
        .split(';')
        .next()
        .unwrap_or_default()
        .trim()
        .to_ascii_lowercase();
    match essence.as_str() {
        "application/json" => Some(BodyKind::Json),
        "application/x-www-form-urlencoded" => Some(BodyKind::Form),
        _ => None,
    }
}

/// Validate JSON and form-urlencoded request bodies before routing continues.
pub async fn validate_body(req: Request, next: Next) -> Result<Response, AppError> {
    let Some(kind) = body_kind(&req) else {
        return Ok(next.run(req).await);
    };

    let (mut parts, body) = req.into_parts();
    let bytes = body
        .collect()
        .await
        .map_err(|e| AppError::BadRequest(format!("failed to read request body: {e}")))?
        .to_bytes();

    // An empty body is allowed; extractors decide whether one is required.
    if !bytes.is_empty() {
        let payload = match kind {
            BodyKind::Json => serde_json::from_slice::<serde_json::Value>(&bytes)
                .map_err(|e| AppError::BadRequest(format!("malformed JSON body: {e}")))?,
            BodyKind::Form => {
                let pairs: Vec<(String, String)> = serde_urlencoded::from_bytes(&bytes)
                    .map_err(|e| AppError::BadRequest(format!("malformed form body: {e}")))?;
                serde_json::Value::Object(
                    pairs
                        .into_iter()
                        .map(|(k, v)| (k, serde_json::Value::String(v)))
                        .collect(),
                )
            }
        };
        parts.extensions.insert(ParsedBody(payload));
    }

    let req = Request::from_parts(parts, Body::from(bytes));
    Ok(next.run(req).await)
}
