//! REST call to the calculation endpoint.
//!
//! Client-side (csr): real HTTP calls via `gloo-net`.
//! Native builds and tests: any [`Transport`] implementation, usually a
//! scripted mock.
//!
//! ERROR HANDLING
//! ==============
//! The body is decoded as JSON whatever the status code. Failures come back
//! as [`CalcError`] values and are never retried; the caller decides how to
//! render them.

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::types::{CalculationRequest, CalculationResponse, HttpReply};
use crate::error::CalcError;

pub const CALCULATE_PATH: &str = "/calculate";

/// Sends a JSON body and hands back the raw reply.
///
/// Implementations report only transport-level failures; status codes are
/// interpreted by [`resolve_reply`].
#[allow(async_fn_in_trait)]
pub trait Transport {
    /// POST `body` to `url` with `Content-Type: application/json`.
    ///
    /// # Errors
    ///
    /// Returns [`CalcError::Transport`] when no reply could be obtained.
    async fn post_json(&self, url: &str, body: String) -> Result<HttpReply, CalcError>;
}

/// Browser `fetch` transport.
#[cfg(feature = "csr")]
#[derive(Clone, Copy, Debug, Default)]
pub struct GlooTransport;

#[cfg(feature = "csr")]
impl Transport for GlooTransport {
    async fn post_json(&self, url: &str, body: String) -> Result<HttpReply, CalcError> {
        let resp = gloo_net::http::Request::post(url)
            .header("Content-Type", "application/json")
            .body(body)
            .map_err(|e| CalcError::Transport(e.to_string()))?
            .send()
            .await
            .map_err(|e| CalcError::Transport(e.to_string()))?;
        let status = resp.status();
        let body = resp
            .text()
            .await
            .map_err(|e| CalcError::MalformedResponse(e.to_string()))?;
        Ok(HttpReply { status, body })
    }
}

/// Perform one calculation against `endpoint`.
///
/// # Errors
///
/// Returns a backend, transport, or malformed-response [`CalcError`].
pub async fn calculate<T: Transport>(
    transport: &T,
    endpoint: &str,
    request: &CalculationRequest,
) -> Result<f64, CalcError> {
    let body = serde_json::to_string(request).map_err(|e| CalcError::Transport(format!("encode request: {e}")))?;
    let reply = transport.post_json(endpoint, body).await?;
    resolve_reply(&reply)
}

/// Interpret a reply: 2xx carries `result`, anything else carries `error`.
///
/// An `error` that is absent, `null`, `false`, `0`, or empty falls back to
/// the generic message, as does any JSON body that is not an object.
///
/// # Errors
///
/// Returns [`CalcError::Backend`] / [`CalcError::BackendUnspecified`] for
/// non-2xx replies and [`CalcError::MalformedResponse`] when the body is not
/// JSON or a 2xx body has no numeric `result`.
pub fn resolve_reply(reply: &HttpReply) -> Result<f64, CalcError> {
    let body: serde_json::Value = serde_json::from_str(&reply.body)
        .map_err(|e| CalcError::MalformedResponse(format!("status {}: {e}", reply.status)))?;
    let data = CalculationResponse::from_body(&body);

    if reply.ok() {
        return data
            .result
            .as_ref()
            .and_then(serde_json::Value::as_f64)
            .ok_or_else(|| CalcError::MalformedResponse(missing_result_message(reply.status)));
    }

    match data.error {
        Some(serde_json::Value::String(message)) if !message.is_empty() => Err(CalcError::Backend(message)),
        Some(other) if is_truthy(&other) => Err(CalcError::Backend(other.to_string())),
        _ => Err(CalcError::BackendUnspecified { status: reply.status }),
    }
}

/// Truthiness of a JSON value under browser rules.
fn is_truthy(value: &serde_json::Value) -> bool {
    match value {
        serde_json::Value::Null => false,
        serde_json::Value::Bool(flag) => *flag,
        serde_json::Value::Number(n) => n.as_f64().is_some_and(|f| f.abs() > 0.0),
        serde_json::Value::String(s) => !s.is_empty(),
        serde_json::Value::Array(_) | serde_json::Value::Object(_) => true,
    }
}

fn missing_result_message(status: u16) -> String {
    format!("status {status}: reply has no numeric result")
}
