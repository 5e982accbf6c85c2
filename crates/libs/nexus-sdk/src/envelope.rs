//! The `{ "result": .. }` / `{ "error": .. }` envelope every endpoint answers
//! with, in both directions: decoding node responses and rendering an
//! [`ApiResult`] back into the same shape for display.

use crate::error::{ApiResult, SdkError};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct ErrorBody {
    pub code: i64,
    pub message: String,
    #[serde(default)]
    pub sdk_error: bool,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum ApiEnvelope<T> {
    Error { error: ErrorBody },
    Success { result: T },
}

impl<T> ApiEnvelope<T> {
    pub fn is_error(&self) -> bool {
        matches!(self, Self::Error { .. })
    }
}

impl<T> From<ApiResult<T>> for ApiEnvelope<T> {
    fn from(result: ApiResult<T>) -> Self {
        match result {
            Ok(result) => Self::Success { result },
            Err(err) => Self::Error {
                error: ErrorBody {
                    code: err.code,
                    sdk_error: err.is_sdk_error(),
                    message: err.message,
                },
            },
        }
    }
}

/// Splits a response body into the `result` payload or the node's error.
pub fn decode_body(body: &str) -> ApiResult<JsonValue> {
    if body.trim().is_empty() {
        return Err(SdkError::transport("no response body from node"));
    }
    let value: JsonValue = serde_json::from_str(body)
        .map_err(|err| SdkError::malformed_response(format!("response is not json: {err}")))?;
    let JsonValue::Object(mut fields) = value else {
        return Err(SdkError::malformed_response("response is not a json object"));
    };
    if let Some(error) = fields.remove("error").filter(|error| !error.is_null()) {
        return Err(remote_error(error));
    }
    match fields.remove("result") {
        Some(result) => Ok(result),
        None => Err(SdkError::malformed_response("response carries neither result nor error")),
    }
}

fn remote_error(error: JsonValue) -> SdkError {
    match error {
        JsonValue::Object(fields) => {
            let code = fields.get("code").and_then(JsonValue::as_i64).unwrap_or_default();
            let message = match fields.get("message") {
                Some(JsonValue::String(message)) => message.clone(),
                Some(other) => other.to_string(),
                None => "node returned an error without a message".to_owned(),
            };
            SdkError::remote(code, message)
        }
        JsonValue::String(message) => SdkError::remote(0, message),
        other => SdkError::remote(0, other.to_string()),
    }
}

/// Maps a decoded `result` payload onto the typed record for the endpoint.
pub fn decode_payload<T: DeserializeOwned>(result: JsonValue) -> ApiResult<T> {
    serde_json::from_value(result)
        .map_err(|err| SdkError::unexpected_result(format!("unexpected result shape: {err}")))
}
