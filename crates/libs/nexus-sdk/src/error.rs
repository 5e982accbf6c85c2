use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;
use std::collections::BTreeMap;
use thiserror::Error;

/// Codes for errors raised by the SDK itself. Remote errors carry the code
/// the node returned.
pub mod code {
    pub const LOGIN_REQUIRED: i64 = 1001;
    pub const ALREADY_LOGGED_IN: i64 = 1002;
    pub const GENESIS_REQUIRED: i64 = 1003;
    pub const INVALID_VERBOSITY: i64 = 1004;
    pub const INVALID_URL: i64 = 1005;
    pub const TRANSPORT: i64 = 1100;
    pub const MALFORMED_RESPONSE: i64 = 1101;
    pub const UNEXPECTED_RESULT: i64 = 1102;
    pub const INTERNAL: i64 = 1199;
}

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
#[non_exhaustive]
pub enum ErrorCategory {
    /// Precondition violated before any request was issued.
    Local,
    /// The node could not be reached or answered with something unreadable.
    Transport,
    /// The node understood the request and rejected it.
    Remote,
    /// The node answered with a well-formed envelope whose `result` does not
    /// fit the record the endpoint is expected to return.
    Decode,
}

pub type ErrorDetails = BTreeMap<String, JsonValue>;

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Error)]
#[error("{code}: {message}")]
#[non_exhaustive]
pub struct SdkError {
    pub code: i64,
    pub message: String,
    pub category: ErrorCategory,
    #[serde(default)]
    pub details: ErrorDetails,
}

impl SdkError {
    pub fn new(code: i64, category: ErrorCategory, message: impl Into<String>) -> Self {
        Self { code, message: message.into(), category, details: ErrorDetails::new() }
    }

    pub fn remote(code: i64, message: impl Into<String>) -> Self {
        Self::new(code, ErrorCategory::Remote, message)
    }

    pub fn transport(message: impl Into<String>) -> Self {
        Self::new(code::TRANSPORT, ErrorCategory::Transport, message)
    }

    pub fn malformed_response(message: impl Into<String>) -> Self {
        Self::new(code::MALFORMED_RESPONSE, ErrorCategory::Transport, message)
    }

    pub fn unexpected_result(message: impl Into<String>) -> Self {
        Self::new(code::UNEXPECTED_RESULT, ErrorCategory::Decode, message)
    }

    pub fn login_required(operation: &'static str) -> Self {
        Self::new(
            code::LOGIN_REQUIRED,
            ErrorCategory::Local,
            format!("'{operation}' requires a logged in session"),
        )
        .with_detail("operation", JsonValue::String(operation.to_owned()))
    }

    pub fn already_logged_in(operation: &'static str) -> Self {
        Self::new(
            code::ALREADY_LOGGED_IN,
            ErrorCategory::Local,
            format!("'{operation}' is not allowed while a session is active"),
        )
        .with_detail("operation", JsonValue::String(operation.to_owned()))
    }

    pub fn genesis_required(operation: &'static str) -> Self {
        Self::new(
            code::GENESIS_REQUIRED,
            ErrorCategory::Local,
            format!("'{operation}' needs the account genesis id, login first"),
        )
        .with_detail("operation", JsonValue::String(operation.to_owned()))
    }

    pub fn invalid_verbosity(value: &str) -> Self {
        Self::new(
            code::INVALID_VERBOSITY,
            ErrorCategory::Local,
            format!("verbosity '{value}' must be one of default, summary, detail"),
        )
        .with_detail("verbosity", JsonValue::String(value.to_owned()))
    }

    pub fn invalid_url(url: &str, reason: &str) -> Self {
        Self::new(code::INVALID_URL, ErrorCategory::Local, format!("invalid url '{url}': {reason}"))
            .with_detail("url", JsonValue::String(url.to_owned()))
    }

    pub fn with_detail(mut self, key: impl Into<String>, value: JsonValue) -> Self {
        self.details.insert(key.into(), value);
        self
    }

    pub fn code(&self) -> i64 {
        self.code
    }

    pub fn category(&self) -> ErrorCategory {
        self.category
    }

    /// True when the SDK raised the error rather than the node.
    pub fn is_sdk_error(&self) -> bool {
        self.category != ErrorCategory::Remote
    }

    /// Transport errors mean the node is unreachable; callers abort on them.
    pub fn is_fatal(&self) -> bool {
        self.category == ErrorCategory::Transport
    }

    pub fn is_user_facing(&self) -> bool {
        !self.is_fatal()
    }
}

pub type ApiResult<T> = Result<T, SdkError>;
