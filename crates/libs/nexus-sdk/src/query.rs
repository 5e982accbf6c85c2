use crate::error::SdkError;
use serde::{Deserialize, Serialize};
use std::fmt;

const AMPERSAND: &str = "&";
const ESCAPED_AMPERSAND: &str = "%26";

/// Escapes `&` so a value cannot split the query string. Nothing else is
/// touched; the node decodes the rest.
pub fn escape_value(value: &str) -> String {
    value.replace(AMPERSAND, ESCAPED_AMPERSAND)
}

/// Reverses [`escape_value`] for opaque text the node hands back verbatim.
pub fn unescape_value(value: &str) -> String {
    value.replace(ESCAPED_AMPERSAND, AMPERSAND)
}

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Verbosity {
    Default,
    Summary,
    Detail,
}

impl Verbosity {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Summary => "summary",
            Self::Detail => "detail",
        }
    }

    pub fn parse(value: &str) -> Result<Self, SdkError> {
        match value {
            "default" => Ok(Self::Default),
            "summary" => Ok(Self::Summary),
            "detail" => Ok(Self::Detail),
            other => Err(SdkError::invalid_verbosity(other)),
        }
    }
}

impl fmt::Display for Verbosity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Ordered `key=value` pairs for one request.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Query {
    pairs: Vec<(String, String)>,
}

impl Query {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn text(mut self, key: &str, value: &str) -> Self {
        self.pairs.push((key.to_owned(), escape_value(value)));
        self
    }

    pub fn number(mut self, key: &str, value: impl fmt::Display) -> Self {
        self.pairs.push((key.to_owned(), value.to_string()));
        self
    }

    pub fn optional_text(self, key: &str, value: Option<&str>) -> Self {
        match value {
            Some(value) => self.text(key, value),
            None => self,
        }
    }

    pub fn optional_number<N: fmt::Display>(self, key: &str, value: Option<N>) -> Self {
        match value {
            Some(value) => self.number(key, value),
            None => self,
        }
    }

    pub fn verbosity(self, value: Option<Verbosity>) -> Self {
        self.optional_text("verbose", value.map(Verbosity::as_str))
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.pairs.iter().find(|(name, _)| *name == key).map(|(_, value)| value.as_str())
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    pub fn encode(&self) -> String {
        self.pairs.iter().map(|(key, value)| format!("{key}={value}")).collect::<Vec<_>>().join("&")
    }
}

/// Validates an optional caller-supplied verbosity string before any request.
pub fn parse_verbosity(value: Option<&str>) -> Result<Option<Verbosity>, SdkError> {
    value.map(Verbosity::parse).transpose()
}
