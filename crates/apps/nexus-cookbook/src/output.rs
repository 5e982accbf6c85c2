use anyhow::{Context, Result};
use nexus_sdk::{ApiEnvelope, ApiResult};
use serde_json::Value as JsonValue;
use std::io::Write;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    Success,
    /// The node or the client refused the call.
    Rejected,
    /// The node could not be reached or answered with garbage.
    Fatal,
}

impl Outcome {
    pub fn exit_code(self) -> u8 {
        match self {
            Outcome::Success => 0,
            Outcome::Rejected => 1,
            Outcome::Fatal => 2,
        }
    }
}

/// Prints the result as a pretty `{result}` / `{error}` envelope.
pub fn emit<W: Write>(out: &mut W, result: ApiResult<JsonValue>) -> Result<Outcome> {
    let outcome = match &result {
        Ok(_) => Outcome::Success,
        Err(err) if err.is_fatal() => Outcome::Fatal,
        Err(_) => Outcome::Rejected,
    };
    let envelope = ApiEnvelope::from(result);
    serde_json::to_writer_pretty(&mut *out, &envelope).context("failed to write envelope")?;
    writeln!(out).context("failed to write envelope")?;
    Ok(outcome)
}
