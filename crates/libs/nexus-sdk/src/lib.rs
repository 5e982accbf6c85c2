#![allow(clippy::result_large_err)]

mod client;
pub mod config;
pub mod domain;
pub mod envelope;
pub mod error;
pub mod query;
mod session;
mod transport;

#[cfg(feature = "http")]
pub use client::HttpClient;
pub use client::NexusClient;
pub use config::{validate_base_url, ClientConfig, DEFAULT_BASE_URL};
pub use domain::{
    AccountRecord, AssetRecord, ClaimReceipt, Extra, HistoryEntry, ItemRecord, LoginResult,
    TokenRecord, TxReceipt, UserCreated,
};
pub use envelope::{ApiEnvelope, ErrorBody};
pub use error::{code as error_code, ApiResult, ErrorCategory, ErrorDetails, SdkError};
pub use query::{escape_value, unescape_value, Verbosity};
pub use session::{Credentials, SessionState, SessionStore};
#[cfg(feature = "http")]
pub use transport::HttpTransport;
pub use transport::Transport;
