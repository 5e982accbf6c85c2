use crate::config::ClientConfig;
use crate::domain::{LoginResult, UserCreated};
use crate::envelope::{decode_body, decode_payload};
use crate::error::{ApiResult, SdkError};
use crate::query::{parse_verbosity, Query, Verbosity};
use crate::session::{Credentials, SessionState};
#[cfg(feature = "http")]
use crate::transport::HttpTransport;
use crate::transport::Transport;
use serde::de::DeserializeOwned;
use serde_json::Value as JsonValue;

mod assets;
mod finance;
mod ledger;
mod objects;
mod supply;
mod system;
mod tokens;
mod users;

/// One user's handle on a Nexus node.
///
/// Login and logout take `&mut self`; every other call takes `&self`. A client
/// is meant for a single session on a single thread at a time. Run one client
/// per user to talk to the node concurrently.
pub struct NexusClient<T: Transport> {
    credentials: Credentials,
    config: ClientConfig,
    transport: T,
    state: SessionState,
}

#[cfg(feature = "http")]
pub type HttpClient = NexusClient<HttpTransport>;

#[cfg(feature = "http")]
impl NexusClient<HttpTransport> {
    /// Stores the credentials against the default node. No request is made
    /// and the credentials are not checked.
    pub fn create(
        username: impl Into<String>,
        password: impl Into<String>,
        pin: impl Into<String>,
    ) -> Self {
        Self::with_config(Credentials::new(username, password, pin), ClientConfig::default())
    }

    pub fn with_config(credentials: Credentials, config: ClientConfig) -> Self {
        let transport = HttpTransport::new(&config);
        Self::with_transport(credentials, config, transport)
    }
}

impl<T: Transport> NexusClient<T> {
    pub fn with_transport(credentials: Credentials, config: ClientConfig, transport: T) -> Self {
        Self { credentials, config, transport, state: SessionState::default() }
    }

    pub fn username(&self) -> &str {
        &self.credentials.username
    }

    pub fn session_id(&self) -> Option<&str> {
        self.state.session_id()
    }

    pub fn genesis_id(&self) -> Option<&str> {
        self.state.genesis_id()
    }

    pub fn is_logged_in(&self) -> bool {
        self.state.is_logged_in()
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    pub fn base_url(&self) -> &str {
        &self.config.base_url
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Points the client at another node. A rejected URL leaves the current
    /// one in effect.
    pub fn set_base_url(&mut self, url: &str) -> ApiResult<()> {
        self.config.set_base_url(url)?;
        log::info!("nexus: base url changed to {}", self.config.base_url);
        Ok(())
    }

    pub fn create_account(&self) -> ApiResult<UserCreated> {
        if self.state.is_logged_in() {
            return Err(SdkError::already_logged_in("create_account"));
        }
        self.request("users", "create/user", self.credential_query())
    }

    pub fn login(&mut self) -> ApiResult<LoginResult> {
        if self.state.is_logged_in() {
            return Err(SdkError::already_logged_in("login"));
        }
        let login: LoginResult = self.request("users", "login/user", self.credential_query())?;
        self.state.establish(&login);
        log::debug!("nexus: {} logged in", self.credentials.username);
        Ok(login)
    }

    pub fn logout(&mut self) -> ApiResult<JsonValue> {
        let session = self.require_session("logout")?.to_owned();
        let result = self.request("users", "logout/user", Query::new().text("session", &session))?;
        self.state.end();
        log::debug!("nexus: {} logged out", self.credentials.username);
        Ok(result)
    }

    pub fn lock(&self) -> ApiResult<JsonValue> {
        let session = self.require_session("lock")?;
        self.request("users", "lock/user", Query::new().text("session", session))
    }

    pub fn unlock(&self) -> ApiResult<JsonValue> {
        let session = self.require_session("unlock")?;
        let query = Query::new().text("session", session).text("pin", &self.credentials.pin);
        self.request("users", "unlock/user", query)
    }

    /// Issues `family/action?params` as is, for endpoints without a typed
    /// wrapper.
    pub fn call_raw(
        &self,
        family: &str,
        action: &str,
        params: &[(&str, &str)],
    ) -> ApiResult<JsonValue> {
        let query = params.iter().fold(Query::new(), |query, (key, value)| query.text(key, value));
        self.fetch(family, action, &query)
    }

    fn credential_query(&self) -> Query {
        Query::new()
            .text("username", &self.credentials.username)
            .text("password", &self.credentials.password)
            .text("pin", &self.credentials.pin)
    }

    fn require_session(&self, operation: &'static str) -> ApiResult<&str> {
        self.state.session_id().ok_or_else(|| SdkError::login_required(operation))
    }

    fn require_genesis(&self, operation: &'static str) -> ApiResult<&str> {
        self.state.genesis_id().ok_or_else(|| SdkError::genesis_required(operation))
    }

    /// `pin` and `session` leading the query, as every signed call expects.
    fn signed_query(&self, operation: &'static str) -> ApiResult<Query> {
        let session = self.require_session(operation)?;
        Ok(Query::new().text("pin", &self.credentials.pin).text("session", session))
    }

    fn verbosity(value: Option<&str>) -> ApiResult<Option<Verbosity>> {
        parse_verbosity(value)
    }

    fn request<R: DeserializeOwned>(
        &self,
        family: &str,
        action: &str,
        query: Query,
    ) -> ApiResult<R> {
        let result = self.fetch(family, action, &query)?;
        decode_payload(result)
    }

    fn fetch(&self, family: &str, action: &str, query: &Query) -> ApiResult<JsonValue> {
        let mut url = self.config.endpoint(family, action);
        if !query.is_empty() {
            url.push('?');
            url.push_str(&query.encode());
        }
        log::debug!("nexus: GET /{family}/{action}");
        let body = self.transport.get(&url)?;
        decode_body(&body).map_err(|err| {
            if !err.is_fatal() {
                log::debug!("nexus: /{family}/{action} rejected: {err}");
            }
            err
        })
    }
}
