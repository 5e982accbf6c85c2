#[cfg(feature = "http")]
use crate::config::ClientConfig;
use crate::error::SdkError;
#[cfg(feature = "http")]
use std::io::Read;
use std::sync::Arc;

/// One blocking GET per call, returning the raw response body. Implementors
/// must not retry; the client reports every failure to its caller as is.
pub trait Transport: Send + Sync {
    fn get(&self, url: &str) -> Result<String, SdkError>;
}

impl<T: Transport + ?Sized> Transport for Arc<T> {
    fn get(&self, url: &str) -> Result<String, SdkError> {
        (**self).get(url)
    }
}

impl<T: Transport + ?Sized> Transport for &T {
    fn get(&self, url: &str) -> Result<String, SdkError> {
        (**self).get(url)
    }
}

#[cfg(feature = "http")]
#[derive(Debug)]
pub struct HttpTransport {
    agent: ureq::Agent,
}

#[cfg(feature = "http")]
impl HttpTransport {
    /// Builds the agent. No connection is opened until the first call.
    pub fn new(config: &ClientConfig) -> Self {
        let mut builder = ureq::AgentBuilder::new().user_agent(&config.user_agent);
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        Self { agent: builder.build() }
    }
}

#[cfg(feature = "http")]
impl Transport for HttpTransport {
    fn get(&self, url: &str) -> Result<String, SdkError> {
        // Non-2xx answers still carry the node's error envelope.
        let response = match self.agent.get(url).call() {
            Ok(response) => response,
            Err(ureq::Error::Status(status, response)) => {
                log::debug!("nexus: node answered with status {status}");
                response
            }
            Err(ureq::Error::Transport(transport)) => {
                let summary = summarize_transport_error(&transport);
                log::warn!("nexus: request failed: {summary}");
                return Err(SdkError::transport(format!("node unreachable: {summary}")));
            }
        };
        let status = response.status();
        let body = read_response_body(response)?;
        if body.trim().is_empty() {
            log::warn!("nexus: empty response body with status {status}");
            let message = format!("node answered with status {status} and no body");
            return Err(SdkError::transport(message));
        }
        log::trace!("nexus: status {status}, {} byte body", body.len());
        Ok(body)
    }
}

/// Reads the whole body. `Response::into_string` stops at 10 MB, which a
/// detailed block listing can exceed.
#[cfg(feature = "http")]
fn read_response_body(response: ureq::Response) -> Result<String, SdkError> {
    let mut bytes = Vec::new();
    response.into_reader().read_to_end(&mut bytes).map_err(|err| {
        log::warn!("nexus: reading response body failed: {err}");
        SdkError::transport(format!("failed to read response body: {err}"))
    })?;
    String::from_utf8(bytes)
        .map_err(|err| SdkError::malformed_response(format!("response is not utf-8: {err}")))
}

/// Describes a transport failure without the request url, whose query string
/// carries the password and pin.
#[cfg(feature = "http")]
fn summarize_transport_error(transport: &ureq::Transport) -> String {
    use ureq::ErrorKind;

    let category = match transport.kind() {
        ErrorKind::ConnectionFailed => "connection refused or node unavailable",
        ErrorKind::Dns => "dns lookup failed",
        ErrorKind::Io => "network i/o error",
        ErrorKind::InvalidUrl => "invalid node url",
        ErrorKind::UnknownScheme => "unsupported url scheme",
        ErrorKind::TooManyRedirects => "too many redirects",
        ErrorKind::BadStatus => "bad status line from node",
        ErrorKind::BadHeader => "bad header from node",
        _ => "http transport error",
    };
    match transport.message() {
        Some(message) if !message.contains("://") => format!("{category} ({message})"),
        _ => category.to_owned(),
    }
}
