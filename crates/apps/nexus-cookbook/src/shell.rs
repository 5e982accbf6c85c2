//! Line-oriented session keeper. Each `login` stores its client under the new
//! session id so later lines can address it:
//!
//! ```text
//! login alice pw 1234
//! s-1 supply create shoe 0x01
//! logout s-1
//! ```

use crate::app::{Operation, ShellOperation};
use crate::commands;
use crate::output::{emit, Outcome};
use anyhow::{Context, Result};
use clap::Parser;
use nexus_sdk::{
    ApiResult, ClientConfig, Credentials, NexusClient, SdkError, SessionStore, Transport,
};
use serde_json::{json, Value as JsonValue};
use std::io::{BufRead, Write};

enum Flow {
    Continue,
    Quit,
    Abort,
}

pub struct Shell<T: Transport, F> {
    store: SessionStore<NexusClient<T>>,
    config: ClientConfig,
    connect: F,
}

impl<T, F> Shell<T, F>
where
    T: Transport,
    F: FnMut(Credentials, ClientConfig) -> NexusClient<T>,
{
    pub fn new(config: ClientConfig, connect: F) -> Self {
        Self { store: SessionStore::new(), config, connect }
    }

    /// Runs until `quit`, end of input, or a transport failure. Sessions still
    /// stored at that point are logged out.
    pub fn run<R: BufRead, W: Write>(&mut self, input: R, out: &mut W) -> Result<Outcome> {
        let mut outcome = Outcome::Success;
        for line in input.lines() {
            let line = line.context("failed to read shell input")?;
            let words = line.split_whitespace().collect::<Vec<_>>();
            if words.is_empty() || words[0].starts_with('#') {
                continue;
            }
            match self.dispatch(&words, out, &mut outcome)? {
                Flow::Continue => {}
                Flow::Quit => break,
                Flow::Abort => {
                    outcome = Outcome::Fatal;
                    break;
                }
            }
        }
        self.logout_all();
        Ok(outcome)
    }

    fn dispatch<W: Write>(
        &mut self,
        words: &[&str],
        out: &mut W,
        outcome: &mut Outcome,
    ) -> Result<Flow> {
        let result = match words {
            ["quit"] | ["exit"] => return Ok(Flow::Quit),
            ["sessions"] => Ok(self.sessions()),
            ["url", url] => self.set_url(url),
            ["create", username, password, pin] => self.create(username, password, pin),
            ["login", username, password, pin] => self.login(username, password, pin),
            ["logout", session_id] => self.logout(session_id),
            [session_id, operation @ ..] => {
                let parsed = ShellOperation::try_parse_from(operation.iter().copied());
                match parsed {
                    Ok(parsed) => self.execute(session_id, &parsed.operation),
                    Err(err) => {
                        writeln!(out, "{err}").context("failed to write shell output")?;
                        return Ok(Flow::Continue);
                    }
                }
            }
            [] => return Ok(Flow::Continue),
        };
        Ok(match emit(out, result)? {
            Outcome::Fatal => Flow::Abort,
            Outcome::Rejected => {
                *outcome = Outcome::Rejected;
                Flow::Continue
            }
            Outcome::Success => Flow::Continue,
        })
    }

    fn client_for(&mut self, username: &str, password: &str, pin: &str) -> NexusClient<T> {
        (self.connect)(Credentials::new(username, password, pin), self.config.clone())
    }

    fn execute(&self, session_id: &str, operation: &Operation) -> ApiResult<JsonValue> {
        match self.store.get(session_id) {
            Some(client) => commands::execute(client, operation),
            None => {
                log::debug!("cookbook: no stored session {session_id}");
                Err(SdkError::login_required("shell"))
            }
        }
    }

    fn sessions(&self) -> JsonValue {
        let sessions = self
            .store
            .session_ids()
            .into_iter()
            .map(|session_id| {
                let username = self.store.get(session_id).map(NexusClient::username);
                json!({ "session": session_id, "username": username })
            })
            .collect::<Vec<_>>();
        JsonValue::Array(sessions)
    }

    fn set_url(&mut self, url: &str) -> ApiResult<JsonValue> {
        self.config.set_base_url(url)?;
        Ok(json!({ "url": self.config.base_url }))
    }

    fn create(&mut self, username: &str, password: &str, pin: &str) -> ApiResult<JsonValue> {
        let created = self.client_for(username, password, pin).create_account()?;
        serde_json::to_value(created)
            .map_err(|err| SdkError::unexpected_result(format!("unrenderable result: {err}")))
    }

    fn login(&mut self, username: &str, password: &str, pin: &str) -> ApiResult<JsonValue> {
        let mut client = self.client_for(username, password, pin);
        let login = client.login()?;
        log::info!("cookbook: {username} holds session {}", login.session);
        self.store.insert(login.session.clone(), client);
        Ok(json!({ "session": login.session, "genesis": login.genesis }))
    }

    fn logout(&mut self, session_id: &str) -> ApiResult<JsonValue> {
        let client =
            self.store.get_mut(session_id).ok_or_else(|| SdkError::login_required("logout"))?;
        let result = client.logout()?;
        self.store.evict(session_id);
        Ok(result)
    }

    fn logout_all(&mut self) {
        let session_ids: Vec<String> =
            self.store.session_ids().into_iter().map(str::to_owned).collect();
        for session_id in session_ids {
            if let Some(mut client) = self.store.evict(&session_id) {
                if let Err(err) = client.logout() {
                    log::warn!("cookbook: logout of {session_id} failed: {err}");
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::{Arc, Mutex};

    /// Answers every login with a fresh session id and records each url.
    #[derive(Default)]
    struct FakeNode {
        logins: AtomicUsize,
        urls: Mutex<Vec<String>>,
        /// Calls past this many fail as if the node went away.
        reachable_calls: Option<usize>,
    }

    impl Transport for FakeNode {
        fn get(&self, url: &str) -> Result<String, SdkError> {
            let mut urls = self.urls.lock().expect("urls mutex poisoned");
            urls.push(url.to_owned());
            if self.reachable_calls.is_some_and(|reachable| urls.len() > reachable) {
                return Err(SdkError::transport("connection refused"));
            }
            let body = if url.contains("/users/login/user") {
                let n = self.logins.fetch_add(1, Ordering::Relaxed) + 1;
                json!({"result": {"genesis": format!("g-{n}"), "session": format!("s-{n}")}})
            } else if url.contains("/users/create/user") && url.contains("username=taken") {
                json!({"error": {"code": -130, "message": "Account already exists"}})
            } else if url.contains("/supply/get/item") {
                json!({"result": {"address": "8b", "data": {"json": true}}})
            } else {
                json!({"result": {"txid": "tx-1"}})
            };
            Ok(body.to_string())
        }
    }

    fn run_lines(node: Arc<FakeNode>, script: &str) -> (Outcome, String) {
        let mut shell = Shell::new(ClientConfig::default(), |credentials, config| {
            NexusClient::with_transport(credentials, config, Arc::clone(&node))
        });
        let mut out = Vec::new();
        let outcome = shell.run(script.as_bytes(), &mut out).expect("shell run");
        (outcome, String::from_utf8(out).expect("utf8 output"))
    }

    fn urls(node: &FakeNode) -> Vec<String> {
        node.urls.lock().expect("urls mutex poisoned").clone()
    }

    #[test]
    fn stored_sessions_are_addressable() {
        let node = Arc::new(FakeNode::default());
        let script = "login alice pw 1234\nlogin bob pw 5678\nsessions\n\
                      s-2 supply create shoe 0x01\nlogout s-1\nsessions\nquit\n";
        let (outcome, output) = run_lines(Arc::clone(&node), script);
        assert_eq!(outcome, Outcome::Success);
        assert!(output.contains("\"session\": \"s-2\""));

        let urls = urls(&node);
        let created = "/supply/create/item?pin=5678&session=s-2&name=shoe&data=0x01";
        assert!(urls.iter().any(|url| url.ends_with(created)));
        assert!(urls.iter().any(|url| url.ends_with("/users/logout/user?session=s-1")));
        // bob is logged out when the shell ends
        assert!(urls.last().is_some_and(|url| url.ends_with("/users/logout/user?session=s-2")));
    }

    #[test]
    fn unknown_session_is_rejected_locally() {
        let node = Arc::new(FakeNode::default());
        let (outcome, output) = run_lines(Arc::clone(&node), "s-9 system info\n");
        assert_eq!(outcome, Outcome::Rejected);
        assert!(output.contains("\"sdk_error\": true"));
        assert!(urls(&node).is_empty());
    }

    #[test]
    fn url_changes_apply_to_later_clients() {
        let node = Arc::new(FakeNode::default());
        let script = "url https://bad:1\nurl http://10.0.0.9:9000/\nlogin alice pw 1\n";
        let (_, output) = run_lines(Arc::clone(&node), script);
        assert!(output.contains("\"url\": \"http://10.0.0.9:9000\""));
        assert!(urls(&node)[0].starts_with("http://10.0.0.9:9000/users/login/user?"));
    }

    #[test]
    fn remote_errors_keep_the_shell_running() {
        let node = Arc::new(FakeNode::default());
        let script = "create taken pw 1\nlogin alice pw 1\n";
        let (outcome, output) = run_lines(Arc::clone(&node), script);
        assert_eq!(outcome, Outcome::Rejected);
        assert!(output.contains("Account already exists"));
        assert_eq!(urls(&node).len(), 3);
    }

    #[test]
    fn unexpected_result_shape_keeps_the_shell_running() {
        let node = Arc::new(FakeNode::default());
        let script = "login alice pw 1\ns-1 supply get --address 8b\ns-1 system info\n";
        let (outcome, output) = run_lines(Arc::clone(&node), script);
        assert_eq!(outcome, Outcome::Rejected);
        assert!(output.contains("\"code\": 1102"));
        assert!(output.contains("\"sdk_error\": true"));

        let urls = urls(&node);
        assert!(urls[2].ends_with("/system/get/info"));
        assert!(urls[3].ends_with("/users/logout/user?session=s-1"));
    }

    #[test]
    fn transport_failure_aborts() {
        let node = Arc::new(FakeNode { reachable_calls: Some(0), ..FakeNode::default() });
        let (outcome, _) = run_lines(Arc::clone(&node), "login alice pw 1\nlogin bob pw 2\n");
        assert_eq!(outcome, Outcome::Fatal);
        assert_eq!(urls(&node).len(), 1);
    }

    #[test]
    fn abort_still_logs_out_stored_sessions() {
        let node = Arc::new(FakeNode { reachable_calls: Some(1), ..FakeNode::default() });
        let script = "login alice pw 1\ns-1 system info\nsessions\n";
        let (outcome, _) = run_lines(Arc::clone(&node), script);
        assert_eq!(outcome, Outcome::Fatal);

        let urls = urls(&node);
        assert_eq!(urls.len(), 3);
        assert!(urls[2].ends_with("/users/logout/user?session=s-1"));
    }

    #[test]
    fn bad_operation_prints_usage_and_continues() {
        let node = Arc::new(FakeNode::default());
        let script = "login alice pw 1\ns-1 supply fly\nquit\n";
        let (outcome, output) = run_lines(Arc::clone(&node), script);
        assert_eq!(outcome, Outcome::Success);
        assert!(output.contains("fly"));
    }
}
