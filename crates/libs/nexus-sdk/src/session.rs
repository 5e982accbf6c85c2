use crate::domain::LoginResult;
use std::collections::HashMap;
use std::fmt;

#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    pub username: String,
    pub password: String,
    pub pin: String,
}

impl Credentials {
    pub fn new(
        username: impl Into<String>,
        password: impl Into<String>,
        pin: impl Into<String>,
    ) -> Self {
        Self { username: username.into(), password: password.into(), pin: pin.into() }
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .field("pin", &"<redacted>")
            .finish()
    }
}

/// Login state of one client. A login sets both ids together; a logout drops
/// only the session id since the genesis id names the account itself.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SessionState {
    session_id: Option<String>,
    genesis_id: Option<String>,
}

impl SessionState {
    pub fn session_id(&self) -> Option<&str> {
        self.session_id.as_deref()
    }

    pub fn genesis_id(&self) -> Option<&str> {
        self.genesis_id.as_deref()
    }

    pub fn is_logged_in(&self) -> bool {
        self.session_id.is_some()
    }

    pub(crate) fn establish(&mut self, login: &LoginResult) {
        self.session_id = Some(login.session.clone());
        self.genesis_id = Some(login.genesis.clone());
    }

    pub(crate) fn end(&mut self) {
        self.session_id = None;
    }
}

/// Caller-owned map from session id to whatever the caller keeps per session,
/// usually a client.
#[derive(Debug)]
pub struct SessionStore<C> {
    entries: HashMap<String, C>,
}

impl<C> Default for SessionStore<C> {
    fn default() -> Self {
        Self { entries: HashMap::new() }
    }
}

impl<C> SessionStore<C> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the entry previously stored under `session_id`, if any.
    pub fn insert(&mut self, session_id: impl Into<String>, entry: C) -> Option<C> {
        self.entries.insert(session_id.into(), entry)
    }

    pub fn get(&self, session_id: &str) -> Option<&C> {
        self.entries.get(session_id)
    }

    pub fn get_mut(&mut self, session_id: &str) -> Option<&mut C> {
        self.entries.get_mut(session_id)
    }

    pub fn evict(&mut self, session_id: &str) -> Option<C> {
        self.entries.remove(session_id)
    }

    pub fn contains(&self, session_id: &str) -> bool {
        self.entries.contains_key(session_id)
    }

    pub fn session_ids(&self) -> Vec<&str> {
        let mut ids = self.entries.keys().map(String::as_str).collect::<Vec<_>>();
        ids.sort_unstable();
        ids
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn login(session: &str, genesis: &str) -> LoginResult {
        LoginResult {
            genesis: genesis.to_owned(),
            session: session.to_owned(),
            extra: Default::default(),
        }
    }

    #[test]
    fn debug_output_hides_secrets() {
        let rendered = format!("{:?}", Credentials::new("alice", "pw", "1234"));
        assert!(rendered.contains("alice"));
        assert!(!rendered.contains("pw\""));
        assert!(!rendered.contains("1234"));
    }

    #[test]
    fn logout_keeps_genesis() {
        let mut state = SessionState::default();
        assert!(!state.is_logged_in());
        assert_eq!(state.genesis_id(), None);

        state.establish(&login("s-1", "g-1"));
        assert_eq!(state.session_id(), Some("s-1"));
        assert_eq!(state.genesis_id(), Some("g-1"));

        state.end();
        assert_eq!(state.session_id(), None);
        assert_eq!(state.genesis_id(), Some("g-1"));
    }

    #[test]
    fn store_insert_lookup_evict() {
        let mut store = SessionStore::new();
        assert!(store.is_empty());
        assert_eq!(store.insert("s-2", "bob"), None);
        assert_eq!(store.insert("s-1", "alice"), None);
        assert_eq!(store.insert("s-1", "alice-again"), Some("alice"));
        assert_eq!(store.session_ids(), vec!["s-1", "s-2"]);
        assert_eq!(store.get("s-1"), Some(&"alice-again"));

        if let Some(entry) = store.get_mut("s-2") {
            *entry = "bobby";
        }
        assert_eq!(store.evict("s-2"), Some("bobby"));
        assert!(!store.contains("s-2"));
        assert_eq!(store.evict("s-2"), None);
        assert_eq!(store.len(), 1);
    }
}
