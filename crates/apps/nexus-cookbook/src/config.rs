use anyhow::{bail, Context, Result};
use nexus_sdk::{ClientConfig, Credentials};
use serde::Deserialize;
use std::fs;
use std::path::Path;
use std::time::Duration;

/// Optional `cookbook.toml`. Every key can also be given on the command line,
/// which wins.
#[derive(Debug, Default, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct CookbookConfig {
    pub url: Option<String>,
    pub username: Option<String>,
    pub password: Option<String>,
    pub pin: Option<String>,
    pub timeout_secs: Option<u64>,
}

impl CookbookConfig {
    pub fn from_toml(input: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(input)
    }

    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path)
            .with_context(|| format!("failed to read config {}", path.display()))?;
        Self::from_toml(&contents).with_context(|| format!("invalid config {}", path.display()))
    }
}

/// Connection settings after merging flags over the config file.
#[derive(Debug)]
pub struct Settings {
    pub client: ClientConfig,
    pub credentials: Option<Credentials>,
}

#[derive(Debug, Default)]
pub struct Overrides {
    pub url: Option<String>,
    pub username: Option<String>,
    pub password: Option<String>,
    pub pin: Option<String>,
}

impl Settings {
    pub fn resolve(file: CookbookConfig, flags: Overrides) -> Result<Self> {
        let mut client = ClientConfig::default();
        if let Some(url) = flags.url.or(file.url) {
            client.set_base_url(&url).with_context(|| format!("rejected node url '{url}'"))?;
        }
        if let Some(secs) = file.timeout_secs {
            client = client.with_timeout(Duration::from_secs(secs));
        }

        let username = flags.username.or(file.username);
        let password = flags.password.or(file.password);
        let pin = flags.pin.or(file.pin);
        let credentials = match (username, password, pin) {
            (Some(username), Some(password), Some(pin)) => {
                Some(Credentials::new(username, password, pin))
            }
            (None, None, None) => None,
            _ => bail!("username, password and pin must be given together"),
        };
        Ok(Self { client, credentials })
    }
}
