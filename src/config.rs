//! Configuration management for the Spot Tracker.
//!
//! Application keys live in a small `KEY=value` file (the same syntax as a
//! `.env` file) that is read once at startup. The API base URL and the
//! location of that file can be overridden with environment variables:
//!
//! 1. Environment variables (highest priority)
//! 2. Keys file in the local data directory
//! 3. Application defaults

use std::{collections::HashMap, env, io::ErrorKind, path::PathBuf};

use crate::{error::ConfigError, types::Credentials};

/// Default Parse REST endpoint.
pub const DEFAULT_API_URL: &str = "https://api.parse.com/1/";

pub const KEY_APPLICATION_ID: &str = "appID";
pub const KEY_JAVASCRIPT_KEY: &str = "jsKey";
pub const KEY_CLIENT_KEY: &str = "clientKey";

const ENV_API_URL: &str = "SPOTCLI_API_URL";
const ENV_KEYS_FILE: &str = "SPOTCLI_KEYS_FILE";

/// Read-only source of the application credentials.
///
/// # Example
///
/// ```
/// use spotcli::config::CredentialStore;
///
/// let store = CredentialStore::new(CredentialStore::default_location());
/// match store.load() {
///     Ok(credentials) => println!("app id: {}", credentials.application_id),
///     Err(e) => eprintln!("Configuration error: {}", e),
/// }
/// ```
#[derive(Debug, Clone)]
pub struct CredentialStore {
    path: PathBuf,
}

impl CredentialStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Resolves the keys file location.
    ///
    /// Uses `SPOTCLI_KEYS_FILE` when set, otherwise the platform local data
    /// directory:
    /// - Linux: `~/.local/share/spotcli/keys.env`
    /// - macOS: `~/Library/Application Support/spotcli/keys.env`
    /// - Windows: `%LOCALAPPDATA%/spotcli/keys.env`
    pub fn default_location() -> PathBuf {
        if let Ok(path) = env::var(ENV_KEYS_FILE) {
            return PathBuf::from(path);
        }

        let mut path = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
        path.push("spotcli/keys.env");
        path
    }

    pub fn path(&self) -> &PathBuf {
        &self.path
    }

    /// Reads the keys file and extracts `appID`, `jsKey` and `clientKey`.
    ///
    /// `clientKey` is optional and defaults to an empty string; Basic
    /// authentication only needs the other two.
    ///
    /// # Errors
    ///
    /// - [`ConfigError::MissingResource`] if the file does not exist
    /// - [`ConfigError::Malformed`] if a line cannot be parsed or the file is unreadable
    /// - [`ConfigError::MissingField`] if `appID` or `jsKey` is absent
    pub fn load(&self) -> Result<Credentials, ConfigError> {
        // The iterator form is deprecated in dotenv 0.15 but is the only one
        // that leaves the process environment untouched.
        #[allow(deprecated)]
        let iter = dotenv::from_path_iter(&self.path).map_err(|e| match e {
            dotenv::Error::Io(io) if io.kind() == ErrorKind::NotFound => {
                ConfigError::MissingResource(self.path.clone())
            }
            other => ConfigError::Malformed(other.to_string()),
        })?;

        let mut values: HashMap<String, String> = HashMap::new();
        for item in iter {
            let (key, value) = item.map_err(|e| ConfigError::Malformed(e.to_string()))?;
            values.insert(key, value);
        }

        let mut take = |key: &'static str| values.remove(key).ok_or(ConfigError::MissingField(key));

        Ok(Credentials {
            application_id: take(KEY_APPLICATION_ID)?,
            javascript_key: take(KEY_JAVASCRIPT_KEY)?,
            client_key: values.remove(KEY_CLIENT_KEY).unwrap_or_default(),
        })
    }
}

/// Returns the Parse REST base URL, honouring `SPOTCLI_API_URL`.
///
/// # Example
///
/// ```
/// let api_url = api_url(); // e.g., "https://api.parse.com/1/"
/// ```
pub fn api_url() -> String {
    env::var(ENV_API_URL).unwrap_or_else(|_| DEFAULT_API_URL.to_string())
}
