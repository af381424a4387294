//! API key storage in the operating system keychain.
//!
//! At startup, [`populate_env_from_keychain`] copies a stored provider key
//! into `ALPHA_VANTAGE_API_KEY` when the environment does not already set
//! it, so [`crate::config::fetch_config`] picks it up without the key ever
//! living in source or shell history.

use tracing::{debug, warn};
use zeroize::Zeroizing;

/// Keychain service name used for all stored credentials.
const SERVICE: &str = "tickerboard";

/// Credentials managed by this module.
#[derive(Clone, Copy, Debug)]
pub enum CredentialKey {
    AlphaVantageApiKey,
}

impl CredentialKey {
    /// Returns the keychain entry identifier.
    pub fn keyring_id(self) -> &'static str {
        match self {
            Self::AlphaVantageApiKey => "alpha_vantage_api_key",
        }
    }

    /// Returns the environment variable name for this credential.
    pub fn env_var(self) -> &'static str {
        match self {
            Self::AlphaVantageApiKey => "ALPHA_VANTAGE_API_KEY",
        }
    }

    pub const ALL: [CredentialKey; 1] = [Self::AlphaVantageApiKey];
}

/// Loads a credential from the keychain, returning `None` if not set.
pub fn load(key: CredentialKey) -> Option<Zeroizing<String>> {
    let entry = keyring::Entry::new(SERVICE, key.keyring_id()).ok()?;
    match entry.get_password() {
        Ok(password) => Some(Zeroizing::new(password)),
        Err(keyring::Error::NoEntry) => None,
        Err(e) => {
            warn!(key = key.keyring_id(), error = %e, "failed to read keychain entry");
            None
        }
    }
}

/// Saves a credential to the keychain.
///
/// # Errors
///
/// Returns [`TickerboardError::Config`](crate::TickerboardError::Config) if
/// the keychain rejects the entry.
pub fn save(key: CredentialKey, value: &str) -> crate::Result<()> {
    let entry = keyring::Entry::new(SERVICE, key.keyring_id())
        .map_err(|e| crate::TickerboardError::Config(format!("keyring entry error: {e}")))?;
    entry
        .set_password(value)
        .map_err(|e| crate::TickerboardError::Config(format!("failed to save to keychain: {e}")))
}

/// Populates environment variables from the keychain for any
/// credentials not already set in the environment.
///
/// Call this before the tokio runtime starts, ahead of
/// [`crate::config::fetch_config`].
pub fn populate_env_from_keychain() {
    for key in CredentialKey::ALL {
        let already_set = std::env::var(key.env_var()).is_ok_and(|v| !v.is_empty());
        if !already_set && let Some(value) = load(key) {
            debug!(key = key.env_var(), "loaded credential from keychain");
            // SAFETY: called from main before any other thread is spawned.
            unsafe {
                std::env::set_var(key.env_var(), value.as_str());
            }
        }
    }
}
