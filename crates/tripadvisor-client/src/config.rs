//! Client configuration and the store that owns it.

use std::fmt;
use std::sync::{Arc, PoisonError, RwLock};
use std::time::Duration;
use tripadvisor_core::{Result, TripAdvisorError};
use url::Url;

/// Environment variable consulted when no API key is given explicitly
pub const API_KEY_ENV: &str = "TRIPADVISOR_API_KEY";

/// The Tripadvisor Content API base URL
pub const DEFAULT_BASE_URL: &str = "https://api.content.tripadvisor.com/api/v1";

/// Default response language
pub const DEFAULT_LANGUAGE: &str = "en";

/// Default currency for prices
pub const DEFAULT_CURRENCY: &str = "USD";

/// Default per-attempt timeout
pub const DEFAULT_TIMEOUT: Duration = Duration::from_millis(30_000);

/// Default number of retries after the first attempt
pub const DEFAULT_MAX_RETRIES: u32 = 3;

/// Default delay before the first retry; doubles on each further retry
pub const DEFAULT_RETRY_DELAY: Duration = Duration::from_millis(1_000);

/// Resolved client configuration.
///
/// Always carries a non-empty API key.
#[derive(Clone, PartialEq, Eq)]
pub struct Configuration {
    /// API key sent as the `key` query parameter
    pub api_key: String,

    /// Base URL every endpoint path is appended to
    pub base_url: String,

    /// Default response language
    pub language: String,

    /// Default currency for prices
    pub currency: String,

    /// Per-attempt timeout
    pub timeout: Duration,

    /// Retries after the first attempt
    pub max_retries: u32,

    /// Delay before the first retry
    pub retry_delay: Duration,
}

impl fmt::Debug for Configuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Configuration")
            .field("api_key", &"<redacted>")
            .field("base_url", &self.base_url)
            .field("language", &self.language)
            .field("currency", &self.currency)
            .field("timeout", &self.timeout)
            .field("max_retries", &self.max_retries)
            .field("retry_delay", &self.retry_delay)
            .finish()
    }
}

impl Configuration {
    fn with_defaults(api_key: String) -> Self {
        Self {
            api_key,
            base_url: DEFAULT_BASE_URL.to_string(),
            language: DEFAULT_LANGUAGE.to_string(),
            currency: DEFAULT_CURRENCY.to_string(),
            timeout: DEFAULT_TIMEOUT,
            max_retries: DEFAULT_MAX_RETRIES,
            retry_delay: DEFAULT_RETRY_DELAY,
        }
    }

    /// Apply `update` on top of this configuration without touching `self`
    fn merged(&self, update: ConfigUpdate) -> Result<Self> {
        let merged = Self {
            api_key: update.api_key.unwrap_or_else(|| self.api_key.clone()),
            base_url: update.base_url.unwrap_or_else(|| self.base_url.clone()),
            language: update.language.unwrap_or_else(|| self.language.clone()),
            currency: update.currency.unwrap_or_else(|| self.currency.clone()),
            timeout: update.timeout.unwrap_or(self.timeout),
            max_retries: update.max_retries.unwrap_or(self.max_retries),
            retry_delay: update.retry_delay.unwrap_or(self.retry_delay),
        };
        merged.validate()?;
        Ok(merged)
    }

    fn validate(&self) -> Result<()> {
        if self.api_key.trim().is_empty() {
            return Err(TripAdvisorError::Configuration(format!(
                "API key is required (pass one explicitly or set {API_KEY_ENV})"
            )));
        }
        Url::parse(&self.base_url).map_err(|e| {
            TripAdvisorError::Configuration(format!("invalid base URL {:?}: {e}", self.base_url))
        })?;
        if self.timeout.is_zero() {
            return Err(TripAdvisorError::Configuration(
                "timeout must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }
}

/// A partial configuration; `None` fields keep their current value
#[derive(Debug, Clone, Default)]
pub struct ConfigUpdate {
    /// API key
    pub api_key: Option<String>,
    /// Base URL
    pub base_url: Option<String>,
    /// Default response language
    pub language: Option<String>,
    /// Default currency
    pub currency: Option<String>,
    /// Per-attempt timeout
    pub timeout: Option<Duration>,
    /// Retries after the first attempt
    pub max_retries: Option<u32>,
    /// Delay before the first retry
    pub retry_delay: Option<Duration>,
}

impl ConfigUpdate {
    /// An update that changes nothing
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the API key
    #[must_use]
    pub fn api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = Some(key.into());
        self
    }

    /// Set the base URL (useful for testing)
    #[must_use]
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    /// Set the default language
    #[must_use]
    pub fn language(mut self, language: impl Into<String>) -> Self {
        self.language = Some(language.into());
        self
    }

    /// Set the default currency
    #[must_use]
    pub fn currency(mut self, currency: impl Into<String>) -> Self {
        self.currency = Some(currency.into());
        self
    }

    /// Set the per-attempt timeout
    #[must_use]
    pub const fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Set the number of retries
    #[must_use]
    pub const fn max_retries(mut self, retries: u32) -> Self {
        self.max_retries = Some(retries);
        self
    }

    /// Set the delay before the first retry
    #[must_use]
    pub const fn retry_delay(mut self, delay: Duration) -> Self {
        self.retry_delay = Some(delay);
        self
    }
}

/// Owner of the live [`Configuration`].
///
/// Updates build a complete new value and swap it in, so a reader sees either
/// the old or the new configuration, never a mix. Calls hold on to the
/// snapshot they started with.
pub struct ConfigStore {
    current: RwLock<Arc<Configuration>>,
}

impl ConfigStore {
    /// Create a store, reading the API key from [`API_KEY_ENV`] if not given
    pub fn new(initial: ConfigUpdate) -> Result<Self> {
        Self::with_env(initial, |name| std::env::var(name).ok())
    }

    /// Create a store with a custom environment lookup
    pub fn with_env<F>(mut initial: ConfigUpdate, env: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_key = initial.api_key.take().or_else(|| env(API_KEY_ENV));
        let config = Configuration::with_defaults(api_key.unwrap_or_default()).merged(initial)?;

        Ok(Self {
            current: RwLock::new(Arc::new(config)),
        })
    }

    /// Merge `update` into the current configuration.
    ///
    /// On failure the current configuration is left untouched.
    pub fn update(&self, update: ConfigUpdate) -> Result<()> {
        let mut guard = self.current.write().unwrap_or_else(PoisonError::into_inner);
        let next = guard.merged(update)?;
        *guard = Arc::new(next);
        Ok(())
    }

    /// An independent copy of the current configuration
    #[must_use]
    pub fn snapshot(&self) -> Configuration {
        Configuration::clone(&self.current())
    }

    /// Shared handle to the current configuration
    #[must_use]
    pub fn current(&self) -> Arc<Configuration> {
        Arc::clone(&self.current.read().unwrap_or_else(PoisonError::into_inner))
    }
}

impl fmt::Debug for ConfigStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConfigStore")
            .field("current", &self.current())
            .finish()
    }
}
