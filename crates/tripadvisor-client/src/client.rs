//! Main Tripadvisor API client implementation.

use crate::api::LocationsApi;
use crate::classify::classify;
use crate::config::{ConfigStore, ConfigUpdate, Configuration};
use crate::descriptor::{Method, OperationDescriptor};
use crate::encoder;
use crate::retry::{self, RetryPolicy};
use crate::transport::{merge_headers, HttpTransport, Transport, TransportRequest};
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::sync::Arc;
use std::time::Duration;
use tokio_util::sync::CancellationToken;
use tracing::{debug, instrument};
use tripadvisor_core::{shape, Direction, Result, TripAdvisorError};

/// Main Tripadvisor Content API client
#[derive(Clone)]
pub struct TripAdvisorClient {
    inner: Arc<ClientInner>,
}

struct ClientInner {
    transport: Arc<dyn Transport>,
    config: ConfigStore,
}

impl TripAdvisorClient {
    /// Create a new client with the given API key using default settings
    pub fn new(api_key: impl Into<String>) -> Result<Self> {
        TripAdvisorClientBuilder::new().api_key(api_key).build()
    }

    /// Create a client whose API key comes from `TRIPADVISOR_API_KEY`
    pub fn from_env() -> Result<Self> {
        TripAdvisorClientBuilder::new().build()
    }

    /// Create a builder for custom configuration
    #[must_use]
    pub fn builder() -> TripAdvisorClientBuilder {
        TripAdvisorClientBuilder::new()
    }

    /// Access location search, details, reviews and photos
    #[must_use]
    pub const fn locations(&self) -> LocationsApi<'_> {
        LocationsApi::new(self)
    }

    /// A copy of the current configuration
    #[must_use]
    pub fn config(&self) -> Configuration {
        self.inner.config.snapshot()
    }

    /// Change configuration for calls started after this returns.
    ///
    /// Calls already in flight keep the configuration they started with. A
    /// rejected update leaves the configuration unchanged.
    pub fn update_config(&self, update: ConfigUpdate) -> Result<()> {
        self.inner.config.update(update)
    }

    /// Run one operation through the full pipeline.
    ///
    /// Parameters are checked against the operation's parameter shape before
    /// anything is sent. Each attempt then goes through the transport, the
    /// API-error classifier and the response shape; transient transport
    /// failures are retried with exponential backoff.
    pub async fn execute(
        &self,
        descriptor: &OperationDescriptor,
        params: Value,
        options: RequestOptions,
    ) -> Result<Value> {
        self.execute_with(self.snapshot(), descriptor, params, options)
            .await
    }

    /// The configuration a call started now would use
    pub(crate) fn snapshot(&self) -> Arc<Configuration> {
        self.inner.config.current()
    }

    /// [`execute`](Self::execute) against a configuration taken earlier
    #[instrument(
        name = "tripadvisor_request",
        skip_all,
        fields(operation = descriptor.name)
    )]
    async fn execute_with(
        &self,
        config: Arc<Configuration>,
        descriptor: &OperationDescriptor,
        params: Value,
        options: RequestOptions,
    ) -> Result<Value> {
        let params = shape::validate(descriptor.params, &params, Direction::Request)?;
        let url = encoder::encode(&config.base_url, descriptor.path, &config.api_key, &params)?;

        let policy = RetryPolicy::new(
            options.retries.unwrap_or(config.max_retries),
            options.retry_delay.unwrap_or(config.retry_delay),
        );
        let cancel = options.cancel.unwrap_or_default();
        let request = TransportRequest {
            method: options.method.unwrap_or(descriptor.method),
            url,
            headers: merge_headers(&options.headers),
            timeout: options.timeout.unwrap_or(config.timeout),
            cancel: cancel.clone(),
        };
        debug!(
            method = %request.method,
            url = %encoder::redacted(&request.url),
            max_retries = policy.max_retries,
            "sending request"
        );

        let transport = self.inner.transport.as_ref();
        retry::run(&policy, &cancel, |_| {
            let request = request.clone();
            async move {
                let raw = transport.send(request).await?;
                let payload = classify(raw.body).into_result()?;
                shape::validate(descriptor.response, &payload, Direction::Response)
            }
        })
        .await
    }

    /// Run against `config` and deserialize the validated payload.
    ///
    /// Facades pass the snapshot they read their defaults from, so one call
    /// never mixes two configurations.
    pub(crate) async fn fetch<T: DeserializeOwned>(
        &self,
        config: Arc<Configuration>,
        descriptor: &OperationDescriptor,
        params: Value,
        options: RequestOptions,
    ) -> Result<T> {
        let value = self
            .execute_with(config, descriptor, params, options)
            .await?;
        serde_json::from_value(value).map_err(|e| {
            TripAdvisorError::invalid_response(format!("{}: {e}", descriptor.name))
        })
    }
}

impl std::fmt::Debug for TripAdvisorClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TripAdvisorClient")
            .field("config", &self.inner.config)
            .finish_non_exhaustive()
    }
}

/// Per-call overrides for [`TripAdvisorClient::execute`]
#[derive(Debug, Clone, Default)]
pub struct RequestOptions {
    /// HTTP method instead of the operation's own
    pub method: Option<Method>,
    /// Extra headers; replace defaults with the same name
    pub headers: Vec<(String, String)>,
    /// Per-attempt timeout
    pub timeout: Option<Duration>,
    /// Retries after the first attempt
    pub retries: Option<u32>,
    /// Delay before the first retry
    pub retry_delay: Option<Duration>,
    /// Aborts the call, including any pending backoff wait
    pub cancel: Option<CancellationToken>,
}

impl RequestOptions {
    /// No overrides
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Override the HTTP method
    #[must_use]
    pub const fn method(mut self, method: Method) -> Self {
        self.method = Some(method);
        self
    }

    /// Add or replace a header
    #[must_use]
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    /// Override the per-attempt timeout
    #[must_use]
    pub const fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Override the retry count
    #[must_use]
    pub const fn retries(mut self, retries: u32) -> Self {
        self.retries = Some(retries);
        self
    }

    /// Override the initial retry delay
    #[must_use]
    pub const fn retry_delay(mut self, delay: Duration) -> Self {
        self.retry_delay = Some(delay);
        self
    }

    /// Attach a cancellation token
    #[must_use]
    pub fn cancel_with(mut self, token: CancellationToken) -> Self {
        self.cancel = Some(token);
        self
    }
}

/// Builder for configuring a [`TripAdvisorClient`]
pub struct TripAdvisorClientBuilder {
    config: ConfigUpdate,
    user_agent: String,
    transport: Option<Arc<dyn Transport>>,
}

impl Default for TripAdvisorClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TripAdvisorClientBuilder {
    /// Create a new builder; without an explicit key, `TRIPADVISOR_API_KEY` is used
    #[must_use]
    pub fn new() -> Self {
        Self {
            config: ConfigUpdate::new(),
            user_agent: format!("tripadvisor-rust/{}", env!("CARGO_PKG_VERSION")),
            transport: None,
        }
    }

    /// Set the API key
    #[must_use]
    pub fn api_key(mut self, key: impl Into<String>) -> Self {
        self.config = self.config.api_key(key);
        self
    }

    /// Set the base URL (useful for testing)
    #[must_use]
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.config = self.config.base_url(url);
        self
    }

    /// Set the default response language
    #[must_use]
    pub fn language(mut self, language: impl Into<String>) -> Self {
        self.config = self.config.language(language);
        self
    }

    /// Set the default currency
    #[must_use]
    pub fn currency(mut self, currency: impl Into<String>) -> Self {
        self.config = self.config.currency(currency);
        self
    }

    /// Set the per-attempt timeout
    #[must_use]
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.config = self.config.timeout(timeout);
        self
    }

    /// Set the number of retries after the first attempt
    #[must_use]
    pub fn max_retries(mut self, retries: u32) -> Self {
        self.config = self.config.max_retries(retries);
        self
    }

    /// Set the delay before the first retry
    #[must_use]
    pub fn retry_delay(mut self, delay: Duration) -> Self {
        self.config = self.config.retry_delay(delay);
        self
    }

    /// Apply a whole partial configuration
    #[must_use]
    pub fn config(mut self, update: ConfigUpdate) -> Self {
        self.config = update;
        self
    }

    /// Set the User-Agent header
    #[must_use]
    pub fn user_agent(mut self, agent: impl Into<String>) -> Self {
        self.user_agent = agent.into();
        self
    }

    /// Use a custom transport instead of the built-in HTTP one
    #[must_use]
    pub fn transport(mut self, transport: Arc<dyn Transport>) -> Self {
        self.transport = Some(transport);
        self
    }

    /// Build the client
    pub fn build(self) -> Result<TripAdvisorClient> {
        let config = ConfigStore::new(self.config)?;

        let transport = match self.transport {
            Some(transport) => transport,
            None => Arc::new(
                HttpTransport::with_user_agent(&self.user_agent)
                    .map_err(|e| TripAdvisorError::Configuration(e.to_string()))?,
            ),
        };

        Ok(TripAdvisorClient {
            inner: Arc::new(ClientInner { transport, config }),
        })
    }
}
