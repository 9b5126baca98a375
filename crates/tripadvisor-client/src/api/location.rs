//! Location endpoints.

use super::{
    NearbyRequestBuilder, Params, PhotosRequestBuilder, ReviewsRequestBuilder,
    SearchRequestBuilder,
};
use crate::client::RequestOptions;
use crate::descriptor::LOCATION_DETAILS;
use crate::TripAdvisorClient;
use tripadvisor_core::{LocationDetails, Result};

/// Location endpoints
pub struct LocationsApi<'a> {
    client: &'a TripAdvisorClient,
}

impl<'a> LocationsApi<'a> {
    pub(crate) const fn new(client: &'a TripAdvisorClient) -> Self {
        Self { client }
    }

    /// Find locations by name
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// let found = client.locations().search("Eiffel Tower").send().await?;
    /// for location in &found.data {
    ///     println!("{} {}", location.location_id, location.name);
    /// }
    /// ```
    #[must_use]
    pub fn search(&self, query: impl Into<String>) -> SearchRequestBuilder<'a> {
        SearchRequestBuilder::new(self.client, query.into())
    }

    /// Find locations near a coordinate
    #[must_use]
    pub fn nearby(&self, latitude: f64, longitude: f64) -> NearbyRequestBuilder<'a> {
        NearbyRequestBuilder::new(self.client, format!("{latitude},{longitude}"))
    }

    /// Full details of a location
    #[must_use]
    pub fn details(&self, location_id: impl Into<String>) -> DetailsRequestBuilder<'a> {
        DetailsRequestBuilder::new(self.client, location_id.into())
    }

    /// Up to five of the most recent reviews of a location
    #[must_use]
    pub fn reviews(&self, location_id: impl Into<String>) -> ReviewsRequestBuilder<'a> {
        ReviewsRequestBuilder::new(self.client, location_id.into())
    }

    /// Up to five of the most recent photos of a location
    #[must_use]
    pub fn photos(&self, location_id: impl Into<String>) -> PhotosRequestBuilder<'a> {
        PhotosRequestBuilder::new(self.client, location_id.into())
    }
}

/// Builder for location details requests
pub struct DetailsRequestBuilder<'a> {
    client: &'a TripAdvisorClient,
    location_id: String,
    language: Option<String>,
    currency: Option<String>,
    options: RequestOptions,
}

impl<'a> DetailsRequestBuilder<'a> {
    fn new(client: &'a TripAdvisorClient, location_id: String) -> Self {
        Self {
            client,
            location_id,
            language: None,
            currency: None,
            options: RequestOptions::default(),
        }
    }

    /// Response language; the configured language when unset
    #[must_use]
    pub fn language(mut self, language: impl Into<String>) -> Self {
        self.language = Some(language.into());
        self
    }

    /// ISO 4217 currency for prices; the configured currency when unset
    #[must_use]
    pub fn currency(mut self, currency: impl Into<String>) -> Self {
        self.currency = Some(currency.into());
        self
    }

    /// Per-call overrides
    #[must_use]
    pub fn options(mut self, options: RequestOptions) -> Self {
        self.options = options;
        self
    }

    /// Execute the request
    pub async fn send(self) -> Result<LocationDetails> {
        let config = self.client.snapshot();
        let params = Params::new()
            .set("locationId", self.location_id)
            .set(
                "language",
                self.language.unwrap_or_else(|| config.language.clone()),
            )
            .set(
                "currency",
                self.currency.unwrap_or_else(|| config.currency.clone()),
            )
            .into_value();

        self.client
            .fetch(config, &LOCATION_DETAILS, params, self.options)
            .await
    }
}
