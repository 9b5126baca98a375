//! Review endpoint.

use super::Params;
use crate::client::RequestOptions;
use crate::descriptor::LOCATION_REVIEWS;
use crate::TripAdvisorClient;
use tripadvisor_core::{Paged, Result, Review};

/// Builder for location review requests
pub struct ReviewsRequestBuilder<'a> {
    client: &'a TripAdvisorClient,
    location_id: String,
    language: Option<String>,
    limit: Option<u32>,
    offset: Option<u32>,
    options: RequestOptions,
}

impl<'a> ReviewsRequestBuilder<'a> {
    pub(super) fn new(client: &'a TripAdvisorClient, location_id: String) -> Self {
        Self {
            client,
            location_id,
            language: None,
            limit: None,
            offset: None,
            options: RequestOptions::default(),
        }
    }

    /// Response language; the configured language when unset
    #[must_use]
    pub fn language(mut self, language: impl Into<String>) -> Self {
        self.language = Some(language.into());
        self
    }

    /// Number of reviews to return
    #[must_use]
    pub const fn limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Index of the first review returned
    #[must_use]
    pub const fn offset(mut self, offset: u32) -> Self {
        self.offset = Some(offset);
        self
    }

    /// Per-call overrides
    #[must_use]
    pub fn options(mut self, options: RequestOptions) -> Self {
        self.options = options;
        self
    }

    /// Execute the request
    pub async fn send(self) -> Result<Paged<Review>> {
        let config = self.client.snapshot();
        let language = self
            .language
            .unwrap_or_else(|| config.language.clone());
        let params = Params::new()
            .set("locationId", self.location_id)
            .set("language", language)
            .set_opt("limit", self.limit)
            .set_opt("offset", self.offset)
            .into_value();

        self.client
            .fetch(config, &LOCATION_REVIEWS, params, self.options)
            .await
    }
}
