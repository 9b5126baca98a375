//! Photo endpoint.

use super::Params;
use crate::client::RequestOptions;
use crate::descriptor::LOCATION_PHOTOS;
use crate::TripAdvisorClient;
use tripadvisor_core::{Paged, Photo, PhotoSource, Result};

/// Builder for location photo requests
pub struct PhotosRequestBuilder<'a> {
    client: &'a TripAdvisorClient,
    location_id: String,
    language: Option<String>,
    limit: Option<u32>,
    offset: Option<u32>,
    sources: Vec<PhotoSource>,
    options: RequestOptions,
}

impl<'a> PhotosRequestBuilder<'a> {
    pub(super) fn new(client: &'a TripAdvisorClient, location_id: String) -> Self {
        Self {
            client,
            location_id,
            language: None,
            limit: None,
            offset: None,
            sources: Vec::new(),
            options: RequestOptions::default(),
        }
    }

    /// Response language; the configured language when unset
    #[must_use]
    pub fn language(mut self, language: impl Into<String>) -> Self {
        self.language = Some(language.into());
        self
    }

    /// Number of photos to return
    #[must_use]
    pub const fn limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Index of the first photo returned
    #[must_use]
    pub const fn offset(mut self, offset: u32) -> Self {
        self.offset = Some(offset);
        self
    }

    /// Only return photos from this source; may be repeated
    #[must_use]
    pub fn source(mut self, source: PhotoSource) -> Self {
        if !self.sources.contains(&source) {
            self.sources.push(source);
        }
        self
    }

    /// Per-call overrides
    #[must_use]
    pub fn options(mut self, options: RequestOptions) -> Self {
        self.options = options;
        self
    }

    /// Execute the request
    pub async fn send(self) -> Result<Paged<Photo>> {
        let config = self.client.snapshot();
        let language = self
            .language
            .unwrap_or_else(|| config.language.clone());
        let source = (!self.sources.is_empty()).then(|| PhotoSource::join(&self.sources));
        let params = Params::new()
            .set("locationId", self.location_id)
            .set("language", language)
            .set_opt("limit", self.limit)
            .set_opt("offset", self.offset)
            .set_opt("source", source)
            .into_value();

        self.client
            .fetch(config, &LOCATION_PHOTOS, params, self.options)
            .await
    }
}
