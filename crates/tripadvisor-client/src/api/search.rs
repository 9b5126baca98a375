//! Search endpoints.

use super::{checked_radius, Params};
use crate::client::RequestOptions;
use crate::descriptor::{NEARBY_SEARCH, SEARCH_LOCATIONS};
use crate::TripAdvisorClient;
use tripadvisor_core::{Category, Location, Paged, RadiusUnit, Result};

/// Builder for location search requests
pub struct SearchRequestBuilder<'a> {
    client: &'a TripAdvisorClient,
    query: String,
    category: Option<Category>,
    phone: Option<String>,
    address: Option<String>,
    lat_long: Option<String>,
    radius: Option<f64>,
    radius_unit: Option<RadiusUnit>,
    language: Option<String>,
    options: RequestOptions,
}

impl<'a> SearchRequestBuilder<'a> {
    pub(super) fn new(client: &'a TripAdvisorClient, query: String) -> Self {
        Self {
            client,
            query,
            category: None,
            phone: None,
            address: None,
            lat_long: None,
            radius: None,
            radius_unit: None,
            language: None,
            options: RequestOptions::default(),
        }
    }

    /// Restrict results to one category
    #[must_use]
    pub const fn category(mut self, category: Category) -> Self {
        self.category = Some(category);
        self
    }

    /// Phone number to match, without spaces or dashes
    #[must_use]
    pub fn phone(mut self, phone: impl Into<String>) -> Self {
        self.phone = Some(phone.into());
        self
    }

    /// Address to match
    #[must_use]
    pub fn address(mut self, address: impl Into<String>) -> Self {
        self.address = Some(address.into());
        self
    }

    /// Bias results towards a coordinate
    #[must_use]
    pub fn lat_long(mut self, latitude: f64, longitude: f64) -> Self {
        self.lat_long = Some(format!("{latitude},{longitude}"));
        self
    }

    /// Search radius around `lat_long`
    #[must_use]
    pub const fn radius(mut self, radius: f64, unit: RadiusUnit) -> Self {
        self.radius = Some(radius);
        self.radius_unit = Some(unit);
        self
    }

    /// Response language; the configured language when unset
    #[must_use]
    pub fn language(mut self, language: impl Into<String>) -> Self {
        self.language = Some(language.into());
        self
    }

    /// Per-call overrides
    #[must_use]
    pub fn options(mut self, options: RequestOptions) -> Self {
        self.options = options;
        self
    }

    /// Execute the search
    pub async fn send(self) -> Result<Paged<Location>> {
        let radius = checked_radius(self.radius)?;
        let config = self.client.snapshot();
        let language = self
            .language
            .unwrap_or_else(|| config.language.clone());
        let params = Params::new()
            .set("searchQuery", self.query)
            .set_opt("category", self.category.map(Category::as_str))
            .set_opt("phone", self.phone)
            .set_opt("address", self.address)
            .set_opt("latLong", self.lat_long)
            .set_opt("radius", radius)
            .set_opt("radiusUnit", self.radius_unit.map(RadiusUnit::as_str))
            .set("language", language)
            .into_value();

        self.client
            .fetch(config, &SEARCH_LOCATIONS, params, self.options)
            .await
    }
}

/// Builder for nearby search requests
pub struct NearbyRequestBuilder<'a> {
    client: &'a TripAdvisorClient,
    lat_long: String,
    category: Option<Category>,
    phone: Option<String>,
    address: Option<String>,
    radius: Option<f64>,
    radius_unit: Option<RadiusUnit>,
    language: Option<String>,
    options: RequestOptions,
}

impl<'a> NearbyRequestBuilder<'a> {
    pub(super) fn new(client: &'a TripAdvisorClient, lat_long: String) -> Self {
        Self {
            client,
            lat_long,
            category: None,
            phone: None,
            address: None,
            radius: None,
            radius_unit: None,
            language: None,
            options: RequestOptions::default(),
        }
    }

    /// Restrict results to one category
    #[must_use]
    pub const fn category(mut self, category: Category) -> Self {
        self.category = Some(category);
        self
    }

    /// Phone number to match
    #[must_use]
    pub fn phone(mut self, phone: impl Into<String>) -> Self {
        self.phone = Some(phone.into());
        self
    }

    /// Address to match
    #[must_use]
    pub fn address(mut self, address: impl Into<String>) -> Self {
        self.address = Some(address.into());
        self
    }

    /// Search radius
    #[must_use]
    pub const fn radius(mut self, radius: f64, unit: RadiusUnit) -> Self {
        self.radius = Some(radius);
        self.radius_unit = Some(unit);
        self
    }

    /// Response language; the configured language when unset
    #[must_use]
    pub fn language(mut self, language: impl Into<String>) -> Self {
        self.language = Some(language.into());
        self
    }

    /// Per-call overrides
    #[must_use]
    pub fn options(mut self, options: RequestOptions) -> Self {
        self.options = options;
        self
    }

    /// Execute the search
    pub async fn send(self) -> Result<Paged<Location>> {
        let radius = checked_radius(self.radius)?;
        let config = self.client.snapshot();
        let language = self
            .language
            .unwrap_or_else(|| config.language.clone());
        let params = Params::new()
            .set("latLong", self.lat_long)
            .set_opt("category", self.category.map(Category::as_str))
            .set_opt("phone", self.phone)
            .set_opt("address", self.address)
            .set_opt("radius", radius)
            .set_opt("radiusUnit", self.radius_unit.map(RadiusUnit::as_str))
            .set("language", language)
            .into_value();

        self.client
            .fetch(config, &NEARBY_SEARCH, params, self.options)
            .await
    }
}
