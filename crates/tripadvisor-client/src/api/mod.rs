//! API endpoint modules.

mod location;
mod photos;
mod reviews;
mod search;

pub use location::{DetailsRequestBuilder, LocationsApi};
pub use photos::PhotosRequestBuilder;
pub use reviews::ReviewsRequestBuilder;
pub use search::{NearbyRequestBuilder, SearchRequestBuilder};

use serde_json::{Map, Value};
use tripadvisor_core::{Result, TripAdvisorError};

/// Query parameters in the order they were set
#[derive(Debug, Default)]
pub(crate) struct Params(Map<String, Value>);

impl Params {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn set(mut self, name: &str, value: impl Into<Value>) -> Self {
        self.0.insert(name.to_string(), value.into());
        self
    }

    pub(crate) fn set_opt<V: Into<Value>>(self, name: &str, value: Option<V>) -> Self {
        match value {
            Some(value) => self.set(name, value),
            None => self,
        }
    }

    pub(crate) fn into_value(self) -> Value {
        Value::Object(self.0)
    }
}

/// NaN and infinities have no JSON form; reject them instead of dropping the radius
pub(crate) fn checked_radius(radius: Option<f64>) -> Result<Option<f64>> {
    match radius {
        Some(r) if !r.is_finite() => Err(TripAdvisorError::invalid_request(format!(
            "radius: expected a finite number, found {r}"
        ))),
        other => Ok(other),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_params_keep_insertion_order_and_skip_none() {
        let value = Params::new()
            .set("searchQuery", "Rome")
            .set_opt("category", None::<&str>)
            .set_opt("radius", Some(2.5))
            .set("language", "it")
            .into_value();

        let keys: Vec<&str> = value
            .as_object()
            .unwrap()
            .keys()
            .map(String::as_str)
            .collect();
        assert_eq!(keys, ["searchQuery", "radius", "language"]);
    }

    #[test]
    fn test_checked_radius() {
        assert_eq!(checked_radius(Some(2.5)).unwrap(), Some(2.5));
        assert_eq!(checked_radius(None).unwrap(), None);

        let err = checked_radius(Some(f64::NAN)).unwrap_err();
        assert!(err.is_validation_error());
        assert!(err.to_string().ends_with("radius: expected a finite number, found NaN"));
        assert!(checked_radius(Some(f64::INFINITY)).is_err());
    }
}
