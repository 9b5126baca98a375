use super::common::{null_as_default, opt_string_or_number, string_or_number, Address};
use super::hours::Hours;
use serde::{Deserialize, Serialize};

/// A location as returned by the search endpoints
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Location {
    /// Tripadvisor location id
    #[serde(deserialize_with = "string_or_number")]
    pub location_id: String,

    /// Display name
    pub name: String,

    /// Distance from the search point, in the requested radius unit
    #[serde(default, deserialize_with = "opt_string_or_number")]
    pub distance: Option<String>,

    /// Compass bearing from the search point
    #[serde(default)]
    pub bearing: Option<String>,

    /// Postal address
    #[serde(default)]
    pub address_obj: Option<Address>,
}

impl Location {
    /// Distance parsed as a number, if the API returned one
    #[must_use]
    pub fn distance_value(&self) -> Option<f64> {
        self.distance.as_deref().and_then(|d| d.parse().ok())
    }
}

/// Full details for a single location
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LocationDetails {
    /// Tripadvisor location id
    #[serde(deserialize_with = "string_or_number")]
    pub location_id: String,

    /// Display name
    #[serde(default)]
    pub name: Option<String>,

    /// Free-text description
    #[serde(default)]
    pub description: Option<String>,

    /// Link to the location's Tripadvisor page
    #[serde(default)]
    pub web_url: Option<String>,

    /// Postal address
    #[serde(default)]
    pub address_obj: Option<Address>,

    /// Latitude
    #[serde(default, deserialize_with = "opt_string_or_number")]
    pub latitude: Option<String>,

    /// Longitude
    #[serde(default, deserialize_with = "opt_string_or_number")]
    pub longitude: Option<String>,

    /// IANA timezone name
    #[serde(default)]
    pub timezone: Option<String>,

    /// Contact phone number
    #[serde(default)]
    pub phone: Option<String>,

    /// Contact email
    #[serde(default)]
    pub email: Option<String>,

    /// Location's own website
    #[serde(default)]
    pub website: Option<String>,

    /// Overall rating, 1.0 to 5.0
    #[serde(default, deserialize_with = "opt_string_or_number")]
    pub rating: Option<String>,

    /// Image rendering of the rating bubbles
    #[serde(default)]
    pub rating_image_url: Option<String>,

    /// Number of reviews
    #[serde(default, deserialize_with = "opt_string_or_number")]
    pub num_reviews: Option<String>,

    /// Number of photos
    #[serde(default, deserialize_with = "opt_string_or_number")]
    pub photo_count: Option<String>,

    /// Link to the photo gallery
    #[serde(default)]
    pub see_all_photos: Option<String>,

    /// Link to the write-a-review page
    #[serde(default)]
    pub write_review: Option<String>,

    /// Price level, e.g. `$$ - $$$`
    #[serde(default)]
    pub price_level: Option<String>,

    /// Ranking within its geo
    #[serde(default)]
    pub ranking_data: Option<RankingData>,

    /// Opening hours
    #[serde(default)]
    pub hours: Option<Hours>,

    /// Top-level category
    #[serde(default)]
    pub category: Option<NamedValue>,

    /// Subcategories
    #[serde(default, deserialize_with = "null_as_default")]
    pub subcategory: Vec<NamedValue>,

    /// Cuisines (restaurants only)
    #[serde(default, deserialize_with = "null_as_default")]
    pub cuisine: Vec<NamedValue>,

    /// Amenities (hotels only)
    #[serde(default, deserialize_with = "null_as_default")]
    pub amenities: Vec<String>,

    /// Features (restaurants only)
    #[serde(default, deserialize_with = "null_as_default")]
    pub features: Vec<String>,

    /// Hotel styles
    #[serde(default, deserialize_with = "null_as_default")]
    pub styles: Vec<String>,

    /// Review counts per trip type
    #[serde(default, deserialize_with = "null_as_default")]
    pub trip_types: Vec<TripTypeCount>,

    /// Awards
    #[serde(default, deserialize_with = "null_as_default")]
    pub awards: Vec<Award>,
}

impl LocationDetails {
    /// Rating parsed as a number
    #[must_use]
    pub fn rating_value(&self) -> Option<f32> {
        self.rating.as_deref().and_then(|r| r.parse().ok())
    }

    /// Review count parsed as a number
    #[must_use]
    pub fn review_count(&self) -> Option<u64> {
        self.num_reviews.as_deref().and_then(|n| n.parse().ok())
    }

    /// Coordinates as a `(latitude, longitude)` pair if both parse
    #[must_use]
    pub fn coordinates(&self) -> Option<(f64, f64)> {
        let lat = self.latitude.as_deref()?.parse().ok()?;
        let lon = self.longitude.as_deref()?.parse().ok()?;
        Some((lat, lon))
    }
}

/// Ranking of a location within its geo
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RankingData {
    /// Geo the ranking applies to
    #[serde(default)]
    pub geo_location_name: Option<String>,

    /// Rank
    #[serde(default, deserialize_with = "opt_string_or_number")]
    pub ranking: Option<String>,

    /// Number of ranked locations in the geo
    #[serde(default, deserialize_with = "opt_string_or_number")]
    pub ranking_out_of: Option<String>,

    /// Rendered ranking, e.g. `#3 of 1,024 hotels in Paris`
    #[serde(default)]
    pub ranking_string: Option<String>,
}

/// A `{name, localized_name}` pair used for categories and cuisines
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NamedValue {
    /// Machine name
    pub name: String,

    /// Name in the requested language
    #[serde(default)]
    pub localized_name: Option<String>,
}

/// Review count for one trip type
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TripTypeCount {
    /// Machine name (`business`, `couples`, ...)
    pub name: String,

    /// Name in the requested language
    #[serde(default)]
    pub localized_name: Option<String>,

    /// Number of reviews
    #[serde(default, deserialize_with = "opt_string_or_number")]
    pub value: Option<String>,
}

/// An award granted to a location
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Award {
    /// Award type, e.g. `Travelers Choice`
    #[serde(default)]
    pub award_type: Option<String>,

    /// Year the award was granted
    #[serde(default, deserialize_with = "opt_string_or_number")]
    pub year: Option<String>,

    /// Rendered award name
    #[serde(default)]
    pub display_name: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_search_result_with_numeric_id() {
        let loc: Location = serde_json::from_value(json!({
            "location_id": 187147,
            "name": "Paris",
            "distance": "0.42",
            "address_obj": {"city": "Paris", "country": "France"}
        }))
        .unwrap();
        assert_eq!(loc.location_id, "187147");
        assert_eq!(loc.distance_value(), Some(0.42));
        assert_eq!(loc.address_obj.unwrap().city.as_deref(), Some("Paris"));
    }

    #[test]
    fn test_details_parses_numbers_sent_as_strings() {
        let details: LocationDetails = serde_json::from_value(json!({
            "location_id": "188757",
            "name": "Musée du Louvre",
            "latitude": "48.86115",
            "longitude": "2.33929",
            "rating": "4.5",
            "num_reviews": "180413",
            "subcategory": [{"name": "museums", "localized_name": "Museums"}],
            "unknown_future_field": true
        }))
        .unwrap();

        assert_eq!(details.rating_value(), Some(4.5));
        assert_eq!(details.review_count(), Some(180_413));
        assert_eq!(details.coordinates(), Some((48.86115, 2.33929)));
        assert_eq!(details.subcategory[0].name, "museums");
        assert!(details.awards.is_empty());
    }
}
