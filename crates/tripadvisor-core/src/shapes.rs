//! Parameter and response shapes for every Content API endpoint.

use crate::shape::{Field, FieldType, Shape};

/// Values accepted by the `category` parameter
pub const CATEGORIES: &[&str] = &["hotels", "attractions", "restaurants", "geos"];

/// Values accepted by the `radiusUnit` parameter
pub const RADIUS_UNITS: &[&str] = &["km", "mi", "m"];

// Request parameters

/// `GET /location/search`
pub static SEARCH_PARAMS: Shape = Shape::new(
    "location search parameters",
    &[
        Field::required("searchQuery", FieldType::String),
        Field::optional("category", FieldType::Enum(CATEGORIES)),
        Field::optional("phone", FieldType::String),
        Field::optional("address", FieldType::String),
        Field::optional("latLong", FieldType::String),
        Field::optional("radius", FieldType::Number),
        Field::optional("radiusUnit", FieldType::Enum(RADIUS_UNITS)),
        Field::with_default("language", "en"),
    ],
);

/// `GET /location/nearby_search`
pub static NEARBY_PARAMS: Shape = Shape::new(
    "nearby search parameters",
    &[
        Field::required("latLong", FieldType::String),
        Field::optional("category", FieldType::Enum(CATEGORIES)),
        Field::optional("phone", FieldType::String),
        Field::optional("address", FieldType::String),
        Field::optional("radius", FieldType::Number),
        Field::optional("radiusUnit", FieldType::Enum(RADIUS_UNITS)),
        Field::with_default("language", "en"),
    ],
);

/// `GET /location/{locationId}/details`
pub static DETAILS_PARAMS: Shape = Shape::new(
    "location details parameters",
    &[
        Field::required("locationId", FieldType::StringOrInteger),
        Field::with_default("language", "en"),
        Field::with_default("currency", "USD"),
    ],
);

/// `GET /location/{locationId}/reviews`
pub static REVIEWS_PARAMS: Shape = Shape::new(
    "location reviews parameters",
    &[
        Field::required("locationId", FieldType::StringOrInteger),
        Field::with_default("language", "en"),
        Field::optional("limit", FieldType::Integer),
        Field::optional("offset", FieldType::Integer),
    ],
);

/// `GET /location/{locationId}/photos`
pub static PHOTOS_PARAMS: Shape = Shape::new(
    "location photos parameters",
    &[
        Field::required("locationId", FieldType::StringOrInteger),
        Field::with_default("language", "en"),
        Field::optional("limit", FieldType::Integer),
        Field::optional("offset", FieldType::Integer),
        Field::optional("source", FieldType::String),
    ],
);

// Response bodies

/// Postal address attached to a location
pub static ADDRESS: Shape = Shape::new(
    "address",
    &[
        Field::optional("street1", FieldType::String),
        Field::optional("street2", FieldType::String),
        Field::optional("city", FieldType::String),
        Field::optional("state", FieldType::String),
        Field::optional("country", FieldType::String),
        Field::optional("postalcode", FieldType::String),
        Field::optional("address_string", FieldType::String),
    ],
);

/// One entry of a search result list
pub static LOCATION: Shape = Shape::new(
    "location",
    &[
        Field::required("location_id", FieldType::StringOrInteger),
        Field::required("name", FieldType::String),
        Field::optional("address_obj", FieldType::Object(&ADDRESS)),
    ],
);

static DAY_TIME: Shape = Shape::new(
    "day and time",
    &[
        Field::required("day", FieldType::Integer),
        Field::required("time", FieldType::String),
    ],
);

static PERIOD: Shape = Shape::new(
    "opening period",
    &[
        Field::optional("open", FieldType::Object(&DAY_TIME)),
        Field::optional("close", FieldType::Object(&DAY_TIME)),
    ],
);

/// Opening hours
pub static HOURS: Shape = Shape::new(
    "hours",
    &[
        Field::optional("periods", FieldType::Array(&FieldType::Object(&PERIOD))),
        Field::optional("weekday_text", FieldType::Array(&FieldType::String)),
    ],
);

/// Full details for a single location
pub static LOCATION_DETAILS: Shape = Shape::new(
    "location details",
    &[
        Field::required("location_id", FieldType::StringOrInteger),
        Field::optional("name", FieldType::String),
        Field::optional("description", FieldType::String),
        Field::optional("web_url", FieldType::String),
        Field::optional("address_obj", FieldType::Object(&ADDRESS)),
        Field::optional("hours", FieldType::Object(&HOURS)),
        Field::optional("num_reviews", FieldType::StringOrInteger),
        Field::optional("photo_count", FieldType::StringOrInteger),
    ],
);

static REVIEW_USER: Shape = Shape::new(
    "review author",
    &[Field::optional("username", FieldType::String)],
);

/// A single review
pub static REVIEW: Shape = Shape::new(
    "review",
    &[
        Field::required("id", FieldType::StringOrInteger),
        Field::optional("location_id", FieldType::StringOrInteger),
        Field::optional("rating", FieldType::Number),
        Field::optional("title", FieldType::String),
        Field::optional("text", FieldType::String),
        Field::optional("published_date", FieldType::String),
        Field::optional("user", FieldType::Object(&REVIEW_USER)),
    ],
);

static IMAGE: Shape = Shape::new(
    "image",
    &[
        Field::optional("height", FieldType::Integer),
        Field::optional("width", FieldType::Integer),
        Field::required("url", FieldType::String),
    ],
);

static PHOTO_IMAGES: Shape = Shape::new(
    "photo images",
    &[
        Field::optional("thumbnail", FieldType::Object(&IMAGE)),
        Field::optional("small", FieldType::Object(&IMAGE)),
        Field::optional("medium", FieldType::Object(&IMAGE)),
        Field::optional("large", FieldType::Object(&IMAGE)),
        Field::optional("original", FieldType::Object(&IMAGE)),
    ],
);

/// A single photo
pub static PHOTO: Shape = Shape::new(
    "photo",
    &[
        Field::required("id", FieldType::StringOrInteger),
        Field::optional("caption", FieldType::String),
        Field::optional("published_date", FieldType::String),
        Field::optional("images", FieldType::Object(&PHOTO_IMAGES)),
    ],
);

static PAGING: Shape = Shape::new(
    "paging",
    &[
        Field::optional("next", FieldType::String),
        Field::optional("previous", FieldType::String),
        Field::optional("results", FieldType::StringOrInteger),
        Field::optional("total_results", FieldType::StringOrInteger),
        Field::optional("skipped", FieldType::StringOrInteger),
    ],
);

/// Response of both search endpoints
pub static LOCATION_LIST: Shape = Shape::new(
    "location list",
    &[
        Field::required("data", FieldType::Array(&FieldType::Object(&LOCATION))),
        Field::optional("paging", FieldType::Object(&PAGING)),
    ],
);

/// Response of the reviews endpoint
pub static REVIEW_LIST: Shape = Shape::new(
    "review list",
    &[
        Field::required("data", FieldType::Array(&FieldType::Object(&REVIEW))),
        Field::optional("paging", FieldType::Object(&PAGING)),
    ],
);

/// Response of the photos endpoint
pub static PHOTO_LIST: Shape = Shape::new(
    "photo list",
    &[
        Field::required("data", FieldType::Array(&FieldType::Object(&PHOTO))),
        Field::optional("paging", FieldType::Object(&PAGING)),
    ],
);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shape::validate;
    use crate::Direction;
    use serde_json::json;

    #[test]
    fn test_search_params_fill_language() {
        let out = validate(&SEARCH_PARAMS, &json!({"searchQuery": "Paris"}), Direction::Request).unwrap();
        assert_eq!(out, json!({"searchQuery": "Paris", "language": "en"}));
    }

    #[test]
    fn test_details_params_defaults() {
        let out = validate(&DETAILS_PARAMS, &json!({"locationId": 60745}), Direction::Request).unwrap();
        assert_eq!(out, json!({"locationId": 60745, "language": "en", "currency": "USD"}));
    }

    #[test]
    fn test_category_must_be_known() {
        let params = json!({"searchQuery": "Paris", "category": "museums"});
        assert!(validate(&SEARCH_PARAMS, &params, Direction::Request).is_err());
    }

    #[test]
    fn test_empty_location_list() {
        assert!(validate(&LOCATION_LIST, &json!({"data": []}), Direction::Response).is_ok());
    }

    #[test]
    fn test_location_list_requires_data() {
        let err = validate(&LOCATION_LIST, &json!({"results": []}), Direction::Response).unwrap_err();
        assert_eq!(
            err.to_string(),
            "invalid response payload: data: missing required field"
        );
    }

    #[test]
    fn test_details_with_hours() {
        let body = json!({
            "location_id": "60745",
            "name": "Boston",
            "hours": {
                "periods": [{"open": {"day": 1, "time": "0900"}, "close": {"day": 1, "time": "1700"}}],
                "weekday_text": ["Monday: 09:00 - 17:00"]
            },
            "ranking_data": {"ranking": "1"}
        });
        let out = validate(&LOCATION_DETAILS, &body, Direction::Response).unwrap();
        assert_eq!(out["ranking_data"], json!({"ranking": "1"}));
    }

    #[test]
    fn test_bad_hours_period_is_reported_with_path() {
        let body = json!({
            "location_id": "1",
            "hours": {"periods": [{"open": {"day": "monday", "time": "0900"}}]}
        });
        let err = validate(&LOCATION_DETAILS, &body, Direction::Response).unwrap_err();
        assert!(err
            .to_string()
            .ends_with("hours.periods[0].open.day: expected integer, found string"));
    }
}
