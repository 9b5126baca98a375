use super::common::{null_as_default, opt_string_or_number, string_or_number};
use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A traveler review
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Review {
    /// Review id
    #[serde(deserialize_with = "string_or_number")]
    pub id: String,

    /// Language the review is written in
    #[serde(default)]
    pub lang: Option<String>,

    /// Location the review belongs to
    #[serde(default, deserialize_with = "opt_string_or_number")]
    pub location_id: Option<String>,

    /// Publication timestamp (RFC 3339)
    #[serde(default)]
    pub published_date: Option<String>,

    /// Rating, 1 to 5
    #[serde(default)]
    pub rating: Option<f32>,

    /// Number of helpful votes
    #[serde(default)]
    pub helpful_votes: Option<u32>,

    /// Image rendering of the rating bubbles
    #[serde(default)]
    pub rating_image_url: Option<String>,

    /// Link to the review on Tripadvisor
    #[serde(default)]
    pub url: Option<String>,

    /// Review title
    #[serde(default)]
    pub title: Option<String>,

    /// Review body
    #[serde(default)]
    pub text: Option<String>,

    /// Trip type, e.g. `Couples`
    #[serde(default)]
    pub trip_type: Option<String>,

    /// Month of travel, e.g. `2024-03`
    #[serde(default)]
    pub travel_date: Option<String>,

    /// Author
    #[serde(default)]
    pub user: Option<ReviewUser>,

    /// Per-aspect ratings keyed by aspect id
    #[serde(default, deserialize_with = "null_as_default")]
    pub subratings: HashMap<String, Subrating>,

    /// Management reply
    #[serde(default)]
    pub owner_response: Option<OwnerResponse>,
}

impl Review {
    /// Publication time, if present and well-formed
    #[must_use]
    pub fn published_at(&self) -> Option<DateTime<FixedOffset>> {
        parse_timestamp(self.published_date.as_deref()?)
    }
}

/// Review author
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReviewUser {
    /// Public username
    #[serde(default)]
    pub username: Option<String>,

    /// Author's home location
    #[serde(default)]
    pub user_location: Option<UserLocation>,
}

/// Home location of a review author
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserLocation {
    /// Location id
    #[serde(default, deserialize_with = "opt_string_or_number")]
    pub id: Option<String>,

    /// Location name
    #[serde(default)]
    pub name: Option<String>,
}

/// Rating for one aspect (value, rooms, service, ...)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Subrating {
    /// Aspect name
    pub name: String,

    /// Aspect name in the requested language
    #[serde(default)]
    pub localized_name: Option<String>,

    /// Rating value
    #[serde(default)]
    pub value: Option<f32>,
}

/// Management reply to a review
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OwnerResponse {
    /// Reply id
    #[serde(default, deserialize_with = "opt_string_or_number")]
    pub id: Option<String>,

    /// Reply title
    #[serde(default)]
    pub title: Option<String>,

    /// Reply body
    #[serde(default)]
    pub text: Option<String>,

    /// Reply language
    #[serde(default)]
    pub lang: Option<String>,

    /// Name of the person replying
    #[serde(default)]
    pub author: Option<String>,

    /// Publication timestamp (RFC 3339)
    #[serde(default)]
    pub published_date: Option<String>,
}

pub(crate) fn parse_timestamp(raw: &str) -> Option<DateTime<FixedOffset>> {
    DateTime::parse_from_rfc3339(raw).ok()
}
