use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// Postal address of a location
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Address {
    /// First street line
    #[serde(default)]
    pub street1: Option<String>,

    /// Second street line
    #[serde(default)]
    pub street2: Option<String>,

    /// City name
    #[serde(default)]
    pub city: Option<String>,

    /// State or region
    #[serde(default)]
    pub state: Option<String>,

    /// Country name
    #[serde(default)]
    pub country: Option<String>,

    /// Postal/ZIP code
    #[serde(default)]
    pub postalcode: Option<String>,

    /// Whole address on one line, as the API formats it
    #[serde(default)]
    pub address_string: Option<String>,
}

impl Address {
    /// Single-line rendering, preferring the API's own formatting
    #[must_use]
    pub fn one_line(&self) -> String {
        if let Some(ref s) = self.address_string {
            return s.clone();
        }
        [&self.street1, &self.city, &self.country]
            .into_iter()
            .flatten()
            .map(String::as_str)
            .collect::<Vec<_>>()
            .join(", ")
    }
}

/// Location category filter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    /// Hotels and other lodging
    Hotels,
    /// Things to do
    Attractions,
    /// Places to eat
    Restaurants,
    /// Geographic areas (cities, regions, countries)
    Geos,
}

impl Category {
    /// Wire value
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Hotels => "hotels",
            Self::Attractions => "attractions",
            Self::Restaurants => "restaurants",
            Self::Geos => "geos",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Unit for a search radius
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RadiusUnit {
    /// Kilometers
    #[default]
    Km,
    /// Miles
    Mi,
    /// Meters
    M,
}

impl RadiusUnit {
    /// Wire value
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Km => "km",
            Self::Mi => "mi",
            Self::M => "m",
        }
    }
}

impl fmt::Display for RadiusUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A page of results
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Paged<T> {
    /// Results on this page
    pub data: Vec<T>,

    /// Paging cursor, absent for unpaged endpoints
    #[serde(default)]
    pub paging: Option<Paging>,
}

impl<T> Paged<T> {
    /// Returns true if there is another page after this one
    #[must_use]
    pub fn has_next(&self) -> bool {
        self.paging.as_ref().is_some_and(|p| p.next.is_some())
    }
}

/// Paging metadata
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Paging {
    /// URL of the next page
    #[serde(default)]
    pub next: Option<String>,

    /// URL of the previous page
    #[serde(default)]
    pub previous: Option<String>,

    /// Number of results on this page
    #[serde(default, deserialize_with = "lenient_u32")]
    pub results: Option<u32>,

    /// Number of results overall
    #[serde(default, deserialize_with = "lenient_u32")]
    pub total_results: Option<u32>,

    /// Number of results skipped before this page
    #[serde(default, deserialize_with = "lenient_u32")]
    pub skipped: Option<u32>,
}

/// Accepts `"12"` as well as `12`; the API is not consistent about it.
pub(crate) fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Scalar::deserialize(deserializer)?.into_string())
}

/// Optional variant of [`string_or_number`]
pub(crate) fn opt_string_or_number<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Scalar>::deserialize(deserializer)?.map(Scalar::into_string))
}

/// Reads an explicit `null` the same as a missing field
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

fn lenient_u32<'de, D>(deserializer: D) -> Result<Option<u32>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(opt_string_or_number(deserializer)?.and_then(|s| s.parse().ok()))
}

#[derive(Deserialize)]
#[serde(untagged)]
enum Scalar {
    Text(String),
    Int(i64),
    Float(f64),
}

impl Scalar {
    fn into_string(self) -> String {
        match self {
            Self::Text(s) => s,
            Self::Int(i) => i.to_string(),
            Self::Float(f) => f.to_string(),
        }
    }
}
