//! Static descriptions of each logical API call.

use std::fmt;
use tripadvisor_core::shape::Shape;
use tripadvisor_core::shapes;

/// HTTP method of an operation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Method {
    /// GET
    #[default]
    Get,
    /// POST
    Post,
    /// PUT
    Put,
    /// DELETE
    Delete,
}

impl Method {
    pub(crate) const fn to_reqwest(self) -> reqwest::Method {
        match self {
            Self::Get => reqwest::Method::GET,
            Self::Post => reqwest::Method::POST,
            Self::Put => reqwest::Method::PUT,
            Self::Delete => reqwest::Method::DELETE,
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Get => write!(f, "GET"),
            Self::Post => write!(f, "POST"),
            Self::Put => write!(f, "PUT"),
            Self::Delete => write!(f, "DELETE"),
        }
    }
}

/// One logical API call: where it goes and what goes in and out.
///
/// `path` may contain `{name}` placeholders that are filled from the
/// parameter of the same name.
#[derive(Debug)]
pub struct OperationDescriptor {
    /// Name used in logs
    pub name: &'static str,
    /// Path template relative to the base URL
    pub path: &'static str,
    /// Shape of the caller's parameters
    pub params: &'static Shape,
    /// Shape of a successful response body
    pub response: &'static Shape,
    /// HTTP method
    pub method: Method,
}

impl OperationDescriptor {
    /// A GET operation
    #[must_use]
    pub const fn get(
        name: &'static str,
        path: &'static str,
        params: &'static Shape,
        response: &'static Shape,
    ) -> Self {
        Self {
            name,
            path,
            params,
            response,
            method: Method::Get,
        }
    }
}

/// Search locations by name
pub static SEARCH_LOCATIONS: OperationDescriptor = OperationDescriptor::get(
    "location_search",
    "/location/search",
    &shapes::SEARCH_PARAMS,
    &shapes::LOCATION_LIST,
);

/// Search locations near a coordinate
pub static NEARBY_SEARCH: OperationDescriptor = OperationDescriptor::get(
    "nearby_search",
    "/location/nearby_search",
    &shapes::NEARBY_PARAMS,
    &shapes::LOCATION_LIST,
);

/// Full details of one location
pub static LOCATION_DETAILS: OperationDescriptor = OperationDescriptor::get(
    "location_details",
    "/location/{locationId}/details",
    &shapes::DETAILS_PARAMS,
    &shapes::LOCATION_DETAILS,
);

/// Most recent reviews of one location
pub static LOCATION_REVIEWS: OperationDescriptor = OperationDescriptor::get(
    "location_reviews",
    "/location/{locationId}/reviews",
    &shapes::REVIEWS_PARAMS,
    &shapes::REVIEW_LIST,
);

/// Most recent photos of one location
pub static LOCATION_PHOTOS: OperationDescriptor = OperationDescriptor::get(
    "location_photos",
    "/location/{locationId}/photos",
    &shapes::PHOTOS_PARAMS,
    &shapes::PHOTO_LIST,
);
