use super::common::{null_as_default, string_or_number};
use super::review::parse_timestamp;
use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A location photo
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Photo {
    /// Photo id
    #[serde(deserialize_with = "string_or_number")]
    pub id: String,

    /// Whether Tripadvisor has featured the photo
    #[serde(default, deserialize_with = "null_as_default")]
    pub is_blessed: bool,

    /// Album name
    #[serde(default)]
    pub album: Option<String>,

    /// Caption
    #[serde(default)]
    pub caption: Option<String>,

    /// Publication timestamp (RFC 3339)
    #[serde(default)]
    pub published_date: Option<String>,

    /// Renditions at various sizes
    #[serde(default, deserialize_with = "null_as_default")]
    pub images: PhotoImages,

    /// Who supplied the photo
    #[serde(default)]
    pub source: Option<PhotoSourceInfo>,

    /// Uploader
    #[serde(default)]
    pub user: Option<PhotoUser>,
}

impl Photo {
    /// Publication time, if present and well-formed
    #[must_use]
    pub fn published_at(&self) -> Option<DateTime<FixedOffset>> {
        parse_timestamp(self.published_date.as_deref()?)
    }
}

/// All renditions of a photo
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PhotoImages {
    /// Thumbnail
    #[serde(default)]
    pub thumbnail: Option<Image>,

    /// Small
    #[serde(default)]
    pub small: Option<Image>,

    /// Medium
    #[serde(default)]
    pub medium: Option<Image>,

    /// Large
    #[serde(default)]
    pub large: Option<Image>,

    /// Original upload
    #[serde(default)]
    pub original: Option<Image>,
}

impl PhotoImages {
    /// The biggest rendition available
    #[must_use]
    pub fn largest(&self) -> Option<&Image> {
        self.original
            .as_ref()
            .or(self.large.as_ref())
            .or(self.medium.as_ref())
            .or(self.small.as_ref())
            .or(self.thumbnail.as_ref())
    }
}

/// One rendition
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Image {
    /// Height in pixels
    #[serde(default)]
    pub height: Option<u32>,

    /// Width in pixels
    #[serde(default)]
    pub width: Option<u32>,

    /// Image URL
    pub url: String,
}

/// Source attribution of a photo
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PhotoSourceInfo {
    /// Machine name
    pub name: String,

    /// Name in the requested language
    #[serde(default)]
    pub localized_name: Option<String>,
}

/// Photo uploader
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PhotoUser {
    /// Public username
    #[serde(default)]
    pub username: Option<String>,
}

/// Filter for the photos endpoint's `source` parameter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PhotoSource {
    /// Professional photographers
    Expert,
    /// The location's management
    Management,
    /// Travelers
    Traveler,
}

impl PhotoSource {
    /// Wire value
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Expert => "Expert",
            Self::Management => "Management",
            Self::Traveler => "Traveler",
        }
    }

    /// Render a set of sources as the comma-separated parameter value
    #[must_use]
    pub fn join(sources: &[Self]) -> String {
        sources
            .iter()
            .map(|s| s.as_str())
            .collect::<Vec<_>>()
            .join(",")
    }
}

impl fmt::Display for PhotoSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_largest_rendition() {
        let photo: Photo = serde_json::from_value(json!({
            "id": 215_321_599,
            "caption": "Pyramid at dusk",
            "images": {
                "thumbnail": {"height": 50, "width": 50, "url": "https://img/t.jpg"},
                "large": {"height": 450, "width": 600, "url": "https://img/l.jpg"}
            }
        }))
        .unwrap();

        assert_eq!(photo.id, "215321599");
        assert_eq!(photo.images.largest().unwrap().url, "https://img/l.jpg");
        assert!(!photo.is_blessed);
    }

    #[test]
    fn test_photo_without_images() {
        let photo: Photo = serde_json::from_value(json!({"id": "7"})).unwrap();
        assert!(photo.images.largest().is_none());
    }

    #[test]
    fn test_null_fields_read_as_defaults() {
        let photo: Photo =
            serde_json::from_value(json!({"id": 1, "images": null, "is_blessed": null})).unwrap();
        assert!(!photo.is_blessed);
        assert!(photo.images.largest().is_none());
    }

    #[test]
    fn test_source_join() {
        let joined = PhotoSource::join(&[PhotoSource::Expert, PhotoSource::Traveler]);
        assert_eq!(joined, "Expert,Traveler");
    }
}
