//! Provider objects, limited to the fields the services read.
//!
//! The provider sends `null` for several of these fields, so every field
//! falls back to its default instead of failing deserialization.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Deserializer};

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Image reference.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Image {
    #[serde(default, deserialize_with = "null_as_default")]
    pub url: String,
}

impl Image {
    /// URL of the first image, or an empty string when there is none.
    pub fn first_url(images: &[Image]) -> String {
        images.first().map(|i| i.url.clone()).unwrap_or_default()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct SimpleArtist {
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct SimpleAlbum {
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    /// `YYYY-MM-DD`, `YYYY-MM` or `YYYY` depending on the precision.
    #[serde(default, deserialize_with = "null_as_default")]
    pub release_date: String,
    /// `day`, `month` or `year`.
    #[serde(default, deserialize_with = "null_as_default")]
    pub release_date_precision: String,
}

impl SimpleAlbum {
    /// Release date normalized to midnight UTC.
    ///
    /// Components finer than the precision are filled with their first value
    /// (January, day 1). Anything unparseable becomes `0001-01-01T00:00:00Z`.
    pub fn release_date_time(&self) -> DateTime<Utc> {
        let date = match self.release_date_precision.as_str() {
            "day" => NaiveDate::parse_from_str(&self.release_date, "%Y-%m-%d").ok(),
            "month" => self.release_date.split_once('-').and_then(|(year, month)| {
                NaiveDate::from_ymd_opt(year.parse().ok()?, month.parse().ok()?, 1)
            }),
            _ => self
                .release_date
                .parse()
                .ok()
                .and_then(|year| NaiveDate::from_ymd_opt(year, 1, 1)),
        };

        date.or_else(|| NaiveDate::from_ymd_opt(1, 1, 1))
            .and_then(|d| d.and_hms_opt(0, 0, 0))
            .map(|dt| dt.and_utc())
            .unwrap_or_default()
    }
}

/// A track as returned inside "currently playing".
///
/// Episodes come through the same field; their missing album and artists
/// default to empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct FullTrack {
    #[serde(default, deserialize_with = "null_as_default")]
    pub id: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub duration_ms: i64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub artists: Vec<SimpleArtist>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub album: SimpleAlbum,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct CurrentlyPlaying {
    #[serde(default, deserialize_with = "null_as_default")]
    pub is_playing: bool,
    #[serde(default, deserialize_with = "null_as_default")]
    pub progress_ms: i64,
    #[serde(default)]
    pub item: Option<FullTrack>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct PlaylistOwner {
    #[serde(default, deserialize_with = "null_as_default")]
    pub display_name: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct SimplePlaylist {
    #[serde(default, deserialize_with = "null_as_default")]
    pub id: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub uri: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub images: Vec<Image>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub owner: PlaylistOwner,
}

/// One page of a paginated listing.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
pub struct Page<T> {
    #[serde(default = "Vec::new", deserialize_with = "null_as_default")]
    pub items: Vec<T>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub total: u32,
}

impl<T> Default for Page<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            total: 0,
        }
    }
}

/// Current user or public profile; both carry the same fields we need.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct User {
    #[serde(default, deserialize_with = "null_as_default")]
    pub id: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub display_name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub images: Vec<Image>,
}
