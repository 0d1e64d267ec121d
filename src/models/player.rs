//! Playback models.

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize, Serializer};

use crate::upstream::CurrentlyPlaying;

fn serialize_rfc3339<S: Serializer>(date: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&date.to_rfc3339_opts(SecondsFormat::AutoSi, true))
}

/// Compact view of the current playback state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlaybackSnapshot {
    pub is_playing: bool,
    pub album_name: String,
    #[serde(rename = "artists_name")]
    pub artist_names: Vec<String>,
    #[serde(rename = "music_name")]
    pub track_name: String,
    #[serde(rename = "ID")]
    pub track_id: String,
    #[serde(serialize_with = "serialize_rfc3339")]
    pub release_date: DateTime<Utc>,
    #[serde(rename = "progress")]
    pub progress_ms: i64,
    #[serde(rename = "duration")]
    pub duration_ms: i64,
}

impl From<&CurrentlyPlaying> for PlaybackSnapshot {
    fn from(playing: &CurrentlyPlaying) -> Self {
        // Nothing playing reduces to an empty track
        let track = playing.item.clone().unwrap_or_default();

        Self {
            is_playing: playing.is_playing,
            album_name: track.album.name.clone(),
            artist_names: track.artists.iter().map(|a| a.name.clone()).collect(),
            track_name: track.name,
            track_id: track.id,
            release_date: track.album.release_date_time(),
            progress_ms: playing.progress_ms,
            duration_ms: track.duration_ms,
        }
    }
}

/// Body of `POST /player/play`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PlayRequest {
    #[serde(default)]
    pub uri: Option<String>,
}

impl PlayRequest {
    /// Context to start, or `None` to resume whatever is paused.
    pub fn target(&self) -> Option<&str> {
        self.uri.as_deref().filter(|uri| !uri.is_empty())
    }
}
