use serde::Deserialize;
use serde::Serialize;

use crate::track::Track;

/// https://developer.spotify.com/documentation/web-api/reference/get-the-users-currently-playing-track
#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CurrentlyPlaying {
    #[serde(rename = "is_playing", default)]
    pub is_playing: bool,
    #[serde(rename = "progress_ms", default)]
    pub progress_ms: Option<i64>,
    #[serde(default)]
    pub timestamp: Option<i64>,
    #[serde(rename = "currently_playing_type", default)]
    pub currently_playing_type: Option<String>,
    /// `null` for ads, episodes without `additional_types`, and private sessions.
    #[serde(default)]
    pub item: Option<Track>,
}
