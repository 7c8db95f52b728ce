use eyre::OptionExt;
use eyre::Result;
use eyre::WrapErr;
use nowplaying_spotify_api::bearer_token::BearerToken;
use nowplaying_spotify_api::currently_playing::CurrentlyPlaying;
use nowplaying_spotify_api::endpoints::Endpoints;
use nowplaying_spotify_api::fetch::fetch_bytes;
use nowplaying_spotify_api::get_currently_playing::get_currently_playing;
use nowplaying_spotify_api::track::Track;
use tracing::debug;

/// Album art height embedded in the card.
pub const COVER_HEIGHT: u32 = 300;

/// What the card shows for a track. Built per request and dropped after.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PlaybackSnapshot {
    pub is_playing: bool,
    pub track_title: String,
    pub artist_names: Vec<String>,
    pub external_link: String,
    pub album_image: Option<Vec<u8>>,
}

impl PlaybackSnapshot {
    pub fn subtitle(&self) -> String {
        self.artist_names.join(", ")
    }
}

/// URL of the first [`COVER_HEIGHT`] pixel album image.
pub fn cover_url(track: &Track) -> Result<&str> {
    track
        .album
        .image_with_height(COVER_HEIGHT)
        .map(|image| image.url.as_str())
        .ok_or_eyre(format!(
            "No {}px cover image for \"{}\"",
            COVER_HEIGHT, track.name
        ))
}

/// Track link, falling back to the album link for tracks that have none.
fn external_link(track: &Track) -> String {
    if track.external_urls.spotify.is_empty() {
        track.album.external_urls.spotify.clone()
    } else {
        track.external_urls.spotify.clone()
    }
}

/// Query now-playing state and, when a track is current, download its cover.
///
/// `Ok(None)` is the idle state: no playback, or playback without an item.
pub async fn load_snapshot(
    client: &reqwest::Client,
    endpoints: &Endpoints,
    bearer: &BearerToken,
) -> Result<Option<PlaybackSnapshot>> {
    let Some(CurrentlyPlaying {
        is_playing,
        item: Some(track),
        ..
    }) = get_currently_playing(client, endpoints, bearer)
        .await
        .wrap_err("Failed to query current playback")?
    else {
        debug!("Nothing is playing");
        return Ok(None);
    };

    let url = cover_url(&track)?;
    debug!(track = %track.name, %url, "Fetching cover");
    let album_image = fetch_bytes(client, url)
        .await
        .wrap_err("Failed to fetch album art")?;

    Ok(Some(PlaybackSnapshot {
        is_playing,
        track_title: track.name.clone(),
        artist_names: track.artists.iter().map(|a| a.name.clone()).collect(),
        external_link: external_link(&track),
        album_image: Some(album_image),
    }))
}
