use crate::bearer_token::BearerToken;
use crate::currently_playing::CurrentlyPlaying;
use crate::endpoints::Endpoints;
use crate::fetch::fetch_optional;

/// https://developer.spotify.com/documentation/web-api/reference/get-the-users-currently-playing-track
///
/// `None` when the account has no active playback (the API answers 204).
pub async fn get_currently_playing(
    client: &reqwest::Client,
    endpoints: &Endpoints,
    bearer: &BearerToken,
) -> eyre::Result<Option<CurrentlyPlaying>> {
    let url = endpoints.api_url("v1/me/player/currently-playing")?;
    fetch_optional(client, url, bearer).await
}
