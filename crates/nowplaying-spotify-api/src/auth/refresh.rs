use crate::bearer_token::BearerToken;
use crate::endpoints::Endpoints;
use eyre::Result;
use eyre::WrapErr;
use serde::Deserialize;
use serde::Serialize;
use tracing::debug;
use url::Url;

/// Scope needed to read the now-playing state.
pub const CURRENTLY_PLAYING_SCOPE: &str = "user-read-currently-playing";

/// Application credentials plus the long-lived refresh token.
#[derive(Clone)]
pub struct Credentials {
    pub client_id: String,
    pub client_secret: String,
    pub redirect_uri: String,
    pub refresh_token: String,
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("client_id", &self.client_id)
            .field("redirect_uri", &self.redirect_uri)
            .finish_non_exhaustive()
    }
}

/// Exchange the refresh token for a fresh access token.
///
/// https://developer.spotify.com/documentation/web-api/tutorials/refreshing-tokens
pub async fn refresh_access_token(
    client: &reqwest::Client,
    endpoints: &Endpoints,
    credentials: &Credentials,
) -> Result<BearerToken> {
    debug!("Refreshing access token");
    let resp = client
        .post(endpoints.accounts_url("api/token")?)
        .basic_auth(&credentials.client_id, Some(&credentials.client_secret))
        .form(&[
            ("grant_type", "refresh_token"),
            ("refresh_token", credentials.refresh_token.as_str()),
        ])
        .send()
        .await?
        .error_for_status()
        .wrap_err("Token refresh was rejected")?
        .json::<TokenResponse>()
        .await?;

    debug!("Access Token: len={}", resp.access_token.len());
    debug!("Scope: {}", resp.scope.as_deref().unwrap_or_default());
    debug!("Expires in: {}s", resp.expires_in);

    Ok(BearerToken(resp.access_token))
}

/// The authorization-code URL an operator visits once to obtain a refresh token.
pub fn authorize_url(endpoints: &Endpoints, credentials: &Credentials, scopes: &[&str]) -> Result<Url> {
    let mut url = endpoints.accounts_url("authorize")?;
    url.query_pairs_mut()
        .append_pair("client_id", &credentials.client_id)
        .append_pair("response_type", "code")
        .append_pair("redirect_uri", &credentials.redirect_uri)
        .append_pair("scope", &scopes.join(" "));
    Ok(url)
}

#[derive(Debug, Deserialize, Serialize)]
struct TokenResponse {
    access_token: String,
    token_type: String,
    scope: Option<String>,
    expires_in: u64,
    refresh_token: Option<String>,
}
