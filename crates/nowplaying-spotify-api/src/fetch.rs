use crate::bearer_token::BearerToken;
use http::StatusCode;
use url::Url;

fn deserialize<T>(body: &str) -> eyre::Result<T>
where
    T: serde::de::DeserializeOwned,
{
    match serde_json::from_str(body) {
        Ok(x) => Ok(x),
        Err(e) => Err(eyre::Error::new(e).wrap_err(format!("Failed to deserialize:\n{}", body))),
    }
}

/// Bearer GET decoded as JSON. `204 No Content` or a blank body yields `None`.
pub async fn fetch_optional<T>(
    client: &reqwest::Client,
    url: Url,
    bearer: &BearerToken,
) -> eyre::Result<Option<T>>
where
    T: serde::de::DeserializeOwned,
{
    let res = client
        .get(url)
        .bearer_auth(&bearer.0)
        .send()
        .await?
        .error_for_status()?;

    if res.status() == StatusCode::NO_CONTENT {
        return Ok(None);
    }

    let body = res.text().await?;
    if body.trim().is_empty() {
        return Ok(None);
    }

    deserialize(&body).map(Some)
}

/// Unauthenticated binary GET, used for album art hosted on the CDN.
pub async fn fetch_bytes(client: &reqwest::Client, url: &str) -> eyre::Result<Vec<u8>> {
    let bytes = client
        .get(url)
        .send()
        .await?
        .error_for_status()?
        .bytes()
        .await?;
    Ok(bytes.to_vec())
}
