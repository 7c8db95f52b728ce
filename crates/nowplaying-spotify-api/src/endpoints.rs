use url::Url;

pub const API_BASE: &str = "https://api.spotify.com/";
pub const ACCOUNTS_BASE: &str = "https://accounts.spotify.com/";

/// Base URLs for the Web API and the accounts service.
///
/// Both must end in `/` so relative paths join underneath them.
#[derive(Debug, Clone, PartialEq)]
pub struct Endpoints {
    pub api: Url,
    pub accounts: Url,
}

impl Endpoints {
    pub fn new(api: Url, accounts: Url) -> Self {
        Self {
            api: with_trailing_slash(api),
            accounts: with_trailing_slash(accounts),
        }
    }

    pub fn api_url(&self, path: &str) -> eyre::Result<Url> {
        Ok(self.api.join(path)?)
    }

    pub fn accounts_url(&self, path: &str) -> eyre::Result<Url> {
        Ok(self.accounts.join(path)?)
    }
}

impl Default for Endpoints {
    fn default() -> Self {
        Self {
            api: Url::parse(API_BASE).expect("static url"),
            accounts: Url::parse(ACCOUNTS_BASE).expect("static url"),
        }
    }
}

fn with_trailing_slash(mut url: Url) -> Url {
    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }
    url
}

#[cfg(test)]
mod tests {
    use super::Endpoints;
    use url::Url;

    #[test]
    fn default_points_at_spotify() {
        let endpoints = Endpoints::default();
        assert_eq!(
            endpoints
                .api_url("v1/me/player/currently-playing")
                .unwrap()
                .as_str(),
            "https://api.spotify.com/v1/me/player/currently-playing"
        );
        assert_eq!(
            endpoints.accounts_url("api/token").unwrap().as_str(),
            "https://accounts.spotify.com/api/token"
        );
    }

    #[test]
    fn overrides_keep_their_path_prefix() {
        let endpoints = Endpoints::new(
            Url::parse("http://127.0.0.1:9000/mock").unwrap(),
            Url::parse("http://127.0.0.1:9000/accounts/").unwrap(),
        );
        assert_eq!(
            endpoints.api_url("v1/x").unwrap().as_str(),
            "http://127.0.0.1:9000/mock/v1/x"
        );
        assert_eq!(
            endpoints.accounts_url("api/token").unwrap().as_str(),
            "http://127.0.0.1:9000/accounts/api/token"
        );
    }
}
