use std::path::PathBuf;
use std::str::FromStr;

use eyre::Result;
use eyre::WrapErr;
use eyre::eyre;
use nowplaying_spotify_api::auth::refresh::Credentials;
use nowplaying_spotify_api::endpoints::Endpoints;
use url::Url;

pub const DEFAULT_PORT: u16 = 3000;
pub const LOGO_FILE: &str = "spotify_logo_rgb_green.svg";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Environment {
    Development,
    Production,
}

impl Environment {
    /// `production` selects production mode; anything else is development.
    pub fn from_node_env(value: Option<&str>) -> Self {
        match value {
            Some("production") => Environment::Production,
            _ => Environment::Development,
        }
    }
}

/// What the handler answers when rendering fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FailurePolicy {
    /// `502 Bad Gateway`, empty body.
    #[default]
    Status,
    /// The idle card with a 200.
    Idle,
}

impl FromStr for FailurePolicy {
    type Err = eyre::Report;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "status" | "error" => Ok(FailurePolicy::Status),
            "idle" => Ok(FailurePolicy::Idle),
            other => Err(eyre!("Unknown failure policy: {}", other)),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub base_url: String,
    pub credentials: Credentials,
    pub environment: Environment,
    pub port: u16,
    pub assets_dir: PathBuf,
    pub on_error: FailurePolicy,
    pub endpoints: Endpoints,
}

impl Config {
    pub fn logo_path(&self) -> PathBuf {
        self.assets_dir.join(LOGO_FILE)
    }

    /// Read configuration from the process environment.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Build configuration from any name lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |name: &str| lookup(name).ok_or_else(|| eyre!("Missing env var: {}", name));

        let credentials = Credentials {
            client_id: var("YOUR_CLIENT_ID")?,
            client_secret: var("YOUR_CLIENT_SECRET")?,
            redirect_uri: var("YOUR_REDIRECT_URI")?,
            refresh_token: var("YOUR_REFRESH_TOKEN")?,
        };

        let port = match lookup("PORT") {
            Some(port) => port
                .parse::<u16>()
                .wrap_err_with(|| format!("Invalid PORT: {}", port))?,
            None => DEFAULT_PORT,
        };

        let base_url = lookup("BASE_URL").unwrap_or_else(|| format!("http://localhost:{}", port));

        let on_error = match lookup("CARD_ON_ERROR") {
            Some(policy) => policy.parse::<FailurePolicy>()?,
            None => FailurePolicy::default(),
        };

        let defaults = Endpoints::default();
        let endpoints = Endpoints::new(
            url_or(lookup("SPOTIFY_API_BASE"), defaults.api, "SPOTIFY_API_BASE")?,
            url_or(lookup("SPOTIFY_ACCOUNTS_BASE"), defaults.accounts, "SPOTIFY_ACCOUNTS_BASE")?,
        );

        Ok(Config {
            base_url,
            credentials,
            environment: Environment::from_node_env(lookup("NODE_ENV").as_deref()),
            port,
            assets_dir: lookup("ASSETS_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from("assets")),
            on_error,
            endpoints,
        })
    }
}

fn url_or(value: Option<String>, default: Url, name: &str) -> Result<Url> {
    match value {
        Some(value) => Url::parse(&value).wrap_err_with(|| format!("Invalid {}: {}", name, value)),
        None => Ok(default),
    }
}
