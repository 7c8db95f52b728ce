use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

use axum::Router;
use axum::extract::State;
use axum::response::IntoResponse;
use axum::response::Response;
use axum::routing::get;
use eyre::Result;
use http::StatusCode;
use http::header::CONTENT_TYPE;
use nowplaying_spotify_api::auth::refresh::CURRENTLY_PLAYING_SCOPE;
use nowplaying_spotify_api::auth::refresh::authorize_url;
use nowplaying_spotify_api::auth::token_provider::RefreshTokenProvider;
use nowplaying_spotify_api::auth::token_provider::TokenProvider;
use nowplaying_spotify_api::endpoints::Endpoints;
use tokio::net::TcpListener;
use tracing::debug;
use tracing::error;
use tracing::info;

use crate::assets::read_logo;
use crate::config::Config;
use crate::config::Environment;
use crate::config::FailurePolicy;
use crate::render::CardContext;
use crate::render::render_card;
use crate::snapshot::load_snapshot;

pub const SVG_CONTENT_TYPE: &str = "image/svg+xml";

/// Shared by every request; cloning is cheap.
#[derive(Clone)]
pub struct AppState {
    pub client: reqwest::Client,
    pub endpoints: Endpoints,
    pub tokens: Arc<dyn TokenProvider>,
    pub logo_path: PathBuf,
    pub on_error: FailurePolicy,
}

impl AppState {
    pub fn from_config(config: &Config) -> Self {
        let client = reqwest::Client::new();
        let tokens = RefreshTokenProvider::new(
            client.clone(),
            config.endpoints.clone(),
            config.credentials.clone(),
        );
        Self {
            client,
            endpoints: config.endpoints.clone(),
            tokens: Arc::new(tokens),
            logo_path: config.logo_path(),
            on_error: config.on_error,
        }
    }
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/api", get(now_playing_card))
        .with_state(state)
}

/// Read the logo, get a token, query playback and render the card.
pub async fn render_now_playing_card(state: &AppState) -> Result<String> {
    let logo = read_logo(&state.logo_path).await?;
    debug!("Logo loaded: len={}", logo.len());

    let bearer = state.tokens.bearer_token().await?;
    let snapshot = load_snapshot(&state.client, &state.endpoints, &bearer).await?;

    Ok(render_card(&CardContext::from(snapshot.as_ref())))
}

fn svg(body: String) -> Response {
    ([(CONTENT_TYPE, SVG_CONTENT_TYPE)], body).into_response()
}

async fn now_playing_card(State(state): State<AppState>) -> Response {
    match render_now_playing_card(&state).await {
        Ok(body) => svg(body),
        Err(e) => {
            error!("Failed to render card: {:?}", e);
            match state.on_error {
                FailurePolicy::Status => StatusCode::BAD_GATEWAY.into_response(),
                FailurePolicy::Idle => svg(render_card(&CardContext::idle())),
            }
        }
    }
}

/// Bind and serve until the process is stopped.
pub async fn serve(config: Config) -> Result<()> {
    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    let listener = TcpListener::bind(addr).await?;

    match config.environment {
        Environment::Development => {
            info!("Server running at {}/api", config.base_url);
            let url = authorize_url(
                &config.endpoints,
                &config.credentials,
                &[CURRENTLY_PLAYING_SCOPE],
            )?;
            debug!("Authorize a refresh token at {}", url);
        }
        Environment::Production => {
            info!("Listening on {}", listener.local_addr()?);
        }
    }

    axum::serve(listener, router(AppState::from_config(&config))).await?;
    Ok(())
}
