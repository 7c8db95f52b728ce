use std::collections::HashMap;

use axum::Form;
use axum::Json;
use axum::Router;
use axum::http::HeaderMap;
use axum::http::StatusCode;
use axum::http::header::AUTHORIZATION;
use axum::response::IntoResponse;
use axum::routing::get;
use axum::routing::post;
use nowplaying_spotify_api::auth::refresh::Credentials;
use nowplaying_spotify_api::auth::token_provider::RefreshTokenProvider;
use nowplaying_spotify_api::auth::token_provider::TokenProvider;
use nowplaying_spotify_api::bearer_token::BearerToken;
use nowplaying_spotify_api::endpoints::Endpoints;
use nowplaying_spotify_api::fetch::fetch_bytes;
use nowplaying_spotify_api::get_currently_playing::get_currently_playing;
use serde_json::json;
use url::Url;

async fn spawn(router: Router) -> Url {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    Url::parse(&format!("http://{}/", addr)).unwrap()
}

fn credentials() -> Credentials {
    Credentials {
        client_id: "client".to_string(),
        client_secret: "secret".to_string(),
        redirect_uri: "http://localhost:3000/callback".to_string(),
        refresh_token: "long-lived".to_string(),
    }
}

async fn token(headers: HeaderMap, Form(form): Form<HashMap<String, String>>) -> impl IntoResponse {
    // base64("client:secret")
    let expected = "Basic Y2xpZW50OnNlY3JldA==";
    let authorized = headers
        .get(AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|v| v == expected);
    let grant_ok = form.get("grant_type").map(String::as_str) == Some("refresh_token")
        && form.get("refresh_token").map(String::as_str) == Some("long-lived");
    if authorized && grant_ok {
        Json(json!({
            "access_token": "fresh-access",
            "token_type": "Bearer",
            "scope": "user-read-currently-playing",
            "expires_in": 3600
        }))
        .into_response()
    } else {
        (StatusCode::BAD_REQUEST, Json(json!({ "error": "invalid_grant" }))).into_response()
    }
}

fn bearer_is(headers: &HeaderMap, token: &str) -> bool {
    headers
        .get(AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|v| v == format!("Bearer {}", token))
}

#[tokio::test]
async fn refresh_grant_returns_access_token() {
    let base = spawn(Router::new().route("/api/token", post(token))).await;
    let endpoints = Endpoints::new(base.clone(), base);
    let provider = RefreshTokenProvider::new(reqwest::Client::new(), endpoints, credentials());

    let bearer = provider.bearer_token().await.unwrap();
    assert_eq!(bearer, BearerToken("fresh-access".to_string()));
}

#[tokio::test]
async fn rejected_refresh_is_an_error() {
    let base = spawn(Router::new().route("/api/token", post(token))).await;
    let endpoints = Endpoints::new(base.clone(), base);
    let mut bad = credentials();
    bad.refresh_token = "revoked".to_string();
    let provider = RefreshTokenProvider::new(reqwest::Client::new(), endpoints, bad);

    let err = provider.bearer_token().await.unwrap_err();
    assert!(format!("{:#}", err).contains("Token refresh was rejected"));
}

#[tokio::test]
async fn no_content_means_nothing_playing() {
    let router = Router::new().route(
        "/v1/me/player/currently-playing",
        get(|headers: HeaderMap| async move {
            if bearer_is(&headers, "tok") {
                StatusCode::NO_CONTENT
            } else {
                StatusCode::UNAUTHORIZED
            }
        }),
    );
    let base = spawn(router).await;
    let endpoints = Endpoints::new(base.clone(), base);
    let client = reqwest::Client::new();

    let playing = get_currently_playing(&client, &endpoints, &BearerToken("tok".to_string()))
        .await
        .unwrap();
    assert!(playing.is_none());

    let unauthorized =
        get_currently_playing(&client, &endpoints, &BearerToken("wrong".to_string())).await;
    assert!(unauthorized.is_err());
}

#[tokio::test]
async fn parses_current_track() {
    let router = Router::new().route(
        "/v1/me/player/currently-playing",
        get(|| async {
            Json(json!({
                "is_playing": true,
                "progress_ms": 1000,
                "currently_playing_type": "track",
                "item": {
                    "name": "Song",
                    "artists": [{ "name": "A" }, { "name": "B" }],
                    "album": {
                        "name": "Record",
                        "images": [{ "url": "http://cdn/300", "height": 300, "width": 300 }]
                    },
                    "external_urls": { "spotify": "https://open.spotify.com/track/1" }
                }
            }))
        }),
    );
    let base = spawn(router).await;
    let endpoints = Endpoints::new(base.clone(), base);

    let playing = get_currently_playing(
        &reqwest::Client::new(),
        &endpoints,
        &BearerToken("tok".to_string()),
    )
    .await
    .unwrap()
    .unwrap();
    assert!(playing.is_playing);
    let track = playing.item.unwrap();
    assert_eq!(track.name, "Song");
    assert_eq!(track.artist_names(), "A, B");
    assert_eq!(track.album.image_with_height(300).unwrap().url, "http://cdn/300");
}

#[tokio::test]
async fn malformed_body_reports_the_payload() {
    let router = Router::new().route(
        "/v1/me/player/currently-playing",
        get(|| async { "{ not json" }),
    );
    let base = spawn(router).await;
    let endpoints = Endpoints::new(base.clone(), base);

    let err = get_currently_playing(
        &reqwest::Client::new(),
        &endpoints,
        &BearerToken("tok".to_string()),
    )
    .await
    .unwrap_err();
    assert!(format!("{:#}", err).contains("{ not json"));
}

#[tokio::test]
async fn fetches_raw_bytes() {
    let router = Router::new().route("/image", get(|| async { vec![0u8, 1, 2, 255] }));
    let base = spawn(router).await;

    let bytes = fetch_bytes(&reqwest::Client::new(), base.join("image").unwrap().as_str())
        .await
        .unwrap();
    assert_eq!(bytes, vec![0u8, 1, 2, 255]);
}
