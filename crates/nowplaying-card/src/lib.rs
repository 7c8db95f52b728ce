//! Renders the account's currently playing Spotify track as an embeddable SVG card.
//!
//! `GET /api` answers with `image/svg+xml`: cover, title, artists and a link to
//! the track, or an idle card when nothing is playing.

pub mod assets;
pub mod config;
pub mod render;
pub mod server;
pub mod snapshot;
