pub mod bearer_token;
pub mod currently_playing;
pub mod endpoints;
pub mod fetch;
pub mod get_currently_playing;
pub mod track;
pub mod auth {
    pub mod refresh;
    pub mod token_provider;
}
