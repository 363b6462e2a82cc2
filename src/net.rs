//! Shared HTTP client.

use bevy::prelude::*;

/// User agent for API requests.
pub const USER_AGENT: &str = concat!("impact-lab/", env!("CARGO_PKG_VERSION"));

/// Shared HTTP client for all API requests.
///
/// Uses `reqwest::Client` internally, which is `Arc`-based so clones share
/// the same connection pool.
#[derive(Resource, Clone)]
pub struct HttpClient(pub reqwest::Client);

impl HttpClient {
    pub fn new() -> Result<Self, reqwest::Error> {
        reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .build()
            .map(Self)
    }
}

impl Default for HttpClient {
    fn default() -> Self {
        Self::new().unwrap_or_else(|e| {
            warn!("Failed to configure HTTP client ({e}), using defaults");
            Self(reqwest::Client::new())
        })
    }
}
