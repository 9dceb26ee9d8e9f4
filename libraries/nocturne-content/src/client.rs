//! HTTP client for the remote content table.

use crate::error::{ContentError, Result};
use crate::state::ContentListState;
use async_trait::async_trait;
use nocturne_core::{ContentItem, ContentSource, NocturneError, Profile};
use reqwest::Client;
use std::time::Duration;
use tracing::{debug, warn};

/// Configuration for connecting to the content source.
#[derive(Debug, Clone)]
pub struct ContentConfig {
    /// Base URL of the source (e.g. "https://abc123.supabase.co")
    pub base_url: String,
    /// Anonymous API key sent with every request
    pub api_key: String,
}

impl ContentConfig {
    /// Create a config from a base URL and API key.
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            api_key: api_key.into(),
        }
    }
}

/// Read-only client for the `content` table.
///
/// Wraps a PostgREST-style endpoint: the list query is a filter on
/// `target_profile` ordered by `created_at` descending, so the source
/// itself guarantees the newest-first contract.
pub struct ContentClient {
    http: Client,
    base_url: String,
    api_key: String,
}

impl ContentClient {
    /// Create a new client with the given configuration.
    pub fn new(config: ContentConfig) -> Result<Self> {
        if config.base_url.is_empty() {
            return Err(ContentError::InvalidUrl("URL cannot be empty".into()));
        }

        let base_url = config.base_url.trim_end_matches('/').to_string();
        if !base_url.starts_with("http://") && !base_url.starts_with("https://") {
            return Err(ContentError::InvalidUrl(
                "URL must start with http:// or https://".into(),
            ));
        }

        let http = Client::builder()
            .timeout(Duration::from_secs(30))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(format!("Nocturne/{}", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(ContentError::Request)?;

        Ok(Self {
            http,
            base_url,
            api_key: config.api_key,
        })
    }

    /// The normalized source URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Fetch the content list for a profile, newest first.
    pub async fn list_for_profile(&self, profile: Profile) -> Result<Vec<ContentItem>> {
        let url = format!("{}/rest/v1/content", self.base_url);
        debug!(url = %url, profile = %profile, "Fetching content list");

        let filter = format!("eq.{profile}");
        let response = self
            .http
            .get(&url)
            .query(&[
                ("select", "*"),
                ("target_profile", filter.as_str()),
                ("order", "created_at.desc"),
            ])
            .header("apikey", &self.api_key)
            .bearer_auth(&self.api_key)
            .send()
            .await?;

        let status = response.status();

        if status.is_success() {
            let items: Vec<ContentItem> = response.json().await.map_err(|e| {
                ContentError::ParseError(format!("Failed to parse content list: {e}"))
            })?;

            debug!(profile = %profile, items = items.len(), "Fetched content list");
            Ok(items)
        } else {
            let message = response.text().await.unwrap_or_default();
            Err(ContentError::ServerError {
                status: status.as_u16(),
                message,
            })
        }
    }

    /// Fetch the list and collapse it into the observable state.
    ///
    /// Failures are logged and presented as [`ContentListState::Empty`];
    /// the consumer cannot tell "no content" from "could not load
    /// content". Deliberate: the list screen never shows an error.
    pub async fn load_for_profile(&self, profile: Profile) -> ContentListState {
        match self.list_for_profile(profile).await {
            Ok(items) => ContentListState::from_items(items),
            Err(e) => {
                warn!(profile = %profile, error = %e, "Content fetch failed; showing empty list");
                ContentListState::Empty
            }
        }
    }
}

#[async_trait]
impl ContentSource for ContentClient {
    async fn list_for_profile(&self, profile: Profile) -> nocturne_core::Result<Vec<ContentItem>> {
        Self::list_for_profile(self, profile)
            .await
            .map_err(|e| NocturneError::content(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_url_rejected() {
        let result = ContentClient::new(ContentConfig::new("", "key"));
        assert!(matches!(result, Err(ContentError::InvalidUrl(_))));
    }

    #[test]
    fn scheme_required() {
        let result = ContentClient::new(ContentConfig::new("abc123.supabase.co", "key"));
        assert!(matches!(result, Err(ContentError::InvalidUrl(_))));
    }

    #[test]
    fn trailing_slash_normalized() {
        let client =
            ContentClient::new(ContentConfig::new("https://abc123.supabase.co/", "key")).unwrap();
        assert_eq!(client.base_url(), "https://abc123.supabase.co");
    }
}
