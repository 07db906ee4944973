use async_trait::async_trait;
use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, error, trace, warn};

use crate::error::PlaylistError;
use crate::models::{
    ApiErrorResponse, PlaylistItemListResponse, PlaylistItemsPage, PlaylistListResponse,
    PlaylistMetadata, VideoDuration, VideoListResponse,
};
use crate::provider::MetadataProvider;
use crate::settings::Settings;

const PLAYLIST_DETAILS_FALLBACK: &str = "Failed to fetch playlist details";
const PLAYLIST_ITEMS_FALLBACK: &str = "Failed to fetch playlist items";
const VIDEO_DETAILS_FALLBACK: &str = "Failed to fetch video details";

/// `MetadataProvider` backed by the YouTube Data API v3.
#[derive(Clone)]
pub struct DataApiClient {
    client: Arc<Client>,
    base_url: String,
}

impl DataApiClient {
    /// Create a client against `base_url`. Optionally accepts a custom reqwest
    /// client for connection reuse and shared configuration.
    pub fn new(
        base_url: &str,
        request_timeout: Duration,
        custom_client: Option<Arc<Client>>,
    ) -> Result<Self, PlaylistError> {
        let client = match custom_client {
            Some(client) => client,
            None => Arc::new(
                Client::builder()
                    .pool_idle_timeout(Some(Duration::from_secs(90)))
                    .timeout(request_timeout)
                    .connect_timeout(request_timeout)
                    .build()
                    .map_err(|e| {
                        PlaylistError::Configuration(format!("Failed to build HTTP client: {}", e))
                    })?,
            ),
        };

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn from_settings(settings: &Settings) -> Result<Self, PlaylistError> {
        Self::new(&settings.base_url, settings.request_timeout, None)
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        resource: &str,
        params: &[(&str, &str)],
        fallback: &str,
    ) -> Result<T, PlaylistError> {
        let url = format!("{}/{}", self.base_url, resource);
        trace!(%url, "Sending Data API request");

        let response = self.client.get(&url).query(params).send().await?;

        if !response.status().is_success() {
            return Err(Self::error_from_response(response, fallback).await);
        }

        let body = response.bytes().await?;
        Ok(serde_json::from_slice(&body)?)
    }

    /// Prefer the provider's own error message, fall back to a fixed one.
    async fn error_from_response(response: Response, fallback: &str) -> PlaylistError {
        let status = response.status();
        let body_text = response.text().await.unwrap_or_default();
        let message = serde_json::from_str::<ApiErrorResponse>(&body_text)
            .ok()
            .and_then(|err| err.message().map(ToString::to_string))
            .unwrap_or_else(|| fallback.to_string());
        error!(status = status.as_u16(), "Data API request failed: {}", message);
        PlaylistError::ExternalApi(message)
    }
}

impl std::fmt::Debug for DataApiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DataApiClient")
            .field("base_url", &self.base_url)
            .finish()
    }
}

#[async_trait]
impl MetadataProvider for DataApiClient {
    async fn playlist_metadata(
        &self,
        api_key: &str,
        playlist_id: &str,
    ) -> Result<Option<PlaylistMetadata>, PlaylistError> {
        let params = [("part", "snippet"), ("id", playlist_id), ("key", api_key)];
        let response: PlaylistListResponse = self
            .get_json("playlists", &params, PLAYLIST_DETAILS_FALLBACK)
            .await?;

        let metadata = response
            .items
            .into_iter()
            .next()
            .and_then(|item| item.snippet)
            .map(|snippet| PlaylistMetadata {
                thumbnail_url: snippet.thumbnails.best_url(),
                title: snippet.title,
            });
        debug!(found = metadata.is_some(), "Fetched playlist details");
        Ok(metadata)
    }

    async fn playlist_items(
        &self,
        api_key: &str,
        playlist_id: &str,
        page_size: usize,
        page_token: Option<&str>,
    ) -> Result<PlaylistItemsPage, PlaylistError> {
        let max_results = page_size.to_string();
        let mut params = vec![
            ("part", "contentDetails"),
            ("playlistId", playlist_id),
            ("maxResults", max_results.as_str()),
            ("key", api_key),
        ];
        if let Some(token) = page_token {
            params.push(("pageToken", token));
        }

        let response: PlaylistItemListResponse = self
            .get_json("playlistItems", &params, PLAYLIST_ITEMS_FALLBACK)
            .await?;

        let listed = response.items.len();
        let video_ids = response
            .items
            .into_iter()
            .filter_map(|item| item.content_details.and_then(|details| details.video_id))
            .filter(|id| !id.is_empty())
            .collect();

        Ok(PlaylistItemsPage {
            video_ids,
            listed,
            next_page_token: response.next_page_token.filter(|token| !token.is_empty()),
        })
    }

    async fn video_durations(
        &self,
        api_key: &str,
        video_ids: &[String],
    ) -> Result<Vec<VideoDuration>, PlaylistError> {
        let ids = video_ids.join(",");
        let params = [
            ("part", "contentDetails"),
            ("id", ids.as_str()),
            ("key", api_key),
        ];
        let response: VideoListResponse = self
            .get_json("videos", &params, VIDEO_DETAILS_FALLBACK)
            .await?;

        Ok(response
            .items
            .into_iter()
            .filter_map(|item| {
                match item.content_details.and_then(|details| details.duration) {
                    Some(duration) => Some(VideoDuration {
                        id: item.id,
                        duration,
                    }),
                    None => {
                        warn!(video_id = %item.id, "Video returned without a duration");
                        None
                    }
                }
            })
            .collect())
    }
}
