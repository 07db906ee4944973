use serde::{Deserialize, Serialize};

use crate::projection::SpeedProjection;

// Result handed back to callers
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlaylistSummary {
    pub title: String,
    #[serde(rename = "thumbnail", skip_serializing_if = "Option::is_none")]
    pub thumbnail_url: Option<String>,
    /// Identifiers found in the listing, including ones whose duration
    /// could not be fetched later.
    #[serde(rename = "totalVideos")]
    pub item_count: usize,
    #[serde(rename = "totalSeconds")]
    pub total_seconds: u64,
    #[serde(rename = "durationsBySpeed")]
    pub projections: Vec<SpeedProjection>,
}

// Values returned by a MetadataProvider
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlaylistMetadata {
    pub title: String,
    pub thumbnail_url: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlaylistItemsPage {
    pub video_ids: Vec<String>,
    /// Items on the page as listed, including ones without a video id.
    pub listed: usize,
    pub next_page_token: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VideoDuration {
    pub id: String,
    /// Encoded as `PT#H#M#S`
    pub duration: String,
}

// Response types for the Data API
#[derive(Debug, Clone, Deserialize, Default)]
pub struct Thumbnail {
    #[serde(default)]
    pub url: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Default)]
pub struct Thumbnails {
    #[serde(default)]
    pub default: Option<Thumbnail>,
    #[serde(default)]
    pub medium: Option<Thumbnail>,
    #[serde(default)]
    pub high: Option<Thumbnail>,
}

impl Thumbnails {
    /// Highest resolution available: high, then medium, then default.
    pub fn best_url(&self) -> Option<String> {
        [&self.high, &self.medium, &self.default]
            .into_iter()
            .flatten()
            .find_map(|thumb| thumb.url.clone())
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct PlaylistSnippet {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub thumbnails: Thumbnails,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PlaylistResource {
    #[serde(default)]
    pub snippet: Option<PlaylistSnippet>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PlaylistListResponse {
    #[serde(default)]
    pub items: Vec<PlaylistResource>,
}

#[derive(Debug, Clone, Deserialize, Default)]
pub struct PlaylistItemContentDetails {
    #[serde(rename = "videoId", default)]
    pub video_id: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PlaylistItemResource {
    #[serde(rename = "contentDetails", default)]
    pub content_details: Option<PlaylistItemContentDetails>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PlaylistItemListResponse {
    #[serde(default)]
    pub items: Vec<PlaylistItemResource>,
    #[serde(rename = "nextPageToken", default)]
    pub next_page_token: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Default)]
pub struct VideoContentDetails {
    #[serde(default)]
    pub duration: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct VideoResource {
    #[serde(default)]
    pub id: String,
    #[serde(rename = "contentDetails", default)]
    pub content_details: Option<VideoContentDetails>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct VideoListResponse {
    #[serde(default)]
    pub items: Vec<VideoResource>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ApiErrorBody {
    #[serde(default)]
    pub code: Option<u16>,
    #[serde(default)]
    pub message: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ApiErrorResponse {
    #[serde(default)]
    pub error: Option<ApiErrorBody>,
}

impl ApiErrorResponse {
    pub fn message(&self) -> Option<&str> {
        self.error
            .as_ref()
            .and_then(|body| body.message.as_deref())
            .filter(|msg| !msg.is_empty())
    }
}
