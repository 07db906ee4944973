use async_trait::async_trait;

use crate::error::PlaylistError;
use crate::models::{PlaylistItemsPage, PlaylistMetadata, VideoDuration};

/// Source of playlist and video metadata.
///
/// Every call receives the access credential explicitly; implementations
/// hold no per-request state.
#[async_trait]
pub trait MetadataProvider: Send + Sync {
    /// Title and thumbnail of a playlist, or `None` when the catalog has no match.
    async fn playlist_metadata(
        &self,
        api_key: &str,
        playlist_id: &str,
    ) -> Result<Option<PlaylistMetadata>, PlaylistError>;

    /// One page of the playlist listing.
    async fn playlist_items(
        &self,
        api_key: &str,
        playlist_id: &str,
        page_size: usize,
        page_token: Option<&str>,
    ) -> Result<PlaylistItemsPage, PlaylistError>;

    /// Durations for up to 50 videos. Videos the catalog no longer serves
    /// are simply absent from the result.
    async fn video_durations(
        &self,
        api_key: &str,
        video_ids: &[String],
    ) -> Result<Vec<VideoDuration>, PlaylistError>;
}
