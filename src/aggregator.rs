use futures::stream::{self, Stream, TryStreamExt};
use tracing::{debug, info};

use crate::client::DataApiClient;
use crate::duration::parse_duration;
use crate::error::PlaylistError;
use crate::models::{PlaylistItemsPage, PlaylistSummary};
use crate::projection::{project_all, DEFAULT_SPEEDS};
use crate::provider::MetadataProvider;
use crate::resolver::PlaylistId;
use crate::settings::Settings;

/// Listing page size and duration-lookup batch size; both are the Data API maximum.
pub const PAGE_SIZE: usize = 50;
pub const CHUNK_SIZE: usize = 50;

const MISSING_API_KEY: &str = "YOUTUBE_API_KEY is not defined";
const PLAYLIST_NOT_FOUND: &str = "Playlist not found";

enum PageCursor {
    First,
    Next(String),
    Done,
}

/// Computes total watch time of a playlist from a `MetadataProvider`.
///
/// The aggregator keeps nothing between calls; every `aggregate` starts
/// from scratch and either returns a complete summary or an error.
pub struct PlaylistAggregator<P> {
    provider: P,
    api_key: Option<String>,
}

impl PlaylistAggregator<DataApiClient> {
    /// Aggregator over the Data API, configured from `settings`.
    pub fn from_settings(settings: &Settings) -> Result<Self, PlaylistError> {
        let client = DataApiClient::from_settings(settings)?;
        Ok(Self::new(client, settings.api_key.clone()))
    }
}

impl<P: MetadataProvider> PlaylistAggregator<P> {
    pub fn new(provider: P, api_key: Option<String>) -> Self {
        Self { provider, api_key }
    }

    pub fn provider(&self) -> &P {
        &self.provider
    }

    pub async fn aggregate(
        &self,
        playlist_id: &PlaylistId,
    ) -> Result<PlaylistSummary, PlaylistError> {
        let api_key = self
            .api_key
            .as_deref()
            .filter(|key| !key.is_empty())
            .ok_or_else(|| PlaylistError::Configuration(MISSING_API_KEY.to_string()))?;

        info!(playlist_id = %playlist_id, "Aggregating playlist");

        let metadata = self
            .provider
            .playlist_metadata(api_key, playlist_id.as_str())
            .await?
            .ok_or_else(|| PlaylistError::NotFound(PLAYLIST_NOT_FOUND.to_string()))?;

        let video_ids = self.collect_video_ids(api_key, playlist_id.as_str()).await?;
        let total_seconds = if video_ids.is_empty() {
            debug!("Playlist listing is empty");
            0
        } else {
            self.sum_durations(api_key, &video_ids).await?
        };

        info!(
            playlist_id = %playlist_id,
            videos = video_ids.len(),
            total_seconds,
            "Playlist aggregated"
        );

        Ok(PlaylistSummary {
            title: metadata.title,
            thumbnail_url: metadata.thumbnail_url,
            item_count: video_ids.len(),
            total_seconds,
            projections: project_all(total_seconds, &DEFAULT_SPEEDS),
        })
    }

    /// Lazily fetched listing pages, following continuation tokens until the
    /// provider stops handing one out.
    fn pages<'a>(
        &'a self,
        api_key: &'a str,
        playlist_id: &'a str,
    ) -> impl Stream<Item = Result<PlaylistItemsPage, PlaylistError>> + 'a {
        stream::try_unfold(PageCursor::First, move |cursor| async move {
            let token = match cursor {
                PageCursor::Done => return Ok::<_, PlaylistError>(None),
                PageCursor::First => None,
                PageCursor::Next(token) => Some(token),
            };

            let page = self
                .provider
                .playlist_items(api_key, playlist_id, PAGE_SIZE, token.as_deref())
                .await?;
            debug!(
                listed = page.listed,
                videos = page.video_ids.len(),
                has_next = page.next_page_token.is_some(),
                "Fetched playlist page"
            );

            let next = match &page.next_page_token {
                Some(token) => PageCursor::Next(token.clone()),
                None => PageCursor::Done,
            };
            Ok::<_, PlaylistError>(Some((page, next)))
        })
    }

    /// A page that lists nothing ends the listing early; a page whose items
    /// all lack a video id does not.
    async fn collect_video_ids(
        &self,
        api_key: &str,
        playlist_id: &str,
    ) -> Result<Vec<String>, PlaylistError> {
        self.pages(api_key, playlist_id)
            .try_take_while(|page| futures::future::ready(Ok(page.listed > 0)))
            .try_fold(Vec::new(), |mut ids, page| async move {
                ids.extend(page.video_ids);
                Ok(ids)
            })
            .await
    }

    async fn sum_durations(
        &self,
        api_key: &str,
        video_ids: &[String],
    ) -> Result<u64, PlaylistError> {
        let mut total_seconds: u64 = 0;

        for chunk in video_ids.chunks(CHUNK_SIZE) {
            let durations = self.provider.video_durations(api_key, chunk).await?;
            debug!(
                requested = chunk.len(),
                returned = durations.len(),
                "Fetched duration batch"
            );
            total_seconds = durations
                .iter()
                .map(|video| parse_duration(&video.duration))
                .fold(total_seconds, u64::saturating_add);
        }

        Ok(total_seconds)
    }
}
