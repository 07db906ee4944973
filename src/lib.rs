//! Estimate how long a YouTube playlist takes to watch, at several playback speeds.
//!
//! ```no_run
//! use playlist_length_rs::{resolve_playlist_id, PlaylistAggregator, SETTINGS};
//!
//! # async fn run() -> Result<(), playlist_length_rs::PlaylistError> {
//! let aggregator = PlaylistAggregator::from_settings(&SETTINGS)?;
//! let id = resolve_playlist_id("https://www.youtube.com/playlist?list=PLxyz1234567")
//!     .expect("valid playlist reference");
//! let summary = aggregator.aggregate(&id).await?;
//! for projection in &summary.projections {
//!     println!("{}: {}s", projection.speed, projection.adjusted_seconds);
//! }
//! # Ok(())
//! # }
//! ```
//!
//! # Logging
//!
//! This library uses the `tracing` crate for logging. To enable logs, you'll need to
//! initialize a tracing subscriber in your application.
//!
//! Example using `tracing_subscriber`:
//! ```no_run
//! use tracing::Level;
//! use tracing_subscriber::FmtSubscriber;
//!
//! // Create a subscriber with the desired log level
//! let subscriber = FmtSubscriber::builder()
//!     .with_max_level(Level::DEBUG) // Set to DEBUG, INFO, WARN, or ERROR
//!     .finish();
//!
//! // Initialize the global subscriber
//! tracing::subscriber::set_global_default(subscriber)
//!     .expect("Failed to set tracing subscriber");
//! ```
//!
//! The log levels control what information is displayed:
//! - `DEBUG`: Shows each listing page and duration batch, with how many videos came back
//! - `INFO`: Shows the start and result of every aggregation
//! - `WARN`: Shows rejected input and videos returned without a duration
//! - `ERROR`: Shows failed Data API requests

mod aggregator;
pub use aggregator::{PlaylistAggregator, CHUNK_SIZE, PAGE_SIZE};
pub mod api;
mod client;
pub use client::DataApiClient;
mod duration;
pub use duration::{format_hhmmss, parse_duration};
mod error;
pub use error::PlaylistError;
mod models;
pub use models::{
    ApiErrorBody, ApiErrorResponse, PlaylistItemContentDetails, PlaylistItemListResponse,
    PlaylistItemResource, PlaylistItemsPage, PlaylistListResponse, PlaylistMetadata,
    PlaylistResource, PlaylistSnippet, PlaylistSummary, Thumbnail, Thumbnails,
    VideoContentDetails, VideoDuration, VideoListResponse, VideoResource,
};
mod projection;
pub use projection::{project, project_all, Speed, SpeedProjection, DEFAULT_SPEEDS};
mod provider;
pub use provider::MetadataProvider;
mod resolver;
pub use resolver::{resolve_playlist_id, PlaylistId};
mod settings;
pub use settings::{Settings, DEFAULT_BASE_URL, SETTINGS};
