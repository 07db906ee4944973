//! Transport-neutral handler for playlist requests.
//!
//! Takes the `{ "playlistInput": ... }` body an HTTP route receives and
//! produces the status code and JSON body it should answer with.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{error, warn};

use crate::aggregator::PlaylistAggregator;
use crate::error::PlaylistError;
use crate::provider::MetadataProvider;
use crate::resolver::resolve_playlist_id;

const INPUT_REQUIRED: &str = "Playlist input is required";
const INPUT_INVALID: &str = "Invalid playlist URL or ID";
const UNEXPECTED_ERROR: &str = "An unexpected error occurred";

#[derive(Debug, Clone, Default, Deserialize)]
pub struct PlaylistRequest {
    #[serde(rename = "playlistInput", default)]
    pub playlist_input: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ErrorResponse {
    pub error: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ApiResponse {
    pub status: u16,
    pub body: Value,
}

impl ApiResponse {
    fn error(status: u16, message: impl Into<String>) -> Self {
        let body = ErrorResponse {
            error: message.into(),
        };
        Self {
            status,
            body: serde_json::to_value(body).unwrap_or(Value::Null),
        }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

impl From<PlaylistError> for ApiResponse {
    fn from(err: PlaylistError) -> Self {
        let message = err.to_string();
        if message.is_empty() {
            ApiResponse::error(err.status_code(), UNEXPECTED_ERROR)
        } else {
            ApiResponse::error(err.status_code(), message)
        }
    }
}

/// Resolve the input and aggregate the playlist it names.
///
/// Bad input is rejected with 400 before the provider is contacted.
pub async fn handle_playlist_request<P: MetadataProvider>(
    aggregator: &PlaylistAggregator<P>,
    request: PlaylistRequest,
) -> ApiResponse {
    let input = match request.playlist_input.as_deref().map(str::trim) {
        Some(input) if !input.is_empty() => input,
        _ => return ApiResponse::error(400, INPUT_REQUIRED),
    };

    let Some(playlist_id) = resolve_playlist_id(input) else {
        warn!(input, "Rejected playlist input");
        return PlaylistError::InvalidInput(INPUT_INVALID.to_string()).into();
    };

    match aggregator.aggregate(&playlist_id).await {
        Ok(summary) => match serde_json::to_value(&summary) {
            Ok(body) => ApiResponse { status: 200, body },
            Err(e) => ApiResponse::error(500, e.to_string()),
        },
        Err(e) => {
            error!(error = %e, playlist_id = %playlist_id, "Playlist request failed");
            e.into()
        }
    }
}

/// Same as [`handle_playlist_request`], starting from a raw JSON body.
pub async fn handle_playlist_body<P: MetadataProvider>(
    aggregator: &PlaylistAggregator<P>,
    body: &[u8],
) -> ApiResponse {
    match serde_json::from_slice::<PlaylistRequest>(body) {
        Ok(request) => handle_playlist_request(aggregator, request).await,
        Err(e) => {
            warn!(error = %e, "Malformed playlist request body");
            ApiResponse::error(400, INPUT_REQUIRED)
        }
    }
}
