#![allow(dead_code)]

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Mutex;

use playlist_length_rs::{
    MetadataProvider, PlaylistError, PlaylistItemsPage, PlaylistMetadata, VideoDuration,
};

pub const API_KEY: &str = "test-api-key";
pub const PLAYLIST_ID: &str = "PLtestplaylist01";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    Metadata(String),
    Items {
        page_size: usize,
        page_token: Option<String>,
    },
    Durations(Vec<String>),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailAt {
    Metadata,
    Items(usize),
    Durations(usize),
}

/// One listing page: the ids it yields plus items listed without an id.
#[derive(Debug, Clone, Default)]
pub struct FakePage {
    pub video_ids: Vec<String>,
    pub unidentified: usize,
}

/// In-memory catalog serving one playlist.
pub struct FakeProvider {
    pub metadata: Option<PlaylistMetadata>,
    pub pages: Vec<FakePage>,
    pub durations: HashMap<String, String>,
    pub fail_at: Option<FailAt>,
    calls: Mutex<Vec<Call>>,
}

impl FakeProvider {
    pub fn new(title: &str) -> Self {
        Self {
            metadata: Some(PlaylistMetadata {
                title: title.to_string(),
                thumbnail_url: Some("https://i.ytimg.com/vi/abc/hqdefault.jpg".to_string()),
            }),
            pages: Vec::new(),
            durations: HashMap::new(),
            fail_at: None,
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn missing() -> Self {
        Self {
            metadata: None,
            ..Self::new("")
        }
    }

    /// Add a page of videos, each with the given encoded duration.
    pub fn with_page(mut self, videos: &[(&str, &str)]) -> Self {
        let ids = videos.iter().map(|(id, _)| id.to_string()).collect();
        for (id, duration) in videos {
            self.durations.insert(id.to_string(), duration.to_string());
        }
        self.pages.push(FakePage {
            video_ids: ids,
            unidentified: 0,
        });
        self
    }

    /// Add a page of `count` videos numbered from `start`, each `seconds` long.
    pub fn with_numbered_page(mut self, start: usize, count: usize, seconds: u64) -> Self {
        let ids: Vec<String> = (start..start + count).map(|n| format!("vid{:04}", n)).collect();
        for id in &ids {
            self.durations.insert(id.clone(), format!("PT{}S", seconds));
        }
        self.pages.push(FakePage {
            video_ids: ids,
            unidentified: 0,
        });
        self
    }

    /// Add a page whose `count` items all lack a video id.
    pub fn with_unidentified_page(mut self, count: usize) -> Self {
        self.pages.push(FakePage {
            video_ids: Vec::new(),
            unidentified: count,
        });
        self
    }

    /// Listed in the playlist but no longer served by the video lookup.
    pub fn without_duration(mut self, id: &str) -> Self {
        self.durations.remove(id);
        self
    }

    pub fn failing_at(mut self, fail_at: FailAt) -> Self {
        self.fail_at = Some(fail_at);
        self
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, call: Call) -> usize {
        let mut calls = self.calls.lock().unwrap();
        calls.push(call);
        calls.len()
    }

    fn count(&self, pred: impl Fn(&Call) -> bool) -> usize {
        self.calls.lock().unwrap().iter().filter(|c| pred(c)).count()
    }
}

fn token_for(index: usize) -> String {
    format!("page-{}", index)
}

#[async_trait]
impl MetadataProvider for FakeProvider {
    async fn playlist_metadata(
        &self,
        api_key: &str,
        playlist_id: &str,
    ) -> Result<Option<PlaylistMetadata>, PlaylistError> {
        assert_eq!(api_key, API_KEY);
        self.record(Call::Metadata(playlist_id.to_string()));
        if self.fail_at == Some(FailAt::Metadata) {
            return Err(PlaylistError::ExternalApi("The request cannot be completed".to_string()));
        }
        Ok(self.metadata.clone())
    }

    async fn playlist_items(
        &self,
        api_key: &str,
        _playlist_id: &str,
        page_size: usize,
        page_token: Option<&str>,
    ) -> Result<PlaylistItemsPage, PlaylistError> {
        assert_eq!(api_key, API_KEY);
        self.record(Call::Items {
            page_size,
            page_token: page_token.map(ToString::to_string),
        });
        let index = match page_token {
            None => 0,
            Some(token) => token
                .strip_prefix("page-")
                .and_then(|n| n.parse::<usize>().ok())
                .expect("token issued by this provider"),
        };
        if self.fail_at == Some(FailAt::Items(index)) {
            return Err(PlaylistError::ExternalApi("Failed to fetch playlist items".to_string()));
        }

        let page = self.pages.get(index).cloned().unwrap_or_default();
        let next_page_token = if index + 1 < self.pages.len() {
            Some(token_for(index + 1))
        } else {
            None
        };
        Ok(PlaylistItemsPage {
            listed: page.video_ids.len() + page.unidentified,
            video_ids: page.video_ids,
            next_page_token,
        })
    }

    async fn video_durations(
        &self,
        api_key: &str,
        video_ids: &[String],
    ) -> Result<Vec<VideoDuration>, PlaylistError> {
        assert_eq!(api_key, API_KEY);
        assert!(video_ids.len() <= 50, "at most 50 ids per lookup");
        let batch = self.count(|c| matches!(c, Call::Durations(_)));
        self.record(Call::Durations(video_ids.to_vec()));
        if self.fail_at == Some(FailAt::Durations(batch)) {
            return Err(PlaylistError::ExternalApi("Failed to fetch video details".to_string()));
        }

        Ok(video_ids
            .iter()
            .filter_map(|id| {
                self.durations.get(id).map(|duration| VideoDuration {
                    id: id.clone(),
                    duration: duration.clone(),
                })
            })
            .collect())
    }
}
