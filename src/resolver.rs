use lazy_static::lazy_static;
use regex::Regex;
use reqwest::Url;
use std::fmt;

lazy_static! {
    static ref PLAYLIST_ID_RE: Regex = Regex::new(r"^[a-zA-Z0-9_-]{10,}$").unwrap();
}

/// Canonical identifier of a playlist in the external catalog.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PlaylistId(String);

impl PlaylistId {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for PlaylistId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for PlaylistId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Extract a playlist identifier from a URL or a bare ID.
///
/// A parseable URL only resolves through its `list` query parameter; a
/// URL without one is rejected even if the text would otherwise look like
/// an ID. Anything that is not a URL must consist of 10 or more letters,
/// digits, `-` or `_`.
pub fn resolve_playlist_id(input: &str) -> Option<PlaylistId> {
    match Url::parse(input) {
        Ok(url) => url
            .query_pairs()
            .find(|(key, _)| key == "list")
            .map(|(_, value)| value.into_owned())
            .filter(|value| !value.is_empty())
            .map(PlaylistId),
        Err(_) if PLAYLIST_ID_RE.is_match(input) => Some(PlaylistId(input.to_string())),
        Err(_) => None,
    }
}
