// Strong typing over strings. Newtypes for catalog ids, episode tokens, and catalog records.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Catalog id of a film. Release order, not episode order: id 1 is Episode IV.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct FilmId(u32);

impl FilmId {
    pub fn new(id: u32) -> Self {
        FilmId(id)
    }

    /// Parse the value of a `<select>` option.
    pub fn parse(value: &str) -> Option<Self> {
        value.trim().parse().ok().map(FilmId)
    }
}

impl fmt::Display for FilmId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Display form of an episode number. Only episodes 1-9 have a token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EpisodeToken {
    I,
    II,
    III,
    IV,
    V,
    VI,
    VII,
    VIII,
    IX,
}

impl EpisodeToken {
    pub const ALL: [EpisodeToken; 9] = [
        EpisodeToken::I,
        EpisodeToken::II,
        EpisodeToken::III,
        EpisodeToken::IV,
        EpisodeToken::V,
        EpisodeToken::VI,
        EpisodeToken::VII,
        EpisodeToken::VIII,
        EpisodeToken::IX,
    ];

    /// Token for an episode number, `None` outside 1-9.
    pub fn from_episode(episode_id: u32) -> Option<Self> {
        let index = usize::try_from(episode_id).ok()?.checked_sub(1)?;
        Self::ALL.get(index).copied()
    }

    /// Exact match against the nine symbols.
    pub fn parse(token: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|t| t.as_str() == token)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            EpisodeToken::I => "I",
            EpisodeToken::II => "II",
            EpisodeToken::III => "III",
            EpisodeToken::IV => "IV",
            EpisodeToken::V => "V",
            EpisodeToken::VI => "VI",
            EpisodeToken::VII => "VII",
            EpisodeToken::VIII => "VIII",
            EpisodeToken::IX => "IX",
        }
    }
}

impl fmt::Display for EpisodeToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Episode label for the crawl heading. Falls back to the raw number outside 1-9.
pub fn episode_label(episode_id: u32) -> String {
    match EpisodeToken::from_episode(episode_id) {
        Some(token) => token.as_str().to_string(),
        None => episode_id.to_string(),
    }
}

/// One entry of the catalog's film list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilmSummary {
    pub title: String,
    #[serde(default)]
    pub episode_id: u32,
}

/// Envelope of the list endpoint. Only `results` is used.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FilmList {
    #[serde(default)]
    pub results: Vec<FilmSummary>,
}

/// A single film as served by the catalog. Missing fields decode to their defaults,
/// so an error body decodes to the empty record.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilmRecord {
    #[serde(default)]
    pub episode_id: u32,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub opening_crawl: String,
}

impl FilmRecord {
    /// Whether the record carries crawl text worth rendering.
    pub fn has_crawl(&self) -> bool {
        !self.opening_crawl.is_empty()
    }
}

/// An option of the film `<select>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilmOption {
    pub id: FilmId,
    pub title: String,
}

/// One of the three editable fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Episode,
    Title,
    Body,
}

impl Field {
    pub const ALL: [Field; 3] = [Field::Episode, Field::Title, Field::Body];
}

/// Current content of the editable fields.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormValues {
    pub episode: String,
    pub title: String,
    pub body: String,
}
