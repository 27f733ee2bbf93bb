// Catalog Loader: read-only queries against the film catalog with empty fallbacks.
// Failures are logged and swallowed here; callers only ever see data or emptiness.

use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use crate::error::CrawlError;
use crate::types::{FilmId, FilmList, FilmOption, FilmRecord, FilmSummary};

/// Path of the list endpoint. The trailing slash avoids a redirect to plain http.
pub const FILMS_PATH: &str = "films/";

pub fn film_path(id: FilmId) -> String {
    format!("{FILMS_PATH}{id}/")
}

/// One read against the catalog. Implementations return the response body,
/// or `CrawlError::Status` for a non-success status.
#[allow(async_fn_in_trait)]
pub trait CatalogSource {
    async fn get(&self, path: &str) -> Result<String, CrawlError>;
}

/// Catalog Loader over any transport.
pub struct Catalog<S> {
    source: S,
}

impl<S: CatalogSource> Catalog<S> {
    pub fn new(source: S) -> Self {
        Catalog { source }
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    /// All films in release order. Empty on any failure.
    pub async fn list_films(&self) -> Vec<FilmSummary> {
        match self.fetch::<FilmList>(FILMS_PATH).await {
            Ok(list) => {
                debug!(count = list.results.len(), "loaded film list");
                list.results
            }
            Err(err) => {
                warn!(error = %err, "could not load film list");
                Vec::new()
            }
        }
    }

    /// One film by catalog id. The empty record on any failure.
    pub async fn load_film(&self, id: FilmId) -> FilmRecord {
        match self.fetch::<FilmRecord>(&film_path(id)).await {
            Ok(record) => {
                debug!(%id, episode = record.episode_id, "loaded film");
                record
            }
            Err(err) => {
                warn!(%id, error = %err, "could not load film");
                FilmRecord::default()
            }
        }
    }

    async fn fetch<T: DeserializeOwned>(&self, path: &str) -> Result<T, CrawlError> {
        let body = self.source.get(path).await?;
        Ok(serde_json::from_str(&body)?)
    }
}

/// Select options for a film list. Ids follow list position, starting at 1.
pub fn film_options(films: &[FilmSummary]) -> Vec<FilmOption> {
    films
        .iter()
        .enumerate()
        .map(|(idx, film)| FilmOption {
            id: FilmId::new(idx as u32 + 1),
            title: film.title.clone(),
        })
        .collect()
}
