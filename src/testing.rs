// Test doubles for the catalog transport and the view.

use std::cell::RefCell;
use std::collections::HashMap;

use futures::channel::oneshot;

use crate::catalog::CatalogSource;
use crate::error::CrawlError;
use crate::types::{Field, FilmId, FilmOption, FormValues};
use crate::view::CrawlView;

/// Canned catalog responses keyed by path. Unknown paths answer 404.
#[derive(Default)]
pub struct StubCatalog {
    responses: HashMap<String, Result<String, u16>>,
    requests: RefCell<Vec<String>>,
}

impl StubCatalog {
    pub fn with_body(mut self, path: &str, body: &str) -> Self {
        self.responses.insert(path.to_string(), Ok(body.to_string()));
        self
    }

    pub fn with_status(mut self, path: &str, status: u16) -> Self {
        self.responses.insert(path.to_string(), Err(status));
        self
    }

    pub fn requests(&self) -> Vec<String> {
        self.requests.borrow().clone()
    }
}

impl CatalogSource for StubCatalog {
    async fn get(&self, path: &str) -> Result<String, CrawlError> {
        self.requests.borrow_mut().push(path.to_string());
        let url = format!("stub://{path}");
        match self.responses.get(path) {
            Some(Ok(body)) => Ok(body.clone()),
            Some(Err(status)) => Err(CrawlError::Status {
                status: *status,
                url,
            }),
            None => Err(CrawlError::Status { status: 404, url }),
        }
    }
}

/// Catalog whose every read fails before a response arrives.
pub struct OfflineCatalog;

impl CatalogSource for OfflineCatalog {
    async fn get(&self, _path: &str) -> Result<String, CrawlError> {
        Err(CrawlError::Transport("TypeError: Failed to fetch".to_string()))
    }
}

/// Catalog that holds each read open until the test releases its path.
#[derive(Default)]
pub struct GatedCatalog {
    bodies: HashMap<String, String>,
    gates: RefCell<HashMap<String, oneshot::Sender<()>>>,
}

impl GatedCatalog {
    pub fn with_body(mut self, path: &str, body: &str) -> Self {
        self.bodies.insert(path.to_string(), body.to_string());
        self
    }

    pub fn release(&self, path: &str) {
        if let Some(gate) = self.gates.borrow_mut().remove(path) {
            let _ = gate.send(());
        }
    }
}

impl CatalogSource for GatedCatalog {
    async fn get(&self, path: &str) -> Result<String, CrawlError> {
        let (tx, rx) = oneshot::channel();
        self.gates.borrow_mut().insert(path.to_string(), tx);
        rx.await
            .map_err(|_| CrawlError::Transport(format!("{path} was never released")))?;
        self.bodies
            .get(path)
            .cloned()
            .ok_or_else(|| CrawlError::Status {
                status: 404,
                url: format!("stub://{path}"),
            })
    }
}

/// Records what the crawl logic writes to the view.
#[derive(Debug, Default)]
pub struct RecordingView {
    pub options: Vec<FilmOption>,
    pub selected: Option<String>,
    pub fields: FormValues,
    pub invalid: Vec<Field>,
    pub heading: String,
    pub title: String,
    pub paragraphs: Vec<String>,
    pub replays: usize,
}

impl RecordingView {
    pub fn visible_text(&self) -> String {
        let mut text = format!("{}\n{}\n", self.heading, self.title);
        for p in &self.paragraphs {
            text.push_str(p);
            text.push('\n');
        }
        text
    }
}

impl CrawlView for RecordingView {
    fn add_film_options(&mut self, films: &[FilmOption]) -> Result<(), CrawlError> {
        self.options.extend_from_slice(films);
        Ok(())
    }

    fn selected_film(&self) -> Option<FilmId> {
        self.selected.as_deref().and_then(FilmId::parse)
    }

    fn form_values(&self) -> FormValues {
        self.fields.clone()
    }

    fn set_form_values(&mut self, values: &FormValues) -> Result<(), CrawlError> {
        self.fields = values.clone();
        Ok(())
    }

    fn mark_field(&mut self, field: Field, valid: bool) -> Result<(), CrawlError> {
        self.invalid.retain(|f| *f != field);
        if !valid {
            self.invalid.push(field);
        }
        Ok(())
    }

    fn show_heading(&mut self, heading: &str) -> Result<(), CrawlError> {
        self.heading = heading.to_string();
        Ok(())
    }

    fn show_title(&mut self, title: &str) -> Result<(), CrawlError> {
        self.title = title.to_string();
        Ok(())
    }

    fn show_paragraphs(&mut self, paragraphs: &[String]) -> Result<(), CrawlError> {
        self.paragraphs = paragraphs.to_vec();
        Ok(())
    }

    fn replay(&mut self) -> Result<(), CrawlError> {
        self.replays += 1;
        Ok(())
    }
}
