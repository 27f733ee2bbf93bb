// Seam between the crawl logic and the host UI surface.
// The DOM implementation lives in dom.rs; tests use a recording double.

use crate::error::CrawlError;
use crate::types::{Field, FilmId, FilmOption, FormValues};

/// The host UI surface: one film select, three editable fields, and the crawl region
/// (heading, title, and body slots inside an animated container).
pub trait CrawlView {
    /// Append film options to the select.
    fn add_film_options(&mut self, films: &[FilmOption]) -> Result<(), CrawlError>;

    /// Currently selected film, `None` when the value is not a catalog id.
    fn selected_film(&self) -> Option<FilmId>;

    fn form_values(&self) -> FormValues;

    /// Overwrite the editable fields. Must not fire input handlers.
    fn set_form_values(&mut self, values: &FormValues) -> Result<(), CrawlError>;

    /// Toggle the error indicator on a field's container.
    fn mark_field(&mut self, field: Field, valid: bool) -> Result<(), CrawlError>;

    fn show_heading(&mut self, heading: &str) -> Result<(), CrawlError>;

    fn show_title(&mut self, title: &str) -> Result<(), CrawlError>;

    /// Replace the body slot content with one node per paragraph.
    fn show_paragraphs(&mut self, paragraphs: &[String]) -> Result<(), CrawlError>;

    /// Restart the crawl animation from the top.
    fn replay(&mut self) -> Result<(), CrawlError>;
}
