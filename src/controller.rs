// Form Controller: reacts to select changes and field input by loading, validating, and rendering.
// Each handler is a stateless reaction to one event. The view is never borrowed across an await.

use std::cell::{Cell, RefCell};

use tracing::{debug, info};

use crate::catalog::{film_options, Catalog, CatalogSource};
use crate::crawl::Crawl;
use crate::error::CrawlError;
use crate::render::render;
use crate::types::Field;
use crate::validate::FieldReport;
use crate::view::CrawlView;

pub struct FormController<S, V> {
    catalog: Catalog<S>,
    view: RefCell<V>,
    /// Bumped per selection change. A load that finishes under an older value is dropped.
    selection: Cell<u64>,
}

impl<S: CatalogSource, V: CrawlView> FormController<S, V> {
    pub fn new(catalog: Catalog<S>, view: V) -> Self {
        FormController {
            catalog,
            view: RefCell::new(view),
            selection: Cell::new(0),
        }
    }

    pub fn catalog(&self) -> &Catalog<S> {
        &self.catalog
    }

    pub fn view(&self) -> &RefCell<V> {
        &self.view
    }

    /// Show the opening crawl, then fill the film select from the catalog.
    pub async fn start(&self) -> Result<(), CrawlError> {
        self.show(&Crawl::opening())?;

        let films = self.catalog.list_films().await;
        let options = film_options(&films);
        info!(count = options.len(), "populating film select");
        self.view.borrow_mut().add_film_options(&options)
    }

    /// Load the selected film and render its crawl, or the placeholder when it has none.
    /// Only the latest selection renders; earlier loads still in flight are discarded.
    pub async fn on_selection_change(&self) -> Result<(), CrawlError> {
        let generation = self.selection.get().wrapping_add(1);
        self.selection.set(generation);

        let selected = self.view.borrow().selected_film();
        let crawl = match selected {
            Some(id) => {
                let record = self.catalog.load_film(id).await;
                if self.selection.get() != generation {
                    debug!(%id, "newer selection pending, dropping loaded film");
                    return Ok(());
                }
                Crawl::from_record(&record).unwrap_or_else(|| {
                    debug!(%id, "film has no crawl, showing placeholder");
                    Crawl::placeholder()
                })
            }
            None => {
                debug!("selection is not a film id, showing placeholder");
                Crawl::placeholder()
            }
        };
        self.show(&crawl)
    }

    /// Validate the fields, mark the invalid ones, and render what was typed.
    pub fn on_field_input(&self) -> Result<(), CrawlError> {
        let mut view = self.view.borrow_mut();
        let values = view.form_values();
        let report = FieldReport::of(&values);
        if !report.all_valid() {
            let invalid: Vec<_> = report.invalid_fields().collect();
            debug!(?invalid, "form has invalid fields");
        }
        mark_fields(&mut *view, &report)?;
        render(&mut *view, &Crawl::from_form(&values))
    }

    /// Render a crawl and mirror it into the editable fields.
    fn show(&self, crawl: &Crawl) -> Result<(), CrawlError> {
        let mut view = self.view.borrow_mut();
        let values = crawl.form_values();
        view.set_form_values(&values)?;
        mark_fields(&mut *view, &FieldReport::of(&values))?;
        render(&mut *view, crawl)
    }
}

fn mark_fields<V: CrawlView + ?Sized>(
    view: &mut V,
    report: &FieldReport,
) -> Result<(), CrawlError> {
    for field in Field::ALL {
        view.mark_field(field, report.is_valid(field))?;
    }
    Ok(())
}
