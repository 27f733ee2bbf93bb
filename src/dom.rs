// DOM bindings: explicit references to the elements the editor reads and writes.
// Bound once from the configured ids, then handed to the controller.

use wasm_bindgen::JsCast;
use web_sys::{
    Document, Element, HtmlElement, HtmlInputElement, HtmlOptionElement, HtmlSelectElement,
    HtmlTextAreaElement,
};

use crate::config::ElementIds;
use crate::error::CrawlError;
use crate::types::{Field, FilmId, FilmOption, FormValues};
use crate::view::CrawlView;

/// The film select, the three editable fields, and the crawl region.
pub struct ViewBindings {
    document: Document,
    ids: ElementIds,
    error_class: String,
    film_select: HtmlSelectElement,
    episode_input: HtmlInputElement,
    title_input: HtmlInputElement,
    body_input: HtmlTextAreaElement,
    crawl_container: HtmlElement,
    episode_slot: HtmlElement,
    title_slot: HtmlElement,
    body_slot: HtmlElement,
}

/// Elements the controller listens on.
#[derive(Clone)]
pub struct EventTargets {
    pub film_select: HtmlSelectElement,
    pub fields: Vec<HtmlElement>,
}

impl ViewBindings {
    pub fn bind(
        document: Document,
        ids: ElementIds,
        error_class: &str,
    ) -> Result<Self, CrawlError> {
        let film_select: HtmlSelectElement = lookup(&document, &ids.film_select)?;
        let episode_input: HtmlInputElement = lookup(&document, &ids.episode_input)?;
        let title_input: HtmlInputElement = lookup(&document, &ids.title_input)?;
        let body_input: HtmlTextAreaElement = lookup(&document, &ids.body_input)?;
        let crawl_container: HtmlElement = lookup(&document, &ids.crawl_container)?;
        let episode_slot: HtmlElement = lookup(&document, &ids.episode_slot)?;
        let title_slot: HtmlElement = lookup(&document, &ids.title_slot)?;
        let body_slot: HtmlElement = lookup(&document, &ids.body_slot)?;

        Ok(ViewBindings {
            document,
            ids,
            error_class: error_class.to_string(),
            film_select,
            episode_input,
            title_input,
            body_input,
            crawl_container,
            episode_slot,
            title_slot,
            body_slot,
        })
    }

    pub fn event_targets(&self) -> EventTargets {
        EventTargets {
            film_select: self.film_select.clone(),
            fields: vec![
                self.episode_input.clone().unchecked_into(),
                self.title_input.clone().unchecked_into(),
                self.body_input.clone().unchecked_into(),
            ],
        }
    }

    pub fn crawl_container(&self) -> &HtmlElement {
        &self.crawl_container
    }

    fn field_element(&self, field: Field) -> &HtmlElement {
        match field {
            Field::Episode => self.episode_input.unchecked_ref(),
            Field::Title => self.title_input.unchecked_ref(),
            Field::Body => self.body_input.unchecked_ref(),
        }
    }

    fn element(&self, tag: &str) -> Result<Element, CrawlError> {
        self.document.create_element(tag).map_err(CrawlError::dom)
    }

    /// Slots live inside the animated container, so they go stale whenever it is replaced.
    fn rebind_slots(&mut self) -> Result<(), CrawlError> {
        self.episode_slot = lookup(&self.document, &self.ids.episode_slot)?;
        self.title_slot = lookup(&self.document, &self.ids.title_slot)?;
        self.body_slot = lookup(&self.document, &self.ids.body_slot)?;
        Ok(())
    }
}

impl CrawlView for ViewBindings {
    fn add_film_options(&mut self, films: &[FilmOption]) -> Result<(), CrawlError> {
        for film in films {
            let value = film.id.to_string();
            let option = HtmlOptionElement::new_with_text_and_value(&film.title, &value)
                .map_err(CrawlError::dom)?;
            self.film_select
                .append_child(&option)
                .map_err(CrawlError::dom)?;
        }
        Ok(())
    }

    fn selected_film(&self) -> Option<FilmId> {
        FilmId::parse(&self.film_select.value())
    }

    fn form_values(&self) -> FormValues {
        FormValues {
            episode: self.episode_input.value(),
            title: self.title_input.value(),
            body: self.body_input.value(),
        }
    }

    fn set_form_values(&mut self, values: &FormValues) -> Result<(), CrawlError> {
        // Setting `value` from script does not dispatch `input`.
        self.episode_input.set_value(&values.episode);
        self.title_input.set_value(&values.title);
        self.body_input.set_value(&values.body);
        Ok(())
    }

    fn mark_field(&mut self, field: Field, valid: bool) -> Result<(), CrawlError> {
        let Some(container) = self.field_element(field).parent_element() else {
            return Ok(());
        };
        container
            .class_list()
            .toggle_with_force(&self.error_class, !valid)
            .map_err(CrawlError::dom)?;
        Ok(())
    }

    fn show_heading(&mut self, heading: &str) -> Result<(), CrawlError> {
        self.episode_slot.set_text_content(Some(heading));
        Ok(())
    }

    fn show_title(&mut self, title: &str) -> Result<(), CrawlError> {
        let strong = self.element("strong")?;
        strong.set_text_content(Some(title));
        self.title_slot.set_text_content(None);
        self.title_slot.append_child(&strong).map_err(CrawlError::dom)?;
        Ok(())
    }

    fn show_paragraphs(&mut self, paragraphs: &[String]) -> Result<(), CrawlError> {
        self.body_slot.set_text_content(None);
        for paragraph in paragraphs {
            let p = self.element("p")?;
            p.set_text_content(Some(paragraph));
            self.body_slot.append_child(&p).map_err(CrawlError::dom)?;
        }
        Ok(())
    }

    fn replay(&mut self) -> Result<(), CrawlError> {
        // A CSS animation only restarts on a fresh element, so swap in a deep clone.
        let clone: HtmlElement = self
            .crawl_container
            .clone_node_with_deep(true)
            .map_err(CrawlError::dom)?
            .dyn_into()
            .map_err(|_| CrawlError::Dom("crawl container clone is not an element".to_string()))?;
        self.crawl_container
            .replace_with_with_node_1(&clone)
            .map_err(CrawlError::dom)?;
        self.crawl_container = clone;
        self.rebind_slots()
    }
}

fn lookup<T: JsCast>(document: &Document, id: &str) -> Result<T, CrawlError> {
    document
        .get_element_by_id(id)
        .ok_or_else(|| CrawlError::MissingElement(id.to_string()))?
        .dyn_into::<T>()
        .map_err(|_| CrawlError::Dom(format!("#{id} has an unexpected element type")))
}
