// crawl_core: opening-crawl editor compiled to WASM.
// Rust owns loading, formatting, validation and DOM updates. The page supplies markup and CSS.

mod catalog;
mod config;
mod controller;
mod crawl;
mod dom;
mod error;
mod events;
mod fetch;
mod logging;
mod render;
mod types;
mod validate;
mod view;

#[cfg(test)]
mod testing;

use std::rc::Rc;

use tracing::info;
use wasm_bindgen::prelude::*;

pub use catalog::{film_options, film_path, Catalog, CatalogSource, FILMS_PATH};
pub use config::{AppConfig, ElementIds};
pub use controller::FormController;
pub use crawl::{normalize_line_endings, Crawl, PARAGRAPH_SEPARATOR};
pub use dom::{EventTargets, ViewBindings};
pub use error::CrawlError;
pub use fetch::FetchSource;
pub use render::{render, CrawlLayout};
pub use types::*;
pub use validate::{is_episode_token, is_filled, FieldReport};
pub use view::CrawlView;

/// Initialize panic hook for better error messages in browser console.
#[wasm_bindgen(start)]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

/// Crawl editor exposed to JavaScript.
///
/// ```js
/// const app = new CrawlApp(JSON.stringify({ log_level: "debug" }));
/// await app.start();
/// ```
#[wasm_bindgen]
pub struct CrawlApp {
    config: AppConfig,
}

#[wasm_bindgen]
impl CrawlApp {
    #[wasm_bindgen(constructor)]
    pub fn new(config_json: &str) -> Result<CrawlApp, JsValue> {
        let config = AppConfig::from_json(config_json)?;
        logging::init(config.level()?);
        Ok(CrawlApp { config })
    }

    /// Bind the page, wire the listeners, show the opening crawl, and fill the film select.
    pub async fn start(self) -> Result<(), JsValue> {
        let document = web_sys::window()
            .and_then(|w| w.document())
            .ok_or_else(|| CrawlError::Dom("no global `document`".to_string()))?;

        let view = ViewBindings::bind(
            document,
            self.config.elements.clone(),
            &self.config.error_class,
        )?;
        let targets = view.event_targets();
        let catalog = Catalog::new(FetchSource::new(&self.config.catalog_base_url));
        let controller = Rc::new(FormController::new(catalog, view));

        events::bind_events(&controller, &targets)?;
        info!(catalog = %self.config.catalog_base_url, "crawl editor bound");

        controller.start().await?;
        Ok(())
    }

    /// Catalog root in use, after defaults.
    #[wasm_bindgen(getter)]
    pub fn catalog_base_url(&self) -> String {
        self.config.catalog_base_url.clone()
    }
}

/// Layout of a crawl as JSON `{ heading, title, paragraphs }`, for previews outside the editor.
#[wasm_bindgen]
pub fn layout_crawl(episode: &str, title: &str, body: &str) -> Result<String, JsValue> {
    let layout = CrawlLayout::of(&Crawl::new(episode, title, body));
    serde_json::to_string(&layout)
        .map_err(|e| JsValue::from_str(&format!("Serialization error: {}", e)))
}

/// Whether the three field values would pass validation.
#[wasm_bindgen]
pub fn validate_fields(episode: &str, title: &str, body: &str) -> bool {
    FieldReport::of(&FormValues {
        episode: episode.to_string(),
        title: title.to_string(),
        body: body.to_string(),
    })
    .all_valid()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn app_creation_works() {
        let app = CrawlApp::new(r#"{"catalog_base_url":"https://swapi.dev/api/"}"#);
        assert!(app.is_ok());
    }

    #[test]
    fn app_creation_accepts_empty_config() {
        let app = CrawlApp::new("{}").unwrap();
        assert_eq!(app.catalog_base_url(), "https://swapi.dev/api/");
    }

    #[test]
    fn layout_crawl_serializes_paragraphs() {
        let json = layout_crawl("I", "T", "A\r\nB\r\n\r\nC").unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["heading"], "EPISODE I");
        assert_eq!(value["paragraphs"], serde_json::json!(["A\nB", "C"]));
    }

    #[test]
    fn validate_fields_checks_all_three() {
        assert!(validate_fields("IV", "A New Hope", "It is a period of civil war."));
        assert!(!validate_fields("X", "A New Hope", "It is a period of civil war."));
        assert!(!validate_fields("IV", " ", "It is a period of civil war."));
    }
}
