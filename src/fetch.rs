// Catalog transport over the browser fetch API.

use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, RequestMode, Response};

use crate::catalog::CatalogSource;
use crate::error::CrawlError;

/// `CatalogSource` backed by `window.fetch`. One GET per call, no retry, no timeout.
#[derive(Debug, Clone)]
pub struct FetchSource {
    base_url: String,
}

impl FetchSource {
    pub fn new(base_url: &str) -> Self {
        let mut base_url = base_url.trim().to_string();
        if !base_url.ends_with('/') {
            base_url.push('/');
        }
        FetchSource { base_url }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path.trim_start_matches('/'))
    }
}

impl CatalogSource for FetchSource {
    async fn get(&self, path: &str) -> Result<String, CrawlError> {
        let url = self.url(path);

        let opts = RequestInit::new();
        opts.set_method("GET");
        opts.set_mode(RequestMode::Cors);
        let request = Request::new_with_str_and_init(&url, &opts).map_err(CrawlError::transport)?;

        let window = web_sys::window()
            .ok_or_else(|| CrawlError::Transport("no global `window`".to_string()))?;
        let value = JsFuture::from(window.fetch_with_request(&request))
            .await
            .map_err(CrawlError::transport)?;
        let response: Response = value.dyn_into().map_err(CrawlError::transport)?;

        if !response.ok() {
            return Err(CrawlError::Status {
                status: response.status(),
                url,
            });
        }

        let body = JsFuture::from(response.text().map_err(CrawlError::transport)?)
            .await
            .map_err(CrawlError::transport)?;
        body.as_string()
            .ok_or_else(|| CrawlError::Parse(format!("body of {url} is not text")))
    }
}
