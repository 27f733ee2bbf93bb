// View Renderer: lays a crawl out into heading, title, and paragraphs, then replays the animation.

use serde::Serialize;
use tracing::debug;

use crate::crawl::Crawl;
use crate::error::CrawlError;
use crate::view::CrawlView;

/// Text shown in place of an empty paragraph so the blank slot keeps its height.
const BLANK_PARAGRAPH: &str = " ";

/// Visible text of a rendered crawl.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CrawlLayout {
    pub heading: String,
    pub title: String,
    pub paragraphs: Vec<String>,
}

impl CrawlLayout {
    pub fn of(crawl: &Crawl) -> Self {
        let paragraphs = crawl
            .paragraphs()
            .into_iter()
            .map(|p| {
                if p.is_empty() {
                    BLANK_PARAGRAPH.to_string()
                } else {
                    p.to_string()
                }
            })
            .collect();

        CrawlLayout {
            heading: format!("EPISODE {}", crawl.episode),
            title: crawl.title.clone(),
            paragraphs,
        }
    }
}

/// Rewrite the crawl region and restart the animation.
pub fn render<V: CrawlView + ?Sized>(view: &mut V, crawl: &Crawl) -> Result<(), CrawlError> {
    let layout = CrawlLayout::of(crawl);
    debug!(
        heading = %layout.heading,
        paragraphs = layout.paragraphs.len(),
        "rendering crawl"
    );

    view.show_heading(&layout.heading)?;
    view.show_title(&layout.title)?;
    view.show_paragraphs(&layout.paragraphs)?;
    view.replay()
}
