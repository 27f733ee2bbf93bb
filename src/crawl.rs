// Crawl text: line-ending normalization, paragraph splitting, and the built-in crawls.

use crate::types::{episode_label, FilmRecord, FormValues};

/// Paragraph separator inside a normalized crawl body.
pub const PARAGRAPH_SEPARATOR: &str = "\n\n";

const PLACEHOLDER_EPISODE: &str = "0";
const PLACEHOLDER_TITLE: &str = "Your Title Here";
const PLACEHOLDER_BODY: &str = "Couldn't get any words, so write\nyour own here!";

const OPENING_EPISODE: &str = "I";
const OPENING_TITLE: &str = "A Star Wars Story";
const OPENING_BODY: &str = "Lorem ipsum dolor sit amet,
consectetur adipiscing elit.
Phasellus vestibulum arcu eu
euismod condimentum. Duis
dignissim elementum leo quis
vulputate.

Cras id magna nulla. Fusce
libero tortor, eleifend vel
turpis sed, pellentesque
ultrices eros. Curabitur viverra
semper risus, at porta ipsum.

Aenean sit amet eros sit amet
tortor semper mattis. Maecenas
accumsan leo vel neque auctor,
non ultricies mi bibendum.";

/// Rewrite `\r\n` and stray `\r` to `\n`.
pub fn normalize_line_endings(text: &str) -> String {
    text.replace("\r\n", "\n").replace('\r', "\n")
}

/// Structured crawl handed to the renderer. `body` only contains `\n` line endings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Crawl {
    pub episode: String,
    pub title: String,
    pub body: String,
}

impl Crawl {
    pub fn new(episode: impl Into<String>, title: impl Into<String>, body: &str) -> Self {
        Crawl {
            episode: episode.into(),
            title: title.into(),
            body: normalize_line_endings(body),
        }
    }

    /// Crawl for a catalog record, `None` when the record has no crawl text.
    pub fn from_record(record: &FilmRecord) -> Option<Self> {
        if !record.has_crawl() {
            return None;
        }
        Some(Crawl::new(
            episode_label(record.episode_id),
            record.title.as_str(),
            &record.opening_crawl,
        ))
    }

    /// Crawl shown when a film could not be loaded.
    pub fn placeholder() -> Self {
        Crawl::new(PLACEHOLDER_EPISODE, PLACEHOLDER_TITLE, PLACEHOLDER_BODY)
    }

    /// Crawl shown before any film is picked.
    pub fn opening() -> Self {
        Crawl::new(OPENING_EPISODE, OPENING_TITLE, OPENING_BODY)
    }

    /// Crawl typed by the user. Values are taken as-is apart from line endings.
    pub fn from_form(values: &FormValues) -> Self {
        Crawl::new(values.episode.as_str(), values.title.as_str(), &values.body)
    }

    pub fn form_values(&self) -> FormValues {
        FormValues {
            episode: self.episode.clone(),
            title: self.title.clone(),
            body: self.body.clone(),
        }
    }

    /// Body paragraphs, empty ones included.
    pub fn paragraphs(&self) -> Vec<&str> {
        self.body.split(PARAGRAPH_SEPARATOR).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn crlf_record_splits_into_paragraphs() {
        let record = FilmRecord {
            episode_id: 1,
            title: "T".to_string(),
            opening_crawl: "A\r\nB\r\n\r\nC".to_string(),
        };
        let crawl = Crawl::from_record(&record).expect("record has crawl text");
        assert_eq!(crawl.episode, "I");
        assert_eq!(crawl.title, "T");
        assert_eq!(crawl.paragraphs(), vec!["A\nB", "C"]);
    }

    #[test]
    fn record_without_crawl_has_no_crawl() {
        assert!(Crawl::from_record(&FilmRecord::default()).is_none());
    }

    #[test]
    fn record_outside_token_table_keeps_number() {
        let record = FilmRecord {
            episode_id: 10,
            title: "T".to_string(),
            opening_crawl: "x".to_string(),
        };
        assert_eq!(Crawl::from_record(&record).unwrap().episode, "10");
    }

    #[test]
    fn placeholder_matches_fallback_text() {
        let crawl = Crawl::placeholder();
        assert_eq!(crawl.episode, "0");
        assert_eq!(crawl.title, "Your Title Here");
        assert_eq!(
            crawl.paragraphs(),
            vec!["Couldn't get any words, so write\nyour own here!"]
        );
    }

    #[test]
    fn opening_crawl_has_three_paragraphs() {
        assert_eq!(Crawl::opening().paragraphs().len(), 3);
    }

    #[test]
    fn trailing_separator_leaves_empty_paragraph() {
        let crawl = Crawl::new("I", "T", "A\n\n");
        assert_eq!(crawl.paragraphs(), vec!["A", ""]);
    }

    #[test]
    fn form_values_round_trip() {
        let crawl = Crawl::new("IV", "A New Hope", "It is a period\r\nof civil war.");
        assert_eq!(Crawl::from_form(&crawl.form_values()), crawl);
    }

    proptest! {
        #[test]
        fn normalized_text_has_no_carriage_returns(text in ".*") {
            prop_assert!(!normalize_line_endings(&text).contains('\r'));
        }

        #[test]
        fn normalization_is_idempotent(text in "[a-z\r\n]{0,40}") {
            let once = normalize_line_endings(&text);
            prop_assert_eq!(normalize_line_endings(&once), once.clone());
        }

        #[test]
        fn crlf_and_lf_bodies_split_alike(lines in prop::collection::vec("[a-z ]{0,8}", 0..8)) {
            let lf = Crawl::new("I", "T", &lines.join("\n"));
            let crlf = Crawl::new("I", "T", &lines.join("\r\n"));
            prop_assert_eq!(lf.paragraphs(), crlf.paragraphs());
        }
    }
}
