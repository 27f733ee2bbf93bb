// Field predicates for the crawl form. Validation marks fields, it never blocks rendering.

use crate::types::{EpisodeToken, Field, FormValues};

/// Episode field: one of the nine tokens, surrounding whitespace ignored.
pub fn is_episode_token(value: &str) -> bool {
    EpisodeToken::parse(value.trim()).is_some()
}

/// Title and body fields: anything but blank.
pub fn is_filled(value: &str) -> bool {
    !value.trim().is_empty()
}

/// Validity of each editable field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldReport {
    pub episode: bool,
    pub title: bool,
    pub body: bool,
}

impl FieldReport {
    pub fn of(values: &FormValues) -> Self {
        FieldReport {
            episode: is_episode_token(&values.episode),
            title: is_filled(&values.title),
            body: is_filled(&values.body),
        }
    }

    pub fn is_valid(&self, field: Field) -> bool {
        match field {
            Field::Episode => self.episode,
            Field::Title => self.title,
            Field::Body => self.body,
        }
    }

    pub fn all_valid(&self) -> bool {
        self.episode && self.title && self.body
    }

    pub fn invalid_fields(&self) -> impl Iterator<Item = Field> + '_ {
        Field::ALL.into_iter().filter(|f| !self.is_valid(*f))
    }
}
