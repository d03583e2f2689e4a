//! Movie and quote documents

use super::types::{Document, DocumentFields};
use crate::types::JsonValue;

/// A movie from the `/movie` endpoints
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Movie {
    fields: DocumentFields,
}

impl Movie {
    /// Movie title
    pub fn name(&self) -> Option<&str> {
        self.fields.raw("name").and_then(JsonValue::as_str)
    }

    /// Runtime in minutes
    pub fn runtime_in_minutes(&self) -> Option<f64> {
        self.number("runtimeInMinutes")
    }

    /// Budget in millions of dollars
    pub fn budget_in_millions(&self) -> Option<f64> {
        self.number("budgetInMillions")
    }

    /// Box office revenue in millions of dollars
    pub fn box_office_revenue_in_millions(&self) -> Option<f64> {
        self.number("boxOfficeRevenueInMillions")
    }

    /// Number of academy award nominations
    pub fn academy_award_nominations(&self) -> Option<u64> {
        self.fields
            .raw("academyAwardNominations")
            .and_then(JsonValue::as_u64)
    }

    /// Number of academy award wins
    pub fn academy_award_wins(&self) -> Option<u64> {
        self.fields.raw("academyAwardWins").and_then(JsonValue::as_u64)
    }

    /// Rotten Tomatoes score
    ///
    /// The API spells this attribute `rottenTomatesScore`.
    pub fn rotten_tomatoes_score(&self) -> Option<f64> {
        self.number("rottenTomatesScore")
    }

    fn number(&self, key: &str) -> Option<f64> {
        self.fields.raw(key).and_then(JsonValue::as_f64)
    }
}

impl Document for Movie {
    const ATTRIBUTES: &'static [&'static str] = &[
        "id",
        "name",
        "runtimeInMinutes",
        "budgetInMillions",
        "boxOfficeRevenueInMillions",
        "academyAwardNominations",
        "academyAwardWins",
        "rottenTomatesScore",
    ];

    fn from_fields(fields: DocumentFields) -> Self {
        Self { fields }
    }

    fn fields(&self) -> &DocumentFields {
        &self.fields
    }
}

/// A quote from the `/quote` endpoints
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Quote {
    fields: DocumentFields,
}

impl Quote {
    /// The quoted line
    pub fn dialog(&self) -> Option<&str> {
        self.text("dialog")
    }

    /// Identifier of the movie the quote is from
    pub fn movie(&self) -> Option<&str> {
        self.text("movie")
    }

    /// Identifier of the speaking character
    pub fn character(&self) -> Option<&str> {
        self.text("character")
    }

    fn text(&self, key: &str) -> Option<&str> {
        self.fields.raw(key).and_then(JsonValue::as_str)
    }
}

impl Document for Quote {
    const ATTRIBUTES: &'static [&'static str] = &["id", "dialog", "movie", "character"];

    fn from_fields(fields: DocumentFields) -> Self {
        Self { fields }
    }

    fn fields(&self) -> &DocumentFields {
        &self.fields
    }
}
