//! Resource descriptors
//!
//! Each resource names its endpoints and the document type its records map
//! into. Paths are relative to the client's base URL.

use crate::document::{Document, Movie, Quote};

/// A remote collection the client can page through
pub trait Resource: Send + Sync {
    /// Document type produced for each record
    type Doc: Document;

    /// Short name used in log output
    fn name(&self) -> &'static str;

    /// Path of the collection endpoint
    fn collection_path(&self) -> String;

    /// Path of the single-document endpoint
    fn item_path(&self, id: &str) -> String;
}

/// All movies (`movie`)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Movies;

impl Resource for Movies {
    type Doc = Movie;

    fn name(&self) -> &'static str {
        "movies"
    }

    fn collection_path(&self) -> String {
        "movie".to_string()
    }

    fn item_path(&self, id: &str) -> String {
        format!("movie/{id}")
    }
}

/// All quotes (`quote`)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Quotes;

impl Resource for Quotes {
    type Doc = Quote;

    fn name(&self) -> &'static str {
        "quotes"
    }

    fn collection_path(&self) -> String {
        "quote".to_string()
    }

    fn item_path(&self, id: &str) -> String {
        format!("quote/{id}")
    }
}

/// Quotes of one movie (`movie/{id}/quote`)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MovieQuotes {
    movie_id: String,
}

impl MovieQuotes {
    /// Scope quotes to a movie
    pub fn new(movie_id: impl Into<String>) -> Self {
        Self {
            movie_id: movie_id.into(),
        }
    }

    /// The movie the quotes belong to
    pub fn movie_id(&self) -> &str {
        &self.movie_id
    }
}

impl Resource for MovieQuotes {
    type Doc = Quote;

    fn name(&self) -> &'static str {
        "movie quotes"
    }

    fn collection_path(&self) -> String {
        format!("movie/{}/quote", self.movie_id)
    }

    fn item_path(&self, id: &str) -> String {
        format!("quote/{id}")
    }
}
