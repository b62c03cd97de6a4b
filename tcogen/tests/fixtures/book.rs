//! A record with tagged defaults on every kind of field.

use std::collections::BTreeMap;

use tcogen::ComponentOpts;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

/// A book card.
//templ:component-opts
#[derive(Debug, Clone, PartialEq, ComponentOpts)]
pub struct Book {
    #[opts(default = "Untitled")]
    pub title: String,
    #[opts(default = "Theme::Dark")]
    pub theme: Theme,
    #[opts(default = "-3")]
    pub rating: i64,
    #[opts(default = "0.3")]
    pub ratio: f64,
    #[opts(default = "2")]
    pub weight: f64,
    #[opts(default = "ignored")]
    pub tags: Vec<String>,
    pub r#type: String,
}

/// Not annotated, so nothing is generated for it.
pub struct Shelf {
    pub books: BTreeMap<String, Book>,
}

#[path = "book_tcogen.rs"]
mod book_tcogen;
pub use book_tcogen::book;
