//! Code generated by tcogen; DO NOT EDIT.
//!
//! This file contains functions and methods for use with `Book` in templ components.
#![allow(dead_code)]
use super::{Book, Theme};
/// Functional options for [`Book`].
pub mod book {
    use super::*;
    /// A deferred change to a single field.
    pub type Opt = Box<dyn FnOnce(&mut Book)>;
    /// Returns a value with every tagged default applied.
    pub fn default_opts() -> Book {
        Book {
            title: String::from("Untitled"),
            theme: Theme::Dark,
            rating: -3,
            ratio: 0.3,
            weight: 2.0,
            tags: Default::default(),
            r#type: Default::default(),
        }
    }
    /// Builds a value from [`default_opts`] and applies `opts` in order.
    pub fn with(opts: impl IntoIterator<Item = Opt>) -> Book {
        let mut out = default_opts();
        out.with(opts);
        out
    }
    impl Book {
        /// Applies `opts` in order and returns `self` for chaining.
        pub fn with(&mut self, opts: impl IntoIterator<Item = Opt>) -> &mut Self {
            for opt in opts {
                opt(&mut *self);
            }
            self
        }
    }
    /// Sets [`Book::title`].
    pub fn title(value: String) -> Opt {
        Box::new(move |opts: &mut Book| opts.title = value)
    }
    /// Sets [`Book::theme`].
    pub fn theme(value: Theme) -> Opt {
        Box::new(move |opts: &mut Book| opts.theme = value)
    }
    /// Sets [`Book::rating`].
    pub fn rating(value: i64) -> Opt {
        Box::new(move |opts: &mut Book| opts.rating = value)
    }
    impl Book {
        /// Returns [`Book::rating`] as a string.
        pub fn rating_str(&self) -> String {
            self.rating.to_string()
        }
    }
    /// Sets [`Book::ratio`].
    pub fn ratio(value: f64) -> Opt {
        Box::new(move |opts: &mut Book| opts.ratio = value)
    }
    impl Book {
        /// Returns [`Book::ratio`] as a string.
        pub fn ratio_str(&self) -> String {
            format!("{:.1}", self.ratio)
        }
    }
    /// Sets [`Book::weight`].
    pub fn weight(value: f64) -> Opt {
        Box::new(move |opts: &mut Book| opts.weight = value)
    }
    impl Book {
        /// Returns [`Book::weight`] as a string.
        pub fn weight_str(&self) -> String {
            format!("{:.1}", self.weight)
        }
    }
    /// Sets [`Book::tags`].
    pub fn tags(value: Vec<String>) -> Opt {
        Box::new(move |opts: &mut Book| opts.tags = value)
    }
    /// Sets [`Book::type`].
    pub fn r#type(value: String) -> Opt {
        Box::new(move |opts: &mut Book| opts.r#type = value)
    }
}
