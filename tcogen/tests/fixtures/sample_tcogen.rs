//! Code generated by tcogen; DO NOT EDIT.
//!
//! This file contains functions and methods for use with `Sample` in templ components.
#![allow(dead_code)]
use super::Sample;
/// Functional options for [`Sample`].
pub mod sample {
    use super::*;
    /// A deferred change to a single field.
    pub type Opt = Box<dyn FnOnce(&mut Sample)>;
    /// Returns a value with every tagged default applied.
    pub fn default_opts() -> Sample {
        Sample {
            name: Default::default(),
            age: Default::default(),
            happy: true,
            score: Default::default(),
        }
    }
    /// Builds a value from [`default_opts`] and applies `opts` in order.
    pub fn with(opts: impl IntoIterator<Item = Opt>) -> Sample {
        let mut out = default_opts();
        out.with(opts);
        out
    }
    impl Sample {
        /// Applies `opts` in order and returns `self` for chaining.
        pub fn with(&mut self, opts: impl IntoIterator<Item = Opt>) -> &mut Self {
            for opt in opts {
                opt(&mut *self);
            }
            self
        }
    }
    /// Sets [`Sample::name`].
    pub fn name(value: String) -> Opt {
        Box::new(move |opts: &mut Sample| opts.name = value)
    }
    /// Sets [`Sample::age`].
    pub fn age(value: i64) -> Opt {
        Box::new(move |opts: &mut Sample| opts.age = value)
    }
    impl Sample {
        /// Returns [`Sample::age`] as a string.
        pub fn age_str(&self) -> String {
            self.age.to_string()
        }
    }
    /// Sets [`Sample::happy`].
    pub fn happy(value: bool) -> Opt {
        Box::new(move |opts: &mut Sample| opts.happy = value)
    }
    impl Sample {
        /// Returns [`Sample::happy`] as a string.
        pub fn happy_str(&self) -> String {
            self.happy.to_string()
        }
    }
    /// Sets [`Sample::score`].
    pub fn score(value: f64) -> Opt {
        Box::new(move |opts: &mut Sample| opts.score = value)
    }
    impl Sample {
        /// Returns [`Sample::score`] as a string.
        pub fn score_str(&self) -> String {
            format!("{:.1}", self.score)
        }
    }
}
