//! Derived-view query entry points.
//!
//! # Responsibility
//! - Expose the search/filter/sort pipeline over a roster snapshot.
//! - Keep result shaping pure; the pipeline never mutates the roster.

pub mod pipeline;
