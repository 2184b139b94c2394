//! # Maltak Testkit
//!
//! Test utilities for Maltak.
//!
//! This crate provides:
//! - Store fixtures, seeded or empty, and common scenarios
//! - Property-based test generators using proptest
//! - Ordering checks for query results
//!
//! ## Usage
//!
//! ```rust,ignore
//! use maltak_testkit::prelude::*;
//!
//! #[test]
//! fn popular_is_ranked() {
//!     with_seeded_store(|store| {
//!         assert_most_viewed_first(&store.popular_articles(None));
//!     });
//! }
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]

pub mod checks;
pub mod fixtures;
pub mod generators;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::checks::*;
    pub use crate::fixtures::*;
    pub use crate::generators::*;
}

pub use checks::*;
pub use fixtures::*;
pub use generators::*;
