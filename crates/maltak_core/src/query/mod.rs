//! Relational query engine.
//!
//! Every read shape the API needs is a method on
//! [`ContentStore`](crate::ContentStore): listing, filtering, ranking,
//! search and joins for articles, plus comments, newsletter and news.
//!
//! There is no query language. Each operation scans its table, filters
//! and sorts with iterator adapters, then paginates.
//!
//! Ordering ties are broken by identity, higher first, so that equal
//! timestamps or view counts still list the most recently created record
//! first.

mod articles;
mod engagement;
mod news;

use chrono::{DateTime, Utc};
use serde::Deserialize;
use std::cmp::Ordering;

/// Limit/offset window over a sorted result.
///
/// Absent values take the per-operation defaults from
/// [`QueryDefaults`](crate::QueryDefaults). There is no upper bound on
/// `limit`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
pub struct Page {
    /// Maximum number of records to return.
    #[serde(default)]
    pub limit: Option<usize>,
    /// Number of records to skip.
    #[serde(default)]
    pub offset: Option<usize>,
}

impl Page {
    /// A page with both bounds set.
    #[must_use]
    pub const fn new(limit: usize, offset: usize) -> Self {
        Self {
            limit: Some(limit),
            offset: Some(offset),
        }
    }

    /// A page with only a limit.
    #[must_use]
    pub const fn limit(limit: usize) -> Self {
        Self {
            limit: Some(limit),
            offset: None,
        }
    }

    /// The first `limit` records, for queries without an offset.
    pub(crate) const fn top(limit: Option<usize>) -> Self {
        Self {
            limit,
            offset: None,
        }
    }

    /// Applies the window to `items`, using `default_limit` if no limit is set.
    pub(crate) fn apply<T>(self, items: Vec<T>, default_limit: usize) -> Vec<T> {
        let limit = self.limit.unwrap_or(default_limit);
        let offset = self.offset.unwrap_or(0);
        items.into_iter().skip(offset).take(limit).collect()
    }
}

/// Newest first; ties go to the higher identity.
pub(crate) fn by_recency<I: Ord>(a: (DateTime<Utc>, I), b: (DateTime<Utc>, I)) -> Ordering {
    b.0.cmp(&a.0).then_with(|| b.1.cmp(&a.1))
}

/// Most viewed first; ties go to the higher identity.
pub(crate) fn by_views<I: Ord>(a: (u64, I), b: (u64, I)) -> Ordering {
    b.0.cmp(&a.0).then_with(|| b.1.cmp(&a.1))
}
