//! Ordering and shape checks for query results.

use maltak_core::{Article, Comment};

/// Asserts that articles are listed newest first.
///
/// # Panics
///
/// Panics on the first adjacent pair out of order.
pub fn assert_newest_first(articles: &[Article]) {
    for pair in articles.windows(2) {
        assert!(
            pair[0].published_at >= pair[1].published_at,
            "{} ({}) listed before newer {} ({})",
            pair[0].slug,
            pair[0].published_at,
            pair[1].slug,
            pair[1].published_at
        );
    }
}

/// Asserts that articles are listed by descending view count.
///
/// # Panics
///
/// Panics on the first adjacent pair out of order.
pub fn assert_most_viewed_first(articles: &[Article]) {
    for pair in articles.windows(2) {
        assert!(
            pair[0].views >= pair[1].views,
            "{} ({} views) listed before {} ({} views)",
            pair[0].slug,
            pair[0].views,
            pair[1].slug,
            pair[1].views
        );
    }
}

/// Asserts that comments are listed newest first.
///
/// # Panics
///
/// Panics on the first adjacent pair out of order.
pub fn assert_comments_newest_first(comments: &[Comment]) {
    for pair in comments.windows(2) {
        assert!(
            pair[0].created_at >= pair[1].created_at,
            "comment {} listed before newer comment {}",
            pair[0].id,
            pair[1].id
        );
    }
}

/// Returns the slugs of `articles`, in order.
pub fn slugs(articles: &[Article]) -> Vec<&str> {
    articles.iter().map(|a| a.slug.as_str()).collect()
}
