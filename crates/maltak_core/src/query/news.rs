//! News feed.

use crate::entity::News;
use crate::query::{by_recency, Page};
use crate::store::ContentStore;

impl ContentStore {
    /// Returns the latest news items, newest first. Defaults to 3.
    pub fn latest_news(&self, limit: Option<usize>) -> Vec<News> {
        self.stats.record_scan();
        let mut items = self.tables.read().news.all();
        items.sort_by(|a, b| by_recency((a.published_at, a.id), (b.published_at, b.id)));
        Page::top(limit).apply(items, self.config().defaults.news)
    }
}
