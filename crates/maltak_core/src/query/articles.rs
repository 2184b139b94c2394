//! Article queries: listing, category filter, ranking, search and joins.

use crate::entity::{Article, ArticleWithRelations, EntityId};
use crate::error::CoreResult;
use crate::query::{by_recency, by_views, Page};
use crate::store::ContentStore;
use tracing::debug;

fn newest_first(articles: &mut [Article]) {
    articles.sort_by(|a, b| by_recency((a.published_at, a.id), (b.published_at, b.id)));
}

fn most_viewed_first(articles: &mut [Article]) {
    articles.sort_by(|a, b| by_views((a.views, a.id), (b.views, b.id)));
}

impl ContentStore {
    /// Scans the article table, keeping the articles that match `filter`.
    fn scan_articles<F>(&self, filter: F) -> Vec<Article>
    where
        F: Fn(&Article) -> bool,
    {
        self.stats.record_scan();
        self.tables
            .read()
            .articles
            .iter()
            .filter(|a| filter(a))
            .cloned()
            .collect()
    }

    /// Lists articles, newest first, within `page`.
    ///
    /// Defaults to the configured page size and offset 0.
    pub fn list_articles(&self, page: Page) -> Vec<Article> {
        let mut articles = self.scan_articles(|_| true);
        newest_first(&mut articles);
        page.apply(articles, self.config().defaults.page_size)
    }

    /// Lists articles like [`list_articles`](Self::list_articles), each
    /// joined with its author and category.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::Integrity` if any article on the page has a
    /// dangling author or category reference.
    pub fn list_articles_with_relations(&self, page: Page) -> CoreResult<Vec<ArticleWithRelations>> {
        let articles = self.list_articles(page);
        articles
            .into_iter()
            .map(|article| self.article_with_relations(article))
            .collect()
    }

    /// Gets an article by identity.
    pub fn get_article(&self, id: EntityId) -> Option<Article> {
        self.stats.record_read();
        self.tables.read().articles.get(id).cloned()
    }

    /// Gets an article by exact slug.
    pub fn get_article_by_slug(&self, slug: &str) -> Option<Article> {
        self.stats.record_read();
        self.tables
            .read()
            .articles
            .find(|a| a.slug == slug)
            .cloned()
    }

    /// Lists the articles of one category, newest first, within `page`.
    pub fn list_articles_by_category(&self, category_id: EntityId, page: Page) -> Vec<Article> {
        let mut articles = self.scan_articles(|a| a.category_id == category_id);
        newest_first(&mut articles);
        page.apply(articles, self.config().defaults.page_size)
    }

    /// Lists the articles of the category with `slug`.
    ///
    /// An unknown slug yields an empty list, not an error.
    pub fn list_articles_by_category_slug(&self, slug: &str, page: Page) -> Vec<Article> {
        match self.get_category_by_slug(slug) {
            Some(category) => self.list_articles_by_category(category.id, page),
            None => {
                debug!(slug, "unknown category slug");
                Vec::new()
            }
        }
    }

    /// Returns featured articles, newest first. Defaults to 5.
    pub fn featured_articles(&self, limit: Option<usize>) -> Vec<Article> {
        let mut articles = self.scan_articles(|a| a.is_featured);
        newest_first(&mut articles);
        Page::top(limit).apply(articles, self.config().defaults.featured)
    }

    /// Returns the most viewed articles. Defaults to 5.
    pub fn popular_articles(&self, limit: Option<usize>) -> Vec<Article> {
        let mut articles = self.scan_articles(|_| true);
        most_viewed_first(&mut articles);
        Page::top(limit).apply(articles, self.config().defaults.popular)
    }

    /// Returns the most viewed articles sharing a category with
    /// `article_id`, excluding that article. Defaults to 3.
    ///
    /// An unknown source article yields an empty list.
    pub fn related_articles(&self, article_id: EntityId, limit: Option<usize>) -> Vec<Article> {
        let Some(source) = self.get_article(article_id) else {
            return Vec::new();
        };

        let mut articles =
            self.scan_articles(|a| a.id != source.id && a.category_id == source.category_id);
        most_viewed_first(&mut articles);
        Page::top(limit).apply(articles, self.config().defaults.related)
    }

    /// Case-insensitive substring search over title, excerpt and content,
    /// most viewed first. Defaults to 10.
    ///
    /// An empty query matches every article; callers reject it beforehand
    /// if that is not wanted.
    pub fn search_articles(&self, query: &str, limit: Option<usize>) -> Vec<Article> {
        let needle = query.to_lowercase();
        let mut articles = self.scan_articles(|a| {
            a.title.to_lowercase().contains(&needle)
                || a.excerpt.to_lowercase().contains(&needle)
                || a.content.to_lowercase().contains(&needle)
        });
        most_viewed_first(&mut articles);
        debug!(query, hits = articles.len(), "article search");
        Page::top(limit).apply(articles, self.config().defaults.search)
    }

    /// Joins an article with its author and category.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::Integrity` if the author or category does not
    /// exist.
    pub fn article_with_relations(&self, article: Article) -> CoreResult<ArticleWithRelations> {
        self.tables.read().join(article).inspect_err(|err| {
            self.record_join_failure(err);
        })
    }

    /// Gets the article with `slug`, joined with its relations.
    ///
    /// Returns `Ok(None)` for an unknown slug.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::Integrity` on a dangling reference.
    pub fn get_article_with_relations(&self, slug: &str) -> CoreResult<Option<ArticleWithRelations>> {
        match self.get_article_by_slug(slug) {
            Some(article) => self.article_with_relations(article).map(Some),
            None => Ok(None),
        }
    }

    /// Adds one view to the article with `id`.
    ///
    /// An unknown identity is silently ignored.
    pub fn increment_views(&self, id: EntityId) {
        let mut tables = self.tables.write();
        if let Some(article) = tables.articles.get_mut(id) {
            article.views += 1;
            self.stats.record_view();
            self.stats.record_write();
        }
    }

    /// Reads an article page: looks up `slug`, joins its relations and
    /// records one view, all under one lock.
    ///
    /// The returned article shows the view count from before this read.
    /// Nothing is recorded when the slug is unknown or the join fails.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::Integrity` on a dangling reference.
    pub fn read_article(&self, slug: &str) -> CoreResult<Option<ArticleWithRelations>> {
        self.stats.record_read();
        let mut tables = self.tables.write();
        let Some(article) = tables.articles.find(|a| a.slug == slug).cloned() else {
            return Ok(None);
        };

        let joined = tables.join(article).inspect_err(|err| {
            self.record_join_failure(err);
        })?;

        if let Some(stored) = tables.articles.get_mut(joined.article.id) {
            stored.views += 1;
            self.stats.record_view();
            self.stats.record_write();
        }
        Ok(Some(joined))
    }
}
