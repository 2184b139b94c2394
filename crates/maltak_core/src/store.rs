//! Content store facade.

use crate::config::Config;
use crate::entity::{
    Article, ArticleWithRelations, Category, Comment, EntityId, NewArticle, NewCategory, NewNews,
    NewTool, NewUser, News, Record, Subscription, Table, Tool, User, DEFAULT_READING_TIME,
    DEFAULT_ROLE,
};
use crate::error::{CoreError, CoreResult};
use crate::stats::StoreStats;
use chrono::Utc;
use parking_lot::RwLock;
use serde::Serialize;
use tracing::{debug, info, warn};

/// The seven entity tables.
#[derive(Debug, Default)]
pub(crate) struct Tables {
    pub(crate) users: Table<User>,
    pub(crate) categories: Table<Category>,
    pub(crate) articles: Table<Article>,
    pub(crate) comments: Table<Comment>,
    pub(crate) tools: Table<Tool>,
    pub(crate) subscriptions: Table<Subscription>,
    pub(crate) news: Table<News>,
}

impl Tables {
    /// Attaches author and category to an article.
    pub(crate) fn join(&self, article: Article) -> CoreResult<ArticleWithRelations> {
        let author = self
            .users
            .get(article.author_id)
            .cloned()
            .ok_or_else(|| CoreError::missing_author(article.id, article.author_id))?;
        let category = self
            .categories
            .get(article.category_id)
            .cloned()
            .ok_or_else(|| CoreError::missing_category(article.id, article.category_id))?;

        Ok(ArticleWithRelations {
            article,
            author,
            category,
        })
    }
}

/// Number of records per entity kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct TableCounts {
    /// Users.
    pub users: usize,
    /// Categories.
    pub categories: usize,
    /// Articles.
    pub articles: usize,
    /// Comments.
    pub comments: usize,
    /// Tools.
    pub tools: usize,
    /// Newsletter subscriptions.
    pub subscriptions: usize,
    /// News items.
    pub news: usize,
}

/// The main store handle.
///
/// `ContentStore` holds every table of the site behind a single lock, so
/// each public operation observes and mutates the store atomically, even
/// when the store is shared across OS threads. It provides:
/// - Entity creation with identity assignment and defaults
/// - Point lookups by identity, slug, username and email
/// - The article, comment, newsletter and news queries (see the
///   `query` module)
///
/// The store is an explicit value with no global instance. Hosts create
/// one at startup and share it by `Arc`; tests create a fresh one each.
///
/// # Example
///
/// ```rust
/// use maltak_core::{Config, ContentStore};
///
/// let store = ContentStore::open(Config::default());
/// let popular = store.popular_articles(Some(2));
/// assert_eq!(popular[0].views, 15200);
/// ```
pub struct ContentStore {
    config: Config,
    pub(crate) tables: RwLock<Tables>,
    pub(crate) stats: StoreStats,
}

impl ContentStore {
    /// Creates an empty store. No seeding takes place.
    pub fn new(config: Config) -> Self {
        Self {
            config,
            tables: RwLock::new(Tables::default()),
            stats: StoreStats::new(),
        }
    }

    /// Creates a store and, if `config.seed_on_open` is set, loads the
    /// built-in dataset before returning.
    pub fn open(config: Config) -> Self {
        let seed = config.seed_on_open;
        let store = Self::new(config);
        if seed {
            crate::seed::seed(&store);
        }
        store
    }

    /// Creates a seeded store with default configuration.
    pub fn seeded() -> Self {
        Self::open(Config::default().seed_on_open(true))
    }

    /// Returns the configuration.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Returns usage statistics.
    pub fn stats(&self) -> &StoreStats {
        &self.stats
    }

    /// Returns the number of records per entity kind.
    pub fn counts(&self) -> TableCounts {
        let tables = self.tables.read();
        TableCounts {
            users: tables.users.len(),
            categories: tables.categories.len(),
            articles: tables.articles.len(),
            comments: tables.comments.len(),
            tools: tables.tools.len(),
            subscriptions: tables.subscriptions.len(),
            news: tables.news.len(),
        }
    }

    pub(crate) fn record_join_failure(&self, err: &CoreError) {
        self.stats.record_integrity_failure();
        warn!(error = %err, "join failed");
    }

    fn inserted<R: Record>(&self, record: &R) {
        self.stats.record_write();
        debug!(kind = R::KIND, id = %record.id(), "record created");
    }

    // === Users ===

    /// Creates a user. The role defaults to `"user"`.
    pub fn create_user(&self, new: NewUser) -> User {
        let mut tables = self.tables.write();
        let user = User {
            id: tables.users.next_id(),
            username: new.username,
            password: new.password,
            email: new.email,
            full_name: new.full_name,
            avatar: new.avatar,
            role: new.role.unwrap_or_else(|| DEFAULT_ROLE.to_string()),
        };
        tables.users.put(user.clone());
        self.inserted(&user);
        user
    }

    /// Gets a user by identity.
    pub fn get_user(&self, id: EntityId) -> Option<User> {
        self.stats.record_read();
        self.tables.read().users.get(id).cloned()
    }

    /// Gets a user by username.
    pub fn get_user_by_username(&self, username: &str) -> Option<User> {
        self.stats.record_read();
        self.tables
            .read()
            .users
            .find(|u| u.username == username)
            .cloned()
    }

    /// Gets a user by email.
    pub fn get_user_by_email(&self, email: &str) -> Option<User> {
        self.stats.record_read();
        self.tables.read().users.find(|u| u.email == email).cloned()
    }

    // === Categories ===

    /// Creates a category.
    pub fn create_category(&self, new: NewCategory) -> Category {
        let mut tables = self.tables.write();
        let category = Category {
            id: tables.categories.next_id(),
            name: new.name,
            slug: new.slug,
            description: new.description,
            icon: new.icon,
        };
        tables.categories.put(category.clone());
        self.inserted(&category);
        category
    }

    /// Returns every category in identity order.
    pub fn list_categories(&self) -> Vec<Category> {
        self.stats.record_scan();
        self.tables.read().categories.all()
    }

    /// Gets a category by identity.
    pub fn get_category(&self, id: EntityId) -> Option<Category> {
        self.stats.record_read();
        self.tables.read().categories.get(id).cloned()
    }

    /// Gets a category by slug.
    pub fn get_category_by_slug(&self, slug: &str) -> Option<Category> {
        self.stats.record_read();
        self.tables
            .read()
            .categories
            .find(|c| c.slug == slug)
            .cloned()
    }

    // === Articles ===

    /// Creates an article, filling absent optional fields with their
    /// defaults. Foreign keys are not checked here.
    pub fn create_article(&self, new: NewArticle) -> Article {
        let mut tables = self.tables.write();
        let article = Article {
            id: tables.articles.next_id(),
            title: new.title,
            slug: new.slug,
            excerpt: new.excerpt,
            content: new.content,
            featured_image: new.featured_image,
            author_id: new.author_id,
            category_id: new.category_id,
            reading_time: new.reading_time.unwrap_or(DEFAULT_READING_TIME),
            views: new.views.unwrap_or(0),
            is_featured: new.is_featured.unwrap_or(false),
            published_at: new.published_at.unwrap_or_else(Utc::now),
        };
        tables.articles.put(article.clone());
        self.inserted(&article);
        article
    }

    // === Tools ===

    /// Creates a tool.
    pub fn create_tool(&self, new: NewTool) -> Tool {
        let mut tables = self.tables.write();
        let tool = Tool {
            id: tables.tools.next_id(),
            name: new.name,
            slug: new.slug,
            description: new.description,
            icon: new.icon,
            kind: new.kind,
        };
        tables.tools.put(tool.clone());
        self.inserted(&tool);
        tool
    }

    /// Returns every tool in identity order.
    pub fn list_tools(&self) -> Vec<Tool> {
        self.stats.record_scan();
        self.tables.read().tools.all()
    }

    /// Gets a tool by slug.
    pub fn get_tool_by_slug(&self, slug: &str) -> Option<Tool> {
        self.stats.record_read();
        self.tables.read().tools.find(|t| t.slug == slug).cloned()
    }

    // === News ===

    /// Creates a news item stamped with the current time.
    pub fn create_news(&self, new: NewNews) -> News {
        let mut tables = self.tables.write();
        let item = News {
            id: tables.news.next_id(),
            title: new.title,
            source: new.source,
            content: new.content,
            published_at: Utc::now(),
        };
        tables.news.put(item.clone());
        self.inserted(&item);
        item
    }

    pub(crate) fn log_seeded(&self) {
        let counts = self.counts();
        info!(
            categories = counts.categories,
            users = counts.users,
            articles = counts.articles,
            tools = counts.tools,
            news = counts.news,
            "store seeded"
        );
    }
}

impl std::fmt::Debug for ContentStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ContentStore")
            .field("counts", &self.counts())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn empty() -> ContentStore {
        ContentStore::new(Config::default().seed_on_open(false))
    }

    fn new_user(username: &str) -> NewUser {
        NewUser {
            username: username.into(),
            password: "pw".into(),
            email: format!("{username}@example.com"),
            full_name: username.to_uppercase(),
            avatar: None,
            role: None,
        }
    }

    #[test]
    fn new_store_is_empty() {
        let store = empty();
        assert_eq!(store.counts(), TableCounts::default());
    }

    #[test]
    fn open_seeds_only_when_configured() {
        let store = ContentStore::open(Config::default().seed_on_open(false));
        assert_eq!(store.counts().articles, 0);

        let store = ContentStore::open(Config::default());
        assert_eq!(store.counts().articles, 6);
    }

    #[test]
    fn user_defaults_and_lookups() {
        let store = empty();
        let user = store.create_user(new_user("sara"));
        assert_eq!(user.id, EntityId::new(1));
        assert_eq!(user.role, DEFAULT_ROLE);

        assert_eq!(store.get_user(user.id), Some(user.clone()));
        assert_eq!(store.get_user_by_username("sara"), Some(user.clone()));
        assert_eq!(store.get_user_by_email("sara@example.com"), Some(user));
        assert!(store.get_user_by_username("nobody").is_none());
    }

    #[test]
    fn article_defaults() {
        let store = empty();
        let before = Utc::now();
        let article = store.create_article(NewArticle::new(
            "t",
            "s",
            "e",
            "c",
            EntityId::new(1),
            EntityId::new(1),
        ));
        assert_eq!(article.reading_time, DEFAULT_READING_TIME);
        assert_eq!(article.views, 0);
        assert!(!article.is_featured);
        assert!(article.published_at >= before);
    }

    #[test]
    fn identities_are_per_kind() {
        let store = empty();
        let user = store.create_user(new_user("a"));
        let category = store.create_category(NewCategory {
            name: "c".into(),
            slug: "c".into(),
            description: None,
            icon: None,
        });
        let second = store.create_user(new_user("b"));
        assert_eq!(user.id, EntityId::new(1));
        assert_eq!(category.id, EntityId::new(1));
        assert_eq!(second.id, EntityId::new(2));
    }

    #[test]
    fn writes_are_counted() {
        let store = empty();
        store.create_user(new_user("a"));
        store.create_news(NewNews {
            title: "t".into(),
            source: "s".into(),
            content: "c".into(),
        });
        assert_eq!(store.stats().writes(), 2);
    }
}
