//! Store fixtures.
//!
//! Provides convenience functions for setting up test stores
//! and common test scenarios.

use maltak_core::{Config, ContentStore};

/// A store prepared for a test.
pub struct TestStore {
    /// The store instance.
    pub store: ContentStore,
}

impl TestStore {
    /// Creates a store holding the built-in dataset.
    pub fn seeded() -> Self {
        Self {
            store: ContentStore::seeded(),
        }
    }

    /// Creates a store with no records.
    pub fn empty() -> Self {
        Self::with_config(Config::default().seed_on_open(false))
    }

    /// Creates a store with a custom configuration, seeding it if the
    /// configuration asks for it.
    pub fn with_config(config: Config) -> Self {
        Self {
            store: ContentStore::open(config),
        }
    }
}

impl std::ops::Deref for TestStore {
    type Target = ContentStore;

    fn deref(&self) -> &Self::Target {
        &self.store
    }
}

/// Runs a test against a freshly seeded store.
///
/// # Example
///
/// ```rust,ignore
/// use maltak_testkit::with_seeded_store;
///
/// #[test]
/// fn my_test() {
///     with_seeded_store(|store| {
///         assert_eq!(store.list_tools().len(), 3);
///     });
/// }
/// ```
pub fn with_seeded_store<F, R>(f: F) -> R
where
    F: FnOnce(&ContentStore) -> R,
{
    let test_store = TestStore::seeded();
    f(&test_store.store)
}

/// Runs a test against an empty store.
pub fn with_empty_store<F, R>(f: F) -> R
where
    F: FnOnce(&ContentStore) -> R,
{
    let test_store = TestStore::empty();
    f(&test_store.store)
}

/// Test scenario helpers.
pub mod scenarios {
    use super::*;
    use chrono::{Duration, TimeZone, Utc};
    use maltak_core::{Article, EntityId, NewArticle, NewCategory, NewUser};

    /// Adds one author and one category, returning their identities.
    pub fn author_and_category(store: &ContentStore) -> (EntityId, EntityId) {
        let author = store.create_user(NewUser {
            username: "writer".into(),
            password: "secret".into(),
            email: "writer@example.com".into(),
            full_name: "Test Writer".into(),
            avatar: None,
            role: None,
        });
        let category = store.create_category(NewCategory {
            name: "Budgeting".into(),
            slug: "budgeting".into(),
            description: None,
            icon: None,
        });
        (author.id, category.id)
    }

    /// Adds an article whose author does not exist.
    ///
    /// References are only checked when an article is joined, so the
    /// insert succeeds and the later join fails.
    pub fn orphan_article(store: &ContentStore) -> Article {
        let category = store.create_category(NewCategory {
            name: "Orphans".into(),
            slug: "orphans".into(),
            description: None,
            icon: None,
        });
        store.create_article(NewArticle::new(
            "Orphan",
            "orphan",
            "no author",
            "body",
            EntityId::new(u64::MAX),
            category.id,
        ))
    }

    /// Creates a store with `article_count` generated articles spread over
    /// `category_count` categories.
    ///
    /// Publication dates step back one hour per article and view counts
    /// cycle, so both orderings see ties and distinct values.
    pub fn populated_store(article_count: usize, category_count: usize) -> TestStore {
        let test_store = TestStore::empty();
        let author = test_store.create_user(NewUser {
            username: "bulk".into(),
            password: "secret".into(),
            email: "bulk@example.com".into(),
            full_name: "Bulk Author".into(),
            avatar: None,
            role: Some("editor".into()),
        });

        let categories: Vec<EntityId> = (0..category_count.max(1))
            .map(|i| {
                test_store
                    .create_category(NewCategory {
                        name: format!("Category {i}"),
                        slug: format!("category-{i}"),
                        description: None,
                        icon: None,
                    })
                    .id
            })
            .collect();

        let base = Utc
            .with_ymd_and_hms(2024, 1, 1, 0, 0, 0)
            .single()
            .expect("valid base timestamp");
        for i in 0..article_count {
            let keyword = if i % 7 == 0 { "investing" } else { "saving" };
            test_store.create_article(
                NewArticle::new(
                    format!("Article {i} on {keyword}"),
                    format!("article-{i}"),
                    format!("Excerpt {i}"),
                    format!("Body of article {i} about {keyword}."),
                    author.id,
                    categories[i % categories.len()],
                )
                .views((i as u64 * 37) % 1000)
                .featured(i % 10 == 0)
                .published_at(base - Duration::hours(i as i64)),
            );
        }

        test_store
    }
}
