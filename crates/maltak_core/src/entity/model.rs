//! Record types for the seven entity kinds.
//!
//! Each kind has a stored record (`Article`, `User`, ...) and an input
//! shape (`NewArticle`, `NewUser`, ...) without the fields the store
//! assigns itself: identity, and for comments, news and subscriptions the
//! timestamps and the active flag.

use crate::entity::{EntityId, Record};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Reading time given to articles created without one, in minutes.
pub const DEFAULT_READING_TIME: u32 = 5;

/// Role given to users created without one.
pub const DEFAULT_ROLE: &str = "user";

/// A registered user. Only the seeded admin exists in practice.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Identity.
    pub id: EntityId,
    /// Unique login name.
    pub username: String,
    /// Opaque credential; never serialized.
    #[serde(skip_serializing)]
    pub password: String,
    /// Unique contact address.
    pub email: String,
    /// Display name.
    pub full_name: String,
    /// Avatar URL.
    pub avatar: Option<String>,
    /// Role tag, `"user"` unless stated otherwise.
    pub role: String,
}

/// Input for creating a [`User`].
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewUser {
    /// Unique login name.
    pub username: String,
    /// Opaque credential.
    pub password: String,
    /// Unique contact address.
    pub email: String,
    /// Display name.
    pub full_name: String,
    /// Avatar URL.
    #[serde(default)]
    pub avatar: Option<String>,
    /// Role tag; [`DEFAULT_ROLE`] when absent.
    #[serde(default)]
    pub role: Option<String>,
}

/// An article category such as investing or savings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    /// Identity.
    pub id: EntityId,
    /// Display name.
    pub name: String,
    /// Unique URL-safe key.
    pub slug: String,
    /// Short description.
    pub description: Option<String>,
    /// Icon name.
    pub icon: Option<String>,
}

/// Input for creating a [`Category`].
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewCategory {
    /// Display name.
    pub name: String,
    /// Unique URL-safe key.
    pub slug: String,
    /// Short description.
    #[serde(default)]
    pub description: Option<String>,
    /// Icon name.
    #[serde(default)]
    pub icon: Option<String>,
}

/// A published article.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Article {
    /// Identity.
    pub id: EntityId,
    /// Headline.
    pub title: String,
    /// Unique URL-safe key.
    pub slug: String,
    /// Teaser shown in listings.
    pub excerpt: String,
    /// Markdown-like body.
    pub content: String,
    /// Header image URL.
    pub featured_image: Option<String>,
    /// Author, references [`User`].
    pub author_id: EntityId,
    /// Category, references [`Category`].
    pub category_id: EntityId,
    /// Estimated reading time in minutes.
    pub reading_time: u32,
    /// Number of individual reads. Only ever incremented.
    pub views: u64,
    /// Whether the article is shown in the hero section.
    pub is_featured: bool,
    /// Publication instant.
    pub published_at: DateTime<Utc>,
}

/// Input for creating an [`Article`].
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewArticle {
    /// Headline.
    pub title: String,
    /// Unique URL-safe key.
    pub slug: String,
    /// Teaser shown in listings.
    pub excerpt: String,
    /// Markdown-like body.
    pub content: String,
    /// Header image URL.
    #[serde(default)]
    pub featured_image: Option<String>,
    /// Author identity.
    pub author_id: EntityId,
    /// Category identity.
    pub category_id: EntityId,
    /// Reading time; [`DEFAULT_READING_TIME`] when absent.
    #[serde(default)]
    pub reading_time: Option<u32>,
    /// Starting view count; 0 when absent.
    #[serde(default)]
    pub views: Option<u64>,
    /// Featured flag; false when absent.
    #[serde(default)]
    pub is_featured: Option<bool>,
    /// Publication instant; creation time when absent.
    #[serde(default)]
    pub published_at: Option<DateTime<Utc>>,
}

impl NewArticle {
    /// Creates an article input with every optional field absent.
    pub fn new(
        title: impl Into<String>,
        slug: impl Into<String>,
        excerpt: impl Into<String>,
        content: impl Into<String>,
        author_id: EntityId,
        category_id: EntityId,
    ) -> Self {
        Self {
            title: title.into(),
            slug: slug.into(),
            excerpt: excerpt.into(),
            content: content.into(),
            featured_image: None,
            author_id,
            category_id,
            reading_time: None,
            views: None,
            is_featured: None,
            published_at: None,
        }
    }

    /// Sets the header image URL.
    #[must_use]
    pub fn featured_image(mut self, url: impl Into<String>) -> Self {
        self.featured_image = Some(url.into());
        self
    }

    /// Sets the reading time in minutes.
    #[must_use]
    pub const fn reading_time(mut self, minutes: u32) -> Self {
        self.reading_time = Some(minutes);
        self
    }

    /// Sets the starting view count.
    #[must_use]
    pub const fn views(mut self, views: u64) -> Self {
        self.views = Some(views);
        self
    }

    /// Marks the article as featured.
    #[must_use]
    pub const fn featured(mut self, value: bool) -> Self {
        self.is_featured = Some(value);
        self
    }

    /// Sets the publication instant.
    #[must_use]
    pub const fn published_at(mut self, at: DateTime<Utc>) -> Self {
        self.published_at = Some(at);
        self
    }
}

/// An article joined with its author and category.
///
/// Serializes as the article's own fields plus nested `author` and
/// `category` objects. `Article` has no field named `author` or
/// `category`, so the flattened form cannot collide.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ArticleWithRelations {
    /// The base article.
    #[serde(flatten)]
    pub article: Article,
    /// The user behind `article.author_id`.
    pub author: User,
    /// The category behind `article.category_id`.
    pub category: Category,
}

/// A reader comment on an article.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    /// Identity.
    pub id: EntityId,
    /// Comment text.
    pub content: String,
    /// Author, references [`User`]. Not checked on write.
    pub author_id: EntityId,
    /// Article, references [`Article`]. Not checked on write.
    pub article_id: EntityId,
    /// Creation instant.
    pub created_at: DateTime<Utc>,
}

/// Input for creating a [`Comment`].
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewComment {
    /// Comment text.
    pub content: String,
    /// Author identity.
    pub author_id: EntityId,
    /// Article identity.
    pub article_id: EntityId,
}

/// A financial tool (calculator or planner) listed on the tools page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Tool {
    /// Identity.
    pub id: EntityId,
    /// Display name.
    pub name: String,
    /// Unique URL-safe key.
    pub slug: String,
    /// Short description.
    pub description: String,
    /// Icon name.
    pub icon: String,
    /// Free-form tag, e.g. `"calculator"` or `"planner"`.
    #[serde(rename = "type")]
    pub kind: String,
}

/// Input for creating a [`Tool`].
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewTool {
    /// Display name.
    pub name: String,
    /// Unique URL-safe key.
    pub slug: String,
    /// Short description.
    pub description: String,
    /// Icon name.
    pub icon: String,
    /// Free-form tag.
    #[serde(rename = "type")]
    pub kind: String,
}

/// A newsletter subscription. Unsubscribing only clears `is_active`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Subscription {
    /// Identity.
    pub id: EntityId,
    /// Unique subscriber address.
    pub email: String,
    /// Subscriber name.
    pub name: Option<String>,
    /// Whether mail should be sent.
    pub is_active: bool,
    /// Instant of the first subscription.
    pub created_at: DateTime<Utc>,
}

/// Input for subscribing to the newsletter.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewSubscription {
    /// Subscriber address.
    pub email: String,
    /// Subscriber name.
    #[serde(default)]
    pub name: Option<String>,
}

/// A short market news item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct News {
    /// Identity.
    pub id: EntityId,
    /// Headline.
    pub title: String,
    /// Reporting outlet.
    pub source: String,
    /// Body text.
    pub content: String,
    /// Publication instant, set at creation.
    pub published_at: DateTime<Utc>,
}

/// Input for creating a [`News`] item.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewNews {
    /// Headline.
    pub title: String,
    /// Reporting outlet.
    pub source: String,
    /// Body text.
    pub content: String,
}

macro_rules! impl_record {
    ($($ty:ty => $kind:literal),* $(,)?) => {
        $(
            impl Record for $ty {
                const KIND: &'static str = $kind;

                fn id(&self) -> EntityId {
                    self.id
                }
            }
        )*
    };
}

impl_record! {
    User => "user",
    Category => "category",
    Article => "article",
    Comment => "comment",
    Tool => "tool",
    Subscription => "subscription",
    News => "news",
}
