//! Request handlers for the content routes.

use crate::config::ApiConfig;
use crate::error::{ApiError, ApiResult};
use crate::request::Calculation;
use crate::validation;
use maltak_core::calculator;
use maltak_core::{
    Article, ArticleWithRelations, Category, Comment, ContentStore, EntityId, News, Page, Tool,
};
use serde::Serialize;
use serde_json::Value;
use std::sync::Arc;

/// Context for request handling.
pub struct HandlerContext {
    /// API configuration.
    pub config: ApiConfig,
    /// The content store (shared across all handlers).
    pub store: Arc<ContentStore>,
}

impl HandlerContext {
    /// Creates a new handler context.
    pub fn new(config: ApiConfig, store: Arc<ContentStore>) -> Self {
        Self { config, store }
    }
}

/// Acknowledgement body for newsletter requests.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Ack {
    /// Always true; failures are reported as errors.
    pub success: bool,
    /// Human-readable outcome.
    pub message: String,
}

impl Ack {
    fn new(message: &str) -> Self {
        Self {
            success: true,
            message: message.to_string(),
        }
    }
}

/// Handler for content requests.
pub struct RequestHandler {
    context: Arc<HandlerContext>,
}

impl RequestHandler {
    /// Creates a new request handler.
    pub fn new(context: Arc<HandlerContext>) -> Self {
        Self { context }
    }

    fn store(&self) -> &ContentStore {
        &self.context.store
    }

    fn limit(&self, limit: Option<usize>) -> Option<usize> {
        self.context.config.clamp_limit(limit)
    }

    fn page(&self, limit: Option<usize>, offset: Option<usize>) -> Page {
        Page {
            limit: self.limit(limit),
            offset,
        }
    }

    /// Handles `list_categories`.
    pub fn list_categories(&self) -> Vec<Category> {
        self.store().list_categories()
    }

    /// Handles `list_articles`.
    pub fn list_articles(
        &self,
        limit: Option<usize>,
        offset: Option<usize>,
    ) -> ApiResult<Vec<ArticleWithRelations>> {
        self.store()
            .list_articles_with_relations(self.page(limit, offset))
            .map_err(|e| ApiError::from_core(e, "Failed to fetch articles"))
    }

    /// Handles `get_article`: returns the joined article and records a read.
    pub fn get_article(&self, slug: &str) -> ApiResult<ArticleWithRelations> {
        self.store()
            .read_article(slug)
            .map_err(|e| ApiError::from_core(e, "Failed to fetch article"))?
            .ok_or_else(|| ApiError::not_found("Article not found"))
    }

    /// Handles `category_articles`.
    pub fn category_articles(
        &self,
        slug: &str,
        limit: Option<usize>,
        offset: Option<usize>,
    ) -> Vec<Article> {
        self.store()
            .list_articles_by_category_slug(slug, self.page(limit, offset))
    }

    /// Handles `featured_articles`.
    pub fn featured_articles(&self, limit: Option<usize>) -> Vec<Article> {
        self.store().featured_articles(self.limit(limit))
    }

    /// Handles `popular_articles`.
    pub fn popular_articles(&self, limit: Option<usize>) -> Vec<Article> {
        self.store().popular_articles(self.limit(limit))
    }

    /// Handles `related_articles`.
    pub fn related_articles(&self, id: EntityId, limit: Option<usize>) -> Vec<Article> {
        self.store().related_articles(id, self.limit(limit))
    }

    /// Handles `search`.
    pub fn search(&self, q: Option<String>, limit: Option<usize>) -> ApiResult<Vec<Article>> {
        let query = validation::search_query(q)?;
        Ok(self.store().search_articles(&query, self.limit(limit)))
    }

    /// Handles `list_comments`.
    pub fn list_comments(&self, article_id: EntityId) -> Vec<Comment> {
        self.store().comments_for_article(article_id)
    }

    /// Handles `create_comment`.
    pub fn create_comment(
        &self,
        article_id: EntityId,
        content: Option<String>,
        author_id: Option<EntityId>,
    ) -> ApiResult<Comment> {
        let new = validation::comment(&self.context.config, article_id, content, author_id)?;
        Ok(self.store().create_comment(new))
    }

    /// Handles `list_tools`.
    pub fn list_tools(&self) -> Vec<Tool> {
        self.store().list_tools()
    }

    /// Handles `get_tool`.
    pub fn get_tool(&self, slug: &str) -> ApiResult<Tool> {
        self.store()
            .get_tool_by_slug(slug)
            .ok_or_else(|| ApiError::not_found("Tool not found"))
    }

    /// Handles `subscribe`.
    pub fn subscribe(&self, email: Option<String>, name: Option<String>) -> ApiResult<Ack> {
        let new = validation::subscription(email, name)?;
        self.store().subscribe(new);
        Ok(Ack::new("Successfully subscribed to newsletter"))
    }

    /// Handles `unsubscribe`.
    ///
    /// An address that was never subscribed is not found; one that is
    /// already inactive unsubscribes again successfully.
    pub fn unsubscribe(&self, email: Option<String>) -> ApiResult<Ack> {
        let email = validation::unsubscribe_email(email)?;
        if self.store().unsubscribe(&email) {
            Ok(Ack::new("Successfully unsubscribed from newsletter"))
        } else {
            Err(ApiError::not_found("Email not found in newsletter list"))
        }
    }

    /// Handles `latest_news`.
    pub fn latest_news(&self, limit: Option<usize>) -> Vec<News> {
        self.store().latest_news(self.limit(limit))
    }

    /// Handles `calculate`, encoding whichever result the tool produces.
    pub fn calculate(&self, calculation: &Calculation) -> ApiResult<Value> {
        let failed = "Failed to calculate";
        let value = match calculation {
            Calculation::Loan(input) => serde_json::to_value(
                calculator::loan(*input).map_err(|e| ApiError::from_core(e, failed))?,
            )?,
            Calculation::Savings(input) => serde_json::to_value(
                calculator::savings(*input).map_err(|e| ApiError::from_core(e, failed))?,
            )?,
            Calculation::Budget(input) => serde_json::to_value(
                calculator::budget(input).map_err(|e| ApiError::from_core(e, failed))?,
            )?,
        };
        Ok(value)
    }
}
