//! Main API server.

use crate::config::ApiConfig;
use crate::error::{ApiError, ApiResult};
use crate::handler::{HandlerContext, RequestHandler};
use crate::request::ApiRequest;
use maltak_core::ContentStore;
use serde::Serialize;
use serde_json::{json, Value};
use std::sync::Arc;
use tracing::{debug, warn};

/// A status-coded JSON response.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ApiResponse {
    /// HTTP-style status code.
    pub status: u16,
    /// Response body; `{"message": ...}` for errors.
    pub body: Value,
}

impl ApiResponse {
    /// Creates a response from a status and body.
    pub fn new(status: u16, body: Value) -> Self {
        Self { status, body }
    }

    /// Creates the response for a failed request.
    pub fn from_error(error: &ApiError) -> Self {
        Self::new(
            error.status_code(),
            json!({ "message": error.public_message() }),
        )
    }

    /// Returns true for 2xx statuses.
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Returns the error message, if the body carries one.
    pub fn message(&self) -> Option<&str> {
        self.body.get("message").and_then(Value::as_str)
    }
}

fn encode<T: Serialize>(status: u16, body: T) -> ApiResult<ApiResponse> {
    Ok(ApiResponse::new(status, serde_json::to_value(body)?))
}

/// The content API server.
///
/// Holds a shared [`ContentStore`] and answers [`ApiRequest`]s with
/// [`ApiResponse`]s. It performs no I/O; callers own the transport.
///
/// # Example
///
/// ```
/// use maltak_api::{ApiConfig, ApiRequest, ApiServer};
///
/// let server = ApiServer::seeded(ApiConfig::default());
/// let response = server.handle(ApiRequest::ListTools);
/// assert_eq!(response.status, 200);
/// ```
pub struct ApiServer {
    handler: RequestHandler,
    context: Arc<HandlerContext>,
}

impl ApiServer {
    /// Creates a server over an existing store.
    pub fn new(config: ApiConfig, store: Arc<ContentStore>) -> Self {
        let context = Arc::new(HandlerContext::new(config, store));
        let handler = RequestHandler::new(Arc::clone(&context));

        Self { handler, context }
    }

    /// Creates a server over a freshly seeded store.
    pub fn seeded(config: ApiConfig) -> Self {
        Self::new(config, Arc::new(ContentStore::seeded()))
    }

    /// Returns the store this server reads and writes.
    pub fn store(&self) -> &Arc<ContentStore> {
        &self.context.store
    }

    /// Returns the handler, for callers that want typed results.
    pub fn handler(&self) -> &RequestHandler {
        &self.handler
    }

    /// Handles a request (dispatches to the appropriate handler).
    pub fn handle(&self, request: ApiRequest) -> ApiResponse {
        let op = request.op_name();
        let mutation = request.is_mutation();
        debug!(op, mutation, "handling request");

        match self.dispatch(request) {
            Ok(response) => response,
            Err(error) => {
                if error.is_server_error() {
                    warn!(op, mutation, error = %error, "request failed");
                } else {
                    debug!(op, mutation, error = %error, "request rejected");
                }
                ApiResponse::from_error(&error)
            }
        }
    }

    /// Decodes a JSON request and handles it.
    ///
    /// Undecodable input is answered with a 400 response.
    pub fn handle_json(&self, input: &str) -> ApiResponse {
        match serde_json::from_str::<ApiRequest>(input) {
            Ok(request) => self.handle(request),
            Err(e) => {
                let error = ApiError::InvalidRequest(e.to_string());
                debug!(error = %error, "undecodable request");
                ApiResponse::from_error(&error)
            }
        }
    }

    fn dispatch(&self, request: ApiRequest) -> ApiResult<ApiResponse> {
        let h = &self.handler;
        match request {
            ApiRequest::ListCategories => encode(200, h.list_categories()),
            ApiRequest::ListArticles { limit, offset } => {
                encode(200, h.list_articles(limit, offset)?)
            }
            ApiRequest::GetArticle { slug } => encode(200, h.get_article(&slug)?),
            ApiRequest::CategoryArticles {
                slug,
                limit,
                offset,
            } => encode(200, h.category_articles(&slug, limit, offset)),
            ApiRequest::FeaturedArticles { limit } => encode(200, h.featured_articles(limit)),
            ApiRequest::PopularArticles { limit } => encode(200, h.popular_articles(limit)),
            ApiRequest::RelatedArticles { id, limit } => {
                encode(200, h.related_articles(id, limit))
            }
            ApiRequest::Search { q, limit } => encode(200, h.search(q, limit)?),
            ApiRequest::ListComments { article_id } => encode(200, h.list_comments(article_id)),
            ApiRequest::CreateComment {
                article_id,
                content,
                author_id,
            } => encode(201, h.create_comment(article_id, content, author_id)?),
            ApiRequest::ListTools => encode(200, h.list_tools()),
            ApiRequest::GetTool { slug } => encode(200, h.get_tool(&slug)?),
            ApiRequest::Subscribe { email, name } => encode(201, h.subscribe(email, name)?),
            ApiRequest::Unsubscribe { email } => encode(200, h.unsubscribe(email)?),
            ApiRequest::LatestNews { limit } => encode(200, h.latest_news(limit)),
            ApiRequest::Calculate(calculation) => {
                Ok(ApiResponse::new(200, h.calculate(&calculation)?))
            }
        }
    }
}
