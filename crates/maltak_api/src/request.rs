//! Request types.
//!
//! One variant per public route, tagged by `op`:
//!
//! ```json
//! {"op": "category_articles", "slug": "crypto", "limit": 5}
//! ```
//!
//! Field names are camelCase, like the response bodies.
//!
//! Fields a route reads from its query string or body are optional here
//! so that their absence reaches validation instead of failing decoding.

use maltak_core::calculator::{BudgetInput, LoanInput, SavingsInput};
use maltak_core::EntityId;
use serde::Deserialize;

/// A request to the content API.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case", rename_all_fields = "camelCase")]
pub enum ApiRequest {
    /// All categories.
    ListCategories,
    /// A page of articles joined with author and category.
    ListArticles {
        /// Page size.
        limit: Option<usize>,
        /// Records to skip.
        offset: Option<usize>,
    },
    /// One article by slug; counts as a read.
    GetArticle {
        /// Article slug.
        slug: String,
    },
    /// A page of one category's articles.
    CategoryArticles {
        /// Category slug.
        slug: String,
        /// Page size.
        limit: Option<usize>,
        /// Records to skip.
        offset: Option<usize>,
    },
    /// Featured articles.
    FeaturedArticles {
        /// Maximum results.
        limit: Option<usize>,
    },
    /// Most viewed articles.
    PopularArticles {
        /// Maximum results.
        limit: Option<usize>,
    },
    /// Articles in the same category as `id`.
    RelatedArticles {
        /// Source article.
        id: EntityId,
        /// Maximum results.
        limit: Option<usize>,
    },
    /// Full-text search.
    Search {
        /// Search term; required and non-empty.
        q: Option<String>,
        /// Maximum results.
        limit: Option<usize>,
    },
    /// Comments on an article.
    ListComments {
        /// Article identity.
        article_id: EntityId,
    },
    /// Posts a comment.
    CreateComment {
        /// Article identity.
        article_id: EntityId,
        /// Comment text.
        content: Option<String>,
        /// Author identity.
        author_id: Option<EntityId>,
    },
    /// All tools.
    ListTools,
    /// One tool by slug.
    GetTool {
        /// Tool slug.
        slug: String,
    },
    /// Newsletter signup.
    Subscribe {
        /// Subscriber address.
        email: Option<String>,
        /// Subscriber name.
        name: Option<String>,
    },
    /// Newsletter opt-out.
    Unsubscribe {
        /// Subscriber address.
        email: Option<String>,
    },
    /// Latest news items.
    LatestNews {
        /// Maximum results.
        limit: Option<usize>,
    },
    /// Runs one of the calculators.
    Calculate(Calculation),
}

impl ApiRequest {
    /// Returns the operation name, as it appears in the `op` tag.
    pub fn op_name(&self) -> &'static str {
        match self {
            ApiRequest::ListCategories => "list_categories",
            ApiRequest::ListArticles { .. } => "list_articles",
            ApiRequest::GetArticle { .. } => "get_article",
            ApiRequest::CategoryArticles { .. } => "category_articles",
            ApiRequest::FeaturedArticles { .. } => "featured_articles",
            ApiRequest::PopularArticles { .. } => "popular_articles",
            ApiRequest::RelatedArticles { .. } => "related_articles",
            ApiRequest::Search { .. } => "search",
            ApiRequest::ListComments { .. } => "list_comments",
            ApiRequest::CreateComment { .. } => "create_comment",
            ApiRequest::ListTools => "list_tools",
            ApiRequest::GetTool { .. } => "get_tool",
            ApiRequest::Subscribe { .. } => "subscribe",
            ApiRequest::Unsubscribe { .. } => "unsubscribe",
            ApiRequest::LatestNews { .. } => "latest_news",
            ApiRequest::Calculate(_) => "calculate",
        }
    }

    /// Returns true if handling this request may change the store.
    pub fn is_mutation(&self) -> bool {
        matches!(
            self,
            ApiRequest::GetArticle { .. }
                | ApiRequest::CreateComment { .. }
                | ApiRequest::Subscribe { .. }
                | ApiRequest::Unsubscribe { .. }
        )
    }
}

/// Calculator input, tagged by the slug of the tool it belongs to.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "tool")]
pub enum Calculation {
    /// Amortized loan installment.
    #[serde(rename = "loan-calculator")]
    Loan(LoanInput),
    /// Savings growth.
    #[serde(rename = "savings-calculator")]
    Savings(SavingsInput),
    /// Monthly budget breakdown.
    #[serde(rename = "budget-planner")]
    Budget(BudgetInput),
}

#[cfg(test)]
mod tests {
    use super::*;

    fn decode(json: &str) -> ApiRequest {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn unit_variant() {
        assert_eq!(decode(r#"{"op":"list_tools"}"#), ApiRequest::ListTools);
    }

    #[test]
    fn optional_fields_default_to_none() {
        assert_eq!(
            decode(r#"{"op":"list_articles"}"#),
            ApiRequest::ListArticles {
                limit: None,
                offset: None
            }
        );
        assert_eq!(
            decode(r#"{"op":"search","limit":3}"#),
            ApiRequest::Search {
                q: None,
                limit: Some(3)
            }
        );
    }

    #[test]
    fn comment_request() {
        let request = decode(r#"{"op":"create_comment","articleId":2,"content":"hi there","authorId":1}"#);
        assert_eq!(
            request,
            ApiRequest::CreateComment {
                article_id: EntityId::new(2),
                content: Some("hi there".into()),
                author_id: Some(EntityId::new(1)),
            }
        );
        assert!(request.is_mutation());
        assert_eq!(request.op_name(), "create_comment");
    }

    #[test]
    fn calculation_request() {
        let request = decode(
            r#"{"op":"calculate","tool":"loan-calculator","principal":1000,"annualRatePercent":5,"years":2}"#,
        );
        match request {
            ApiRequest::Calculate(Calculation::Loan(input)) => {
                assert_eq!(input.years, 2);
                assert_eq!(input.principal, 1000.0);
            }
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn snake_case_fields_are_not_accepted() {
        let request: ApiRequest = serde_json::from_str(
            r#"{"op":"create_comment","articleId":2,"content":"hi there","author_id":1}"#,
        )
        .unwrap();
        assert!(matches!(
            request,
            ApiRequest::CreateComment {
                author_id: None,
                ..
            }
        ));
        assert!(serde_json::from_str::<ApiRequest>(r#"{"op":"list_comments","article_id":2}"#).is_err());
    }

    #[test]
    fn reads_are_not_mutations() {
        assert!(!ApiRequest::ListTools.is_mutation());
        assert!(ApiRequest::GetArticle { slug: "x".into() }.is_mutation());
    }

    #[test]
    fn unknown_op_is_rejected() {
        assert!(serde_json::from_str::<ApiRequest>(r#"{"op":"drop_tables"}"#).is_err());
    }

    #[test]
    fn unknown_calculator_is_rejected() {
        assert!(serde_json::from_str::<ApiRequest>(r#"{"op":"calculate","tool":"horoscope"}"#).is_err());
    }
}
