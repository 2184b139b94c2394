//! End-to-end tests for the content API over JSON requests.

use maltak_api::{ApiConfig, ApiRequest, ApiServer};
use maltak_core::seed::FIRST_ARTICLE_SLUG;
use maltak_core::{ContentStore, EntityId};
use maltak_testkit::prelude::*;
use proptest::prelude::*;
use serde_json::json;
use std::sync::Arc;

fn server() -> ApiServer {
    ApiServer::seeded(ApiConfig::default())
}

#[test]
fn get_article_increments_views() {
    let server = server();
    let request = format!(r#"{{"op":"get_article","slug":"{FIRST_ARTICLE_SLUG}"}}"#);

    let first = server.handle_json(&request);
    assert_eq!(first.status, 200);
    assert_eq!(first.body["views"], json!(1500));
    assert_eq!(first.body["author"]["fullName"], json!("أحمد الشريف"));
    assert_eq!(first.body["category"]["name"], json!("الاستثمار"));

    let second = server.handle_json(&request);
    assert_eq!(second.body["views"], json!(1501));

    let stored = server.store().get_article_by_slug(FIRST_ARTICLE_SLUG).unwrap();
    assert_eq!(stored.views, 1502);
}

#[test]
fn article_body_never_exposes_password() {
    let server = server();
    let response = server.handle_json(r#"{"op":"list_articles","limit":1}"#);
    assert_eq!(response.status, 200);
    let author = &response.body[0]["author"];
    assert_eq!(author["username"], json!("admin"));
    assert!(author.get("password").is_none());
}

#[test]
fn missing_search_query_is_rejected() {
    let server = server();
    for request in [r#"{"op":"search"}"#, r#"{"op":"search","q":""}"#] {
        let response = server.handle_json(request);
        assert_eq!(response.status, 400);
        assert_eq!(response.message(), Some("Search query is required"));
    }
}

#[test]
fn search_returns_ranked_matches() {
    let server = server();
    let response = server.handle_json(r#"{"op":"search","q":"استثمار","limit":10}"#);
    assert_eq!(response.status, 200);
    let views: Vec<u64> = response
        .body
        .as_array()
        .unwrap()
        .iter()
        .map(|a| a["views"].as_u64().unwrap())
        .collect();
    assert!(!views.is_empty());
    assert!(views.windows(2).all(|w| w[0] >= w[1]));
}

#[test]
fn short_comment_is_rejected() {
    let server = server();
    let response = server.handle_json(
        r#"{"op":"create_comment","articleId":1,"content":"ok","authorId":1}"#,
    );
    assert_eq!(response.status, 400);
    assert!(response.message().unwrap().contains("content"));
    assert!(server.store().comments_for_article(EntityId::new(1)).is_empty());
}

#[test]
fn comment_is_created_and_listed() {
    let server = server();
    let created = server.handle_json(
        r#"{"op":"create_comment","articleId":1,"content":"مقال مفيد جدا","authorId":1}"#,
    );
    assert_eq!(created.status, 201);
    assert_eq!(created.body["articleId"], json!(1));

    let listed = server.handle(ApiRequest::ListComments {
        article_id: EntityId::new(1),
    });
    assert_eq!(listed.status, 200);
    assert_eq!(listed.body.as_array().map(Vec::len), Some(1));
    assert_eq!(listed.body[0]["content"], json!("مقال مفيد جدا"));
}

#[test]
fn unknown_tool_is_not_found() {
    let server = server();
    let response = server.handle_json(r#"{"op":"get_tool","slug":"crystal-ball"}"#);
    assert_eq!(response.status, 404);
    assert_eq!(response.message(), Some("Tool not found"));

    let found = server.handle_json(r#"{"op":"get_tool","slug":"loan-calculator"}"#);
    assert_eq!(found.status, 200);
    assert_eq!(found.body["type"], json!("calculator"));
}

#[test]
fn newsletter_round_trip() {
    let server = server();
    let subscribe = r#"{"op":"subscribe","email":"reader@example.com","name":"Sara"}"#;
    let unsubscribe = r#"{"op":"unsubscribe","email":"reader@example.com"}"#;

    let response = server.handle_json(subscribe);
    assert_eq!(response.status, 201);
    assert_eq!(
        response.body,
        json!({"success": true, "message": "Successfully subscribed to newsletter"})
    );
    let id = server
        .store()
        .get_subscription_by_email("reader@example.com")
        .unwrap()
        .id;

    assert_eq!(server.handle_json(unsubscribe).status, 200);
    assert_eq!(server.handle_json(unsubscribe).status, 200);
    assert_eq!(server.handle_json(subscribe).status, 201);

    let subscription = server
        .store()
        .get_subscription_by_email("reader@example.com")
        .unwrap();
    assert!(subscription.is_active);
    assert_eq!(subscription.id, id);
}

#[test]
fn unsubscribe_errors() {
    let server = server();
    let missing = server.handle_json(r#"{"op":"unsubscribe"}"#);
    assert_eq!(missing.status, 400);
    assert_eq!(missing.message(), Some("Email is required"));

    let unknown = server.handle_json(r#"{"op":"unsubscribe","email":"ghost@example.com"}"#);
    assert_eq!(unknown.status, 404);
    assert_eq!(unknown.message(), Some("Email not found in newsletter list"));
}

#[test]
fn dangling_reference_is_a_server_error() {
    let store = Arc::new(TestStore::empty().store);
    scenarios::orphan_article(&store);
    let server = ApiServer::new(ApiConfig::default(), Arc::clone(&store));

    let article = server.handle_json(r#"{"op":"get_article","slug":"orphan"}"#);
    assert_eq!(article.status, 500);
    assert_eq!(article.message(), Some("Failed to fetch article"));

    let list = server.handle_json(r#"{"op":"list_articles"}"#);
    assert_eq!(list.status, 500);
    assert_eq!(list.message(), Some("Failed to fetch articles"));

    assert_eq!(store.stats().integrity_failures(), 2);
}

#[test]
fn category_and_ranking_routes() {
    let server = server();

    let crypto = server.handle_json(r#"{"op":"category_articles","slug":"crypto"}"#);
    assert_eq!(crypto.body.as_array().map(Vec::len), Some(2));

    let unknown = server.handle_json(r#"{"op":"category_articles","slug":"nope"}"#);
    assert_eq!(unknown.status, 200);
    assert_eq!(unknown.body, json!([]));

    let popular = server.handle_json(r#"{"op":"popular_articles","limit":2}"#);
    assert_eq!(popular.body[0]["views"], json!(15200));
    assert_eq!(popular.body[1]["views"], json!(12750));

    let related = server.handle_json(r#"{"op":"related_articles","id":1}"#);
    assert_eq!(related.body[0]["slug"], json!("investment-funds-guide"));

    let news = server.handle_json(r#"{"op":"latest_news"}"#);
    assert_eq!(news.body.as_array().map(Vec::len), Some(3));
}

#[test]
fn calculators_over_json() {
    let server = server();

    let savings = server.handle_json(
        r#"{"op":"calculate","tool":"savings-calculator","initialAmount":1000,"monthlyContribution":100,"annualRatePercent":0,"years":2}"#,
    );
    assert_eq!(savings.status, 200);
    assert_eq!(savings.body["futureValue"], json!(3400.0));

    let budget = server.handle_json(
        r#"{"op":"calculate","tool":"budget-planner","income":5000,"expenses":[{"label":"rent","amount":2000}]}"#,
    );
    assert_eq!(budget.status, 200);
    assert_eq!(budget.body["balance"], json!(3000.0));
    assert_eq!(budget.body["shares"][0]["percentOfIncome"], json!(40.0));

    let invalid = server.handle_json(
        r#"{"op":"calculate","tool":"loan-calculator","principal":-1,"annualRatePercent":5,"years":1}"#,
    );
    assert_eq!(invalid.status, 400);
}

#[test]
fn server_shares_store_across_threads() {
    let store = Arc::new(ContentStore::seeded());
    let server = Arc::new(ApiServer::new(ApiConfig::default(), Arc::clone(&store)));
    let request = format!(r#"{{"op":"get_article","slug":"{FIRST_ARTICLE_SLUG}"}}"#);

    let handles: Vec<_> = (0..8)
        .map(|_| {
            let server = Arc::clone(&server);
            let request = request.clone();
            std::thread::spawn(move || {
                for _ in 0..25 {
                    assert_eq!(server.handle_json(&request).status, 200);
                }
            })
        })
        .collect();
    for handle in handles {
        handle.join().unwrap();
    }

    let article = store.get_article_by_slug(FIRST_ARTICLE_SLUG).unwrap();
    assert_eq!(article.views, 1500 + 200);
}

proptest! {
    #[test]
    fn valid_emails_subscribe(email in email_strategy()) {
        let server = server();
        let response = server.handle(ApiRequest::Subscribe { email: Some(email), name: None });
        prop_assert_eq!(response.status, 201);
    }

    #[test]
    fn invalid_emails_are_rejected(email in invalid_email_strategy()) {
        let server = server();
        let response = server.handle(ApiRequest::Subscribe { email: Some(email), name: None });
        prop_assert_eq!(response.status, 400);
        prop_assert_eq!(server.store().counts().subscriptions, 0);
    }

    #[test]
    fn short_comments_never_stored(content in short_comment_strategy()) {
        let server = server();
        let response = server.handle(ApiRequest::CreateComment {
            article_id: EntityId::new(1),
            content: Some(content),
            author_id: Some(EntityId::new(1)),
        });
        prop_assert_eq!(response.status, 400);
        prop_assert_eq!(server.store().counts().comments, 0);
    }

    #[test]
    fn long_comments_are_stored(content in comment_content_strategy()) {
        let server = server();
        let response = server.handle(ApiRequest::CreateComment {
            article_id: EntityId::new(2),
            content: Some(content),
            author_id: Some(EntityId::new(1)),
        });
        prop_assert_eq!(response.status, 201);
    }
}
