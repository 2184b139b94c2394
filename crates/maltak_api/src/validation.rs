//! Input validation for user-submitted records.
//!
//! Messages follow the `Validation error: <issue> at "<field>"` shape the
//! site's client already displays.

use crate::config::ApiConfig;
use crate::error::{ApiError, ApiResult};
use maltak_core::{EntityId, NewComment, NewSubscription};
use regex::Regex;
use std::sync::LazyLock;

#[allow(clippy::expect_used)]
static EMAIL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern compiles")
});

fn issue(problem: &str, field: &str) -> ApiError {
    ApiError::validation(format!("Validation error: {problem} at \"{field}\""))
}

/// Returns true if `email` looks like `local@domain.tld`.
///
/// Exactly one `@`, no whitespace, and a dot after the `@` with
/// characters on both sides.
pub fn is_valid_email(email: &str) -> bool {
    EMAIL.is_match(email)
}

/// Checks a comment submission and builds the record input.
///
/// Length is counted in characters after trimming, so a comment of only
/// whitespace is rejected however long it is. This is stricter than the
/// site's client form, which counts the raw string.
pub(crate) fn comment(
    config: &ApiConfig,
    article_id: EntityId,
    content: Option<String>,
    author_id: Option<EntityId>,
) -> ApiResult<NewComment> {
    let content = content.ok_or_else(|| issue("Required", "content"))?;
    if content.trim().chars().count() < config.min_comment_length {
        return Err(issue(
            &format!(
                "String must contain at least {} character(s)",
                config.min_comment_length
            ),
            "content",
        ));
    }
    let author_id = author_id.ok_or_else(|| issue("Required", "authorId"))?;

    Ok(NewComment {
        content,
        author_id,
        article_id,
    })
}

/// Checks a newsletter signup and builds the record input.
pub(crate) fn subscription(
    email: Option<String>,
    name: Option<String>,
) -> ApiResult<NewSubscription> {
    let email = email.ok_or_else(|| issue("Required", "email"))?;
    if !is_valid_email(&email) {
        return Err(issue("Invalid email", "email"));
    }
    Ok(NewSubscription { email, name })
}

/// Extracts a required, non-empty search term.
pub(crate) fn search_query(q: Option<String>) -> ApiResult<String> {
    match q {
        Some(q) if !q.is_empty() => Ok(q),
        _ => Err(ApiError::validation("Search query is required")),
    }
}

/// Extracts the address from an unsubscribe request.
pub(crate) fn unsubscribe_email(email: Option<String>) -> ApiResult<String> {
    match email {
        Some(email) if !email.is_empty() => Ok(email),
        _ => Err(ApiError::validation("Email is required")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn email_shapes() {
        assert!(is_valid_email("reader@example.com"));
        assert!(is_valid_email("first.last@mail.example.sa"));
        assert!(!is_valid_email("reader"));
        assert!(!is_valid_email("reader@example"));
        assert!(!is_valid_email("@example.com"));
        assert!(!is_valid_email("reader@.com"));
        assert!(!is_valid_email("a b@example.com"));
        assert!(!is_valid_email("a@b@example.com"));
        assert!(!is_valid_email("reader@example.com\n"));
    }

    #[test]
    fn email_trailing_dots_match_address_shape() {
        assert!(is_valid_email("a@b.c."));
        assert!(is_valid_email("a@b.."));
        assert!(!is_valid_email("a@b."));
    }

    #[test]
    fn comment_rules() {
        let config = ApiConfig::default();
        let id = EntityId::new(1);

        let ok = comment(&config, id, Some("مقال رائع".into()), Some(id)).unwrap();
        assert_eq!(ok.article_id, id);

        let short = comment(&config, id, Some(" a ".into()), Some(id)).unwrap_err();
        assert!(short.to_string().contains("at least 3"));

        let anonymous = comment(&config, id, Some("long enough".into()), None).unwrap_err();
        assert!(anonymous.to_string().contains("authorId"));

        assert!(comment(&config, id, None, Some(id)).is_err());
    }

    #[test]
    fn comment_length_counts_characters() {
        let config = ApiConfig::default();
        let id = EntityId::new(1);
        assert!(comment(&config, id, Some("شكر".into()), Some(id)).is_ok());
    }

    #[test]
    fn whitespace_only_comment_is_rejected() {
        let config = ApiConfig::default();
        let id = EntityId::new(1);
        assert!(comment(&config, id, Some("   ".into()), Some(id)).is_err());
        assert!(comment(&config, id, Some("\t\n    \n".into()), Some(id)).is_err());
    }

    #[test]
    fn subscription_rules() {
        assert!(subscription(Some("a@b.co".into()), None).is_ok());
        let missing = subscription(None, None).unwrap_err();
        assert!(missing.to_string().contains("Required"));
        let invalid = subscription(Some("nope".into()), None).unwrap_err();
        assert!(invalid.to_string().contains("Invalid email"));
    }

    #[test]
    fn required_strings() {
        assert!(search_query(Some(String::new())).is_err());
        assert!(search_query(None).is_err());
        assert_eq!(search_query(Some("x".into())).unwrap(), "x");
        assert!(unsubscribe_email(None).is_err());
    }
}
