//! Property-based test generators using proptest.
//!
//! Provides strategies for generating request inputs, both ones the
//! API accepts and ones it must reject.

use maltak_core::Page;
use proptest::prelude::*;

/// Strategy for generating well-formed email addresses.
pub fn email_strategy() -> impl Strategy<Value = String> {
    (
        prop::string::string_regex("[a-z][a-z0-9._]{0,15}").expect("Invalid regex"),
        prop::string::string_regex("[a-z]{2,10}").expect("Invalid regex"),
        prop::sample::select(vec!["com", "org", "net", "sa", "ae"]),
    )
        .prop_map(|(local, domain, tld)| format!("{local}@{domain}.{tld}"))
}

/// Strategy for generating strings that are not email addresses.
pub fn invalid_email_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        prop::string::string_regex("[a-z0-9]{1,20}").expect("Invalid regex"),
        prop::string::string_regex("@[a-z]{1,10}\\.com").expect("Invalid regex"),
        prop::string::string_regex("[a-z]{1,10}@").expect("Invalid regex"),
        prop::string::string_regex("[a-z]{1,5} [a-z]{1,5}@[a-z]{1,5}\\.com")
            .expect("Invalid regex"),
    ]
}

/// Strategy for generating comment text long enough to be accepted.
pub fn comment_content_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-zA-Z\u{0621}-\u{064A} ]{3,200}")
        .expect("Invalid regex")
        .prop_filter("Comment must have three visible characters", |s| {
            s.trim().chars().count() >= 3
        })
}

/// Strategy for generating comment text that is too short.
pub fn short_comment_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex(" {0,3}[a-z\u{0621}-\u{064A}]{0,2} {0,3}").expect("Invalid regex")
}

/// Strategy for generating non-empty search terms.
pub fn search_query_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        prop::sample::select(vec![
            "استثمار".to_string(),
            "الادخار".to_string(),
            "ميزانية".to_string(),
            "investing".to_string(),
        ]),
        prop::string::string_regex("[a-z\u{0621}-\u{064A}]{1,8}").expect("Invalid regex"),
    ]
}

/// Strategy for generating pagination windows.
pub fn page_strategy() -> impl Strategy<Value = Page> {
    (prop::option::of(0usize..20), prop::option::of(0usize..20))
        .prop_map(|(limit, offset)| Page { limit, offset })
}

#[cfg(test)]
mod tests {
    use super::*;

    proptest! {
        #[test]
        fn test_email_strategy_has_one_at(email in email_strategy()) {
            prop_assert_eq!(email.matches('@').count(), 1);
            prop_assert!(!email.contains(' '));
        }

        #[test]
        fn test_comment_strategy_is_long_enough(content in comment_content_strategy()) {
            prop_assert!(content.trim().chars().count() >= 3);
        }

        #[test]
        fn test_short_comment_strategy_is_short(content in short_comment_strategy()) {
            prop_assert!(content.trim().chars().count() < 3);
        }
    }
}
