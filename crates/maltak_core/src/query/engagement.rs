//! Reader engagement: comments and newsletter subscriptions.
//!
//! These are the only records end users create. Neither is ever deleted;
//! unsubscribing clears a flag.
//!
//! A subscription moves between three states keyed by email:
//!
//! ```text
//! nonexistent --subscribe--> active
//! active      --unsubscribe--> inactive
//! inactive    --subscribe--> active      (same identity)
//! active      --subscribe--> active      (unchanged)
//! inactive    --unsubscribe--> inactive  (still reported as success)
//! ```

use crate::entity::{Comment, EntityId, NewComment, NewSubscription, Subscription};
use crate::query::by_recency;
use crate::store::ContentStore;
use chrono::Utc;
use tracing::info;

impl ContentStore {
    /// Returns the comments on `article_id`, newest first.
    pub fn comments_for_article(&self, article_id: EntityId) -> Vec<Comment> {
        self.stats.record_scan();
        let mut comments: Vec<Comment> = self
            .tables
            .read()
            .comments
            .iter()
            .filter(|c| c.article_id == article_id)
            .cloned()
            .collect();
        comments.sort_by(|a, b| by_recency((a.created_at, a.id), (b.created_at, b.id)));
        comments
    }

    /// Stores a new comment stamped with the current time.
    ///
    /// The article and author references are not checked; a dangling one
    /// only surfaces if something later joins on it.
    pub fn create_comment(&self, new: NewComment) -> Comment {
        let mut tables = self.tables.write();
        let comment = Comment {
            id: tables.comments.next_id(),
            content: new.content,
            author_id: new.author_id,
            article_id: new.article_id,
            created_at: Utc::now(),
        };
        tables.comments.put(comment.clone());
        self.stats.record_write();
        info!(id = %comment.id, article_id = %comment.article_id, "comment created");
        comment
    }

    /// Gets the subscription for `email`, active or not.
    pub fn get_subscription_by_email(&self, email: &str) -> Option<Subscription> {
        self.stats.record_read();
        self.tables
            .read()
            .subscriptions
            .find(|s| s.email == email)
            .cloned()
    }

    /// Subscribes an email to the newsletter.
    ///
    /// - Unknown email: a new active subscription is created.
    /// - Inactive subscription: reactivated in place, same identity.
    /// - Active subscription: returned unchanged.
    pub fn subscribe(&self, new: NewSubscription) -> Subscription {
        let mut tables = self.tables.write();

        let existing = tables
            .subscriptions
            .find(|s| s.email == new.email)
            .map(|s| s.id);
        if let Some(id) = existing {
            if let Some(subscription) = tables.subscriptions.get_mut(id) {
                if !subscription.is_active {
                    subscription.is_active = true;
                    self.stats.record_write();
                    info!(id = %id, "subscription reactivated");
                }
                return subscription.clone();
            }
        }

        let subscription = Subscription {
            id: tables.subscriptions.next_id(),
            email: new.email,
            name: new.name,
            is_active: true,
            created_at: Utc::now(),
        };
        tables.subscriptions.put(subscription.clone());
        self.stats.record_write();
        info!(id = %subscription.id, "subscription created");
        subscription
    }

    /// Deactivates the subscription for `email`.
    ///
    /// Returns `false` only if the email was never subscribed. An already
    /// inactive subscription is found and reported as `true`.
    pub fn unsubscribe(&self, email: &str) -> bool {
        let mut tables = self.tables.write();
        let Some(id) = tables.subscriptions.find(|s| s.email == email).map(|s| s.id) else {
            return false;
        };
        if let Some(subscription) = tables.subscriptions.get_mut(id) {
            subscription.is_active = false;
            self.stats.record_write();
            info!(id = %id, "subscription deactivated");
        }
        true
    }
}
