//! Error types for Maltak core.

use crate::entity::EntityId;
use thiserror::Error;

/// Result type for core operations.
pub type CoreResult<T> = Result<T, CoreError>;

/// The relation a join step failed to resolve.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MissingRelation {
    /// The article's `authorId` has no matching user.
    Author(EntityId),
    /// The article's `categoryId` has no matching category.
    Category(EntityId),
}

impl std::fmt::Display for MissingRelation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Author(id) => write!(f, "author {id}"),
            Self::Category(id) => write!(f, "category {id}"),
        }
    }
}

/// Errors that can occur in Maltak core operations.
///
/// Absence of a record is never an error here: lookups return `Option`
/// and the caller decides what a missing record means.
#[derive(Debug, Error)]
pub enum CoreError {
    /// An article references a user or category that does not exist.
    ///
    /// Seed data never produces this; an externally created article with a
    /// dangling foreign key does.
    #[error("data integrity error: could not find {missing} for article {article_id}")]
    Integrity {
        /// The article being joined.
        article_id: EntityId,
        /// The relation that could not be resolved.
        missing: MissingRelation,
    },

    /// Calculator input outside its domain.
    #[error("invalid input: {message}")]
    InvalidInput {
        /// Description of the problem.
        message: String,
    },
}

impl CoreError {
    /// Creates an integrity error for a missing author.
    pub fn missing_author(article_id: EntityId, author_id: EntityId) -> Self {
        Self::Integrity {
            article_id,
            missing: MissingRelation::Author(author_id),
        }
    }

    /// Creates an integrity error for a missing category.
    pub fn missing_category(article_id: EntityId, category_id: EntityId) -> Self {
        Self::Integrity {
            article_id,
            missing: MissingRelation::Category(category_id),
        }
    }

    /// Creates an invalid input error.
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput {
            message: message.into(),
        }
    }

    /// Returns true for errors that indicate corrupted store contents.
    pub fn is_integrity(&self) -> bool {
        matches!(self, Self::Integrity { .. })
    }
}
