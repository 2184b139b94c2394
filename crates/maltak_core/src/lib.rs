//! # Maltak Core
//!
//! In-memory content store for the Maltak personal-finance site.
//!
//! This crate provides:
//! - Typed tables with per-kind identity sequences
//! - A store facade holding all tables behind one lock
//! - The query engine: pagination, category filters, popularity ranking,
//!   related articles, search and author/category joins
//! - Comments and newsletter subscriptions
//! - The built-in seed dataset
//! - Loan, savings and budget calculators

#![deny(unsafe_code)]
#![warn(missing_docs)]

pub mod calculator;
mod config;
pub mod entity;
mod error;
mod query;
pub mod seed;
mod stats;
mod store;

pub use config::{Config, QueryDefaults};
pub use entity::{
    Article, ArticleWithRelations, Category, Comment, EntityId, NewArticle, NewCategory,
    NewComment, NewNews, NewSubscription, NewTool, NewUser, News, Subscription, Tool, User,
};
pub use error::{CoreError, CoreResult, MissingRelation};
pub use query::Page;
pub use stats::{StatsSnapshot, StoreStats};
pub use store::{ContentStore, TableCounts};

/// Crate version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
