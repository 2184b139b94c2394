//! # Maltak API
//!
//! Request handling for the Maltak content API.
//!
//! This crate provides:
//! - A typed request enum, one variant per public route
//! - Input validation for comments and newsletter signups
//! - Handlers that run requests against a shared [`ContentStore`]
//! - Status-coded JSON responses with the site's error messages
//!
//! # Transport
//!
//! The API is transport-agnostic. A caller decodes a request from
//! whatever it received (an HTTP route, a line of JSON, a CLI flag),
//! hands it to [`ApiServer::handle`] and writes the returned
//! [`ApiResponse`] back:
//!
//! ```rust,ignore
//! use maltak_api::{ApiServer, ApiConfig};
//!
//! let server = ApiServer::seeded(ApiConfig::default());
//! let response = server.handle_json(r#"{"op":"popular_articles","limit":2}"#);
//! assert_eq!(response.status, 200);
//! ```
//!
//! [`ContentStore`]: maltak_core::ContentStore

#![deny(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

mod config;
mod error;
mod handler;
mod request;
mod server;
mod validation;

pub use config::ApiConfig;
pub use error::{ApiError, ApiResult};
pub use handler::{Ack, HandlerContext, RequestHandler};
pub use request::{ApiRequest, Calculation};
pub use server::{ApiResponse, ApiServer};
pub use validation::is_valid_email;
