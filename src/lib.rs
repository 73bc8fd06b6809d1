//! In-memory item catalog served over a small REST API.
//!
//! Items carry a name, description, price, category and quantity. The
//! [`catalog::ItemStore`] owns them behind a lock and hands out clones;
//! the [`api`] module maps HTTP routes onto store operations.
//!
//! ```text
//! GET    /api/items                      list
//! GET    /api/items/{id}                 get      (404 when absent)
//! POST   /api/items                      create   (201, 400 when invalid)
//! PUT    /api/items/{id}                 update   (404 / 400)
//! DELETE /api/items/{id}                 delete   (204 / 404)
//! GET    /api/items/category/{category}  filter by category
//! GET    /api/items/search?name=         filter by name
//! ```
//!
//! # Modules
//!
//! - [`config`]: Configuration loading from environment
//! - [`error`]: Unified error types
//! - [`catalog`]: Item types and the in-memory store
//! - [`api`]: HTTP routes, handlers and OpenAPI document
//! - [`metrics`]: Prometheus counters and latency histograms
//! - [`utils`]: Utility functions

pub mod api;
pub mod catalog;
pub mod config;
pub mod error;
pub mod metrics;
pub mod utils;

pub use config::Config;
pub use error::{AppError, Result};
