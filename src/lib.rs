//! A small HTTP server answering a fixed table of static routes.
//!
//! [`routing::RouteTable`] maps `(method, path)` to a fixed reply; everything
//! else gets 404. The remaining modules put that table on the network.

pub mod app;
pub mod config;
pub mod error;
pub mod handler;
pub mod http;
pub mod logger;
pub mod routing;
pub mod server;

pub use error::{AppError, AppResult, DuplicateRouteError};
