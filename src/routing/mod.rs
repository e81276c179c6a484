//! Static routing module
//!
//! Exact `(method, path)` lookup of fixed responses.

pub mod rule;
pub mod table;

pub use rule::{pretty_json, Body, ContentKind, Reply, RouteRule};
pub use table::{RouteKey, RouteTable};
