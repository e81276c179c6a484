//! HTTP protocol layer module
//!
//! Response building and cache validation, decoupled from the route table.

pub mod cache;
pub mod response;

pub use response::{build_304_response, build_413_response, build_reply_response, ResponseOptions};
