//! Route table
//!
//! Maps `(method, path)` to a [`RouteRule`] by exact string equality. The
//! table is filled once during setup and only read afterwards, so `handle`
//! takes `&self` and can be shared across connections without locking.

use std::collections::HashMap;

use hyper::Method;

use super::rule::{Reply, RouteRule};
use crate::error::DuplicateRouteError;

/// Lookup key of a route
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RouteKey {
    pub method: Method,
    pub path: String,
}

/// Fixed table of static routes
#[derive(Debug, Default, Clone)]
pub struct RouteTable {
    rules: HashMap<RouteKey, RouteRule>,
    // registration order, for listing
    order: Vec<RouteKey>,
}

impl RouteTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a rule. An existing rule for the same method and path is kept and
    /// the new one is rejected.
    pub fn register(
        &mut self,
        method: Method,
        path: impl Into<String>,
        rule: RouteRule,
    ) -> Result<(), DuplicateRouteError> {
        let key = RouteKey {
            method,
            path: path.into(),
        };
        if self.rules.contains_key(&key) {
            return Err(DuplicateRouteError {
                method: key.method,
                path: key.path,
            });
        }
        self.order.push(key.clone());
        self.rules.insert(key, rule);
        Ok(())
    }

    /// Answer a request. Unknown routes get the 404 fallback.
    pub fn handle(&self, method: &Method, path: &str) -> Reply {
        self.lookup(method, path)
            .map_or_else(Reply::not_found, RouteRule::reply)
    }

    pub fn lookup(&self, method: &Method, path: &str) -> Option<&RouteRule> {
        // HashMap needs an owned key; paths are short so the copy is fine
        self.rules.get(&RouteKey {
            method: method.clone(),
            path: path.to_string(),
        })
    }

    pub fn contains(&self, method: &Method, path: &str) -> bool {
        self.lookup(method, path).is_some()
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Routes in registration order
    pub fn routes(&self) -> impl Iterator<Item = (&RouteKey, &RouteRule)> {
        self.order
            .iter()
            .filter_map(|key| self.rules.get(key).map(|rule| (key, rule)))
    }
}
