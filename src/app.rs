//! Demo route catalog
//!
//! The routes the server answers: a greeting page and two read-only JSON
//! listings.

use hyper::{Method, StatusCode};
use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::error::AppResult;
use crate::routing::{pretty_json, RouteRule, RouteTable};

const GREETING: &str = "Hello, World!";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: u32,
    pub username: String,
    pub displayname: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: u32,
    pub name: String,
    pub price: f64,
}

pub fn users() -> Vec<User> {
    [(1, "anson", "Anson"), (2, "john", "John"), (3, "adam", "Adam")]
        .into_iter()
        .map(|(id, username, displayname)| User {
            id,
            username: username.to_string(),
            displayname: displayname.to_string(),
        })
        .collect()
}

pub fn products() -> Vec<Product> {
    [
        (1, "Laptop", 999.99),
        (2, "Smartphone", 499.99),
        (3, "Headphones", 199.99),
    ]
    .into_iter()
    .map(|(id, name, price)| Product {
        id,
        name: name.to_string(),
        price,
    })
    .collect()
}

/// Greeting text followed by the JSON message in a `<pre>` block
pub fn greeting_page() -> serde_json::Result<String> {
    let data = pretty_json(&json!({ "msg": GREETING }))?;
    Ok(format!(
        "\n        <div>{GREETING}</div>\n        <pre>{data}</pre>\n    "
    ))
}

/// Build the route table served by the binary
pub fn build_route_table() -> AppResult<RouteTable> {
    let mut table = RouteTable::new();

    table.register(
        Method::GET,
        "/",
        RouteRule::html(greeting_page()?).with_status(StatusCode::CREATED),
    )?;
    table.register(Method::GET, "/api/users", RouteRule::json(&users())?)?;
    table.register(Method::GET, "/api/products", RouteRule::json(&products())?)?;

    Ok(table)
}
