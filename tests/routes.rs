use hello_routes::app::{build_route_table, Product, User};
use hello_routes::routing::{Body, ContentKind, RouteRule, RouteTable};
use hello_routes::DuplicateRouteError;
use hyper::{Method, StatusCode};
use serde_json::{json, Value};

fn body_json(body: &[u8]) -> Value {
    serde_json::from_slice(body).unwrap()
}

// --- demo catalog ---

#[test]
fn root_returns_201_greeting_page() {
    let reply = build_route_table().unwrap().handle(&Method::GET, "/");

    assert_eq!(reply.status, StatusCode::CREATED);
    assert_eq!(reply.content_kind, ContentKind::Html);
    let page = std::str::from_utf8(&reply.body).unwrap();
    assert!(page.contains("Hello, World!"));
    assert!(page.contains("{\n  \"msg\": \"Hello, World!\"\n}"));
    assert_eq!(
        page,
        "\n        <div>Hello, World!</div>\n        <pre>{\n  \"msg\": \"Hello, World!\"\n}</pre>\n    "
    );
}

#[test]
fn users_listing() {
    let reply = build_route_table().unwrap().handle(&Method::GET, "/api/users");

    assert_eq!(reply.status, StatusCode::OK);
    assert_eq!(reply.content_kind, ContentKind::Json);
    assert_eq!(
        body_json(&reply.body),
        json!([
            {"id": 1, "username": "anson", "displayname": "Anson"},
            {"id": 2, "username": "john", "displayname": "John"},
            {"id": 3, "username": "adam", "displayname": "Adam"}
        ])
    );
    let users: Vec<User> = serde_json::from_slice(&reply.body).unwrap();
    assert_eq!(users, hello_routes::app::users());
}

#[test]
fn products_listing() {
    let reply = build_route_table()
        .unwrap()
        .handle(&Method::GET, "/api/products");

    assert_eq!(reply.status, StatusCode::OK);
    assert_eq!(reply.content_kind, ContentKind::Json);
    assert_eq!(
        body_json(&reply.body),
        json!([
            {"id": 1, "name": "Laptop", "price": 999.99},
            {"id": 2, "name": "Smartphone", "price": 499.99},
            {"id": 3, "name": "Headphones", "price": 199.99}
        ])
    );
    let products: Vec<Product> = serde_json::from_slice(&reply.body).unwrap();
    assert_eq!(products, hello_routes::app::products());
}

#[test]
fn unknown_path_is_404() {
    let table = build_route_table().unwrap();

    for path in ["/does-not-exist", "/api", "/api/users/", "/API/USERS"] {
        assert_eq!(table.handle(&Method::GET, path).status, StatusCode::NOT_FOUND);
    }
    assert_eq!(
        table.handle(&Method::DELETE, "/api/users").status,
        StatusCode::NOT_FOUND
    );
}

// --- table properties ---

#[test]
fn every_registered_route_returns_its_rule() {
    let table = build_route_table().unwrap();

    for (key, rule) in table.routes() {
        let reply = table.handle(&key.method, &key.path);
        assert_eq!(reply, rule.reply(), "{} {}", key.method, key.path);
        assert_eq!(reply.content_kind, rule.body.kind());
    }
}

#[test]
fn duplicate_registration_is_rejected() {
    let mut table = build_route_table().unwrap();

    let err = table
        .register(Method::GET, "/api/users", RouteRule::text("shadow"))
        .unwrap_err();
    assert_eq!(
        err,
        DuplicateRouteError {
            method: Method::GET,
            path: "/api/users".to_string(),
        }
    );
    assert_eq!(table.len(), 3);
    let reply = table.handle(&Method::GET, "/api/users");
    assert_eq!(reply.content_kind, ContentKind::Json);
}

#[test]
fn json_bodies_round_trip() {
    let table = build_route_table().unwrap();

    for (key, rule) in table.routes() {
        if let Body::Json(original) = &rule.body {
            let reply = table.handle(&key.method, &key.path);
            assert_eq!(&body_json(&reply.body), original);
        }
    }
}

#[test]
fn table_is_shareable_across_threads() {
    let table = std::sync::Arc::new(build_route_table().unwrap());

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let table = std::sync::Arc::clone(&table);
            std::thread::spawn(move || table.handle(&Method::GET, "/api/products"))
        })
        .collect();

    let expected = table.handle(&Method::GET, "/api/products");
    for h in handles {
        assert_eq!(h.join().unwrap(), expected);
    }
}

#[test]
fn custom_table() {
    let mut table = RouteTable::new();
    table
        .register(Method::GET, "/ping", RouteRule::text("pong"))
        .unwrap();
    table
        .register(
            Method::POST,
            "/ping",
            RouteRule::text("created").with_status(StatusCode::CREATED),
        )
        .unwrap();

    assert_eq!(&table.handle(&Method::GET, "/ping").body[..], b"pong");
    assert_eq!(
        table.handle(&Method::POST, "/ping").status,
        StatusCode::CREATED
    );
}
