//! Request dispatch module
//!
//! Entry point for HTTP request processing: body size check, route lookup,
//! response encoding and access logging.

use crate::config::AppState;
use crate::http::{self, ResponseOptions};
use crate::logger::{self, AccessLogEntry};
use crate::routing::{Reply, RouteTable};
use http_body_util::Full;
use hyper::body::Bytes;
use hyper::{header, Method, Request, Response};
use std::convert::Infallible;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Instant;

/// Main entry point for HTTP request handling
pub async fn handle_request<B>(
    req: Request<B>,
    state: Arc<AppState>,
    peer_addr: SocketAddr,
) -> Result<Response<Full<Bytes>>, Infallible> {
    let started = Instant::now();
    let response = respond(&req, &state);

    if state.access_log() {
        let entry = access_entry(&req, &response, peer_addr, started);
        logger::log_access(&entry, &state.config.logging.access_log_format);
    }

    Ok(response)
}

fn respond<B>(req: &Request<B>, state: &AppState) -> Response<Full<Bytes>> {
    if let Some(resp) = check_body_size(req, state.config.http.max_body_size) {
        return resp;
    }

    let is_head = req.method() == Method::HEAD;
    let reply = lookup(&state.routes, req.method(), req.uri().path());

    let opts = ResponseOptions {
        server_name: &state.config.http.server_name,
        enable_cors: state.config.http.enable_cors,
        is_head,
        if_none_match: req
            .headers()
            .get(header::IF_NONE_MATCH)
            .and_then(|v| v.to_str().ok()),
    };
    http::build_reply_response(&reply, &opts)
}

/// Look up a route; HEAD falls back to the GET rule for the same path
fn lookup(routes: &RouteTable, method: &Method, path: &str) -> Reply {
    if method == Method::HEAD && !routes.contains(method, path) {
        return routes.handle(&Method::GET, path);
    }
    routes.handle(method, path)
}

/// Validate Content-Length header and return 413 if exceeded
fn check_body_size<B>(req: &Request<B>, max_body_size: u64) -> Option<Response<Full<Bytes>>> {
    let content_length = req.headers().get(header::CONTENT_LENGTH)?;
    content_length.to_str().map_or_else(
        |_| {
            logger::log_warning("Content-Length header contains non-ASCII characters");
            None
        },
        |size_str| match size_str.parse::<u64>() {
            Ok(size) if size > max_body_size => {
                logger::log_warning(&format!(
                    "Request body too large: {size} bytes (max: {max_body_size})"
                ));
                Some(http::build_413_response())
            }
            Err(_) => {
                logger::log_warning(&format!(
                    "Invalid Content-Length value: '{size_str}', skipping size check"
                ));
                None
            }
            _ => None,
        },
    )
}

fn access_entry<B>(
    req: &Request<B>,
    response: &Response<Full<Bytes>>,
    peer_addr: SocketAddr,
    started: Instant,
) -> AccessLogEntry {
    let header_str = |name: header::HeaderName| {
        req.headers()
            .get(name)
            .and_then(|v| v.to_str().ok())
            .map(ToString::to_string)
    };

    let mut entry = AccessLogEntry::new(
        peer_addr.ip().to_string(),
        req.method().to_string(),
        req.uri().path().to_string(),
    );
    entry.query = req.uri().query().map(ToString::to_string);
    entry.http_version = version_label(req.version()).to_string();
    entry.status = response.status().as_u16();
    entry.body_bytes = response
        .headers()
        .get(header::CONTENT_LENGTH)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.parse().ok())
        .unwrap_or(0);
    entry.referer = header_str(header::REFERER);
    entry.user_agent = header_str(header::USER_AGENT);
    entry.request_time_us = u64::try_from(started.elapsed().as_micros()).unwrap_or(u64::MAX);
    entry
}

fn version_label(version: hyper::Version) -> &'static str {
    if version == hyper::Version::HTTP_10 {
        "1.0"
    } else if version == hyper::Version::HTTP_2 {
        "2"
    } else {
        "1.1"
    }
}
