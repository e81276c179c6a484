//! HTTP response building module
//!
//! Turns a [`Reply`] from the route table into a hyper response and builds
//! the few protocol-level responses the adapter produces itself.

use http_body_util::Full;
use hyper::body::Bytes;
use hyper::header::{self, HeaderValue};
use hyper::{Response, StatusCode};

use super::cache;
use crate::routing::Reply;

/// Per-request settings that shape the response headers
#[derive(Debug, Clone, Copy)]
pub struct ResponseOptions<'a> {
    pub server_name: &'a str,
    pub enable_cors: bool,
    pub is_head: bool,
    pub if_none_match: Option<&'a str>,
}

/// Build the wire response for a route reply
///
/// Successful replies carry an `ETag`; a matching `If-None-Match` turns them
/// into 304. HEAD requests get the same headers with an empty body.
pub fn build_reply_response(reply: &Reply, opts: &ResponseOptions<'_>) -> Response<Full<Bytes>> {
    let etag = reply
        .status
        .is_success()
        .then(|| cache::generate_etag(&reply.body));

    if let Some(ref tag) = etag {
        if cache::check_etag_match(opts.if_none_match, tag) {
            return build_304_response(tag, opts.server_name);
        }
    }

    let mut builder = Response::builder()
        .status(reply.status)
        .header(header::CONTENT_TYPE, reply.content_type())
        .header(header::CONTENT_LENGTH, reply.body.len())
        .header(header::SERVER, server_header(opts.server_name));

    if let Some(tag) = etag {
        builder = builder.header(header::ETAG, tag);
    }
    if opts.enable_cors {
        builder = builder.header(header::ACCESS_CONTROL_ALLOW_ORIGIN, "*");
    }

    let body = if opts.is_head {
        Bytes::new()
    } else {
        reply.body.clone()
    };

    builder.body(Full::new(body)).unwrap_or_else(|e| {
        log_build_error(reply.status.as_str(), &e);
        Response::new(Full::new(Bytes::new()))
    })
}

/// Build 304 Not Modified response
pub fn build_304_response(etag: &str, server_name: &str) -> Response<Full<Bytes>> {
    Response::builder()
        .status(StatusCode::NOT_MODIFIED)
        .header(header::ETAG, etag)
        .header(header::SERVER, server_header(server_name))
        .body(Full::new(Bytes::new()))
        .unwrap_or_else(|e| {
            log_build_error("304", &e);
            Response::new(Full::new(Bytes::new()))
        })
}

/// Build 413 Payload Too Large response
pub fn build_413_response() -> Response<Full<Bytes>> {
    Response::builder()
        .status(StatusCode::PAYLOAD_TOO_LARGE)
        .header(header::CONTENT_TYPE, "text/plain; charset=utf-8")
        .body(Full::new(Bytes::from("413 Payload Too Large")))
        .unwrap_or_else(|e| {
            log_build_error("413", &e);
            Response::new(Full::new(Bytes::from("413 Payload Too Large")))
        })
}

fn server_header(name: &str) -> HeaderValue {
    HeaderValue::from_str(name).unwrap_or_else(|_| HeaderValue::from_static("hello-routes"))
}

/// Log response build error
fn log_build_error(status: &str, error: &hyper::http::Error) {
    crate::logger::log_error(&format!("Failed to build {status} response: {error}"));
}
