//! Route rules and replies
//!
//! A rule is the fixed answer for one route: a status code plus a body whose
//! variant decides how it is put on the wire.

use hyper::body::Bytes;
use hyper::StatusCode;
use serde::Serialize;
use serde_json::Value;

/// Payload encoding discriminator
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentKind {
    Text,
    Html,
    Json,
}

impl ContentKind {
    /// `Content-Type` header value for this kind
    pub const fn content_type(self) -> &'static str {
        match self {
            Self::Text => "text/plain; charset=utf-8",
            Self::Html => "text/html; charset=utf-8",
            Self::Json => "application/json; charset=utf-8",
        }
    }
}

/// Body of a rule, stored in its unencoded form
#[derive(Debug, Clone, PartialEq)]
pub enum Body {
    Text(String),
    Html(String),
    Json(Value),
}

impl Body {
    pub const fn kind(&self) -> ContentKind {
        match self {
            Self::Text(_) => ContentKind::Text,
            Self::Html(_) => ContentKind::Html,
            Self::Json(_) => ContentKind::Json,
        }
    }

    /// Wire bytes. JSON is written compactly; `Value` keeps key order stable
    /// so the output is deterministic.
    pub fn encode(&self) -> Bytes {
        match self {
            Self::Text(s) | Self::Html(s) => Bytes::from(s.clone()),
            Self::Json(v) => Bytes::from(v.to_string()),
        }
    }
}

/// Fixed response for one route
#[derive(Debug, Clone, PartialEq)]
pub struct RouteRule {
    pub status: StatusCode,
    pub body: Body,
}

impl RouteRule {
    pub fn text(body: impl Into<String>) -> Self {
        Self {
            status: StatusCode::OK,
            body: Body::Text(body.into()),
        }
    }

    pub fn html(markup: impl Into<String>) -> Self {
        Self {
            status: StatusCode::OK,
            body: Body::Html(markup.into()),
        }
    }

    /// Build a JSON rule from any serializable value.
    ///
    /// Fails when the value has no JSON representation (e.g. a map with
    /// non-string keys).
    pub fn json<T: Serialize + ?Sized>(value: &T) -> serde_json::Result<Self> {
        Ok(Self {
            status: StatusCode::OK,
            body: Body::Json(serde_json::to_value(value)?),
        })
    }

    #[must_use]
    pub fn with_status(mut self, status: StatusCode) -> Self {
        self.status = status;
        self
    }

    pub fn reply(&self) -> Reply {
        Reply {
            status: self.status,
            content_kind: self.body.kind(),
            body: self.body.encode(),
        }
    }
}

/// Outgoing response produced for a single request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reply {
    pub status: StatusCode,
    pub content_kind: ContentKind,
    pub body: Bytes,
}

impl Reply {
    pub const NOT_FOUND_BODY: &'static str = "404 Not Found";

    /// Fallback for requests no rule answers
    pub fn not_found() -> Self {
        Self {
            status: StatusCode::NOT_FOUND,
            content_kind: ContentKind::Text,
            body: Bytes::from_static(Self::NOT_FOUND_BODY.as_bytes()),
        }
    }

    pub const fn content_type(&self) -> &'static str {
        self.content_kind.content_type()
    }
}

/// Pretty-print a value with 2-space indentation
pub fn pretty_json<T: Serialize + ?Sized>(value: &T) -> serde_json::Result<String> {
    serde_json::to_string_pretty(value)
}
