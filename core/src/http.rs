//! HTTP exchange described as plain data.
//!
//! # Design
//! `Request` builds an `HttpRequest`, a `Transport` turns it into an
//! `HttpResponse`, and `Request` interprets the response. Building and
//! interpreting never touch the network, so both halves can be tested
//! without a server.

use url::Url;

/// A GET request against the translation service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpRequest {
    pub url: Url,
    pub headers: Vec<(String, String)>,
}

impl HttpRequest {
    pub fn get(url: Url) -> Self {
        Self {
            url,
            headers: vec![("accept".to_string(), "application/json".to_string())],
        }
    }
}

/// Status and body of a completed exchange. Non-2xx statuses are still
/// responses; only transport failures are errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

impl HttpResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    pub fn is_ok(&self) -> bool {
        self.status == 200
    }
}
