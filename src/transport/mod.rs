// src/transport/mod.rs

//! Transport abstraction over the portal's HTTP surface.
//!
//! Every component talks to the portal through [`Transport`], which keeps
//! the request/response plumbing swappable:
//! - `HttpTransport`: reqwest client with a cookie jar (default)
//! - test doubles replaying scripted responses

pub mod http;

use async_trait::async_trait;

use crate::error::Result;

pub use http::HttpTransport;

/// A fully read portal response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PortalResponse {
    /// HTTP status code
    pub status: u16,
    /// Decoded response body
    pub body: String,
}

impl PortalResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Form fields in submission order.
pub type Form = Vec<(&'static str, String)>;

/// Request primitives used by the client components.
///
/// Implementations never retry; a failed request is returned as is.
#[async_trait]
pub trait Transport: Send + Sync {
    /// POST `form` url-encoded to `url`.
    async fn post_form(&self, url: &str, form: &Form) -> Result<PortalResponse>;

    /// GET `url`.
    async fn get(&self, url: &str) -> Result<PortalResponse>;
}
