// src/models/envelope.rs

//! JSON result envelope returned by the portal's AJAX endpoints.

use serde::Deserialize;

use crate::error::{LmsError, Result};

/// `{isError, message, ...}` as returned by the lecture-room and note endpoints.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Envelope {
    #[serde(rename = "isError", default)]
    pub is_error: bool,

    #[serde(default)]
    pub message: String,

    /// Present only on lecture-room responses
    #[serde(rename = "lectType", default)]
    pub lecture_type: Option<String>,
}

impl Envelope {
    /// Decode an envelope from a response body.
    pub fn decode(endpoint: &str, body: &str) -> Result<Self> {
        serde_json::from_str(body).map_err(|source| LmsError::Envelope {
            endpoint: endpoint.to_string(),
            source,
        })
    }

    /// Turn a server-signaled error into `LmsError::Remote`.
    pub fn into_result(self) -> Result<Self> {
        if self.is_error {
            return Err(LmsError::Remote(self.message));
        }
        Ok(self)
    }
}
