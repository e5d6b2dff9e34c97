// src/client.rs

//! Session handle for the LMS portal.
//!
//! `LmsClient` pairs a [`Transport`] with the [`Config`] describing the
//! portal. The component operations live in `services`:
//! - `login`, `require_login`, `logout` (`services::auth`)
//! - `get_notifications`, `get_notifications_by_page` (`services::notifications`)
//! - `get_notification_content` (`services::content`)
//! - `send_note` (`services::notes`)

use std::sync::Arc;

use crate::error::Result;
use crate::models::{Config, Envelope};
use crate::transport::{Form, HttpTransport, Transport};

/// Client for one logical portal user.
pub struct LmsClient<T: Transport = HttpTransport> {
    pub(crate) transport: T,
    pub(crate) config: Arc<Config>,
}

impl LmsClient<HttpTransport> {
    /// Create a client with a fresh cookie jar.
    pub fn new(config: Arc<Config>) -> Result<Self> {
        let transport = HttpTransport::new(&config.http)?;
        Ok(Self { transport, config })
    }

    /// Create a client with the default portal configuration.
    pub fn with_defaults() -> Result<Self> {
        Self::new(Arc::new(Config::default()))
    }
}

impl<T: Transport> LmsClient<T> {
    /// Create a client over a caller-supplied transport.
    pub fn with_transport(transport: T, config: Arc<Config>) -> Self {
        Self { transport, config }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// POST a form to `endpoint` and decode the `{isError, message}` envelope.
    pub(crate) async fn post_envelope(&self, endpoint: &str, form: &Form) -> Result<Envelope> {
        let response = self
            .transport
            .post_form(&self.config.url(endpoint), form)
            .await?;
        if !response.is_success() {
            log::warn!("{} answered with status {}", endpoint, response.status);
        }
        Envelope::decode(endpoint, &response.body)?.into_result()
    }
}
