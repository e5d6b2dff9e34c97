// src/transport/http.rs

//! HTTP transport backed by reqwest.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::cookie::Jar;
use reqwest::redirect::Policy;
use reqwest::{Client, Response};

use super::{Form, PortalResponse, Transport};
use crate::error::Result;
use crate::models::HttpConfig;

/// Create a configured asynchronous HTTP client sharing `jar`.
///
/// Redirects are never followed: the portal reports login outcomes through
/// redirect targets, which callers need to see. Certificate verification is
/// disabled when `accept_invalid_certs` is set, since the portal's
/// certificate does not validate.
pub fn create_client(config: &HttpConfig, jar: Arc<Jar>) -> Result<Client> {
    let mut builder = Client::builder()
        .user_agent(&config.user_agent)
        .cookie_provider(jar)
        .redirect(Policy::none())
        .danger_accept_invalid_certs(config.accept_invalid_certs);

    if let Some(secs) = config.timeout_secs {
        builder = builder.timeout(Duration::from_secs(secs));
    }

    Ok(builder.build()?)
}

/// Cookie-carrying transport for one logical portal user.
///
/// The jar is updated by every response, so concurrent use of one instance
/// interleaves session state. Use one transport per user.
#[derive(Clone)]
pub struct HttpTransport {
    client: Client,
}

impl HttpTransport {
    /// Create a transport with a fresh cookie jar.
    pub fn new(config: &HttpConfig) -> Result<Self> {
        let client = create_client(config, Arc::new(Jar::default()))?;
        Ok(Self { client })
    }

    async fn read(response: Response) -> Result<PortalResponse> {
        let status = response.status().as_u16();
        // Consuming the body releases the connection back to the pool.
        let body = response.text().await?;
        Ok(PortalResponse { status, body })
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn post_form(&self, url: &str, form: &Form) -> Result<PortalResponse> {
        log::debug!("POST {}", url);
        let response = self.client.post(url).form(form).send().await?;
        Self::read(response).await
    }

    async fn get(&self, url: &str) -> Result<PortalResponse> {
        log::debug!("GET {}", url);
        let response = self.client.get(url).send().await?;
        Self::read(response).await
    }
}
