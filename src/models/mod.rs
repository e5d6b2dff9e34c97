// src/models/mod.rs

//! Domain models for the LMS client.

mod config;
mod envelope;
mod notification;
mod selectors;

// Re-export all public types
pub use config::{Config, HttpConfig, LoggingConfig, PortalConfig, WireConfig};
pub use envelope::Envelope;
pub use notification::{Lecture, Notification, PageWindow};
pub use selectors::PortalSelectors;
