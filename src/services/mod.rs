//! Service layer for the LMS client.
//!
//! Each module extends [`LmsClient`](crate::LmsClient) with one portal
//! component:
//! - Authentication (`auth`)
//! - Notification listing (`notifications`)
//! - Notification detail content (`content`)
//! - Note sending (`notes`)

mod auth;
mod content;
mod notes;
mod notifications;

pub use auth::is_login_rejected;
pub use content::parse_content;
pub use notifications::{parse_notification_item, parse_notifications};

use scraper::Selector;

use crate::error::{LmsError, Result};

fn parse_selector(s: &str) -> Result<Selector> {
    Selector::parse(s).map_err(|e| LmsError::selector(s, format!("{e:?}")))
}
