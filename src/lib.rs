// src/lib.rs

//! PKNU LMS client library

pub mod client;
pub mod endpoints;
pub mod error;
pub mod models;
pub mod services;
pub mod transport;
pub mod utils;

pub use client::LmsClient;
pub use error::{ErrorKind, LmsError, OrAbort, Result};
pub use models::{Config, Lecture, Notification, PageWindow};
