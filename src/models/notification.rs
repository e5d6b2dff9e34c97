// src/models/notification.rs

//! Notification data structures.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{LmsError, Result};

/// A lecture (course section) a notification belongs to.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Lecture {
    /// Opaque portal key (`KJKEY`) recovered from the listing's `onclick` script
    pub key: String,

    /// Lecture display name
    pub name: String,
}

/// One entry of the portal's activity feed.
///
/// `datetime` is kept raw because its format depends on `kind`. For
/// assignments it holds the deadline only.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Notification {
    /// Numeric identifier from the link's trailing `=<digits>`, if any
    pub id: Option<u64>,

    /// Absolute URL of the detail page
    pub link: String,

    /// Free-text category, e.g. "과제" or "공지"
    #[serde(rename = "type")]
    pub kind: String,

    pub title: String,

    pub datetime: String,

    /// Submission flag; only meaningful when `is_assignment()` holds
    pub submitted: bool,

    pub lecture: Lecture,

    pub professor: String,

    pub preview_content: String,
}

impl Notification {
    /// Whether `kind` equals the given assignment category.
    pub fn is_assignment(&self, assignment_type: &str) -> bool {
        self.kind == assignment_type
    }

    /// Submission state for assignments, `None` for every other category.
    pub fn submission(&self, assignment_type: &str) -> Option<bool> {
        self.is_assignment(assignment_type).then_some(self.submitted)
    }
}

impl fmt::Display for Notification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{{}: {}}}", self.kind, self.title)
    }
}

/// A 1-based window into the notification feed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageWindow {
    pub start: u32,
    pub count: u32,
}

impl PageWindow {
    /// Build a window, rejecting `start < 1` and `count < min_count`.
    ///
    /// The portal misbehaves for display counts below its minimum, so the
    /// check happens before any request is made.
    pub fn new(start: u32, count: u32, min_count: u32) -> Result<Self> {
        if start < 1 {
            return Err(LmsError::precondition(format!(
                "start must be >= 1, got {start}"
            )));
        }
        if count < min_count {
            return Err(LmsError::precondition(format!(
                "count must be >= {min_count}, got {count}"
            )));
        }
        Ok(Self { start, count })
    }

    /// Window for a 1-based page of `page_size` entries.
    pub fn page(page: u32, page_size: u32, min_count: u32) -> Result<Self> {
        if page < 1 {
            return Err(LmsError::precondition(format!(
                "page must be >= 1, got {page}"
            )));
        }
        let start = (page - 1)
            .checked_mul(page_size)
            .and_then(|offset| offset.checked_add(1))
            .ok_or_else(|| LmsError::precondition(format!("page {page} is out of range")))?;
        Self::new(start, page_size, min_count)
    }
}
