// src/services/notifications.rs

//! Notification listing service.
//!
//! Scrapes the activity feed fragment into [`Notification`] records. The
//! portal's markup is unvalidated, so any structural mismatch aborts the
//! whole listing instead of silently dropping entries.

use regex::Regex;
use scraper::{ElementRef, Html, Selector};

use super::parse_selector;
use crate::client::LmsClient;
use crate::endpoints;
use crate::error::{LmsError, Result};
use crate::models::{Config, Lecture, Notification, PageWindow};
use crate::transport::Transport;
use crate::utils::text::{element_text, quoted_literal, trailing_id};

/// Selectors and patterns shared by every item of one listing.
struct ItemRules<'c> {
    config: &'c Config,
    anchor: Selector,
    span: Selector,
    div: Selector,
    link: Selector,
    deadline: Regex,
}

impl<'c> ItemRules<'c> {
    fn new(config: &'c Config) -> Result<Self> {
        let pattern = format!(
            r"^(.+?) \| {}\((.+?)\)$",
            regex::escape(&config.wire.deadline_label)
        );
        let deadline = Regex::new(&pattern)
            .map_err(|e| LmsError::config(format!("deadline pattern {pattern:?}: {e}")))?;

        Ok(Self {
            config,
            anchor: parse_selector(&config.selectors.anchor_selector)?,
            span: parse_selector("span")?,
            div: parse_selector("div")?,
            link: parse_selector("a")?,
            deadline,
        })
    }
}

/// Parse every data item of a listing fragment.
///
/// Returns the first item error, discarding items parsed before it.
pub fn parse_notifications(document: &Html, config: &Config) -> Result<Vec<Notification>> {
    let item_sel = parse_selector(&config.selectors.item_selector)?;
    let rules = ItemRules::new(config)?;

    document
        .select(&item_sel)
        .map(|item| parse_item(&item, &rules))
        .collect()
}

/// Parse a single data `<li>` of the listing.
pub fn parse_notification_item(item: &ElementRef<'_>, config: &Config) -> Result<Notification> {
    parse_item(item, &ItemRules::new(config)?)
}

fn parse_item(item: &ElementRef<'_>, rules: &ItemRules<'_>) -> Result<Notification> {
    let wire = &rules.config.wire;

    let anchor = item
        .select(&rules.anchor)
        .next()
        .ok_or_else(|| LmsError::parse("item has no site-link anchor", item.html()))?;

    let anchor_text = element_text(&anchor);
    let (kind, title) = anchor_text
        .split_once(": ")
        .ok_or_else(|| LmsError::parse("anchor text has no ': ' separator", &anchor_text))?;

    let href = anchor
        .value()
        .attr("href")
        .ok_or_else(|| LmsError::parse("missing 'href' on site-link", anchor.html()))?;
    let id = trailing_id(href);
    if id.is_none() {
        log::debug!("No trailing id in href {:?}", href);
    }
    let link = rules.config.url(href);

    let onclick = anchor
        .value()
        .attr("onclick")
        .ok_or_else(|| LmsError::parse("missing 'onclick' on site-link", anchor.html()))?;
    let key = quoted_literal(onclick, 1)
        .ok_or_else(|| LmsError::parse("onclick has fewer than two quoted literals", onclick))?;

    let spans: Vec<String> = item.select(&rules.span).map(|s| element_text(&s)).collect();
    let [first, preview, ..] = spans.as_slice() else {
        return Err(LmsError::parse(
            "expected at least two <span> entries",
            spans.join(" | "),
        ));
    };

    let (datetime, submitted) = if kind == wire.assignment_type {
        let caps = rules
            .deadline
            .captures(first)
            .ok_or_else(|| LmsError::parse("assignment status does not match deadline pattern", first))?;
        (caps[2].to_string(), &caps[1] == wire.submitted_status)
    } else {
        (first.clone(), false)
    };

    let mut professor = String::new();
    let mut lecture_name = String::new();
    if let Some(info) = item.select(&rules.div).last() {
        let mut names = info.select(&rules.link).map(|a| element_text(&a));
        professor = names.next().unwrap_or_default();
        lecture_name = names.next().unwrap_or_default();
    }

    Ok(Notification {
        id,
        link,
        kind: kind.to_string(),
        title: title.to_string(),
        datetime,
        submitted,
        lecture: Lecture {
            key: key.to_string(),
            name: lecture_name,
        },
        professor,
        preview_content: preview.clone(),
    })
}

impl<T: Transport> LmsClient<T> {
    /// Fetch `count` notifications starting at the 1-based offset `start`.
    ///
    /// `count` below the portal minimum is rejected before any request. A
    /// status other than 200 is an error rather than an empty listing.
    pub async fn get_notifications(&self, start: u32, count: u32) -> Result<Vec<Notification>> {
        let window = PageWindow::new(start, count, self.config.wire.min_display)?;
        self.fetch_window(window).await
    }

    /// Fetch the 1-based `page` of the feed using the configured page size.
    pub async fn get_notifications_by_page(&self, page: u32) -> Result<Vec<Notification>> {
        let wire = &self.config.wire;
        let window = PageWindow::page(page, wire.page_size, wire.min_display)?;
        self.fetch_window(window).await
    }

    async fn fetch_window(&self, window: PageWindow) -> Result<Vec<Notification>> {
        let wire = &self.config.wire;
        let form = vec![
            ("start", window.start.to_string()),
            ("display", window.count.to_string()),
            ("GUBUN", wire.gubun.clone()),
            ("encoding", wire.encoding.clone()),
        ];

        let url = self.config.url(endpoints::NOTIFICATION_LIST);
        let response = self.transport.post_form(&url, &form).await?;
        if response.status != 200 {
            return Err(LmsError::Status {
                endpoint: endpoints::NOTIFICATION_LIST.to_string(),
                status: response.status,
            });
        }

        let document = Html::parse_document(&response.body);
        let notifications = parse_notifications(&document, &self.config)?;

        log::debug!(
            "Parsed {} notifications from window start={} count={}",
            notifications.len(),
            window.start,
            window.count
        );
        Ok(notifications)
    }
}
