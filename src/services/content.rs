// src/services/content.rs

//! Notification detail content.

use scraper::{ElementRef, Html, Node};

use super::parse_selector;
use crate::client::LmsClient;
use crate::endpoints;
use crate::error::{LmsError, Result};
use crate::models::{Notification, PortalSelectors};
use crate::transport::Transport;
use crate::utils::text::strip_origin;

/// Serialize the children of every content container in document order.
///
/// Scripts are dropped, text nodes are trimmed, elements keep their outer
/// markup. Empty fragments are skipped and the rest joined with `\n`. A page
/// without the container yields an empty string.
pub fn parse_content(document: &Html, selectors: &PortalSelectors) -> Result<String> {
    let container = parse_selector(&selectors.content_selector)?;

    let fragments: Vec<String> = document
        .select(&container)
        .flat_map(|viewer| viewer.children())
        .filter_map(|child| match child.value() {
            Node::Text(text) => Some(text.trim().to_string()),
            Node::Element(element) if element.name() == "script" => None,
            Node::Element(_) => ElementRef::wrap(child).map(|el| el.html().trim().to_string()),
            _ => None,
        })
        .filter(|fragment| !fragment.is_empty())
        .collect();

    Ok(fragments.join("\n"))
}

impl<T: Transport> LmsClient<T> {
    /// Select the lecture room so the portal will serve the article at
    /// `return_uri`.
    async fn prefetch_article(&self, key: &str, return_uri: &str) -> Result<()> {
        let form = vec![
            ("KJKEY", key.to_string()),
            ("returnURI", return_uri.to_string()),
            ("encoding", self.config.wire.encoding.clone()),
        ];
        let envelope = self.post_envelope(endpoints::LECTURE_ROOM, &form).await?;
        log::debug!(
            "Entered lecture room {} (type {:?})",
            key,
            envelope.lecture_type
        );
        Ok(())
    }

    /// Fetch the rich content of a notification as an HTML string.
    ///
    /// The detail page must answer 200. Only a 200 page without the content
    /// container yields an empty string.
    pub async fn get_notification_content(&self, notification: &Notification) -> Result<String> {
        let return_uri = strip_origin(&notification.link, &self.config.portal.base_url);
        self.prefetch_article(&notification.lecture.key, return_uri)
            .await?;

        let url = format!("{}{}", notification.link, self.config.wire.detail_suffix);
        let response = self.transport.get(&url).await?;
        if response.status != 200 {
            return Err(LmsError::Status {
                endpoint: url,
                status: response.status,
            });
        }

        let document = Html::parse_document(&response.body);
        parse_content(&document, &self.config.selectors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn detail_page(viewer: &str) -> Html {
        Html::parse_document(&format!(
            r#"<html><body><div class="bbsview"><h3>제목</h3><div class="textviewer">{viewer}</div></div></body></html>"#
        ))
    }

    #[test]
    fn test_script_dropped_paragraph_preserved() {
        let doc = detail_page(
            r#"<script>window.onload = init;</script><p class="note">Hello <b>world</b></p>"#,
        );
        let content = parse_content(&doc, &PortalSelectors::default()).unwrap();
        assert_eq!(content, r#"<p class="note">Hello <b>world</b></p>"#);
    }

    #[test]
    fn test_text_nodes_trimmed_and_joined() {
        let doc = detail_page(
            "\n   첫 줄입니다.   \n<br>\n   <p>둘째</p>\n   마지막   ",
        );
        let content = parse_content(&doc, &PortalSelectors::default()).unwrap();
        assert_eq!(content, "첫 줄입니다.\n<br>\n<p>둘째</p>\n마지막");
    }

    #[test]
    fn test_missing_container_is_empty() {
        let doc = Html::parse_document("<html><body><p>삭제된 게시물입니다.</p></body></html>");
        assert_eq!(parse_content(&doc, &PortalSelectors::default()).unwrap(), "");
    }

    #[test]
    fn test_nested_script_kept_inside_markup() {
        let doc = detail_page(r#"<div><script>x()</script>본문</div>"#);
        let content = parse_content(&doc, &PortalSelectors::default()).unwrap();
        assert_eq!(content, "<div><script>x()</script>본문</div>");
    }

    #[test]
    fn test_serialized_content_reparses_identically() {
        let doc = detail_page(r#"<script>track();</script><p>공지 <a href="/x">첨부</a></p>"#);
        let first = parse_content(&doc, &PortalSelectors::default()).unwrap();

        let reparsed = detail_page(&first);
        let second = parse_content(&reparsed, &PortalSelectors::default()).unwrap();
        assert_eq!(first, second);
        assert_eq!(second, r#"<p>공지 <a href="/x">첨부</a></p>"#);
    }
}
