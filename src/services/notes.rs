// src/services/notes.rs

//! Note (private message) sending.

use crate::client::LmsClient;
use crate::endpoints;
use crate::error::Result;
use crate::transport::Transport;

impl<T: Transport> LmsClient<T> {
    /// Send a note to `recipient` (portal user id).
    ///
    /// The portal has not been observed to set `isError` here, but the
    /// envelope is still checked.
    pub async fn send_note(&self, recipient: &str, title: &str, content: &str) -> Result<()> {
        let wire = &self.config.wire;
        let form = vec![
            ("TITLE", title.to_string()),
            ("RECV_IDs", format!("{recipient}{}", wire.recipient_delimiter)),
            ("CONTENT", content.to_string()),
            ("encoding", wire.encoding.clone()),
        ];
        self.post_envelope(endpoints::NOTE_SEND, &form).await?;
        log::info!("Sent note {:?} to {}", title, recipient);
        Ok(())
    }
}
