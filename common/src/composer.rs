use std::mem;

use chrono::{DateTime, Utc};

use crate::attachment::{Attachment, AttachmentId, FileMeta, ObjectUrl, MAX_ATTACHMENT_BYTES};
use crate::chat::{ChatId, MessageId, OutgoingMessage, Sender};
use crate::command::{Command, CommandOutcome};
use crate::error::{AdminError, Result};
use crate::state::AdminState;

/// Draft of the admin's next support message: text plus pending attachments.
///
/// Pending attachments own their object URL leases, so removing one, calling
/// [`Composer::discard`], or dropping the composer with its view releases
/// the blobs. Sending hands the leases over to the message history instead.
#[derive(Debug, Clone)]
pub struct Composer {
    text: String,
    attachments: Vec<Attachment>,
    next_attachment_id: AttachmentId,
    max_attachment_bytes: u64,
}

impl Default for Composer {
    fn default() -> Self {
        Self::new(MAX_ATTACHMENT_BYTES)
    }
}

impl Composer {
    pub fn new(max_attachment_bytes: u64) -> Self {
        Self {
            text: String::new(),
            attachments: Vec::new(),
            next_attachment_id: 1,
            max_attachment_bytes,
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    pub fn attachments(&self) -> &[Attachment] {
        &self.attachments
    }

    /// Check whether a file may be attached, before any URL is created for it.
    pub fn accept(&self, file: &FileMeta) -> Result<()> {
        file.check_size(self.max_attachment_bytes).inspect_err(|err| {
            tracing::warn!("rejected attachment: {err}");
        })
    }

    /// Add an already-accepted file with its URL lease.
    pub fn push(&mut self, file: &FileMeta, url: ObjectUrl) -> AttachmentId {
        let id = self.next_attachment_id;
        self.next_attachment_id += 1;
        self.attachments.push(Attachment::from_file(id, file, url));
        id
    }

    /// Accept and add a file. `lease` runs only for accepted files, so an
    /// oversized file never allocates a URL.
    pub fn attach(
        &mut self,
        file: &FileMeta,
        lease: impl FnOnce() -> ObjectUrl,
    ) -> Result<AttachmentId> {
        self.accept(file)?;
        Ok(self.push(file, lease()))
    }

    /// Remove a pending attachment, releasing its URL.
    pub fn remove_attachment(&mut self, id: AttachmentId) -> bool {
        let before = self.attachments.len();
        self.attachments.retain(|a| a.id != id);
        self.attachments.len() != before
    }

    pub fn can_send(&self) -> bool {
        !self.text.trim().is_empty() || !self.attachments.is_empty()
    }

    /// Send the draft to `chat_id` as the admin.
    ///
    /// Returns `Ok(None)` without touching anything when there is nothing
    /// to send. On success the text and attachment list are cleared.
    pub fn send(
        &mut self,
        state: &mut AdminState,
        chat_id: &ChatId,
        now: DateTime<Utc>,
    ) -> Result<Option<MessageId>> {
        if !self.can_send() {
            return Ok(None);
        }
        if state.chat(chat_id).is_none() {
            return Err(AdminError::ChatNotFound(chat_id.clone()));
        }

        let message = OutgoingMessage {
            sender: Sender::Admin,
            text: mem::take(&mut self.text),
            attachments: mem::take(&mut self.attachments),
        };
        let outcome = state.apply(Command::SendMessage {
            chat_id: chat_id.clone(),
            message,
            at: now,
        })?;
        Ok(match outcome {
            CommandOutcome::MessageSent(id) => {
                tracing::info!(chat = %chat_id, message = id, "message sent");
                Some(id)
            }
            _ => None,
        })
    }

    /// Throw the draft away, releasing every pending URL.
    pub fn discard(&mut self) {
        self.text.clear();
        self.attachments.clear();
    }
}
