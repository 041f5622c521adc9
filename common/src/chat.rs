use std::fmt;

use chrono::{DateTime, TimeZone, Utc};

use crate::attachment::Attachment;

/// Unique identifier for a support conversation.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ChatId(pub String);

impl fmt::Display for ChatId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Unique identifier for a message (allocated by the store).
pub type MessageId = u64;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChatStatus {
    Open,
    Closed,
}

impl ChatStatus {
    pub fn label(self) -> &'static str {
        match self {
            ChatStatus::Open => "open",
            ChatStatus::Closed => "closed",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Sender {
    Admin,
    Customer,
}

/// A message within a support conversation. Append-only.
#[derive(Debug, Clone, PartialEq)]
pub struct Message {
    pub id: MessageId,
    pub sender: Sender,
    pub text: String,
    pub timestamp: DateTime<Utc>,
    pub attachments: Vec<Attachment>,
}

/// A message about to be appended, before it has an id or timestamp.
#[derive(Debug, Clone, PartialEq)]
pub struct OutgoingMessage {
    pub sender: Sender,
    pub text: String,
    pub attachments: Vec<Attachment>,
}

impl OutgoingMessage {
    /// A message needs non-blank text or at least one attachment.
    pub fn is_empty(&self) -> bool {
        self.text.trim().is_empty() && self.attachments.is_empty()
    }
}

/// A support conversation with one customer.
#[derive(Debug, Clone, PartialEq)]
pub struct SupportChat {
    pub id: ChatId,
    pub customer_name: String,
    pub last_message: String,
    pub last_message_time: DateTime<Utc>,
    pub unread_count: u32,
    pub status: ChatStatus,
    pub messages: Vec<Message>,
}

impl SupportChat {
    pub fn new(id: ChatId, customer_name: impl Into<String>, now: DateTime<Utc>) -> Self {
        Self {
            id,
            customer_name: customer_name.into(),
            last_message: String::new(),
            last_message_time: now,
            unread_count: 0,
            status: ChatStatus::Open,
            messages: Vec::new(),
        }
    }

    /// Append a message and refresh the list preview. Customer messages
    /// count as unread.
    pub(crate) fn push(&mut self, message: Message) {
        self.last_message = preview(&message);
        self.last_message_time = message.timestamp;
        if message.sender == Sender::Customer {
            self.unread_count += 1;
        }
        self.messages.push(message);
    }

    pub fn is_open(&self) -> bool {
        self.status == ChatStatus::Open
    }
}

/// Preview line for the chat list: the text, or the first attachment name.
fn preview(message: &Message) -> String {
    let text = message.text.trim();
    if !text.is_empty() {
        return text.to_string();
    }
    match message.attachments.as_slice() {
        [] => String::new(),
        [only] => format!("📎 {}", only.name),
        [first, rest @ ..] => format!("📎 {} (+{} more)", first.name, rest.len()),
    }
}

/// Hour:minute display used for bubbles and the chat list, in whatever zone
/// the caller converted to. The UI passes the viewer's local time.
pub fn format_time<Tz>(timestamp: &DateTime<Tz>) -> String
where
    Tz: TimeZone,
    Tz::Offset: fmt::Display,
{
    timestamp.format("%H:%M").to_string()
}

/// Which pane the support screen shows on narrow layouts.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SupportPane {
    #[default]
    List,
    Detail(ChatId),
}

impl SupportPane {
    pub fn selected(&self) -> Option<&ChatId> {
        match self {
            SupportPane::List => None,
            SupportPane::Detail(id) => Some(id),
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::FixedOffset;

    use super::*;
    use crate::attachment::{Attachment, FileMeta, ObjectUrl};

    fn at(h: u32, m: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, 1, h, m, 0).unwrap()
    }

    #[test]
    fn time_is_24h_hour_minute() {
        assert_eq!(format_time(&at(9, 5)), "09:05");
        assert_eq!(format_time(&at(17, 45)), "17:45");
    }

    #[test]
    fn time_follows_the_given_zone() {
        let india = FixedOffset::east_opt(5 * 3600 + 30 * 60).unwrap();
        assert_eq!(format_time(&at(14, 0).with_timezone(&india)), "19:30");
    }

    #[test]
    fn customer_messages_raise_unread() {
        let mut chat = SupportChat::new(ChatId("CH-1".into()), "Asha", at(8, 0));
        chat.push(Message {
            id: 1,
            sender: Sender::Customer,
            text: "Is this in stock?".into(),
            timestamp: at(9, 0),
            attachments: Vec::new(),
        });
        chat.push(Message {
            id: 2,
            sender: Sender::Admin,
            text: "Yes".into(),
            timestamp: at(9, 1),
            attachments: Vec::new(),
        });
        assert_eq!(chat.unread_count, 1);
        assert_eq!(chat.last_message, "Yes");
        assert_eq!(chat.last_message_time, at(9, 1));
    }

    #[test]
    fn attachment_only_preview() {
        let file = FileMeta::new("invoice.pdf", "application/pdf", 2048);
        let message = Message {
            id: 1,
            sender: Sender::Admin,
            text: "  ".into(),
            timestamp: at(9, 0),
            attachments: vec![Attachment::from_file(1, &file, ObjectUrl::unmanaged("blob:1"))],
        };
        assert_eq!(preview(&message), "📎 invoice.pdf");
    }

    #[test]
    fn outgoing_emptiness() {
        let empty = OutgoingMessage {
            sender: Sender::Admin,
            text: " \n".into(),
            attachments: Vec::new(),
        };
        assert!(empty.is_empty());
    }
}
