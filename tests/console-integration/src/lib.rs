//! Drives the admin console's store the same way the screens do, without a
//! browser. Object URLs are recorded instead of handed to `URL.revokeObjectURL`.

use std::cell::RefCell;
use std::rc::Rc;

use chrono::{DateTime, TimeZone, Utc};

use spares_common::attachment::{AttachmentId, FileMeta, ObjectUrl, UrlRevoker};
use spares_common::chat::{ChatId, MessageId};
use spares_common::toast::ToastQueue;
use spares_common::{AdminConfig, AdminState, Command, CommandOutcome, Composer, Result};

/// Remembers every URL it was asked to revoke.
#[derive(Clone, Default)]
pub struct RecordingRevoker {
    revoked: Rc<RefCell<Vec<String>>>,
}

impl RecordingRevoker {
    pub fn revoked(&self) -> Vec<String> {
        self.revoked.borrow().clone()
    }

    pub fn was_revoked(&self, url: &str) -> bool {
        self.revoked.borrow().iter().any(|u| u == url)
    }
}

impl UrlRevoker for RecordingRevoker {
    fn revoke(&self, url: &str) {
        self.revoked.borrow_mut().push(url.to_string());
    }
}

/// Fixed clock so seeded timestamps and sent messages are reproducible.
pub fn fixed_now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 6, 3, 14, 0, 0)
        .single()
        .unwrap_or_else(Utc::now)
}

/// The console as a test sees it: seeded store, one composer, the toast
/// queue, and a revoker that records released URLs.
pub struct ConsoleHarness {
    pub config: AdminConfig,
    pub state: AdminState,
    pub composer: Composer,
    pub toasts: ToastQueue,
    pub revoker: RecordingRevoker,
    pub now: DateTime<Utc>,
    next_url: u64,
}

impl ConsoleHarness {
    pub fn setup() -> Self {
        Self::with_config(AdminConfig::default())
    }

    pub fn with_config(config: AdminConfig) -> Self {
        let _ = tracing_subscriber::fmt()
            .with_test_writer()
            .with_max_level(tracing::Level::DEBUG)
            .try_init();

        let now = fixed_now();
        Self {
            state: AdminState::demo(&config, now),
            composer: Composer::new(config.max_attachment_bytes),
            toasts: ToastQueue::new(),
            revoker: RecordingRevoker::default(),
            config,
            now,
            next_url: 1,
        }
    }

    /// Apply a command like a screen does: failures become error toasts.
    pub fn dispatch(&mut self, command: Command) -> Option<CommandOutcome> {
        match self.state.apply(command) {
            Ok(outcome) => Some(outcome),
            Err(err) => {
                self.toasts.report(&err);
                None
            }
        }
    }

    /// Pick a file in the composer. Rejected files raise an error toast and
    /// never get a URL.
    pub fn pick_file(&mut self, name: &str, mime: &str, size: u64) -> Option<AttachmentId> {
        let file = FileMeta::new(name, mime, size);
        let revoker = self.revoker.clone();
        let url = format!("blob:test/{}", self.next_url);
        let result = self
            .composer
            .attach(&file, || ObjectUrl::new(url, Rc::new(revoker)));
        match result {
            Ok(id) => {
                self.next_url += 1;
                Some(id)
            }
            Err(err) => {
                self.toasts.report(&err);
                None
            }
        }
    }

    pub fn send(&mut self, chat_id: &ChatId) -> Result<Option<MessageId>> {
        self.composer.send(&mut self.state, chat_id, self.now)
    }

    pub fn chat_id(&self, customer_name: &str) -> Option<ChatId> {
        self.state
            .chats()
            .iter()
            .find(|c| c.customer_name == customer_name)
            .map(|c| c.id.clone())
    }
}
