use std::fmt;
use std::rc::Rc;

use serde::{Deserialize, Serialize};

use crate::error::{AdminError, Result};

/// Largest file that may be attached to a support message (10 MiB).
pub const MAX_ATTACHMENT_BYTES: u64 = 10 * 1024 * 1024;

/// Attachment identifier, allocated by the composer.
pub type AttachmentId = u64;

/// Broad kind of an attachment, used to pick how it is previewed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AttachmentKind {
    Image,
    Audio,
    Document,
    Other,
}

impl AttachmentKind {
    /// Classify a MIME type. Prefix checks run before the substring checks,
    /// so `text/*` and `application/pdf` land in `Document`.
    pub fn from_mime(mime: &str) -> Self {
        let mime = mime.to_ascii_lowercase();
        if mime.starts_with("image/") {
            AttachmentKind::Image
        } else if mime.starts_with("audio/") {
            AttachmentKind::Audio
        } else if mime.contains("pdf") || mime.contains("document") || mime.contains("text") {
            AttachmentKind::Document
        } else {
            AttachmentKind::Other
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            AttachmentKind::Image => "image",
            AttachmentKind::Audio => "audio",
            AttachmentKind::Document => "document",
            AttachmentKind::Other => "other",
        }
    }
}

/// Human-readable size: bytes below 1 KiB, then one-decimal KB, then MB.
pub fn format_file_size(bytes: u64) -> String {
    const KIB: u64 = 1024;
    const MIB: u64 = 1024 * 1024;
    if bytes < KIB {
        format!("{bytes} B")
    } else if bytes < MIB {
        format!("{:.1} KB", bytes as f64 / KIB as f64)
    } else {
        format!("{:.1} MB", bytes as f64 / MIB as f64)
    }
}

/// What the browser tells us about a selected file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileMeta {
    pub name: String,
    pub mime: String,
    pub size: u64,
}

impl FileMeta {
    pub fn new(name: impl Into<String>, mime: impl Into<String>, size: u64) -> Self {
        Self {
            name: name.into(),
            mime: mime.into(),
            size,
        }
    }

    /// Reject files over `limit` bytes.
    pub fn check_size(&self, limit: u64) -> Result<()> {
        if self.size > limit {
            return Err(AdminError::AttachmentTooLarge {
                name: self.name.clone(),
                size: format_file_size(self.size),
                limit: format_file_size(limit),
            });
        }
        Ok(())
    }
}

/// Releases local object URLs (`URL.revokeObjectURL` in the browser).
pub trait UrlRevoker {
    fn revoke(&self, url: &str);
}

/// Revoker for URLs nobody needs to release, such as remote images.
#[derive(Debug, Default)]
pub struct NoopRevoker;

impl UrlRevoker for NoopRevoker {
    fn revoke(&self, _url: &str) {}
}

struct Lease {
    url: String,
    revoker: Rc<dyn UrlRevoker>,
}

impl Drop for Lease {
    fn drop(&mut self) {
        tracing::debug!(url = %self.url, "revoking object URL");
        self.revoker.revoke(&self.url);
    }
}

/// Shared lease on a local object URL.
///
/// Clones share one lease. The URL is revoked when the last clone is
/// dropped, so an attachment removed from the composer releases its blob
/// while a sent one stays valid for as long as the message holding it.
#[derive(Clone)]
pub struct ObjectUrl(Rc<Lease>);

impl ObjectUrl {
    pub fn new(url: impl Into<String>, revoker: Rc<dyn UrlRevoker>) -> Self {
        Self(Rc::new(Lease {
            url: url.into(),
            revoker,
        }))
    }

    /// A URL that is never revoked.
    pub fn unmanaged(url: impl Into<String>) -> Self {
        Self::new(url, Rc::new(NoopRevoker))
    }

    pub fn as_str(&self) -> &str {
        &self.0.url
    }

    /// Number of live handles to this lease.
    pub fn holders(&self) -> usize {
        Rc::strong_count(&self.0)
    }
}

impl fmt::Debug for ObjectUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("ObjectUrl").field(&self.0.url).finish()
    }
}

impl PartialEq for ObjectUrl {
    fn eq(&self, other: &Self) -> bool {
        self.0.url == other.0.url
    }
}

impl fmt::Display for ObjectUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0.url)
    }
}

/// A file bundled with a support message.
#[derive(Debug, Clone, PartialEq)]
pub struct Attachment {
    pub id: AttachmentId,
    pub name: String,
    pub kind: AttachmentKind,
    pub url: ObjectUrl,
    /// Display size, e.g. `"5.0 KB"`.
    pub size: String,
    pub size_bytes: u64,
}

impl Attachment {
    pub fn from_file(id: AttachmentId, file: &FileMeta, url: ObjectUrl) -> Self {
        Self {
            id,
            name: file.name.clone(),
            kind: AttachmentKind::from_mime(&file.mime),
            url,
            size: format_file_size(file.size),
            size_bytes: file.size,
        }
    }
}
