use crate::error::AdminError;

pub type ToastId = u64;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
    Info,
}

/// Ephemeral user-facing feedback.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub id: ToastId,
    pub kind: ToastKind,
    pub text: String,
}

/// Currently visible toasts, oldest first.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ToastQueue {
    toasts: Vec<Toast>,
    next_id: ToastId,
}

impl ToastQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, kind: ToastKind, text: impl Into<String>) -> ToastId {
        self.next_id += 1;
        let id = self.next_id;
        self.toasts.push(Toast {
            id,
            kind,
            text: text.into(),
        });
        id
    }

    pub fn success(&mut self, text: impl Into<String>) -> ToastId {
        self.push(ToastKind::Success, text)
    }

    pub fn error(&mut self, text: impl Into<String>) -> ToastId {
        self.push(ToastKind::Error, text)
    }

    pub fn info(&mut self, text: impl Into<String>) -> ToastId {
        self.push(ToastKind::Info, text)
    }

    /// Surface an error as an error toast.
    pub fn report(&mut self, err: &AdminError) -> ToastId {
        tracing::warn!("{err}");
        self.error(err.to_string())
    }

    pub fn dismiss(&mut self, id: ToastId) {
        self.toasts.retain(|t| t.id != id);
    }

    pub fn iter(&self) -> impl Iterator<Item = &Toast> {
        self.toasts.iter()
    }

    pub fn len(&self) -> usize {
        self.toasts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.toasts.is_empty()
    }

    pub fn last(&self) -> Option<&Toast> {
        self.toasts.last()
    }
}
