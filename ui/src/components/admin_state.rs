use dioxus::prelude::*;

use spares_common::toast::{ToastKind, ToastQueue};
use spares_common::{AdminConfig, AdminError, AdminState, Command, CommandOutcome};

/// Console settings, with build-time overrides from `SPARES_*` variables.
pub fn load_config() -> AdminConfig {
    AdminConfig::default()
        .with_overrides(
            option_env!("SPARES_LOW_STOCK_THRESHOLD"),
            option_env!("SPARES_CURRENCY"),
            option_env!("SPARES_TOAST_TIMEOUT_MS"),
        )
        .unwrap_or_else(|err| {
            tracing::warn!("{err}; using default settings");
            AdminConfig::default()
        })
}

/// The store every screen reads from. Provided once by `App`.
pub fn use_admin_state() -> Signal<AdminState> {
    use_context::<Signal<AdminState>>()
}

pub fn use_config() -> AdminConfig {
    use_context::<AdminConfig>()
}

/// Handle for raising toasts from event handlers.
#[derive(Clone, Copy, PartialEq)]
pub struct Notifier {
    queue: Signal<ToastQueue>,
    timeout_ms: u32,
}

impl Notifier {
    fn push(&self, kind: ToastKind, text: String) {
        let mut queue = self.queue;
        let id = queue.write().push(kind, text);

        #[cfg(target_family = "wasm")]
        {
            let timeout = self.timeout_ms;
            spawn(async move {
                gloo_timers::future::TimeoutFuture::new(timeout).await;
                queue.write().dismiss(id);
            });
        }
        #[cfg(not(target_family = "wasm"))]
        let _ = (id, self.timeout_ms);
    }

    pub fn success(&self, text: impl Into<String>) {
        self.push(ToastKind::Success, text.into());
    }

    pub fn error(&self, text: impl Into<String>) {
        self.push(ToastKind::Error, text.into());
    }

    pub fn report(&self, err: &AdminError) {
        tracing::warn!("{err}");
        self.push(ToastKind::Error, err.to_string());
    }
}

pub fn use_notifier() -> Notifier {
    let queue = use_context::<Signal<ToastQueue>>();
    let config = use_config();
    Notifier {
        queue,
        timeout_ms: config.toast_timeout_ms,
    }
}

/// Apply a command to the store, turning a failure into an error toast.
pub fn dispatch(
    mut state: Signal<AdminState>,
    notifier: Notifier,
    command: Command,
) -> Option<CommandOutcome> {
    let result = state.write().apply(command);
    match result {
        Ok(outcome) => Some(outcome),
        Err(err) => {
            notifier.report(&err);
            None
        }
    }
}
