//! Toast notification queue.
//!
//! DESIGN
//! ======
//! The queue is plain data; the host component schedules the auto-dismiss and
//! hide-animation timers and calls back into `begin_hide` / `remove`.

#[cfg(test)]
#[path = "toast_test.rs"]
mod toast_test;

/// How long a toast stays fully visible before it starts hiding.
pub const TOAST_VISIBLE_MS: u32 = 4000;

/// Length of the hide animation before the toast is removed.
pub const TOAST_HIDE_MS: u32 = 300;

/// Visual category of a toast.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ToastCategory {
    #[default]
    Info,
    Success,
    Warning,
    Error,
}

impl ToastCategory {
    /// CSS modifier class, e.g. `toast-error`.
    #[must_use]
    pub fn class(self) -> &'static str {
        match self {
            Self::Info => "toast-info",
            Self::Success => "toast-success",
            Self::Warning => "toast-warning",
            Self::Error => "toast-error",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Toast {
    pub id: u64,
    pub message: String,
    pub category: ToastCategory,
    /// Set once the hide animation has started.
    pub hiding: bool,
}

/// All toasts currently on screen, oldest first.
#[derive(Clone, Debug, Default)]
pub struct ToastState {
    pub toasts: Vec<Toast>,
    next_id: u64,
}

impl ToastState {
    /// Queue a toast and return its id.
    pub fn push(&mut self, message: impl Into<String>, category: ToastCategory) -> u64 {
        self.next_id += 1;
        let id = self.next_id;
        self.toasts.push(Toast { id, message: message.into(), category, hiding: false });
        id
    }

    /// Start hiding a toast. Returns false if it is gone or already hiding.
    pub fn begin_hide(&mut self, id: u64) -> bool {
        match self.toasts.iter_mut().find(|t| t.id == id) {
            Some(t) if !t.hiding => {
                t.hiding = true;
                true
            }
            _ => false,
        }
    }

    /// Drop a toast. Returns false if it was already gone.
    pub fn remove(&mut self, id: u64) -> bool {
        let before = self.toasts.len();
        self.toasts.retain(|t| t.id != id);
        self.toasts.len() != before
    }
}
