//! Timed, non-blocking notifications.

use crate::clipboard::CopyOutcome;

/// Seconds a toast stays on screen.
pub const TOAST_LIFETIME: f32 = 2.5;

/// Toasts shown at once; older ones are dropped.
pub const MAX_TOASTS: usize = 3;

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum ToastKind {
    Info,
    Error,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    pub kind: ToastKind,
    pub message: String,
    /// Seconds left before expiry.
    pub remaining: f32,
}

/// Newest-first queue of toasts, aged by frame time.
#[derive(Debug, Default)]
pub struct Toasts {
    items: Vec<Toast>,
}

impl Toasts {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, kind: ToastKind, message: impl Into<String>) {
        self.items.insert(0, Toast { kind, message: message.into(), remaining: TOAST_LIFETIME });
        self.items.truncate(MAX_TOASTS);
    }

    /// Turns a clipboard result into a toast.
    pub fn push_copy_outcome(&mut self, outcome: &CopyOutcome) {
        match &outcome.result {
            Ok(()) => self.push(ToastKind::Info, format!("Copied to clipboard: {}", outcome.text)),
            Err(e) => {
                log::warn!("copy of {:?} failed: {e}", outcome.text);
                self.push(ToastKind::Error, format!("Copy failed: {e}"));
            }
        }
    }

    /// Ages every toast by `dt` seconds and drops the expired ones.
    pub fn tick(&mut self, dt: f32) {
        for t in &mut self.items {
            t.remaining -= dt;
        }
        self.items.retain(|t| t.remaining > 0.0);
    }

    /// Newest first.
    pub fn iter(&self) -> impl Iterator<Item = &Toast> {
        self.items.iter()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clipboard::ClipboardError;

    #[test]
    fn newest_first_and_capped() {
        let mut t = Toasts::new();
        for i in 0..5 {
            t.push(ToastKind::Info, format!("n{i}"));
        }
        let msgs: Vec<_> = t.iter().map(|x| x.message.as_str()).collect();
        assert_eq!(msgs, vec!["n4", "n3", "n2"]);
    }

    #[test]
    fn expires_after_lifetime() {
        let mut t = Toasts::new();
        t.push(ToastKind::Info, "hello");
        for _ in 0..24 {
            t.tick(0.1);
        }
        assert_eq!(t.len(), 1);
        t.tick(0.2);
        assert!(t.is_empty());
    }

    #[test]
    fn staggered_toasts_expire_separately() {
        let mut t = Toasts::new();
        t.push(ToastKind::Info, "first");
        t.tick(1.5);
        t.push(ToastKind::Info, "second");
        t.tick(1.5);
        let msgs: Vec<_> = t.iter().map(|x| x.message.as_str()).collect();
        assert_eq!(msgs, vec!["second"]);
    }

    #[test]
    fn copy_outcomes_become_messages() {
        let mut t = Toasts::new();
        t.push_copy_outcome(&CopyOutcome { text: "#3498db".into(), result: Ok(()) });
        t.push_copy_outcome(&CopyOutcome {
            text: "#000000".into(),
            result: Err(ClipboardError("denied".into())),
        });

        let all: Vec<_> = t.iter().collect();
        assert_eq!(all[0].kind, ToastKind::Error);
        assert_eq!(all[0].message, "Copy failed: denied");
        assert_eq!(all[1].kind, ToastKind::Info);
        assert_eq!(all[1].message, "Copied to clipboard: #3498db");
    }
}
