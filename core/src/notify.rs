//! Notification sink seam.
//!
//! The core never renders toasts itself; it calls the host's sink through
//! this trait and consumes no return value. Four severities, each taking a
//! message and a short title, fire-and-forget.

/// Receives transient user-facing messages.
///
/// Methods take `&self` so implementations stay shareable; a recording
/// implementation uses interior mutability.
pub trait Notifier {
    fn success(&self, message: &str, title: &str);
    fn info(&self, message: &str, title: &str);
    fn warning(&self, message: &str, title: &str);
    fn error(&self, message: &str, title: &str);
}

impl<N: Notifier + ?Sized> Notifier for &N {
    fn success(&self, message: &str, title: &str) {
        (**self).success(message, title);
    }

    fn info(&self, message: &str, title: &str) {
        (**self).info(message, title);
    }

    fn warning(&self, message: &str, title: &str) {
        (**self).warning(message, title);
    }

    fn error(&self, message: &str, title: &str) {
        (**self).error(message, title);
    }
}

/// Discards every notification. Useful for headless hosts and tests that do
/// not assert on toasts.
pub struct NoopNotifier;

impl Notifier for NoopNotifier {
    fn success(&self, _message: &str, _title: &str) {}
    fn info(&self, _message: &str, _title: &str) {}
    fn warning(&self, _message: &str, _title: &str) {}
    fn error(&self, _message: &str, _title: &str) {}
}
