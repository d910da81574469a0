//! Platform abstraction for surfacing messages to the user.
//!
//! The browser implementation shows a blocking `alert`; tests use
//! `RecordingNotifier` to assert on what would have been shown.

use std::cell::RefCell;
use std::rc::Rc;

use crate::error::EditorError;

/// Shows user-facing messages.
pub trait Notifier {
    /// Show a message to the user.
    fn notify(&self, message: &str);

    /// Report a failed operation.
    ///
    /// Validation failures are shown to the user. Everything else, file read
    /// failures included, is only logged.
    fn report(&self, error: &EditorError) {
        match error {
            e if e.is_validation() => self.notify(&e.to_string()),
            EditorError::FileRead => {
                tracing::warn!(target: "bocadillo::platform", "file read failed");
            }
            e => tracing::warn!(target: "bocadillo::platform", error = %e, "operation failed"),
        }
    }
}

/// Notifier that keeps every message, for tests and headless use.
#[derive(Debug, Default)]
pub struct RecordingNotifier {
    messages: RefCell<Vec<String>>,
}

impl RecordingNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn messages(&self) -> Vec<String> {
        self.messages.borrow().clone()
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, message: &str) {
        self.messages.borrow_mut().push(message.to_string());
    }
}

/// Lets a caller keep a handle on a notifier it hands over.
impl<N: Notifier + ?Sized> Notifier for Rc<N> {
    fn notify(&self, message: &str) {
        (**self).notify(message)
    }

    fn report(&self, error: &EditorError) {
        (**self).report(error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_only_alerts_validation() {
        let notifier = RecordingNotifier::new();
        notifier.report(&EditorError::EmptyName);
        notifier.report(&EditorError::FileRead);
        notifier.report(&EditorError::Dom("missing #editor".into()));
        assert_eq!(notifier.messages(), vec!["Ponle un nombre al personaje"]);
    }

    #[test]
    fn test_shared_notifier_records_through_clone() {
        let notifier = Rc::new(RecordingNotifier::new());
        let boxed: Box<dyn Notifier> = Box::new(notifier.clone());
        boxed.report(&EditorError::NoSelection);
        assert_eq!(notifier.messages(), vec!["Selecciona texto en el editor"]);
    }
}
