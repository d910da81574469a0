//! Browser notifier: blocking `window.alert`.

use bocadillo_core::Notifier;

/// Shows messages with `window.alert`, like every validation failure in the
/// editor.
#[derive(Debug, Default, Clone, Copy)]
pub struct AlertNotifier;

impl Notifier for AlertNotifier {
    fn notify(&self, message: &str) {
        let Some(window) = web_sys::window() else {
            tracing::warn!(message, "no window to alert on");
            return;
        };
        if let Err(e) = window.alert_with_message(message) {
            tracing::warn!("alert failed: {:?}", e);
        }
    }
}
