//! Blocking browser dialogs.
//!
//! Outside the browser `alert` only logs and `confirm` declines.

use crate::state::designs::DesignError;

pub fn alert(message: &str) {
    #[cfg(feature = "csr")]
    {
        let Some(window) = web_sys::window() else {
            return;
        };
        if let Err(err) = window.alert_with_message(message) {
            log::warn!("alert failed: {err:?}");
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        log::info!("alert: {message}");
    }
}

/// Ask a yes/no question. Any failure to show the dialog counts as "no".
pub fn confirm(message: &str) -> bool {
    #[cfg(feature = "csr")]
    {
        web_sys::window().is_some_and(|w| w.confirm_with_message(message).unwrap_or(false))
    }
    #[cfg(not(feature = "csr"))]
    {
        log::info!("confirm declined: {message}");
        false
    }
}

/// Log a failed flow and alert the user unless they cancelled it themselves.
pub fn report(context: &str, err: &DesignError) {
    log::error!("{context}: {err}");
    if let Some(message) = err.user_message() {
        alert(&message);
    }
}
