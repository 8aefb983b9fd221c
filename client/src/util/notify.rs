//! User notifications: blocking alerts plus console logging.

/// Show a blocking alert with `message`.
pub fn alert(message: &str) {
    #[cfg(feature = "csr")]
    {
        log::info!("{message}");
        if let Some(window) = web_sys::window() {
            let _ = window.alert_with_message(message);
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = message;
    }
}

/// Log a failure that is not shown to the user.
pub fn log_error(context: &str, error: &dyn std::fmt::Display) {
    #[cfg(feature = "csr")]
    {
        log::error!("{context}: {error}");
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (context, error);
    }
}

/// Log a failure and alert the user with its message.
pub fn alert_error(context: &str, error: &dyn std::fmt::Display) {
    log_error(context, error);
    alert(&error.to_string());
}
