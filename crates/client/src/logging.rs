//! Unified logging for both build targets.
//!
//! The `log_*!` macros format once and hand the string to the platform
//! backend: the browser console on WASM, `tracing` on desktop.

#[cfg(target_arch = "wasm32")]
mod backend {
    pub fn info(msg: &str) {
        web_sys::console::log_1(&msg.into());
    }

    pub fn warn(msg: &str) {
        web_sys::console::warn_1(&msg.into());
    }

    pub fn error(msg: &str) {
        web_sys::console::error_1(&msg.into());
    }

    pub fn debug(msg: &str) {
        web_sys::console::debug_1(&msg.into());
    }
}

#[cfg(not(target_arch = "wasm32"))]
mod backend {
    pub fn info(msg: &str) {
        tracing::info!("{}", msg);
    }

    pub fn warn(msg: &str) {
        tracing::warn!("{}", msg);
    }

    pub fn error(msg: &str) {
        tracing::error!("{}", msg);
    }

    pub fn debug(msg: &str) {
        tracing::debug!("{}", msg);
    }
}

pub use backend::{debug as debug_impl, error as error_impl, info as info_impl, warn as warn_impl};

#[macro_export]
macro_rules! log_info {
    ($($arg:tt)*) => {
        $crate::logging::info_impl(&format!($($arg)*))
    };
}

#[macro_export]
macro_rules! log_warn {
    ($($arg:tt)*) => {
        $crate::logging::warn_impl(&format!($($arg)*))
    };
}

#[macro_export]
macro_rules! log_error {
    ($($arg:tt)*) => {
        $crate::logging::error_impl(&format!($($arg)*))
    };
}

#[macro_export]
macro_rules! log_debug {
    ($($arg:tt)*) => {
        $crate::logging::debug_impl(&format!($($arg)*))
    };
}
