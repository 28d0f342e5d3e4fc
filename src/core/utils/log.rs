//! Console logging macros
//!
//! On `wasm32` these forward to the browser console through `web-sys`.
//! On native targets (tests, benches) the arguments are still type-checked
//! but nothing is emitted, so no JS import is ever called outside a browser.
//!
//! Usage:
//! ```rust
//! use rope_sandbox_engine::engine_log;
//!
//! let bodies = 3;
//! engine_log!("loaded {} bodies", bodies);
//! ```

/// Log an informational message to the host console.
#[macro_export]
macro_rules! engine_log {
    ($($arg:tt)*) => {{
        #[cfg(target_arch = "wasm32")]
        {
            let msg = format!($($arg)*);
            $crate::web_sys::console::log_1(&msg.into());
        }
        #[cfg(not(target_arch = "wasm32"))]
        {
            let _ = format_args!($($arg)*);
        }
    }};
}

/// Log a warning (rejected command, bad input) to the host console.
#[macro_export]
macro_rules! engine_warn {
    ($($arg:tt)*) => {{
        #[cfg(target_arch = "wasm32")]
        {
            let msg = format!($($arg)*);
            $crate::web_sys::console::warn_1(&msg.into());
        }
        #[cfg(not(target_arch = "wasm32"))]
        {
            let _ = format_args!($($arg)*);
        }
    }};
}
