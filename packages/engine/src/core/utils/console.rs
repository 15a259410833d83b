//! Console logging
//!
//! wasm32: routed to the browser console through `web_sys::console`.
//! Native: stderr in debug builds, silent in release.
//!
//! Usage:
//! ```rust
//! use tanks_engine::console_log;
//!
//! let bricks = 36;
//! console_log!("level reset: {} bricks", bricks);
//! ```

#[macro_export]
macro_rules! console_log {
    ($($arg:tt)*) => {{
        #[cfg(target_arch = "wasm32")]
        {
            $crate::web_sys::console::log_1(&format!($($arg)*).into());
        }
        #[cfg(all(not(target_arch = "wasm32"), debug_assertions))]
        {
            eprintln!($($arg)*);
        }
        #[cfg(all(not(target_arch = "wasm32"), not(debug_assertions)))]
        {
            let _ = format_args!($($arg)*);
        }
    }};
}

#[macro_export]
macro_rules! console_warn {
    ($($arg:tt)*) => {{
        #[cfg(target_arch = "wasm32")]
        {
            $crate::web_sys::console::warn_1(&format!($($arg)*).into());
        }
        #[cfg(all(not(target_arch = "wasm32"), debug_assertions))]
        {
            eprintln!("warning: {}", format_args!($($arg)*));
        }
        #[cfg(all(not(target_arch = "wasm32"), not(debug_assertions)))]
        {
            let _ = format_args!($($arg)*);
        }
    }};
}
