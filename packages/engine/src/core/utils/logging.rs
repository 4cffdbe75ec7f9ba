//! Console logging macros
//!
//! In the browser: forwarded to `console.log` / `console.warn` through web-sys
//! Elsewhere: the arguments are still type-checked, nothing is printed
//!
//! Usage:
//! ```rust
//! use maze_engine::{console_log, console_warn};
//!
//! let size = 15;
//! console_log!("maze generated: {}x{}", size, size);
//! console_warn!("solve rejected: run already active");
//! ```

/// Log an informational line to the browser console.
#[macro_export]
macro_rules! console_log {
    ($($arg:tt)*) => {{
        #[cfg(target_arch = "wasm32")]
        {
            web_sys::console::log_1(&wasm_bindgen::JsValue::from(format!($($arg)*)));
        }
        #[cfg(not(target_arch = "wasm32"))]
        {
            let _ = format_args!($($arg)*);
        }
    }};
}

/// Log a warning to the browser console.
#[macro_export]
macro_rules! console_warn {
    ($($arg:tt)*) => {{
        #[cfg(target_arch = "wasm32")]
        {
            web_sys::console::warn_1(&wasm_bindgen::JsValue::from(format!($($arg)*)));
        }
        #[cfg(not(target_arch = "wasm32"))]
        {
            let _ = format_args!($($arg)*);
        }
    }};
}

#[cfg(test)]
mod tests {
    #[test]
    fn test_log_macros_accept_format_args() {
        let w = 3;
        console_log!("grid {}x{}", w, w);
        console_warn!("plain message");
    }
}
