/// Conditional logging module for development builds
///
/// The `log!` macro provides informational console logging that is compiled out
/// in production (release) builds by default. Recoverable problems go through
/// `log_warn!`, which is always compiled in on the browser target.
///
/// Logging is enabled when either:
/// - Building in debug mode (`cfg(debug_assertions)`)
/// - The `console_logging` feature is explicitly enabled
///
/// Both macros expand to nothing off `wasm32`, so native unit tests never reach
/// into browser APIs.
///
/// # Examples
///
/// ```rust,ignore
/// use induction_planner::logging::log;
///
/// log!("Loaded {} trains", 25);
/// ```
/// Conditionally log to console in development builds
#[macro_export]
macro_rules! log {
    ($($arg:expr),+ $(,)?) => {
        #[cfg(all(target_arch = "wasm32", any(debug_assertions, feature = "console_logging")))]
        {
            web_sys::console::log_1(&format!($($arg),+).into());
        }
        #[cfg(not(all(target_arch = "wasm32", any(debug_assertions, feature = "console_logging"))))]
        {
            let _ = ($(&$arg,)+);
        }
    };
}

/// Log a warning to the browser console
#[macro_export]
macro_rules! log_warn {
    ($($arg:expr),+ $(,)?) => {
        #[cfg(target_arch = "wasm32")]
        {
            web_sys::console::warn_1(&format!($($arg),+).into());
        }
        #[cfg(not(target_arch = "wasm32"))]
        {
            let _ = ($(&$arg,)+);
        }
    };
}

pub use crate::log;
pub use crate::log_warn;
