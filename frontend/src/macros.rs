//! Small crate-wide convenience macros.
//!
//! The logging macros route to the browser console when compiled for
//! `wasm32` and to stderr everywhere else, so reducers that log can still be
//! exercised by a plain `cargo test` on the host.

#[doc(hidden)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    Debug,
    Warn,
    Error,
}

#[doc(hidden)]
pub fn emit(level: LogLevel, line: &str) {
    #[cfg(target_arch = "wasm32")]
    {
        let value = wasm_bindgen::JsValue::from_str(line);
        match level {
            LogLevel::Debug => web_sys::console::log_1(&value),
            LogLevel::Warn => web_sys::console::warn_1(&value),
            LogLevel::Error => web_sys::console::error_1(&value),
        }
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        let tag = match level {
            LogLevel::Debug => "debug",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        };
        eprintln!("[{}] {}", tag, line);
    }
}

/// Console log that is compiled in for debug builds only.
///
/// ```rust,ignore
/// debug_log!("toggled {:?} -> {:?}", group, index);
/// ```
#[macro_export]
macro_rules! debug_log {
    ($($arg:tt)*) => {
        if cfg!(debug_assertions) {
            $crate::macros::emit($crate::macros::LogLevel::Debug, &format!($($arg)*));
        }
    };
}

/// `console.warn` with `format!` arguments.
#[macro_export]
macro_rules! warn_log {
    ($($arg:tt)*) => {
        $crate::macros::emit($crate::macros::LogLevel::Warn, &format!($($arg)*))
    };
}

/// `console.error` with `format!` arguments.
#[macro_export]
macro_rules! error_log {
    ($($arg:tt)*) => {
        $crate::macros::emit($crate::macros::LogLevel::Error, &format!($($arg)*))
    };
}

/// Acquire a **mutable** borrow from a `RefCell` (or `Rc<RefCell>`).
/// If another mutable borrow is still active the call panics – the standard
/// panic message emitted by `RefCell::borrow_mut()` is preserved to keep the
/// macro zero-cost.
///
/// ```rust,ignore
/// use std::cell::RefCell;
/// let cell = RefCell::new(1);
/// {
///     let mut n = mut_borrow!(cell);
///     *n += 1;
/// }
/// assert_eq!(*cell.borrow(), 2);
/// ```
#[macro_export]
macro_rules! mut_borrow {
    ($cell:expr) => {
        $cell.borrow_mut()
    };
}
