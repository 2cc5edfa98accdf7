//! Crate-internal `trace!`.
//!
//! With the `logger` feature this is `log::trace!`. Without it the macro still type-checks its
//! format arguments but expands to dead code, so call sites need no `cfg` of their own.

#[cfg(feature = "logger")]
pub(crate) use log::trace;

#[cfg(not(feature = "logger"))]
macro_rules! trace {
    ($($arg:tt)+) => {
        if false {
            let _ = ::std::format_args!($($arg)+);
        }
    };
}

#[cfg(not(feature = "logger"))]
pub(crate) use trace;
