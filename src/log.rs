// src/log.rs
//! Logging shim.
//!
//! With the `tracing` feature enabled the macros come from the `tracing`
//! crate; without it they expand to nothing.

#[cfg(feature = "tracing")]
pub(crate) use tracing::{debug, trace};

#[cfg(not(feature = "tracing"))]
mod noop {
    macro_rules! debug {
        ($($arg:tt)*) => {};
    }

    macro_rules! trace {
        ($($arg:tt)*) => {};
    }

    pub(crate) use debug;
    pub(crate) use trace;
}

#[cfg(not(feature = "tracing"))]
pub(crate) use noop::{debug, trace};
