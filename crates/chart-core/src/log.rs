// File: crates/chart-core/src/log.rs
// Summary: Conditional logging macros.
// Notes:
// - With the `tracing` feature these re-export the `tracing` macros.
// - Without it they expand to nothing, so the core carries no logging cost.

#[cfg(feature = "tracing")]
pub use tracing::{debug, warn};

#[cfg(not(feature = "tracing"))]
#[macro_export]
macro_rules! debug {
    ($($arg:tt)*) => {};
}

#[cfg(not(feature = "tracing"))]
#[macro_export]
macro_rules! warn {
    ($($arg:tt)*) => {};
}

#[cfg(not(feature = "tracing"))]
pub use crate::{debug, warn};
