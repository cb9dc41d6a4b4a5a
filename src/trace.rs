//! Logging hooks for the deque.
//!
//! Enable with `--features tracing`. Without the feature every macro expands
//! to nothing.

/// Install a `tracing` subscriber that prints deque events.
///
/// Honors `RUST_LOG`; falls back to `block_deque=trace`. A second call is a
/// no-op, so tests may call it freely. Does nothing without the `tracing`
/// feature.
#[cfg(feature = "tracing")]
pub fn init_tracing() {
   use tracing_subscriber::{fmt, prelude::*, EnvFilter};

   let filter =
      EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("block_deque=trace"));

   let _ = tracing_subscriber::registry()
      .with(
         fmt::layer()
            .with_target(true)
            .with_thread_ids(true)
            .with_thread_names(true)
            .with_file(false)
            .with_line_number(false)
            .with_timer(fmt::time::uptime()),
      )
      .with(filter)
      .try_init();
}

#[cfg(not(feature = "tracing"))]
pub const fn init_tracing() {}

#[cfg(feature = "tracing")]
pub(crate) use tracing::{debug, trace};

#[cfg(not(feature = "tracing"))]
macro_rules! trace_noop {
   ($($arg:tt)*) => {};
}

#[cfg(not(feature = "tracing"))]
macro_rules! debug_noop {
   ($($arg:tt)*) => {};
}

#[cfg(not(feature = "tracing"))]
pub(crate) use debug_noop as debug;
#[cfg(not(feature = "tracing"))]
pub(crate) use trace_noop as trace;
