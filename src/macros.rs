/// Emits a `tracing::debug!` event when the `tracing` feature is enabled.
///
/// Expands to an empty block otherwise, so call sites need no `cfg` of their own.
macro_rules! debug_event {
    ($($arg:tt)*) => {{
        #[cfg(feature = "tracing")]
        {
            tracing::debug!($($arg)*);
        }
    }};
}

/// Emits a `tracing::trace!` event when the `tracing` feature is enabled.
macro_rules! trace_event {
    ($($arg:tt)*) => {{
        #[cfg(feature = "tracing")]
        {
            tracing::trace!($($arg)*);
        }
    }};
}
