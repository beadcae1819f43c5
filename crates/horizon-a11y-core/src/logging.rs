//! Logging facilities for the accessibility bridge.
//!
//! The bridge never surfaces errors to the end user. Dropped notifications,
//! duplicate registrations and unhandled selections are normal traffic and are
//! only reported through `tracing`. Install a subscriber to see them:
//!
//! ```ignore
//! tracing_subscriber::fmt()
//!     .with_env_filter("horizon_a11y=trace")
//!     .init();
//! ```

/// Span names used by the bridge.
pub mod span_names {
    /// A widget is being added to the accessibility tree.
    pub const ADD: &str = "horizon_a11y::add";
    /// A widget is being removed from the accessibility tree.
    pub const REMOVE: &str = "horizon_a11y::remove";
    /// The bridge is shutting down.
    pub const SHUTDOWN: &str = "horizon_a11y::shutdown";
    /// A full tree update is being exported.
    pub const EXPORT: &str = "horizon_a11y::export";
}

/// Target names for log filtering.
pub mod targets {
    /// Bridge lifecycle: add, remove, shutdown.
    pub const BRIDGE: &str = "horizon_a11y::bridge";
    /// Notification dispatch.
    pub const DISPATCH: &str = "horizon_a11y::dispatch";
    /// Accessible tree mutation and export.
    pub const TREE: &str = "horizon_a11y::tree";
    /// Platform adapter.
    pub const PLATFORM: &str = "horizon_a11y::platform";
}

/// Trace-level event under the bridge target.
#[macro_export]
macro_rules! a11y_trace {
    ($($arg:tt)*) => {
        tracing::trace!(target: "horizon_a11y::bridge", $($arg)*)
    };
}

/// Debug-level event under the bridge target.
#[macro_export]
macro_rules! a11y_debug {
    ($($arg:tt)*) => {
        tracing::debug!(target: "horizon_a11y::bridge", $($arg)*)
    };
}

/// Warn-level event under the bridge target.
#[macro_export]
macro_rules! a11y_warn {
    ($($arg:tt)*) => {
        tracing::warn!(target: "horizon_a11y::bridge", $($arg)*)
    };
}
