//! Shared data model for `triage`.
//!
//! * [`scan`]: what a parsed nmap report looks like to the rest of the workspace.
//! * [`targets`]: target list definitions and the built-in catalogs.
//! * [`config`]: run-wide settings handed to every command.

pub mod config;
pub mod error;
pub mod scan;
pub mod targets;

#[doc(hidden)]
pub use tracing;

/// Logs a completed step. Rendered with a distinct marker by the CLI formatter.
#[macro_export]
macro_rules! success {
    ($($arg:tt)*) => {
        $crate::tracing::info!(target: "triage::success", $($arg)*)
    };
}
