//! Formrelay Core - Form submission relay

#![deny(missing_docs)]
#![deny(clippy::missing_errors_doc)]
#![warn(clippy::too_many_lines)]
//!
//! Captures a form's fields at submission time and relays them as a
//! multipart/form-data POST to a fixed endpoint, surfacing exactly one
//! user-facing notification per attempt.

pub mod config;
pub mod errors;
pub mod form;
pub mod handler;
pub mod notify;
pub mod snapshot;
pub mod tracing_setup;

// Re-export main types
pub use config::{FormConfig, NetworkConfig, RelayConfig};
pub use errors::SubmitError;
pub use form::{FormSource, MemoryForm};
pub use handler::SubmissionHandler;
pub use notify::{ConsoleNotifier, MemoryNotifier, Notifier};
pub use snapshot::FormSnapshot;

/// Convenience type alias for Results with SubmitError.
pub type Result<T> = std::result::Result<T, SubmitError>;
