//! Error types for the label tracker domain.
//!
//! [`IssueTrackerError`] covers failures reported by an [`crate::IssueTracker`]
//! implementation. [`TrackerError`] is the run-level error: anything that
//! aborts a synchronisation run.
//!
//! There is no retry classification. Every error is fatal for the run that
//! produced it; the next scheduled run starts again from scratch.

use thiserror::Error;

// ---------------------------------------------------------------------------
// Collaborator errors
// ---------------------------------------------------------------------------

/// Failures reported by the issue tracker collaborator.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IssueTrackerError {
    /// The tracker answered with a non-success status.
    #[error("issue tracker returned HTTP {status}: {message}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// Message extracted from the response body, or the status reason.
        message: String,
    },

    /// The request never produced a response (DNS, TLS, connection reset, ...).
    #[error("issue tracker request failed: {message}")]
    Transport { message: String },

    /// The response could not be decoded into the expected shape.
    #[error("could not decode issue tracker response: {message}")]
    Decode { message: String },

    /// The request could not be built from the supplied arguments.
    #[error("invalid issue tracker request: {message}")]
    InvalidRequest { message: String },
}

// ---------------------------------------------------------------------------
// Run-level errors
// ---------------------------------------------------------------------------

/// Errors that abort a synchronisation run.
#[derive(Debug, Error)]
pub enum TrackerError {
    /// The run configuration is missing or invalid.
    ///
    /// Produced before any network call is made.
    #[error("Configuration error: {message}")]
    Configuration { message: String },

    /// A call to the issue tracker failed.
    #[error(transparent)]
    IssueTracker(#[from] IssueTrackerError),
}
