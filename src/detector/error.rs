//! Error types for the detector layer.

use thiserror::Error;

/// Error type for starting a payment watcher.
///
/// Start-time validation is the only fallible part of the watcher;
/// once polling has begun there is no fatal error state.
#[derive(Debug, Error)]
pub enum StartError {
    /// The subject id was empty or blank. Polling never begins and the
    /// fetcher is never invoked.
    #[error("Subject id must not be empty")]
    EmptySubject,
}
