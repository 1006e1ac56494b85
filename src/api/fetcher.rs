//! Payment fetching trait consumed by the status watcher.

use super::{ApiError, PaymentRecord};

/// Trait for fetching the current payment records of one subject.
///
/// # Design
///
/// - The watcher depends on this trait, never on a concrete client,
///   enabling dependency injection for testing with mock implementations
/// - Implementations must return the *complete current* record set on
///   every call (not a delta); the watcher performs its own diffing
/// - Record order should follow the backend's response order; the
///   watcher reports transitions in exactly that order
pub trait PaymentFetcher: Send + Sync {
    /// Fetches the current payment records for the given subject.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] when the records cannot be retrieved or
    /// decoded. The watcher treats every error as transient.
    fn fetch(
        &self,
        subject_id: &str,
    ) -> impl std::future::Future<Output = Result<Vec<PaymentRecord>, ApiError>> + Send;
}
