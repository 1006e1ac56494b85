//! Payment status change detection.
//!
//! This module provides:
//! - Transition classification ([`ChangeKind`], [`classify`])
//! - The polling watcher ([`PaymentWatcher`], [`WatchHandle`])
//! - Error handling ([`StartError`])
//!
//! The watcher polls a [`crate::api::PaymentFetcher`] at a fixed
//! interval, diffs each result set against the last observed status per
//! payment id, and reports every transition to a caller-supplied
//! callback. A failed fetch never stops the loop; the only way polling
//! ends is [`WatchHandle::stop`] (or dropping the handle).

mod change;
mod error;
mod watcher;

pub use change::{ChangeKind, classify};
pub use error::StartError;
pub use watcher::{DEFAULT_INTERVAL, PaymentWatcher, WatchHandle};
