//! Polling payment status watcher.
//!
//! One watcher instance owns one polling task: fetch the subject's
//! payment records, diff each record's status against the snapshot of
//! the previous cycle, report transitions, sleep, repeat. Cancellation
//! is cooperative and checked at cycle boundaries; an in-flight fetch
//! is never aborted.

use std::collections::HashMap;
use std::panic::{AssertUnwindSafe, catch_unwind};
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use tokio::sync::Notify;
use tokio::task::JoinHandle;

use crate::api::{PaymentFetcher, PaymentRecord};

use super::change::{ChangeKind, classify};
use super::error::StartError;

/// Default pause between polling cycles.
pub const DEFAULT_INTERVAL: Duration = Duration::from_millis(500);

/// Polling payment status watcher.
///
/// Periodically fetches one subject's payment records through a
/// [`PaymentFetcher`] and invokes a callback for every detected status
/// transition.
///
/// # Type Parameters
///
/// * `F` - The [`PaymentFetcher`] implementation used for polling
///
/// # Example
///
/// ```ignore
/// use shop_console::detector::PaymentWatcher;
///
/// let watcher = PaymentWatcher::new(payments_api);
/// let handle = watcher.start("USER_001", |record, kind| {
///     println!("{}: {} -> {}", kind, record.id, record.status);
/// })?;
/// // ...
/// handle.stop();
/// ```
pub struct PaymentWatcher<F> {
    fetcher: F,
    interval: Duration,
}

impl<F> PaymentWatcher<F>
where
    F: PaymentFetcher + Send + 'static,
{
    /// Creates a watcher polling at the default 500 ms interval.
    #[must_use]
    pub const fn new(fetcher: F) -> Self {
        Self {
            fetcher,
            interval: DEFAULT_INTERVAL,
        }
    }

    /// Sets the pause between cycles.
    ///
    /// The interval is measured from the end of one cycle's processing
    /// to the start of the next fetch, so a slow fetch lengthens the
    /// effective period rather than letting cycles stack up.
    #[must_use]
    pub const fn with_interval(mut self, interval: Duration) -> Self {
        self.interval = interval;
        self
    }

    /// Returns the configured polling interval.
    #[must_use]
    pub const fn interval(&self) -> Duration {
        self.interval
    }

    /// Starts polling and returns the control handle synchronously.
    ///
    /// The first cycle begins immediately (no initial delay) on a
    /// spawned task. Its result set becomes the baseline: every
    /// record's status is recorded and no callbacks fire, so
    /// pre-existing records do not show up as a flood of new-payment
    /// notifications.
    ///
    /// From the second successful cycle on, `on_change` is invoked once
    /// per detected transition, synchronously and in the order the
    /// fetcher returned the records.
    ///
    /// # Errors
    ///
    /// Returns [`StartError::EmptySubject`] if `subject_id` is empty or
    /// blank; the fetcher is never invoked in that case.
    pub fn start<C>(self, subject_id: &str, on_change: C) -> Result<WatchHandle, StartError>
    where
        C: FnMut(&PaymentRecord, ChangeKind) + Send + 'static,
    {
        if subject_id.trim().is_empty() {
            return Err(StartError::EmptySubject);
        }

        let signal = Arc::new(StopSignal::new());
        let task = tokio::spawn(run_loop(
            self.fetcher,
            subject_id.to_string(),
            on_change,
            self.interval,
            Arc::clone(&signal),
        ));

        Ok(WatchHandle {
            signal,
            task: Some(task),
        })
    }
}

/// Control handle for a running watcher.
///
/// The only operation is stopping. Dropping the handle stops the
/// watcher as well, so a detached watcher cannot leak its task.
#[derive(Debug)]
pub struct WatchHandle {
    signal: Arc<StopSignal>,
    task: Option<JoinHandle<()>>,
}

impl WatchHandle {
    /// Requests the watcher to stop. Idempotent.
    ///
    /// No cycle starts after this call. A cycle already awaiting its
    /// fetch completes that cycle, including callback delivery, before
    /// the loop exits.
    pub fn stop(&self) {
        if !self.signal.stopped.swap(true, Ordering::SeqCst) {
            self.signal.notify.notify_one();
        }
    }

    /// Returns true once [`stop`](Self::stop) has been called.
    #[must_use]
    pub fn is_stopped(&self) -> bool {
        self.signal.stopped.load(Ordering::SeqCst)
    }

    /// Stops the watcher and waits for its polling task to exit.
    pub async fn shutdown(mut self) {
        self.stop();
        if let Some(task) = self.task.take() {
            // The loop only ends by observing the stop flag, so a join
            // error here can only be a panic already reported inside
            // the task.
            let _ = task.await;
        }
    }
}

impl Drop for WatchHandle {
    fn drop(&mut self) {
        self.stop();
    }
}

#[derive(Debug)]
struct StopSignal {
    stopped: AtomicBool,
    notify: Notify,
}

impl StopSignal {
    fn new() -> Self {
        Self {
            stopped: AtomicBool::new(false),
            notify: Notify::new(),
        }
    }

    fn is_stopped(&self) -> bool {
        self.stopped.load(Ordering::SeqCst)
    }
}

/// The polling loop. Runs until the stop signal is observed at a cycle
/// boundary.
async fn run_loop<F, C>(
    fetcher: F,
    subject_id: String,
    mut on_change: C,
    interval: Duration,
    signal: Arc<StopSignal>,
) where
    F: PaymentFetcher,
    C: FnMut(&PaymentRecord, ChangeKind) + Send,
{
    let mut snapshot: HashMap<String, String> = HashMap::new();
    let mut baseline_taken = false;

    loop {
        match fetcher.fetch(&subject_id).await {
            Ok(records) => {
                if baseline_taken {
                    process_cycle(&records, &mut snapshot, &mut on_change);
                } else {
                    for record in &records {
                        snapshot.insert(record.id.clone(), record.status.clone());
                    }
                    baseline_taken = true;
                    tracing::debug!(
                        subject = %subject_id,
                        records = records.len(),
                        "payment baseline recorded"
                    );
                }
            }
            // A failed cycle never touches the snapshot and never fires
            // callbacks; the next cycle retries unconditionally.
            Err(e) => {
                tracing::warn!(subject = %subject_id, error = %e, "payment fetch failed");
            }
        }

        if signal.is_stopped() {
            break;
        }
        tokio::select! {
            () = signal.notify.notified() => {}
            () = tokio::time::sleep(interval) => {}
        }
        if signal.is_stopped() {
            break;
        }
    }

    tracing::debug!(subject = %subject_id, "payment watcher stopped");
}

/// Diffs one cycle's records against the snapshot and delivers
/// callbacks, in the order the fetcher returned the records.
///
/// Every record's status is written back unconditionally, keeping the
/// snapshot authoritative even for statuses that round-trip within one
/// interval. Records present in the snapshot but absent from this cycle
/// are left untouched.
fn process_cycle<C>(
    records: &[PaymentRecord],
    snapshot: &mut HashMap<String, String>,
    on_change: &mut C,
) where
    C: FnMut(&PaymentRecord, ChangeKind),
{
    for record in records {
        let previous = snapshot.get(record.id.as_str()).map(String::as_str);
        if let Some(kind) = classify(previous, &record.status) {
            // A panicking callback must not take down the loop, and the
            // record's snapshot update still has to happen.
            let delivery = catch_unwind(AssertUnwindSafe(|| on_change(record, kind)));
            if delivery.is_err() {
                tracing::error!(payment = %record.id, kind = %kind, "change callback panicked");
            }
        }
        snapshot.insert(record.id.clone(), record.status.clone());
    }
}

#[cfg(test)]
#[path = "watcher_tests.rs"]
mod tests;
