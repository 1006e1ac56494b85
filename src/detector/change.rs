//! Payment status transition classification.

/// The kind of payment status change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChangeKind {
    /// A payment id not seen in any previous cycle.
    NewPayment,
    /// The canonical happy path: `PENDING` became `SUCCESS`
    /// (matched case-insensitively).
    PendingToSuccess,
    /// Any other change between two observed statuses.
    StatusChanged,
}

impl ChangeKind {
    /// Returns the wire/display name of this change kind.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::NewPayment => "NEW_PAYMENT",
            Self::PendingToSuccess => "PENDING_TO_SUCCESS",
            Self::StatusChanged => "STATUS_CHANGED",
        }
    }
}

impl std::fmt::Display for ChangeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Classifies the transition between the last observed status and the
/// current one.
///
/// This is a pure function; the watcher calls it once per record per
/// cycle.
///
/// # Rules
///
/// - No previous status: [`ChangeKind::NewPayment`]
/// - Statuses equal (case-sensitive): no transition
/// - Previous is `pending` and current is `success`, matched
///   case-insensitively: [`ChangeKind::PendingToSuccess`]
/// - Anything else: [`ChangeKind::StatusChanged`]
#[must_use]
pub fn classify(previous: Option<&str>, current: &str) -> Option<ChangeKind> {
    match previous {
        None => Some(ChangeKind::NewPayment),
        Some(prev) if prev == current => None,
        Some(prev) => {
            if prev.eq_ignore_ascii_case("pending") && current.eq_ignore_ascii_case("success") {
                Some(ChangeKind::PendingToSuccess)
            } else {
                Some(ChangeKind::StatusChanged)
            }
        }
    }
}

#[cfg(test)]
#[path = "change_tests.rs"]
mod tests;
