//! Progress notification port
//!
//! Defines the interface for reporting lookup progress to a view.

use courtwatch_domain::UseCase;

/// Callback for lookup progress
///
/// Implementations live in the presentation layer (spinners, plain text).
pub trait LookupProgressNotifier: Send + Sync {
    /// Called right before the backend call
    fn on_lookup_start(&self, use_case: UseCase);

    /// Called when the call resolves; `success` is false for fallback values
    fn on_lookup_complete(&self, use_case: UseCase, success: bool);
}

/// No-op progress notifier for when progress reporting is not needed
pub struct NoProgress;

impl LookupProgressNotifier for NoProgress {
    fn on_lookup_start(&self, _use_case: UseCase) {}
    fn on_lookup_complete(&self, _use_case: UseCase, _success: bool) {}
}
