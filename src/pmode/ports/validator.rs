//! Validator port for profile conformance checks.

use crate::pmode::domain::{ErrorList, PMode, ProfileId, SignalMessageHeader, UserMessageHeader};

/// Checks PModes and message headers against one interoperability profile.
///
/// # Implementation Notes
///
/// Implementations must:
/// - append one entry per violation to the caller's [`ErrorList`] and never
///   stop at the first violation
/// - skip only the sub-tree whose subject is absent, after reporting that
///   absence
/// - be stateless and thread-safe so one instance can serve concurrent
///   callers
pub trait ProfileValidator: Send + Sync {
    /// Returns the profile this validator enforces.
    fn profile_id(&self) -> &ProfileId;

    /// Appends every profile violation of `pmode` to `errors`.
    fn validate_pmode(&self, pmode: &PMode, errors: &mut ErrorList);

    /// Appends every profile violation of a user message header to `errors`.
    fn validate_user_message(&self, header: &UserMessageHeader, errors: &mut ErrorList);

    /// Appends every profile violation of a signal message header to
    /// `errors`.
    fn validate_signal_message(&self, header: &SignalMessageHeader, errors: &mut ErrorList);
}
