//! Strategy port for deriving PMode identifiers from the two parties.

use crate::pmode::domain::{PModeId, PModeParty};

/// Derives the identifier of a PMode from its initiator and responder.
///
/// Implementations are pure: the same pair always yields the same
/// identifier and the result is never empty.
pub trait PModeIdProvider: Send + Sync {
    /// Returns the identifier for the PMode between `initiator` and
    /// `responder`.
    fn pmode_id(&self, initiator: &PModeParty, responder: &PModeParty) -> PModeId;
}
