//! Domain model for PModes and the message headers they govern.
//!
//! Everything here is plain data plus invariant checks. Profile rules live in
//! [`crate::pmode::validation`]; persistence lives behind
//! [`crate::pmode::ports`].

mod algorithms;
mod error;
mod exchange;
mod header;
mod ids;
mod issue;
mod leg;
mod party;
mod pmode;
mod reception;
mod tri_state;

pub use algorithms::{
    DigestAlgorithm, EncryptionAlgorithm, SignatureAlgorithm, SoapVersion, WssVersion,
};
pub use error::{PModeDomainError, ParseEnumError};
pub use exchange::{Mep, MepBinding};
pub use header::{
    CollaborationInfo, MESSAGE_ID_SUFFIX, MessageInfo, MessageProperty, PartyBlock, PartyId,
    PartyInfo, SignalKind, SignalMessageHeader, UserMessageHeader,
};
pub use ids::{PModeId, ProfileId};
pub use issue::{ErrorList, IssueCategory, IssueLevel, ProfileValidationError, ValidationIssue};
pub use leg::{
    DEFAULT_ACTION, DEFAULT_MPC, DEFAULT_SERVICE, PModeAddressList, PModeLeg,
    PModeLegBusinessInformation, PModeLegErrorHandling, PModeLegProtocol, PModeLegReliability,
    PModeLegSecurity, ReceiptReplyPattern,
};
pub use party::{DEFAULT_INITIATOR_ROLE, DEFAULT_RESPONDER_ROLE, PModeParty};
pub use pmode::{DEFAULT_AGREEMENT_ID, PMode};
pub use reception::{
    CompressionType, DEFAULT_MAX_RETRIES, DEFAULT_RETRY_INTERVAL, PModePayloadService,
    PModeReceptionAwareness,
};
pub use tri_state::TriState;
