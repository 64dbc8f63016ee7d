//! The PMode aggregate.

use super::{
    Mep, MepBinding, PModeDomainError, PModeId, PModeLeg, PModeParty, PModePayloadService,
    PModeReceptionAwareness,
};
use serde::{Deserialize, Serialize};

/// Default agreement reference of generated PModes.
pub const DEFAULT_AGREEMENT_ID: &str = "urn:as4:agreement";

/// Processing Mode negotiated between an initiator and a responder.
///
/// A PMode is assembled in memory, checked against a profile and only then
/// used or persisted. Mutators exist so callers can adjust a factory-built
/// PMode before first use; nothing mutates a PMode once it is in use.
///
/// # Examples
///
/// ```
/// use as4_pmode::pmode::domain::{
///     DEFAULT_INITIATOR_ROLE, DEFAULT_RESPONDER_ROLE, Mep, MepBinding, PMode, PModeId,
///     PModeLeg, PModeParty,
/// };
///
/// let initiator = PModeParty::new("A", DEFAULT_INITIATOR_ROLE).expect("initiator");
/// let responder = PModeParty::new("B", DEFAULT_RESPONDER_ROLE).expect("responder");
/// let pmode = PMode::new(
///     PModeId::new("A-B").expect("id"),
///     initiator,
///     responder,
///     Mep::OneWay,
///     MepBinding::Push,
///     PModeLeg::default(),
/// );
/// assert!(pmode.validate_structure().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PMode {
    id: PModeId,
    initiator: PModeParty,
    responder: PModeParty,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    agreement: Option<String>,
    mep: Mep,
    mep_binding: MepBinding,
    #[serde(default)]
    leg1: Option<PModeLeg>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    leg2: Option<PModeLeg>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    payload_service: Option<PModePayloadService>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    reception_awareness: Option<PModeReceptionAwareness>,
}

impl PMode {
    /// Creates a PMode with its first leg and no optional parts.
    #[must_use]
    pub const fn new(
        id: PModeId,
        initiator: PModeParty,
        responder: PModeParty,
        mep: Mep,
        mep_binding: MepBinding,
        leg1: PModeLeg,
    ) -> Self {
        Self {
            id,
            initiator,
            responder,
            agreement: None,
            mep,
            mep_binding,
            leg1: Some(leg1),
            leg2: None,
            payload_service: None,
            reception_awareness: None,
        }
    }

    /// Sets the agreement reference.
    #[must_use]
    pub fn with_agreement(mut self, agreement: impl Into<String>) -> Self {
        self.agreement = Some(agreement.into());
        self
    }

    /// Sets the second leg.
    #[must_use]
    pub fn with_leg2(mut self, leg2: PModeLeg) -> Self {
        self.leg2 = Some(leg2);
        self
    }

    /// Sets the payload service.
    #[must_use]
    pub const fn with_payload_service(mut self, payload_service: PModePayloadService) -> Self {
        self.payload_service = Some(payload_service);
        self
    }

    /// Sets the reception awareness policy.
    #[must_use]
    pub fn with_reception_awareness(
        mut self,
        reception_awareness: PModeReceptionAwareness,
    ) -> Self {
        self.reception_awareness = Some(reception_awareness);
        self
    }

    /// Returns the identifier.
    #[must_use]
    pub const fn id(&self) -> &PModeId {
        &self.id
    }

    /// Returns the initiating party.
    #[must_use]
    pub const fn initiator(&self) -> &PModeParty {
        &self.initiator
    }

    /// Returns the responding party.
    #[must_use]
    pub const fn responder(&self) -> &PModeParty {
        &self.responder
    }

    /// Returns the agreement reference, if any.
    #[must_use]
    pub fn agreement(&self) -> Option<&str> {
        self.agreement.as_deref()
    }

    /// Returns the message exchange pattern.
    #[must_use]
    pub const fn mep(&self) -> Mep {
        self.mep
    }

    /// Returns the MEP binding.
    #[must_use]
    pub const fn mep_binding(&self) -> MepBinding {
        self.mep_binding
    }

    /// Returns the first leg, if present.
    #[must_use]
    pub const fn leg1(&self) -> Option<&PModeLeg> {
        self.leg1.as_ref()
    }

    /// Returns the second leg, if present.
    #[must_use]
    pub const fn leg2(&self) -> Option<&PModeLeg> {
        self.leg2.as_ref()
    }

    /// Returns the payload service, if any.
    #[must_use]
    pub const fn payload_service(&self) -> Option<&PModePayloadService> {
        self.payload_service.as_ref()
    }

    /// Returns the reception awareness policy, if any.
    #[must_use]
    pub const fn reception_awareness(&self) -> Option<&PModeReceptionAwareness> {
        self.reception_awareness.as_ref()
    }

    /// Replaces the message exchange pattern.
    pub const fn set_mep(&mut self, mep: Mep) {
        self.mep = mep;
    }

    /// Replaces the MEP binding.
    pub const fn set_mep_binding(&mut self, mep_binding: MepBinding) {
        self.mep_binding = mep_binding;
    }

    /// Replaces the first leg.
    pub fn set_leg1(&mut self, leg1: Option<PModeLeg>) {
        self.leg1 = leg1;
    }

    /// Replaces the second leg.
    pub fn set_leg2(&mut self, leg2: Option<PModeLeg>) {
        self.leg2 = leg2;
    }

    /// Replaces the reception awareness policy.
    pub fn set_reception_awareness(&mut self, reception_awareness: Option<PModeReceptionAwareness>) {
        self.reception_awareness = reception_awareness;
    }

    /// Returns mutable access to the first leg, if present.
    pub const fn leg1_mut(&mut self) -> Option<&mut PModeLeg> {
        self.leg1.as_mut()
    }

    /// Returns mutable access to the second leg, if present.
    pub const fn leg2_mut(&mut self) -> Option<&mut PModeLeg> {
        self.leg2.as_mut()
    }

    /// Returns the legs that are present, paired with their 1-based number.
    pub fn legs(&self) -> impl Iterator<Item = (u8, &PModeLeg)> {
        [(1_u8, self.leg1.as_ref()), (2_u8, self.leg2.as_ref())]
            .into_iter()
            .filter_map(|(number, leg)| leg.map(|present| (number, present)))
    }

    /// Checks the profile-independent invariants.
    ///
    /// # Errors
    ///
    /// Returns the first violated invariant: blank party identifier, missing
    /// leg 1, missing leg 2 on a two-way PMode or a leg 2 on a one-way PMode.
    pub fn validate_structure(&self) -> Result<(), PModeDomainError> {
        if self.initiator.has_blank_id() {
            return Err(PModeDomainError::EmptyPartyId("initiator"));
        }
        if self.responder.has_blank_id() {
            return Err(PModeDomainError::EmptyPartyId("responder"));
        }
        if self.leg1.is_none() {
            return Err(PModeDomainError::MissingLeg1(self.id.to_string()));
        }
        match (self.mep.is_two_way(), self.leg2.is_some()) {
            (true, false) => Err(PModeDomainError::MissingLeg2(self.id.to_string())),
            (false, true) => Err(PModeDomainError::UnexpectedLeg2(self.id.to_string())),
            _ => Ok(()),
        }
    }
}
