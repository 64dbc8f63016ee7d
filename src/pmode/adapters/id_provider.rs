//! Built-in PMode identifier strategies.

use crate::pmode::{
    domain::{PModeId, PModeParty},
    ports::PModeIdProvider,
};

/// Returns the same identifier for every party pair.
///
/// # Examples
///
/// ```
/// use as4_pmode::pmode::adapters::StaticPModeIdProvider;
/// use as4_pmode::pmode::domain::{
///     DEFAULT_INITIATOR_ROLE, DEFAULT_RESPONDER_ROLE, PModeId, PModeParty,
/// };
/// use as4_pmode::pmode::ports::PModeIdProvider;
///
/// let provider = StaticPModeIdProvider::new(PModeId::new("fixed").expect("id"));
/// let a = PModeParty::new("A", DEFAULT_INITIATOR_ROLE).expect("party");
/// let b = PModeParty::new("B", DEFAULT_RESPONDER_ROLE).expect("party");
/// assert_eq!(provider.pmode_id(&a, &b).as_str(), "fixed");
/// assert_eq!(provider.pmode_id(&b, &a).as_str(), "fixed");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StaticPModeIdProvider {
    id: PModeId,
}

impl StaticPModeIdProvider {
    /// Creates a provider that always returns `id`.
    #[must_use]
    pub const fn new(id: PModeId) -> Self {
        Self { id }
    }
}

impl PModeIdProvider for StaticPModeIdProvider {
    fn pmode_id(&self, _initiator: &PModeParty, _responder: &PModeParty) -> PModeId {
        self.id.clone()
    }
}

/// Derives `initiator-responder` from the full party identifiers.
///
/// The separator never appears inside an escaped segment, so distinct pairs
/// always produce distinct identifiers. Segments without `%` or `-` are used
/// verbatim.
///
/// # Examples
///
/// ```
/// use as4_pmode::pmode::adapters::DynamicPModeIdProvider;
/// use as4_pmode::pmode::domain::{DEFAULT_INITIATOR_ROLE, DEFAULT_RESPONDER_ROLE, PModeParty};
/// use as4_pmode::pmode::ports::PModeIdProvider;
///
/// let initiator = PModeParty::new("TestInitiator", DEFAULT_INITIATOR_ROLE).expect("party");
/// let responder = PModeParty::new("TestResponder", DEFAULT_RESPONDER_ROLE).expect("party");
/// let id = DynamicPModeIdProvider.pmode_id(&initiator, &responder);
/// assert_eq!(id.as_str(), "TestInitiator-TestResponder");
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DynamicPModeIdProvider;

/// Separator placed between the two party segments.
pub const DYNAMIC_ID_SEPARATOR: char = '-';

impl PModeIdProvider for DynamicPModeIdProvider {
    fn pmode_id(&self, initiator: &PModeParty, responder: &PModeParty) -> PModeId {
        let id = format!(
            "{}{DYNAMIC_ID_SEPARATOR}{}",
            escape_segment(&initiator.id()),
            escape_segment(&responder.id())
        );
        PModeId::from_non_empty(id)
    }
}

fn escape_segment(segment: &str) -> String {
    if !segment.contains(['%', DYNAMIC_ID_SEPARATOR]) {
        return segment.to_owned();
    }
    let mut escaped = String::with_capacity(segment.len() + 4);
    for c in segment.chars() {
        match c {
            '%' => escaped.push_str("%25"),
            DYNAMIC_ID_SEPARATOR => escaped.push_str("%2D"),
            other => escaped.push(other),
        }
    }
    escaped
}
