//! Processing Mode (PMode) configuration and profile conformance.
//!
//! A PMode describes how two parties exchange AS4 messages: endpoint,
//! security, reliability and error reporting. Interoperability profiles
//! narrow the generic PMode schema; this module checks PModes and message
//! headers against such profiles and reports every violation.
//!
//! # Architecture
//!
//! The module follows hexagonal architecture principles:
//!
//! - **Domain**: Pure model types ([`domain::PMode`], [`domain::PModeLeg`], [`domain::ErrorList`], etc.)
//! - **Ports**: Abstract trait interfaces ([`ports::PModeStore`], [`ports::ProfileValidator`], [`ports::PModeIdProvider`])
//! - **Adapters**: Concrete implementations ([`adapters::InMemoryPModeStore`], [`adapters::FilePModeStore`], [`adapters::DynamicPModeIdProvider`])
//! - **Validation**: Profile rule tables and the rule engine
//! - **Services**: Registration that validates before persisting
//!
//! # Example
//!
//! ```
//! use as4_pmode::pmode::adapters::DynamicPModeIdProvider;
//! use as4_pmode::pmode::domain::{ErrorList, MepBinding};
//! use as4_pmode::pmode::ports::ProfileValidator;
//! use as4_pmode::pmode::validation::ProfileCompatibilityValidator;
//!
//! let validator = ProfileCompatibilityValidator::peppol();
//! let mut pmode = validator
//!     .rules()
//!     .create_pmode(
//!         "TestInitiator",
//!         "TestResponder",
//!         "https://ap.example.org/as4",
//!         &DynamicPModeIdProvider,
//!     )
//!     .expect("valid inputs");
//! pmode.set_mep_binding(MepBinding::Sync);
//!
//! let mut errors = ErrorList::new();
//! validator.validate_pmode(&pmode, &mut errors);
//! assert!(errors.contains_any(|issue| issue.text().contains("MEP binding")));
//! ```

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;
pub mod validation;

#[cfg(test)]
mod tests;
