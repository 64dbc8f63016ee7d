//! Profile conformance validation.
//!
//! Profiles are rule tables ([`ProfileRules`]); one generic engine
//! ([`ProfileCompatibilityValidator`]) evaluates any table through the
//! individual rules in [`rules`].

pub mod profile;
pub mod registry;
pub mod rules;
pub mod service;

pub use profile::{ErrorHandlingRules, FlagRequirement, ProfileRules, ReceptionAwarenessRules};
pub use registry::ProfileRegistry;
pub use service::ProfileCompatibilityValidator;
