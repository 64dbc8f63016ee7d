//! Port trait definitions for the PMode subsystem.
//!
//! Ports describe what the conformance layer needs from its surroundings.
//! Adapters in [`crate::pmode::adapters`] provide the implementations.

pub mod id_provider;
pub mod store;
pub mod validator;

pub use id_provider::PModeIdProvider;
pub use store::{PModeStore, PModeStoreError, PModeStoreResult};
pub use validator::ProfileValidator;
