//! Unit tests for the PMode module.
//!
//! Tests are organised by concern: model invariants, identifier strategies,
//! the error sink, each built-in profile, message header rules, stores and
//! the registration service.

mod domain_tests;
mod fixtures;
mod id_provider_tests;
mod store_tests;
