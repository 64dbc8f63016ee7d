//! Step definitions for profile conformance scenarios.

pub mod given;
pub mod then;
pub mod when;
pub mod world;
