//! AS4 PMode configuration and interoperability profile conformance.
//!
//! This crate models the Processing Modes (PModes) that govern AS4 / `ebMS3`
//! message exchanges and checks them, together with parsed message headers,
//! against named interoperability profiles such as Peppol, BDEW and CEF
//! eDelivery.
//!
//! # Architecture
//!
//! The crate follows hexagonal architecture principles:
//!
//! - **Domain**: Pure PMode and header model with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for identifier strategies, stores and validators
//! - **Adapters**: Concrete implementations of ports (in-memory, JSON files)
//!
//! # Modules
//!
//! - [`pmode`]: PMode model, profile validation and registration

pub mod pmode;
