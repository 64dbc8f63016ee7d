//! Adapter implementations for the PMode ports.

pub mod file;
pub mod id_provider;
pub mod memory;

pub use file::FilePModeStore;
pub use id_provider::{DynamicPModeIdProvider, StaticPModeIdProvider};
pub use memory::InMemoryPModeStore;
