//! Application services for PMode registration.

mod registration;

pub use registration::{
    CreateProfilePModeRequest, PModeRegistration, PModeRegistrationError,
    PModeRegistrationResult, PModeRegistrationService,
};
