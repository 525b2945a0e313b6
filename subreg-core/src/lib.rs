//! Subdomain Registration Core Library
//!
//! Provides the platform-independent part of the registration console:
//! - Form controller (field bindings, derived subdomain, validation)
//! - Request lifecycle state machine (idle / pending / success / error)
//! - Registration and domain listing services over a [`DashboardApi`]
//!
//! The front-end owns the controllers and renders them; the services own the
//! network calls. Nothing here depends on a terminal or a runtime.

pub mod controller;
pub mod error;
pub mod form;
pub mod mutation;
pub mod services;
pub mod validation;

#[cfg(test)]
mod test_utils;

// Re-export common types
pub use controller::{DomainListController, RegistrationController};
pub use error::{CoreError, CoreResult};
pub use form::{derive_subdomain, FormField, RegistrationForm, DEFAULT_TTL_MINUTES};
pub use mutation::{MutationState, MutationStatus, SubmissionResult, SubmissionState};
pub use services::{DomainService, RegistrationService};
pub use subreg_client::{
    ClientError, DashboardApi, DomainInfo, DomainListKind, RecordKind, SubdomainRequest,
    SubmitResponse,
};
pub use validation::{FieldError, FieldErrorKind, ValidationErrors};
