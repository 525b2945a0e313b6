//! 业务逻辑服务层

mod domain_service;
mod registration_service;

pub use domain_service::DomainService;
pub use registration_service::RegistrationService;
