//! Application Layer
//!
//! Use cases and application services.

pub mod check_access;
pub mod config;
pub mod register_phone;

// Re-exports
pub use check_access::{AccessCheckOutput, CheckAccessUseCase};
pub use config::GateConfig;
pub use register_phone::{
    PhoneAvailability, RegisterPhoneInput, RegisterPhoneOutput, RegisterPhoneUseCase,
};
