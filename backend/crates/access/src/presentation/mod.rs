//! Presentation Layer
//!
//! HTTP handlers, DTOs, routers, and the admin gate middleware.

pub mod dto;
pub mod handlers;
pub mod middleware;
pub mod router;

pub use handlers::RegistrationAppState;
pub use middleware::{AdminGateState, GateContext, admin_gate};
pub use router::{admin_router, phone_router, registration_router_generic, with_admin_gate};
