//! Value Object Module

pub mod phone_number;
pub mod user_role;
