//! Platform Crate - Technical Infrastructure
//!
//! This crate provides shared technical foundations:
//! - Session token transport (cookie / bearer header extraction)
//! - Signed token codec (HMAC-SHA256, URL-safe Base64)
//! - Locale digit transliteration (Persian / Arabic-Indic to ASCII)

pub mod cookie;
pub mod locale;
pub mod token;
