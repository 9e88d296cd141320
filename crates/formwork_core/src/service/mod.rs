//! Core use-case services.
//!
//! # Responsibility
//! - Own the session state and orchestrate registry + pipeline calls.
//! - Keep presentation/FFI layers decoupled from derivation details.

pub mod error;
pub mod form_service;
pub mod keys;
