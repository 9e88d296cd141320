//! Flutter bridge for the Formwork core.
//!
//! # Responsibility
//! - Keep the Dart-facing surface in `api` thin and panic-free.

pub mod api;
