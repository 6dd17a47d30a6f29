//! Quiz use-case services.
//!
//! # Responsibility
//! - Turn raw command arguments into repository calls.
//! - Map storage failures onto the user-facing error taxonomy.

pub mod quiz_service;
