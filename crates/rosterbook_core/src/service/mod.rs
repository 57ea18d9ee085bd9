//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate persistence calls into use-case level APIs.
//! - Keep UI collaborators decoupled from storage details.

pub mod id_allocator;
pub mod prefs_service;
pub mod roster_service;
pub mod session_service;
