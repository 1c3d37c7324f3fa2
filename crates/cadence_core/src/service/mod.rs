//! Core use-case services.
//!
//! # Responsibility
//! - Assemble engine primitives into view-level APIs.
//! - Keep presentation layers decoupled from period arithmetic details.

pub mod agenda_service;
