//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate command execution and repository persistence.
//! - Keep the CLI layer decoupled from storage details.

pub mod chat_service;
