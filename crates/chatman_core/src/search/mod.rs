//! Task search entry points.
//!
//! # Responsibility
//! - Keep keyword scanning separate from command validation and rendering.

pub mod keyword;
