//! Shared building blocks for the Tessen workspace: settings and the core error type.

pub mod config;
pub mod error;
