//! Merchmock Core Library
//!
//! This crate provides the domain models, error types, configuration, and
//! template registry shared across all merchmock components.

pub mod classifier;
pub mod config;
pub mod error;
pub mod models;
pub mod templates;

// Re-export commonly used types
pub use classifier::classify;
pub use config::GeneratorConfig;
pub use error::AppError;
pub use templates::TemplateRegistry;
