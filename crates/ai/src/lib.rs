//! `tilestock-ai`
//!
//! **Responsibility:** optional product-description generation.
//!
//! This crate is intentionally **not** part of the domain model:
//! - It does not depend on the record store or domain crates.
//! - It never fails its callers: every outcome is a displayable string.
//! - Its output only pre-fills an optional tile field before the tile is added.

pub mod config;
pub mod description;
pub mod error;
pub mod gemini;

pub use config::DescriptionConfig;
pub use description::{
    generator_from_config, DescriptionGenerator, DisabledDescriptionGenerator, DISABLED_FALLBACK,
    FAILED_FALLBACK,
};
pub use error::AiError;
pub use gemini::GeminiDescriptionGenerator;
