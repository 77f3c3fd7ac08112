//! Tool settings.
//!
//! # Data Flow
//! ```text
//! settings file (TOML, optional)
//!     → loader.rs (read & deserialize)
//!     → validation.rs (semantic checks)
//!     → InspectConfig, then CLI flags override individual fields
//! ```
//!
//! # Design Decisions
//! - Every field has a default, so no settings file is required
//! - Validation reports all problems at once

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{load_config, ConfigError};
pub use schema::{InspectConfig, LoggingConfig, OutputConfig, OutputFormat};
