//! Authorization policy loading.
//!
//! # Data Flow
//! ```text
//! policy files (multi-document YAML)
//!     → parser.rs (split documents, resolve kind → policy type)
//!     → loader.rs (read files in order, group by type)
//!     → PolicyTypeToConfigs (type → ordered configs)
//! ```
//!
//! # Design Decisions
//! - Loading is fail-fast: the first unreadable or unparsable file aborts the
//!   whole call and no partial mapping is returned
//! - Objects of an unknown kind are reported, not rejected
//! - The loader only needs a grouping key, so it is generic over `TypedConfig`

pub mod loader;
pub mod model;
pub mod parser;

pub use loader::{get_configs_from_files, get_configs_from_files_with, LoadError};
pub use model::{ConfigMeta, PolicyConfig, PolicyTypeToConfigs, TypedConfig};
pub use parser::{ConfigParser, ParseError, ParsedInputs, UnknownKind, YamlConfigParser};
