//! TLS settings inspection.
//!
//! # Data Flow
//! ```text
//! proxy config dump (JSON)
//!     → dump.rs (listeners → filter chains → downstream TLS context)
//!     → context.rs (CommonTlsContext, one validation variant)
//!     → summary.rs (certificate / validation display strings)
//! ```
//!
//! # Design Decisions
//! - Summaries are total: missing pieces render as `none` or an empty part
//! - Nothing here reads key material or verifies certificates

pub mod context;
pub mod dump;
pub mod summary;

pub use context::{
    CertificateValidationContext, CombinedValidationContext, CommonTlsContext, DataSource,
    SdsSecretConfig, TlsCertificate, ValidationContextType,
};
pub use dump::{ConfigDump, DumpError, TlsRow};
pub use summary::{certificate_summary, validation_summary};
