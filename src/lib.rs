//! Authorization policy inspection library.

pub mod config;
pub mod observability;
pub mod output;
pub mod policy;
pub mod tls;

pub use config::schema::InspectConfig;
pub use policy::loader::{get_configs_from_files, LoadError};
pub use policy::model::{PolicyConfig, PolicyTypeToConfigs};
pub use tls::summary::{certificate_summary, validation_summary};
