//! Common TLS context as reported by the proxy admin API.
//!
//! Field names follow the proxy's JSON output (snake_case proto names).

use serde::Deserialize;

/// Where a piece of TLS material comes from.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct DataSource {
    pub filename: Option<String>,
    pub inline_string: Option<String>,
    pub inline_bytes: Option<String>,
}

/// A statically configured certificate.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct TlsCertificate {
    pub certificate_chain: Option<DataSource>,
}

impl TlsCertificate {
    /// A certificate whose chain is read from `filename`.
    pub fn from_file(filename: impl Into<String>) -> Self {
        Self {
            certificate_chain: Some(DataSource {
                filename: Some(filename.into()),
                ..Default::default()
            }),
        }
    }

    /// The chain's filename, if it has a non-empty one.
    pub fn chain_filename(&self) -> Option<&str> {
        self.certificate_chain
            .as_ref()
            .and_then(|c| c.filename.as_deref())
            .filter(|f| !f.is_empty())
    }
}

/// Reference to a secret served by the secret discovery service.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct SdsSecretConfig {
    pub name: String,
}

impl SdsSecretConfig {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct CertificateValidationContext {
    pub verify_subject_alt_name: Vec<String>,
}

/// A default validation context merged with one fetched over SDS.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct CombinedValidationContext {
    pub default_validation_context: Option<CertificateValidationContext>,
    pub validation_context_sds_secret_config: Option<SdsSecretConfig>,
}

/// How peer certificates are validated. At most one is configured.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationContextType {
    ValidationContext(CertificateValidationContext),
    SdsSecretConfig(SdsSecretConfig),
    Combined(CombinedValidationContext),
}

/// Certificate and trust settings shared by upstream and downstream TLS.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(from = "RawCommonTlsContext")]
pub struct CommonTlsContext {
    pub tls_certificates: Vec<TlsCertificate>,
    pub tls_certificate_sds_secret_configs: Vec<SdsSecretConfig>,
    pub validation_context_type: Option<ValidationContextType>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct RawCommonTlsContext {
    tls_certificates: Vec<TlsCertificate>,
    tls_certificate_sds_secret_configs: Vec<SdsSecretConfig>,
    validation_context: Option<CertificateValidationContext>,
    validation_context_sds_secret_config: Option<SdsSecretConfig>,
    combined_validation_context: Option<CombinedValidationContext>,
}

impl From<RawCommonTlsContext> for CommonTlsContext {
    fn from(raw: RawCommonTlsContext) -> Self {
        let validation_context_type = raw
            .validation_context
            .map(ValidationContextType::ValidationContext)
            .or_else(|| {
                raw.validation_context_sds_secret_config
                    .map(ValidationContextType::SdsSecretConfig)
            })
            .or_else(|| {
                raw.combined_validation_context
                    .map(ValidationContextType::Combined)
            });

        Self {
            tls_certificates: raw.tls_certificates,
            tls_certificate_sds_secret_configs: raw.tls_certificate_sds_secret_configs,
            validation_context_type,
        }
    }
}
