//! Human-readable summaries of a common TLS context.

use crate::tls::context::{CommonTlsContext, ValidationContextType};

const NONE: &str = "none";
const INLINE: &str = "<inline>";

/// Describe where the context's certificates come from.
///
/// Static certificates show their chain filename (or `<inline>`), SDS
/// certificates show their secret name: `a.pem,<inline>; SDS: default`.
pub fn certificate_summary(ctx: Option<&CommonTlsContext>) -> String {
    let Some(ctx) = ctx else {
        return NONE.to_string();
    };

    let static_configs: Vec<&str> = ctx
        .tls_certificates
        .iter()
        .map(|cert| cert.chain_filename().unwrap_or(INLINE))
        .collect();

    let sds_configs: Vec<&str> = ctx
        .tls_certificate_sds_secret_configs
        .iter()
        .map(|sds| sds.name.as_str())
        .collect();

    let mut cert = String::new();
    if !static_configs.is_empty() {
        cert.push_str(&static_configs.join(","));
    }
    if !sds_configs.is_empty() {
        if !cert.is_empty() {
            cert.push_str("; ");
        }
        cert.push_str("SDS: ");
        cert.push_str(&sds_configs.join(","));
    }

    if cert.is_empty() {
        NONE.to_string()
    } else {
        cert
    }
}

/// Describe how the context validates peer certificates.
pub fn validation_summary(ctx: Option<&CommonTlsContext>) -> String {
    let ret = match ctx.and_then(|c| c.validation_context_type.as_ref()) {
        Some(ValidationContextType::ValidationContext(v)) => v.verify_subject_alt_name.join(","),
        Some(ValidationContextType::SdsSecretConfig(sds)) => format!("SDS: {}", sds.name),
        Some(ValidationContextType::Combined(combined)) => {
            let san = combined
                .default_validation_context
                .as_ref()
                .map(|v| v.verify_subject_alt_name.join(","))
                .unwrap_or_default();
            let sds = combined
                .validation_context_sds_secret_config
                .as_ref()
                .map(|s| s.name.as_str())
                .unwrap_or_default();
            format!("[{}] + [SDS: {}]", san, sds)
        }
        None => String::new(),
    };

    if ret.is_empty() {
        NONE.to_string()
    } else {
        ret
    }
}
