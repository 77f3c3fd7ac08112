//! Console rendering of inspection results.

pub mod table;

use std::collections::BTreeMap;

use crate::config::schema::OutputFormat;
use crate::policy::model::{count_configs, PolicyConfig, PolicyTypeToConfigs};
use crate::tls::dump::TlsRow;

use table::render_table;

/// Render grouped policy configs, types in name order.
pub fn render_policy_summary(
    configs: &PolicyTypeToConfigs<PolicyConfig>,
    format: OutputFormat,
) -> Result<String, serde_json::Error> {
    let sorted: BTreeMap<&str, &Vec<PolicyConfig>> =
        configs.iter().map(|(k, v)| (k.as_str(), v)).collect();

    match format {
        OutputFormat::Json => {
            let keys: BTreeMap<&str, Vec<String>> = sorted
                .iter()
                .map(|(k, v)| (*k, v.iter().map(PolicyConfig::key).collect()))
                .collect();
            serde_json::to_string_pretty(&keys)
        }
        OutputFormat::Table => {
            let rows: Vec<Vec<String>> = sorted
                .iter()
                .flat_map(|(config_type, list)| {
                    list.iter().map(move |c| {
                        vec![
                            config_type.to_string(),
                            c.meta.namespace.clone(),
                            c.meta.name.clone(),
                        ]
                    })
                })
                .collect();
            let mut out = render_table(&["TYPE", "NAMESPACE", "NAME"], &rows);
            out.push_str(&format!(
                "\n{} configs in {} types\n",
                count_configs(configs),
                configs.len()
            ));
            Ok(out)
        }
    }
}

/// Render per-filter-chain TLS summaries in dump order.
pub fn render_tls_rows(rows: &[TlsRow], format: OutputFormat) -> Result<String, serde_json::Error> {
    match format {
        OutputFormat::Json => serde_json::to_string_pretty(rows),
        OutputFormat::Table => {
            let cells: Vec<Vec<String>> = rows
                .iter()
                .map(|r| {
                    vec![
                        r.chain_label(),
                        r.certificate.clone(),
                        if r.mtls { "yes" } else { "no" }.to_string(),
                        r.validation.clone(),
                    ]
                })
                .collect();
            Ok(render_table(
                &["LISTENER[FilterChain]", "CERTIFICATE", "mTLS", "VALIDATE"],
                &cells,
            ))
        }
    }
}
