//! Extracting downstream TLS settings from a proxy config dump.
//!
//! Understands both the older layout (`dynamic_active_listeners`, filter
//! chain `tls_context`) and the newer one (`dynamic_listeners[].active_state`,
//! `transport_socket.typed_config`).

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::tls::context::CommonTlsContext;
use crate::tls::summary::{certificate_summary, validation_summary};

const DOWNSTREAM_TLS_CONTEXT: &str = "DownstreamTlsContext";

#[derive(Debug, Error)]
pub enum DumpError {
    #[error("failed to read config dump {}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config dump: {0}")]
    Json(#[from] serde_json::Error),
}

/// TLS settings a listener applies to incoming connections.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct DownstreamTlsContext {
    #[serde(rename = "@type")]
    pub type_url: String,
    pub common_tls_context: Option<CommonTlsContext>,
    pub require_client_certificate: bool,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
struct TransportSocket {
    typed_config: Option<DownstreamTlsContext>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct FilterChain {
    tls_context: Option<DownstreamTlsContext>,
    transport_socket: Option<TransportSocket>,
}

impl FilterChain {
    /// The chain's downstream TLS context, if it terminates TLS.
    pub fn downstream_tls_context(&self) -> Option<&DownstreamTlsContext> {
        self.tls_context.as_ref().or_else(|| {
            self.transport_socket
                .as_ref()
                .and_then(|t| t.typed_config.as_ref())
                .filter(|c| c.type_url.is_empty() || c.type_url.ends_with(DOWNSTREAM_TLS_CONTEXT))
        })
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Listener {
    pub name: String,
    pub filter_chains: Vec<FilterChain>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
struct ListenerEntry {
    listener: Option<Listener>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
struct DynamicListener {
    active_state: Option<ListenerEntry>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
struct DumpSection {
    static_listeners: Vec<ListenerEntry>,
    dynamic_active_listeners: Vec<ListenerEntry>,
    dynamic_listeners: Vec<DynamicListener>,
}

/// A parsed admin `/config_dump` document.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ConfigDump {
    configs: Vec<DumpSection>,
}

/// One filter chain's TLS summary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TlsRow {
    pub listener: String,
    pub chain_index: usize,
    pub certificate: String,
    pub validation: String,
    /// The listener requires a client certificate.
    pub mtls: bool,
}

impl TlsRow {
    /// `listener[index]`.
    pub fn chain_label(&self) -> String {
        format!("{}[{}]", self.listener, self.chain_index)
    }
}

impl ConfigDump {
    pub fn from_json(input: &str) -> Result<Self, DumpError> {
        Ok(serde_json::from_str(input)?)
    }

    pub fn from_file(path: &Path) -> Result<Self, DumpError> {
        let content = fs::read_to_string(path).map_err(|source| DumpError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&content)
    }

    /// All listeners, static ones first, in dump order.
    pub fn listeners(&self) -> impl Iterator<Item = &Listener> {
        self.configs.iter().flat_map(|section| {
            section
                .static_listeners
                .iter()
                .chain(section.dynamic_active_listeners.iter())
                .chain(
                    section
                        .dynamic_listeners
                        .iter()
                        .filter_map(|d| d.active_state.as_ref()),
                )
                .filter_map(|entry| entry.listener.as_ref())
        })
    }

    /// One row per filter chain of every listener.
    pub fn tls_rows(&self) -> Vec<TlsRow> {
        let mut rows = Vec::new();
        for listener in self.listeners() {
            tracing::debug!(
                listener = %listener.name,
                filter_chains = listener.filter_chains.len(),
                "Inspecting listener"
            );
            for (chain_index, chain) in listener.filter_chains.iter().enumerate() {
                let tls = chain.downstream_tls_context();
                let common = tls.and_then(|t| t.common_tls_context.as_ref());
                rows.push(TlsRow {
                    listener: listener.name.clone(),
                    chain_index,
                    certificate: certificate_summary(common),
                    validation: validation_summary(common),
                    mtls: tls.is_some_and(|t| t.require_client_certificate),
                });
            }
        }
        rows
    }
}
