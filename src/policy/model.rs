//! Policy configuration records.

use std::collections::{BTreeMap, HashMap};

use serde::Serialize;

/// Maps a policy type (e.g. `service-role`) to its configs in read order.
pub type PolicyTypeToConfigs<C = PolicyConfig> = HashMap<String, Vec<C>>;

/// Anything the loader can group by policy type.
pub trait TypedConfig {
    /// The policy type used as the grouping key.
    fn config_type(&self) -> &str;
}

/// Identifying metadata of a configuration object.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct ConfigMeta {
    /// Policy type in kebab case, e.g. `service-role-binding`.
    pub config_type: String,

    /// API group, e.g. `rbac.istio.io`. Empty for core objects.
    pub group: String,

    /// API version, e.g. `v1alpha1`.
    pub version: String,

    pub name: String,
    pub namespace: String,

    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub labels: BTreeMap<String, String>,

    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub annotations: BTreeMap<String, String>,
}

/// A parsed authorization configuration object.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PolicyConfig {
    pub meta: ConfigMeta,

    /// The object's `spec`, kept opaque.
    pub spec: serde_yaml::Value,
}

impl PolicyConfig {
    /// `namespace/name`, or just `name` for cluster-scoped objects.
    pub fn key(&self) -> String {
        if self.meta.namespace.is_empty() {
            self.meta.name.clone()
        } else {
            format!("{}/{}", self.meta.namespace, self.meta.name)
        }
    }
}

impl TypedConfig for PolicyConfig {
    fn config_type(&self) -> &str {
        &self.meta.config_type
    }
}

/// Total number of configs across all policy types.
pub fn count_configs<C>(configs: &PolicyTypeToConfigs<C>) -> usize {
    configs.values().map(Vec::len).sum()
}
