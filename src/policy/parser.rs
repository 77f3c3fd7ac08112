//! Parsing configuration objects out of multi-document YAML.

use std::collections::BTreeMap;

use serde::{Deserialize, Deserializer};
use thiserror::Error;

use crate::policy::model::{ConfigMeta, PolicyConfig, TypedConfig};

/// Kinds recognized as authorization or authentication policy objects.
pub const KNOWN_KINDS: &[&str] = &[
    "ServiceRole",
    "ServiceRoleBinding",
    "RbacConfig",
    "ClusterRbacConfig",
    "AuthorizationPolicy",
    "Policy",
    "MeshPolicy",
    "PeerAuthentication",
    "RequestAuthentication",
];

/// Errors produced while parsing a single input.
#[derive(Debug, Error)]
pub enum ParseError {
    /// The document is not valid YAML or does not match the object shape.
    #[error("invalid YAML in document {document}: {source}")]
    Yaml {
        document: usize,
        #[source]
        source: serde_yaml::Error,
    },

    /// The document is a scalar or a sequence instead of an object.
    #[error("document {document} is not an object")]
    NotAnObject { document: usize },
}

/// An object that parsed cleanly but whose kind is not a known policy kind.
/// `kind` is empty when the object has none.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownKind {
    pub api_version: String,
    pub kind: String,
    pub name: String,
}

/// Everything recovered from one input.
#[derive(Debug, Clone)]
pub struct ParsedInputs<C> {
    /// Recognized configs in document order.
    pub configs: Vec<C>,

    /// Objects that were skipped because their kind is unknown.
    pub others: Vec<UnknownKind>,
}

impl<C> Default for ParsedInputs<C> {
    fn default() -> Self {
        Self {
            configs: Vec::new(),
            others: Vec::new(),
        }
    }
}

/// Turns file contents into configuration records.
pub trait ConfigParser {
    type Config: TypedConfig;

    fn parse(&self, input: &str) -> Result<ParsedInputs<Self::Config>, ParseError>;
}

/// Treat an explicit null (`namespace:` with no value) like a missing key.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct RawMetadata {
    #[serde(deserialize_with = "null_as_default")]
    name: String,
    #[serde(deserialize_with = "null_as_default")]
    namespace: String,
    #[serde(deserialize_with = "null_as_default")]
    labels: BTreeMap<String, String>,
    #[serde(deserialize_with = "null_as_default")]
    annotations: BTreeMap<String, String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
struct RawObject {
    #[serde(deserialize_with = "null_as_default")]
    api_version: String,
    #[serde(deserialize_with = "null_as_default")]
    kind: String,
    #[serde(deserialize_with = "null_as_default")]
    metadata: RawMetadata,
    spec: serde_yaml::Value,
}

/// Parses Kubernetes-style YAML objects separated by `---`.
#[derive(Debug, Clone)]
pub struct YamlConfigParser {
    kinds: Vec<String>,
}

impl Default for YamlConfigParser {
    fn default() -> Self {
        Self {
            kinds: KNOWN_KINDS.iter().map(|k| k.to_string()).collect(),
        }
    }
}

impl YamlConfigParser {
    pub fn new() -> Self {
        Self::default()
    }

    /// Also accept objects of `kind`.
    pub fn with_kind(mut self, kind: impl Into<String>) -> Self {
        self.kinds.push(kind.into());
        self
    }

    fn is_known(&self, kind: &str) -> bool {
        self.kinds.iter().any(|k| k == kind)
    }
}

impl ConfigParser for YamlConfigParser {
    type Config = PolicyConfig;

    fn parse(&self, input: &str) -> Result<ParsedInputs<PolicyConfig>, ParseError> {
        let mut parsed = ParsedInputs::default();

        for (document, de) in serde_yaml::Deserializer::from_str(input).enumerate() {
            let value = serde_yaml::Value::deserialize(de)
                .map_err(|source| ParseError::Yaml { document, source })?;

            if value.is_null() || value.as_mapping().is_some_and(|m| m.is_empty()) {
                continue;
            }
            if !value.is_mapping() {
                return Err(ParseError::NotAnObject { document });
            }

            let raw: RawObject = serde_yaml::from_value(value)
                .map_err(|source| ParseError::Yaml { document, source })?;
            if !self.is_known(&raw.kind) {
                parsed.others.push(UnknownKind {
                    api_version: raw.api_version,
                    kind: raw.kind,
                    name: raw.metadata.name,
                });
                continue;
            }

            let (group, version) = split_api_version(&raw.api_version);
            parsed.configs.push(PolicyConfig {
                meta: ConfigMeta {
                    config_type: camel_case_to_kebab_case(&raw.kind),
                    group: group.to_string(),
                    version: version.to_string(),
                    name: raw.metadata.name,
                    namespace: raw.metadata.namespace,
                    labels: raw.metadata.labels,
                    annotations: raw.metadata.annotations,
                },
                spec: raw.spec,
            });
        }

        Ok(parsed)
    }
}

/// `rbac.istio.io/v1alpha1` → (`rbac.istio.io`, `v1alpha1`); `v1` → (``, `v1`).
fn split_api_version(api_version: &str) -> (&str, &str) {
    match api_version.rsplit_once('/') {
        Some((group, version)) => (group, version),
        None => ("", api_version),
    }
}

/// `ServiceRoleBinding` → `service-role-binding`.
pub fn camel_case_to_kebab_case(kind: &str) -> String {
    let mut out = String::with_capacity(kind.len() + 4);
    for (i, c) in kind.chars().enumerate() {
        if c.is_ascii_uppercase() {
            if i > 0 {
                out.push('-');
            }
            out.push(c.to_ascii_lowercase());
        } else {
            out.push(c);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    const ROLE_AND_BINDING: &str = r#"
apiVersion: rbac.istio.io/v1alpha1
kind: ServiceRole
metadata:
  name: products-viewer
  namespace: default
spec:
  rules:
  - services: ["products.default.svc.cluster.local"]
    methods: ["GET"]
---
apiVersion: rbac.istio.io/v1alpha1
kind: ServiceRoleBinding
metadata:
  name: bind-products-viewer
  namespace: default
  labels:
    app: products
spec:
  subjects:
  - user: "alice@example.com"
  roleRef:
    kind: ServiceRole
    name: products-viewer
"#;

    #[test]
    fn test_kebab_case() {
        assert_eq!(camel_case_to_kebab_case("ServiceRole"), "service-role");
        assert_eq!(camel_case_to_kebab_case("ClusterRbacConfig"), "cluster-rbac-config");
        assert_eq!(camel_case_to_kebab_case("Policy"), "policy");
    }

    #[test]
    fn test_split_api_version() {
        assert_eq!(split_api_version("rbac.istio.io/v1alpha1"), ("rbac.istio.io", "v1alpha1"));
        assert_eq!(split_api_version("v1"), ("", "v1"));
    }

    #[test]
    fn test_parse_multiple_documents() {
        let parsed = YamlConfigParser::new().parse(ROLE_AND_BINDING).unwrap();
        assert!(parsed.others.is_empty());
        assert_eq!(parsed.configs.len(), 2);

        let role = &parsed.configs[0];
        assert_eq!(role.meta.config_type, "service-role");
        assert_eq!(role.meta.group, "rbac.istio.io");
        assert_eq!(role.meta.version, "v1alpha1");
        assert_eq!(role.key(), "default/products-viewer");
        assert!(role.spec.get("rules").is_some());

        let binding = &parsed.configs[1];
        assert_eq!(binding.meta.config_type, "service-role-binding");
        assert_eq!(binding.meta.labels.get("app").map(String::as_str), Some("products"));
    }

    #[test]
    fn test_unknown_kind_goes_to_others() {
        let input = r#"
apiVersion: v1
kind: ConfigMap
metadata:
  name: settings
---
apiVersion: rbac.istio.io/v1alpha1
kind: RbacConfig
metadata:
  name: default
spec:
  mode: ON
"#;
        let parsed = YamlConfigParser::new().parse(input).unwrap();
        assert_eq!(parsed.configs.len(), 1);
        assert_eq!(parsed.configs[0].meta.config_type, "rbac-config");
        assert_eq!(
            parsed.others,
            vec![UnknownKind {
                api_version: "v1".into(),
                kind: "ConfigMap".into(),
                name: "settings".into(),
            }]
        );
    }

    #[test]
    fn test_extra_kind() {
        let input = "apiVersion: example.io/v1\nkind: AccessRule\nmetadata:\n  name: r\n";
        let parsed = YamlConfigParser::new().with_kind("AccessRule").parse(input).unwrap();
        assert_eq!(parsed.configs[0].meta.config_type, "access-rule");
    }

    #[test]
    fn test_empty_documents_skipped() {
        let input = "---\n---\napiVersion: rbac.istio.io/v1alpha1\nkind: ServiceRole\nmetadata:\n  name: r\n---\n";
        let parsed = YamlConfigParser::new().parse(input).unwrap();
        assert_eq!(parsed.configs.len(), 1);
        assert_eq!(parsed.configs[0].meta.namespace, "");
    }

    #[test]
    fn test_missing_kind_goes_to_others() {
        let input = "apiVersion: v1\nmetadata:\n  name: x\n---\napiVersion: rbac.istio.io/v1alpha1\nkind: ServiceRole\nmetadata:\n  name: r\n";
        let parsed = YamlConfigParser::new().parse(input).unwrap();
        assert_eq!(parsed.configs.len(), 1);
        assert_eq!(
            parsed.others,
            vec![UnknownKind {
                api_version: "v1".into(),
                kind: String::new(),
                name: "x".into(),
            }]
        );
    }

    #[test]
    fn test_empty_mapping_skipped() {
        let parsed = YamlConfigParser::new().parse("{}\n---\n{}\n").unwrap();
        assert!(parsed.configs.is_empty());
        assert!(parsed.others.is_empty());
    }

    #[test]
    fn test_null_metadata_fields_take_defaults() {
        let input = "kind: ServiceRole\nmetadata:\n  name: x\n  labels:\n  namespace:\n  annotations:\nspec:\n";
        let parsed = YamlConfigParser::new().parse(input).unwrap();
        let role = &parsed.configs[0];
        assert_eq!(role.meta.name, "x");
        assert_eq!(role.meta.namespace, "");
        assert!(role.meta.labels.is_empty());
        assert!(role.meta.annotations.is_empty());
        assert!(role.spec.is_null());
    }

    #[test]
    fn test_null_metadata_takes_defaults() {
        let input = "apiVersion: rbac.istio.io/v1alpha1\nkind: RbacConfig\nmetadata:\n";
        let parsed = YamlConfigParser::new().parse(input).unwrap();
        assert_eq!(parsed.configs[0].key(), "");
    }

    #[test]
    fn test_scalar_document_is_error() {
        let err = YamlConfigParser::new().parse("just a string").unwrap_err();
        assert!(matches!(err, ParseError::NotAnObject { .. }));
    }

    #[test]
    fn test_invalid_yaml_is_error() {
        let err = YamlConfigParser::new().parse("kind: [unclosed").unwrap_err();
        assert!(matches!(err, ParseError::Yaml { .. }));
    }
}
