//! Shared fixtures for integration tests.

use std::fs;
use std::path::PathBuf;

use tempfile::TempDir;

pub const SERVICE_ROLES: &str = r#"
apiVersion: rbac.istio.io/v1alpha1
kind: ServiceRole
metadata:
  name: products-viewer
  namespace: default
spec:
  rules:
  - services: ["products.default.svc.cluster.local"]
    methods: ["GET", "HEAD"]
---
apiVersion: rbac.istio.io/v1alpha1
kind: ServiceRole
metadata:
  name: reviews-editor
  namespace: default
spec:
  rules:
  - services: ["reviews.default.svc.cluster.local"]
    methods: ["POST"]
"#;

pub const BINDINGS_AND_MESH: &str = r#"
apiVersion: rbac.istio.io/v1alpha1
kind: ServiceRoleBinding
metadata:
  name: bind-products-viewer
  namespace: default
spec:
  subjects:
  - user: "*"
  roleRef:
    kind: ServiceRole
    name: products-viewer
---
apiVersion: v1
kind: ConfigMap
metadata:
  name: unrelated
---
apiVersion: rbac.istio.io/v1alpha1
kind: ClusterRbacConfig
metadata:
  name: default
spec:
  mode: ON_WITH_INCLUSION
  inclusion:
    namespaces: ["default"]
"#;

#[allow(dead_code)]
pub const CONFIG_DUMP: &str = r#"{
  "configs": [
    {
      "@type": "type.googleapis.com/envoy.admin.v2alpha.ListenersConfigDump",
      "dynamic_active_listeners": [
        {
          "listener": {
            "name": "10.44.0.12_9080",
            "filter_chains": [
              {
                "tls_context": {
                  "common_tls_context": {
                    "tls_certificates": [
                      {"certificate_chain": {"filename": "/etc/certs/cert-chain.pem"}}
                    ],
                    "validation_context_sds_secret_config": {"name": "ROOTCA"}
                  },
                  "require_client_certificate": true
                }
              }
            ]
          }
        }
      ]
    }
  ]
}"#;

/// Write `content` to `name` inside `dir`.
pub fn write_fixture(dir: &TempDir, name: &str, content: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, content).unwrap();
    path
}
