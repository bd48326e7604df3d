//! TrafficTarget 资源定义
//!
use kube::CustomResource;
use serde::{Deserialize, Serialize};

/// TrafficTarget 的期望状态
///
/// - `destination`：被访问的目标身份；
/// - `sources`：允许访问目标的来源身份；
/// - `rules`：允许的流量规则（引用路由资源）。
#[derive(CustomResource, Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[kube(
    group = "access.smi-spec.io",
    version = "v1alpha2",
    kind = "TrafficTarget",
    plural = "traffictargets",
    namespaced,
    schema = "disabled",
    derive = "PartialEq"
)]
pub struct TrafficTargetSpec {
    pub destination: IdentityBindingSubject,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub sources: Vec<IdentityBindingSubject>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub rules: Vec<TrafficTargetRule>,
}

/// 身份主体
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IdentityBindingSubject {
    pub kind: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub namespace: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub port: Option<i32>,
}

impl IdentityBindingSubject {
    pub const SERVICE_ACCOUNT: &'static str = "ServiceAccount";

    /// 以 ServiceAccount 作为身份主体
    pub fn service_account(name: impl Into<String>, namespace: impl Into<String>) -> Self {
        Self {
            kind: Self::SERVICE_ACCOUNT.to_string(),
            name: name.into(),
            namespace: Some(namespace.into()),
            port: None,
        }
    }

    pub fn with_port(mut self, port: i32) -> Self {
        self.port = Some(port);
        self
    }
}

/// 流量规则：引用一个路由资源，`matches` 为空表示该资源内的全部路由
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrafficTargetRule {
    pub kind: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub matches: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use kube::Resource;
    use serde_json::json;

    #[test]
    fn deserializes_upstream_manifest() -> anyhow::Result<()> {
        let manifest = json!({
            "apiVersion": "access.smi-spec.io/v1alpha2",
            "kind": "TrafficTarget",
            "metadata": { "name": "path-specific", "namespace": "default" },
            "spec": {
                "destination": {
                    "kind": "ServiceAccount",
                    "name": "service-a",
                    "namespace": "default",
                    "port": 8080
                },
                "rules": [{
                    "kind": "HTTPRouteGroup",
                    "name": "the-routes",
                    "matches": ["metrics"]
                }],
                "sources": [{
                    "kind": "ServiceAccount",
                    "name": "prometheus",
                    "namespace": "default"
                }]
            }
        });

        let tt: TrafficTarget = serde_json::from_value(manifest)?;

        assert_eq!(tt.metadata.name.as_deref(), Some("path-specific"));
        assert_eq!(
            tt.spec.destination,
            IdentityBindingSubject::service_account("service-a", "default").with_port(8080)
        );
        assert_eq!(tt.spec.sources.len(), 1);
        assert_eq!(tt.spec.rules[0].matches, vec!["metrics".to_string()]);
        Ok(())
    }

    #[test]
    fn api_coordinates_match_smi() {
        assert_eq!(TrafficTarget::group(&()), crate::GROUP);
        assert_eq!(TrafficTarget::version(&()), crate::VERSION);
        assert_eq!(TrafficTarget::kind(&()), "TrafficTarget");
        assert_eq!(TrafficTarget::api_version(&()), "access.smi-spec.io/v1alpha2");
    }

    #[test]
    fn empty_lists_are_omitted_on_the_wire() -> anyhow::Result<()> {
        let tt = TrafficTarget::new(
            "tt-1",
            TrafficTargetSpec {
                destination: IdentityBindingSubject::service_account("api", "default"),
                ..Default::default()
            },
        );

        let value = serde_json::to_value(&tt)?;

        assert!(value["spec"].get("sources").is_none());
        assert!(value["spec"].get("rules").is_none());
        assert!(value["spec"]["destination"].get("port").is_none());
        Ok(())
    }
}
