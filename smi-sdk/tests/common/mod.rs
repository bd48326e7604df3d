#![allow(dead_code)]

use async_trait::async_trait;
use bytes::Bytes;
use http_body_util::Full;
use kube::Client;
use smi_access::{IdentityBindingSubject, TrafficTargetRule, TrafficTargetSpec};
use smi_sdk::{
    Action, CallbackContext, CallbackResult, DeleteTrafficTarget, TrafficTarget,
    UpsertTrafficTarget,
};
use std::convert::Infallible;
use std::sync::Mutex;
use tracing::Span;

/// 不连接集群的 kube 客户端：所有请求都返回空的 200
pub fn offline_client() -> Client {
    let service = tower::service_fn(|_req: http::Request<kube::client::Body>| async {
        Ok::<_, Infallible>(http::Response::new(Full::new(Bytes::new())))
    });
    Client::new(service, "default")
}

pub fn traffic_target(name: &str) -> TrafficTarget {
    TrafficTarget::new(
        name,
        TrafficTargetSpec {
            destination: IdentityBindingSubject::service_account("service-a", "default")
                .with_port(8080),
            sources: vec![IdentityBindingSubject::service_account("prometheus", "default")],
            rules: vec![TrafficTargetRule {
                kind: "HTTPRouteGroup".to_string(),
                name: "the-routes".to_string(),
                matches: vec!["metrics".to_string()],
            }],
        },
    )
}

/// 记录每次回调的用户实现，返回固定的调度指令
pub struct Recorder {
    pub label: &'static str,
    pub action: Action,
    pub calls: Mutex<Vec<String>>,
}

impl Recorder {
    pub fn new(label: &'static str, action: Action) -> Self {
        Self {
            label,
            action,
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, op: &str, tt: &TrafficTarget) {
        let name = tt.metadata.name.clone().unwrap_or_default();
        self.calls
            .lock()
            .unwrap()
            .push(format!("{}:{op}:{name}", self.label));
    }
}

#[async_trait]
impl UpsertTrafficTarget for Recorder {
    async fn upsert_traffic_target(
        &self,
        _ctx: &CallbackContext,
        _client: &Client,
        _logger: &Span,
        tt: &TrafficTarget,
    ) -> CallbackResult {
        self.record("upsert", tt);
        Ok(self.action.clone())
    }
}

#[async_trait]
impl DeleteTrafficTarget for Recorder {
    async fn delete_traffic_target(
        &self,
        _ctx: &CallbackContext,
        _client: &Client,
        _logger: &Span,
        tt: &TrafficTarget,
    ) -> CallbackResult {
        self.record("delete", tt);
        Ok(self.action.clone())
    }
}
