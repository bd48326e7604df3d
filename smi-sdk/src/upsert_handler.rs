use crate::{context::CallbackContext, error::CallbackResult};
use async_trait::async_trait;
use kube::Client;
use smi_access::TrafficTarget;
use tracing::Span;

/// 新建或更新回调
///
/// 宿主观察到 `TrafficTarget` 被创建、或其 spec 发生变化时调用。
#[async_trait]
pub trait UpsertTrafficTarget: Send + Sync {
    async fn upsert_traffic_target(
        &self,
        ctx: &CallbackContext,
        client: &Client,
        logger: &Span,
        tt: &TrafficTarget,
    ) -> CallbackResult;
}
