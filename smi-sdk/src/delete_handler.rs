use crate::{context::CallbackContext, error::CallbackResult};
use async_trait::async_trait;
use kube::Client;
use smi_access::TrafficTarget;
use tracing::Span;

/// 删除回调
///
/// 宿主观察到 `TrafficTarget` 被移除时调用（包括 finalizer 触发的删除前清理）。
#[async_trait]
pub trait DeleteTrafficTarget: Send + Sync {
    async fn delete_traffic_target(
        &self,
        ctx: &CallbackContext,
        client: &Client,
        logger: &Span,
        tt: &TrafficTarget,
    ) -> CallbackResult;
}
