//! 生命周期事件路由
//!
//! 把宿主 finalizer 产生的事件映射到对应契约：`Apply` → 新建/更新，`Cleanup` → 删除。
//! 这里只做路由，调度、重试与 finalizer 的增删都属于宿主。
//!
use crate::{
    context::CallbackContext, delete_handler::DeleteTrafficTarget, dispatcher::V1Alpha2Dispatcher,
    error::CallbackResult, upsert_handler::UpsertTrafficTarget,
};
use kube::Client;
use kube::runtime::finalizer;
use smi_access::TrafficTarget;
use std::sync::Arc;
use tracing::Span;

#[derive(Clone, Debug)]
pub enum LifecycleEvent {
    /// 资源被创建或 spec 发生变化
    Upsert(Arc<TrafficTarget>),
    /// 资源被移除（含 finalizer 清理）
    Delete(Arc<TrafficTarget>),
}

impl LifecycleEvent {
    pub fn resource(&self) -> &TrafficTarget {
        match self {
            LifecycleEvent::Upsert(tt) | LifecycleEvent::Delete(tt) => tt,
        }
    }
}

impl From<finalizer::Event<TrafficTarget>> for LifecycleEvent {
    fn from(event: finalizer::Event<TrafficTarget>) -> Self {
        match event {
            finalizer::Event::Apply(tt) => LifecycleEvent::Upsert(tt),
            finalizer::Event::Cleanup(tt) => LifecycleEvent::Delete(tt),
        }
    }
}

impl V1Alpha2Dispatcher {
    /// 按事件类型分发到对应回调
    pub async fn dispatch(
        &self,
        event: LifecycleEvent,
        ctx: &CallbackContext,
        client: &Client,
        logger: &Span,
    ) -> CallbackResult {
        match event {
            LifecycleEvent::Upsert(tt) => {
                self.upsert_traffic_target(ctx, client, logger, &tt).await
            }
            LifecycleEvent::Delete(tt) => {
                self.delete_traffic_target(ctx, client, logger, &tt).await
            }
        }
    }
}
