use async_trait::async_trait;
use bytes::Bytes;
use http_body_util::Full;
use kube::{Client, ResourceExt};
use smi_access::{IdentityBindingSubject, TrafficTargetSpec};
use smi_sdk::{
    Action, CallbackContext, CallbackResult, LifecycleEvent, Registration, TrafficTarget,
    UpsertTrafficTarget, V1Alpha2Dispatcher,
};
use std::convert::Infallible;
use std::sync::Arc;
use std::time::Duration;
use tracing::{Span, info, info_span};
use tracing_subscriber::EnvFilter;

/// 只关心创建/更新事件的用户实现
struct AllowList;

#[async_trait]
impl UpsertTrafficTarget for AllowList {
    async fn upsert_traffic_target(
        &self,
        _ctx: &CallbackContext,
        _client: &Client,
        logger: &Span,
        tt: &TrafficTarget,
    ) -> CallbackResult {
        let sources: Vec<&str> = tt.spec.sources.iter().map(|s| s.name.as_str()).collect();
        logger.in_scope(|| {
            info!(
                destination = %tt.spec.destination.name,
                ?sources,
                "allowing traffic"
            );
        });
        Ok(Action::requeue(Duration::from_secs(300)))
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // 示例不连接集群：客户端对所有请求返回空响应
    let client = Client::new(
        tower::service_fn(|_req: http::Request<kube::client::Body>| async {
            Ok::<_, Infallible>(http::Response::new(Full::new(Bytes::new())))
        }),
        "default",
    );

    let dispatcher = V1Alpha2Dispatcher::new();
    dispatcher.register(Registration::new().with_upsert(Arc::new(AllowList)));

    let tt = Arc::new(TrafficTarget::new(
        "tt-1",
        TrafficTargetSpec {
            destination: IdentityBindingSubject::service_account("service-a", "default"),
            sources: vec![IdentityBindingSubject::service_account("prometheus", "default")],
            rules: vec![],
        },
    ));

    let ctx = CallbackContext::builder().correlation_id("example").build();
    let span = info_span!("reconcile", resource = %tt.name_any());

    let action = dispatcher
        .dispatch(LifecycleEvent::Upsert(tt.clone()), &ctx, &client, &span)
        .await?;
    println!("upsert -> {action:?}");

    // 未实现删除回调 -> 记录一条 info 日志并返回中性结果
    let action = dispatcher
        .dispatch(LifecycleEvent::Delete(tt), &ctx, &client, &span)
        .await?;
    println!("delete -> {action:?}");

    Ok(())
}
