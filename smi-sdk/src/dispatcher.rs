//! v1alpha2 回调分发器（V1Alpha2Dispatcher）
//!
//! 宿主控制器持有的唯一扩展点：
//! - `register`：保存用户注册表，重复注册以最后一次为准（原子替换）；
//! - `try_register`：仅在未注册时生效，否则返回 `AlreadyRegistered`；
//! - 分发器自身实现全部契约，每次调用时检查注册表是否具备对应能力，
//!   具备则原样转发参数并原样返回结果，缺失则记录一条 info 日志并返回中性结果。
//!
//! 注册表存放在 `ArcSwapOption` 中：读路径无锁，替换对之后开始的调用立即可见，
//! 已经取到旧注册表的调用会在旧实现上完成。
//!
use crate::{
    callback::Callback,
    context::CallbackContext,
    delete_handler::DeleteTrafficTarget,
    error::{CallbackResult, SdkError},
    registration::{Registration, UNREGISTERED},
    upsert_handler::UpsertTrafficTarget,
};
use arc_swap::ArcSwapOption;
use async_trait::async_trait;
use kube::runtime::controller::Action;
use kube::{Client, ResourceExt};
use smi_access::TrafficTarget;
use std::sync::Arc;
use tracing::{Span, info, warn};

/// 分发器配置
#[derive(Clone, Debug)]
pub struct DispatcherConfig {
    /// 控制器名称，作为 `controller` 字段附加在每条日志上
    pub name: String,
}

impl Default for DispatcherConfig {
    fn default() -> Self {
        Self {
            name: "traffic-target".to_string(),
        }
    }
}

pub struct V1Alpha2Dispatcher {
    config: DispatcherConfig,
    user: ArcSwapOption<Registration>,
}

impl Default for V1Alpha2Dispatcher {
    fn default() -> Self {
        Self::with_config(DispatcherConfig::default())
    }
}

impl V1Alpha2Dispatcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: DispatcherConfig) -> Self {
        Self {
            config,
            user: ArcSwapOption::from(None),
        }
    }

    pub fn config(&self) -> &DispatcherConfig {
        &self.config
    }

    /// 注册用户回调；已有注册时直接替换
    pub fn register(&self, registration: impl Into<Registration>) {
        let registration = registration.into();
        let implementor = registration.implementor();
        let capabilities = registration.capabilities();

        match self.user.swap(Some(Arc::new(registration))) {
            Some(previous) => info!(
                controller = %self.config.name,
                implementor,
                replaced = previous.implementor(),
                ?capabilities,
                "replaced registered callbacks"
            ),
            None => info!(
                controller = %self.config.name,
                implementor,
                ?capabilities,
                "registered callbacks"
            ),
        }
    }

    /// 仅在未注册时注册；已有注册时保持原状并返回错误
    pub fn try_register(&self, registration: impl Into<Registration>) -> Result<(), SdkError> {
        let registration = Arc::new(registration.into());
        let implementor = registration.implementor();

        let previous = self
            .user
            .compare_and_swap(&None::<Arc<Registration>>, Some(registration));

        if let Some(current) = &*previous {
            warn!(
                controller = %self.config.name,
                implementor,
                current = current.implementor(),
                "callbacks already registered, refusing to replace"
            );
            return Err(SdkError::AlreadyRegistered {
                implementor: current.implementor(),
            });
        }

        info!(controller = %self.config.name, implementor, "registered callbacks");
        Ok(())
    }

    /// 清除注册，返回此前的注册表
    pub fn unregister(&self) -> Option<Arc<Registration>> {
        self.user.swap(None)
    }

    pub fn is_registered(&self) -> bool {
        self.user.load().is_some()
    }

    /// 当前注册表声明的能力；未注册时为空
    pub fn capabilities(&self) -> Vec<Callback> {
        self.current()
            .map(|r| r.capabilities())
            .unwrap_or_default()
    }

    fn current(&self) -> Option<Arc<Registration>> {
        self.user.load_full()
    }

    fn skip(
        &self,
        callback: Callback,
        registration: Option<&Registration>,
        logger: &Span,
        tt: &TrafficTarget,
    ) -> Action {
        let implementor = registration.map_or(UNREGISTERED, Registration::implementor);
        let resource = tt.name_any();

        logger.in_scope(|| {
            info!(
                controller = %self.config.name,
                callback = callback.name(),
                implementor,
                resource = %resource,
                "client code does not implement {callback}"
            );
        });

        Action::await_change()
    }
}

#[async_trait]
impl UpsertTrafficTarget for V1Alpha2Dispatcher {
    async fn upsert_traffic_target(
        &self,
        ctx: &CallbackContext,
        client: &Client,
        logger: &Span,
        tt: &TrafficTarget,
    ) -> CallbackResult {
        let registration = self.current();

        let Some(user) = registration.as_deref().and_then(|r| r.upsert()) else {
            return Ok(self.skip(Callback::Upsert, registration.as_deref(), logger, tt));
        };

        user.upsert_traffic_target(ctx, client, logger, tt).await
    }
}

#[async_trait]
impl DeleteTrafficTarget for V1Alpha2Dispatcher {
    async fn delete_traffic_target(
        &self,
        ctx: &CallbackContext,
        client: &Client,
        logger: &Span,
        tt: &TrafficTarget,
    ) -> CallbackResult {
        let registration = self.current();

        let Some(user) = registration.as_deref().and_then(|r| r.delete()) else {
            return Ok(self.skip(Callback::Delete, registration.as_deref(), logger, tt));
        };

        user.delete_traffic_target(ctx, client, logger, tt).await
    }
}
