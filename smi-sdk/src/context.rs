use bon::Builder;
use std::time::Duration;
use tokio::time::Instant;
use tokio_util::sync::CancellationToken;

/// 回调上下文（Callback Context）
///
/// 承载一次回调调用的取消信号与截止时间，以及可选的关联追踪 ID。
/// 分发器只负责原样转发，不解释也不强制其中任何字段；
/// 是否响应取消、是否在截止前返回，完全由用户回调决定。
///
/// 典型用法：
/// ```rust
/// use smi_sdk::context::CallbackContext;
/// use std::time::Duration;
/// use tokio::time::Instant;
///
/// let ctx = CallbackContext::builder()
///     .deadline(Instant::now() + Duration::from_secs(30))
///     .correlation_id("reconcile-42")
///     .build();
/// assert!(!ctx.is_cancelled());
/// ```
#[derive(Builder, Clone, Debug, Default)]
pub struct CallbackContext {
    /// 取消信号：宿主关闭控制器时触发
    #[builder(default)]
    cancellation: CancellationToken,
    /// 截止时间（可选）
    deadline: Option<Instant>,
    /// 关联ID（可选），通常取自宿主的 reconcile 标识
    #[builder(into)]
    correlation_id: Option<String>,
}

impl CallbackContext {
    pub fn cancellation(&self) -> &CancellationToken {
        &self.cancellation
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancellation.is_cancelled()
    }

    pub fn deadline(&self) -> Option<Instant> {
        self.deadline
    }

    /// 距截止时间的剩余时长；已过期返回零，未设置返回 `None`
    pub fn remaining(&self) -> Option<Duration> {
        self.deadline
            .map(|deadline| deadline.saturating_duration_since(Instant::now()))
    }

    pub fn correlation_id(&self) -> Option<&str> {
        self.correlation_id.as_deref()
    }
}
