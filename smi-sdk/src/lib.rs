//! SMI 回调 SDK（smi-sdk）
//!
//! 让宿主控制器把 `TrafficTarget` 的生命周期事件交给用户代码处理，
//! 而不要求用户实现完整的接口：
//! - 每个生命周期事件对应一个独立的能力契约（`UpsertTrafficTarget`、`DeleteTrafficTarget`）；
//! - 用户只需实现关心的契约，通过 `Registration` 声明后注册到 `V1Alpha2Dispatcher`；
//! - 分发器在每次调用时检查能力，缺失的回调记录一条 info 日志并返回中性结果。
//!
//! 典型用法：
//! 1. 为自己的类型实现一个或两个契约；
//! 2. 控制器启动时调用 `V1Alpha2Dispatcher::register`；
//! 3. 在 reconcile 中把事件交给分发器（或直接调用 `dispatch`）。
//!
pub mod callback;
pub mod context;
pub mod delete_handler;
pub mod dispatcher;
pub mod error;
pub mod lifecycle;
pub mod registration;
pub mod upsert_handler;
pub mod v1alpha2;

pub use callback::Callback;
pub use context::CallbackContext;
pub use delete_handler::DeleteTrafficTarget;
pub use dispatcher::{DispatcherConfig, V1Alpha2Dispatcher};
pub use error::{CallbackResult, SdkError};
pub use lifecycle::LifecycleEvent;
pub use registration::Registration;
pub use upsert_handler::UpsertTrafficTarget;
pub use v1alpha2::V1Alpha2;

pub use kube::runtime::controller::Action;
pub use smi_access::TrafficTarget;
