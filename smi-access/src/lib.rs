//! SMI 访问控制资源模型（smi-access）
//!
//! 以 `kube` 的 `CustomResource` 派生宏镜像上游 SMI 规范中的
//! `access.smi-spec.io/v1alpha2` 资源，供回调 SDK 在类型层面引用：
//! - `TrafficTarget`：声明哪些身份（来源）可以按哪些规则访问目标身份；
//! - `IdentityBindingSubject`：身份主体（通常是 ServiceAccount）；
//! - `TrafficTargetRule`：对 HTTPRouteGroup / TCPRoute 等路由资源的引用。
//!
//! 本 crate 不做校验，也不决定任何线上格式，字段含义以 SMI 规范为准。
//!
pub mod traffic_target;

pub use traffic_target::{
    IdentityBindingSubject, TrafficTarget, TrafficTargetRule, TrafficTargetSpec,
};

/// 资源所属 API 组
pub const GROUP: &str = "access.smi-spec.io";
/// 资源版本
pub const VERSION: &str = "v1alpha2";
