//! 用户回调注册表（Registration）
//!
//! 以能力表的形式描述一个用户实现：它暴露了哪些契约、每个契约对应哪个对象。
//! - `with_upsert` / `with_delete`：接受只实现了单个契约的任意类型；
//! - `From<Arc<T>>`：同时实现两个契约的类型可以直接转换；
//! - 空注册表不满足任何契约，分发器据此走空操作路径。
//!
use crate::{
    callback::Callback, delete_handler::DeleteTrafficTarget, upsert_handler::UpsertTrafficTarget,
    v1alpha2::V1Alpha2,
};
use std::any::type_name;
use std::fmt;
use std::sync::Arc;

/// 未注册时在日志中使用的实现者名称
pub const UNREGISTERED: &str = "<unregistered>";

#[derive(Clone, Default)]
pub struct Registration {
    implementor: Option<&'static str>,
    upsert: Option<Arc<dyn UpsertTrafficTarget>>,
    delete: Option<Arc<dyn DeleteTrafficTarget>>,
}

impl Registration {
    pub fn new() -> Self {
        Self::default()
    }

    /// 声明用户对象实现了新建/更新回调
    pub fn with_upsert<T>(mut self, user: Arc<T>) -> Self
    where
        T: UpsertTrafficTarget + 'static,
    {
        self.implementor.get_or_insert(type_name::<T>());
        self.upsert = Some(user);
        self
    }

    /// 声明用户对象实现了删除回调
    pub fn with_delete<T>(mut self, user: Arc<T>) -> Self
    where
        T: DeleteTrafficTarget + 'static,
    {
        self.implementor.get_or_insert(type_name::<T>());
        self.delete = Some(user);
        self
    }

    pub fn upsert(&self) -> Option<&Arc<dyn UpsertTrafficTarget>> {
        self.upsert.as_ref()
    }

    pub fn delete(&self) -> Option<&Arc<dyn DeleteTrafficTarget>> {
        self.delete.as_ref()
    }

    pub fn implements(&self, callback: Callback) -> bool {
        match callback {
            Callback::Upsert => self.upsert.is_some(),
            Callback::Delete => self.delete.is_some(),
        }
    }

    /// 已实现的契约列表
    pub fn capabilities(&self) -> Vec<Callback> {
        Callback::ALL
            .into_iter()
            .filter(|c| self.implements(*c))
            .collect()
    }

    /// 首个声明能力的用户类型名；空注册表返回 `<unregistered>`
    pub fn implementor(&self) -> &'static str {
        self.implementor.unwrap_or(UNREGISTERED)
    }

    pub fn is_empty(&self) -> bool {
        self.upsert.is_none() && self.delete.is_none()
    }
}

impl<T> From<Arc<T>> for Registration
where
    T: V1Alpha2 + 'static,
{
    fn from(user: Arc<T>) -> Self {
        Registration::new().with_upsert(user.clone()).with_delete(user)
    }
}

impl fmt::Debug for Registration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Registration")
            .field("implementor", &self.implementor())
            .field("capabilities", &self.capabilities())
            .finish()
    }
}
