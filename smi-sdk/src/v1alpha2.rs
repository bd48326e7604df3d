use crate::{delete_handler::DeleteTrafficTarget, upsert_handler::UpsertTrafficTarget};

/// v1alpha2 API 的全部回调
///
/// 仅作为文档上的并集存在：分发器从不要求用户同时实现两个契约，
/// 任何同时实现了两者的类型都会自动获得该 trait。
pub trait V1Alpha2: UpsertTrafficTarget + DeleteTrafficTarget {}

impl<T> V1Alpha2 for T where T: UpsertTrafficTarget + DeleteTrafficTarget + ?Sized {}
