use std::fmt;

/// 单个能力契约的标识
///
/// 契约 trait 需要保持对象安全，稳定名称因此放在这里，
/// 用于日志与错误信息，避免依赖 `type_name::<T>()`。
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Callback {
    Upsert,
    Delete,
}

impl Callback {
    pub const ALL: [Callback; 2] = [Callback::Upsert, Callback::Delete];

    pub const fn name(self) -> &'static str {
        match self {
            Callback::Upsert => "UpsertTrafficTarget",
            Callback::Delete => "DeleteTrafficTarget",
        }
    }
}

impl fmt::Display for Callback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
