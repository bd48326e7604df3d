use kube::runtime::controller::Action;

/// SDK 错误
///
/// 用户回调可以返回任意变体；分发器在调度路径上从不构造错误，
/// 回调返回的错误原样交还宿主，由宿主决定重试与退避。
#[non_exhaustive]
#[derive(thiserror::Error, Debug)]
pub enum SdkError {
    #[error("kube: {0}")]
    Kube(#[from] kube::Error),

    #[error("validation: {0}")]
    Validation(String),

    #[error("infra: {0}")]
    Infra(String),

    #[error("callback: {0}")]
    Callback(#[from] anyhow::Error),

    #[error("callbacks already registered: implementor={implementor}")]
    AlreadyRegistered { implementor: &'static str },
}

/// 回调返回值：调度指令或错误
pub type CallbackResult = Result<Action, SdkError>;
