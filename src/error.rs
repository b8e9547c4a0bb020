use thiserror::Error;

/// Errors produced by the STS handshake.
///
/// Only [`HandshakeError::AuthenticationFailure`] is a security event: the session that
/// produced it must be dropped and the handshake restarted with a fresh session.
///
/// STS 握手产生的错误。
///
/// 只有 [`HandshakeError::AuthenticationFailure`] 属于安全事件：产生该错误的会话必须被丢弃，
/// 并使用新的会话重新开始握手。
#[derive(Debug, Error)]
pub enum HandshakeError {
    /// Construction parameters are inconsistent, or a signing / encryption
    /// capability could not be used with them.
    ///
    /// 构造参数不一致，或者无法使用这些参数执行签名/加密。
    #[error("invalid handshake configuration: {0}")]
    Configuration(String),

    /// The peer's exponential lies outside `[1, p - 1)`.
    ///
    /// 对方的指数值不在 `[1, p - 1)` 范围内。
    #[error("peer exponential is not a valid group element")]
    InvalidGroupElement,

    /// The peer's token could not be decrypted, parsed or verified.
    ///
    /// The cause is deliberately not exposed.
    ///
    /// 无法解密、解析或验证对方的令牌。不对外暴露具体原因。
    #[error("peer authentication failed")]
    AuthenticationFailure,

    /// A handshake call was made out of order for the session's role.
    ///
    /// 针对会话角色的握手调用顺序错误。
    #[error("`{operation}` is not allowed in the {state} state")]
    Sequencing {
        operation: &'static str,
        state: &'static str,
    },
}

impl HandshakeError {
    pub(crate) fn configuration(msg: impl Into<String>) -> Self {
        HandshakeError::Configuration(msg.into())
    }
}

pub type Result<T> = std::result::Result<T, HandshakeError>;
