use crate::crypto::token::Token;
use num_bigint::BigUint;
use serde::{Deserialize, Serialize};

/// The three flights of the STS handshake.
///
/// The core never touches the wire; this enum only gives callers a single serializable
/// type to carry between peers with whatever encoding their transport uses.
///
/// STS 握手的三次传输。核心从不接触线路；此枚举只为调用方提供一个可序列化的类型，
/// 以便使用其传输层的任意编码在双方之间传递。
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub enum HandshakeMessage {
    /// Initiator -> Acceptor: the initiator's exponential `X`.
    Initiate { exponential: BigUint },

    /// Acceptor -> Initiator: the acceptor's exponential `Y` and its token.
    Accept { exponential: BigUint, token: Token },

    /// Initiator -> Acceptor: the initiator's token.
    Verify { token: Token },
}

impl HandshakeMessage {
    /// Name of the flight, for logs.
    pub fn kind(&self) -> &'static str {
        match self {
            HandshakeMessage::Initiate { .. } => "initiate",
            HandshakeMessage::Accept { .. } => "accept",
            HandshakeMessage::Verify { .. } => "verify",
        }
    }
}
