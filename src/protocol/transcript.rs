//! The binding digest each party signs.
//!
//! This is the wire contract both peers must agree on:
//!
//! ```text
//! Hash( "STS" || role || enc(sender_exponential) || enc(recipient_exponential) )
//! ```
//!
//! where `role` is one byte naming the signer's role and `enc` is the group's fixed-width
//! big-endian encoding. The acceptor signs `(Y, X)`, the initiator signs `(X, Y)`.
//!
//! 每一方签名的绑定摘要，即双方必须一致的线路约定。
//! `role` 为标识签名者角色的一个字节，`enc` 为群的定长大端编码。
//! 接受方签名 `(Y, X)`，发起方签名 `(X, Y)`。

use crate::crypto::suite::ProtocolSuite;
use num_bigint::BigUint;

const DOMAIN: &[u8] = b"STS";

/// The two fixed roles of a handshake.
///
/// 握手的两个固定角色。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    Initiator,
    Acceptor,
}

impl Role {
    fn tag(self) -> u8 {
        match self {
            Role::Initiator => 0x01,
            Role::Acceptor => 0x02,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Role::Initiator => "initiator",
            Role::Acceptor => "acceptor",
        }
    }
}

/// Computes the digest a `signer` signs, binding its own exponential (`sender`) and the
/// one it received (`recipient`), in that order.
///
/// 计算 `signer` 要签名的摘要，按顺序绑定其自身的指数值（`sender`）与收到的指数值（`recipient`）。
pub fn binding_digest(
    suite: &ProtocolSuite,
    signer: Role,
    sender: &BigUint,
    recipient: &BigUint,
) -> Vec<u8> {
    let group = suite.group();
    let sender = group.encode_element(sender);
    let recipient = group.encode_element(recipient);
    suite
        .hash()
        .digest(&[DOMAIN, &[signer.tag()][..], sender.as_slice(), recipient.as_slice()])
}
