//! Defines the states of the STS handshake state machine.
//!
//! Each state is a struct carrying exactly the data that exists at that point of the
//! exchange. Sessions are generic over their state, so only the transitions legal for a
//! role and state are exposed in the API.
//!
//! 定义 STS 握手状态机的各个状态。
//!
//! 每个状态都是一个结构体，只携带交换在该阶段已存在的数据。会话对其状态是泛型的，
//! 因此 API 中只暴露该角色和状态下合法的转换。

use crate::crypto::group::Exponent;
use crate::crypto::keys::SessionKey;
use num_bigint::BigUint;

/// The initial state of a session, initiator or acceptor. Holds the freshly drawn
/// private exponent.
///
/// 会话的初始状态（发起方或接受方），持有新抽取的私有指数。
#[derive(Debug)]
pub struct Created {
    pub(crate) exponent: Exponent,
}

/// Initiator state after its exponential has been sent, awaiting the acceptor's reply.
///
/// 发起方已发送指数值，正在等待接受方回复的状态。
#[derive(Debug)]
pub struct Initiated {
    pub(crate) exponent: Exponent,
    pub(crate) exponential: BigUint,
}

/// Acceptor state after its reply has been sent, awaiting the initiator's token.
///
/// 接受方已发送回复，正在等待发起方令牌的状态。
#[derive(Debug)]
pub struct Exchanged {
    pub(crate) exponential: BigUint,
    pub(crate) peer_exponential: BigUint,
    pub(crate) key: SessionKey,
}

/// The final state of a successful handshake: the peer has proven its identity.
///
/// 握手成功的最终状态：对方已证明其身份。
#[derive(Debug)]
pub struct Authenticated {
    pub(crate) key: SessionKey,
}

/// Human-readable state names, used in errors and logs.
pub trait StateName {
    const NAME: &'static str;
}

impl StateName for Created {
    const NAME: &'static str = "created";
}

impl StateName for Initiated {
    const NAME: &'static str = "initiated";
}

impl StateName for Exchanged {
    const NAME: &'static str = "exchanged";
}

impl StateName for Authenticated {
    const NAME: &'static str = "authenticated";
}
