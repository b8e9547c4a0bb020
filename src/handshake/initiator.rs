//! Implements the initiator side of the STS handshake state machine.
//! 实现 STS 握手状态机的发起方。

use crate::crypto::suite::ProtocolSuite;
use crate::protocol::state::StateName;

mod state_authenticated;
mod state_created;
mod state_initiated;

/// The initiator's handshake state machine.
///
/// Generic over the state `State` to enforce the protocol flow at compile time:
/// `Created -> Initiated -> Authenticated`. Every transition consumes the session, so a
/// failed verification drops the private exponent together with the session.
///
/// 发起方握手状态机。
///
/// 通过泛型状态 `State` 在编译时强制执行协议流程：
/// `Created -> Initiated -> Authenticated`。每次转换都会消耗会话，
/// 因此验证失败时私有指数会随会话一起被丢弃。
#[derive(Debug)]
pub struct Initiator<State> {
    /// Data that exists at the current point of the exchange.
    ///
    /// 交换在当前阶段已存在的数据。
    state: State,
    /// Algorithms and group parameters, identical on both sides.
    ///
    /// 算法与群参数，双方一致。
    suite: ProtocolSuite,
}

impl<State: StateName> Initiator<State> {
    pub fn suite(&self) -> &ProtocolSuite {
        &self.suite
    }

    /// Name of the current state.
    pub fn state_name(&self) -> &'static str {
        State::NAME
    }
}
