//! Implements the acceptor side of the STS handshake state machine.
//! 实现 STS 握手状态机的接受方。

use crate::crypto::suite::ProtocolSuite;
use crate::protocol::state::StateName;

mod state_authenticated;
mod state_created;
mod state_exchanged;

/// The acceptor's handshake state machine.
///
/// Flow: `Created -> Exchanged -> Authenticated`, enforced at compile time.
///
/// 接受方握手状态机。流程 `Created -> Exchanged -> Authenticated` 在编译时强制执行。
#[derive(Debug)]
pub struct Acceptor<State> {
    state: State,
    suite: ProtocolSuite,
}

impl<State: StateName> Acceptor<State> {
    pub fn suite(&self) -> &ProtocolSuite {
        &self.suite
    }

    /// Name of the current state.
    pub fn state_name(&self) -> &'static str {
        State::NAME
    }
}
