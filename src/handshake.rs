//! The handshake state machines for both roles.
//!
//! [`Initiator`] and [`Acceptor`] check call order at compile time; [`Session`] checks it
//! at runtime.
//!
//! 双方角色的握手状态机。[`Initiator`] 与 [`Acceptor`] 在编译时检查调用顺序，
//! [`Session`] 在运行时检查。

pub mod acceptor;
pub mod initiator;
pub mod session;

pub use acceptor::Acceptor;
pub use initiator::Initiator;
pub use session::Session;
