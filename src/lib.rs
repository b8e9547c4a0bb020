pub mod crypto;
pub mod error;
pub mod handshake;
pub mod protocol;

pub use crypto::group::Group;
pub use crypto::keys::SessionKey;
pub use crypto::signature::{IdentitySigner, IdentityVerifier};
pub use crypto::suite::{HashAlgorithm, ProtocolSuite, ProtocolSuiteBuilder, SymmetricCipher};
pub use crypto::token::Token;
pub use error::{HandshakeError, Result};
pub use handshake::{Acceptor, Initiator, Session};
pub use num_bigint::BigUint;
pub use protocol::message::HandshakeMessage;
pub use protocol::transcript::Role;
