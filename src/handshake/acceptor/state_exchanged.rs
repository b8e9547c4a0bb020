use super::Acceptor;
use crate::crypto::signature::IdentityVerifier;
use crate::crypto::token::{self, Token};
use crate::error::Result;
use crate::protocol::state::{Authenticated, Exchanged};
use crate::protocol::transcript::{Role, binding_digest};
use num_bigint::BigUint;

impl Acceptor<Exchanged> {
    /// The exponential `Y` sent to the initiator.
    pub fn exponential(&self) -> &BigUint {
        &self.state.exponential
    }

    /// The initiator's exponential `X` this session answered.
    pub fn peer_exponential(&self) -> &BigUint {
        &self.state.peer_exponential
    }

    /// Completes the handshake with the initiator's token.
    ///
    /// Opens the token with the already derived key and checks its signature over the
    /// initiator's binding of `(X, Y)` against `peer_key`. Fails with
    /// [`HandshakeError::AuthenticationFailure`](crate::error::HandshakeError::AuthenticationFailure)
    /// on any mismatch; the session is consumed either way.
    ///
    /// 使用发起方的令牌完成握手。用已派生的密钥打开令牌，并用 `peer_key` 验证其对
    /// `(X, Y)` 绑定的签名。任何不匹配都会导致认证失败；无论结果如何会话都会被消耗。
    pub fn finalize<V>(self, peer_key: &V, peer_token: &Token) -> Result<Acceptor<Authenticated>>
    where
        V: IdentityVerifier + ?Sized,
    {
        let Exchanged {
            exponential,
            peer_exponential,
            key,
        } = self.state;

        let expected = binding_digest(
            &self.suite,
            Role::Initiator,
            &peer_exponential,
            &exponential,
        );
        if let Err(e) = token::open(&self.suite, &key, peer_key, &expected, peer_token) {
            tracing::warn!(role = "acceptor", "initiator failed to authenticate");
            return Err(e);
        }
        tracing::debug!(role = "acceptor", "handshake authenticated");

        Ok(Acceptor {
            state: Authenticated { key },
            suite: self.suite,
        })
    }
}
