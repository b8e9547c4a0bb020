use super::Acceptor;
use crate::crypto::keys::derive_session_key;
use crate::crypto::signature::IdentitySigner;
use crate::crypto::suite::ProtocolSuite;
use crate::crypto::token::{self, Token};
use crate::error::{HandshakeError, Result};
use crate::protocol::state::{Created, Exchanged};
use crate::protocol::transcript::{Role, binding_digest};
use num_bigint::BigUint;
use rand_core::CryptoRngCore;

impl Acceptor<Created> {
    /// Creates an acceptor session, drawing its private exponent from `rng`.
    ///
    /// 创建接受方会话，从 `rng` 抽取私有指数。
    pub fn new<R: CryptoRngCore>(rng: &mut R, suite: &ProtocolSuite) -> Self {
        let exponent = suite.group().random_exponent(rng);
        tracing::debug!(
            role = "acceptor",
            group_bits = suite.group().bits(),
            "handshake session created"
        );
        Self {
            state: Created { exponent },
            suite: suite.clone(),
        }
    }

    /// Answers the initiator's exponential `X`.
    ///
    /// Computes `Y = g^y mod p`, the shared value `Z = X^y mod p` and the key derived
    /// from it, then signs the binding of `(Y, X)` with `own_key` and encrypts the
    /// signature under that key. Returns `Y` and the token to send back, plus the session
    /// in the `Exchanged` state.
    ///
    /// # Errors
    ///
    /// - [`HandshakeError::InvalidGroupElement`] if `X` is outside `[1, p - 1)`.
    /// - [`HandshakeError::Configuration`] if signing or encryption cannot be performed.
    ///
    /// 响应发起方的指数值 `X`。
    ///
    /// 计算 `Y = g^y mod p`、共享值 `Z = X^y mod p` 及其派生密钥，然后用 `own_key`
    /// 对 `(Y, X)` 的绑定签名，并在该密钥下加密签名。返回 `Y`、需回传的令牌，
    /// 以及处于 `Exchanged` 状态的会话。
    pub fn accept<R, S>(
        self,
        rng: &mut R,
        own_key: &S,
        peer_exponential: &BigUint,
    ) -> Result<(BigUint, Token, Acceptor<Exchanged>)>
    where
        R: CryptoRngCore,
        S: IdentitySigner + ?Sized,
    {
        let suite = &self.suite;
        if !suite.group().contains(peer_exponential) {
            tracing::warn!(role = "acceptor", "initiator exponential out of range");
            return Err(HandshakeError::InvalidGroupElement);
        }

        let Created { exponent } = &self.state;
        let exponential = suite.group().exponential(exponent);
        let shared = suite.group().shared_value(peer_exponential, exponent);
        let key = derive_session_key(suite, &shared);

        let digest = binding_digest(suite, Role::Acceptor, &exponential, peer_exponential);
        let token = token::seal(suite, &key, own_key, rng, &digest)?;
        tracing::debug!(role = "acceptor", "exchange answered");

        let next = Acceptor {
            state: Exchanged {
                exponential: exponential.clone(),
                peer_exponential: peer_exponential.clone(),
                key,
            },
            suite: self.suite,
        };
        Ok((exponential, token, next))
    }

    #[cfg(test)]
    pub(crate) fn exponent(&self) -> BigUint {
        self.state.exponent.value()
    }
}
