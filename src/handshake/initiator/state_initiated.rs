use super::Initiator;
use crate::crypto::keys::derive_session_key;
use crate::crypto::signature::{IdentitySigner, IdentityVerifier};
use crate::crypto::token::{self, Token};
use crate::error::{HandshakeError, Result};
use crate::protocol::state::{Authenticated, Initiated};
use crate::protocol::transcript::{Role, binding_digest};
use num_bigint::BigUint;
use rand_core::CryptoRngCore;

impl Initiator<Initiated> {
    /// The exponential `X` sent to the acceptor.
    pub fn exponential(&self) -> &BigUint {
        &self.state.exponential
    }

    /// Processes the acceptor's reply `(Y, token)`.
    ///
    /// Derives the shared key from `Y`, opens the acceptor's token and checks its
    /// signature over the acceptor's binding of `(Y, X)` against `peer_key`. On success,
    /// returns the initiator's own token (a signature over `(X, Y)`) to send back, and the
    /// authenticated session.
    ///
    /// Any problem with `Y` or the token yields [`HandshakeError::AuthenticationFailure`];
    /// the session is consumed either way and must not be retried.
    ///
    /// 处理接受方的回复 `(Y, token)`。
    ///
    /// 从 `Y` 派生共享密钥，打开接受方的令牌，并用 `peer_key` 验证其对 `(Y, X)` 绑定的签名。
    /// 成功时返回发起方自己的令牌（对 `(X, Y)` 的签名）和已认证的会话。
    /// `Y` 或令牌的任何问题都会导致 [`HandshakeError::AuthenticationFailure`]；
    /// 无论结果如何会话都会被消耗，不得重试。
    pub fn verify<R, S, V>(
        self,
        rng: &mut R,
        own_key: &S,
        peer_key: &V,
        peer_exponential: &BigUint,
        peer_token: &Token,
    ) -> Result<(Token, Initiator<Authenticated>)>
    where
        R: CryptoRngCore,
        S: IdentitySigner + ?Sized,
        V: IdentityVerifier + ?Sized,
    {
        let suite = &self.suite;
        let Initiated {
            exponent,
            exponential,
        } = &self.state;

        if !suite.group().contains(peer_exponential) {
            tracing::warn!(role = "initiator", "peer exponential out of range");
            return Err(HandshakeError::AuthenticationFailure);
        }

        let shared = suite.group().shared_value(peer_exponential, exponent);
        let key = derive_session_key(suite, &shared);

        let expected = binding_digest(suite, Role::Acceptor, peer_exponential, exponential);
        if let Err(e) = token::open(suite, &key, peer_key, &expected, peer_token) {
            tracing::warn!(role = "initiator", "acceptor failed to authenticate");
            return Err(e);
        }

        let digest = binding_digest(suite, Role::Initiator, exponential, peer_exponential);
        let own_token = token::seal(suite, &key, own_key, rng, &digest)?;
        tracing::debug!(role = "initiator", "handshake authenticated");

        Ok((
            own_token,
            Initiator {
                state: Authenticated { key },
                suite: self.suite,
            },
        ))
    }
}
