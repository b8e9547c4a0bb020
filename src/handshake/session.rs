//! A runtime-checked handshake session.
//!
//! [`Session`] drives the same transitions as [`Initiator`] and [`Acceptor`], but keeps
//! its stage in a tagged enum so it can be stored in collections and advanced through
//! `&mut self`. Calls made out of order fail with [`HandshakeError::Sequencing`]; a
//! failed transition leaves the session permanently unusable.
//!
//! 运行时检查的握手会话。
//!
//! [`Session`] 执行与 [`Initiator`] 和 [`Acceptor`] 相同的状态转换，但将阶段保存在带标签的
//! 枚举中，因此可以存放在集合里并通过 `&mut self` 推进。顺序错误的调用会返回
//! [`HandshakeError::Sequencing`]；转换失败后会话将永久不可用。

use super::acceptor::Acceptor;
use super::initiator::Initiator;
use crate::crypto::keys::SessionKey;
use crate::crypto::signature::{IdentitySigner, IdentityVerifier};
use crate::crypto::suite::ProtocolSuite;
use crate::crypto::token::Token;
use crate::error::{HandshakeError, Result};
use crate::protocol::state::{Created, Exchanged, Initiated};
use crate::protocol::transcript::Role;
use num_bigint::BigUint;
use rand_core::CryptoRngCore;
use std::mem;

#[derive(Debug)]
enum Stage {
    InitiatorCreated(Initiator<Created>),
    Initiated(Initiator<Initiated>),
    AcceptorCreated(Acceptor<Created>),
    Exchanged(Acceptor<Exchanged>),
    Authenticated(SessionKey),
    Failed,
}

impl Stage {
    fn name(&self) -> &'static str {
        match self {
            Stage::InitiatorCreated(_) | Stage::AcceptorCreated(_) => "created",
            Stage::Initiated(_) => "initiated",
            Stage::Exchanged(_) => "exchanged",
            Stage::Authenticated(_) => "authenticated",
            Stage::Failed => "failed",
        }
    }
}

/// One handshake attempt with a role fixed at creation.
///
/// 一次握手尝试，角色在创建时确定。
#[derive(Debug)]
pub struct Session {
    role: Role,
    stage: Stage,
}

impl Session {
    /// Creates an initiator session.
    pub fn initiator<R: CryptoRngCore>(rng: &mut R, suite: &ProtocolSuite) -> Self {
        Self {
            role: Role::Initiator,
            stage: Stage::InitiatorCreated(Initiator::new(rng, suite)),
        }
    }

    /// Creates an acceptor session.
    pub fn acceptor<R: CryptoRngCore>(rng: &mut R, suite: &ProtocolSuite) -> Self {
        Self {
            role: Role::Acceptor,
            stage: Stage::AcceptorCreated(Acceptor::new(rng, suite)),
        }
    }

    pub fn role(&self) -> Role {
        self.role
    }

    /// Name of the current stage: `created`, `initiated`, `exchanged`, `authenticated`
    /// or `failed`.
    pub fn state(&self) -> &'static str {
        self.stage.name()
    }

    /// Returns `true` once the peer has been authenticated.
    pub fn is_authenticated(&self) -> bool {
        matches!(self.stage, Stage::Authenticated(_))
    }

    /// Initiator only: computes and returns `X = g^x mod p`.
    ///
    /// Repeat calls return the same `X`; the exponent is never redrawn.
    ///
    /// 仅限发起方：计算并返回 `X = g^x mod p`。重复调用返回相同的 `X`，指数不会重新抽取。
    pub fn initiate(&mut self) -> Result<BigUint> {
        match mem::replace(&mut self.stage, Stage::Failed) {
            Stage::InitiatorCreated(initiator) => {
                let (exponential, next) = initiator.initiate();
                self.stage = Stage::Initiated(next);
                Ok(exponential)
            }
            Stage::Initiated(initiator) => {
                let exponential = initiator.exponential().clone();
                self.stage = Stage::Initiated(initiator);
                Ok(exponential)
            }
            other => Err(self.out_of_order("initiate", other)),
        }
    }

    /// Acceptor only: answers the initiator's exponential with `(Y, token)`.
    ///
    /// See [`Acceptor::accept`].
    pub fn accept<R, S>(
        &mut self,
        rng: &mut R,
        own_key: &S,
        peer_exponential: &BigUint,
    ) -> Result<(BigUint, Token)>
    where
        R: CryptoRngCore,
        S: IdentitySigner + ?Sized,
    {
        match mem::replace(&mut self.stage, Stage::Failed) {
            Stage::AcceptorCreated(acceptor) => {
                let (exponential, token, next) = acceptor.accept(rng, own_key, peer_exponential)?;
                self.stage = Stage::Exchanged(next);
                Ok((exponential, token))
            }
            other => Err(self.out_of_order("accept", other)),
        }
    }

    /// Initiator only: authenticates the acceptor and returns the initiator's token.
    ///
    /// See [`Initiator::verify`]. On failure the session moves to the `failed` stage.
    ///
    /// 仅限发起方：认证接受方并返回发起方的令牌。失败时会话进入 `failed` 阶段。
    pub fn verify<R, S, V>(
        &mut self,
        rng: &mut R,
        own_key: &S,
        peer_key: &V,
        peer_exponential: &BigUint,
        peer_token: &Token,
    ) -> Result<Token>
    where
        R: CryptoRngCore,
        S: IdentitySigner + ?Sized,
        V: IdentityVerifier + ?Sized,
    {
        match mem::replace(&mut self.stage, Stage::Failed) {
            Stage::Initiated(initiator) => {
                let (token, authenticated) =
                    initiator.verify(rng, own_key, peer_key, peer_exponential, peer_token)?;
                self.stage = Stage::Authenticated(authenticated.into_secret());
                Ok(token)
            }
            other => Err(self.out_of_order("verify", other)),
        }
    }

    /// Acceptor only: authenticates the initiator from its token.
    ///
    /// See [`Acceptor::finalize`]. On failure the session moves to the `failed` stage.
    pub fn finalize<V>(&mut self, peer_key: &V, peer_token: &Token) -> Result<()>
    where
        V: IdentityVerifier + ?Sized,
    {
        match mem::replace(&mut self.stage, Stage::Failed) {
            Stage::Exchanged(acceptor) => {
                let authenticated = acceptor.finalize(peer_key, peer_token)?;
                self.stage = Stage::Authenticated(authenticated.into_secret());
                Ok(())
            }
            other => Err(self.out_of_order("finalize", other)),
        }
    }

    /// The agreed secret, available only after successful authentication.
    ///
    /// 协商出的密钥，仅在认证成功后可用。
    pub fn secret(&self) -> Result<&SessionKey> {
        match &self.stage {
            Stage::Authenticated(key) => Ok(key),
            other => Err(HandshakeError::Sequencing {
                operation: "secret",
                state: other.name(),
            }),
        }
    }

    /// Puts `stage` back and reports the rejected call.
    fn out_of_order(&mut self, operation: &'static str, stage: Stage) -> HandshakeError {
        let state = stage.name();
        tracing::debug!(role = self.role.as_str(), operation, state, "call out of order");
        self.stage = stage;
        HandshakeError::Sequencing { operation, state }
    }
}
