use super::Initiator;
use crate::crypto::suite::ProtocolSuite;
use crate::protocol::state::{Created, Initiated};
use num_bigint::BigUint;
use rand_core::CryptoRngCore;

impl Initiator<Created> {
    /// Creates an initiator session, drawing its private exponent from `rng`.
    ///
    /// One session serves exactly one handshake attempt.
    ///
    /// 创建发起方会话，从 `rng` 抽取私有指数。一个会话只服务于一次握手尝试。
    pub fn new<R: CryptoRngCore>(rng: &mut R, suite: &ProtocolSuite) -> Self {
        let exponent = suite.group().random_exponent(rng);
        tracing::debug!(
            role = "initiator",
            group_bits = suite.group().bits(),
            "handshake session created"
        );
        Self {
            state: Created { exponent },
            suite: suite.clone(),
        }
    }

    /// Starts the handshake by computing the exponential `X = g^x mod p`.
    ///
    /// Returns `X`, to be sent to the acceptor, and the session in the `Initiated` state.
    ///
    /// 计算指数值 `X = g^x mod p` 以启动握手。
    /// 返回需发送给接受方的 `X`，以及处于 `Initiated` 状态的会话。
    pub fn initiate(self) -> (BigUint, Initiator<Initiated>) {
        let Created { exponent } = self.state;
        let exponential = self.suite.group().exponential(&exponent);
        tracing::debug!(role = "initiator", "exponential computed");

        let next = Initiator {
            state: Initiated {
                exponent,
                exponential: exponential.clone(),
            },
            suite: self.suite,
        };
        (exponential, next)
    }

    #[cfg(test)]
    pub(crate) fn exponent(&self) -> BigUint {
        self.state.exponent.value()
    }
}
