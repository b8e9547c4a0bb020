//! Builds and opens the authentication token each peer sends.
//!
//! A token is `IV || CBC(K, Sign(sk, digest))`: the signature over the binding digest,
//! PKCS#7 padded and encrypted under the derived key with a fresh random IV that is sent
//! in clear. Opening reverses every step; any failure on the way, structural or
//! cryptographic, collapses into [`HandshakeError::AuthenticationFailure`].
//!
//! 构建并打开每一方发送的认证令牌。
//!
//! 令牌格式为 `IV || CBC(K, Sign(sk, digest))`：对绑定摘要的签名经 PKCS#7 填充后，
//! 用派生密钥和新鲜随机 IV 加密，IV 以明文发送。打开时逆向执行每一步；
//! 任何失败（结构性或密码学上的）都统一为 [`HandshakeError::AuthenticationFailure`]。

use crate::crypto::keys::SessionKey;
use crate::crypto::signature::{IdentitySigner, IdentityVerifier};
use crate::crypto::suite::ProtocolSuite;
use crate::error::{HandshakeError, Result};
use rand_core::CryptoRngCore;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Encrypted, signed evidence binding a long-term identity to one exchange.
///
/// 加密且签名的证据，将长期身份绑定到一次具体的交换。
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token(Vec<u8>);

impl Token {
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<Vec<u8>> for Token {
    fn from(bytes: Vec<u8>) -> Self {
        Token(bytes)
    }
}

impl AsRef<[u8]> for Token {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl fmt::Debug for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Token({} bytes)", self.0.len())
    }
}

/// Why a token failed to open. Only ever logged, never returned.
#[derive(Debug, Clone, Copy)]
enum OpenFailure {
    Truncated,
    Undecryptable,
    BadSignature,
}

/// Signs `digest` and encrypts the signature under `key`.
///
/// 对 `digest` 签名并在 `key` 下加密签名。
pub fn seal<S: IdentitySigner + ?Sized>(
    suite: &ProtocolSuite,
    key: &SessionKey,
    signer: &S,
    rng: &mut dyn CryptoRngCore,
    digest: &[u8],
) -> Result<Token> {
    let signature = signer.sign(rng, suite.hash(), digest)?;

    let cipher = suite.cipher();
    let mut token = vec![0u8; cipher.block_len()];
    rng.fill_bytes(&mut token);
    let ciphertext = cipher
        .encrypt(key.as_bytes(), &token, &signature)
        .ok_or_else(|| {
            HandshakeError::configuration(format!(
                "{:?} cannot encrypt with a {}-byte key",
                cipher,
                key.len()
            ))
        })?;
    token.extend_from_slice(&ciphertext);

    tracing::trace!(
        signature_len = signature.len(),
        token_len = token.len(),
        "sealed authentication token"
    );
    Ok(Token(token))
}

/// Decrypts `token` under `key` and verifies the embedded signature over `digest`.
///
/// 在 `key` 下解密 `token`，并验证其中对 `digest` 的签名。
pub fn open<V: IdentityVerifier + ?Sized>(
    suite: &ProtocolSuite,
    key: &SessionKey,
    verifier: &V,
    digest: &[u8],
    token: &Token,
) -> Result<()> {
    try_open(suite, key, verifier, digest, token).map_err(|cause| {
        tracing::debug!(?cause, token_len = token.len(), "authentication token rejected");
        HandshakeError::AuthenticationFailure
    })
}

fn try_open<V: IdentityVerifier + ?Sized>(
    suite: &ProtocolSuite,
    key: &SessionKey,
    verifier: &V,
    digest: &[u8],
    token: &Token,
) -> std::result::Result<(), OpenFailure> {
    let cipher = suite.cipher();
    let iv_len = cipher.block_len();
    if token.len() <= iv_len {
        return Err(OpenFailure::Truncated);
    }
    let (iv, ciphertext) = token.as_bytes().split_at(iv_len);
    let signature = cipher
        .decrypt(key.as_bytes(), iv, ciphertext)
        .ok_or(OpenFailure::Undecryptable)?;
    if verifier.verify(suite.hash(), digest, &signature) {
        Ok(())
    } else {
        Err(OpenFailure::BadSignature)
    }
}
