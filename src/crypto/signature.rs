//! Long-term identity keys: the signing and verification capabilities a session needs.
//!
//! The handshake is polymorphic over the signature algorithm. Implementations are
//! provided for RSA (PKCS#1 v1.5 over the prehashed digest, tagged with the suite hash's
//! OID) and Ed25519 (which signs the digest bytes as its message).
//!
//! 长期身份密钥：会话所需的签名与验证能力。
//!
//! 握手对签名算法是多态的。已为 RSA（对预哈希摘要做 PKCS#1 v1.5，带套件哈希的 OID）
//! 和 Ed25519（将摘要字节作为消息签名）提供实现。

use crate::crypto::suite::HashAlgorithm;
use crate::error::{HandshakeError, Result};
use ed25519_dalek::{Signer, Verifier};
use md5::Md5;
use rand_core::CryptoRngCore;
use rsa::{Pkcs1v15Sign, RsaPrivateKey, RsaPublicKey};
use sha2::{Sha256, Sha384, Sha512};

/// Produces signatures over binding digests with a long-term private key.
///
/// 使用长期私钥对绑定摘要进行签名。
pub trait IdentitySigner {
    /// Signs `digest`, which was computed with `hash`.
    ///
    /// `rng` is available for randomized or blinded signing schemes.
    fn sign(
        &self,
        rng: &mut dyn CryptoRngCore,
        hash: HashAlgorithm,
        digest: &[u8],
    ) -> Result<Vec<u8>>;
}

/// Checks signatures over binding digests with a long-term public key.
///
/// 使用长期公钥验证绑定摘要上的签名。
pub trait IdentityVerifier {
    /// Returns `true` only if `signature` is a valid signature of `digest`.
    fn verify(&self, hash: HashAlgorithm, digest: &[u8], signature: &[u8]) -> bool;
}

fn pkcs1v15_scheme(hash: HashAlgorithm) -> Pkcs1v15Sign {
    match hash {
        HashAlgorithm::Md5 => Pkcs1v15Sign::new::<Md5>(),
        HashAlgorithm::Sha256 => Pkcs1v15Sign::new::<Sha256>(),
        HashAlgorithm::Sha384 => Pkcs1v15Sign::new::<Sha384>(),
        HashAlgorithm::Sha512 => Pkcs1v15Sign::new::<Sha512>(),
    }
}

impl IdentitySigner for RsaPrivateKey {
    fn sign(
        &self,
        rng: &mut dyn CryptoRngCore,
        hash: HashAlgorithm,
        digest: &[u8],
    ) -> Result<Vec<u8>> {
        self.sign_with_rng(&mut &mut *rng, pkcs1v15_scheme(hash), digest)
            .map_err(|e| HandshakeError::configuration(format!("RSA signing failed: {e}")))
    }
}

impl IdentityVerifier for RsaPublicKey {
    fn verify(&self, hash: HashAlgorithm, digest: &[u8], signature: &[u8]) -> bool {
        RsaPublicKey::verify(self, pkcs1v15_scheme(hash), digest, signature).is_ok()
    }
}

impl IdentitySigner for ed25519_dalek::SigningKey {
    fn sign(
        &self,
        _rng: &mut dyn CryptoRngCore,
        _hash: HashAlgorithm,
        digest: &[u8],
    ) -> Result<Vec<u8>> {
        Ok(Signer::sign(self, digest).to_bytes().to_vec())
    }
}

impl IdentityVerifier for ed25519_dalek::VerifyingKey {
    fn verify(&self, _hash: HashAlgorithm, digest: &[u8], signature: &[u8]) -> bool {
        match ed25519_dalek::Signature::from_slice(signature) {
            Ok(signature) => Verifier::verify(self, digest, &signature).is_ok(),
            Err(_) => false,
        }
    }
}
