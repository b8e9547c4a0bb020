//! Derives the symmetric session key from the raw Diffie-Hellman value.
//!
//! `Z` is encoded at the group's fixed width and hashed. When the digest is shorter than
//! the cipher key, further blocks `Hash(Z || counter)` (32-bit big-endian counter from 1)
//! are appended until the key length is reached. Both peers therefore derive the same
//! key from the same `Z` and suite.
//!
//! 从原始 Diffie-Hellman 值派生对称会话密钥。
//!
//! `Z` 按群的定长编码后计算哈希。当摘要短于密码密钥时，追加
//! `Hash(Z || counter)`（从 1 开始的 32 位大端计数器），直到达到密钥长度。
//! 因此双方从相同的 `Z` 和套件派生出相同的密钥。

use crate::crypto::suite::ProtocolSuite;
use num_bigint::BigUint;
use std::fmt;
use zeroize::Zeroizing;

/// Symmetric key material agreed by a handshake.
///
/// The bytes are wiped when the key is dropped and never printed.
///
/// 握手协商出的对称密钥材料。字节在丢弃时被清除，且从不打印。
#[derive(Clone, PartialEq, Eq)]
pub struct SessionKey(Zeroizing<Vec<u8>>);

impl SessionKey {
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl AsRef<[u8]> for SessionKey {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl fmt::Debug for SessionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SessionKey(<{} bytes redacted>)", self.0.len())
    }
}

/// Derives the suite-sized key from the shared value `Z`.
///
/// The fixed-width encoding of `Z` is wiped after use; the `BigUint` itself is the
/// caller's and cannot be.
///
/// 从共享值 `Z` 派生与套件匹配长度的密钥。
pub fn derive_session_key(suite: &ProtocolSuite, shared: &BigUint) -> SessionKey {
    let encoded_buf = Zeroizing::new(suite.group().encode_element(shared));
    let encoded: &[u8] = &encoded_buf;
    let hash = suite.hash();
    let key_len = suite.key_len();

    let mut key = Zeroizing::new(hash.digest(&[encoded]));
    let mut counter: u32 = 1;
    while key.len() < key_len {
        let block = Zeroizing::new(hash.digest(&[encoded, &counter.to_be_bytes()[..]]));
        key.extend_from_slice(&block);
        counter += 1;
    }
    key.truncate(key_len);
    SessionKey(key)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::crypto::group::Group;
    use crate::crypto::suite::{HashAlgorithm, SymmetricCipher};

    fn suite(cipher: SymmetricCipher, bits: usize, hash: HashAlgorithm) -> ProtocolSuite {
        ProtocolSuite::builder()
            .with_group(Group::oakley_768())
            .with_cipher(cipher, bits)
            .with_hash(hash)
            .build()
            .unwrap()
    }

    #[test]
    fn prefix_of_digest_when_long_enough() {
        let suite = suite(SymmetricCipher::Aes, 128, HashAlgorithm::Sha256);
        let z = BigUint::from(0xdead_beefu32);
        let key = derive_session_key(&suite, &z);

        let encoded = suite.group().encode_element(&z);
        let full = HashAlgorithm::Sha256.digest(&[encoded.as_slice()]);
        assert_eq!(key.len(), 16);
        assert_eq!(key.as_bytes(), &full[..16]);
    }

    #[test]
    fn stretched_when_digest_is_short() {
        // MD5 yields 16 bytes, AES-192 needs 24.
        let suite = suite(SymmetricCipher::Aes, 192, HashAlgorithm::Md5);
        let z = BigUint::from(7u32);
        let key = derive_session_key(&suite, &z);

        let encoded = suite.group().encode_element(&z);
        let first = HashAlgorithm::Md5.digest(&[encoded.as_slice()]);
        let second = HashAlgorithm::Md5.digest(&[encoded.as_slice(), &1u32.to_be_bytes()[..]]);
        assert_eq!(key.len(), 24);
        assert_eq!(&key.as_bytes()[..16], &first[..]);
        assert_eq!(&key.as_bytes()[16..], &second[..8]);
    }

    #[test]
    fn deterministic_and_value_sensitive() {
        let suite = suite(SymmetricCipher::TripleDes, 192, HashAlgorithm::Sha256);
        let a = derive_session_key(&suite, &BigUint::from(1234u32));
        let b = derive_session_key(&suite, &BigUint::from(1234u32));
        let c = derive_session_key(&suite, &BigUint::from(1235u32));
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn debug_does_not_leak() {
        let suite = suite(SymmetricCipher::Aes, 128, HashAlgorithm::Sha256);
        let key = derive_session_key(&suite, &BigUint::from(99u32));
        assert_eq!(format!("{key:?}"), "SessionKey(<16 bytes redacted>)");
    }
}
