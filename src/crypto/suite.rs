//! The protocol suite: every algorithm choice a session needs, supplied explicitly.
//!
//! There is no process-wide algorithm registry. Callers assemble a [`ProtocolSuite`]
//! through [`ProtocolSuiteBuilder`], which validates the combination once; each session
//! then owns a copy.
//!
//! 协议套件：会话所需的所有算法选择，均显式提供。
//!
//! 不存在进程级的算法注册表。调用方通过 [`ProtocolSuiteBuilder`] 组装
//! [`ProtocolSuite`]，构建时一次性验证算法组合；之后每个会话持有一份副本。

use crate::crypto::group::Group;
use crate::error::{HandshakeError, Result};
use md5::Md5;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256, Sha384, Sha512};

/// Digest algorithm used for key derivation and for the signed binding digests.
///
/// 用于密钥派生和签名绑定摘要的摘要算法。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HashAlgorithm {
    Md5,
    Sha256,
    Sha384,
    Sha512,
}

impl HashAlgorithm {
    /// Digest length in bytes.
    pub fn output_len(self) -> usize {
        match self {
            HashAlgorithm::Md5 => 16,
            HashAlgorithm::Sha256 => 32,
            HashAlgorithm::Sha384 => 48,
            HashAlgorithm::Sha512 => 64,
        }
    }

    /// Hashes the concatenation of `parts`.
    ///
    /// 对 `parts` 的拼接结果计算哈希。
    pub fn digest(self, parts: &[&[u8]]) -> Vec<u8> {
        fn run<D: Digest>(parts: &[&[u8]]) -> Vec<u8> {
            let mut hasher = D::new();
            for part in parts {
                hasher.update(part);
            }
            hasher.finalize().to_vec()
        }

        match self {
            HashAlgorithm::Md5 => run::<Md5>(parts),
            HashAlgorithm::Sha256 => run::<Sha256>(parts),
            HashAlgorithm::Sha384 => run::<Sha384>(parts),
            HashAlgorithm::Sha512 => run::<Sha512>(parts),
        }
    }
}

/// Block-cipher family used to encrypt authentication tokens.
///
/// 用于加密认证令牌的分组密码族。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SymmetricCipher {
    /// AES with a 128, 192 or 256-bit key.
    Aes,
    /// Three-key Triple-DES (EDE3), 192-bit key.
    TripleDes,
}

impl SymmetricCipher {
    /// Whether the cipher can be instantiated with a key of `key_bits` bits.
    pub fn supports_key_bits(self, key_bits: usize) -> bool {
        match self {
            SymmetricCipher::Aes => matches!(key_bits, 128 | 192 | 256),
            SymmetricCipher::TripleDes => key_bits == 192,
        }
    }

    /// Block size in bytes, which is also the IV length.
    pub fn block_len(self) -> usize {
        match self {
            SymmetricCipher::Aes => 16,
            SymmetricCipher::TripleDes => 8,
        }
    }
}

/// Group, cipher, key size and hash shared by both peers of a handshake.
///
/// 握手双方共享的群、密码、密钥长度和哈希。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProtocolSuite {
    group: Group,
    cipher: SymmetricCipher,
    key_bits: usize,
    hash: HashAlgorithm,
}

impl ProtocolSuite {
    /// Starts a new suite builder.
    pub fn builder() -> ProtocolSuiteBuilder {
        ProtocolSuiteBuilder::new()
    }

    pub fn group(&self) -> &Group {
        &self.group
    }

    pub fn cipher(&self) -> SymmetricCipher {
        self.cipher
    }

    pub fn key_bits(&self) -> usize {
        self.key_bits
    }

    /// Symmetric key length in bytes.
    pub fn key_len(&self) -> usize {
        self.key_bits / 8
    }

    pub fn hash(&self) -> HashAlgorithm {
        self.hash
    }
}

// --- Typestate Builder using Concrete Structs ---

/// The entry point for the builder.
///
/// 构建器的入口。
#[derive(Debug, Default)]
pub struct ProtocolSuiteBuilder;

impl ProtocolSuiteBuilder {
    /// Creates a new builder.
    pub fn new() -> Self {
        Self
    }

    /// Sets the Diffie-Hellman group and moves to the cipher configuration state.
    pub fn with_group(self, group: Group) -> BuilderWithGroup {
        BuilderWithGroup { group }
    }
}

/// State after the group is set. Requires the cipher and its key size.
#[derive(Debug)]
pub struct BuilderWithGroup {
    group: Group,
}

impl BuilderWithGroup {
    /// Sets the token cipher and the key size in bits.
    pub fn with_cipher(self, cipher: SymmetricCipher, key_bits: usize) -> BuilderWithCipher {
        BuilderWithCipher {
            group: self.group,
            cipher,
            key_bits,
        }
    }
}

/// State after the cipher is set. Requires the hash.
#[derive(Debug)]
pub struct BuilderWithCipher {
    group: Group,
    cipher: SymmetricCipher,
    key_bits: usize,
}

impl BuilderWithCipher {
    /// Sets the hash algorithm and moves to the final, buildable state.
    pub fn with_hash(self, hash: HashAlgorithm) -> ReadyToBuild {
        ReadyToBuild {
            group: self.group,
            cipher: self.cipher,
            key_bits: self.key_bits,
            hash,
        }
    }
}

/// The final state where the builder can construct a `ProtocolSuite`.
#[derive(Debug)]
pub struct ReadyToBuild {
    group: Group,
    cipher: SymmetricCipher,
    key_bits: usize,
    hash: HashAlgorithm,
}

impl ReadyToBuild {
    /// Builds the `ProtocolSuite`.
    ///
    /// Fails with [`HandshakeError::Configuration`] if the cipher cannot be built for the
    /// requested key size or the group parameters are degenerate.
    ///
    /// 构建 `ProtocolSuite`。
    ///
    /// 如果密码无法以请求的密钥长度构建，或群参数退化，则返回
    /// [`HandshakeError::Configuration`]。
    pub fn build(self) -> Result<ProtocolSuite> {
        if !self.cipher.supports_key_bits(self.key_bits) {
            return Err(HandshakeError::configuration(format!(
                "{:?} cannot be built with a {}-bit key",
                self.cipher, self.key_bits
            )));
        }
        if !self.group.is_well_shaped() {
            return Err(HandshakeError::configuration(
                "group requires p > 3 and 1 < g < p",
            ));
        }
        Ok(ProtocolSuite {
            group: self.group,
            cipher: self.cipher,
            key_bits: self.key_bits,
            hash: self.hash,
        })
    }
}
