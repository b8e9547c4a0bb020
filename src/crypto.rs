//! Cryptographic building blocks of the handshake: group arithmetic, key derivation,
//! symmetric encryption, identity signatures and the token codec.
//!
//! 握手的密码学构件：群运算、密钥派生、对称加密、身份签名与令牌编解码。

pub mod cipher;
pub mod group;
pub mod keys;
pub mod signature;
pub mod suite;
pub mod token;
