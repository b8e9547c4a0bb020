//! CBC encryption with PKCS#7 padding over the configured block cipher.
//!
//! CBC 模式 + PKCS#7 填充，基于套件配置的分组密码。

use crate::crypto::suite::SymmetricCipher;
use cbc::cipher::{
    BlockCipher, BlockDecryptMut, BlockEncryptMut, KeyInit, KeyIvInit, block_padding::Pkcs7,
};

fn seal_cbc<C>(key: &[u8], iv: &[u8], plaintext: &[u8]) -> Option<Vec<u8>>
where
    C: BlockEncryptMut + BlockCipher + KeyInit,
{
    let encryptor = cbc::Encryptor::<C>::new_from_slices(key, iv).ok()?;
    Some(encryptor.encrypt_padded_vec_mut::<Pkcs7>(plaintext))
}

fn open_cbc<C>(key: &[u8], iv: &[u8], ciphertext: &[u8]) -> Option<Vec<u8>>
where
    C: BlockDecryptMut + BlockCipher + KeyInit,
{
    let decryptor = cbc::Decryptor::<C>::new_from_slices(key, iv).ok()?;
    decryptor.decrypt_padded_vec_mut::<Pkcs7>(ciphertext).ok()
}

impl SymmetricCipher {
    /// Encrypts `plaintext` under `key` with the given IV.
    ///
    /// Returns `None` if the key or IV length does not fit the cipher.
    ///
    /// 使用给定的 IV 在 `key` 下加密 `plaintext`。密钥或 IV 长度不匹配时返回 `None`。
    pub fn encrypt(self, key: &[u8], iv: &[u8], plaintext: &[u8]) -> Option<Vec<u8>> {
        match (self, key.len()) {
            (SymmetricCipher::Aes, 16) => seal_cbc::<aes::Aes128>(key, iv, plaintext),
            (SymmetricCipher::Aes, 24) => seal_cbc::<aes::Aes192>(key, iv, plaintext),
            (SymmetricCipher::Aes, 32) => seal_cbc::<aes::Aes256>(key, iv, plaintext),
            (SymmetricCipher::TripleDes, 24) => seal_cbc::<des::TdesEde3>(key, iv, plaintext),
            _ => None,
        }
    }

    /// Decrypts and unpads `ciphertext`.
    ///
    /// Returns `None` for a wrong key/IV length, a ciphertext that is empty or not
    /// block aligned, and invalid padding alike.
    ///
    /// 解密并去除填充。密钥/IV 长度错误、密文为空或未按块对齐、填充无效时均返回 `None`。
    pub fn decrypt(self, key: &[u8], iv: &[u8], ciphertext: &[u8]) -> Option<Vec<u8>> {
        if ciphertext.is_empty() || ciphertext.len() % self.block_len() != 0 {
            return None;
        }
        match (self, key.len()) {
            (SymmetricCipher::Aes, 16) => open_cbc::<aes::Aes128>(key, iv, ciphertext),
            (SymmetricCipher::Aes, 24) => open_cbc::<aes::Aes192>(key, iv, ciphertext),
            (SymmetricCipher::Aes, 32) => open_cbc::<aes::Aes256>(key, iv, ciphertext),
            (SymmetricCipher::TripleDes, 24) => open_cbc::<des::TdesEde3>(key, iv, ciphertext),
            _ => None,
        }
    }
}
