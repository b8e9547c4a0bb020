//! Arithmetic over the finite cyclic group the Diffie-Hellman exchange runs in.
//!
//! The group is a prime modulus `p` together with a generator `g`. Both parties must
//! use identical parameters; they are trusted and not validated beyond basic shape.
//!
//! 有限循环群上的运算，Diffie-Hellman 交换在该群中进行。
//!
//! 群由素数模 `p` 和生成元 `g` 组成。双方必须使用相同的参数；
//! 这些参数被视为可信，除基本形状外不做验证。

use hex_literal::hex;
use num_bigint::BigUint;
use num_traits::{One, Zero};
use rand_core::CryptoRngCore;
use std::fmt;
use zeroize::Zeroizing;

/// Computes `base^exponent mod modulus`.
///
/// 计算 `base^exponent mod modulus`。
pub fn exponentiate(base: &BigUint, exponent: &BigUint, modulus: &BigUint) -> BigUint {
    base.modpow(exponent, modulus)
}

/// Parameters of a multiplicative group modulo a prime.
#[derive(Clone, PartialEq, Eq)]
pub struct Group {
    modulus: BigUint,
    generator: BigUint,
    /// `p - 1`, the exclusive upper bound of both exponents and accepted exponentials.
    upper: BigUint,
}

impl Group {
    /// Creates a group from a prime modulus and a generator.
    ///
    /// 使用素数模和生成元创建一个群。
    pub fn new(modulus: BigUint, generator: BigUint) -> Self {
        let upper = if modulus.is_zero() {
            BigUint::zero()
        } else {
            &modulus - 1u32
        };
        Self {
            modulus,
            generator,
            upper,
        }
    }

    /// The 768-bit MODP group of RFC 2409 (Oakley group 1), generator 2.
    pub fn oakley_768() -> Self {
        Self::new(
            BigUint::from_bytes_be(&hex!(
                "
                FFFFFFFF FFFFFFFF C90FDAA2 2168C234 C4C6628B 80DC1CD1
                29024E08 8A67CC74 020BBEA6 3B139B22 514A0879 8E3404DD
                EF9519B3 CD3A431B 302B0A6D F25F1437 4FE1356D 6D51C245
                E485B576 625E7EC6 F44C42E9 A63A3620 FFFFFFFF FFFFFFFF
                "
            )),
            BigUint::from(2u32),
        )
    }

    /// The 1024-bit MODP group of RFC 2409 (Oakley group 2), generator 2.
    pub fn oakley_1024() -> Self {
        Self::new(
            BigUint::from_bytes_be(&hex!(
                "
                FFFFFFFF FFFFFFFF C90FDAA2 2168C234 C4C6628B 80DC1CD1
                29024E08 8A67CC74 020BBEA6 3B139B22 514A0879 8E3404DD
                EF9519B3 CD3A431B 302B0A6D F25F1437 4FE1356D 6D51C245
                E485B576 625E7EC6 F44C42E9 A637ED6B 0BFF5CB6 F406B7ED
                EE386BFB 5A899FA5 AE9F2411 7C4B1FE6 49286651 ECE65381
                FFFFFFFF FFFFFFFF
                "
            )),
            BigUint::from(2u32),
        )
    }

    pub fn modulus(&self) -> &BigUint {
        &self.modulus
    }

    pub fn generator(&self) -> &BigUint {
        &self.generator
    }

    /// Bit length of the modulus.
    pub fn bits(&self) -> u64 {
        self.modulus.bits()
    }

    /// Byte length of the modulus, and therefore of every encoded element.
    ///
    /// 模的字节长度，也是每个编码后群元素的长度。
    pub fn element_len(&self) -> usize {
        (self.bits() as usize).div_ceil(8)
    }

    /// Returns `true` if `element` lies in `[1, p - 1)`.
    ///
    /// 如果 `element` 位于 `[1, p - 1)` 范围内则返回 `true`。
    pub fn contains(&self, element: &BigUint) -> bool {
        !element.is_zero() && element < &self.upper
    }

    /// Raises the generator to `exponent`.
    pub(crate) fn exponential(&self, exponent: &Exponent) -> BigUint {
        exponentiate(&self.generator, &exponent.value(), &self.modulus)
    }

    /// Raises a peer's exponential to our own exponent, yielding the shared value `Z`.
    ///
    /// `Z` is returned as a plain `BigUint`, which cannot be wiped; callers encode it into
    /// zeroizing storage right away and drop it.
    pub(crate) fn shared_value(&self, peer: &BigUint, exponent: &Exponent) -> BigUint {
        exponentiate(peer, &exponent.value(), &self.modulus)
    }

    /// Draws a private exponent uniformly from `[1, p - 1)`.
    ///
    /// Exactly `element_len()` bytes are read per attempt; the surplus high bits of the
    /// first byte are masked off and out-of-range candidates are rejected. A byte stream
    /// whose first `element_len()` bytes encode a valid exponent yields exactly that
    /// exponent.
    ///
    /// 从 `[1, p - 1)` 中均匀抽取私有指数。
    ///
    /// 每次尝试恰好读取 `element_len()` 个字节；首字节多余的高位被屏蔽，
    /// 超出范围的候选值被拒绝。
    pub(crate) fn random_exponent<R: CryptoRngCore>(&self, rng: &mut R) -> Exponent {
        let len = self.element_len();
        let excess = (len as u64) * 8 - self.bits();
        let mask = 0xffu8 >> excess;
        let mut buf = Zeroizing::new(vec![0u8; len]);
        loop {
            rng.fill_bytes(&mut buf);
            buf[0] &= mask;
            if self.contains(&BigUint::from_bytes_be(&buf)) {
                return Exponent(buf);
            }
        }
    }

    /// Encodes a group element as fixed-width big-endian bytes, left padded with zeros
    /// to `element_len()`.
    ///
    /// 将群元素编码为定长大端字节，左侧补零至 `element_len()`。
    pub fn encode_element(&self, element: &BigUint) -> Vec<u8> {
        let bytes = element.to_bytes_be();
        let mut out = vec![0u8; self.element_len().max(bytes.len())];
        let offset = out.len() - bytes.len();
        out[offset..].copy_from_slice(&bytes);
        out
    }

    /// Checks the basic shape of the parameters: `p > 3` and `1 < g < p`.
    pub(crate) fn is_well_shaped(&self) -> bool {
        self.modulus > BigUint::from(3u32)
            && self.generator > BigUint::one()
            && self.generator < self.modulus
    }
}

impl fmt::Debug for Group {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Group")
            .field("bits", &self.bits())
            .field("generator", &self.generator)
            .finish()
    }
}

/// A private Diffie-Hellman exponent.
///
/// Held as fixed-width big-endian bytes in zeroizing storage and wiped on drop. The
/// `BigUint` needed for exponentiation is rebuilt per call and lives only for that call;
/// `num-bigint` offers no way to wipe it. Never printed, never leaves the session that
/// drew it.
///
/// 私有 Diffie-Hellman 指数。以定长大端字节保存在可清零的存储中，丢弃时被清除。
/// 幂运算所需的 `BigUint` 每次调用时临时重建。
pub(crate) struct Exponent(Zeroizing<Vec<u8>>);

impl Exponent {
    pub(crate) fn value(&self) -> BigUint {
        BigUint::from_bytes_be(&self.0)
    }

    #[cfg(test)]
    pub(crate) fn from_value(value: &BigUint) -> Self {
        Exponent(Zeroizing::new(value.to_bytes_be()))
    }
}

impl fmt::Debug for Exponent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Exponent(<redacted>)")
    }
}
