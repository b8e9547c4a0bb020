//! Fixed-exponent vectors: seeded sessions must reproduce known exponentials and then
//! complete a full handshake with fresh RSA identities.
//! 固定指数向量：以种子构造的会话必须复现已知指数值，并使用新生成的 RSA 身份完成完整握手。

mod common;

use common::FixedBytes;
use hex_literal::hex;
use rand::rngs::OsRng;
use rsa::{RsaPrivateKey, RsaPublicKey};
use sts_handshake::error::Result;
use sts_handshake::{
    Acceptor, BigUint, Group, HashAlgorithm, Initiator, ProtocolSuite, SymmetricCipher,
};

const MODP_768: [u8; 96] = hex!(
    "
    ffffffff ffffffff c90fdaa2 2168c234 c4c6628b 80dc1cd1
    29024e08 8a67cc74 020bbea6 3b139b22 514a0879 8e3404dd
    ef9519b3 cd3a431b 302b0a6d f25f1437 4fe1356d 6d51c245
    e485b576 625e7ec6 f44c42e9 a63a3620 ffffffff ffffffff
    "
);

const INI_EXPONENT_768: [u8; 96] = hex!(
    "
    4ae7d7e8 ce57d8e0 3761eb88 389f61f4 691dc8b1 4939e944
    743149d4 5be1b835 cf60dd10 6490965c ec46a706 7b358f07
    1a7deed0 fd572ba6 9db9b2cf a6a31070 7f63823d b4b93549
    50897e8b 53cf1b16 0a0a33b7 b6c01e01 cb1ca499 e66c89e9
    "
);

const INI_EXPONENTIAL_768: [u8; 96] = hex!(
    "
    e0688401 d4e82f4c 98890e62 8f9aa6ec 31f5daf9 def99a3c
    91751483 ed65347b b273fdfb 423c3fd4 2fcf3a71 91127180
    5b7018a3 c6ac7682 b4369acf 03160d3e dc34511a b0571ed6
    25597caf 1394317e a1bc4836 60706506 2ae77ce5 a9033385
    "
);

const ACC_EXPONENT_768: [u8; 96] = hex!(
    "
    cc6d9166 683e18ce b1abaf02 a66e9502 a59a91b1 c428a73f
    a806b306 eeaaee2b edc962d5 e83e3549 0bc19ca0 32848214
    7cc01a15 746d6fe8 c0c85815 0441e407 49add221 a761a40a
    43d9bb47 9aae387c 65d16250 b086bb90 ded405f1 ce52f48d
    "
);

const ACC_EXPONENTIAL_768: [u8; 96] = hex!(
    "
    7e464b27 66bf8927 39856574 eb280c75 633772ed b8b20259
    9667f8da 91cf3295 4163703a 564e7682 0a2e88aa b2c46b66
    73955b95 b40be470 d4731e0f 122f7c40 2e53a62a 798e081d
    a5d2c790 1a5a1a87 a3acc41e 16a694f9 d7be5600 c97865a2
    "
);

const CUSTOM_MODULUS_1024: [u8; 128] = hex!(
    "
    ea6076e5 312aa8a8 7ddd5681 3bd97865 4e4b8ab8 3315d9a3
    5494c806 3b20a631 4766340f 7da4090f 87516ea0 f63c3043
    18b96210 e090d1ea 069fded0 ee2d791d bd4b004c bb9dff9e
    a178586c 0d7f6f15 f4d9d882 a8ef3f50 8b3aaac7 23ab5a8c
    d6acc5b9 ede693b1 25d41a7b 1aaf3a38 ecb6a71e 62837103
    83f234b0 0d874d1f
    "
);

const CUSTOM_GENERATOR_1024: [u8; 128] = hex!(
    "
    e67dcbcf b7defd40 cf0f85a3 9b8d9a87 9473e93e 52c012ab
    b4ba1d2d 5f2b1157 5d1b5bd6 eb0ae07f 034f6169 1f6dfd29
    8ae664a7 4dcc1fb3 83f77658 376e5530 b7c95a32 cf8a7f23
    ee755cac b88732a3 87952486 72fcfb1b f3634402 44b65c01
    1b76bce8 caf7ddc4 16a88780 0c76f51d 7e37a2cb 16b14f61
    de2c3b2a ec4cfcea
    "
);

const INI_EXPONENT_1024: [u8; 128] = hex!(
    "
    303e5619 06581b62 dc9aae7a 91c470ed e3a31cfb e079e9ca
    238e4b95 b9cbeea9 08c4ea5c cbf0c32f d67c34d6 d25ee91e
    82137637 352cefb4 5d7ca547 0036a08f 6059e793 77496bb5
    2ecec983 54447c5f 1a8ae812 a8e61fed 480ed58a f44346a1
    b37019e1 4068e305 e4b4d6d8 13b6d6e1 aff38683 499662c1
    994b59d0 a7b9b44b
    "
);

const INI_EXPONENTIAL_1024: [u8; 128] = hex!(
    "
    968ab551 27734943 d4885e03 90156fee 292b33e9 7bb36112
    17651761 98b6bdb9 acb06f72 b6bf93fe b3b6d1ef ed42a94f
    65bb089b 5bf3a6a1 96ac1080 faf1f94a 5a1917d1 6b151fb2
    427d3750 22c51ef4 8bd79e55 4e905b07 7346f5eb 9b3b119f
    57802969 be0b040c 6c20f6b2 8edf9b97 1dce19dc 0af66bdb
    b7d9a6cb 0c3c9320
    "
);

const ACC_EXPONENT_1024: [u8; 128] = hex!(
    "
    1d714aa8 acb385e3 6f249968 eaebb385 e29b385f 34866e3a
    25d6a794 b587ffd2 149e8eb4 4481dd53 fc68f31a 0615cc44
    c2c5643b 6ebba1b9 e9680a36 3bb5950b 6c54e0c1 0f56f120
    df0afd06 8368c4df b6aac6c6 a9c8a9d2 5d061798 a9ce8a5e
    2a212cf2 c75ce836 c85abd18 9877ab89 547ac513 45d9f58a
    1cb3acf1 e778e44a
    "
);

const ACC_EXPONENTIAL_1024: [u8; 128] = hex!(
    "
    b1b3f0c3 e4028d84 b53e5ffb d4dde5c5 5c728cfe 7e330c93
    1b6876fb c4ad7e2f e65bf4ea 3eced947 ba728030 5e96999b
    f1073587 4a17f1ee 1ba608b4 20a9cd3b 354b4cf9 ad9ed0d2
    7e7c903f 2b1695ee f7b3d78a db3f0475 96c8bfef af064850
    557cbeea 121d5b8c 60e22cc7 25ea5d51 bcc52e2f c2795dfe
    8e81a9f1 27c74b99
    "
);

struct Vector {
    name: &'static str,
    group: Group,
    cipher: SymmetricCipher,
    key_bits: usize,
    hash: HashAlgorithm,
    ini_exponent: &'static [u8],
    ini_exponential: &'static [u8],
    acc_exponent: &'static [u8],
    acc_exponential: &'static [u8],
}

impl Vector {
    fn suite(&self) -> Result<ProtocolSuite> {
        ProtocolSuite::builder()
            .with_group(self.group.clone())
            .with_cipher(self.cipher, self.key_bits)
            .with_hash(self.hash)
            .build()
    }
}

fn vectors() -> Vec<Vector> {
    let oakley = |name, cipher, key_bits, hash| Vector {
        name,
        group: Group::oakley_768(),
        cipher,
        key_bits,
        hash,
        ini_exponent: &INI_EXPONENT_768,
        ini_exponential: &INI_EXPONENTIAL_768,
        acc_exponent: &ACC_EXPONENT_768,
        acc_exponential: &ACC_EXPONENTIAL_768,
    };
    vec![
        oakley("768/aes-128/sha-256", SymmetricCipher::Aes, 128, HashAlgorithm::Sha256),
        oakley("768/aes-192/md5", SymmetricCipher::Aes, 192, HashAlgorithm::Md5),
        oakley("768/3des-192/sha-256", SymmetricCipher::TripleDes, 192, HashAlgorithm::Sha256),
        Vector {
            name: "1024-custom/aes-192/md5",
            group: Group::new(
                BigUint::from_bytes_be(&CUSTOM_MODULUS_1024),
                BigUint::from_bytes_be(&CUSTOM_GENERATOR_1024),
            ),
            cipher: SymmetricCipher::Aes,
            key_bits: 192,
            hash: HashAlgorithm::Md5,
            ini_exponent: &INI_EXPONENT_1024,
            ini_exponential: &INI_EXPONENTIAL_1024,
            acc_exponent: &ACC_EXPONENT_1024,
            acc_exponential: &ACC_EXPONENTIAL_1024,
        },
    ]
}

#[test]
fn oakley_preset_matches_vector_group() {
    let group = Group::oakley_768();
    assert_eq!(group.modulus(), &BigUint::from_bytes_be(&MODP_768));
    assert_eq!(group.generator(), &BigUint::from(2u32));
}

#[test]
fn seeded_exponents_reproduce_exponentials() -> Result<()> {
    for vector in vectors() {
        println!("--- {} ---", vector.name);
        let suite = vector.suite()?;

        let mut seed = FixedBytes::new(vector.ini_exponent);
        let initiator = Initiator::new(&mut seed, &suite);
        assert_eq!(seed.consumed(), vector.ini_exponent.len());
        let (x, _) = initiator.initiate();
        assert_eq!(x, BigUint::from_bytes_be(vector.ini_exponential), "{}", vector.name);

        let expected = suite
            .group()
            .generator()
            .modpow(&BigUint::from_bytes_be(vector.ini_exponent), suite.group().modulus());
        assert_eq!(x, expected, "{}", vector.name);
    }
    Ok(())
}

#[test]
fn seeded_handshake_agrees_on_secret() -> Result<()> {
    println!("--- Generating RSA-1024 identities ---");
    let initiator_key = RsaPrivateKey::new(&mut OsRng, 1024).expect("initiator key");
    let acceptor_key = RsaPrivateKey::new(&mut OsRng, 1024).expect("acceptor key");
    let initiator_public = RsaPublicKey::from(&initiator_key);
    let acceptor_public = RsaPublicKey::from(&acceptor_key);

    for vector in vectors() {
        println!("--- {} ---", vector.name);
        let suite = vector.suite()?;

        let initiator = Initiator::new(&mut FixedBytes::new(vector.ini_exponent), &suite);
        let acceptor = Acceptor::new(&mut FixedBytes::new(vector.acc_exponent), &suite);

        // I -> A: X
        let (x, initiator) = initiator.initiate();
        assert_eq!(x, BigUint::from_bytes_be(vector.ini_exponential));

        // A -> I: Y, token
        let (y, acceptor_token, acceptor) = acceptor.accept(&mut OsRng, &acceptor_key, &x)?;
        assert_eq!(y, BigUint::from_bytes_be(vector.acc_exponential));
        println!("A -> I: exponential and {}-byte token", acceptor_token.len());

        // I -> A: token
        let (initiator_token, initiator) =
            initiator.verify(&mut OsRng, &initiator_key, &acceptor_public, &y, &acceptor_token)?;
        let acceptor = acceptor.finalize(&initiator_public, &initiator_token)?;

        assert_eq!(initiator.secret().as_bytes(), acceptor.secret().as_bytes());
        assert_eq!(initiator.secret().len(), vector.key_bits / 8);
    }
    Ok(())
}

#[test]
fn seeded_oakley_1024_handshake_agrees_on_secret() -> Result<()> {
    let suite = ProtocolSuite::builder()
        .with_group(Group::oakley_1024())
        .with_cipher(SymmetricCipher::Aes, 128)
        .with_hash(HashAlgorithm::Sha256)
        .build()?;
    let group = suite.group();
    assert_eq!(group.bits(), 1024);
    assert_eq!(group.generator(), &BigUint::from(2u32));

    let ini_exponent = [0x3cu8; 128];
    let acc_exponent = [0x71u8; 128];
    let mut ini_seed = FixedBytes::new(&ini_exponent);
    let mut acc_seed = FixedBytes::new(&acc_exponent);
    let initiator = Initiator::new(&mut ini_seed, &suite);
    let acceptor = Acceptor::new(&mut acc_seed, &suite);
    assert_eq!(ini_seed.consumed(), 128);
    assert_eq!(acc_seed.consumed(), 128);

    println!("--- Generating RSA-1024 identities ---");
    let initiator_key = RsaPrivateKey::new(&mut OsRng, 1024).expect("initiator key");
    let acceptor_key = RsaPrivateKey::new(&mut OsRng, 1024).expect("acceptor key");

    let (x, initiator) = initiator.initiate();
    let expected_x = group
        .generator()
        .modpow(&BigUint::from_bytes_be(&ini_exponent), group.modulus());
    assert_eq!(x, expected_x);

    let (y, acceptor_token, acceptor) = acceptor.accept(&mut OsRng, &acceptor_key, &x)?;
    let expected_y = group
        .generator()
        .modpow(&BigUint::from_bytes_be(&acc_exponent), group.modulus());
    assert_eq!(y, expected_y);
    println!("A -> I: exponential and {}-byte token", acceptor_token.len());

    let (initiator_token, initiator) = initiator.verify(
        &mut OsRng,
        &initiator_key,
        &RsaPublicKey::from(&acceptor_key),
        &y,
        &acceptor_token,
    )?;
    let acceptor = acceptor.finalize(&RsaPublicKey::from(&initiator_key), &initiator_token)?;

    assert_eq!(initiator.secret().as_bytes(), acceptor.secret().as_bytes());
    assert_eq!(initiator.secret().len(), 16);
    Ok(())
}
