// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

use std::thread;

use alloy::primitives::{keccak256, U256};
use pretty_assertions::assert_eq;
use zkdeploy::{
    abi::CONTRACT_DEPLOYER_ABI, encode_create, encode_create2, encode_create2_account,
    encode_create_account, hash_bytecode, DeployerAbi, DeployerCall, DeployerCallEncoder, Error,
};

fn selector(call: DeployerCall) -> [u8; 4] {
    let signature = format!("{}(bytes32,bytes32,uint256,bytes)", call.function_name());
    keccak256(signature)[..4].try_into().unwrap()
}

/// Splits encoded calldata into its selector and 32-byte words.
fn words(encoded: &[u8]) -> ([u8; 4], Vec<[u8; 32]>) {
    assert_eq!((encoded.len() - 4) % 32, 0);
    let selector = encoded[..4].try_into().unwrap();
    let words = encoded[4..]
        .chunks(32)
        .map(|word| word.try_into().unwrap())
        .collect();
    (selector, words)
}

fn uint_word(value: u64) -> [u8; 32] {
    U256::from(value).to_be_bytes()
}

#[test]
fn create_layout() {
    let bytecode = [0u8; 64];
    let hash = hash_bytecode(&bytecode).unwrap();
    assert_eq!(&hash.as_slice()[..2], &[0x00, 0x02]);
    assert_eq!(
        hex::encode(hash),
        "0002fd42d16a20302798ef6ed309979b43003d2320d9f0e8ea9831a92759fb4b"
    );

    let encoded = encode_create(&bytecode, &[]).unwrap();
    let (sel, words) = words(encoded.as_slice());
    assert_eq!(sel, selector(DeployerCall::Create));
    assert_eq!(encoded.selector().unwrap().0, sel);
    assert_eq!(
        words,
        vec![
            [0u8; 32],
            <[u8; 32]>::from(hash),
            uint_word(0),
            uint_word(0x80),
            uint_word(0),
        ]
    );
}

#[test]
fn create2_layout() {
    let salt = [0x5a; 32];
    let encoded = encode_create2(&[0xff; 40], &[0xca, 0xfe], &salt).unwrap();
    let (sel, words) = words(encoded.as_slice());
    assert_eq!(sel, selector(DeployerCall::Create2));

    let mut input = [0u8; 32];
    input[..2].copy_from_slice(&[0xca, 0xfe]);
    assert_eq!(
        words,
        vec![
            salt,
            hash_bytecode(&[0xff; 40]).unwrap().into(),
            uint_word(0),
            uint_word(0x80),
            uint_word(2),
            input,
        ]
    );
}

#[test]
fn create2_empty_salt_is_zero() {
    let implicit = encode_create2(&[], &[0x01], &[]).unwrap();
    let explicit = encode_create2(&[], &[0x01], &[0; 32]).unwrap();
    assert_eq!(implicit, explicit);
}

#[test]
fn salted_calls_reject_short_salt() {
    for result in [
        encode_create2(&[], &[], &[0x11; 17]),
        encode_create2_account(&[], &[], &[0x11; 17]),
    ] {
        assert!(matches!(result, Err(Error::InvalidSaltLength { len: 17 })));
    }
}

#[test]
fn unsalted_calls_use_zero_salt() {
    let encoder = DeployerCallEncoder::embedded().unwrap();
    for call in [DeployerCall::Create, DeployerCall::CreateAccount] {
        let with_salt = encoder
            .encode(call, &[0x01; 32], &[], Some(&[0x99; 32]))
            .unwrap();
        let without = encoder.encode(call, &[0x01; 32], &[], None).unwrap();
        assert_eq!(with_salt, without);
        assert_eq!(&with_salt.as_slice()[4..36], &[0u8; 32]);
    }
}

#[test]
fn account_calls_differ_only_by_selector() {
    let bytecode = [0x60; 96];
    let create = encode_create(&bytecode, &[1, 2, 3]).unwrap();
    let account = encode_create_account(&bytecode, &[1, 2, 3]).unwrap();
    assert_eq!(&account.as_slice()[..4], &selector(DeployerCall::CreateAccount));
    assert_eq!(&create.as_slice()[4..], &account.as_slice()[4..]);

    let salt = [0x33; 32];
    let create2 = encode_create2(&bytecode, &[], &salt).unwrap();
    let account2 = encode_create2_account(&bytecode, &[], &salt).unwrap();
    assert_eq!(&account2.as_slice()[..4], &selector(DeployerCall::Create2Account));
    assert_eq!(&create2.as_slice()[4..], &account2.as_slice()[4..]);
}

#[test]
fn bytecode_size_limit() {
    let fits = vec![0u8; 32 * 65535];
    let encoded = encode_create(&fits, &[]).unwrap();
    assert_eq!(&encoded.as_slice()[36..38], &[0xff, 0xff]);

    let too_large = vec![0u8; 32 * 65536];
    assert!(matches!(
        encode_create(&too_large, &[]),
        Err(Error::BytecodeTooLarge { words: 65536, .. })
    ));
    assert!(matches!(
        hash_bytecode(&too_large),
        Err(Error::BytecodeTooLarge { .. })
    ));
}

#[test]
fn parsed_abi_matches_embedded() {
    let parsed = DeployerAbi::parse(CONTRACT_DEPLOYER_ABI).unwrap();
    let custom = DeployerCallEncoder::new(&parsed);
    let embedded = DeployerCallEncoder::embedded().unwrap();
    for call in DeployerCall::ALL {
        assert_eq!(
            custom.encode(call, &[7; 64], &[8], Some(&[9; 32])).unwrap(),
            embedded.encode(call, &[7; 64], &[8], Some(&[9; 32])).unwrap(),
        );
    }
}

#[test]
fn concurrent_first_use() {
    let handles: Vec<_> = (0..8)
        .map(|_| {
            thread::spawn(|| {
                let abi = DeployerAbi::embedded().unwrap() as *const DeployerAbi as usize;
                let encoded = encode_create2(&[0xab; 64], &[0x01], &[0x02; 32]).unwrap();
                (abi, encoded)
            })
        })
        .collect();
    let results: Vec<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    for (abi, encoded) in &results[1..] {
        assert_eq!(*abi, results[0].0);
        assert_eq!(encoded, &results[0].1);
    }
}
