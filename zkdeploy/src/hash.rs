// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

//! Content hashing of contract bytecode.
//!
//! EraVM references deployable code by a 32-byte hash instead of the raw bytecode. The first two
//! bytes hold the big-endian length of the code in 32-byte words, and the remaining 30 bytes are
//! the tail of the SHA-256 digest of the code.

use std::fmt;

use alloy::primitives::{hex, B256};
use sha2::{Digest, Sha256};

use crate::error::{Error, Result};

/// Size of a VM word, in bytes.
pub const WORD_SIZE: usize = 32;

/// Largest word count the length prefix can hold.
pub const MAX_BYTECODE_WORDS: usize = u16::MAX as usize;

/// Length of the big-endian word count prefix.
const LENGTH_PREFIX: usize = 2;

/// Length-prefixed, truncated SHA-256 hash of contract bytecode.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct BytecodeHash(B256);

impl BytecodeHash {
    /// Number of whole words in the hashed bytecode.
    pub fn word_count(&self) -> u16 {
        u16::from_be_bytes([self.0[0], self.0[1]])
    }

    pub fn as_slice(&self) -> &[u8] {
        self.0.as_slice()
    }
}

impl fmt::Display for BytecodeHash {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(&hex::encode_prefixed(self.0))
    }
}

impl From<BytecodeHash> for B256 {
    fn from(hash: BytecodeHash) -> B256 {
        hash.0
    }
}

impl From<BytecodeHash> for [u8; 32] {
    fn from(hash: BytecodeHash) -> [u8; 32] {
        hash.0 .0
    }
}

impl AsRef<[u8]> for BytecodeHash {
    fn as_ref(&self) -> &[u8] {
        self.as_slice()
    }
}

/// Computes the deployable content hash of `bytecode`.
///
/// The word count truncates, so trailing bytes that do not fill a word are hashed but not
/// counted.
pub fn hash_bytecode(bytecode: &[u8]) -> Result<BytecodeHash> {
    let words = bytecode.len() / WORD_SIZE;
    let Ok(word_count) = u16::try_from(words) else {
        return Err(Error::BytecodeTooLarge {
            len: bytecode.len(),
            words,
        });
    };

    let digest = Sha256::digest(bytecode);
    let mut hash = [0u8; 32];
    hash[..LENGTH_PREFIX].copy_from_slice(&word_count.to_be_bytes());
    hash[LENGTH_PREFIX..].copy_from_slice(&digest[LENGTH_PREFIX..]);

    let hash = BytecodeHash(B256::from(hash));
    log::debug!("bytecode hash {hash} ({word_count} words)");
    Ok(hash)
}
