// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

use crate::{
    abi::{AbiMetadataError, PackError},
    hash::MAX_BYTECODE_WORDS,
};

pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Failures while building a deployer call. None of these are transient.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("salt must be 32 bytes (got {len})")]
    InvalidSaltLength { len: usize },
    #[error(
        "bytecode too large: {words} words ({len} bytes) exceeds the {max} word limit",
        max = MAX_BYTECODE_WORDS
    )]
    BytecodeTooLarge { len: usize, words: usize },
    #[error("deployer ABI unavailable: {0}")]
    AbiMetadataUnavailable(#[from] AbiMetadataError),
    #[error("failed to pack {function} function: {source}")]
    EncodingFailed {
        function: &'static str,
        #[source]
        source: PackError,
    },
}
