// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

//! Builds the calldata for deploying contracts through the EraVM ContractDeployer system contract.
//!
//! Deployments reference code by a [`BytecodeHash`] rather than by the raw bytecode. Each of the
//! four deployer entry points takes `(salt, bytecodeHash, value, input)`; see [`DeployerCall`].
//!
//! ```no_run
//! let bytecode = std::fs::read("Counter.zbin").unwrap();
//! let calldata = zkdeploy::encode_create2(&bytecode, &[], &[0x42; 32]).unwrap();
//! println!("{calldata}");
//! ```

pub mod abi;
pub mod call;
pub(crate) mod error;
pub mod hash;

pub use abi::{CallPacker, DeployerAbi};
pub use call::{
    encode_create, encode_create2, encode_create2_account, encode_create_account,
    normalize_salt, DeployerCall, DeployerCallEncoder, EncodedCall,
};
pub use error::{Error, Result};
pub use hash::{hash_bytecode, BytecodeHash};
