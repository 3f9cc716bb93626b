// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

//! Calldata for the ContractDeployer system contract.

use std::{fmt, str::FromStr};

use alloy::{
    dyn_abi::DynSolValue,
    primitives::{hex, Bytes, Selector, B256, U256},
};

use crate::{
    abi::{CallPacker, DeployerAbi},
    error::{Error, Result},
    hash::hash_bytecode,
};

/// ContractDeployer entry points.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum DeployerCall {
    Create,
    Create2,
    CreateAccount,
    Create2Account,
}

impl DeployerCall {
    pub const ALL: [Self; 4] = [
        Self::Create,
        Self::Create2,
        Self::CreateAccount,
        Self::Create2Account,
    ];

    /// Name of the deployer function this call invokes.
    pub const fn function_name(self) -> &'static str {
        match self {
            Self::Create => "create",
            Self::Create2 => "create2",
            Self::CreateAccount => "createAccount",
            Self::Create2Account => "create2Account",
        }
    }

    /// Whether the caller's salt is used. Non-deterministic calls always send the zero salt.
    pub const fn accepts_salt(self) -> bool {
        matches!(self, Self::Create2 | Self::Create2Account)
    }
}

impl fmt::Display for DeployerCall {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.function_name())
    }
}

#[derive(Debug, thiserror::Error)]
#[error("unknown deployer call `{0}`")]
pub struct ParseDeployerCallError(String);

impl FromStr for DeployerCall {
    type Err = ParseDeployerCallError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "create" => Ok(Self::Create),
            "create2" => Ok(Self::Create2),
            "createAccount" | "create-account" => Ok(Self::CreateAccount),
            "create2Account" | "create2-account" => Ok(Self::Create2Account),
            _ => Err(ParseDeployerCallError(s.to_owned())),
        }
    }
}

/// Resolves an optional caller salt: absent or empty means zero, anything else must be 32 bytes.
pub fn normalize_salt(salt: Option<&[u8]>) -> Result<B256> {
    match salt {
        None | Some([]) => Ok(B256::ZERO),
        Some(salt) => B256::try_from(salt).map_err(|_| Error::InvalidSaltLength { len: salt.len() }),
    }
}

/// ABI-encoded deployer call, ready to be used as transaction input.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EncodedCall(Bytes);

impl EncodedCall {
    /// Function selector heading the call, if the payload is long enough to carry one.
    pub fn selector(&self) -> Option<Selector> {
        self.0.get(..4).map(Selector::from_slice)
    }

    pub fn as_slice(&self) -> &[u8] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn into_bytes(self) -> Bytes {
        self.0
    }
}

impl fmt::Display for EncodedCall {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(&hex::encode_prefixed(&self.0))
    }
}

impl AsRef<[u8]> for EncodedCall {
    fn as_ref(&self) -> &[u8] {
        self.as_slice()
    }
}

impl From<EncodedCall> for Bytes {
    fn from(call: EncodedCall) -> Bytes {
        call.0
    }
}

impl From<EncodedCall> for Vec<u8> {
    fn from(call: EncodedCall) -> Vec<u8> {
        call.0.to_vec()
    }
}

/// Builds ContractDeployer calldata through a [`CallPacker`].
#[derive(Debug)]
pub struct DeployerCallEncoder<'a, P = DeployerAbi> {
    packer: &'a P,
}

impl DeployerCallEncoder<'static> {
    /// Encoder backed by the embedded ContractDeployer ABI.
    pub fn embedded() -> Result<Self> {
        Ok(Self::new(DeployerAbi::embedded()?))
    }
}

impl<'a, P: CallPacker> DeployerCallEncoder<'a, P> {
    pub fn new(packer: &'a P) -> Self {
        Self { packer }
    }

    /// Encodes a call to `call` deploying `bytecode` with constructor input `calldata`.
    ///
    /// `salt` is only read for salted calls. The forwarded value is always zero.
    pub fn encode(
        &self,
        call: DeployerCall,
        bytecode: &[u8],
        calldata: &[u8],
        salt: Option<&[u8]>,
    ) -> Result<EncodedCall> {
        let salt = if call.accepts_salt() {
            normalize_salt(salt)?
        } else {
            B256::ZERO
        };
        let hash = hash_bytecode(bytecode)?;

        let function = call.function_name();
        let args = [
            DynSolValue::FixedBytes(salt, 32),
            DynSolValue::FixedBytes(hash.into(), 32),
            DynSolValue::Uint(U256::ZERO, 256),
            DynSolValue::Bytes(calldata.to_vec()),
        ];
        let packed = self
            .packer
            .pack(function, &args)
            .map_err(|source| Error::EncodingFailed { function, source })?;
        log::debug!("encoded {function} call ({} bytes)", packed.len());
        Ok(EncodedCall(packed.into()))
    }

    pub fn encode_create(&self, bytecode: &[u8], calldata: &[u8]) -> Result<EncodedCall> {
        self.encode(DeployerCall::Create, bytecode, calldata, None)
    }

    pub fn encode_create2(
        &self,
        bytecode: &[u8],
        calldata: &[u8],
        salt: &[u8],
    ) -> Result<EncodedCall> {
        self.encode(DeployerCall::Create2, bytecode, calldata, Some(salt))
    }

    pub fn encode_create_account(&self, bytecode: &[u8], calldata: &[u8]) -> Result<EncodedCall> {
        self.encode(DeployerCall::CreateAccount, bytecode, calldata, None)
    }

    pub fn encode_create2_account(
        &self,
        bytecode: &[u8],
        calldata: &[u8],
        salt: &[u8],
    ) -> Result<EncodedCall> {
        self.encode(DeployerCall::Create2Account, bytecode, calldata, Some(salt))
    }
}

/// Encodes `create` with the embedded ABI.
pub fn encode_create(bytecode: &[u8], calldata: &[u8]) -> Result<EncodedCall> {
    DeployerCallEncoder::embedded()?.encode_create(bytecode, calldata)
}

/// Encodes `create2` with the embedded ABI. An empty `salt` means zero.
pub fn encode_create2(bytecode: &[u8], calldata: &[u8], salt: &[u8]) -> Result<EncodedCall> {
    DeployerCallEncoder::embedded()?.encode_create2(bytecode, calldata, salt)
}

/// Encodes `createAccount` with the embedded ABI.
pub fn encode_create_account(bytecode: &[u8], calldata: &[u8]) -> Result<EncodedCall> {
    DeployerCallEncoder::embedded()?.encode_create_account(bytecode, calldata)
}

/// Encodes `create2Account` with the embedded ABI. An empty `salt` means zero.
pub fn encode_create2_account(
    bytecode: &[u8],
    calldata: &[u8],
    salt: &[u8],
) -> Result<EncodedCall> {
    DeployerCallEncoder::embedded()?.encode_create2_account(bytecode, calldata, salt)
}
