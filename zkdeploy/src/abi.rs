// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

//! Access to the ContractDeployer interface description.

use alloy::{
    dyn_abi::{DynSolValue, JsonAbiExt, Specifier},
    json_abi::{Function, JsonAbi},
};
use once_cell::sync::OnceCell;

use crate::{call::DeployerCall, error::Result};

/// Interface description shipped with the crate.
pub const CONTRACT_DEPLOYER_ABI: &str = include_str!("../abi/ContractDeployer.json");

/// Input types shared by every deployer entry point: salt, bytecode hash, value, input.
const DEPLOY_INPUTS: [&str; 4] = ["bytes32", "bytes32", "uint256", "bytes"];

static EMBEDDED: OnceCell<DeployerAbi> = OnceCell::new();

/// Packs typed arguments into calldata for a named contract function.
pub trait CallPacker {
    fn pack(&self, function: &str, args: &[DynSolValue]) -> Result<Vec<u8>, PackError>;
}

#[derive(Debug, thiserror::Error)]
pub enum PackError {
    #[error("function `{0}` not found in ABI")]
    UnknownFunction(String),
    #[error("no overload of `{0}` accepts the given arguments")]
    NoMatchingOverload(String),
    #[error("{0}")]
    Abi(#[from] alloy::dyn_abi::Error),
}

#[derive(Debug, thiserror::Error)]
pub enum AbiMetadataError {
    #[error("failed to parse ContractDeployer ABI: {0}")]
    Json(#[from] serde_json::Error),
    #[error("function `{0}` missing from ContractDeployer ABI")]
    MissingFunction(&'static str),
    #[error("unexpected signature for `{name}`: found {found}, want {name}({want})")]
    UnexpectedSignature {
        name: &'static str,
        found: String,
        want: String,
    },
}

/// Parsed ContractDeployer ABI, checked to contain every [`DeployerCall`] entry point.
#[derive(Clone, Debug)]
pub struct DeployerAbi {
    abi: JsonAbi,
}

impl DeployerAbi {
    /// Parses an ABI JSON array, as emitted by solc or hardhat.
    pub fn parse(source: &str) -> Result<Self> {
        let abi: JsonAbi = serde_json::from_str(source).map_err(AbiMetadataError::from)?;
        for call in DeployerCall::ALL {
            deploy_function(&abi, call.function_name())?;
        }
        Ok(Self { abi })
    }

    /// The embedded ABI, parsed on first use and shared for the rest of the process.
    pub fn embedded() -> Result<&'static Self> {
        EMBEDDED.get_or_try_init(|| Self::parse(CONTRACT_DEPLOYER_ABI))
    }

    /// Looks up the entry point for `call`.
    pub fn function(&self, call: DeployerCall) -> Result<&Function> {
        Ok(deploy_function(&self.abi, call.function_name())?)
    }
}

impl CallPacker for DeployerAbi {
    fn pack(&self, function: &str, args: &[DynSolValue]) -> Result<Vec<u8>, PackError> {
        let overloads = self
            .abi
            .function(function)
            .ok_or_else(|| PackError::UnknownFunction(function.to_owned()))?;
        let function = overloads
            .iter()
            .find(|f| accepts(f, args))
            .ok_or_else(|| PackError::NoMatchingOverload(function.to_owned()))?;
        Ok(function.abi_encode_input(args)?)
    }
}

/// Whether every input of `function` resolves to a type matching the corresponding argument.
fn accepts(function: &Function, args: &[DynSolValue]) -> bool {
    function.inputs.len() == args.len()
        && function
            .inputs
            .iter()
            .zip(args)
            .all(|(param, arg)| param.resolve().is_ok_and(|ty| ty.matches(arg)))
}

fn deploy_function<'a>(
    abi: &'a JsonAbi,
    name: &'static str,
) -> Result<&'a Function, AbiMetadataError> {
    let overloads = abi
        .function(name)
        .ok_or(AbiMetadataError::MissingFunction(name))?;
    overloads
        .iter()
        .find(|f| f.inputs.iter().map(|p| p.ty.as_str()).eq(DEPLOY_INPUTS))
        .ok_or_else(|| AbiMetadataError::UnexpectedSignature {
            name,
            found: overloads
                .iter()
                .map(Function::signature)
                .collect::<Vec<_>>()
                .join(", "),
            want: DEPLOY_INPUTS.join(","),
        })
}
