// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

use std::{borrow::Cow, fs, io, path::PathBuf};

use eyre::Context;
use zkdeploy::DeployerAbi;

use crate::utils::{decode0x, read_bytecode};

#[derive(Debug, clap::Args)]
#[group(required = true, multiple = false)]
pub struct BytecodeArgs {
    /// Contract bytecode as a hex string
    #[arg(long)]
    bytecode: Option<String>,
    /// File containing the contract bytecode, either raw or hex encoded
    #[arg(long)]
    bytecode_path: Option<PathBuf>,
}

impl BytecodeArgs {
    pub fn bytecode(&self) -> eyre::Result<Vec<u8>> {
        match (&self.bytecode, &self.bytecode_path) {
            (Some(text), _) => decode0x(text).wrap_err("invalid bytecode hex"),
            (None, Some(path)) => read_bytecode(path),
            (None, None) => Err(eyre::eyre!("no bytecode provided")),
        }
    }
}

#[derive(Debug, clap::Args)]
pub struct AbiArgs {
    /// ContractDeployer ABI JSON to use instead of the built-in one
    #[arg(long)]
    abi: Option<PathBuf>,
}

impl AbiArgs {
    pub fn deployer_abi(&self) -> eyre::Result<Cow<'static, DeployerAbi>> {
        match &self.abi {
            Some(path) => {
                let source = fs::read_to_string(path)
                    .wrap_err_with(|| format!("failed to read ABI from {}", path.display()))?;
                log::debug!("using ContractDeployer ABI from {}", path.display());
                Ok(Cow::Owned(DeployerAbi::parse(&source)?))
            }
            None => Ok(Cow::Borrowed(DeployerAbi::embedded()?)),
        }
    }
}

#[derive(Debug, clap::Args)]
pub struct OutputArgs {
    /// File to write the hex output to (defaults to stdout)
    #[arg(long)]
    output: Option<PathBuf>,
}

impl OutputArgs {
    pub fn write(&self, line: impl std::fmt::Display) -> eyre::Result<()> {
        let writer = match &self.output {
            Some(path) => &mut fs::File::create(path).wrap_err("failed to create output file")?
                as &mut dyn io::Write,
            None => &mut io::stdout(),
        };
        writeln!(writer, "{line}").wrap_err("failed to write output")
    }
}
