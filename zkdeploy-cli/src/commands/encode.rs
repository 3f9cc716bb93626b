// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

use eyre::Context;
use zkdeploy::{DeployerCall, DeployerCallEncoder};

use crate::{
    common_args::{AbiArgs, BytecodeArgs, OutputArgs},
    error::CliResult,
    utils::decode0x,
};

#[derive(Debug, clap::Args)]
pub struct Args {
    /// Deployer function: create, create2, create-account or create2-account
    call: DeployerCall,

    #[command(flatten)]
    bytecode: BytecodeArgs,
    /// Constructor calldata as a hex string
    #[arg(long, default_value = "")]
    calldata: String,
    /// 32-byte salt as a hex string (zero if omitted)
    #[arg(long)]
    salt: Option<String>,

    #[command(flatten)]
    abi: AbiArgs,
    #[command(flatten)]
    output: OutputArgs,
}

pub fn exec(args: Args) -> CliResult {
    let bytecode = args.bytecode.bytecode()?;
    let calldata = decode0x(&args.calldata).wrap_err("invalid calldata hex")?;
    let salt = args
        .salt
        .as_deref()
        .map(decode0x)
        .transpose()
        .wrap_err("invalid salt hex")?;
    if salt.is_some() && !args.call.accepts_salt() {
        log::warn!("{} does not take a salt, ignoring --salt", args.call);
    }

    let abi = args.abi.deployer_abi()?;
    let encoder = DeployerCallEncoder::new(&*abi);
    let encoded = encoder.encode(args.call, &bytecode, &calldata, salt.as_deref())?;
    args.output.write(encoded)?;
    Ok(())
}
