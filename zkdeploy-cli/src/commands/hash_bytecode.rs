// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

use crate::{
    common_args::{BytecodeArgs, OutputArgs},
    error::CliResult,
};

#[derive(Debug, clap::Args)]
pub struct Args {
    #[command(flatten)]
    bytecode: BytecodeArgs,
    #[command(flatten)]
    output: OutputArgs,
}

pub fn exec(args: Args) -> CliResult {
    let bytecode = args.bytecode.bytecode()?;
    let hash = zkdeploy::hash_bytecode(&bytecode)?;
    log::debug!("{} bytes, {} words", bytecode.len(), hash.word_count());
    args.output.write(hash)?;
    Ok(())
}
