// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

use crate::error::CliResult;

mod encode;
mod hash_bytecode;

#[derive(Debug, clap::Subcommand)]
pub enum Command {
    /// Encode a ContractDeployer call
    #[clap(visible_alias = "e")]
    Encode(encode::Args),
    /// Print the deployable content hash of some bytecode
    #[clap(visible_alias = "h")]
    HashBytecode(hash_bytecode::Args),
}

pub fn exec(cmd: Command) -> CliResult {
    match cmd {
        Command::Encode(args) => encode::exec(args),
        Command::HashBytecode(args) => hash_bytecode::exec(args),
    }
}
