// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

use std::fmt;
use std::process::ExitCode;

pub type CliResult = Result<(), CliError>;

/// Exit code for rejected input.
const INVALID_INPUT: u8 = 2;

#[derive(Debug)]
pub struct CliError {
    error: eyre::Error,
    exit_code: ExitCode,
}

impl CliError {
    pub fn exit_code(&self) -> ExitCode {
        self.exit_code
    }

    pub fn chain(&self) -> eyre::Chain<'_> {
        self.error.chain()
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        self.error.fmt(f)
    }
}

impl From<std::io::Error> for CliError {
    fn from(err: std::io::Error) -> Self {
        Self {
            error: err.into(),
            exit_code: ExitCode::FAILURE,
        }
    }
}

impl From<eyre::Error> for CliError {
    fn from(error: eyre::Error) -> Self {
        Self {
            error,
            exit_code: ExitCode::FAILURE,
        }
    }
}

impl From<zkdeploy::Error> for CliError {
    fn from(err: zkdeploy::Error) -> Self {
        let exit_code = match err {
            zkdeploy::Error::InvalidSaltLength { .. } | zkdeploy::Error::BytecodeTooLarge { .. } => {
                ExitCode::from(INVALID_INPUT)
            }
            _ => ExitCode::FAILURE,
        };
        Self {
            error: err.into(),
            exit_code,
        }
    }
}
