// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

use std::{fs, path::Path};

use eyre::Context;

use style::{BOLD, DIM, ERROR};

use crate::error::CliError;

mod style;

pub fn decode0x(text: impl AsRef<str>) -> Result<Vec<u8>, hex::FromHexError> {
    let text = text.as_ref();
    let text = text.trim();
    let text = text.strip_prefix("0x").unwrap_or(text);
    hex::decode(text)
}

/// Reads bytecode from a file holding either hex text or raw bytes.
pub fn read_bytecode(path: &Path) -> eyre::Result<Vec<u8>> {
    let contents = fs::read(path)
        .wrap_err_with(|| format!("failed to read bytecode from {}", path.display()))?;
    let decoded = std::str::from_utf8(&contents)
        .ok()
        .and_then(|text| decode0x(text).ok());
    match decoded {
        Some(code) => {
            log::debug!("read {} hex-encoded bytes from {}", code.len(), path.display());
            Ok(code)
        }
        None => {
            log::debug!("read {} raw bytes from {}", contents.len(), path.display());
            Ok(contents)
        }
    }
}

pub fn print_error(err: &CliError) {
    eprintln!("{ERROR}error{ERROR:#}{BOLD}:{BOLD:#} {err}");
    for cause in err.chain().skip(1) {
        eprintln!("  {DIM}caused by:{DIM:#} {cause}");
    }
}
