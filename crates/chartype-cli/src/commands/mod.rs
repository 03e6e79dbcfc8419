mod candles;
mod decode;
mod fields;
mod ticker;

use std::io::Read;
use std::path::Path;

use serde_json::Value;

use crate::cli::Command;
use crate::error::CliError;

pub fn run(command: &Command) -> Result<Value, CliError> {
    match command {
        Command::Fields(args) => Ok(fields::run(args)),
        Command::Decode(args) => decode::run(args),
        Command::Candles(args) => candles::run(args),
        Command::Ticker(args) => ticker::run(args),
    }
}

/// Reads the whole input document from `path`, or from stdin when `path` is
/// absent or `-`.
fn read_input(path: Option<&Path>) -> Result<String, CliError> {
    match path {
        Some(path) if path != Path::new("-") => {
            tracing::debug!(path = %path.display(), "reading input file");
            Ok(std::fs::read_to_string(path)?)
        }
        _ => {
            tracing::debug!("reading input from stdin");
            let mut buffer = String::new();
            std::io::stdin().read_to_string(&mut buffer)?;
            Ok(buffer)
        }
    }
}
