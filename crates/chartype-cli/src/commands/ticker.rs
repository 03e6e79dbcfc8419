use chartype_core::{Packet, Ticker, TickerField};
use serde_json::{json, Value};

use super::read_input;
use crate::cli::TickerArgs;
use crate::error::CliError;

pub fn run(args: &TickerArgs) -> Result<Value, CliError> {
    let document = read_input(args.input.as_deref())?;
    extract(&document, args.field)
}

/// Accepts either a ticker object or a packet object.
fn extract(document: &str, field: TickerField) -> Result<Value, CliError> {
    let value: Value = serde_json::from_str(document)?;
    let ticker: Ticker = if value.get("ticker").is_some() {
        serde_json::from_value::<Packet>(value)?.ticker
    } else {
        serde_json::from_value(value)?
    };

    let extracted = field.extract(&ticker);
    tracing::debug!(%field, value = %extracted, "extracted ticker field");

    Ok(json!({
        "field": field,
        "value": extracted,
    }))
}
