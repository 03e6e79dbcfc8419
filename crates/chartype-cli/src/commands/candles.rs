use chartype_core::{from_candles, Candle, CandleField, Packet};
use serde_json::{json, Value};

use super::read_input;
use crate::cli::CandlesArgs;
use crate::error::CliError;

pub fn run(args: &CandlesArgs) -> Result<Value, CliError> {
    let document = read_input(args.input.as_deref())?;
    project(&document, args.field)
}

/// Accepts either a bare candle array or a packet object.
fn project(document: &str, field: CandleField) -> Result<Value, CliError> {
    let value: Value = serde_json::from_str(document)?;
    let candles: Vec<Candle> = if value.is_array() {
        serde_json::from_value(value)?
    } else {
        serde_json::from_value::<Packet>(value)?.candles
    };

    let values = from_candles(&candles, field);
    tracing::debug!(%field, count = values.len(), "projected candle field");

    Ok(json!({
        "field": field,
        "count": values.len(),
        "values": values,
    }))
}
