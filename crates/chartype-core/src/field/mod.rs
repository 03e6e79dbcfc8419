//! Symbolic field selectors for candles and tickers.
//!
//! [`CandleField`] and [`TickerField`] name one numeric attribute of their
//! record type. Each offers the same operations:
//!
//! | Operation | Enum | Raw code |
//! |-----------|------|----------|
//! | validate | `TryFrom<u8>` | [`CandleFieldCode::validate`] |
//! | encode text | `as_str` / `Display` | `encode_text` |
//! | encode JSON | `to_json` / `Serialize` | `encode_json` |
//! | decode text | `FromStr` | - |
//! | decode JSON | `from_json` / `Deserialize` | `Deserialize` |
//! | extract | `extract` | `extract` (zero for invalid codes) |
//!
//! The two decoders are deliberately separate closed sets. Short forms
//! overlap across them (`"c"` is candle close and ticker change), so a token
//! is only meaningful together with the enumeration it is decoded into.

mod candle;
mod ticker;

pub use candle::{from_candles, CandleField, CandleFieldCode};
pub use ticker::{TickerField, TickerFieldCode};

use serde_json::Value;

use crate::{FieldError, FieldKind};

fn encode_json_token(token: &str) -> Vec<u8> {
    Value::from(token).to_string().into_bytes()
}

fn decode_json_token(kind: FieldKind, payload: &[u8]) -> Result<String, FieldError> {
    serde_json::from_slice(payload).map_err(|err| FieldError::MalformedPayload {
        kind,
        reason: err.to_string(),
    })
}
