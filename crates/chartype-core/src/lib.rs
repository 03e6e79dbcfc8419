//! Core contracts for chartype.
//!
//! This crate contains:
//! - Exact-decimal market-data records (candles, tickers, packets)
//! - Symbolic field selectors with validation and a text/JSON codec
//! - Field extraction from single records and projection over candle series
//! - Structured errors

pub mod domain;
pub mod error;
pub mod field;

pub use domain::{parse_decimal, Candle, Packet, Ticker, UtcDateTime};
pub use error::{CoreError, FieldError, FieldKind, ParseError, ValidationError};
pub use field::{from_candles, CandleField, CandleFieldCode, TickerField, TickerFieldCode};
pub use rust_decimal::Decimal;
