//! # Domain Models
//!
//! Market-data records held as exact decimals.
//!
//! | Type | Description |
//! |------|-------------|
//! | [`Candle`] | OHLCV price bar with UTC timestamp |
//! | [`Ticker`] | Quote snapshot (last/ask/bid and change metrics) |
//! | [`Packet`] | Ticker plus the candles of one timeframe |
//! | [`UtcDateTime`] | UTC timestamp |
//!
//! Records perform no market-sanity checks: `high` may be below `low`.
//! Construction from raw feed tokens goes through [`Candle::parse`] and
//! [`Ticker::parse`], which stop at the first token that is not an exact
//! decimal.

mod candle;
mod decimal;
mod packet;
mod ticker;
mod timestamp;

pub use candle::Candle;
pub use decimal::parse_decimal;
pub use packet::Packet;
pub use ticker::Ticker;
pub use timestamp::UtcDateTime;
