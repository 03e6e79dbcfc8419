use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::{from_candles, Candle, CandleField, Ticker};

/// Ticker information together with all known candles of one timeframe.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Packet {
    pub ticker: Ticker,
    pub candles: Vec<Candle>,
}

impl Packet {
    pub fn new(ticker: Ticker, candles: Vec<Candle>) -> Self {
        Self { ticker, candles }
    }

    /// Projects `field` out of every candle, in candle order.
    pub fn series(&self, field: CandleField) -> Vec<Decimal> {
        from_candles(&self.candles, field)
    }
}
