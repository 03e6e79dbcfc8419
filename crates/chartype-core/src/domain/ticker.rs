use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::decimal::parse_decimal;
use crate::{ParseError, TickerField};

/// Point-in-time quote snapshot.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ticker {
    pub last: Decimal,
    pub ask: Decimal,
    pub bid: Decimal,
    /// 24h change of the last price in price units.
    pub change: Decimal,
    /// 24h change of the last price in percent.
    pub percent_change: Decimal,
    pub volume: Decimal,
}

impl Ticker {
    /// Builds a ticker from decimal-string tokens, failing on the first
    /// token that is not an exact decimal.
    pub fn parse(
        last: &str,
        ask: &str,
        bid: &str,
        change: &str,
        percent_change: &str,
        volume: &str,
    ) -> Result<Self, ParseError> {
        Ok(Self {
            last: parse_decimal("last", last)?,
            ask: parse_decimal("ask", ask)?,
            bid: parse_decimal("bid", bid)?,
            change: parse_decimal("change", change)?,
            percent_change: parse_decimal("percent_change", percent_change)?,
            volume: parse_decimal("volume", volume)?,
        })
    }

    pub fn get(&self, field: TickerField) -> Decimal {
        field.extract(self)
    }
}
