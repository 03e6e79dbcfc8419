use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::decimal::parse_decimal;
use crate::{CandleField, ParseError, UtcDateTime};

/// Price bar for one timeframe.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Candle {
    pub timestamp: UtcDateTime,
    pub open: Decimal,
    pub high: Decimal,
    pub low: Decimal,
    pub close: Decimal,
    pub volume: Decimal,
}

impl Candle {
    /// Candle at `timestamp` with every magnitude at zero.
    pub fn new(timestamp: UtcDateTime) -> Self {
        Self {
            timestamp,
            ..Self::default()
        }
    }

    /// Builds a candle from decimal-string tokens, failing on the first
    /// token that is not an exact decimal.
    pub fn parse(
        timestamp: UtcDateTime,
        open: &str,
        high: &str,
        low: &str,
        close: &str,
        volume: &str,
    ) -> Result<Self, ParseError> {
        Ok(Self {
            timestamp,
            open: parse_decimal("open", open)?,
            high: parse_decimal("high", high)?,
            low: parse_decimal("low", low)?,
            close: parse_decimal("close", close)?,
            volume: parse_decimal("volume", volume)?,
        })
    }

    pub fn get(&self, field: CandleField) -> Decimal {
        field.extract(self)
    }
}

#[cfg(test)]
mod tests {
    use rust_decimal_macros::dec;

    use super::*;

    #[test]
    fn new_candle_is_zeroed() {
        let ts = UtcDateTime::parse("2024-01-01T00:00:00Z").expect("must parse");
        let candle = Candle::new(ts);

        assert_eq!(candle.timestamp, ts);
        assert_eq!(candle.open, Decimal::ZERO);
        assert_eq!(candle.volume, Decimal::ZERO);
    }

    #[test]
    fn parses_all_tokens() {
        let candle = Candle::parse(UtcDateTime::default(), "1", "3", "5", "7", "9")
            .expect("must parse");

        assert_eq!(candle.open, dec!(1));
        assert_eq!(candle.high, dec!(3));
        assert_eq!(candle.low, dec!(5));
        assert_eq!(candle.close, dec!(7));
        assert_eq!(candle.volume, dec!(9));
    }

    #[test]
    fn reports_first_bad_token() {
        let err = Candle::parse(UtcDateTime::default(), "1", "x", "5", "-", "9")
            .expect_err("must fail");

        assert_eq!(
            err,
            ParseError::Decimal {
                field: "high",
                value: String::from("x"),
            }
        );
    }

    #[test]
    fn get_reads_named_attribute() {
        let candle = Candle {
            close: dec!(25.5),
            ..Candle::default()
        };

        assert_eq!(candle.get(CandleField::Close), dec!(25.5));
        assert_eq!(candle.get(CandleField::Open), Decimal::ZERO);
    }
}
