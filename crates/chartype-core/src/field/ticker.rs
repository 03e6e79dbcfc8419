use std::fmt::{Display, Formatter};
use std::str::FromStr;

use rust_decimal::Decimal;
use serde::de::Error as DeError;
use serde::ser::Error as SerError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::{decode_json_token, encode_json_token};
use crate::{FieldError, FieldKind, Ticker};

const KIND: FieldKind = FieldKind::Ticker;

/// Ticker attribute selectable by name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum TickerField {
    Last = 1,
    Ask = 2,
    Bid = 3,
    /// 24h change of the last price in price units.
    Change = 4,
    /// 24h change of the last price in percent.
    PercentChange = 5,
    Volume = 6,
}

struct Spec {
    name: &'static str,
    short: &'static str,
    read: fn(&Ticker) -> Decimal,
}

impl TickerField {
    pub const ALL: [Self; 6] = [
        Self::Last,
        Self::Ask,
        Self::Bid,
        Self::Change,
        Self::PercentChange,
        Self::Volume,
    ];

    fn spec(self) -> Spec {
        match self {
            Self::Last => Spec {
                name: "last",
                short: "l",
                read: |t| t.last,
            },
            Self::Ask => Spec {
                name: "ask",
                short: "a",
                read: |t| t.ask,
            },
            Self::Bid => Spec {
                name: "bid",
                short: "b",
                read: |t| t.bid,
            },
            Self::Change => Spec {
                name: "change",
                short: "c",
                read: |t| t.change,
            },
            Self::PercentChange => Spec {
                name: "percent_change",
                short: "pc",
                read: |t| t.percent_change,
            },
            Self::Volume => Spec {
                name: "volume",
                short: "v",
                read: |t| t.volume,
            },
        }
    }

    pub const fn code(self) -> u8 {
        self as u8
    }

    pub fn as_str(self) -> &'static str {
        self.spec().name
    }

    pub fn short_form(self) -> &'static str {
        self.spec().short
    }

    pub fn extract(self, ticker: &Ticker) -> Decimal {
        (self.spec().read)(ticker)
    }

    pub fn to_json(self) -> Vec<u8> {
        encode_json_token(self.as_str())
    }

    pub fn from_json(payload: &[u8]) -> Result<Self, FieldError> {
        decode_json_token(KIND, payload)?.parse()
    }
}

impl Display for TickerField {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TickerField {
    type Err = FieldError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let token = value.to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|field| {
                let spec = field.spec();
                spec.name == token || spec.short == token
            })
            .ok_or(FieldError::invalid(KIND))
    }
}

impl TryFrom<u8> for TickerField {
    type Error = FieldError;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        Self::ALL
            .into_iter()
            .find(|field| field.code() == code)
            .ok_or(FieldError::invalid(KIND))
    }
}

impl Serialize for TickerField {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for TickerField {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = String::deserialize(deserializer)?;
        value.parse().map_err(D::Error::custom)
    }
}

/// Raw numeric ticker field code. Valid codes are `1..=6`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TickerFieldCode(pub u8);

impl TickerFieldCode {
    pub const INVALID: Self = Self(0);

    pub fn validate(self) -> Result<(), FieldError> {
        self.field().map(|_| ())
    }

    pub fn field(self) -> Result<TickerField, FieldError> {
        TickerField::try_from(self.0)
    }

    pub fn encode_text(self) -> Result<&'static str, FieldError> {
        self.field().map(TickerField::as_str)
    }

    pub fn encode_json(self) -> Result<Vec<u8>, FieldError> {
        self.encode_text().map(encode_json_token)
    }

    pub fn extract(self, ticker: &Ticker) -> Decimal {
        self.field()
            .map_or(Decimal::ZERO, |field| field.extract(ticker))
    }
}

impl From<TickerField> for TickerFieldCode {
    fn from(field: TickerField) -> Self {
        Self(field.code())
    }
}

impl Serialize for TickerFieldCode {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let token = self.encode_text().map_err(S::Error::custom)?;
        serializer.serialize_str(token)
    }
}

impl<'de> Deserialize<'de> for TickerFieldCode {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        TickerField::deserialize(deserializer).map(Self::from)
    }
}
