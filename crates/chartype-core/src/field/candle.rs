use std::fmt::{Display, Formatter};
use std::str::FromStr;

use rust_decimal::Decimal;
use serde::de::Error as DeError;
use serde::ser::Error as SerError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::{decode_json_token, encode_json_token};
use crate::{Candle, FieldError, FieldKind};

const KIND: FieldKind = FieldKind::Candle;

/// Candle attribute selectable by name, e.g. from configuration.
///
/// Serialized as the long-form token (`"close"`); deserialized from either
/// the long form or the short form (`"c"`), case-insensitively.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum CandleField {
    /// Starting value of the bar.
    Open = 1,
    /// Highest value of the bar.
    High = 2,
    /// Lowest value of the bar.
    Low = 3,
    /// Last value of the bar.
    Close = 4,
    Volume = 5,
}

/// Codec and accessor row of one candle field.
struct Spec {
    name: &'static str,
    short: &'static str,
    read: fn(&Candle) -> Decimal,
}

impl CandleField {
    pub const ALL: [Self; 5] = [
        Self::Open,
        Self::High,
        Self::Low,
        Self::Close,
        Self::Volume,
    ];

    // Sole membership table: validation, both codec directions and
    // extraction all read from here.
    fn spec(self) -> Spec {
        match self {
            Self::Open => Spec {
                name: "open",
                short: "o",
                read: |c| c.open,
            },
            Self::High => Spec {
                name: "high",
                short: "h",
                read: |c| c.high,
            },
            Self::Low => Spec {
                name: "low",
                short: "l",
                read: |c| c.low,
            },
            Self::Close => Spec {
                name: "close",
                short: "c",
                read: |c| c.close,
            },
            Self::Volume => Spec {
                name: "volume",
                short: "v",
                read: |c| c.volume,
            },
        }
    }

    pub const fn code(self) -> u8 {
        self as u8
    }

    /// Canonical lowercase long-form token.
    pub fn as_str(self) -> &'static str {
        self.spec().name
    }

    /// Abbreviation accepted on decode. Never emitted on encode.
    pub fn short_form(self) -> &'static str {
        self.spec().short
    }

    pub fn extract(self, candle: &Candle) -> Decimal {
        (self.spec().read)(candle)
    }

    /// Long-form token as a JSON string scalar.
    pub fn to_json(self) -> Vec<u8> {
        encode_json_token(self.as_str())
    }

    /// Decodes a JSON string scalar. Structural problems are reported as
    /// [`FieldError::MalformedPayload`] before the token is matched.
    pub fn from_json(payload: &[u8]) -> Result<Self, FieldError> {
        decode_json_token(KIND, payload)?.parse()
    }
}

impl Display for CandleField {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CandleField {
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

impl TryFrom<u8> for CandleField {
    type Error = FieldError;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        Self::ALL
            .into_iter()
            .find(|field| field.code() == code)
            .ok_or(FieldError::invalid(KIND))
    }
}

impl Serialize for CandleField {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for CandleField {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = String::deserialize(deserializer)?;
        value.parse().map_err(D::Error::custom)
    }
}

/// Raw numeric candle field code, as kept by numeric configuration.
///
/// Any code outside `1..=5` is invalid; `0` is the conventional "no field".
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CandleFieldCode(pub u8);

impl CandleFieldCode {
    pub const INVALID: Self = Self(0);

    pub fn validate(self) -> Result<(), FieldError> {
        self.field().map(|_| ())
    }

    pub fn field(self) -> Result<CandleField, FieldError> {
        CandleField::try_from(self.0)
    }

    pub fn encode_text(self) -> Result<&'static str, FieldError> {
        self.field().map(CandleField::as_str)
    }

    pub fn encode_json(self) -> Result<Vec<u8>, FieldError> {
        self.encode_text().map(encode_json_token)
    }

    /// Best-effort extraction: an invalid code yields zero instead of an
    /// error. Call [`Self::validate`] first when that matters.
    pub fn extract(self, candle: &Candle) -> Decimal {
        self.field()
            .map_or(Decimal::ZERO, |field| field.extract(candle))
    }

    /// One value per candle, in input order; zeros for an invalid code.
    pub fn project(self, candles: &[Candle]) -> Vec<Decimal> {
        candles.iter().map(|candle| self.extract(candle)).collect()
    }
}

impl From<CandleField> for CandleFieldCode {
    fn from(field: CandleField) -> Self {
        Self(field.code())
    }
}

impl Serialize for CandleFieldCode {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let token = self.encode_text().map_err(S::Error::custom)?;
        serializer.serialize_str(token)
    }
}

impl<'de> Deserialize<'de> for CandleFieldCode {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        CandleField::deserialize(deserializer).map(Self::from)
    }
}

/// Extracts `field` from every candle, preserving order.
pub fn from_candles(candles: &[Candle], field: CandleField) -> Vec<Decimal> {
    candles.iter().map(|candle| field.extract(candle)).collect()
}
