use chartype_core::{
    from_candles, Candle, CandleField, CandleFieldCode, Decimal, FieldError, FieldKind, Ticker,
    TickerField, TickerFieldCode,
};
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

fn flat_candle(value: Decimal) -> Candle {
    Candle {
        open: value,
        high: value,
        low: value,
        close: value,
        volume: value,
        ..Candle::default()
    }
}

fn flat_ticker(value: Decimal) -> Ticker {
    Ticker {
        last: value,
        ask: value,
        bid: value,
        change: value,
        percent_change: value,
        volume: value,
    }
}

#[test]
fn candle_fields_roundtrip_through_text_and_json() {
    for field in CandleField::ALL {
        let text = field.to_string();
        assert_eq!(text.parse::<CandleField>(), Ok(field));
        assert_eq!(text.to_uppercase().parse::<CandleField>(), Ok(field));
        assert_eq!(CandleField::from_json(&field.to_json()), Ok(field));
    }
}

#[test]
fn ticker_fields_roundtrip_through_text_and_json() {
    for field in TickerField::ALL {
        let text = field.to_string();
        assert_eq!(text.parse::<TickerField>(), Ok(field));
        assert_eq!(text.to_uppercase().parse::<TickerField>(), Ok(field));
        assert_eq!(TickerField::from_json(&field.to_json()), Ok(field));
    }
}

#[test]
fn alias_table_matches_documented_short_forms() {
    let candle = [
        (CandleField::Open, "open", "o"),
        (CandleField::High, "high", "h"),
        (CandleField::Low, "low", "l"),
        (CandleField::Close, "close", "c"),
        (CandleField::Volume, "volume", "v"),
    ];
    for (field, long, short) in candle {
        assert_eq!(field.as_str(), long);
        assert_eq!(field.short_form(), short);
        assert_eq!(short.parse::<CandleField>(), Ok(field));
    }

    let ticker = [
        (TickerField::Last, "last", "l"),
        (TickerField::Ask, "ask", "a"),
        (TickerField::Bid, "bid", "b"),
        (TickerField::Change, "change", "c"),
        (TickerField::PercentChange, "percent_change", "pc"),
        (TickerField::Volume, "volume", "v"),
    ];
    for (field, long, short) in ticker {
        assert_eq!(field.as_str(), long);
        assert_eq!(field.short_form(), short);
        assert_eq!(short.parse::<TickerField>(), Ok(field));
    }
}

#[test]
fn short_c_depends_on_enumeration() {
    assert_eq!("c".parse::<CandleField>(), Ok(CandleField::Close));
    assert_eq!("c".parse::<TickerField>(), Ok(TickerField::Change));
    assert!("pc".parse::<CandleField>().is_err());
}

#[test]
fn candle_membership_agrees_for_every_code() {
    let candle = flat_candle(dec!(30));

    for raw in 0..=u8::MAX {
        let code = CandleFieldCode(raw);
        let valid = code.validate().is_ok();

        assert_eq!(code.encode_text().is_ok(), valid, "code {raw}");
        assert_eq!(code.encode_json().is_ok(), valid, "code {raw}");
        assert_eq!(CandleField::try_from(raw).is_ok(), valid, "code {raw}");
        assert_eq!(code.extract(&candle) != Decimal::ZERO, valid, "code {raw}");
        assert_eq!(valid, (1..=5).contains(&raw), "code {raw}");
    }
}

#[test]
fn ticker_membership_agrees_for_every_code() {
    let ticker = flat_ticker(dec!(30));

    for raw in 0..=u8::MAX {
        let code = TickerFieldCode(raw);
        let valid = code.validate().is_ok();

        assert_eq!(code.encode_text().is_ok(), valid, "code {raw}");
        assert_eq!(code.encode_json().is_ok(), valid, "code {raw}");
        assert_eq!(TickerField::try_from(raw).is_ok(), valid, "code {raw}");
        assert_eq!(code.extract(&ticker) != Decimal::ZERO, valid, "code {raw}");
        assert_eq!(valid, (1..=6).contains(&raw), "code {raw}");
    }
}

#[test]
fn structural_and_semantic_failures_are_distinct() {
    let malformed: [&[u8]; 6] = [
        br#"{"70""#,
        b"70",
        b"\"open",
        b"",
        b"null",
        b"\"open\" x",
    ];
    for payload in malformed {
        let err = CandleField::from_json(payload).expect_err("must fail");
        assert!(
            matches!(err, FieldError::MalformedPayload { .. }),
            "payload {:?} gave {err:?}",
            String::from_utf8_lossy(payload)
        );
    }

    assert_eq!(
        CandleField::from_json(br#""70""#),
        Err(FieldError::InvalidField {
            kind: FieldKind::Candle
        })
    );
    assert_eq!(
        TickerField::from_json(br#""xyz""#),
        Err(FieldError::InvalidField {
            kind: FieldKind::Ticker
        })
    );
}

#[test]
fn json_decode_accepts_short_and_mixed_case_forms() {
    assert_eq!(CandleField::from_json(br#""O""#), Ok(CandleField::Open));
    assert_eq!(
        TickerField::from_json(br#""Percent_Change""#),
        Ok(TickerField::PercentChange)
    );
}

#[derive(Debug, PartialEq, Serialize, Deserialize)]
struct MovingAverageConfig {
    source: CandleField,
    quote: TickerField,
    period: usize,
}

#[test]
fn fields_embed_in_configuration() {
    let config: MovingAverageConfig =
        serde_json::from_str(r#"{"source": "c", "quote": "PC", "period": 14}"#)
            .expect("must parse");

    assert_eq!(config.source, CandleField::Close);
    assert_eq!(config.quote, TickerField::PercentChange);

    let encoded = serde_json::to_string(&config).expect("must serialize");
    assert_eq!(
        encoded,
        r#"{"source":"close","quote":"percent_change","period":14}"#
    );
}

#[test]
fn unknown_field_in_configuration_is_rejected() {
    let err = serde_json::from_str::<MovingAverageConfig>(
        r#"{"source": "median", "quote": "last", "period": 14}"#,
    )
    .expect_err("must fail");

    assert!(err.to_string().contains("invalid candle field"));
}

#[test]
fn invalid_raw_code_cannot_be_serialized() {
    assert!(serde_json::to_string(&CandleFieldCode::INVALID).is_err());
    assert!(serde_json::to_string(&TickerFieldCode(42)).is_err());
    assert_eq!(
        serde_json::to_string(&TickerFieldCode::from(TickerField::Bid)).expect("must serialize"),
        r#""bid""#
    );

    let code: CandleFieldCode = serde_json::from_str(r#""h""#).expect("must parse");
    assert_eq!(code, CandleFieldCode(2));
}

#[test]
fn projection_matches_per_record_extraction() {
    let candles: Vec<Candle> = (1..=4)
        .map(|i| Candle {
            open: Decimal::from(i),
            high: Decimal::from(i * 10),
            low: Decimal::from(i * 100),
            close: Decimal::from(i * 1000),
            volume: Decimal::from(i * 10000),
            ..Candle::default()
        })
        .collect();

    for field in CandleField::ALL {
        let series = from_candles(&candles, field);
        assert_eq!(series.len(), candles.len());
        for (value, candle) in series.iter().zip(&candles) {
            assert_eq!(*value, field.extract(candle));
        }
        assert_eq!(series, CandleFieldCode::from(field).project(&candles));
    }

    assert_eq!(CandleFieldCode(9).project(&candles), vec![Decimal::ZERO; 4]);
    assert!(from_candles(&[], CandleField::Volume).is_empty());
}
