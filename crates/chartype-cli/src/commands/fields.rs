use chartype_core::{CandleField, FieldKind, TickerField};
use serde_json::{json, Value};

use crate::cli::{FieldsArgs, KindArg};

pub fn run(args: &FieldsArgs) -> Value {
    let mut rows = Vec::new();

    if matches!(args.kind, None | Some(KindArg::Candle)) {
        rows.extend(CandleField::ALL.into_iter().map(|field| {
            row(FieldKind::Candle, field.code(), field.as_str(), field.short_form())
        }));
    }

    if matches!(args.kind, None | Some(KindArg::Ticker)) {
        rows.extend(TickerField::ALL.into_iter().map(|field| {
            row(FieldKind::Ticker, field.code(), field.as_str(), field.short_form())
        }));
    }

    Value::Array(rows)
}

fn row(kind: FieldKind, code: u8, name: &str, short: &str) -> Value {
    json!({
        "kind": kind.as_str(),
        "code": code,
        "name": name,
        "short": short,
    })
}
