use chartype_core::{CandleField, FieldKind, TickerField};
use serde_json::{json, Value};

use crate::cli::{DecodeArgs, KindArg};
use crate::error::CliError;

pub fn run(args: &DecodeArgs) -> Result<Value, CliError> {
    let (code, name) = match args.kind {
        KindArg::Candle => {
            let field: CandleField = args.token.parse()?;
            (field.code(), field.as_str())
        }
        KindArg::Ticker => {
            let field: TickerField = args.token.parse()?;
            (field.code(), field.as_str())
        }
    };

    let kind = FieldKind::from(args.kind);
    tracing::debug!(%kind, token = %args.token, name, "decoded field token");

    Ok(json!({
        "kind": kind.as_str(),
        "code": code,
        "name": name,
    }))
}
