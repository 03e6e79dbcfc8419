//! CLI argument definitions for chartype.
//!
//! | Command | Description |
//! |---------|-------------|
//! | `fields` | List candle and ticker fields with their tokens |
//! | `decode` | Decode a field token into its canonical form |
//! | `candles` | Project one field out of a candle series |
//! | `ticker` | Extract one field from a ticker |
//!
//! # Examples
//!
//! ```bash
//! chartype fields ticker
//! chartype decode candle C
//! chartype candles --field close --input packet.json --pretty
//! cat ticker.json | chartype ticker --field pc
//! ```

use std::path::PathBuf;

use chartype_core::{CandleField, FieldKind, TickerField};
use clap::{Args, Parser, Subcommand, ValueEnum};

/// chartype - field selectors over exact-decimal candles and tickers
#[derive(Debug, Parser)]
#[command(
    name = "chartype",
    author,
    version,
    about = "Inspect and project candle/ticker fields by name"
)]
pub struct Cli {
    /// Pretty-print JSON output with indentation.
    #[arg(long, global = true, default_value_t = false)]
    pub pretty: bool,

    /// Log debug diagnostics to stderr (overrides RUST_LOG).
    #[arg(short, long, global = true, default_value_t = false)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Field enumeration selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum KindArg {
    Candle,
    Ticker,
}

impl From<KindArg> for FieldKind {
    fn from(kind: KindArg) -> Self {
        match kind {
            KindArg::Candle => Self::Candle,
            KindArg::Ticker => Self::Ticker,
        }
    }
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// List fields, their codes and accepted tokens.
    Fields(FieldsArgs),
    /// Decode a long or short field token.
    Decode(DecodeArgs),
    /// Project a candle field over a JSON candle array or packet.
    Candles(CandlesArgs),
    /// Extract a ticker field from a JSON ticker or packet.
    Ticker(TickerArgs),
}

#[derive(Debug, Clone, Args)]
pub struct FieldsArgs {
    /// Restrict the listing to one enumeration.
    #[arg(value_enum)]
    pub kind: Option<KindArg>,
}

#[derive(Debug, Clone, Args)]
pub struct DecodeArgs {
    #[arg(value_enum)]
    pub kind: KindArg,

    /// Token to decode, e.g. `close`, `c`, `PC`.
    pub token: String,
}

#[derive(Debug, Clone, Args)]
pub struct CandlesArgs {
    /// Candle field, long or short form.
    #[arg(long, short)]
    pub field: CandleField,

    /// JSON input file; stdin when omitted or `-`.
    #[arg(long, short)]
    pub input: Option<PathBuf>,
}

#[derive(Debug, Clone, Args)]
pub struct TickerArgs {
    /// Ticker field, long or short form.
    #[arg(long, short)]
    pub field: TickerField,

    /// JSON input file; stdin when omitted or `-`.
    #[arg(long, short)]
    pub input: Option<PathBuf>,
}
