use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "xlv",
    about = "XRPL Ledger View: readable reports from ledger API responses",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[arg(long, global = true, default_value = "text")]
    pub format: OutputFormat,

    /// TOML file with display settings
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Offset east of UTC, in minutes, for rendered times
    #[arg(long, global = true, allow_negative_numbers = true)]
    pub utc_offset: Option<i32>,

    /// Abbreviation appended to rendered times
    #[arg(long, global = true)]
    pub zone: Option<String>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, clap::ValueEnum)]
pub enum Mode {
    Auto,
    Listing,
    Transaction,
}

impl From<Mode> for xlv_flatten::ReportKind {
    fn from(mode: Mode) -> Self {
        match mode {
            Mode::Auto => Self::Auto,
            Mode::Listing => Self::Listing,
            Mode::Transaction => Self::Transaction,
        }
    }
}

#[derive(Subcommand)]
pub enum Command {
    /// Render a ledger API response as a report
    Render(RenderArgs),
    /// Format an amount (drops or JSON amount record)
    Amount(AmountArgs),
    /// Format a ripple-epoch timestamp
    Time(TimeArgs),
    /// Display a currency code
    Currency(CurrencyArgs),
    /// Decode an NFT flag bitmask
    Flags(FlagsArgs),
    /// Show the field layout for an entry or transaction type
    Schema(SchemaArgs),
}

#[derive(Args)]
pub struct RenderArgs {
    /// JSON response file; `-` or absent reads stdin
    pub input: Option<PathBuf>,
    #[arg(long, default_value = "auto")]
    pub mode: Mode,
}

#[derive(Args)]
pub struct AmountArgs {
    pub raw: String,
}

#[derive(Args)]
pub struct TimeArgs {
    pub seconds: u64,
}

#[derive(Args)]
pub struct CurrencyArgs {
    pub code: String,
}

#[derive(Args)]
pub struct FlagsArgs {
    pub bits: u32,
}

#[derive(Args)]
pub struct SchemaArgs {
    pub tag: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_render_stdin() {
        let cli = Cli::try_parse_from(["xlv", "render"]).unwrap();
        if let Command::Render(args) = cli.command {
            assert!(args.input.is_none());
            assert_eq!(args.mode, Mode::Auto);
        } else { panic!("wrong command"); }
    }

    #[test]
    fn parse_render_file_and_mode() {
        let cli = Cli::try_parse_from(["xlv", "render", "tx.json", "--mode", "transaction"]).unwrap();
        if let Command::Render(args) = cli.command {
            assert_eq!(args.input, Some(PathBuf::from("tx.json")));
            assert_eq!(args.mode, Mode::Transaction);
        } else { panic!("wrong command"); }
    }

    #[test]
    fn parse_render_rejects_unknown_mode() {
        assert!(Cli::try_parse_from(["xlv", "render", "--mode", "ledger"]).is_err());
    }

    #[test]
    fn parse_amount() {
        let cli = Cli::try_parse_from(["xlv", "amount", "1230000"]).unwrap();
        if let Command::Amount(args) = cli.command {
            assert_eq!(args.raw, "1230000");
        } else { panic!("wrong command"); }
    }

    #[test]
    fn parse_time_with_negative_offset() {
        let cli = Cli::try_parse_from(["xlv", "time", "802030415", "--utc-offset", "-240", "--zone", "EDT"]).unwrap();
        assert_eq!(cli.utc_offset, Some(-240));
        assert_eq!(cli.zone.as_deref(), Some("EDT"));
        if let Command::Time(args) = cli.command {
            assert_eq!(args.seconds, 802030415);
        } else { panic!("wrong command"); }
    }

    #[test]
    fn parse_time_rejects_negative_seconds() {
        assert!(Cli::try_parse_from(["xlv", "time", "-5"]).is_err());
    }

    #[test]
    fn parse_flags() {
        let cli = Cli::try_parse_from(["xlv", "flags", "9"]).unwrap();
        if let Command::Flags(args) = cli.command {
            assert_eq!(args.bits, 9);
        } else { panic!("wrong command"); }
    }

    #[test]
    fn parse_schema() {
        let cli = Cli::try_parse_from(["xlv", "schema", "Escrow"]).unwrap();
        assert!(matches!(cli.command, Command::Schema(_)));
    }

    #[test]
    fn parse_verbose_and_config() {
        let cli = Cli::try_parse_from(["xlv", "--verbose", "--config", "xlv.toml", "currency", "USD"]).unwrap();
        assert!(cli.verbose);
        assert_eq!(cli.config, Some(PathBuf::from("xlv.toml")));
    }

    #[test]
    fn parse_json_format() {
        let cli = Cli::try_parse_from(["xlv", "--format", "json", "render", "-"]).unwrap();
        assert_eq!(cli.format, OutputFormat::Json);
    }
}
