use std::io::{IsTerminal, Read};
use std::path::Path;

use anyhow::{bail, Context};
use colored::Colorize;
use serde_json::Value;
use xlv_codec::{decode_nft_flags, display_currency, format_amount, format_ripple_time};
use xlv_flatten::{text_lines, Flattener, ReportSink, TextLine, TreeSink};
use xlv_schema::{EntrySchemaRegistry, Schema, TransactionType};
use xlv_types::{DisplayConfig, SectionTree};

use crate::cli::*;
use crate::config::load_config;

pub fn run_command(cli: Cli) -> anyhow::Result<()> {
    let config = load_config(cli.config.as_deref(), cli.utc_offset, cli.zone.as_deref())?;
    if !std::io::stdout().is_terminal() {
        colored::control::set_override(false);
    }
    match cli.command {
        Command::Render(args) => cmd_render(args, cli.format, config),
        Command::Amount(args) => cmd_amount(args),
        Command::Time(args) => {
            println!("{}", format_ripple_time(args.seconds, &config)?);
            Ok(())
        }
        Command::Currency(args) => {
            println!("{}", display_currency(&args.code));
            Ok(())
        }
        Command::Flags(args) => {
            println!("{}", decode_nft_flags(args.bits));
            Ok(())
        }
        Command::Schema(args) => cmd_schema(args, cli.format),
    }
}

/// Text output with highlighted section titles and field names.
struct ColorSink {
    indent_width: usize,
}

impl ReportSink for ColorSink {
    type Output = String;

    fn finish(&mut self, tree: SectionTree) -> String {
        text_lines(&tree, self.indent_width)
            .into_iter()
            .map(|line| match line {
                TextLine::Title { indent, title } if indent == 0 => {
                    format!("{}", title.bold().underline())
                }
                TextLine::Title { indent, title } => format!("{:indent$}{}", "", title.bold()),
                TextLine::Item { indent, key, value } => {
                    format!("{:indent$}{}: {value}", "", key.cyan())
                }
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn fail(&mut self, message: String) -> String {
        message.red().to_string()
    }
}

fn cmd_render(args: RenderArgs, format: OutputFormat, config: DisplayConfig) -> anyhow::Result<()> {
    let source = read_input(args.input.as_deref())?;
    let response: Value = serde_json::from_str(&source).context("input is not valid JSON")?;
    let flattener = Flattener::new(config);
    let kind = args.mode.into();
    match format {
        OutputFormat::Text => {
            let mut sink = ColorSink {
                indent_width: flattener.config().indent_width,
            };
            println!("{}", flattener.flatten(&response, kind, &mut sink));
        }
        OutputFormat::Json => {
            let tree = flattener.flatten(&response, kind, &mut TreeSink);
            println!("{}", serde_json::to_string_pretty(&tree)?);
        }
    }
    Ok(())
}

fn read_input(path: Option<&Path>) -> anyhow::Result<String> {
    match path {
        Some(path) if path != Path::new("-") => std::fs::read_to_string(path)
            .with_context(|| format!("reading {}", path.display())),
        _ => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("reading stdin")?;
            Ok(buf)
        }
    }
}

fn cmd_amount(args: AmountArgs) -> anyhow::Result<()> {
    // Input that is not JSON is a plain string.
    let raw = serde_json::from_str(&args.raw).unwrap_or(Value::String(args.raw));
    match format_amount(&raw) {
        Some(text) => {
            println!("{text}");
            Ok(())
        }
        None => bail!("not an amount: {raw}"),
    }
}

fn cmd_schema(args: SchemaArgs, format: OutputFormat) -> anyhow::Result<()> {
    let Some(schema) = lookup_schema(&args.tag) else {
        bail!("no schema registered for {}", args.tag);
    };
    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&schema)?),
        OutputFormat::Text => {
            println!("{} ({})", schema.label.bold(), schema.plural_label);
            for field in &schema.fields {
                println!("  {:<24} {:?}", field.name.cyan(), field.kind);
            }
        }
    }
    Ok(())
}

/// Entry schemas first, then transaction layouts.
fn lookup_schema(tag: &str) -> Option<Schema> {
    if let Some(schema) = EntrySchemaRegistry::new().get(tag) {
        return Some(schema.clone());
    }
    let tx = TransactionType::from_tag(tag);
    (!tx.is_unknown()).then(|| Schema::for_transaction(&tx))
}
