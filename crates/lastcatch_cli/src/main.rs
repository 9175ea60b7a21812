use std::fs;
use std::path::PathBuf;
use std::process;

use clap::{CommandFactory, Parser};
use lastcatch_core::core_api::{Engine, SaveFormat};
use lastcatch_render::{JsonStyle, TextStyle, render_json, render_text};
use tracing_subscriber::EnvFilter;

const LOG_ENV: &str = "LASTCATCH_LOG";

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Cli {
    #[arg(value_name = "SAVE")]
    path: Option<PathBuf>,
    #[arg(
        long,
        value_name = "auto|json|gzip",
        default_value = "auto",
        value_parser = parse_format
    )]
    format: FormatArg,
    #[arg(long, conflicts_with = "pretty")]
    text: bool,
    #[arg(long)]
    pretty: bool,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum FormatArg {
    Auto,
    Fixed(SaveFormat),
}

impl FormatArg {
    fn hint(self) -> Option<SaveFormat> {
        match self {
            Self::Auto => None,
            Self::Fixed(format) => Some(format),
        }
    }
}

fn main() {
    let cli = Cli::parse();
    init_logging();

    let Some(path) = cli.path.as_ref() else {
        eprintln!("{}", Cli::command().render_usage());
        process::exit(1);
    };

    let bytes = fs::read(path).unwrap_or_else(|e| {
        eprintln!("Error reading {}: {e}", path.display());
        process::exit(1);
    });

    let session = Engine::new()
        .open_bytes(bytes, cli.format.hint())
        .unwrap_or_else(|e| {
            eprintln!("Error decoding save file {}: {}", path.display(), e.message);
            process::exit(1);
        });
    tracing::info!(path = %path.display(), format = %session.format(), "opened save");

    let report = session.summarize();

    if cli.text {
        print!("{}", render_text(report.as_ref(), TextStyle::default()));
        return;
    }

    let json = render_json(report.as_ref(), JsonStyle::CanonicalV1);
    let rendered = if cli.pretty {
        serde_json::to_string_pretty(&json)
    } else {
        serde_json::to_string(&json)
    }
    .unwrap_or_else(|e| {
        eprintln!("Error rendering JSON output: {e}");
        process::exit(1);
    });
    println!("{rendered}");
}

fn init_logging() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn parse_format(value: &str) -> Result<FormatArg, String> {
    if value.eq_ignore_ascii_case("auto") {
        return Ok(FormatArg::Auto);
    }
    value
        .parse::<SaveFormat>()
        .map(FormatArg::Fixed)
        .map_err(|e| e.message)
}
