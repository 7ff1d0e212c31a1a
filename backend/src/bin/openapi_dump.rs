//! Print the OpenAPI document to stdout.

use std::io::{self, Write};

use accounts_backend::ApiDoc;
use clap::{Parser, ValueEnum};
use utoipa::OpenApi;

#[derive(Debug, Clone, Copy, Default, ValueEnum)]
enum Format {
    #[default]
    Json,
    Yaml,
}

/// Dump the accounts API OpenAPI document.
#[derive(Debug, Parser)]
#[command(name = "openapi-dump", version, about)]
struct Cli {
    /// Output format.
    #[arg(long, value_enum, default_value_t = Format::Json)]
    format: Format,
    /// Emit single-line JSON instead of pretty-printed output.
    #[arg(long)]
    compact: bool,
}

fn render(cli: &Cli) -> io::Result<String> {
    let doc = ApiDoc::openapi();
    let rendered = match (cli.format, cli.compact) {
        (Format::Json, true) => doc.to_json(),
        (Format::Json, false) => doc.to_pretty_json(),
        (Format::Yaml, _) => return doc.to_yaml().map_err(io::Error::other),
    };
    rendered.map_err(io::Error::other)
}

fn main() -> io::Result<()> {
    let cli = Cli::parse();
    let rendered = render(&cli)?;
    let mut stdout = io::stdout().lock();
    writeln!(stdout, "{rendered}")
}
