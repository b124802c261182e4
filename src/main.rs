//! Chevron Chart CLI
//!
//! Usage:
//!   chevron-chart [OPTIONS] [FILE]
//!
//! Options:
//!   -l, --layout <LAYOUT>    Override the document layout (straight, radial)
//!   -p, --palette <FILE>     Palette file used when the document sets no colors
//!   -o, --output <FILE>      Write SVG to a file instead of stdout
//!       --compact            Single-line output without XML declaration
//!   -d, --debug              Log layout and reconciliation details to stderr
//!   -h, --help               Print help

use std::fs;
use std::io::{self, IsTerminal, Read};
use std::path::PathBuf;

use clap::Parser;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use chevron_chart::{render_document, ChartDocument, LayoutKind, Palette, RenderConfig, SvgConfig};

#[derive(Parser)]
#[command(name = "chevron-chart")]
#[command(about = "Render chevron flow charts to SVG")]
struct Cli {
    /// Chart document in TOML (reads from stdin if not provided)
    input: Option<PathBuf>,

    /// Override the layout chosen by the document
    #[arg(short, long, value_enum)]
    layout: Option<LayoutKind>,

    /// Palette file (TOML) used when the document sets no colors
    #[arg(short, long)]
    palette: Option<PathBuf>,

    /// Output file (writes to stdout if not provided)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Emit a single-line <svg> element with no XML declaration
    #[arg(long)]
    compact: bool,

    /// Debug mode: log layout and reconciliation details
    #[arg(short, long)]
    debug: bool,
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.debug);

    // If no input file and stdin is a terminal (interactive), show intro help
    if cli.input.is_none() && io::stdin().is_terminal() {
        print_intro();
        return;
    }

    let palette = match &cli.palette {
        Some(path) => match Palette::from_file(path) {
            Ok(p) => Some(p),
            Err(e) => {
                eprintln!("Error loading palette '{}': {}", path.display(), e);
                std::process::exit(1);
            }
        },
        None => None,
    };

    let (source, filename) = match &cli.input {
        Some(path) => match fs::read_to_string(path) {
            Ok(content) => (content, path.display().to_string()),
            Err(e) => {
                eprintln!("Error reading file '{}': {}", path.display(), e);
                std::process::exit(1);
            }
        },
        None => {
            let mut buffer = String::new();
            match io::stdin().read_to_string(&mut buffer) {
                Ok(_) => (buffer, "<stdin>".to_string()),
                Err(e) => {
                    eprintln!("Error reading from stdin: {}", e);
                    std::process::exit(1);
                }
            }
        }
    };

    let doc = match ChartDocument::from_toml(&source) {
        Ok(doc) => doc,
        Err(e) => {
            eprintln!("{}", e.format(&source, &filename));
            std::process::exit(1);
        }
    };
    debug!(
        segments = doc.segments.len(),
        layout = ?doc.layout,
        "loaded chart document"
    );

    let svg_config = if cli.compact {
        SvgConfig::compact()
    } else {
        SvgConfig::new()
    };
    let mut config = RenderConfig::new().with_svg(svg_config);
    if let Some(palette) = palette {
        config = config.with_palette(palette);
    }
    if let Some(layout) = cli.layout {
        config = config.with_layout(layout);
    }

    let svg = render_document(&doc, &config);
    match &cli.output {
        Some(path) => {
            if let Err(e) = fs::write(path, &svg) {
                eprintln!("Error writing '{}': {}", path.display(), e);
                std::process::exit(1);
            }
        }
        None => println!("{}", svg),
    }
}

/// Log to stderr so stdout carries only SVG. `RUST_LOG` wins over `--debug`.
fn init_tracing(debug: bool) {
    let default_level = if debug { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn print_intro() {
    println!(
        r##"Chevron Chart - flow charts from arrow-shaped segments

USAGE:
    chevron-chart [OPTIONS] [FILE]
    cat chart.toml | chevron-chart

OPTIONS:
    -l, --layout     straight | radial (overrides the document)
    -p, --palette    Color palette (TOML file with `colors = [...]`)
    -o, --output     Write SVG to a file
    --compact        Single line, no XML declaration
    -d, --debug      Log layout details to stderr
    -h, --help       Print help

DOCUMENT:
    layout = "straight"          # or "radial"

    [straight]                   # optional, every key optional
    width = 150
    flat_first_arrow = false

    [[segments]]
    label = "Plan"

    [[segments]]
    label = "Ship"
    color = "#2ca02c""##
    );
}
