use std::fs;
use std::io::{self, Read, Write};
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::Parser;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

use marktoggle::atoms::storage::{load_config, load_config_from};
use marktoggle::{StyleDispatcher, StyleRegistry, TextBuffer};

/// Toggle a Markdown style on a selection of a text file (or stdin).
#[derive(Parser, Debug)]
#[command(name = "marktoggle", version)]
struct Cli {
    /// Style to toggle: header, bold, italic, quote, code, link, image,
    /// unordered-list, ordered-list, task-list, mention, ref, or a
    /// configured style name
    style: String,

    /// Read the text from this file instead of stdin
    #[arg(short, long, value_name = "PATH")]
    file: Option<PathBuf>,

    /// Selection start, in characters
    #[arg(short, long, default_value_t = 0)]
    start: usize,

    /// Selection end, in characters (defaults to --start, a caret)
    #[arg(short, long)]
    end: Option<usize>,

    /// Write the result back to --file instead of stdout
    #[arg(short, long, requires = "file")]
    in_place: bool,

    /// Use this config file instead of ~/.config/marktoggle/config.toml
    #[arg(short, long, value_name = "PATH")]
    config: Option<PathBuf>,
}

fn init_tracing() {
    let filter = EnvFilter::try_from_env("MARKTOGGLE_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    let stderr_layer = fmt::layer()
        .with_writer(io::stderr)
        .with_target(true)
        .with_filter(filter);
    tracing_subscriber::registry().with(stderr_layer).init();
}

fn read_input(cli: &Cli) -> Result<String> {
    match &cli.file {
        Some(path) => {
            fs::read_to_string(path).with_context(|| format!("Failed to read {:?}", path))
        }
        None => {
            let mut text = String::new();
            io::stdin()
                .read_to_string(&mut text)
                .context("Failed to read stdin")?;
            Ok(text)
        }
    }
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => load_config_from(path)?,
        None => load_config()?,
    };
    let registry = StyleRegistry::from_config(&config);

    let text = read_input(&cli)?;
    let mut buffer = TextBuffer::from_string(&text);

    let end = cli.end.unwrap_or(cli.start);
    if end < cli.start {
        bail!("--end ({}) is before --start ({})", end, cli.start);
    }
    buffer.set_selection_graphemes(cli.start, end);

    StyleDispatcher::apply_named(&mut buffer, &registry, &cli.style)?;

    if cli.in_place {
        if let Some(path) = &cli.file {
            fs::write(path, buffer.content())
                .with_context(|| format!("Failed to write {:?}", path))?;
        }
    } else {
        io::stdout()
            .write_all(buffer.content().as_bytes())
            .context("Failed to write stdout")?;
    }

    let (sel_start, sel_end) = buffer.selection_graphemes();
    eprintln!("selection: {} {}", sel_start, sel_end);

    Ok(())
}
