mod config;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use orgtree_layout::{Direction, LayoutEngine, TreeLayout};
use orgtree_model::CanvasDocument;
use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};
use tracing::{debug, info};
use tracing_subscriber::{prelude::*, EnvFilter};

use config::load_options;

#[derive(Parser)]
#[command(author, version, about)]
struct Args {
    /// Canvas JSON file, '-' or nothing for stdin
    input: Option<PathBuf>,

    /// Output file, stdout when omitted
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Layout options file (.ron or .json)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Layout direction: TB, BT, LR or RL
    #[arg(short, long)]
    direction: Option<Direction>,

    /// What to write out
    #[arg(long, value_enum, default_value = "positions")]
    format: OutputFormat,
}

#[derive(ValueEnum, Debug, Clone, Copy)]
enum OutputFormat {
    /// Object mapping every person id to its top-left corner
    Positions,
    /// The input canvas with each node's position filled in
    Canvas,
}

fn read_input(path: Option<&Path>) -> Result<String> {
    match path {
        Some(path) if path != Path::new("-") => fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display())),
        _ => {
            let mut input = String::new();
            io::stdin()
                .read_to_string(&mut input)
                .context("failed to read stdin")?;
            Ok(input)
        }
    }
}

/// Lay out the canvas in `input` and render the requested output
fn run(args: &Args, input: &str) -> Result<String> {
    let mut options = load_options(args.config.as_deref())?;
    if let Some(direction) = args.direction {
        options.direction = direction;
    }
    debug!("Layout options: {options:?}");

    let mut canvas = CanvasDocument::from_json(input)?;
    let chart = canvas.to_chart()?;

    let positions = TreeLayout::new(options).layout(&chart);
    info!("Placed {} people", positions.len());

    let output = match args.format {
        OutputFormat::Positions => serde_json::to_string_pretty(&positions)?,
        OutputFormat::Canvas => {
            canvas.apply_positions(&positions);
            canvas.to_json()?
        }
    };
    Ok(output)
}

fn main() -> Result<()> {
    let args = Args::parse();

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .with(EnvFilter::from_default_env())
        .init();

    let input = read_input(args.input.as_deref())?;
    let output = run(&args, &input)?;

    match args.output {
        Some(path) => fs::write(&path, output)
            .with_context(|| format!("failed to write {}", path.display()))?,
        None => println!("{output}"),
    }
    Ok(())
}
