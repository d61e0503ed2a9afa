//! `storyline` command-line entry point.

use std::io::Read;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use storyline::observability::init_tracing;
use storyline::Services;
use storyline_core::config::{CliOverrides, DateStyle, StorylineConfig};
use storyline_core::models::DateOrder;
use storyline_timeline::{render_text, render_timeline_js, TextOptions};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    /// Plain-text storyline listing.
    Text,
    /// The assembled timeline as JSON.
    Json,
    /// A TimelineJS document.
    #[value(name = "timelinejs")]
    TimelineJs,
}

#[derive(Parser)]
#[command(name = "storyline")]
#[command(author, version, about = "Reconstruct topic storylines from narrative text", long_about = None)]
struct Cli {
    /// Narrative text file. Reads stdin when omitted.
    file: Option<PathBuf>,

    /// Config file (defaults to ./storyline.toml when present)
    #[arg(short, long, env = "STORYLINE_CONFIG")]
    config: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Order for ambiguous numeric dates (mdy, dmy, ymd)
    #[arg(long)]
    date_order: Option<DateOrder>,

    /// Cluster selection epsilon; larger values merge topics
    #[arg(long)]
    epsilon: Option<f64>,

    /// Embedding provider (tfidf, onnx)
    #[arg(long)]
    provider: Option<String>,

    /// ONNX model path for the onnx provider
    #[arg(long)]
    model_path: Option<String>,

    /// tokenizer.json matching the ONNX model
    #[arg(long)]
    tokenizer_path: Option<String>,

    /// Display date style (long, iso)
    #[arg(long)]
    date_style: Option<DateStyle>,

    /// List entities under each event in text output
    #[arg(long)]
    entities: bool,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

impl Cli {
    fn overrides(&self) -> CliOverrides {
        CliOverrides {
            date_order: self.date_order,
            selection_epsilon: self.epsilon,
            embedding_provider: self.provider.clone(),
            model_path: self.model_path.clone(),
            tokenizer_path: self.tokenizer_path.clone(),
            date_style: self.date_style,
            log_level: self.verbose.then(|| "debug".to_string()),
        }
    }
}

fn read_input(file: Option<&PathBuf>) -> Result<String> {
    match file {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display())),
        None => {
            let mut text = String::new();
            std::io::stdin()
                .read_to_string(&mut text)
                .context("failed to read stdin")?;
            Ok(text)
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = StorylineConfig::load(cli.config.as_deref(), Some(&cli.overrides()))
        .context("failed to load configuration")?;
    init_tracing(&config.observability);

    let text = read_input(cli.file.as_ref())?;
    let services = Services::from_config(&config).context("failed to initialize services")?;
    let timeline = services
        .pipeline()
        .run(&text)
        .context("storyline reconstruction failed")?;

    if timeline.is_empty() {
        println!("No events found");
        return Ok(());
    }

    let output = match cli.format {
        OutputFormat::Text => render_text(
            &timeline,
            TextOptions {
                show_entities: cli.entities,
            },
        ),
        OutputFormat::Json => serde_json::to_string_pretty(&timeline)?,
        OutputFormat::TimelineJs => render_timeline_js(&timeline)?,
    };
    println!("{output}");
    Ok(())
}
