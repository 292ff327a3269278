//! tsassist-probe - run the editor adapters against a recorded engine session.
//!
//! ```text
//! recording.json -> ReplayEngine -> AnalysisSession -> TypeScriptAssist -> JSON on stdout
//! ```
//!
//! Logs go to stderr so stdout stays machine-readable. `RUST_LOG` wins over
//! the config's `[logging] filter`.

mod replay;

use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::{fs, io};

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use serde_json::{Value, json};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use tsassist_adapters::TypeScriptAssist;
use tsassist_config::AssistConfig;
use tsassist_types::{CompletionResult, FileId, Position, SelectionRange, Tooltip};

use crate::replay::{Recording, ReplayEngine};

#[derive(Parser)]
#[command(name = "tsassist-probe")]
#[command(about = "Replay recorded engine answers through the TypeScript assist adapters", long_about = None)]
#[command(version)]
struct Cli {
    /// Recorded engine answers (JSON)
    #[arg(long, short)]
    recording: PathBuf,

    /// Config file (default: $TSASSIST_CONFIG, then ~/.tsassist/config.toml)
    #[arg(long, short)]
    config: Option<PathBuf>,

    /// Forward this file's text as a document change before running the command
    #[arg(long)]
    edit: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Completion options at an offset
    Complete {
        #[arg(long)]
        offset: u32,
        /// Also render the detail panel for this entry
        #[arg(long)]
        info: Option<String>,
    },

    /// Quick-info tooltip at an offset or a line/character position
    Hover {
        #[arg(long, conflicts_with = "line")]
        offset: Option<u32>,
        #[arg(long)]
        line: Option<u32>,
        #[arg(long, default_value_t = 0)]
        character: u32,
    },

    /// Semantic diagnostics for the document
    Lint,

    /// Signature tooltips for one or more cursors
    Signature {
        #[arg(long = "cursor", required = true)]
        cursors: Vec<u32>,
    },

    /// Base theme as CSS
    Theme,
}

fn init_tracing(config_filter: Option<&str>) {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config_filter.unwrap_or("warn")))
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(io::stderr))
        .with(env_filter)
        .init();
}

fn load_config(path: Option<&Path>) -> Result<AssistConfig> {
    match path {
        Some(path) => Ok(AssistConfig::load_from(path)?),
        None => Ok(AssistConfig::load()?.unwrap_or_default()),
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = load_config(cli.config.as_deref())?;
    init_tracing(config.log_filter());

    let recording = Recording::load(&cli.recording)?;
    let text = recording.document.clone();
    let engine = Arc::new(ReplayEngine::new(
        FileId::new(config.document_file()),
        recording,
    ));
    let assist = TypeScriptAssist::with_engine(engine, &text, &config);

    if let Some(edit) = &cli.edit {
        let edited = fs::read_to_string(edit)
            .with_context(|| format!("failed to read edit {}", edit.display()))?;
        assist.document_changed(&edited);
    }

    match cli.command {
        Command::Theme => print!("{}", assist.theme().to_css()),
        command => {
            let output = run(&assist, command).await?;
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
    }
    Ok(())
}

async fn run(assist: &TypeScriptAssist, command: Command) -> Result<Value> {
    let output = match command {
        Command::Complete { offset, info } => {
            let result = assist.completion().complete(offset).await;
            let panel = info.and_then(|name| assist.completion().info(offset, &name));
            json!({
                "result": result.as_ref().map(ranked),
                "info": panel.map(|node| node.to_html()),
            })
        }
        Command::Hover {
            offset,
            line,
            character,
        } => {
            let tooltip = match (offset, line) {
                (Some(offset), _) => assist.hover().hover(offset),
                (None, Some(line)) => assist.hover().hover_at(Position::new(line, character)),
                (None, None) => bail!("hover needs --offset or --line"),
            };
            tooltip.as_ref().map_or(Value::Null, tooltip_json)
        }
        Command::Lint => serde_json::to_value(assist.linter().lint())?,
        Command::Signature { cursors } => {
            let selection: Vec<SelectionRange> =
                cursors.into_iter().map(SelectionRange::cursor).collect();
            let field = assist.signature_tooltips(&selection);
            json!({
                "state": format!("{:?}", field.state()),
                "tooltips": field.tooltips().iter().map(tooltip_json).collect::<Vec<_>>(),
            })
        }
        Command::Theme => Value::String(assist.theme().to_css()),
    };
    Ok(output)
}

/// The result with its options in rank order.
fn ranked(result: &CompletionResult) -> CompletionResult {
    CompletionResult {
        options: result.ranked().into_iter().cloned().collect(),
        ..result.clone()
    }
}

fn tooltip_json(tooltip: &Tooltip) -> Value {
    json!({
        "pos": tooltip.pos,
        "end": tooltip.end,
        "above": tooltip.above,
        "overlap": tooltip.overlap,
        "html": tooltip.content.to_html(),
    })
}
