// Riffsmith — CLI entry point.
//
// Generates one part and prints it as JSON (`{"notes": [...], "startBeat",
// "lengthBeats"}`) on stdout. Logs go to stderr, filtered by RUST_LOG
// (default "info").
//
// The request comes from, in order of precedence: individual flags, which
// override a base request loaded from `--request <file.json>` or
// interpreted from `--prompt "<instruction>"`, or the built-in defaults.
//
// Usage:
//   cargo run -p riffsmith_engine -- --role drums --bars-start 1 --bars-end 4 --density 5
//   cargo run -p riffsmith_engine -- --prompt "dark pad bars 1-8" --seed 42 --pretty

use anyhow::{Context, Result, bail};
use clap::Parser;
use rand::SeedableRng;
use rand::rngs::StdRng;
use riffsmith_engine::note::pitch_name;
use riffsmith_engine::prompt::interpret_instruction;
use riffsmith_engine::{EngineConfig, GenerationRequest, Role, generate};
use std::path::{Path, PathBuf};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "generate")]
#[command(about = "Generate a note sequence for one instrumental role")]
#[command(version)]
struct Cli {
    /// Role: melody, bass, drums, chords, pad, fx (anything else plays fx)
    #[arg(long)]
    role: Option<String>,

    /// Tempo in BPM
    #[arg(long)]
    tempo: Option<f64>,

    /// First bar (1-based, inclusive)
    #[arg(long)]
    bars_start: Option<i32>,

    /// Last bar (inclusive)
    #[arg(long)]
    bars_end: Option<i32>,

    /// Style tag, e.g. "dark", "lofi"
    #[arg(long)]
    style: Option<String>,

    /// Density 1-5
    #[arg(long)]
    density: Option<i32>,

    /// Load the base request from a JSON file
    #[arg(long, conflicts_with = "prompt")]
    request: Option<PathBuf>,

    /// Derive the base request from a free-text instruction
    #[arg(long)]
    prompt: Option<String>,

    /// Engine configuration JSON (humanize amounts)
    #[arg(long)]
    config: Option<PathBuf>,

    /// RNG seed for reproducible output
    #[arg(long)]
    seed: Option<u64>,

    /// Pretty-print the JSON output
    #[arg(long)]
    pretty: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let request = build_request(&cli)?;
    let config = match &cli.config {
        Some(path) => read_json::<EngineConfig>(path)?,
        None => EngineConfig::default(),
    };

    let mut rng = match cli.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };

    let bars = format!("{}-{}", request.bars_start, request.bars_end);
    info!(
        role = %request.role,
        bars = %bars,
        style = %request.style,
        density = request.density,
        seed = ?cli.seed,
        "generating"
    );

    let sequence = generate(&request, &config, &mut rng)?;

    if let (Some(low), Some(high)) = (
        sequence.notes.iter().map(|n| n.pitch).min(),
        sequence.notes.iter().map(|n| n.pitch).max(),
    ) {
        let range = format!("{}..{}", pitch_name(low), pitch_name(high));
        info!(notes = sequence.notes.len(), range = %range, "done");
    }

    let json = if cli.pretty {
        serde_json::to_string_pretty(&sequence)?
    } else {
        serde_json::to_string(&sequence)?
    };
    println!("{json}");
    Ok(())
}

fn build_request(cli: &Cli) -> Result<GenerationRequest> {
    let mut request = if let Some(path) = &cli.request {
        read_json::<GenerationRequest>(path)?
    } else if let Some(text) = &cli.prompt {
        match interpret_instruction(text) {
            Some(request) => request,
            None => bail!("could not find a role in instruction {text:?}"),
        }
    } else {
        GenerationRequest::default()
    };

    if let Some(role) = &cli.role {
        request.role = Role::from_name(role);
    }
    if let Some(tempo) = cli.tempo {
        request.tempo = tempo;
    }
    if let Some(bars_start) = cli.bars_start {
        request.bars_start = bars_start;
    }
    if let Some(bars_end) = cli.bars_end {
        request.bars_end = bars_end;
    }
    if let Some(style) = &cli.style {
        request.style = style.clone();
    }
    if let Some(density) = cli.density {
        request.density = density;
    }
    Ok(request)
}

fn read_json<T: serde::de::DeserializeOwned>(path: &Path) -> Result<T> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("reading {}", path.display()))?;
    serde_json::from_str(&text).with_context(|| format!("parsing {}", path.display()))
}
