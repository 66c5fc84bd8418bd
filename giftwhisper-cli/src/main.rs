mod config;
mod output;

use clap::Parser;
use giftwhisper_core::{generate_pairs, DrawError, DrawOptions, Pairing, Strategy};
use std::collections::HashSet;
use std::io::{self, BufRead, IsTerminal};
use std::path::PathBuf;

/// Extra draw attempts after an unsatisfiable realization, unless
/// overridden by config or --retries.
const DEFAULT_RETRIES: usize = 3;

pub fn bail(msg: impl std::fmt::Display) -> ! {
    eprintln!("Error: {msg}");
    std::process::exit(1);
}

#[derive(Parser)]
#[command(name = "giftwhisper", version, about = "Draw Secret Santa pairs for a group")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(clap::Subcommand)]
enum Commands {
    /// Run a draw over a list of participants
    Draw(DrawArgs),
    /// Create a default config file at ~/.config/giftwhisper/config.toml
    Init,
}

#[derive(Parser)]
struct DrawArgs {
    /// File with one participant per line
    #[arg(long)]
    participants: Option<PathBuf>,

    /// Inline participant (repeatable)
    #[arg(long = "participant")]
    inline_participants: Vec<String>,

    /// Draw strategy: "chained" or "uniform"
    #[arg(long)]
    strategy: Option<String>,

    /// Seed the random number generator for a reproducible draw
    #[arg(long)]
    seed: Option<u64>,

    /// Walk the participant list in order instead of drawing at random
    #[arg(long)]
    deterministic: bool,

    /// Extra attempts when a random draw hits a dead end. 0 disables.
    #[arg(long)]
    retries: Option<usize>,

    /// Output JSON instead of a table
    #[arg(long)]
    json: bool,

    /// Show progress during execution
    #[arg(short, long)]
    verbose: bool,

    /// Path to config file (default: ~/.config/giftwhisper/config.toml)
    #[arg(long)]
    config: Option<PathBuf>,
}

/// Parse a string as either a JSON array of strings or plain text (one
/// participant per line).
fn parse_participants_from_str(content: &str) -> Vec<String> {
    let trimmed = content.trim();
    if trimmed.starts_with('[') {
        // Try JSON array
        let names: Vec<String> = serde_json::from_str(trimmed)
            .unwrap_or_else(|e| bail(format!("File looks like JSON but failed to parse: {e}")));
        names.into_iter().filter(|s| !s.trim().is_empty()).collect()
    } else {
        // Plain text, one participant per line
        trimmed
            .lines()
            .map(|l| l.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect()
    }
}

/// Load participants from all sources: --participants file, --participant
/// inline args, or stdin.
fn load_participants(args: &DrawArgs) -> Vec<String> {
    let mut names = Vec::new();

    // From file (auto-detects JSON array vs one-per-line)
    if let Some(ref path) = args.participants {
        let content = std::fs::read_to_string(path)
            .unwrap_or_else(|e| bail(format!("Failed to read participants file {}: {e}", path.display())));
        names = parse_participants_from_str(&content);
    }

    // From inline --participant flags
    names.extend(args.inline_participants.iter().cloned());

    // From stdin (only if no file and no inline participants)
    if names.is_empty() {
        let stdin = io::stdin();
        if stdin.is_terminal() {
            bail("No participants provided. Use --participants <file>, --participant <name>, or pipe names via stdin.");
        }
        let content: String = stdin
            .lock()
            .lines()
            .map(|l| l.expect("Failed to read from stdin"))
            .collect::<Vec<_>>()
            .join("\n");
        names = parse_participants_from_str(&content);
    }

    if names.len() < 3 {
        bail(format!("Need at least 3 participants for a draw, got {}", names.len()));
    }

    // IDs are assigned by position, so names must be unique for the
    // output to mean anything.
    let mut seen = HashSet::new();
    for name in &names {
        if !seen.insert(name.as_str()) {
            bail(format!("Duplicate participant \"{name}\". Names must be unique."));
        }
    }

    names
}

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Commands::Draw(args) => run_draw(args),
        Commands::Init => {
            let path = config::create_default_config();
            println!("Created config at {}", path.display());
            println!("Edit it to set your default strategy and retry count.");
        }
    }
}

fn run_draw(args: DrawArgs) {
    // Load config file, merge with CLI args (CLI wins)
    let config_path = args.config.clone().unwrap_or_else(config::config_path);
    let cfg = config::load_config(&config_path);

    let strategy = match args.strategy.as_deref().or(cfg.strategy.as_deref()) {
        Some("chained") | None => Strategy::Chained,
        Some("uniform") => Strategy::Uniform,
        Some(other) => bail(format!("Unknown strategy \"{other}\". Use \"chained\" or \"uniform\".")),
    };

    let names = load_participants(&args);

    if args.deterministic && matches!(strategy, Strategy::Uniform) {
        eprintln!("Warning: --deterministic has no effect with the uniform strategy. It only applies to --strategy chained.");
    }

    // A fixed seed or the deterministic walk fails identically on every
    // attempt, so retries only apply to fresh randomness.
    let retries = if args.seed.is_some() || args.deterministic {
        0
    } else {
        args.retries.or(cfg.retries).unwrap_or(DEFAULT_RETRIES)
    };

    let participant_ids: Vec<i64> = (0..names.len() as i64).collect();
    let options = DrawOptions {
        strategy,
        deterministic: args.deterministic,
        seed: args.seed,
    };

    if args.verbose {
        eprintln!(
            "Drawing pairs for {} participants ({} strategy)",
            names.len(),
            output::strategy_label(strategy),
        );
        if let Some(seed) = args.seed {
            eprintln!("Seed: {seed}");
        }
    }

    let mut attempt = 0;
    let pairings: Vec<Pairing> = loop {
        match generate_pairs(&participant_ids, &options) {
            Ok(pairings) => break pairings,
            Err(e @ DrawError::InsufficientParticipants { .. }) => bail(e),
            Err(DrawError::PairingImpossible) if attempt < retries => {
                attempt += 1;
                if args.verbose {
                    eprintln!("Draw attempt {attempt} hit a dead end, retrying");
                }
            }
            Err(DrawError::PairingImpossible) => {
                bail("Could not organize the draw, please try again.");
            }
        }
    };

    if args.json {
        output::print_json(&pairings, &names, strategy);
    } else {
        output::print_table(&pairings, &names);
    }
}
