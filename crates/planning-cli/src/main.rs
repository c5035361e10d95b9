use clap::{Parser, Subcommand};
use colored::Colorize;
use std::io::Read;
use std::process;
use tracing_subscriber::EnvFilter;

use planning_core::verifier::Severity;

/// Planning — delivery schedule codec CLI
///
/// Decode, canonicalize, encode and validate planning schedules.
/// INPUT arguments are read from stdin when omitted or `-`.
#[derive(Parser)]
#[command(name = "planning", version, about, long_about = None)]
struct Cli {
    /// Suppress normal output (exit code only)
    #[arg(long, short, global = true)]
    quiet: bool,

    /// Increase log verbosity (-v debug, -vv trace). RUST_LOG overrides.
    #[arg(long, short, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render an encoded schedule as French text
    Decode {
        /// Encoded schedule, e.g. 1LuMdFr1LuMdSe
        input: Option<String>,
    },

    /// Collapse weeks 1-4 of the same slot into "every week"
    Compress {
        /// Encoded schedule
        input: Option<String>,
    },

    /// Compress, deduplicate and sort a schedule
    Canonicalize {
        /// Encoded schedule
        input: Option<String>,
        /// Reject schedules with malformed entries instead of dropping them
        #[arg(long)]
        strict: bool,
    },

    /// Build a canonical schedule from a JSON array of records
    Encode {
        /// JSON, e.g. [{"week":"0","day":"Je","time":"Mf","product":"Su"}]
        input: Option<String>,
    },

    /// Parse French schedule text back into a canonical schedule
    Parse {
        /// French text, e.g. "Tous les jeudis 8h30: Sec."
        input: Option<String>,
    },

    /// Report malformed, duplicate and overlapping entries
    Validate {
        /// Encoded schedule
        input: Option<String>,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Compute semantic hash (SHA-256) of a schedule
    Hash {
        /// Encoded schedule
        input: Option<String>,
    },

    /// Semantic diff between two schedules
    Diff {
        /// First encoded schedule
        before: String,
        /// Second encoded schedule
        after: String,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show version information
    Version,
}

// Exit codes: 0 success, 1 validation failure or differing schedules,
// 2 usage or I/O error.
const EXIT_OK: i32 = 0;
const EXIT_INVALID: i32 = 1;
const EXIT_ERROR: i32 = 2;

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose, cli.quiet);

    let exit_code = match run(cli.command, cli.quiet) {
        Ok(code) => code,
        Err(msg) => {
            eprintln!("{} {}", "error:".red().bold(), msg);
            EXIT_ERROR
        }
    };

    process::exit(exit_code);
}

fn init_logging(verbose: u8, quiet: bool) {
    let default = match (quiet, verbose) {
        (true, _) => "error",
        (false, 0) => "warn",
        (false, 1) => "debug",
        (false, _) => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    // Also bridges `log` records emitted by planning-core
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

fn run(command: Commands, quiet: bool) -> Result<i32, String> {
    let emit = |line: &str| {
        if !quiet {
            println!("{}", line);
        }
    };

    match command {
        Commands::Decode { input } => {
            let encoded = read_input(input)?;
            tracing::debug!(len = encoded.len(), "decode");
            emit(&planning_core::decode(&encoded));
            Ok(EXIT_OK)
        }
        Commands::Compress { input } => {
            let encoded = read_input(input)?;
            emit(&planning_core::compress(&encoded));
            Ok(EXIT_OK)
        }
        Commands::Canonicalize { input, strict } => {
            let encoded = read_input(input)?;
            if strict {
                match planning_core::canonicalize_strict(&encoded) {
                    Ok(canonical) => emit(&canonical),
                    Err(e) => {
                        eprintln!("{} {}", "error:".red().bold(), e);
                        return Ok(EXIT_INVALID);
                    }
                }
            } else {
                emit(&planning_core::canonicalize(&encoded));
            }
            Ok(EXIT_OK)
        }
        Commands::Encode { input } => {
            let json = read_input(input)?;
            emit(&planning_core::encode_json(&json));
            Ok(EXIT_OK)
        }
        Commands::Parse { input } => {
            let text = read_input(input)?;
            emit(&planning_core::parse_human_readable(&text));
            Ok(EXIT_OK)
        }
        Commands::Validate { input, json } => {
            let encoded = read_input(input)?;
            let result = planning_core::validate(&encoded);
            tracing::debug!(diagnostics = result.diagnostics.len(), "validate");

            if json {
                let output = serde_json::json!({
                    "valid": result.is_valid(),
                    "errors": result.errors().len(),
                    "warnings": result.warnings().len(),
                    "diagnostics": result.diagnostics,
                });
                emit(&to_json(&output)?);
            } else if !quiet {
                for d in &result.diagnostics {
                    let line = d.to_string();
                    match d.severity {
                        Severity::Error => eprintln!("{}", line.red()),
                        Severity::Warning => eprintln!("{}", line.yellow()),
                    }
                }
                if result.is_valid() {
                    println!("{} schedule is valid", "✓".green());
                }
            }

            Ok(if result.is_valid() { EXIT_OK } else { EXIT_INVALID })
        }
        Commands::Hash { input } => {
            let encoded = read_input(input)?;
            emit(&planning_core::semantic_hash(&encoded));
            Ok(EXIT_OK)
        }
        Commands::Diff {
            before,
            after,
            json,
        } => {
            let d = planning_core::diff(&before, &after);
            let codes = |entries: &[planning_core::ScheduleEntry]| -> Vec<String> {
                entries.iter().map(|e| e.to_string()).collect()
            };

            if json {
                let output = serde_json::json!({
                    "identical": d.is_empty(),
                    "removed": codes(&d.removed),
                    "added": codes(&d.added),
                });
                emit(&to_json(&output)?);
            } else if d.is_empty() {
                emit("schedules are identical");
            } else {
                for code in codes(&d.removed) {
                    emit(&format!("- {}", code).red().to_string());
                }
                for code in codes(&d.added) {
                    emit(&format!("+ {}", code).green().to_string());
                }
            }

            Ok(if d.is_empty() { EXIT_OK } else { EXIT_INVALID })
        }
        Commands::Version => {
            println!(
                "planning {} (planning-core {})",
                env!("CARGO_PKG_VERSION"),
                planning_core::VERSION
            );
            Ok(EXIT_OK)
        }
    }
}

/// Take the INPUT argument, or read stdin when it is absent or `-`
fn read_input(arg: Option<String>) -> Result<String, String> {
    let raw = match arg.as_deref() {
        Some(value) if value != "-" => value.to_string(),
        _ => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .map_err(|e| format!("cannot read stdin: {}", e))?;
            buf
        }
    };
    Ok(raw.trim().to_string())
}

fn to_json(value: &serde_json::Value) -> Result<String, String> {
    serde_json::to_string_pretty(value).map_err(|e| format!("serialization error: {}", e))
}
