//! CLI entry point for promocheck.
//!
//! This module is intentionally thin: it handles argument parsing, I/O, and exit codes.
//! All business logic lives in the `promocheck-app` crate.

use anyhow::Context;
use camino::{Utf8Path, Utf8PathBuf};
use clap::{Parser, Subcommand, ValueEnum};
use promocheck_app::{
    CheckInput, GenerateInput, outcome_exit_code, run_check, run_generate,
    runtime_error_receipt, serialize_receipt,
};
use promocheck_settings::Overrides;
use tracing_subscriber::EnvFilter;

/// Environment variable holding the log filter (`tracing_subscriber::EnvFilter` syntax).
const LOG_ENV: &str = "PROMOCHECK_LOG";

#[derive(Parser, Debug)]
#[command(
    name = "promocheck",
    version,
    about = "Check whether a promotion code is in both the campaign and the membership lists"
)]
struct Cli {
    /// Path to promocheck config TOML. A missing file means defaults.
    #[arg(long, global = true, default_value = "promocheck.toml")]
    config: Utf8PathBuf,

    #[command(subcommand)]
    cmd: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Check one code; prints `true` or `false`.
    Check {
        /// The code to check (1-5 lowercase letters).
        #[arg(allow_hyphen_values = true)]
        code: String,

        /// Campaign code file (overrides config).
        campaign: Option<Utf8PathBuf>,

        /// Membership code file (overrides config).
        membership: Option<Utf8PathBuf>,

        /// Lines that are not valid codes: skip or reject.
        #[arg(long)]
        invalid_lines: Option<String>,

        /// Output format.
        #[arg(long, value_enum, default_value_t = Format::Text)]
        format: Format,
    },

    /// Generate random campaign and membership code files.
    Generate {
        /// Directory to write `campaign_codes.txt` and `membership_codes.txt` into.
        #[arg(long)]
        out_dir: Option<Utf8PathBuf>,

        /// Number of distinct campaign codes.
        #[arg(long)]
        campaign_count: Option<u64>,

        /// Probability that a campaign code is also a membership code.
        #[arg(long)]
        overlap_ratio: Option<f64>,

        /// Membership size as a fraction of the campaign size.
        #[arg(long)]
        membership_ratio: Option<f64>,

        /// Seed for reproducible output.
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Print a JSON Schema.
    Schema {
        #[arg(value_enum)]
        which: SchemaKind,
    },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum Format {
    Text,
    Json,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum SchemaKind {
    Receipt,
    Config,
}

fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    match cli.cmd {
        Commands::Check {
            ref code,
            ref campaign,
            ref membership,
            ref invalid_lines,
            format,
        } => cmd_check(
            &cli.config,
            code,
            Overrides {
                campaign: campaign.clone(),
                membership: membership.clone(),
                invalid_lines: invalid_lines.clone(),
                ..Overrides::default()
            },
            format,
        ),
        Commands::Generate {
            ref out_dir,
            campaign_count,
            overlap_ratio,
            membership_ratio,
            seed,
        } => cmd_generate(
            &cli.config,
            Overrides {
                out_dir: out_dir.clone(),
                campaign_count,
                overlap_ratio,
                membership_ratio,
                seed,
                ..Overrides::default()
            },
        ),
        Commands::Schema { which } => cmd_schema(which),
    }
}

fn init_logging() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

/// Read the config file; a missing file is allowed (defaults apply).
fn read_config(path: &Utf8Path) -> anyhow::Result<String> {
    match std::fs::read_to_string(path) {
        Ok(text) => Ok(text),
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            tracing::debug!(%path, "no config file; using defaults");
            Ok(String::new())
        }
        Err(err) => Err(err).with_context(|| format!("read config: {}", path)),
    }
}

fn cmd_check(
    config: &Utf8Path,
    code: &str,
    overrides: Overrides,
    format: Format,
) -> anyhow::Result<()> {
    let result = (|| -> anyhow::Result<promocheck_app::CheckOutput> {
        let cfg_text = read_config(config)?;
        run_check(CheckInput {
            code,
            config_text: &cfg_text,
            overrides,
        })
    })();

    match result {
        Ok(output) => {
            match format {
                Format::Json => print!("{}", serialize_receipt(&output.receipt)?),
                Format::Text => match &output.outcome {
                    Ok(eligible) => println!("{eligible}"),
                    Err(err) => eprintln!("error: {:#}", anyhow::Error::new(err.clone())),
                },
            }
            let code = outcome_exit_code(&output.outcome);
            if code != 0 {
                std::process::exit(code);
            }
            Ok(())
        }
        Err(err) => {
            if format == Format::Json {
                let receipt = runtime_error_receipt(code, &format!("{err:#}"));
                if let Ok(json) = serialize_receipt(&receipt) {
                    print!("{json}");
                }
            }
            eprintln!("promocheck error: {err:#}");
            std::process::exit(1);
        }
    }
}

fn cmd_generate(config: &Utf8Path, overrides: Overrides) -> anyhow::Result<()> {
    let cfg_text = read_config(config)?;
    let output = run_generate(GenerateInput {
        config_text: &cfg_text,
        overrides,
    })?;

    println!("campaign codes: {} ({})", output.campaign_codes, output.paths.campaign);
    println!(
        "membership codes: {} ({})",
        output.membership_codes, output.paths.membership
    );
    println!("overlap: {}", output.overlap);
    Ok(())
}

fn cmd_schema(which: SchemaKind) -> anyhow::Result<()> {
    let schema = match which {
        SchemaKind::Receipt => promocheck_types::receipt_json_schema(),
        SchemaKind::Config => promocheck_settings::config_json_schema(),
    };
    let text = serde_json::to_string_pretty(&schema).context("serialize schema")?;
    println!("{text}");
    Ok(())
}
