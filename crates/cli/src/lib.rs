pub mod commands;

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use clap::{Parser, Subcommand};
use stagepass_core::{ConfigOverrides, LifecycleConfig, LoadOptions, LogFormat, Theme};
use tracing::info;

#[derive(Debug, Parser)]
#[command(
    name = "stagepass",
    about = "Stagepass customer lifecycle CLI",
    long_about = "Inspect customer bundles: segment, tier progress, activity timeline, and \
                  abandoned-cart recovery state.",
    after_help = "Examples:\n  stagepass profile bundle.json\n  stagepass timeline bundle.json --json\n  stagepass export bundle.json --out timeline.csv"
)]
pub struct Cli {
    #[arg(long, global = true, help = "Path to a stagepass.toml config file")]
    config: Option<PathBuf>,
    #[arg(long, global = true, help = "Wording theme (journey|crm)")]
    theme: Option<String>,
    #[arg(
        long,
        global = true,
        help = "Fix the clock to an RFC 3339 timestamp for reproducible output"
    )]
    now: Option<String>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    #[command(about = "Show segment, lifetime totals, and the tier ladder for a bundle")]
    Profile {
        bundle: PathBuf,
        #[arg(long, help = "Emit machine-readable JSON output")]
        json: bool,
    },
    #[command(about = "Show the merged lifecycle timeline for a bundle")]
    Timeline {
        bundle: PathBuf,
        #[arg(long, help = "Emit machine-readable JSON output")]
        json: bool,
    },
    #[command(about = "Show abandoned carts with urgency buckets and recovery roadmaps")]
    Carts {
        bundle: PathBuf,
        #[arg(long, help = "Emit machine-readable JSON output")]
        json: bool,
    },
    #[command(about = "Export the merged timeline as CSV")]
    Export {
        bundle: PathBuf,
        #[arg(long, help = "Destination CSV file")]
        out: PathBuf,
    },
    #[command(about = "List built-in wording themes")]
    Themes,
}

pub fn run() -> ExitCode {
    let cli = Cli::parse();
    match execute(cli) {
        Ok(output) => {
            println!("{output}");
            ExitCode::SUCCESS
        }
        Err(error) => {
            eprintln!("error: {error:#}");
            ExitCode::FAILURE
        }
    }
}

fn execute(cli: Cli) -> Result<String> {
    let config = LifecycleConfig::load(LoadOptions {
        config_path: cli.config.clone(),
        require_file: cli.config.is_some(),
        overrides: ConfigOverrides { theme: cli.theme.clone(), ..ConfigOverrides::default() },
    })?;
    init_logging(&config);

    let theme = Theme::by_key(&config.theme)
        .with_context(|| format!("unknown theme `{}` (expected journey|crm)", config.theme))?;
    let now = resolve_now(cli.now.as_deref())?;

    match cli.command {
        Command::Profile { bundle, json } => {
            let bundle = commands::load_bundle(&bundle)?;
            commands::profile::run(&bundle, &config, &theme, now, json)
        }
        Command::Timeline { bundle, json } => {
            let bundle = commands::load_bundle(&bundle)?;
            commands::timeline::run(&bundle, &theme, json)
        }
        Command::Carts { bundle, json } => {
            let bundle = commands::load_bundle(&bundle)?;
            commands::carts::run(&bundle, &config, &theme, now, json)
        }
        Command::Export { bundle, out } => {
            let bundle = commands::load_bundle(&bundle)?;
            commands::export::run(&bundle, &theme, &out)
        }
        Command::Themes => Ok(commands::themes::run()),
    }
}

fn resolve_now(raw: Option<&str>) -> Result<DateTime<Utc>> {
    match raw {
        Some(raw) => {
            let parsed = DateTime::parse_from_rfc3339(raw)
                .with_context(|| format!("`--now {raw}` is not a valid RFC 3339 timestamp"))?;
            Ok(parsed.with_timezone(&Utc))
        }
        None => Ok(Utc::now()),
    }
}

fn init_logging(config: &LifecycleConfig) {
    let level = config.logging.level.parse().unwrap_or(tracing::Level::INFO);
    let builder = tracing_subscriber::fmt()
        .with_target(false)
        .with_max_level(level)
        .with_writer(std::io::stderr);
    // A second init in the same process (tests) is harmless.
    let result = match config.logging.format {
        LogFormat::Compact => builder.compact().try_init(),
        LogFormat::Pretty => builder.pretty().try_init(),
        LogFormat::Json => builder.json().try_init(),
    };
    if result.is_ok() {
        info!(theme = %config.theme, "logging initialized");
    }
}
