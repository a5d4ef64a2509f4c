use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result};
use biomech_core::analyze_session;
use biomech_core::benchmarks::{registry, SportAction};
use biomech_core::config::AnalysisConfig;
use biomech_core::flaws::detect_flaws;
use biomech_core::metrics::MetricsMap;
use biomech_core::pose::PoseSession;
use biomech_core::scoring::score_action;
use clap::{Parser, Subcommand};
use serde::Serialize;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Exit code when the sport/action pair has no tables
const EXIT_UNSUPPORTED: u8 = 3;

#[derive(Parser, Debug)]
#[command(
    name = "biomech_cli",
    about = "Score pose sessions and metric maps against sport benchmarks"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run the full pipeline on a pose session JSON file
    Analyze {
        #[arg(long)]
        session: PathBuf,
        #[arg(long)]
        sport: String,
        #[arg(long)]
        action: String,
        /// Tuning constants (JSON); defaults when omitted or unreadable
        #[arg(long)]
        config: Option<PathBuf>,
        #[arg(long)]
        output: Option<PathBuf>,
    },
    /// Score a metrics JSON map
    Score {
        #[arg(long)]
        metrics: PathBuf,
        #[arg(long)]
        sport: String,
        #[arg(long)]
        action: String,
    },
    /// Run flaw detection on a metrics JSON map
    Flaws {
        #[arg(long)]
        metrics: PathBuf,
        #[arg(long)]
        sport: String,
        #[arg(long)]
        action: String,
    },
    /// List supported sport/action pairs and their metrics
    List,
}

fn main() -> ExitCode {
    init_tracing();
    match run() {
        Ok(code) => code,
        Err(err) => {
            eprintln!("Error: {err:?}");
            ExitCode::from(1)
        }
    }
}

fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn run() -> Result<ExitCode> {
    let cli = Cli::parse();
    match cli.command {
        Commands::Analyze {
            session,
            sport,
            action,
            config,
            output,
        } => run_analyze(&session, &sport, &action, config, output),
        Commands::Score {
            metrics,
            sport,
            action,
        } => run_score(&metrics, &sport, &action),
        Commands::Flaws {
            metrics,
            sport,
            action,
        } => run_flaws(&metrics, &sport, &action),
        Commands::List => run_list(),
    }
}

fn run_analyze(
    session_path: &Path,
    sport: &str,
    action: &str,
    config_path: Option<PathBuf>,
    output_path: Option<PathBuf>,
) -> Result<ExitCode> {
    let config = config_path
        .map(AnalysisConfig::load_from_file)
        .unwrap_or_default();
    let session = PoseSession::load_from_file(session_path)
        .with_context(|| format!("loading session {}", session_path.display()))?;

    let analysis = analyze_session(&session, sport, action, &config)
        .with_context(|| format!("analyzing session {}", session_path.display()))?;

    emit_json(&analysis, output_path)?;
    Ok(exit_for(analysis.supported))
}

fn load_metrics(path: &Path) -> Result<MetricsMap> {
    let contents =
        fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    serde_json::from_str(&contents).with_context(|| format!("parsing metrics {}", path.display()))
}

fn run_score(metrics_path: &Path, sport: &str, action: &str) -> Result<ExitCode> {
    let metrics = load_metrics(metrics_path)?;
    let config = AnalysisConfig::default();
    let result = score_action(&metrics, sport, action, &config.scoring);
    emit_json(&result, None)?;
    Ok(exit_for(result.supported))
}

fn run_flaws(metrics_path: &Path, sport: &str, action: &str) -> Result<ExitCode> {
    let metrics = load_metrics(metrics_path)?;
    let result = detect_flaws(&metrics, sport, action);
    emit_json(&result, None)?;
    Ok(exit_for(result.supported))
}

#[derive(Serialize)]
struct TableListing {
    sport: &'static str,
    action: &'static str,
    min_required_metrics: usize,
    metrics: Vec<String>,
}

fn run_list() -> Result<ExitCode> {
    let listings: Vec<TableListing> = SportAction::all()
        .into_iter()
        .filter_map(|key| {
            let table = registry().get(key)?;
            Some(TableListing {
                sport: key.sport.as_str(),
                action: key.action.as_str(),
                min_required_metrics: table.min_required_metrics,
                metrics: table.metrics.keys().cloned().collect(),
            })
        })
        .collect();
    emit_json(&listings, None)?;
    Ok(ExitCode::SUCCESS)
}

fn exit_for(supported: bool) -> ExitCode {
    if supported {
        ExitCode::SUCCESS
    } else {
        ExitCode::from(EXIT_UNSUPPORTED)
    }
}

fn emit_json<T: Serialize>(value: &T, output_path: Option<PathBuf>) -> Result<()> {
    let json = serde_json::to_string_pretty(value)?;

    if let Some(path) = output_path {
        fs::write(&path, json).with_context(|| format!("writing {}", path.display()))?;
    } else {
        println!("{json}");
    }

    Ok(())
}
