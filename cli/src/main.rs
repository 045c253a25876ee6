use std::path::{Component, Path, PathBuf};
use std::sync::Once;

use anyhow::Context;
use chrono::Utc;
use clap::{Args, Parser, Subcommand};
use vecbench_core::{MonotonicClock, SweepConfig, run_sweep};

mod report;
mod settings;

use report::{OutputFormat, RunRecord};
use settings::Settings;

static TRACE_INIT: Once = Once::new();
const DEFAULT_TRACE_FILTER: &str = "vecbench::sweep=info,vecbench::probe=debug,vecbench=info";

#[derive(Debug, Parser)]
#[command(
    name = "vecbench",
    author,
    version,
    about = "Compare loop and vectorized element-wise operations across array sizes",
    long_about = None
)]
struct CliArgs {
    /// Defaults to `run` when omitted
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Debug, Clone, Default, Args)]
struct SweepArgs {
    /// Element-wise operation: Addition, Multiplication or Power
    #[arg(short, long, value_name = "NAME")]
    operation: Option<String>,
    /// Smallest array size (>= 1000)
    #[arg(long, value_name = "N")]
    min_size: Option<usize>,
    /// Largest array size (>= 10000)
    #[arg(long, value_name = "N")]
    max_size: Option<usize>,
    /// Number of log-spaced sizes (2..=10)
    #[arg(short, long, value_name = "N")]
    count: Option<usize>,
    /// TOML settings file; command-line flags take precedence
    #[arg(long, value_name = "FILE", value_parser = parse_sanitized_path)]
    config: Option<PathBuf>,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Run the sweep and report loop vs vectorized timings.
    Run {
        #[command(flatten)]
        sweep: SweepArgs,
        /// Write latest.json, latest.csv and index.html into this directory
        #[arg(long, value_name = "DIR", value_parser = parse_sanitized_path)]
        output_dir: Option<PathBuf>,
        /// Stdout format
        #[arg(long, value_enum)]
        format: Option<OutputFormat>,
        /// Attach notes to the run record
        #[arg(long)]
        notes: Option<String>,
    },
    /// Print the array sizes a sweep would measure, without measuring.
    Sizes {
        #[command(flatten)]
        sweep: SweepArgs,
    },
}

impl Default for Commands {
    fn default() -> Self {
        Commands::Run {
            sweep: SweepArgs::default(),
            output_dir: None,
            format: None,
            notes: None,
        }
    }
}

fn sanitize_path(raw: &str) -> anyhow::Result<PathBuf> {
    let p = Path::new(raw);

    for comp in p.components() {
        if matches!(comp, Component::ParentDir) {
            return Err(anyhow::anyhow!(
                "Parent directory components ('..') are not allowed in file paths."
            ));
        }
    }

    Ok(p.to_path_buf())
}

fn parse_sanitized_path(raw: &str) -> Result<PathBuf, String> {
    sanitize_path(raw).map_err(|e| e.to_string())
}

fn env_toggle_enabled(raw: &str) -> bool {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return false;
    }
    !(trimmed.eq_ignore_ascii_case("0") || trimmed.eq_ignore_ascii_case("false") || trimmed.eq_ignore_ascii_case("off"))
}

fn filter_expr_from(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty()
        || trimmed.eq_ignore_ascii_case("1")
        || trimmed.eq_ignore_ascii_case("true")
        || trimmed.eq_ignore_ascii_case("on")
    {
        None
    } else {
        Some(trimmed.to_string())
    }
}

fn maybe_init_tracing() {
    let raw = match std::env::var("VECBENCH_TRACE") {
        Ok(value) => value,
        Err(_) => return,
    };

    if !env_toggle_enabled(&raw) {
        return;
    }

    TRACE_INIT.call_once(|| {
        use tracing_subscriber::EnvFilter;
        use tracing_subscriber::fmt;

        let filter_expr = filter_expr_from(&raw).or_else(|| std::env::var("RUST_LOG").ok());

        let builder = fmt().with_writer(std::io::stderr);

        let builder = match filter_expr.and_then(|expr| EnvFilter::try_new(expr).ok()) {
            Some(filter) => builder.with_env_filter(filter),
            None => builder.with_env_filter(DEFAULT_TRACE_FILTER),
        };

        let _ = builder.try_init();
    });
}

impl SweepArgs {
    fn as_settings(&self) -> Settings {
        Settings {
            operation: self.operation.clone(),
            min_size: self.min_size,
            max_size: self.max_size,
            count: self.count,
            ..Default::default()
        }
    }
}

/// Layer command-line values over the settings file, if one was given.
fn resolve_settings(sweep: &SweepArgs, flags: Settings) -> anyhow::Result<Settings> {
    let base = match &sweep.config {
        Some(path) => Settings::load(path)?,
        None => Settings::default(),
    };
    let mut settings = base.overlay(sweep.as_settings()).overlay(flags);
    if let Some(dir) = settings.output_dir.take() {
        settings.output_dir = Some(sanitize_path(&dir.to_string_lossy()).context("invalid output_dir")?);
    }
    Ok(settings)
}

fn print_sizes(config: &SweepConfig) {
    for size in config.sizes() {
        println!("{}", size);
    }
}

fn run(settings: Settings) -> anyhow::Result<()> {
    let op = settings.operation().context("invalid operation")?;
    let config = settings.sweep_config().context("invalid sweep configuration")?;
    tracing::info!(%op, sizes = ?config.sizes(), "running sweep");

    let sweep_report = run_sweep(&config, op, &MonotonicClock);
    let record = RunRecord::new(sweep_report, Utc::now(), settings.notes.clone());

    match settings.format() {
        OutputFormat::Table => {
            println!("Performance comparison: {} (loop vs vectorized)", op);
            println!();
            print!("{}", report::render_table(&record.report));
            println!();
            print!("{}", report::render_insights(&record.summary));
        }
        OutputFormat::Json => println!("{}", report::render_json(&record)?),
        OutputFormat::Csv => print!("{}", report::render_csv(&record.report.points)),
    }

    if let Some(dir) = &settings.output_dir {
        let files = report::write_dashboard(dir, &record)?;
        eprintln!(
            "Dashboard written -> {}, {}, {}",
            files.json.display(),
            files.csv.display(),
            files.html.display()
        );
    }
    Ok(())
}

fn main() -> anyhow::Result<()> {
    maybe_init_tracing();

    let CliArgs { command } = CliArgs::parse();

    match command.unwrap_or_default() {
        Commands::Run {
            sweep,
            output_dir,
            format,
            notes,
        } => {
            let flags = Settings {
                output_dir,
                format,
                notes,
                ..Default::default()
            };
            let settings = resolve_settings(&sweep, flags)?;
            run(settings)
        }
        Commands::Sizes { sweep } => {
            let settings = resolve_settings(&sweep, Settings::default())?;
            settings.operation().context("invalid operation")?;
            let config = settings.sweep_config().context("invalid sweep configuration")?;
            print_sizes(&config);
            Ok(())
        }
    }
}
