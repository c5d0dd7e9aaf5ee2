//! oled-sysmon binary: load config, open the display, run until signalled.

use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Instant;

use anyhow::Context;
use clap::Parser;
use oled_sysmon::config::{self, Backend, Config};
use oled_sysmon::display::{self, DisplayError};
use oled_sysmon::metrics::{HostMetrics, ShellRunner};
use oled_sysmon::{Dashboard, DashboardError, RunOptions, StopSignal, StopTrigger, run};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

/// Host metrics dashboard for SSD1306 OLED displays.
#[derive(Debug, Parser)]
#[command(name = "oled-sysmon", version, about)]
struct Cli {
    /// TOML configuration file.
    #[arg(short, long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Display backend, overrides `display.backend`.
    #[arg(long, value_enum)]
    backend: Option<Backend>,

    /// I2C bus device, overrides `display.i2c_bus`.
    #[arg(long, value_name = "PATH")]
    i2c_bus: Option<String>,

    /// Title text, overrides `dashboard.title`.
    #[arg(long)]
    title: Option<String>,

    /// Render a single tick and exit.
    #[arg(long)]
    once: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    if let Err(e) = init_tracing() {
        eprintln!("{e:#}");
        return ExitCode::FAILURE;
    }

    match run_dashboard(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("dashboard stopped: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn run_dashboard(cli: Cli) -> anyhow::Result<()> {
    let config = load_config(&cli)?;

    let (stop, trigger) = StopSignal::new();
    spawn_signal_listener(trigger)?;

    let mut sink = display::open(&config).context("failed to open display")?;
    let mut source = HostMetrics::new(
        ShellRunner,
        config.commands.clone(),
        config.dashboard.command_timeout(),
    );
    let mut dashboard = Dashboard::new(&config, Instant::now());

    let options = RunOptions {
        tick_interval: config.dashboard.tick_interval(),
        max_ticks: cli.once.then_some(1),
    };

    match run(&mut dashboard, &mut source, &mut sink, &stop, options) {
        Ok(pushed) => {
            info!(pushed, "exiting");
            Ok(())
        }
        Err(DashboardError::Display(DisplayError::Closed)) => {
            info!("preview window closed");
            Ok(())
        }
        Err(e) => Err(e).context("dashboard loop failed"),
    }
}

fn load_config(cli: &Cli) -> anyhow::Result<Config> {
    let mut config = match &cli.config {
        Some(path) => config::load_from_file(path).with_context(|| format!("loading {}", path.display()))?,
        None => Config::default(),
    };

    if let Some(backend) = cli.backend {
        config.display.backend = backend;
    }
    if let Some(bus) = &cli.i2c_bus {
        config.display.i2c_bus.clone_from(bus);
    }
    if let Some(title) = &cli.title {
        config.dashboard.title.clone_from(title);
    }
    config.validate().context("invalid configuration")?;

    info!(
        backend = ?config.display.backend,
        title = %config.dashboard.title,
        tick_ms = config.dashboard.tick_ms,
        "configuration loaded"
    );
    Ok(config)
}

/// `RUST_LOG` filter (default `info`); `LOG_FORMAT=json` for JSON lines.
fn init_tracing() -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let format = std::env::var("LOG_FORMAT").unwrap_or_default();

    let result = match format.as_str() {
        "json" => tracing_subscriber::fmt().json().with_env_filter(filter).try_init(),
        _ => tracing_subscriber::fmt().with_env_filter(filter).try_init(),
    };
    result.map_err(|e| anyhow::anyhow!("tracing init failed: {e}"))
}

/// Trigger `stop` on SIGINT or SIGTERM.
#[cfg(unix)]
fn spawn_signal_listener(trigger: StopTrigger) -> anyhow::Result<()> {
    use signal_hook::consts::signal::{SIGINT, SIGTERM};
    use signal_hook::iterator::Signals;

    let mut signals = Signals::new([SIGINT, SIGTERM]).context("failed to register signal handlers")?;
    std::thread::Builder::new()
        .name("signals".to_string())
        .spawn(move || {
            if let Some(signal) = signals.forever().next() {
                info!(signal, "shutdown requested");
                trigger.stop();
            }
        })
        .context("failed to spawn signal thread")?;
    Ok(())
}

#[cfg(not(unix))]
fn spawn_signal_listener(_trigger: StopTrigger) -> anyhow::Result<()> { Ok(()) }
