//! Headless aim bot: runs one seeded session against a scripted aimer and
//! prints the final stats and analysis as JSON.

mod bot;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::Serialize;
use tracing::{debug, info};

use aimscope_app::config::AppConfig;
use aimscope_app::game_loop::LoopDriver;
use aimscope_core::commands::PlayerCommand;
use aimscope_core::enums::ScenarioId;
use aimscope_core::events::SessionEvent;
use aimscope_core::state::{Analysis, SessionStats};

use crate::bot::{Bot, BotProfile};

#[derive(Parser, Debug)]
#[command(name = "aim-bot")]
#[command(about = "Run a headless AIMSCOPE session with a scripted aimer")]
struct Cli {
    #[arg(long, value_enum, default_value_t = CliScenario::Gridshot)]
    scenario: CliScenario,
    /// Overrides the config seed
    #[arg(long)]
    seed: Option<u64>,
    /// Session length in seconds, overrides the config
    #[arg(long)]
    secs: Option<f64>,
    /// Max aim error per axis in scene units
    #[arg(long, default_value_t = 0.3)]
    jitter: f64,
    /// Reaction lag in seconds; negative leads the target
    #[arg(long, default_value_t = 0.0, allow_hyphen_values = true)]
    lag: f64,
    /// Constant horizontal pull in scene units; negative pulls left
    #[arg(long, default_value_t = 0.0, allow_hyphen_values = true)]
    pull: f64,
    /// Ticks between shots
    #[arg(long, default_value_t = 20)]
    fire_every: u32,
    #[arg(long)]
    sensitivity: Option<f64>,
    /// JSON config file
    #[arg(long)]
    config: Option<PathBuf>,
    #[arg(long, default_value_t = false)]
    pretty: bool,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum CliScenario {
    Gridshot,
    Tracking,
    Precision,
}

impl From<CliScenario> for ScenarioId {
    fn from(s: CliScenario) -> Self {
        match s {
            CliScenario::Gridshot => ScenarioId::Gridshot,
            CliScenario::Tracking => ScenarioId::Tracking,
            CliScenario::Precision => ScenarioId::Precision,
        }
    }
}

#[derive(Debug, Serialize)]
struct Report {
    config: AppConfig,
    stats: SessionStats,
    analysis: Analysis,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::filter::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = build_config(&cli)?;
    let report = run_session(&cli, config)?;

    let json = if cli.pretty {
        serde_json::to_string_pretty(&report)?
    } else {
        serde_json::to_string(&report)?
    };
    println!("{json}");
    Ok(())
}

fn build_config(cli: &Cli) -> Result<AppConfig> {
    let mut config = match &cli.config {
        Some(path) => AppConfig::load(path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => AppConfig::default(),
    };
    if let Some(seed) = cli.seed {
        config.session.seed = seed;
    }
    if let Some(secs) = cli.secs {
        config.session_secs = secs;
    }
    if let Some(sensitivity) = cli.sensitivity {
        config.session.sensitivity = sensitivity;
    }
    config.validate().context("invalid settings")?;
    Ok(config)
}

fn run_session(cli: &Cli, config: AppConfig) -> Result<Report> {
    let scenario = ScenarioId::from(cli.scenario);
    let mut driver = LoopDriver::new(&config);
    let mut bot = Bot::new(
        BotProfile {
            jitter: cli.jitter,
            lag: cli.lag,
            pull_x: cli.pull,
        },
        ChaCha8Rng::seed_from_u64(config.session.seed.wrapping_add(1)),
    );
    let fire_every = cli.fire_every.max(1);

    info!(scenario = scenario.label(), seed = config.session.seed, "bot session");
    driver.apply(PlayerCommand::StartSession { scenario });

    let mut tick: u64 = 0;
    let ended = loop {
        if tick % u64::from(fire_every) == 0 {
            if let Some(shot) = bot.shoot(&driver.engine().targets()) {
                if let Some(SessionEvent::ShotResolved { outcome }) =
                    driver.apply(PlayerCommand::Fire { shot })
                {
                    debug!(result = ?outcome.result, "bot fired");
                }
            }
        }
        let (_, event) = driver.advance();
        if let Some(event) = event {
            break event;
        }
        tick += 1;
    };

    match ended {
        SessionEvent::SessionEnded { stats, analysis } => Ok(Report {
            config,
            stats,
            analysis,
        }),
        other => anyhow::bail!("unexpected event at end of session: {other:?}"),
    }
}
