//! LineLess CLI - terminal front end for the queue engine
//!
//! Owns one engine per invocation and plays the presentation and notification
//! roles around it.

mod logging;
mod render;
mod settings;

use anyhow::{Context, Result};
use async_trait::async_trait;
use clap::{Parser, Subcommand};
use colored::Colorize;
use lineless_core::application::{
    register, AutoAdvanceSlot, QueueEngine, RegistrationForm, StatusAlerts,
};
use lineless_core::domain::{EngineConfig, Notice, QueueStatus, StatusReport};
use lineless_core::port::id_provider::UuidProvider;
use lineless_core::port::time_provider::SystemTimeProvider;
use lineless_core::port::AdvanceObserver;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;
use tracing::{info, warn};

#[derive(Parser)]
#[command(name = "lineless")]
#[command(about = "LineLess queue token simulator", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Config file (TOML/JSON/YAML); defaults to the platform config dir
    #[arg(long, env = "LINELESS_CONFIG")]
    config: Option<PathBuf>,

    /// Also write JSON logs to a daily rolling file in this directory
    #[arg(long, env = "LINELESS_LOG_DIR")]
    log_dir: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// List the department catalog
    Departments,

    /// Show the public queue board
    Board {
        /// Advance the queue this many times first
        #[arg(long, default_value = "0")]
        advance: u32,

        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Take a token and show its status
    Take {
        #[command(flatten)]
        registration: RegistrationArgs,

        /// Advance the queue this many times after issuing
        #[arg(long, default_value = "0")]
        advance: u32,

        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Take a token and watch the queue advance in real time
    Simulate {
        #[command(flatten)]
        registration: RegistrationArgs,

        /// Seconds between advances (overrides configuration)
        #[arg(long)]
        interval_secs: Option<u64>,

        /// Stop after this many advances
        #[arg(long)]
        ticks: Option<u32>,
    },
}

#[derive(clap::Args)]
struct RegistrationArgs {
    /// Full name
    #[arg(short, long)]
    name: String,

    /// Mobile number
    #[arg(short, long)]
    mobile: String,

    /// Department (see `lineless departments`)
    #[arg(short, long)]
    department: String,
}

impl From<RegistrationArgs> for RegistrationForm {
    fn from(args: RegistrationArgs) -> Self {
        RegistrationForm::new(args.name, args.mobile, args.department)
    }
}

/// Forwards each auto-advance report to the render loop
struct ChannelObserver {
    tx: mpsc::UnboundedSender<StatusReport>,
}

#[async_trait]
impl AdvanceObserver for ChannelObserver {
    async fn on_advance(&self, report: &StatusReport) {
        if self.tx.send(report.clone()).is_err() {
            warn!("Report receiver closed");
        }
    }
}

fn build_engine(config: EngineConfig) -> QueueEngine {
    QueueEngine::new(config, Arc::new(UuidProvider), Arc::new(SystemTimeProvider))
}

fn issue_token(engine: &mut QueueEngine, form: &RegistrationForm) -> Result<()> {
    match register(engine, form) {
        Ok(token) => {
            render::print_notice(&Notice::token_issued(&token.number));
            render::print_token(&token);
            Ok(())
        }
        Err(e) => {
            render::print_notice(&Notice::error(e.to_string()));
            Err(e).context("Registration rejected")
        }
    }
}

async fn simulate(
    config: EngineConfig,
    form: RegistrationForm,
    period: Duration,
    max_ticks: Option<u32>,
) -> Result<()> {
    let engine = build_engine(config).into_shared();

    let initial = {
        let mut engine = engine.lock().await;
        issue_token(&mut engine, &form)?;
        engine.report()
    };
    render::print_report(&initial);

    let alerts = StatusAlerts::new(Arc::new(render::ConsoleNotifier));
    alerts.observe(&initial).await;

    let (tx, mut rx) = mpsc::unbounded_channel();
    let mut slot = AutoAdvanceSlot::new();
    slot.start(engine.clone(), period, Some(Arc::new(ChannelObserver { tx })))
        .await;

    println!();
    println!(
        "{}",
        format!("Advancing every {}s. Press Ctrl+C to stop.", period.as_secs()).dimmed()
    );

    let mut ticks = 0u32;
    loop {
        tokio::select! {
            _ = tokio::signal::ctrl_c() => {
                info!("Interrupted");
                break;
            }
            report = rx.recv() => {
                let Some(report) = report else { break };
                ticks += 1;

                render::print_report(&report);
                alerts.observe(&report).await;

                if report.status == QueueStatus::Missed {
                    break;
                }
                if max_ticks.is_some_and(|max| ticks >= max) {
                    break;
                }
            }
        }
    }

    slot.stop().await;
    info!(ticks, "Simulation finished");
    render::print_notice(&Notice::info(format!("Stopped after {} advances", ticks)));

    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let _log_guard = logging::init_logging(cli.log_dir.as_deref())?;

    let config = settings::load(cli.config.as_deref())?;
    info!(
        version = lineless_core::VERSION,
        prefix = %config.token_prefix,
        "LineLess starting"
    );

    match cli.command {
        Commands::Departments => {
            let engine = build_engine(config);
            render::print_departments(engine.departments());
        }

        Commands::Board { advance, json } => {
            let mut engine = build_engine(config);
            for _ in 0..advance {
                engine.advance();
            }

            let snapshot = engine.default_snapshot();
            if json {
                println!("{}", serde_json::to_string_pretty(&snapshot)?);
            } else {
                render::print_board(&snapshot);
            }
        }

        Commands::Take {
            registration,
            advance,
            json,
        } => {
            let mut engine = build_engine(config);
            let form = RegistrationForm::from(registration);

            if json {
                let token = register(&mut engine, &form).context("Registration rejected")?;
                for _ in 0..advance {
                    engine.advance();
                }
                let output = serde_json::json!({
                    "token": token,
                    "report": engine.report(),
                });
                println!("{}", serde_json::to_string_pretty(&output)?);
            } else {
                issue_token(&mut engine, &form)?;
                for _ in 0..advance {
                    engine.advance();
                }
                render::print_report(&engine.report());
            }
        }

        Commands::Simulate {
            registration,
            interval_secs,
            ticks,
        } => {
            let period = interval_secs
                .map(Duration::from_secs)
                .unwrap_or_else(|| config.advance_period());
            simulate(config, registration.into(), period, ticks).await?;
        }
    }

    Ok(())
}
