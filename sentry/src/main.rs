//! Sentry binary entry point

use std::sync::atomic::Ordering;
use std::time::Duration;

use clap::Parser;
use tokio::signal;
use tracing::{error, info};

use sentry::{
    Sentry, SentryResult, SentrySettings,
    buzzer::BuzzerCommand,
    config::SentryConfig,
    services::{HttpActuatorService, HttpDetectorService, MachineSession},
    types::EvaluationPolicy,
};

/// Watches a camera through a machine's vision service and sounds a piezo
/// buzzer when the target class is detected
#[derive(Parser)]
#[command(name = "sentry")]
#[command(about = "Polls a machine's object detector and sounds a buzzer on a qualifying match")]
struct Args {
    /// Number of polling cycles to run
    #[arg(long, default_value = "100")]
    iterations: u32,

    /// Delay between polling cycles, in seconds
    #[arg(long, default_value = "1.0")]
    interval_secs: f64,

    /// Deadline for each remote call, in seconds
    #[arg(long, default_value = "10.0")]
    timeout_secs: f64,

    /// Object class that triggers the buzzer
    #[arg(long, default_value = "person")]
    target_class: String,

    /// Confidence a detection must strictly exceed to qualify
    #[arg(long, default_value = "0.8")]
    confidence_threshold: f64,

    /// Match the target class case-sensitively
    #[arg(long)]
    case_sensitive: bool,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info")]
    log_level: String,
}

#[tokio::main]
async fn main() -> SentryResult<()> {
    // Load .env if present, then parse arguments
    dotenvy::dotenv().ok();
    let args = Args::parse();

    shared::logging::init_tracing_with_level(Some(&args.log_level));

    let config = SentryConfig::from_env();
    let timeout = Duration::from_secs_f64(args.timeout_secs);

    // Bootstrap: session first, then the named resources. Failure here is
    // fatal, unlike failures inside the polling loop.
    let session = MachineSession::connect(&config, timeout).await?;
    let detector = HttpDetectorService::from_session(&session, &config.vision_name);
    let actuator = HttpActuatorService::from_session(&session, &config.piezo_name);

    let settings = SentrySettings {
        camera_name: config.camera_name.clone(),
        policy: EvaluationPolicy {
            confidence_threshold: args.confidence_threshold,
            target_class: args.target_class.clone(),
            case_insensitive: !args.case_sensitive,
        },
        command: BuzzerCommand::default(),
        total_iterations: args.iterations,
        poll_interval: Duration::from_secs_f64(args.interval_secs),
    };

    let sentry = Sentry::new(settings, detector, actuator);

    // Ctrl-C requests a stop at the next iteration boundary
    let stop_flag = sentry.stop_flag().await;
    tokio::spawn(async move {
        if let Err(e) = signal::ctrl_c().await {
            error!("Failed to listen for shutdown signal: {}", e);
            return;
        }
        info!("Interrupt received, finishing current cycle");
        stop_flag.store(true, Ordering::Relaxed);
    });

    let totals = sentry.run().await?;
    info!(
        cycles = totals.cycles,
        alerts = totals.alerts,
        errors = totals.errors,
        "Sentry session finished"
    );
    Ok(())
}
