use rand::SeedableRng;
use rand::rngs::StdRng;
use tokio::sync::oneshot;

use crate::client::SubmissionClient;
use crate::error::Error;
use crate::generator::ReadingGenerator;
use crate::mode::SimulationMode;
use crate::settings::Settings;
use crate::simulator::{SessionStats, Simulator};
use crate::transport::HttpTransport;

pub mod client;
pub mod error;
pub mod generator;
pub mod health;
pub mod mode;
pub mod settings;
pub mod simulator;
pub mod transport;

/// Generates and submits readings every interval until Ctrl+C.
pub async fn run(settings: &Settings, mode: SimulationMode, seed: Option<u64>) -> Result<SessionStats, Error> {
    let rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };
    let generator = ReadingGenerator::with_thresholds(mode, settings.thresholds, rng)?;
    let transport = HttpTransport::new(&settings.endpoint)?;

    tracing::info!("Endpoint: {}", transport.url());
    tracing::info!("Interval: {} seconds", settings.schedule.interval_secs);
    tracing::info!("Simulation mode: {}", mode.as_str().to_uppercase());
    tracing::info!("Press Ctrl+C to stop");

    let client = SubmissionClient::new(transport, settings.schedule.retry_policy());
    let mut simulator = Simulator::new(generator, client, settings.schedule.interval());

    let (shutdown_tx, shutdown_rx) = oneshot::channel();
    tokio::spawn(async move {
        match tokio::signal::ctrl_c().await {
            Ok(()) => {
                let _ = shutdown_tx.send(());
            }
            Err(e) => tracing::error!("Unable to listen for shutdown signal: {}", e),
        }
    });

    let stats = simulator
        .run_until(async {
            // a dropped sender means no signal will ever arrive
            if shutdown_rx.await.is_err() {
                std::future::pending::<()>().await;
            }
        })
        .await;

    Ok(stats)
}
