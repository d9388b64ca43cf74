use clap::Parser;

use plantwatch_mock::mode::select_mode;
use plantwatch_mock::run;
use plantwatch_mock::settings::Settings;

#[derive(Parser)]
#[command(name = "plantwatch-mock")]
#[command(about = "Synthetic plant sensor readings for exercising the monitoring backend")]
#[command(version)]
struct Cli {
    /// Simulation mode: normal, dry_soil, hot_weather, night_time or random
    mode: Option<String>,

    /// Seed for a reproducible reading sequence
    #[arg(long)]
    seed: Option<u64>,
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    let settings = Settings::new().expect("Failed to load settings.");

    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            let app_name = env!("CARGO_PKG_NAME").replace('-', "_");
            let level = settings.logger.level.as_str();

            format!("{app_name}={level}").into()
        }))
        .init();

    let mode = select_mode(cli.mode.as_deref());

    match run(&settings, mode, cli.seed).await {
        // printed regardless of the log filter
        Ok(stats) => println!("{stats}"),
        Err(e) => {
            tracing::error!("Simulator failed: {}", e);
            std::process::exit(1);
        }
    }
}
