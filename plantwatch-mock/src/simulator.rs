use std::fmt;
use std::future::Future;
use std::time::Duration;

use plantwatch_api::models::Reading;
use rand::Rng;

use crate::client::SubmissionClient;
use crate::generator::ReadingGenerator;
use crate::health::{self, HealthIssue};
use crate::transport::Transport;

/// Running totals of one simulator session.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SessionStats {
    pub readings: u64,
    pub successes: u64,
}

impl SessionStats {
    pub fn record(&mut self, delivered: bool) {
        self.readings += 1;
        if delivered {
            self.successes += 1;
        }
    }

    pub fn failures(&self) -> u64 {
        self.readings - self.successes
    }

    /// Percentage of delivered readings, zero before the first reading.
    pub fn success_rate(&self) -> f64 {
        if self.readings == 0 {
            0.0
        } else {
            100.0 * self.successes as f64 / self.readings as f64
        }
    }
}

impl fmt::Display for SessionStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Total readings: {}", self.readings)?;
        writeln!(f, "Successful: {}", self.successes)?;
        write!(f, "Failed: {}", self.failures())
    }
}

/// Outcome of one generate and submit cycle.
#[derive(Debug, Clone, PartialEq)]
pub struct Step {
    pub number: u64,
    pub reading: Reading,
    pub delivered: bool,
    pub issues: Vec<HealthIssue>,
}

pub struct Simulator<R, T> {
    generator: ReadingGenerator<R>,
    client: SubmissionClient<T>,
    interval: Duration,
    stats: SessionStats,
}

impl<R: Rng, T: Transport> Simulator<R, T> {
    pub fn new(generator: ReadingGenerator<R>, client: SubmissionClient<T>, interval: Duration) -> Self {
        Self {
            generator,
            client,
            interval,
            stats: SessionStats::default(),
        }
    }

    pub fn stats(&self) -> SessionStats {
        self.stats
    }

    pub fn client(&self) -> &SubmissionClient<T> {
        &self.client
    }

    pub async fn step(&mut self) -> Step {
        let reading = self.generator.generate();
        let delivered = self.client.send(&reading).await;
        self.stats.record(delivered);

        let number = self.stats.readings;
        let issues = health::assess(&reading);

        tracing::info!(
            "Reading #{number} {}: soil={} light={} temp={}°C humidity={}%",
            if delivered { "delivered" } else { "failed" },
            reading.soil,
            reading.light,
            reading.temperature,
            reading.humidity,
        );
        tracing::info!(
            "{} | success rate {}/{} ({:.1}%)",
            health::describe(&issues),
            self.stats.successes,
            self.stats.readings,
            self.stats.success_rate(),
        );

        Step {
            number,
            reading,
            delivered,
            issues,
        }
    }

    /// Repeats [`step`](Self::step) every `interval` until `shutdown` resolves.
    ///
    /// `shutdown` is only observed while waiting between two steps, so an
    /// in-flight submission always runs to completion.
    pub async fn run_until<F>(&mut self, shutdown: F) -> SessionStats
    where
        F: Future<Output = ()>,
    {
        tokio::pin!(shutdown);

        loop {
            self.step().await;

            tokio::select! {
                biased;
                _ = &mut shutdown => break,
                _ = tokio::time::sleep(self.interval) => {}
            }
        }

        tracing::info!("Simulator stopped after {} readings", self.stats.readings);

        self.stats
    }
}
