use std::collections::VecDeque;
use std::sync::Mutex;

use async_trait::async_trait;
use plantwatch_api::models::Reading;
use plantwatch_mock::transport::{Response, Transport, TransportError};
use tokio::time::Instant;

#[derive(Debug, Clone, Copy)]
pub enum Outcome {
    Status(u16),
    Timeout,
    ConnectionRefused,
    Broken,
}

/// Answers attempts from a script, repeating `fallback` once it runs out.
pub struct ScriptedTransport {
    script: Mutex<VecDeque<Outcome>>,
    fallback: Outcome,
    attempts: Mutex<Vec<(Instant, Reading)>>,
}

impl ScriptedTransport {
    pub fn new(script: impl IntoIterator<Item = Outcome>, fallback: Outcome) -> Self {
        Self {
            script: Mutex::new(script.into_iter().collect()),
            fallback,
            attempts: Mutex::new(Vec::new()),
        }
    }

    pub fn always(outcome: Outcome) -> Self {
        Self::new(Vec::new(), outcome)
    }

    pub fn attempt_count(&self) -> usize {
        self.attempts.lock().unwrap().len()
    }

    pub fn readings(&self) -> Vec<Reading> {
        self.attempts.lock().unwrap().iter().map(|(_, reading)| *reading).collect()
    }

    /// Pauses observed between consecutive attempts.
    pub fn gaps(&self) -> Vec<std::time::Duration> {
        let attempts = self.attempts.lock().unwrap();

        attempts.windows(2).map(|pair| pair[1].0 - pair[0].0).collect()
    }
}

#[async_trait]
impl Transport for ScriptedTransport {
    async fn deliver(&self, reading: &Reading) -> Result<Response, TransportError> {
        self.attempts.lock().unwrap().push((Instant::now(), *reading));

        let outcome = self.script.lock().unwrap().pop_front().unwrap_or(self.fallback);

        match outcome {
            Outcome::Status(status) => Ok(Response {
                status,
                body: format!("{{\"status\":{status}}}"),
            }),
            Outcome::Timeout => Err(TransportError::Timeout),
            Outcome::ConnectionRefused => Err(TransportError::Connection("connection refused".to_string())),
            Outcome::Broken => Err(TransportError::Other("unexpected end of stream".to_string())),
        }
    }
}
