use std::time::Duration;

use plantwatch_api::models::Reading;

use crate::transport::{Response, Transport, TransportError};

const SUCCESS_STATUSES: [u16; 2] = [200, 201];

/// Why a single attempt did not count as delivered.
#[derive(Debug, thiserror::Error)]
pub enum SubmitError {
    #[error("API returned {status}: {body}")]
    Rejected { status: u16, body: String },

    #[error(transparent)]
    Transport(#[from] TransportError),
}

/// Fixed attempt budget with a constant pause between attempts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    max_attempts: u32,
    retry_delay: Duration,
}

impl RetryPolicy {
    /// A budget of zero still allows one attempt.
    pub fn new(max_attempts: u32, retry_delay: Duration) -> Self {
        Self {
            max_attempts: max_attempts.max(1),
            retry_delay,
        }
    }

    pub fn max_attempts(&self) -> u32 {
        self.max_attempts
    }

    pub fn retry_delay(&self) -> Duration {
        self.retry_delay
    }
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self::new(3, Duration::from_secs(5))
    }
}

fn classify(result: Result<Response, TransportError>) -> Result<(), SubmitError> {
    let response = result?;

    if SUCCESS_STATUSES.contains(&response.status) {
        Ok(())
    } else {
        Err(SubmitError::Rejected {
            status: response.status,
            body: response.body,
        })
    }
}

/// Delivers readings through a [`Transport`], hiding transient failures
/// behind a [`RetryPolicy`].
pub struct SubmissionClient<T> {
    transport: T,
    policy: RetryPolicy,
}

impl<T: Transport> SubmissionClient<T> {
    pub fn new(transport: T, policy: RetryPolicy) -> Self {
        Self { transport, policy }
    }

    pub fn policy(&self) -> RetryPolicy {
        self.policy
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Returns `true` as soon as one attempt is accepted, `false` once the
    /// attempt budget is spent. Every call starts with a fresh budget.
    pub async fn send(&self, reading: &Reading) -> bool {
        let max_attempts = self.policy.max_attempts;

        for attempt in 1..=max_attempts {
            match classify(self.transport.deliver(reading).await) {
                Ok(()) => {
                    tracing::debug!(attempt, "reading accepted");
                    return true;
                }
                Err(e) => match &e {
                    SubmitError::Transport(TransportError::Timeout) => {
                        tracing::warn!("Timeout on attempt {attempt}/{max_attempts}")
                    }
                    SubmitError::Transport(TransportError::Connection(_)) => {
                        tracing::warn!("Connection error on attempt {attempt}/{max_attempts}: {e}")
                    }
                    _ => tracing::warn!("Attempt {attempt}/{max_attempts} failed: {e}"),
                },
            }

            if attempt < max_attempts {
                tokio::time::sleep(self.policy.retry_delay).await;
            }
        }

        false
    }
}
