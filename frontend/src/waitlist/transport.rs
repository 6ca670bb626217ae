use std::future::Future;

use futures::future::{self, Either, LocalBoxFuture};
use gloo_timers::future::TimeoutFuture;
use serde::Serialize;

use crate::config;
use crate::utils::api::Api;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WaitlistSignup {
    pub email: String,
}

#[derive(Debug, thiserror::Error)]
pub enum WaitlistError {
    #[error("request failed: {0}")]
    Network(#[from] gloo_net::Error),
    #[error("server answered with status {0}")]
    Status(u16),
    #[error("no answer within {0} ms")]
    Timeout(u32),
    #[error("could not encode signup: {0}")]
    Encode(#[from] serde_json::Error),
}

/// Delivers a signup to wherever the waitlist is collected.
pub trait WaitlistTransport {
    fn join(&self, signup: WaitlistSignup) -> LocalBoxFuture<'_, Result<(), WaitlistError>>;
}

/// Posts signups as JSON to the collection endpoint.
#[derive(Debug, Clone)]
pub struct HttpWaitlist {
    path: String,
    timeout_ms: u32,
}

impl Default for HttpWaitlist {
    fn default() -> Self {
        Self {
            path: config::WAITLIST_PATH.to_string(),
            timeout_ms: config::WAITLIST_TIMEOUT_MS,
        }
    }
}

impl WaitlistTransport for HttpWaitlist {
    fn join(&self, signup: WaitlistSignup) -> LocalBoxFuture<'_, Result<(), WaitlistError>> {
        Box::pin(async move {
            let request = Api::post(&self.path).json(&signup)?;
            let exchange = async move {
                let response = request.send().await?;
                check_status(response.status())
            };
            within_timeout(exchange, TimeoutFuture::new(self.timeout_ms), self.timeout_ms).await
        })
    }
}

/// Any 2xx counts as accepted.
pub(crate) fn check_status(status: u16) -> Result<(), WaitlistError> {
    if (200..300).contains(&status) {
        Ok(())
    } else {
        Err(WaitlistError::Status(status))
    }
}

/// Races `exchange` against `timer`; the timer winning is a timeout.
pub(crate) async fn within_timeout<R, T>(
    exchange: R,
    timer: T,
    timeout_ms: u32,
) -> Result<(), WaitlistError>
where
    R: Future<Output = Result<(), WaitlistError>>,
    T: Future<Output = ()>,
{
    match future::select(Box::pin(exchange), Box::pin(timer)).await {
        Either::Left((outcome, _)) => outcome,
        Either::Right(_) => Err(WaitlistError::Timeout(timeout_ms)),
    }
}
