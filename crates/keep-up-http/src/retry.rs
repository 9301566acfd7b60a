//! Replays failed GraphQL reads with exponential backoff

use std::time::Duration;

use http::StatusCode;
use tap::TapFallible;
use tower::{
    retry::{
        backoff::{Backoff, ExponentialBackoff, ExponentialBackoffMaker, MakeBackoff},
        Policy,
    },
    util::rng::HasherRng,
};

use crate::{HttpRequest, HttpResponse, HttpServiceError};

const FIRST_DELAY: Duration = Duration::from_millis(50);
const LONGEST_DELAY: Duration = Duration::from_secs(1);
const JITTER: f64 = 0.99;

/// A [`Policy`] allowing up to `max` extra attempts per request
#[derive(Clone, Debug)]
pub struct RetryPolicy {
    attempts: usize,
    max: usize,
    backoff: Option<ExponentialBackoff>,
}

impl RetryPolicy {
    /// Allows `max` retries after the first attempt
    pub fn new(max: usize) -> RetryPolicy {
        let backoff =
            ExponentialBackoffMaker::new(FIRST_DELAY, LONGEST_DELAY, JITTER, HasherRng::default())
                .tap_err(|err| tracing::warn!(%err, "retrying without backoff"))
                .ok()
                .map(|mut maker| maker.make_backoff());
        RetryPolicy {
            attempts: 0,
            max,
            backoff,
        }
    }
}

/// Whether the endpoint may answer `result` differently on another attempt
fn worth_repeating(result: &Result<HttpResponse, HttpServiceError>) -> bool {
    match result {
        Err(err) => err.is_transient(),
        Ok(resp) => {
            let status = resp.status();
            status != StatusCode::BAD_REQUEST
                && (status.is_redirection() || status.is_client_error() || status.is_server_error())
        }
    }
}

impl Policy<HttpRequest, HttpResponse, HttpServiceError> for RetryPolicy {
    type Future = tokio::time::Sleep;

    fn retry(
        &mut self,
        _: &mut HttpRequest,
        result: &mut Result<HttpResponse, HttpServiceError>,
    ) -> Option<Self::Future> {
        if self.attempts >= self.max || !worth_repeating(result) {
            return None;
        }
        self.attempts += 1;
        tracing::debug!(attempt = self.attempts, max = self.max, "retrying request");
        Some(match self.backoff.as_mut() {
            Some(backoff) => backoff.next_backoff(),
            None => tokio::time::sleep(Duration::ZERO),
        })
    }

    fn clone_request(&mut self, req: &HttpRequest) -> Option<HttpRequest> {
        Some(req.clone())
    }
}
