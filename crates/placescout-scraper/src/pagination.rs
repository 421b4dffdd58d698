//! Continuation tokens for nearby-search pagination.
//!
//! The search endpoint returns a `next_page_token` when more results exist.
//! A fresh token is not immediately valid: redeeming it too early yields an
//! `INVALID_REQUEST` status. [`PageToken`] records when it was issued and
//! only hands out its value once the configured delay has elapsed, and
//! redeeming consumes it so a token is never sent twice.

use std::time::Duration;

use tokio::time::Instant;

/// An opaque, single-use cursor for the next page of a nearby search.
#[derive(Debug)]
pub struct PageToken {
    value: String,
    issued_at: Instant,
}

impl PageToken {
    /// Wraps a token received just now.
    #[must_use]
    pub fn new(value: String) -> Self {
        Self {
            value,
            issued_at: Instant::now(),
        }
    }

    /// The earliest instant at which the token may be sent.
    #[must_use]
    pub fn ready_at(&self, min_delay: Duration) -> Instant {
        self.issued_at + min_delay
    }

    /// Waits until at least `min_delay` has passed since issue, then yields
    /// the raw token for the next request.
    ///
    /// Time spent between receiving the token and calling this (e.g. while
    /// enriching the current page) counts toward the delay.
    pub async fn redeem(self, min_delay: Duration) -> String {
        tokio::time::sleep_until(self.ready_at(min_delay)).await;
        self.value
    }
}
