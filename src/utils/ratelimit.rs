/// FRED API rate limiter - 120 requests per minute globally
use lazy_static::lazy_static;
use std::sync::Mutex;
use std::time::{Duration, Instant};
use std::collections::VecDeque;

lazy_static! {
    static ref FRED_RATE_LIMITER: Mutex<SlidingWindowLimiter> =
        Mutex::new(SlidingWindowLimiter::new(120, Duration::from_secs(60)));
}

pub struct SlidingWindowLimiter {
    /// Timestamps of requests inside the current window
    request_times: VecDeque<Instant>,
    max_requests: usize,
    window: Duration,
}

impl SlidingWindowLimiter {
    pub fn new(max_requests: usize, window: Duration) -> Self {
        Self {
            request_times: VecDeque::new(),
            max_requests,
            window,
        }
    }

    /// Record a request at `now` if allowed, otherwise return how long to wait
    fn check_and_record_at(&mut self, now: Instant) -> Duration {
        while let Some(&front) = self.request_times.front() {
            if now.duration_since(front) >= self.window {
                self.request_times.pop_front();
            } else {
                break;
            }
        }

        if self.request_times.len() >= self.max_requests {
            if let Some(&oldest) = self.request_times.front() {
                return self.window - now.duration_since(oldest);
            }
        }

        self.request_times.push_back(now);
        Duration::ZERO
    }

    fn check_and_record(&mut self) -> Duration {
        self.check_and_record_at(Instant::now())
    }
}

/// Wait until a FRED request fits in the rate limit window, then record it
pub async fn rate_limit_fred_api() {
    loop {
        let wait_duration = {
            // Timestamps stay valid after a panic elsewhere
            let mut limiter = FRED_RATE_LIMITER
                .lock()
                .unwrap_or_else(|poisoned| poisoned.into_inner());
            limiter.check_and_record()
        };

        if wait_duration.is_zero() {
            return;
        }

        tracing::debug!("FRED API rate limit: waiting {}ms", wait_duration.as_millis());
        tokio::time::sleep(wait_duration).await;
    }
}
