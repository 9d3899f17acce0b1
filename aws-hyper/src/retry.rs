/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! Retry support for aws-hyper
//!
//! The standard strategy shares a token bucket across every request a client sends. Each retry
//! withdraws tokens from the bucket and each success refunds them, so a client talking to an
//! unhealthy service stops retrying once the bucket is drained.

use crate::{SdkError, SdkSuccess};
use smithy_http::operation::Operation;
use smithy_http::retry::ClassifyResponse;
use smithy_types::retry::{ErrorKind, ProvideErrorKind, RetryKind};
use std::future::Future;
use std::pin::Pin;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;
use tracing::Instrument;

const MAX_ATTEMPTS: u32 = 3;
const INITIAL_RETRY_TOKENS: usize = 500;
const RETRY_COST: usize = 5;
const TIMEOUT_RETRY_COST: usize = 10;
const MAX_BACKOFF: Duration = Duration::from_secs(20);

/// Retry configuration of a [`Client`](crate::Client)
#[derive(Clone, Debug)]
pub struct RetryConfig {
    initial_retry_tokens: usize,
    retry_cost: usize,
    no_retry_increment: usize,
    timeout_retry_cost: usize,
    max_attempts: u32,
    max_backoff: Duration,
    base: fn() -> f64,
}

impl RetryConfig {
    pub fn new() -> Self {
        Default::default()
    }

    /// Override the maximum number of attempts, including the first one
    ///
    /// `max_attempts` must be set to a value of at least `1` (indicating that retries are disabled).
    pub fn with_max_attempts(mut self, max_attempts: u32) -> Self {
        self.max_attempts = max_attempts.max(1);
        self
    }

    /// For deterministic tests, enable using a static base instead of random base for exponential backoff
    pub fn with_static_base(mut self, base: fn() -> f64) -> Self {
        self.base = base;
        self
    }

    pub fn with_max_backoff(mut self, max_backoff: Duration) -> Self {
        self.max_backoff = max_backoff;
        self
    }
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            initial_retry_tokens: INITIAL_RETRY_TOKENS,
            retry_cost: RETRY_COST,
            no_retry_increment: 1,
            timeout_retry_cost: TIMEOUT_RETRY_COST,
            max_attempts: MAX_ATTEMPTS,
            max_backoff: MAX_BACKOFF,
            // by default, use a random base for exponential backoff
            base: fastrand::f64,
        }
    }
}

/// Produces a fresh retry handler for each request, all sharing one token bucket
#[derive(Clone, Debug)]
pub(crate) struct RetryHandlerFactory {
    ctx: Arc<Mutex<RetryCtx>>,
}

impl RetryHandlerFactory {
    pub fn new(config: RetryConfig) -> Self {
        Self {
            ctx: Arc::new(Mutex::new(RetryCtx::new(config))),
        }
    }

    pub fn new_handler(&self) -> StandardRetryStrategy {
        StandardRetryStrategy::new(self.ctx.clone())
    }
}

/// StandardRetryStrategy
///
/// `ctx` captures cross-request retry state, whereas `attempts` captures retry state local to this
/// request
#[derive(Clone, Debug)]
pub(crate) struct StandardRetryStrategy {
    attempts: u32,
    ctx: Arc<Mutex<RetryCtx>>,
}

impl StandardRetryStrategy {
    pub fn new(ctx: Arc<Mutex<RetryCtx>>) -> Self {
        Self { attempts: 0, ctx }
    }

    fn ctx(&self) -> MutexGuard<'_, RetryCtx> {
        self.ctx.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Decide whether to attempt the request again
    ///
    /// `Ok(())` records a success and refunds the bucket. On error, returns the strategy for the
    /// next attempt along with the delay to wait before sending it.
    pub fn do_retry(&self, retry_kind: Result<(), ErrorKind>) -> Option<(Self, Duration)> {
        let mut ctx = self.ctx();
        let can_retry = match retry_kind {
            Ok(_) => {
                ctx.retry_quota_release();
                return None;
            }
            Err(e) => {
                if self.attempts + 1 >= ctx.config.max_attempts {
                    return None;
                }
                ctx.get_retry_quota(e)
            }
        };
        if !can_retry {
            return None;
        };
        let b = (ctx.config.base)();
        let r: i32 = 2;
        let backoff = b * (r.pow(self.attempts) as f64);
        let backoff = Duration::from_secs_f64(backoff).min(ctx.config.max_backoff);
        let mut next = self.clone();
        next.attempts += 1;
        Some((next, backoff))
    }

    /// Retry after a service-provided delay, bounded by the attempt limit but not the bucket
    fn explicit_retry(&self, delay: Duration) -> Option<(Self, Duration)> {
        if self.attempts + 1 >= self.ctx().config.max_attempts {
            return None;
        }
        let mut next = self.clone();
        next.attempts += 1;
        Some((next, delay))
    }
}

#[derive(Debug)]
pub(crate) struct RetryCtx {
    retry_quota: usize,
    last_retry: Option<usize>,
    config: RetryConfig,
}

impl RetryCtx {
    pub fn new(config: RetryConfig) -> Self {
        RetryCtx {
            retry_quota: config.initial_retry_tokens,
            last_retry: None,
            config,
        }
    }

    fn retry_quota_release(&mut self) {
        self.retry_quota += self
            .last_retry
            .take()
            .unwrap_or(self.config.no_retry_increment);
        self.retry_quota = self.retry_quota.min(self.config.initial_retry_tokens);
    }

    fn get_retry_quota(&mut self, err: ErrorKind) -> bool {
        let retry_cost = if err == ErrorKind::TransientError {
            self.config.timeout_retry_cost
        } else {
            self.config.retry_cost
        };
        if retry_cost > self.retry_quota {
            false
        } else {
            self.last_retry = Some(retry_cost);
            self.retry_quota -= retry_cost;
            true
        }
    }
}

impl<Handler, R, T, E>
    tower::retry::Policy<Operation<Handler, R>, SdkSuccess<T>, SdkError<E>>
    for StandardRetryStrategy
where
    E: ProvideErrorKind,
    Handler: Clone,
    R: ClassifyResponse<SdkSuccess<T>, SdkError<E>>,
{
    type Future = Pin<Box<dyn Future<Output = Self> + Send>>;

    fn retry(
        &self,
        req: &Operation<Handler, R>,
        result: Result<&SdkSuccess<T>, &SdkError<E>>,
    ) -> Option<Self::Future> {
        let policy = req.retry_policy();
        let retry = policy.classify(result);
        let (next, delay) = match retry {
            RetryKind::Explicit(dur) => self.explicit_retry(dur)?,
            RetryKind::NotRetryable => {
                if result.is_ok() {
                    let _ = self.do_retry(Ok(()));
                }
                return None;
            }
            RetryKind::Error(err) => self.do_retry(Err(err))?,
            _ => return None,
        };
        let span = tracing::debug_span!("retry", attempt = next.attempts, delay = ?delay);
        let fut = async move {
            tracing::debug!("backing off before retrying");
            tokio::time::sleep(delay).await;
            next
        }
        .instrument(span);
        Some(Box::pin(fut))
    }

    fn clone_request(&self, req: &Operation<Handler, R>) -> Option<Operation<Handler, R>> {
        req.try_clone()
    }
}

#[cfg(test)]
mod test {
    use crate::retry::{RetryConfig, RetryCtx, StandardRetryStrategy};
    use smithy_types::retry::ErrorKind;
    use std::sync::{Arc, Mutex};
    use std::time::Duration;

    fn strategy(conf: RetryConfig) -> StandardRetryStrategy {
        let ctx = RetryCtx::new(conf.with_static_base(|| 1_f64));
        StandardRetryStrategy::new(Arc::new(Mutex::new(ctx)))
    }

    #[test]
    fn eventual_success() {
        let strategy = strategy(RetryConfig::default());
        let (strategy, dur) = strategy
            .do_retry(Err(ErrorKind::ServerError))
            .expect("should retry");
        assert_eq!(dur, Duration::from_secs(1));
        assert_eq!(strategy.ctx().retry_quota, 495);

        let (strategy, dur) = strategy
            .do_retry(Err(ErrorKind::ServerError))
            .expect("should retry");
        assert_eq!(dur, Duration::from_secs(2));
        assert_eq!(strategy.ctx().retry_quota, 490);

        let no_retry = strategy.do_retry(Ok(()));
        assert!(no_retry.is_none());
        assert_eq!(strategy.ctx().retry_quota, 495);
    }

    #[test]
    fn no_more_attempts() {
        let strategy = strategy(RetryConfig::default());
        let (strategy, dur) = strategy
            .do_retry(Err(ErrorKind::ServerError))
            .expect("should retry");
        assert_eq!(dur, Duration::from_secs(1));
        assert_eq!(strategy.ctx().retry_quota, 495);

        let (strategy, dur) = strategy
            .do_retry(Err(ErrorKind::ServerError))
            .expect("should retry");
        assert_eq!(dur, Duration::from_secs(2));
        assert_eq!(strategy.ctx().retry_quota, 490);

        let no_retry = strategy.do_retry(Err(ErrorKind::ServerError));
        assert!(no_retry.is_none());
        assert_eq!(strategy.ctx().retry_quota, 490);
    }

    #[test]
    fn transient_errors_cost_more() {
        let strategy = strategy(RetryConfig::default());
        let (strategy, _) = strategy
            .do_retry(Err(ErrorKind::TransientError))
            .expect("should retry");
        assert_eq!(strategy.ctx().retry_quota, 490);
        assert!(strategy.do_retry(Ok(())).is_none());
        assert_eq!(strategy.ctx().retry_quota, 500);
    }

    #[test]
    fn no_quota() {
        let mut conf = RetryConfig::default();
        conf.initial_retry_tokens = 5;
        let strategy = strategy(conf);
        let (strategy, dur) = strategy
            .do_retry(Err(ErrorKind::ServerError))
            .expect("should retry");
        assert_eq!(dur, Duration::from_secs(1));
        assert_eq!(strategy.ctx().retry_quota, 0);
        let no_retry = strategy.do_retry(Err(ErrorKind::ServerError));
        assert!(no_retry.is_none());
        assert_eq!(strategy.ctx().retry_quota, 0);
    }

    #[test]
    fn backoff_timing() {
        let strategy = strategy(RetryConfig::default().with_max_attempts(5));
        let mut strategy = strategy;
        for (expected_delay, expected_quota) in &[(1, 495), (2, 490), (4, 485), (8, 480)] {
            let (next, dur) = strategy
                .do_retry(Err(ErrorKind::ServerError))
                .expect("should retry");
            assert_eq!(dur, Duration::from_secs(*expected_delay));
            assert_eq!(next.ctx().retry_quota, *expected_quota);
            strategy = next;
        }
        let no_retry = strategy.do_retry(Err(ErrorKind::ServerError));
        assert!(no_retry.is_none());
        assert_eq!(strategy.ctx().retry_quota, 480);
    }

    #[test]
    fn max_backoff_time() {
        let strategy = strategy(
            RetryConfig::default()
                .with_max_attempts(5)
                .with_max_backoff(Duration::from_secs(3)),
        );
        let mut strategy = strategy;
        for expected_delay in &[1, 2, 3, 3] {
            let (next, dur) = strategy
                .do_retry(Err(ErrorKind::ServerError))
                .expect("should retry");
            assert_eq!(dur, Duration::from_secs(*expected_delay));
            strategy = next;
        }
        assert!(strategy.do_retry(Err(ErrorKind::ServerError)).is_none());
    }

    #[test]
    fn explicit_retries_respect_attempt_limit() {
        let strategy = strategy(RetryConfig::default());
        let (strategy, dur) = strategy
            .explicit_retry(Duration::from_millis(250))
            .expect("should retry");
        assert_eq!(dur, Duration::from_millis(250));
        assert_eq!(strategy.ctx().retry_quota, 500);
        let (strategy, _) = strategy
            .explicit_retry(Duration::from_millis(250))
            .expect("should retry");
        assert!(strategy.explicit_retry(Duration::from_millis(250)).is_none());
    }
}
