use std::future::Future;
use std::time::Duration;
use tracing::{debug, warn};

#[cfg(feature = "config")]
use core_config::{env_parse, ConfigError, FromEnv};

/// Default number of readiness attempts before giving up.
pub const DEFAULT_MAX_ATTEMPTS: u32 = 20;

/// Default pause between readiness attempts, in milliseconds.
pub const DEFAULT_DELAY_MS: u64 = 1500;

/// Fixed-delay retry policy for store operations.
///
/// `max_attempts` counts every call of the operation, including the first
/// one, so a policy of `fixed(3, ..)` runs the operation at most three times.
#[derive(Debug, Clone, PartialEq)]
pub struct RetryConfig {
    /// Total number of attempts (minimum 1)
    pub max_attempts: u32,

    /// Pause between attempts in milliseconds
    pub delay_ms: u64,
}

impl RetryConfig {
    /// Up to `max_attempts` calls, `delay` between each.
    pub fn fixed(max_attempts: u32, delay: Duration) -> Self {
        Self {
            max_attempts: max_attempts.max(1),
            delay_ms: delay.as_millis() as u64,
        }
    }

    pub fn delay(&self) -> Duration {
        Duration::from_millis(self.delay_ms)
    }
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self::fixed(DEFAULT_MAX_ATTEMPTS, Duration::from_millis(DEFAULT_DELAY_MS))
    }
}

/// Load the readiness retry policy from environment variables
///
/// - `DB_READY_MAX_ATTEMPTS` (optional, default: 20)
/// - `DB_READY_DELAY_MS` (optional, default: 1500)
#[cfg(feature = "config")]
impl FromEnv for RetryConfig {
    fn from_env() -> Result<Self, ConfigError> {
        let max_attempts: u32 =
            env_parse("DB_READY_MAX_ATTEMPTS", &DEFAULT_MAX_ATTEMPTS.to_string())?;
        let delay_ms: u64 = env_parse("DB_READY_DELAY_MS", &DEFAULT_DELAY_MS.to_string())?;

        if max_attempts == 0 {
            return Err(ConfigError::ParseError {
                key: "DB_READY_MAX_ATTEMPTS".to_string(),
                details: "must be at least 1".to_string(),
            });
        }

        Ok(Self::fixed(max_attempts, Duration::from_millis(delay_ms)))
    }
}

/// Retry an async operation according to `config`.
///
/// Returns the first success, or the error of the last attempt once
/// `config.max_attempts` calls have failed.
///
/// # Example
/// ```ignore
/// use database::common::{retry_with_backoff, RetryConfig};
/// use std::time::Duration;
///
/// let config = RetryConfig::fixed(5, Duration::from_millis(500));
/// retry_with_backoff(|| database::postgres::check_health(&db), config).await?;
/// ```
pub async fn retry_with_backoff<F, Fut, T, E>(mut operation: F, config: RetryConfig) -> Result<T, E>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, E>>,
    E: std::fmt::Display,
{
    let max_attempts = config.max_attempts.max(1);
    let mut attempt = 0;

    loop {
        attempt += 1;

        match operation().await {
            Ok(result) => {
                if attempt > 1 {
                    debug!(attempt, "Operation succeeded after retrying");
                }
                return Ok(result);
            }
            Err(e) => {
                if attempt >= max_attempts {
                    warn!(attempts = attempt, error = %e, "Operation failed, giving up");
                    return Err(e);
                }

                let delay = config.delay();

                debug!(
                    "Operation failed (attempt {}/{}): {}. Retrying in {}ms...",
                    attempt,
                    max_attempts,
                    e,
                    delay.as_millis()
                );

                tokio::time::sleep(delay).await;
            }
        }
    }
}
