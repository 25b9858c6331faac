// Cancellable periodic jobs
use std::future::Future;
use std::time::Duration;
use tokio::task::JoinHandle;
use tokio::time::{interval_at, Instant, MissedTickBehavior};
use tokio_util::sync::CancellationToken;

/// Periodic timers and one-off background jobs that all stop on `shutdown`.
///
/// Each tick starts a fresh job without waiting for the previous one, so slow
/// jobs may overlap. Running jobs are cancelled on shutdown as well.
pub struct Scheduler {
    token: CancellationToken,
    timers: Vec<JoinHandle<()>>,
}

impl Scheduler {
    pub fn new() -> Self {
        Self {
            token: CancellationToken::new(),
            timers: Vec::new(),
        }
    }

    /// Runs `job` every `period`, first one period from now.
    pub fn every<F, Fut>(&mut self, name: &'static str, period: Duration, job: F)
    where
        F: Fn() -> Fut + Send + Sync + 'static,
        Fut: Future<Output = ()> + Send + 'static,
    {
        if period.is_zero() {
            tracing::warn!("Timer {} has a zero period, not scheduling it", name);
            return;
        }

        let token = self.token.clone();
        let handle = tokio::spawn(async move {
            let mut ticks = interval_at(Instant::now() + period, period);
            ticks.set_missed_tick_behavior(MissedTickBehavior::Delay);

            loop {
                tokio::select! {
                    _ = token.cancelled() => break,
                    _ = ticks.tick() => {
                        tracing::debug!("Timer {} fired", name);
                        let run = job();
                        let token = token.clone();
                        tokio::spawn(async move {
                            tokio::select! {
                                _ = token.cancelled() => {}
                                _ = run => {}
                            }
                        });
                    }
                }
            }

            tracing::debug!("Timer {} stopped", name);
        });

        self.timers.push(handle);
    }

    /// Runs `job` once in the background; it is cancelled on shutdown if still running.
    pub fn spawn<Fut>(&self, name: &'static str, job: Fut)
    where
        Fut: Future<Output = ()> + Send + 'static,
    {
        let token = self.token.clone();
        tokio::spawn(async move {
            tokio::select! {
                _ = token.cancelled() => tracing::debug!("Job {} cancelled", name),
                _ = job => {}
            }
        });
    }

    pub fn timer_count(&self) -> usize {
        self.timers.len()
    }

    pub async fn shutdown(self) {
        self.token.cancel();
        for timer in self.timers {
            if let Err(e) = timer.await {
                tracing::warn!("Timer task ended abnormally: {}", e);
            }
        }
    }
}

impl Default for Scheduler {
    fn default() -> Self {
        Self::new()
    }
}
