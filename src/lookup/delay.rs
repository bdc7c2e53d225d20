use async_trait::async_trait;
use std::time::Duration;

/// Suspends the caller for a while without blocking the worker thread.
#[async_trait]
pub trait Delay: Send + Sync {
    async fn wait(&self, duration: Duration);
}

/// Real wall-clock wait on the tokio timer.
pub struct TokioDelay;

#[async_trait]
impl Delay for TokioDelay {
    async fn wait(&self, duration: Duration) {
        tokio::time::sleep(duration).await;
    }
}

/// Returns at once, whatever the duration.
pub struct Immediate;

#[async_trait]
impl Delay for Immediate {
    async fn wait(&self, _duration: Duration) {}
}
