use std::time::Duration;

use async_trait::async_trait;

/// Monotonic time source and sleeper for poll loops.
#[async_trait]
pub trait Clock: Send + Sync {
    /// Time since an arbitrary fixed origin.
    fn now(&self) -> Duration;

    async fn sleep(&self, duration: Duration);
}
