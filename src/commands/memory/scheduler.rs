use std::future::Future;
use std::pin::Pin;
use std::time::Duration;

/// Hands out one-shot timers for deferred board resolution.
pub trait Scheduler {
    type Timer: Future<Output = ()> + Unpin + Send;

    fn schedule(&self, delay: Duration) -> Self::Timer;
}

#[derive(Clone, Copy, Debug, Default)]
pub struct TokioScheduler;

impl Scheduler for TokioScheduler {
    type Timer = Pin<Box<tokio::time::Sleep>>;

    fn schedule(&self, delay: Duration) -> Self::Timer {
        Box::pin(tokio::time::sleep(delay))
    }
}

/// Fires every timer right away, ignoring the delay.
#[cfg(test)]
#[derive(Clone, Copy, Debug, Default)]
pub struct Immediate;

#[cfg(test)]
impl Scheduler for Immediate {
    type Timer = std::future::Ready<()>;

    fn schedule(&self, _: Duration) -> Self::Timer {
        std::future::ready(())
    }
}
