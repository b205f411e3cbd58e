//! Browser timers behind the forms crate's `Timer` and `Scheduler` ports

use async_trait::async_trait;
use gloo_timers::callback::Timeout;
use gloo_timers::future::TimeoutFuture;
use greencape_forms::{Scheduler, Timer};
use std::time::Duration;

/// `setTimeout` takes a 32-bit millisecond count
pub(crate) fn millis(delay: Duration) -> u32 {
    u32::try_from(delay.as_millis()).unwrap_or(u32::MAX)
}

/// Awaitable `setTimeout`
#[derive(Debug, Clone, Copy, Default)]
pub struct GlooTimer;

#[async_trait(?Send)]
impl Timer for GlooTimer {
    async fn sleep(&self, delay: Duration) {
        TimeoutFuture::new(millis(delay)).await;
    }
}

/// Fire-and-forget `setTimeout`
#[derive(Debug, Clone, Copy, Default)]
pub struct GlooScheduler;

impl Scheduler for GlooScheduler {
    fn schedule(&self, delay: Duration, task: Box<dyn FnOnce()>) {
        Timeout::new(millis(delay), task).forget();
    }
}
