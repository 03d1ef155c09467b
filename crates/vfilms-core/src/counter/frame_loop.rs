//! Cooperative frame pacing for [`CounterAnimator`]
//!
//! One tick per frame interval on the calling task, no background threads. Each frame is
//! published on a `watch` channel so the view always sees the latest numbers without
//! queueing stale ones. Cancellation is checked before every tick.

use super::animator::{CounterAnimator, CounterFrame};
use crate::clock::Clock;
use std::time::Duration;
use tokio::sync::watch;
use tokio::time::MissedTickBehavior;
use tokio_util::sync::CancellationToken;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopExit {
    /// Every counter reached its target
    Completed,
    Cancelled,
    /// `run` was called before the animator was triggered
    NotStarted,
}

pub struct FrameLoop<C: Clock> {
    clock: C,
    frame_interval: Duration,
    cancel: CancellationToken,
}

impl<C: Clock> FrameLoop<C> {
    pub fn new(clock: C, frame_interval: Duration) -> Self {
        Self {
            clock,
            frame_interval: frame_interval.max(Duration::from_millis(1)),
            cancel: CancellationToken::new(),
        }
    }

    /// Token the host cancels on teardown
    pub fn cancellation_token(&self) -> CancellationToken {
        self.cancel.clone()
    }

    pub fn cancel(&self) {
        self.cancel.cancel();
    }

    pub fn now_ms(&self) -> u64 {
        self.clock.now_ms()
    }

    /// Drives `animator` until it finishes or the loop is cancelled
    pub async fn run(
        &self,
        animator: &mut CounterAnimator,
        frames: &watch::Sender<CounterFrame>,
    ) -> LoopExit {
        if !animator.is_started() {
            return LoopExit::NotStarted;
        }

        let mut ticker = tokio::time::interval(self.frame_interval);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);

        loop {
            tokio::select! {
                biased;
                _ = self.cancel.cancelled() => {}
                _ = ticker.tick() => {}
            }
            if self.cancel.is_cancelled() {
                animator.cancel();
                log::debug!("frame loop cancelled");
                return LoopExit::Cancelled;
            }

            let now = self.clock.now_ms();
            let more = animator.tick(now);
            frames.send_replace(animator.frame(now));
            if !more {
                log::debug!("frame loop finished at {}ms", now);
                return LoopExit::Completed;
            }
        }
    }
}
