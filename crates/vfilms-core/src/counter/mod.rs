//! Stats counters: named figures that count up from zero once the section scrolls into view

pub mod animator;
pub mod easing;
pub mod frame_loop;

pub use animator::{CounterAnimator, CounterFrame, CounterPhase, CounterReading, CounterSpec};
pub use easing::ease_out_quad;
pub use frame_loop::{FrameLoop, LoopExit};
