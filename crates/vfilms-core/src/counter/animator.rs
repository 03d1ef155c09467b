//! Count-up animation for the stats section
//!
//! Every counter eases from zero to its target over its own duration, starting after its
//! own delay relative to the visibility trigger. The animator holds no timers of its own:
//! the host calls [`CounterAnimator::tick`] once per frame with the current time and reads
//! [`CounterAnimator::readings`] back. Triggering is one-shot per configuration, and once
//! [`CounterAnimator::cancel`] has been called no later tick changes anything.

use super::easing::ease_out_quad;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CounterSpec {
    pub target: u64,
    pub duration_ms: u64,
    #[serde(default)]
    pub start_delay_ms: u64,
}

impl CounterSpec {
    pub fn new(target: u64, duration_ms: u64, start_delay_ms: u64) -> Self {
        Self {
            target,
            duration_ms,
            start_delay_ms,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CounterPhase {
    /// Not triggered yet, or still inside its start delay
    Pending,
    Running,
    Complete,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CounterReading {
    pub key: String,
    pub current: u64,
    pub target: u64,
    pub phase: CounterPhase,
}

/// Snapshot published to the view once per frame
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CounterFrame {
    pub at_ms: u64,
    pub readings: Vec<CounterReading>,
    pub finished: bool,
}

#[derive(Debug, Clone)]
struct CounterTrack {
    key: String,
    spec: CounterSpec,
    current: u64,
    start_at_ms: Option<u64>,
    phase: CounterPhase,
}

impl CounterTrack {
    fn new(key: String, mut spec: CounterSpec) -> Self {
        if spec.duration_ms == 0 {
            log::warn!("counter '{}' configured with zero duration, using 1ms", key);
            spec.duration_ms = 1;
        }
        Self {
            key,
            spec,
            current: 0,
            start_at_ms: None,
            phase: CounterPhase::Pending,
        }
    }

    fn advance(&mut self, now_ms: u64) {
        if self.phase == CounterPhase::Complete {
            return;
        }
        let Some(start_at) = self.start_at_ms else {
            return;
        };
        if now_ms < start_at {
            return;
        }

        let elapsed = now_ms - start_at;
        let progress = (elapsed as f64 / self.spec.duration_ms as f64).min(1.0);
        if progress >= 1.0 || self.spec.target == 0 {
            self.current = self.spec.target;
            self.phase = CounterPhase::Complete;
            log::debug!("counter '{}' reached {}", self.key, self.spec.target);
            return;
        }

        let eased = ease_out_quad(progress);
        let value = ((self.spec.target as f64) * eased).floor() as u64;
        // a late frame carrying an older timestamp must not pull the number back
        self.current = self.current.max(value.min(self.spec.target));
        self.phase = CounterPhase::Running;
    }

    fn reading(&self) -> CounterReading {
        CounterReading {
            key: self.key.clone(),
            current: self.current,
            target: self.spec.target,
            phase: self.phase,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct CounterAnimator {
    tracks: Vec<CounterTrack>,
    triggered_at_ms: Option<u64>,
    cancelled: bool,
}

impl CounterAnimator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds an animator already configured with `counters`
    pub fn with_counters<K, I>(counters: I) -> Self
    where
        K: Into<String>,
        I: IntoIterator<Item = (K, CounterSpec)>,
    {
        let mut animator = Self::new();
        animator.configure(counters);
        animator
    }

    /// Replaces the counter set and returns to the untriggered state. Order is kept;
    /// a repeated key overwrites the earlier entry in place.
    pub fn configure<K, I>(&mut self, counters: I)
    where
        K: Into<String>,
        I: IntoIterator<Item = (K, CounterSpec)>,
    {
        self.tracks.clear();
        self.triggered_at_ms = None;
        self.cancelled = false;

        for (key, spec) in counters {
            let key = key.into();
            let track = CounterTrack::new(key.clone(), spec);
            match self.tracks.iter_mut().find(|t| t.key == key) {
                Some(existing) => *existing = track,
                None => self.tracks.push(track),
            }
        }
        log::debug!("configured {} counter(s)", self.tracks.len());
    }

    /// Starts every counter relative to `now_ms`. Only the first call has an effect;
    /// returns whether this call started the animation.
    pub fn on_visible(&mut self, now_ms: u64) -> bool {
        if self.triggered_at_ms.is_some() || self.cancelled {
            return false;
        }
        self.triggered_at_ms = Some(now_ms);
        for track in &mut self.tracks {
            track.start_at_ms = Some(now_ms.saturating_add(track.spec.start_delay_ms));
        }
        log::debug!("counters triggered at {}ms", now_ms);
        true
    }

    /// Advances every started counter to `now_ms`. Returns true while another frame is needed.
    pub fn tick(&mut self, now_ms: u64) -> bool {
        if self.cancelled || self.triggered_at_ms.is_none() {
            return false;
        }
        for track in &mut self.tracks {
            track.advance(now_ms);
        }
        !self.is_finished()
    }

    /// Stops the animation where it is. Safe before a trigger and safe to repeat.
    pub fn cancel(&mut self) {
        if !self.cancelled {
            log::debug!("counter animation cancelled");
        }
        self.cancelled = true;
    }

    pub fn is_started(&self) -> bool {
        self.triggered_at_ms.is_some()
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled
    }

    pub fn is_finished(&self) -> bool {
        self.is_started()
            && self
                .tracks
                .iter()
                .all(|t| t.phase == CounterPhase::Complete)
    }

    pub fn current(&self, key: &str) -> Option<u64> {
        self.tracks.iter().find(|t| t.key == key).map(|t| t.current)
    }

    pub fn readings(&self) -> Vec<CounterReading> {
        self.tracks.iter().map(CounterTrack::reading).collect()
    }

    pub fn frame(&self, at_ms: u64) -> CounterFrame {
        CounterFrame {
            at_ms,
            readings: self.readings(),
            finished: self.is_finished(),
        }
    }
}
