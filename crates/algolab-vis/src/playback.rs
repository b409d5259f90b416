//! Playback controls for a recorded trace.
//!
//! [`Playback`] owns the cursor. Every transition that should cancel a
//! running auto-advance timer bumps the epoch; a timer tick carrying an
//! older epoch is ignored, so a stale timer can never move the cursor of a
//! newer trace.

use std::str::FromStr;
use std::time::Duration;

use algolab_steps::{AlgorithmKind, Step, Trace};
use serde::{Deserialize, Serialize};

/// Auto-advance interval presets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum PlaybackSpeed {
    /// 2 s per step
    Slow,
    /// 1 s per step
    #[default]
    Medium,
    /// 500 ms per step
    Fast,
    /// 250 ms per step
    VeryFast,
}

impl PlaybackSpeed {
    pub const ALL: [PlaybackSpeed; 4] = [
        PlaybackSpeed::Slow,
        PlaybackSpeed::Medium,
        PlaybackSpeed::Fast,
        PlaybackSpeed::VeryFast,
    ];

    /// Milliseconds between automatic steps.
    pub fn interval_ms(self) -> u64 {
        match self {
            PlaybackSpeed::Slow => 2000,
            PlaybackSpeed::Medium => 1000,
            PlaybackSpeed::Fast => 500,
            PlaybackSpeed::VeryFast => 250,
        }
    }

    pub fn interval(self) -> Duration {
        Duration::from_millis(self.interval_ms())
    }
}

impl FromStr for PlaybackSpeed {
    type Err = String;

    /// Accepts the variant name in any case, or `very-fast` / `very_fast`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .chars()
            .filter(|c| !matches!(c, '-' | '_' | ' '))
            .collect::<String>()
            .to_ascii_lowercase();
        match normalized.as_str() {
            "slow" => Ok(PlaybackSpeed::Slow),
            "medium" => Ok(PlaybackSpeed::Medium),
            "fast" => Ok(PlaybackSpeed::Fast),
            "veryfast" => Ok(PlaybackSpeed::VeryFast),
            _ => Err(format!("unknown playback speed: {}", s)),
        }
    }
}

/// Current state of playback.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlaybackState {
    /// Waiting for manual navigation or `play`
    Stopped,
    /// Advancing on a timer
    Playing,
}

/// Token identifying one play session.
pub type Epoch = u64;

/// Result of a timer tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// Cursor moved forward by one.
    Advanced,
    /// Cursor was already on the last step; playback stopped.
    Finished,
    /// The tick belongs to an older session, or playback is stopped.
    Stale,
}

/// Cursor over a trace with play/pause state.
#[derive(Debug, Clone)]
pub struct Playback {
    trace: Trace,
    cursor: usize,
    state: PlaybackState,
    speed: PlaybackSpeed,
    epoch: Epoch,
}

impl Playback {
    /// Create a stopped playback at the first step.
    pub fn new(trace: Trace) -> Self {
        Self::with_speed(trace, PlaybackSpeed::default())
    }

    /// Create a stopped playback at the first step with the given speed.
    pub fn with_speed(trace: Trace, speed: PlaybackSpeed) -> Self {
        Self {
            trace,
            cursor: 0,
            state: PlaybackState::Stopped,
            speed,
            epoch: 0,
        }
    }

    /// Get the current step index.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Get the total number of steps.
    pub fn len(&self) -> usize {
        self.trace.len()
    }

    /// Check if the trace has no steps.
    pub fn is_empty(&self) -> bool {
        self.trace.is_empty()
    }

    /// Get the playback state.
    pub fn state(&self) -> PlaybackState {
        self.state
    }

    /// Get the playback speed.
    pub fn speed(&self) -> PlaybackSpeed {
        self.speed
    }

    /// Get the current session token.
    pub fn epoch(&self) -> Epoch {
        self.epoch
    }

    /// Get the loaded trace.
    pub fn trace(&self) -> &Trace {
        &self.trace
    }

    /// Get the algorithm of the loaded trace.
    pub fn algorithm(&self) -> AlgorithmKind {
        self.trace.algorithm()
    }

    /// The step under the cursor.
    pub fn current_step(&self) -> &Step {
        &self.trace[self.cursor]
    }

    /// Check if the cursor is on the first step.
    pub fn is_at_start(&self) -> bool {
        self.cursor == 0
    }

    /// Check if the cursor is on the last step.
    pub fn is_at_end(&self) -> bool {
        self.cursor + 1 >= self.trace.len()
    }

    /// Load a new trace: cursor to 0, stopped, and any running timer
    /// invalidated.
    pub fn reset(&mut self, trace: Trace) {
        self.trace = trace;
        self.cursor = 0;
        self.stop();
    }

    /// Move one step forward. Stops auto-play first.
    pub fn step_forward(&mut self) -> Option<&Step> {
        self.stop_if_playing();
        if self.is_at_end() {
            return None;
        }
        self.cursor += 1;
        Some(self.current_step())
    }

    /// Move one step back. Stops auto-play first.
    pub fn step_backward(&mut self) -> Option<&Step> {
        self.stop_if_playing();
        if self.is_at_start() {
            return None;
        }
        self.cursor -= 1;
        Some(self.current_step())
    }

    /// Jump to `index`, clamped to the last step. Stops auto-play.
    pub fn seek(&mut self, index: usize) -> &Step {
        self.stop_if_playing();
        self.cursor = index.min(self.trace.len() - 1);
        self.current_step()
    }

    /// Start auto-play and return the epoch the timer must present.
    ///
    /// Playing from the last step starts over from the first.
    pub fn play(&mut self) -> Epoch {
        if self.is_at_end() {
            self.cursor = 0;
        }
        self.state = PlaybackState::Playing;
        self.epoch += 1;
        self.epoch
    }

    /// Stop auto-play.
    pub fn pause(&mut self) {
        self.stop();
    }

    /// Advance on behalf of the timer that was started with `epoch`.
    pub fn tick(&mut self, epoch: Epoch) -> TickOutcome {
        if epoch != self.epoch || self.state != PlaybackState::Playing {
            return TickOutcome::Stale;
        }
        if self.is_at_end() {
            self.stop();
            return TickOutcome::Finished;
        }
        self.cursor += 1;
        TickOutcome::Advanced
    }

    /// Change the interval. While playing this starts a new session, so the
    /// caller must restart its timer with the returned epoch.
    pub fn set_speed(&mut self, speed: PlaybackSpeed) -> Option<Epoch> {
        self.speed = speed;
        if self.state == PlaybackState::Playing {
            self.epoch += 1;
            Some(self.epoch)
        } else {
            None
        }
    }

    /// Position as a fraction of the trace (0.0 - 1.0).
    pub fn progress(&self) -> f64 {
        if self.trace.len() <= 1 {
            1.0
        } else {
            self.cursor as f64 / (self.trace.len() - 1) as f64
        }
    }

    /// Get a snapshot for the frontend.
    pub fn status(&self) -> PlaybackStatus {
        PlaybackStatus::from(self)
    }

    fn stop(&mut self) {
        self.state = PlaybackState::Stopped;
        self.epoch += 1;
    }

    fn stop_if_playing(&mut self) {
        if self.state == PlaybackState::Playing {
            self.stop();
        }
    }
}

/// Playback status for sending to the frontend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlaybackStatus {
    pub algorithm: AlgorithmKind,
    pub cursor: usize,
    pub total_steps: usize,
    pub state: PlaybackState,
    pub speed: PlaybackSpeed,
    pub interval_ms: u64,
    pub progress: f64,
    pub at_start: bool,
    pub at_end: bool,
}

impl From<&Playback> for PlaybackStatus {
    fn from(playback: &Playback) -> Self {
        Self {
            algorithm: playback.algorithm(),
            cursor: playback.cursor,
            total_steps: playback.len(),
            state: playback.state,
            speed: playback.speed,
            interval_ms: playback.speed.interval_ms(),
            progress: playback.progress(),
            at_start: playback.is_at_start(),
            at_end: playback.is_at_end(),
        }
    }
}
