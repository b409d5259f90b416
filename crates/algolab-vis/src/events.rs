//! Messages exchanged with the frontend.

use algolab_steps::{AlgorithmInput, Step};
use serde::{Deserialize, Serialize};

use crate::playback::{Playback, PlaybackSpeed, PlaybackStatus};

/// What a renderer needs after any transition: the status bar and the step
/// to draw.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Frame {
    pub status: PlaybackStatus,
    pub step: Step,
}

impl From<&Playback> for Frame {
    fn from(playback: &Playback) -> Self {
        Self {
            status: playback.status(),
            step: playback.current_step().clone(),
        }
    }
}

/// A freshly loaded random input and the first frame of its trace.
#[derive(Debug, Clone, Serialize)]
pub struct RandomFrame {
    pub message: &'static str,
    pub input: AlgorithmInput,
    pub frame: Frame,
}

/// Direction of a manual step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    Forward,
    Backward,
}

/// Commands a WebSocket client may send.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum WsCommand {
    Play,
    Pause,
    Rewind,
    Forward,
    Backward,
    Seek { index: usize },
    Speed { speed: PlaybackSpeed },
}

/// Messages pushed to a WebSocket client.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum WsEvent {
    /// Playback moved or changed state
    Frame(Frame),
    /// The client sent something we could not act on
    Error { message: String },
}
