//! AlgoLab Visualization
//!
//! Step-by-step playback of recorded algorithm traces with REST and
//! WebSocket controls.
//!
//! # Architecture
//!
//! - **Playback**: Cursor over a trace with speed and play/pause state
//! - **Player**: Drives a playback on a timer and broadcasts every frame
//! - **Lab**: One player per algorithm plus the structure workbench
//! - **WebSocket**: Streams frames and accepts playback commands
//! - **REST API**: Generate traces from custom input, navigate, inspect
//!
//! # Usage
//!
//! ```ignore
//! let config = VisConfig::from_env()?;
//! let server = VisServer::from_config(&config)?;
//! server.serve(config.addr).await?;
//! ```

mod config;
mod error;
mod events;
mod lab;
mod playback;
mod player;
mod server;
mod workbench;

pub use config::VisConfig;
pub use error::{Error, Result};
pub use events::{Direction, Frame, RandomFrame, WsCommand, WsEvent};
pub use lab::Lab;
pub use playback::{Epoch, Playback, PlaybackSpeed, PlaybackState, PlaybackStatus, TickOutcome};
pub use player::Player;
pub use server::VisServer;
pub use workbench::{StructureKind, StructureView, Workbench};

#[cfg(test)]
mod tests {
    use super::*;
    use algolab_steps::{generate_steps, AlgorithmInput, AlgorithmKind};

    fn preset(kind: AlgorithmKind) -> Playback {
        Playback::new(generate_steps(&AlgorithmInput::preset(kind)).unwrap())
    }

    #[test]
    fn playback_can_seek() {
        let mut playback = preset(AlgorithmKind::Dijkstra);
        let total = playback.len();

        assert_eq!(playback.cursor(), 0);

        playback.seek(total / 2);
        assert_eq!(playback.cursor(), total / 2);

        playback.seek(total - 1);
        assert!(playback.is_at_end());
        assert!(playback.current_step().complete);
    }

    #[test]
    fn playback_respects_bounds() {
        let mut playback = preset(AlgorithmKind::BinarySearch);
        let total = playback.len();

        // Can't seek past end
        playback.seek(1000);
        assert_eq!(playback.cursor(), total - 1);

        // Can't step before start
        playback.seek(0);
        assert!(playback.step_backward().is_none());
        assert_eq!(playback.cursor(), 0);
    }

    #[test]
    fn frames_serialize_for_the_frontend() {
        let playback = preset(AlgorithmKind::SelectionSort);
        let event = WsEvent::Frame(Frame::from(&playback));
        let json = serde_json::to_value(&event).unwrap();

        assert_eq!(json["type"], "frame");
        assert_eq!(json["status"]["algorithm"], "selection-sort");
        assert_eq!(json["step"]["state"]["kind"], "sort");
    }
}
