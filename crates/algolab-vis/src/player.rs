//! Async driver that advances a [`Playback`] on a timer.
//!
//! The playback sits behind one lock. The timer task and every control
//! call take the write lock for each transition, so cursor updates are
//! serialized and the epoch check in [`Playback::tick`] sees the latest
//! session.

use std::sync::Arc;
use std::time::Duration;

use algolab_steps::{AlgorithmKind, Step, Trace};
use tokio::sync::{broadcast, RwLock};
use tokio::time::MissedTickBehavior;
use tracing::debug;

use crate::events::{Direction, Frame};
use crate::playback::{Epoch, Playback, PlaybackSpeed, PlaybackStatus, TickOutcome};

/// Frames buffered per subscriber before it starts lagging.
const FRAME_BUFFER: usize = 64;

/// Cloneable handle to one playback and its auto-advance timer.
#[derive(Debug, Clone)]
pub struct Player {
    playback: Arc<RwLock<Playback>>,
    frames: broadcast::Sender<Frame>,
}

impl Player {
    pub fn new(trace: Trace, speed: PlaybackSpeed) -> Self {
        let (frames, _) = broadcast::channel(FRAME_BUFFER);
        Self {
            playback: Arc::new(RwLock::new(Playback::with_speed(trace, speed))),
            frames,
        }
    }

    /// Receive every frame published after this call.
    pub fn subscribe(&self) -> broadcast::Receiver<Frame> {
        self.frames.subscribe()
    }

    /// Current status and step together.
    pub async fn frame(&self) -> Frame {
        Frame::from(&*self.playback.read().await)
    }

    pub async fn status(&self) -> PlaybackStatus {
        self.playback.read().await.status()
    }

    pub async fn current_step(&self) -> Step {
        self.playback.read().await.current_step().clone()
    }

    /// A copy of the loaded trace.
    pub async fn trace(&self) -> Trace {
        self.playback.read().await.trace().clone()
    }

    pub async fn algorithm(&self) -> AlgorithmKind {
        self.playback.read().await.algorithm()
    }

    /// Swap in a freshly generated trace.
    pub async fn reset(&self, trace: Trace) -> Frame {
        let mut playback = self.playback.write().await;
        playback.reset(trace);
        debug!("Player reset to {} steps", playback.len());
        self.publish(&playback)
    }

    pub async fn step(&self, direction: Direction) -> Frame {
        let mut playback = self.playback.write().await;
        let moved = match direction {
            Direction::Forward => playback.step_forward().is_some(),
            Direction::Backward => playback.step_backward().is_some(),
        };
        if !moved {
            debug!("Step {:?} ignored at cursor {}", direction, playback.cursor());
        }
        self.publish(&playback)
    }

    pub async fn step_forward(&self) -> Frame {
        self.step(Direction::Forward).await
    }

    pub async fn step_backward(&self) -> Frame {
        self.step(Direction::Backward).await
    }

    pub async fn seek(&self, index: usize) -> Frame {
        let mut playback = self.playback.write().await;
        playback.seek(index);
        self.publish(&playback)
    }

    /// Back to the first step, stopped.
    pub async fn rewind(&self) -> Frame {
        self.seek(0).await
    }

    /// Start auto-play and spawn the timer for the new session.
    pub async fn play(&self) -> Frame {
        let mut playback = self.playback.write().await;
        let epoch = playback.play();
        self.spawn_ticker(epoch, playback.speed().interval());
        debug!("Playing from step {} (epoch {})", playback.cursor(), epoch);
        self.publish(&playback)
    }

    pub async fn pause(&self) -> Frame {
        let mut playback = self.playback.write().await;
        playback.pause();
        debug!("Paused at step {}", playback.cursor());
        self.publish(&playback)
    }

    /// Change speed; a running timer is replaced by one at the new interval.
    pub async fn set_speed(&self, speed: PlaybackSpeed) -> Frame {
        let mut playback = self.playback.write().await;
        if let Some(epoch) = playback.set_speed(speed) {
            self.spawn_ticker(epoch, speed.interval());
        }
        self.publish(&playback)
    }

    fn publish(&self, playback: &Playback) -> Frame {
        let frame = Frame::from(playback);
        // No subscribers is fine; the frame is still returned to the caller.
        let _ = self.frames.send(frame.clone());
        frame
    }

    fn spawn_ticker(&self, epoch: Epoch, period: Duration) {
        let player = self.clone();
        tokio::spawn(async move {
            let mut ticker = tokio::time::interval(period);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
            // The first tick completes immediately.
            ticker.tick().await;

            loop {
                ticker.tick().await;
                let mut playback = player.playback.write().await;
                match playback.tick(epoch) {
                    TickOutcome::Advanced => {
                        player.publish(&playback);
                    }
                    TickOutcome::Finished => {
                        debug!("Playback finished at step {}", playback.cursor());
                        player.publish(&playback);
                        break;
                    }
                    TickOutcome::Stale => break,
                }
            }
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::playback::PlaybackState;
    use algolab_steps::{SelectionSort, StepGenerator};
    use tokio::time::sleep;
    use tokio_test::{assert_err, assert_ok};

    /// Four steps.
    fn sort_trace() -> Trace {
        SelectionSort::new(vec![5, 2, 9, 1, 5]).generate()
    }

    /// Two steps.
    fn short_trace() -> Trace {
        SelectionSort::new(vec![2, 1]).generate()
    }

    fn ms(millis: u64) -> Duration {
        Duration::from_millis(millis)
    }

    #[tokio::test(start_paused = true)]
    async fn auto_advance_follows_interval() {
        let player = Player::new(sort_trace(), PlaybackSpeed::Medium);
        player.play().await;

        sleep(ms(500)).await;
        assert_eq!(player.status().await.cursor, 0);

        sleep(ms(1000)).await;
        assert_eq!(player.status().await.cursor, 1);

        sleep(ms(2000)).await;
        assert_eq!(player.status().await.cursor, 3);
        assert_eq!(player.status().await.state, PlaybackState::Playing);

        sleep(ms(1000)).await;
        let status = player.status().await;
        assert_eq!(status.cursor, 3);
        assert_eq!(status.state, PlaybackState::Stopped);
    }

    #[tokio::test(start_paused = true)]
    async fn reset_cancels_running_timer() {
        let player = Player::new(sort_trace(), PlaybackSpeed::Fast);
        player.play().await;
        sleep(ms(750)).await;
        assert_eq!(player.status().await.cursor, 1);

        player.reset(short_trace()).await;
        sleep(ms(5000)).await;

        let status = player.status().await;
        assert_eq!(status.cursor, 0);
        assert_eq!(status.total_steps, 2);
        assert_eq!(status.state, PlaybackState::Stopped);
    }

    #[tokio::test(start_paused = true)]
    async fn pause_and_manual_steps_stop_the_timer() {
        let player = Player::new(sort_trace(), PlaybackSpeed::VeryFast);
        player.play().await;
        sleep(ms(300)).await;
        player.pause().await;
        sleep(ms(2000)).await;
        assert_eq!(player.status().await.cursor, 1);

        player.play().await;
        player.step_backward().await;
        sleep(ms(2000)).await;
        let status = player.status().await;
        assert_eq!(status.cursor, 0);
        assert_eq!(status.state, PlaybackState::Stopped);
    }

    #[tokio::test(start_paused = true)]
    async fn speed_change_restarts_timer() {
        let player = Player::new(sort_trace(), PlaybackSpeed::Slow);
        player.play().await;
        sleep(ms(100)).await;

        player.set_speed(PlaybackSpeed::VeryFast).await;
        sleep(ms(600)).await;
        assert_eq!(player.status().await.cursor, 2);
        assert_eq!(player.status().await.speed, PlaybackSpeed::VeryFast);
    }

    #[tokio::test]
    async fn frames_are_published() {
        let player = Player::new(sort_trace(), PlaybackSpeed::Medium);
        let mut frames = player.subscribe();
        assert_err!(frames.try_recv());

        player.step_forward().await;
        let frame = assert_ok!(frames.try_recv());
        assert_eq!(frame.status.cursor, 1);
        assert_eq!(frame.step.message, "Swapped 5 (index 0) with 1 (index 3).");

        player.seek(99).await;
        assert_eq!(assert_ok!(frames.try_recv()).status.cursor, 3);

        player.rewind().await;
        assert_eq!(assert_ok!(frames.try_recv()).step.index, 0);
    }

    #[tokio::test]
    async fn manual_steps_stay_in_bounds() {
        let player = Player::new(short_trace(), PlaybackSpeed::Medium);

        assert_eq!(player.step_backward().await.status.cursor, 0);
        assert_eq!(player.step_forward().await.status.cursor, 1);
        assert_eq!(player.step_forward().await.status.cursor, 1);
        assert!(player.current_step().await.complete);
    }
}
