//! One player per algorithm, plus the structure workbench.

use std::collections::BTreeMap;

use algolab_steps::{generate_steps, presets, AlgorithmInput, AlgorithmKind};
use tokio::sync::Mutex;
use tracing::info;

use crate::error::{Error, Result};
use crate::events::{Frame, RandomFrame};
use crate::player::Player;
use crate::playback::PlaybackSpeed;
use crate::workbench::Workbench;

/// Everything the server exposes.
#[derive(Debug)]
pub struct Lab {
    players: BTreeMap<AlgorithmKind, Player>,
    workbench: Mutex<Workbench>,
}

impl Lab {
    /// Load every algorithm with its default input.
    pub fn new(speed: PlaybackSpeed) -> Result<Self> {
        let mut players = BTreeMap::new();
        for kind in AlgorithmKind::ALL {
            let trace = generate_steps(&AlgorithmInput::preset(kind))?;
            players.insert(kind, Player::new(trace, speed));
        }
        Ok(Self {
            players,
            workbench: Mutex::new(Workbench::new()),
        })
    }

    pub fn kinds(&self) -> impl Iterator<Item = AlgorithmKind> + '_ {
        self.players.keys().copied()
    }

    pub fn player(&self, kind: AlgorithmKind) -> Result<&Player> {
        self.players
            .get(&kind)
            .ok_or_else(|| Error::UnknownAlgorithm(kind.to_string()))
    }

    /// Resolve a URL slug to its player.
    pub fn player_by_slug(&self, slug: &str) -> Result<&Player> {
        let kind: AlgorithmKind = slug
            .parse()
            .map_err(Error::UnknownAlgorithm)?;
        self.player(kind)
    }

    /// Validate `input`, generate its trace and load it into the player for
    /// `kind`.
    pub async fn generate(&self, kind: AlgorithmKind, input: &AlgorithmInput) -> Result<Frame> {
        if input.kind() != kind {
            return Err(Error::KindMismatch {
                path: kind,
                input: input.kind(),
            });
        }
        let player = self.player(kind)?;
        let trace = generate_steps(input)?;
        info!("Generated {} steps for {}", trace.len(), kind);
        Ok(player.reset(trace).await)
    }

    /// Load a random array input for `kind`.
    pub async fn randomize(&self, kind: AlgorithmKind) -> Result<RandomFrame> {
        let input = AlgorithmInput::random(kind, &mut rand::thread_rng())
            .ok_or(Error::NoRandomInput(kind))?;
        let frame = self.generate(kind, &input).await?;
        Ok(RandomFrame {
            message: presets::RANDOM_MESSAGE,
            input,
            frame,
        })
    }

    pub fn workbench(&self) -> &Mutex<Workbench> {
        &self.workbench
    }
}
