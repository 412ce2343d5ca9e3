pub mod audacious;
pub mod error;
pub mod traits;

use crate::remote::CommandExecutor;
use serde::{Deserialize, Serialize};
use std::fmt;

pub use audacious::AudaciousPlayer;
pub use error::{PlayerError, Result};
pub use traits::{
    format_duration, PlaybackState, Player, PlayerStatus, Song, SongTime, Tag, SONG_DELIMITER,
    SONG_TEMPLATE,
};

/// Default step for `volume_up` / `volume_down`.
pub const VOLUME_INCREMENT: i64 = 5;

/// Player programs we know how to drive.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum Backend {
    /// Audacious, through `audtool`
    #[default]
    Audacious,
}

impl Backend {
    /// Build the player for this backend on top of `executor`.
    pub fn connect<E>(self, executor: E, volume_step: i64) -> Box<dyn Player>
    where
        E: CommandExecutor + 'static,
    {
        match self {
            Backend::Audacious => {
                Box::new(AudaciousPlayer::new(executor).with_volume_step(volume_step))
            }
        }
    }
}

impl fmt::Display for Backend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Backend::Audacious => f.write_str("audacious"),
        }
    }
}
