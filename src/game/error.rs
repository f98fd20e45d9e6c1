/// Recoverable conditions reported by [`Game`](super::Game).
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("invalid pin count {pins} in frame {frame}")]
    InvalidPinCount { pins: u32, frame: u32 },
    #[error("game is complete, no more throws can be recorded")]
    GameComplete,
    #[error("frame {frame} cannot be scored yet: a throw it depends on has not been recorded")]
    IncompleteFrame { frame: u32 },
    #[error("frame {0} is out of range (a game has 10 frames)")]
    FrameOutOfRange(u32),
}
