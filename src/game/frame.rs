use serde::Serialize;

use super::engine::{Game, ALL_PINS, FRAMES};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FrameKind {
    Strike,
    Spare,
    Open,
    /// Only the first, non-strike throw has been recorded.
    InProgress,
}

impl FrameKind {
    pub fn is_mark(self) -> bool {
        matches!(self, FrameKind::Strike | FrameKind::Spare)
    }
}

/// One frame of a game as seen from the recorded throws.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FrameScore {
    pub number: u32,
    /// Throws rolled in this frame. The 10th frame includes its bonus throws.
    pub throws: Vec<u32>,
    pub kind: FrameKind,
    /// Running total through this frame, `None` while the game's rules can't
    /// score it yet (strict rules wait for bonus throws, lenient rules don't).
    pub total: Option<u32>,
}

impl Game {
    /// Frame-by-frame breakdown of the throws recorded so far.
    ///
    /// Frames that have not been started are left out. A frame's `total` is
    /// [`Game::score_for_frame`] for that frame, so both follow the game's rules.
    pub fn frames(&self) -> Vec<FrameScore> {
        let throws = self.throws();
        let mut frames = Vec::new();
        let mut ball = 0;

        for number in 1..=FRAMES {
            let Some(&first) = throws.get(ball) else {
                break;
            };

            let (kind, len) = if first == ALL_PINS {
                (FrameKind::Strike, 1)
            } else {
                match throws.get(ball + 1) {
                    Some(&second) if first + second == ALL_PINS => (FrameKind::Spare, 2),
                    Some(_) => (FrameKind::Open, 2),
                    None => (FrameKind::InProgress, 1),
                }
            };

            // a mark's frame holds its bonus throws only in the 10th
            let counted = if kind.is_mark() { 3 } else { len };

            let end = if number == FRAMES {
                throws.len().min(ball + counted)
            } else {
                ball + len
            };
            frames.push(FrameScore {
                number,
                throws: throws[ball..end].to_vec(),
                kind,
                total: self.score_for_frame(number).ok(),
            });

            ball += len;
        }

        frames
    }
}
