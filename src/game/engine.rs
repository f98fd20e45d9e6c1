use tracing::{debug, warn};

use super::error::GameError;
use super::rules::Rules;

/// Most throws a legal game can hold: two per frame for frames 1-9, three in the 10th.
pub const MAX_THROWS: usize = 21;
pub const FRAMES: u32 = 10;
pub const ALL_PINS: u32 = 10;

// current_frame never goes past this; it means "past the 10th frame"
const PAST_LAST_FRAME: u32 = FRAMES + 1;

/// Score engine for a single game of ten-pin bowling.
///
/// Throws are appended one at a time with [`Game::add`]. Scores are
/// recomputed from the recorded throws on every call, so reads are pure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    throws: Vec<u32>,
    current_frame: u32,
    is_first_throw: bool,
    running_pin_total: u32,
    frame_first_pins: u32,
    rules: Rules,
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

impl Game {
    /// Create an empty game using strict rules.
    pub fn new() -> Self {
        Self::with_rules(Rules::default())
    }

    pub fn with_rules(rules: Rules) -> Self {
        Self {
            throws: Vec::with_capacity(MAX_THROWS),
            current_frame: 1,
            is_first_throw: true,
            running_pin_total: 0,
            frame_first_pins: 0,
            rules,
        }
    }

    /// Record a throw.
    ///
    /// # Errors
    ///
    /// - [`GameError::GameComplete`] once 21 throws are recorded, or (strict
    ///   rules) once the 10th frame and its bonus throws are in.
    /// - [`GameError::InvalidPinCount`] when `pins` is above 10, or (strict
    ///   rules) when it knocks down more pins than are still standing.
    ///
    /// A rejected throw leaves the game untouched.
    pub fn add(&mut self, pins: u32) -> Result<(), GameError> {
        if self.throws.len() >= MAX_THROWS || (self.rules.strict && self.is_complete()) {
            return Err(GameError::GameComplete);
        }
        if pins > self.pins_standing() {
            // bonus throws belong to the 10th frame
            return Err(GameError::InvalidPinCount {
                pins,
                frame: self.current_frame.min(FRAMES),
            });
        }

        self.throws.push(pins);
        self.running_pin_total += pins;
        self.adjust_current_frame(pins);
        Ok(())
    }

    fn pins_standing(&self) -> u32 {
        if self.is_first_throw || !self.rules.strict {
            ALL_PINS
        } else {
            ALL_PINS - self.frame_first_pins
        }
    }

    fn adjust_current_frame(&mut self, pins: u32) {
        if self.is_first_throw {
            if pins == ALL_PINS {
                self.advance_frame();
            } else {
                self.frame_first_pins = pins;
                self.is_first_throw = false;
            }
        } else {
            self.is_first_throw = true;
            self.advance_frame();
        }
    }

    fn advance_frame(&mut self) {
        self.current_frame = (self.current_frame + 1).min(PAST_LAST_FRAME);
        self.frame_first_pins = 0;
        debug!(
            frame = self.current_frame,
            throws = self.throws.len(),
            "advanced frame"
        );
    }

    /// The 1-based frame being played, or 11 once the 10th frame is behind us.
    pub fn current_frame(&self) -> u32 {
        self.current_frame
    }

    /// Score through the last completed frame.
    pub fn score(&self) -> Result<u32, GameError> {
        self.score_for_frame(self.current_frame - 1)
    }

    /// Score through the first `frame` frames.
    ///
    /// Strikes earn the next two throws as a bonus, spares the next one.
    /// Under strict rules, asking for a frame whose throws (bonus included)
    /// are not all recorded yet fails with [`GameError::IncompleteFrame`].
    pub fn score_for_frame(&self, frame: u32) -> Result<u32, GameError> {
        if frame > FRAMES {
            return Err(GameError::FrameOutOfRange(frame));
        }

        let mut ball = 0;
        let mut score = 0;
        for number in 1..=frame {
            let first = self.pins_at(ball, number)?;
            if first == ALL_PINS {
                score += ALL_PINS + self.pins_at(ball + 1, number)? + self.pins_at(ball + 2, number)?;
                ball += 1;
            } else {
                let frame_score = first + self.pins_at(ball + 1, number)?;
                // spare needs the next frame's first throw
                if frame_score == ALL_PINS {
                    score += frame_score + self.pins_at(ball + 2, number)?;
                } else {
                    score += frame_score;
                }
                ball += 2;
            }
        }

        Ok(score)
    }

    fn pins_at(&self, index: usize, frame: u32) -> Result<u32, GameError> {
        match self.throws.get(index) {
            Some(&pins) => Ok(pins),
            None if self.rules.strict => Err(GameError::IncompleteFrame { frame }),
            None => {
                warn!(frame, index, "scoring past the recorded throws, counting 0 pins");
                Ok(0)
            }
        }
    }

    /// Whether the 10th frame and every bonus throw it earned are recorded.
    pub fn is_complete(&self) -> bool {
        let mut ball = 0;
        for _ in 1..FRAMES {
            match self.throws.get(ball) {
                Some(&ALL_PINS) => ball += 1,
                Some(_) => ball += 2,
                None => return false,
            }
        }

        match self.throws.get(ball..) {
            Some([first, second, rest @ ..]) => {
                let mark = *first == ALL_PINS || first + second == ALL_PINS;
                !mark || !rest.is_empty()
            }
            _ => false,
        }
    }

    pub fn throws(&self) -> &[u32] {
        &self.throws
    }

    /// Plain sum of every pin knocked down, bonuses not included.
    pub fn pins_knocked(&self) -> u32 {
        self.running_pin_total
    }

    pub fn rules(&self) -> Rules {
        self.rules
    }
}
