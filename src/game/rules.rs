/// How strictly a [`Game`](super::Game) checks what it is fed.
///
/// Strict rules (the default) reject impossible frames and refuse to score
/// frames whose bonus throws are still missing. Lenient rules only reject
/// single throws above 10 pins and the 22nd throw; unrecorded throws are
/// scored as 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rules {
    pub strict: bool,
}

impl Default for Rules {
    fn default() -> Self {
        Self::strict()
    }
}

impl Rules {
    pub const fn strict() -> Self {
        Self { strict: true }
    }

    pub const fn lenient() -> Self {
        Self { strict: false }
    }
}
