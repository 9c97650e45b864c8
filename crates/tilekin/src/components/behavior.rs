/// Constant lateral walk. The pipeline negates `speed` when the body touches
/// a wall and copies it into `speed_x` every tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Walk {
    pub speed: f32,
}

impl Walk {
    pub fn new(speed: f32) -> Self {
        Self { speed }
    }
}

/// Bump animation for a block hit from below.
///
/// Holds a profile of per-tick vertical offsets. While a BOTTOM contact is
/// present the block moves by the next offset each tick; once the profile is
/// exhausted the block is reset for the next hit.
#[derive(Debug, Clone, PartialEq)]
pub struct Breakable {
    profile: Vec<f32>,
    cursor: usize,
}

impl Breakable {
    pub fn new(profile: Vec<f32>) -> Self {
        Self { profile, cursor: 0 }
    }

    /// `ticks` steps of the same height.
    pub fn constant(height: f32, ticks: usize) -> Self {
        Self::new(vec![height; ticks])
    }

    /// Rise by `amplitude` over `ticks` ticks and fall back by the same amount.
    pub fn bump(amplitude: f32, ticks: usize) -> Self {
        let mut profile = vec![-amplitude; ticks];
        profile.extend(std::iter::repeat(amplitude).take(ticks));
        Self::new(profile)
    }

    /// Next offset; advances the cursor. Returns 0 once finished.
    pub fn height(&mut self) -> f32 {
        match self.profile.get(self.cursor) {
            Some(&h) => {
                self.cursor += 1;
                h
            }
            None => 0.0,
        }
    }

    pub fn finished(&self) -> bool {
        self.cursor >= self.profile.len()
    }

    pub fn reset(&mut self) {
        self.cursor = 0;
    }

    /// Ticks consumed since the last reset.
    pub fn progress(&self) -> usize {
        self.cursor
    }
}
