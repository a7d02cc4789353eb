use crate::constants::{STEP_PERIOD, TIME_PER_FRAME};

/// Frame-counted time fed to the shaders as the `time` and `step` uniforms.
///
/// Advances a fixed amount per rendered frame rather than by wall clock, so
/// animation speed follows the display refresh rate.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct FrameClock {
    pub time: f32,
    pub step: f32,
}

impl FrameClock {
    pub fn advance(&mut self) {
        self.time += TIME_PER_FRAME;
        self.step = (self.step + 1.0) % STEP_PERIOD;
    }
}
