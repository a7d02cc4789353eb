//! Delayed, very slow page scroll to the bottom, started by the first play.
//!
//! The tween stops for good as soon as something else moves the page (the user
//! scrolling), mirroring a scroll-to tween with auto-kill.

use crate::constants::{SCROLL_AUTO_KILL_PX, SCROLL_DELAY_MS, SCROLL_DURATION_MS};

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ScrollPhase {
    Idle,
    Pending { start_at_ms: f64 },
    Running { from_y: f64, started_ms: f64, last_y: f64 },
    Done,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AutoScroll {
    phase: ScrollPhase,
    delay_ms: f64,
    duration_ms: f64,
}

impl Default for AutoScroll {
    fn default() -> Self {
        Self::new(SCROLL_DELAY_MS, SCROLL_DURATION_MS)
    }
}

/// Quadratic ease-out (`power1.out`).
#[inline]
pub fn ease_out_quad(p: f64) -> f64 {
    let p = p.clamp(0.0, 1.0);
    1.0 - (1.0 - p) * (1.0 - p)
}

impl AutoScroll {
    pub fn new(delay_ms: f64, duration_ms: f64) -> Self {
        Self {
            phase: ScrollPhase::Idle,
            delay_ms,
            duration_ms: duration_ms.max(1.0),
        }
    }

    pub fn phase(&self) -> ScrollPhase {
        self.phase
    }

    /// Schedule the tween; only the first call has any effect.
    pub fn arm(&mut self, now_ms: f64) {
        if self.phase == ScrollPhase::Idle {
            self.phase = ScrollPhase::Pending {
                start_at_ms: now_ms + self.delay_ms,
            };
        }
    }

    /// Advance the tween. Returns the vertical scroll offset to apply, if any.
    ///
    /// `current_y` is the page's scroll offset as observed now and `max_y` the
    /// largest reachable offset at this moment (it may change as the page resizes).
    pub fn update(&mut self, now_ms: f64, current_y: f64, max_y: f64) -> Option<f64> {
        match self.phase {
            ScrollPhase::Idle | ScrollPhase::Done => None,
            ScrollPhase::Pending { start_at_ms } => {
                if now_ms < start_at_ms {
                    return None;
                }
                self.phase = ScrollPhase::Running {
                    from_y: current_y,
                    started_ms: start_at_ms,
                    last_y: current_y,
                };
                self.update(now_ms, current_y, max_y)
            }
            ScrollPhase::Running {
                from_y,
                started_ms,
                last_y,
            } => {
                if (current_y - last_y).abs() > SCROLL_AUTO_KILL_PX {
                    log::info!("[scroll] stopped by user scroll at y={:.0}", current_y);
                    self.phase = ScrollPhase::Done;
                    return None;
                }
                let p = ((now_ms - started_ms) / self.duration_ms).clamp(0.0, 1.0);
                let y = from_y + (max_y - from_y) * ease_out_quad(p);
                self.phase = if p >= 1.0 {
                    ScrollPhase::Done
                } else {
                    ScrollPhase::Running {
                        from_y,
                        started_ms,
                        last_y: y,
                    }
                };
                Some(y)
            }
        }
    }
}
