//! Turns wall-clock readings into simulation deltas.

use crate::consts::{MAX_FRAME_DELTA_MS, TICK_MS};

/// Remembers the previous reading so the loop itself holds no hidden
/// "last time" state.
#[derive(Clone, Copy, Debug, Default)]
pub struct FrameClock {
    last_ms: Option<u64>,
}

impl FrameClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Milliseconds since the previous call.
    ///
    /// The first reading, and any gap longer than `MAX_FRAME_DELTA_MS`
    /// (suspended process, debugger, dragged window), count as one nominal
    /// tick. A clock that runs backwards yields 0.
    pub fn delta_ms(&mut self, now_ms: u64) -> u32 {
        let delta = match self.last_ms {
            None => TICK_MS,
            Some(last) => {
                let measured = now_ms.saturating_sub(last);
                if measured > u64::from(MAX_FRAME_DELTA_MS) {
                    TICK_MS
                } else {
                    measured as u32
                }
            }
        };
        self.last_ms = Some(now_ms);
        delta
    }
}
