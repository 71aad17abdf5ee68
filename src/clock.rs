/// Turns a stream of frame timestamps into fixed-rate ticks.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TickClock {
    interval: f64,
    next_tick_at: Option<f64>,
}

impl TickClock {
    pub fn new(interval: f64) -> Self {
        Self {
            interval,
            next_tick_at: None,
        }
    }

    /// True when a tick is due at `now` (seconds). The first poll always ticks.
    ///
    /// Ticks are scheduled on whole multiples of the interval, so frame
    /// overshoot does not accumulate. After falling a full interval behind
    /// (a stalled window) the schedule restarts from `now` instead of
    /// catching up with a burst of ticks.
    pub fn poll(&mut self, now: f64) -> bool {
        let next = match self.next_tick_at {
            None => now + self.interval,
            Some(due) if now < due => return false,
            Some(due) if now - due >= self.interval => now + self.interval,
            Some(due) => due + self.interval,
        };
        self.next_tick_at = Some(next);
        true
    }
}
