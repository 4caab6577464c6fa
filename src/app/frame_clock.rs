use std::time::{Duration, Instant};

/**
 * Fixed-rate tick schedule. The run loop sleeps until `next_tick`, runs one tick, then calls
 * `advance`. If a tick overran one or more boundaries the missed ones are skipped rather than
 * replayed back to back.
 */
pub struct FrameClock {
    period: Duration,
    next_tick: Instant,
}

impl FrameClock {
    pub fn new(ticks_per_second: u32, start: Instant) -> FrameClock {
        FrameClock {
            period: Duration::from_nanos(1_000_000_000 / ticks_per_second.max(1) as u64),
            next_tick: start,
        }
    }

    #[cfg(test)]
    pub fn period(&self) -> Duration {
        self.period
    }

    pub fn next_tick(&self) -> Instant {
        self.next_tick
    }

    pub fn is_due(&self, now: Instant) -> bool {
        now >= self.next_tick
    }

    pub fn advance(&mut self, now: Instant) -> Instant {
        self.next_tick += self.period;
        if self.next_tick <= now {
            let behind = now.duration_since(self.next_tick).as_nanos();
            let skipped = behind / self.period.as_nanos() + 1;
            self.next_tick += Duration::from_nanos((skipped * self.period.as_nanos()) as u64);
        }
        self.next_tick
    }
}
