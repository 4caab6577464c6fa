use crate::app::FrameClock;
use std::time::{Duration, Instant};

#[test]
fn test_sixty_hertz_period() {
    let clock = FrameClock::new(60, Instant::now());
    assert_eq!(clock.period(), Duration::from_nanos(16_666_666));
}

#[test]
fn test_first_tick_is_due_immediately() {
    let start = Instant::now();
    let clock = FrameClock::new(60, start);
    assert!(clock.is_due(start));
    assert_eq!(clock.next_tick(), start);
}

#[test]
fn test_advance_on_schedule() {
    let start = Instant::now();
    let mut clock = FrameClock::new(60, start);
    let period = clock.period();

    assert_eq!(clock.advance(start), start + period);
    assert!(!clock.is_due(start + period / 2));
    assert!(clock.is_due(start + period));

    /* a tick that runs a little late still lands on the fixed grid */
    assert_eq!(clock.advance(start + period + period / 4), start + period * 2);
}

#[test]
fn test_missed_ticks_are_skipped() {
    let start = Instant::now();
    let mut clock = FrameClock::new(60, start);
    let period = clock.period();

    /* the first tick took three and a half periods */
    let next = clock.advance(start + period * 7 / 2);
    assert_eq!(next, start + period * 4);
    assert!(next > start + period * 7 / 2);

    /* finishing exactly on a boundary moves past it */
    let next = clock.advance(start + period * 6);
    assert_eq!(next, start + period * 7);
}
