// pacer.rs - Decides when the next generation is due

/// Result of one pacing decision.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tick {
    pub advance: bool,
    pub last_update_ms: f64,
}

/// Milliseconds between generations, `None` when the speed never advances.
pub fn interval_ms(speed: u32) -> Option<f64> {
    (speed > 0).then(|| 1000.0 / speed as f64)
}

/// Called once per display frame with the frame timestamp.
///
/// Advances when playing and at least one interval has elapsed since
/// `last_update_ms`; the new timestamp is the frame time, not the ideal
/// schedule, so a late frame pushes the next generation back.
pub fn tick(now_ms: f64, last_update_ms: f64, speed: u32, playing: bool) -> Tick {
    let unchanged = Tick {
        advance: false,
        last_update_ms,
    };
    if !playing {
        return unchanged;
    }

    match interval_ms(speed) {
        Some(interval) if now_ms - last_update_ms >= interval => Tick {
            advance: true,
            last_update_ms: now_ms,
        },
        _ => unchanged,
    }
}
