//! Count-up Animation
//!
//! Frames for a statistic counting from 0 to its target.

use crate::config::COUNTER_TICKS;

/// "%" only for a target of exactly 100, "+" for everything else
pub fn stat_suffix(target: u32) -> &'static str {
    if target == 100 {
        "%"
    } else {
        "+"
    }
}

pub fn format_stat(value: u32, target: u32) -> String {
    format!("{}{}", value, stat_suffix(target))
}

/// Yields the displayed text for each tick, ending exactly at the target.
///
/// Each tick adds target / COUNTER_TICKS; the shown value is floored.
#[derive(Debug, Clone)]
pub struct CountUp {
    target: u32,
    increment: f64,
    current: f64,
    done: bool,
}

impl CountUp {
    pub fn new(target: u32) -> Self {
        Self {
            target,
            increment: target as f64 / COUNTER_TICKS as f64,
            current: 0.0,
            done: false,
        }
    }

    /// Text shown before the first tick
    pub fn initial(&self) -> String {
        format_stat(0, self.target)
    }
}

impl Iterator for CountUp {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        if self.done {
            return None;
        }
        self.current += self.increment;
        if self.current >= self.target as f64 {
            self.current = self.target as f64;
            self.done = true;
        }
        Some(format_stat(self.current.floor() as u32, self.target))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_suffix_rule() {
        assert_eq!(stat_suffix(100), "%");
        assert_eq!(stat_suffix(500), "+");
        assert_eq!(stat_suffix(99), "+");
        assert_eq!(stat_suffix(1000), "+");
    }

    #[test]
    fn test_hundred_ends_with_percent() {
        let frames: Vec<String> = CountUp::new(100).collect();
        assert_eq!(frames.last().map(String::as_str), Some("100%"));
        assert!(frames.iter().all(|f| f.ends_with('%')));
    }

    #[test]
    fn test_other_targets_end_with_plus() {
        for target in [500, 15, 4] {
            let frames: Vec<String> = CountUp::new(target).collect();
            assert_eq!(frames.last(), Some(&format!("{}+", target)));
        }
    }

    #[test]
    fn test_frames_are_monotonic_and_bounded() {
        let values: Vec<u32> = CountUp::new(15)
            .map(|f| f.trim_end_matches('+').parse().unwrap())
            .collect();
        assert!(values.windows(2).all(|w| w[0] <= w[1]));
        assert!(values.len() <= COUNTER_TICKS as usize + 1);
        // Small targets linger on low values before reaching the end
        assert_eq!(values[0], 0);
    }

    #[test]
    fn test_zero_target_finishes_immediately() {
        let mut counter = CountUp::new(0);
        assert_eq!(counter.initial(), "0+");
        assert_eq!(counter.next().as_deref(), Some("0+"));
        assert_eq!(counter.next(), None);
    }
}
