//! Stats Counter Animation

use serde::{Deserialize, Serialize};

/// One headline metric of the stats section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stat {
    pub label: String,
    pub value: u64,
    #[serde(default)]
    pub suffix: String,
}

impl Stat {
    fn new(label: &str, value: u64, suffix: &str) -> Self {
        Self { label: label.to_string(), value, suffix: suffix.to_string() }
    }
}

pub fn default_stats() -> Vec<Stat> {
    vec![
        Stat::new("Happy Customers", 10000, "+"),
        Stat::new("Products", 5000, "+"),
        Stat::new("Categories", 50, "+"),
        Stat::new("Years of Service", 5, ""),
    ]
}

/// Counts from zero towards `target` in equal increments, clamping on the
/// last step so the target is hit exactly.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CounterAnimation {
    target: f64,
    increment: f64,
    current: f64,
    done: bool,
}

impl CounterAnimation {
    pub fn new(target: u64, steps: u32) -> Self {
        let target = target as f64;
        Self {
            target,
            increment: target / f64::from(steps.max(1)),
            current: 0.0,
            done: false,
        }
    }

    /// Advance one step and return the value to display.
    pub fn tick(&mut self) -> u64 {
        if !self.done {
            self.current += self.increment;
            if self.current >= self.target {
                self.current = self.target;
                self.done = true;
            }
        }
        self.current.floor() as u64
    }

    pub fn is_done(&self) -> bool {
        self.done
    }
}

pub fn format_count(value: u64, suffix: &str) -> String {
    format!("{value}{suffix}")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run_to_end(target: u64, steps: u32) -> Vec<u64> {
        let mut animation = CounterAnimation::new(target, steps);
        let mut shown = Vec::new();
        while !animation.is_done() {
            shown.push(animation.tick());
            assert!(shown.len() <= steps as usize + 1, "animation did not terminate");
        }
        shown
    }

    #[test]
    fn test_reaches_target_exactly_and_stops() {
        let shown = run_to_end(5000, 100);
        assert_eq!(shown.len(), 100);
        assert_eq!(*shown.last().unwrap(), 5000);
        assert!(shown.iter().all(|v| *v <= 5000));
        assert!(shown.windows(2).all(|w| w[0] <= w[1]));
    }

    #[test]
    fn test_tick_after_done_stays_on_target() {
        let mut animation = CounterAnimation::new(50, 100);
        while !animation.is_done() {
            animation.tick();
        }
        assert_eq!(animation.tick(), 50);
    }

    #[test]
    fn test_small_target_floors() {
        let shown = run_to_end(5, 100);
        assert_eq!(shown[0], 0);
        assert_eq!(*shown.last().unwrap(), 5);
    }

    #[test]
    fn test_zero_target_finishes_immediately() {
        assert_eq!(run_to_end(0, 100), vec![0]);
    }

    #[test]
    fn test_format_count() {
        assert_eq!(format_count(10000, "+"), "10000+");
        assert_eq!(format_count(5, ""), "5");
    }
}
