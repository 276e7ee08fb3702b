use std::time::{Duration, Instant};

use log::info;

/// Charges wall-clock time to named phases. Each `mark` closes the phase that started at
/// the previous mark (or at creation).
#[derive(Debug)]
pub struct Timer {
    last: Instant,
    marks: Vec<(&'static str, Duration)>,
}

impl Timer {
    pub fn new() -> Self {
        Self {
            last: Instant::now(),
            marks: Vec::new(),
        }
    }

    /// Add the time since the last mark to `label`.
    pub fn mark(&mut self, label: &'static str) {
        let now = Instant::now();
        let spent = now - self.last;
        self.last = now;
        match self.marks.iter_mut().find(|(name, _)| *name == label) {
            Some((_, total)) => *total += spent,
            None => self.marks.push((label, spent)),
        }
    }

    /// Total time charged to `label`, zero if it was never marked.
    pub fn elapsed(&self, label: &str) -> Duration {
        self.marks
            .iter()
            .find(|(name, _)| *name == label)
            .map(|&(_, total)| total)
            .unwrap_or_default()
    }

    /// Log every phase in the order it was first marked.
    pub fn log_summary(&self) {
        for (label, total) in &self.marks {
            info!("{:>12}: {:?}", label, total);
        }
    }
}

impl Default for Timer {
    fn default() -> Self {
        Self::new()
    }
}
