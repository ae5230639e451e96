use std::collections::HashMap;
use std::time::{Duration, Instant};

/// Wall-clock timing of pipeline phases, used by the demo binary.
pub struct PerformanceMonitor {
    timers: HashMap<String, Vec<Duration>>,
    current_timers: HashMap<String, Instant>,
}

impl Default for PerformanceMonitor {
    fn default() -> Self {
        Self::new()
    }
}

impl PerformanceMonitor {
    pub fn new() -> Self {
        Self {
            timers: HashMap::new(),
            current_timers: HashMap::new(),
        }
    }

    /// Start timing a named phase.
    pub fn start(&mut self, name: &str) {
        self.current_timers.insert(name.to_string(), Instant::now());
    }

    /// Stop timing a phase and record its duration.
    pub fn stop(&mut self, name: &str) {
        if let Some(start_time) = self.current_timers.remove(name) {
            let elapsed = start_time.elapsed();
            self.timers
                .entry(name.to_string())
                .or_default()
                .push(elapsed);
        }
    }

    /// Average duration across recorded runs of a phase.
    #[allow(dead_code)]
    pub fn get_average(&self, name: &str) -> Option<Duration> {
        self.timers.get(name).map(|durations| {
            let total: Duration = durations.iter().sum();
            total / durations.len() as u32
        })
    }

    /// Total duration across recorded runs of a phase.
    #[allow(dead_code)]
    pub fn get_total(&self, name: &str) -> Option<Duration> {
        self.timers
            .get(name)
            .map(|durations| durations.iter().sum())
    }

    /// Print a summary of all recorded phases.
    pub fn print_report(&self) {
        println!("\n=== timing report ===");

        let mut items: Vec<_> = self.timers.iter().collect();
        items.sort_by_key(|(name, _)| *name);

        for (name, durations) in items {
            let count = durations.len();
            let total: Duration = durations.iter().sum();
            println!(
                "{:<32} runs: {:<4} total: {:.3}s",
                name,
                count,
                total.as_secs_f32()
            );
        }
    }

    #[allow(dead_code)]
    pub fn reset(&mut self) {
        self.timers.clear();
        self.current_timers.clear();
    }
}
