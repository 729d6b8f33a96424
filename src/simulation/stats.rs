//! Running counters for the headless driver and tests

use super::damage::WarningLevel;

/// Aggregate statistics across a simulation run
#[derive(Debug, Clone)]
pub struct SimulationStats {
    pub ticks: u64,
    pub vehicles_recycled: u64,
    pub peak_total_load: f32,
    pub peak_warning_level: WarningLevel,
}

impl Default for SimulationStats {
    fn default() -> Self {
        Self {
            ticks: 0,
            vehicles_recycled: 0,
            peak_total_load: 0.0,
            peak_warning_level: WarningLevel::Safe,
        }
    }
}

impl SimulationStats {
    /// Fold one tick's outcome into the running totals
    pub fn record_tick(&mut self, total_load: f32, warning_level: WarningLevel, recycled: usize) {
        self.ticks += 1;
        self.vehicles_recycled += recycled as u64;
        self.peak_total_load = self.peak_total_load.max(total_load);
        self.peak_warning_level = self.peak_warning_level.max(warning_level);
    }
}
