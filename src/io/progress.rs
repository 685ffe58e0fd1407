//! Multi-map progress tracking with automatic batching for large runs

use crate::io::configuration::MAX_INDIVIDUAL_PROGRESS_BARS;
use indicatif::{MultiProgress, ProgressBar, ProgressStyle};
use std::sync::LazyLock;
use std::time::Duration;

/// Display state of one map: label, current attempt, attempt limit
type MapState = (String, usize, usize);

/// Coordinates progress display for batch generation
///
/// Shows one bar per map (attempts used against the attempt limit) for
/// the most recent maps, plus a batch bar when many maps are generated.
pub struct ProgressManager {
    multi_progress: MultiProgress,
    batch_bar: Option<ProgressBar>,
    map_bars: Vec<ProgressBar>,
    map_states: Vec<MapState>,
}

impl Default for ProgressManager {
    fn default() -> Self {
        Self::new()
    }
}

static PROGRESS_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template("{prefix} [{bar:30.cyan/blue}] {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

static BATCH_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template("[{elapsed_precise}] Maps: [{bar:40.cyan/blue}] {pos}/{len}")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
});

impl ProgressManager {
    /// Create a new progress manager
    pub fn new() -> Self {
        Self {
            multi_progress: MultiProgress::new(),
            batch_bar: None,
            map_bars: Vec::new(),
            map_states: Vec::new(),
        }
    }

    /// Initialize progress bars based on map count
    pub fn initialize(&mut self, map_count: usize) {
        // Switch to batch mode for large runs to avoid terminal spam
        if map_count > MAX_INDIVIDUAL_PROGRESS_BARS + 1 {
            let batch_bar = ProgressBar::new(map_count as u64);
            batch_bar.set_style(BATCH_STYLE.clone());
            self.batch_bar = Some(self.multi_progress.add(batch_bar));
        }

        let bars_to_create = map_count.min(MAX_INDIVIDUAL_PROGRESS_BARS);
        for _ in 0..bars_to_create {
            let pb = ProgressBar::new(0);
            pb.set_style(PROGRESS_STYLE.clone());
            self.map_bars.push(self.multi_progress.add(pb));
        }
    }

    /// Configure progress bar for a new map
    pub fn start_map(&mut self, index: usize, label: &str, max_attempts: usize) {
        if index >= self.map_states.len() {
            self.map_states.resize(index + 1, (String::new(), 0, 0));
        }
        if let Some(state) = self.map_states.get_mut(index) {
            *state = (label.to_string(), 0, max_attempts);
        }
        self.update_bars();
    }

    /// Report the attempt currently running
    pub fn update_attempt(&mut self, map_index: usize, attempt: usize) {
        if let Some(state) = self.map_states.get_mut(map_index) {
            state.1 = attempt;
        }
        self.update_bars();
    }

    /// Mark map as completed and update batch progress
    pub fn complete_map(&mut self, index: usize, _elapsed: Duration) {
        if let Some(ref batch_bar) = self.batch_bar {
            batch_bar.inc(1);
        }

        if let Some(state) = self.map_states.get_mut(index) {
            state.0 = format!("✓ {}", state.0);
        }
        self.update_bars();
    }

    /// Clean up all progress displays
    pub fn finish(&self) {
        if let Some(ref batch_bar) = self.batch_bar {
            batch_bar.finish_with_message("All maps generated");
        }
        let _ = self.multi_progress.clear();
    }

    /// Update all progress bars to show the last N active maps
    fn update_bars(&self) {
        let active_maps: Vec<&MapState> = self
            .map_states
            .iter()
            .filter(|(name, _, _)| !name.is_empty())
            .collect();

        let start_idx = active_maps
            .len()
            .saturating_sub(MAX_INDIVIDUAL_PROGRESS_BARS);
        let visible_maps = active_maps.get(start_idx..).unwrap_or(&[]);

        for (bar_idx, (name, current, max)) in visible_maps.iter().enumerate() {
            if let Some(bar) = self.map_bars.get(bar_idx) {
                bar.set_length(*max as u64);
                bar.set_position(*current as u64);
                bar.set_message(format!("attempt {current}"));
                bar.set_prefix(name.clone());
            }
        }

        // Clear any unused bars
        for bar_idx in visible_maps.len()..self.map_bars.len() {
            if let Some(bar) = self.map_bars.get(bar_idx) {
                bar.set_length(0);
                bar.set_position(0);
                bar.set_message(String::new());
                bar.set_prefix(String::new());
            }
        }
    }
}
