//! Frame capture and GIF generation for progressive map growth

use crate::algorithm::executor::GrowthEvent;
use crate::io::configuration::MAX_CAPTURED_FRAMES;
use crate::io::error::{GenerationError, Result, file_system_error, invalid_parameter};
use crate::io::image::render_grid;
use crate::spatial::TileGrid;
use image::{Delay, Frame};
use std::path::Path;

/// Captures grid snapshots for visualization
///
/// Holds snapshots of the current attempt, one per frontier step on small
/// grids and one per `stride` steps on grids larger than
/// `MAX_CAPTURED_FRAMES` cells. The finished map is always captured. A new
/// attempt discards the frames of the previous one, so after generation
/// the capture shows how the accepted map grew.
pub struct VisualizationCapture {
    frames: Vec<TileGrid>,
    scale: u32,
    stride: usize,
    steps_seen: usize,
}

impl VisualizationCapture {
    /// Create an empty capture rendering at `scale` pixels per pattern cell
    pub const fn new(scale: u32) -> Self {
        Self {
            frames: Vec::new(),
            scale,
            stride: 1,
            steps_seen: 0,
        }
    }

    /// Records the current state of the grid
    pub fn record_frame(&mut self, grid: &TileGrid) {
        self.frames.push(grid.clone());
    }

    /// Drops every recorded frame
    pub fn clear(&mut self) {
        self.frames.clear();
    }

    /// Feed a generator progress event into the capture
    pub fn observe(&mut self, grid: &TileGrid, event: GrowthEvent) {
        match event {
            GrowthEvent::Started { .. } => {
                self.clear();
                self.stride = grid.total_size().div_ceil(MAX_CAPTURED_FRAMES).max(1);
                self.steps_seen = 0;
                self.record_frame(grid);
            }
            GrowthEvent::Stepped { frontier, .. } => {
                self.steps_seen += 1;
                if frontier == 0 || self.steps_seen.is_multiple_of(self.stride) {
                    self.record_frame(grid);
                }
            }
            GrowthEvent::Rejected { .. } | GrowthEvent::Accepted { .. } => {}
        }
    }

    /// Returns the number of captured frames
    pub const fn frame_count(&self) -> usize {
        self.frames.len()
    }

    /// Export the captured frames as a GIF with automatic frame skipping
    ///
    /// Automatically skips frames if the requested frame rate exceeds viewer
    /// capabilities, keeping the apparent animation speed.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - No frames were captured
    /// - `frame_delay_ms` is zero
    /// - The frame size is invalid for the capture's scale
    /// - File system operations fail
    /// - GIF encoding fails
    pub fn export_gif(&self, output_path: &Path, frame_delay_ms: u32) -> Result<()> {
        use crate::io::configuration::VIEWER_MIN_FRAME_DELAY_MS;

        if self.frames.is_empty() {
            return Err(invalid_parameter(
                "frames",
                &0,
                &"No frames captured for visualization",
            ));
        }
        if frame_delay_ms == 0 {
            return Err(invalid_parameter(
                "frame_delay_ms",
                &frame_delay_ms,
                &"must be positive",
            ));
        }

        let effective_delay_ms = frame_delay_ms.max(VIEWER_MIN_FRAME_DELAY_MS);
        let skip_factor = if frame_delay_ms < VIEWER_MIN_FRAME_DELAY_MS {
            VIEWER_MIN_FRAME_DELAY_MS.div_ceil(frame_delay_ms) as usize
        } else {
            1
        };

        let frames = self.generate_frames(effective_delay_ms, skip_factor)?;

        if let Some(parent) = output_path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|e| file_system_error(parent, "create directory", e))?;
        }

        let file = std::fs::File::create(output_path)
            .map_err(|e| file_system_error(output_path, "create file", e))?;

        let mut encoder = image::codecs::gif::GifEncoder::new(file);
        encoder
            .encode_frames(frames)
            .map_err(|e| GenerationError::ImageExport {
                path: output_path.to_path_buf(),
                source: e,
            })?;

        Ok(())
    }

    fn generate_frames(&self, delay_ms: u32, skip_factor: usize) -> Result<Vec<Frame>> {
        let last = self.frames.len().saturating_sub(1);
        let mut frames = self
            .frames
            .iter()
            .enumerate()
            .filter(|(i, _)| i % skip_factor == 0 || *i == last)
            .map(|(_, grid)| self.render_frame(grid, delay_ms))
            .collect::<Result<Vec<Frame>>>()?;

        // Final frame displays longer for better visibility
        if let Some(last_frame_img) = frames.last().map(|f| f.buffer().clone()) {
            frames.push(Frame::from_parts(
                last_frame_img,
                0,
                0,
                Delay::from_numer_denom_ms(delay_ms * 25, 1),
            ));
        }

        Ok(frames)
    }

    fn render_frame(&self, grid: &TileGrid, delay_ms: u32) -> Result<Frame> {
        Ok(Frame::from_parts(
            render_grid(grid, self.scale)?,
            0,
            0,
            Delay::from_numer_denom_ms(delay_ms, 1),
        ))
    }
}
