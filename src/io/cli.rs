//! Command-line interface for generating, exporting and checking pipe maps

use crate::algorithm::executor::{GeneratorConfig, GrowthEvent, PipeGenerator};
use crate::algorithm::selection::RandomSelector;
use crate::analysis::statistics::MapStatistics;
use crate::analysis::validation;
use crate::io::configuration::{
    DEFAULT_MAP_COUNT, DEFAULT_MAX_ATTEMPTS, DEFAULT_MIN_SIZE, DEFAULT_PIXEL_SCALE, DEFAULT_WIDTH,
    GIF_FRAME_DELAY_MS, OUTPUT_STEM, TEXT_EXTENSION, VISUALIZATION_SUFFIX,
};
use crate::io::error::{Result, file_system_error, invalid_parameter};
use crate::io::image::{export_grid_as_png, image_side};
use crate::io::progress::ProgressManager;
use crate::io::text;
use crate::io::visualization::VisualizationCapture;
use crate::spatial::TileGrid;
use crate::spatial::tiles::{SHAPE_COUNT, TileCatalog};
use clap::Parser;
use log::info;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::time::Instant;

#[derive(Parser)]
#[command(name = "pipetile")]
#[command(
    author,
    version,
    about = "Generate connected pipe tile maps by weighted constraint propagation"
)]
/// Command-line arguments for the map generation tool
// CLI tools commonly need multiple boolean flags for various features and user preferences
#[allow(clippy::struct_excessive_bools)]
pub struct Cli {
    /// Cells per side of the square grid
    #[arg(short, long, default_value_t = DEFAULT_WIDTH)]
    pub width: usize,

    /// Random seed for reproducible generation (entropy-seeded when absent)
    #[arg(short, long)]
    pub seed: Option<u64>,

    /// Placed tiles a map needs to be accepted
    #[arg(short, long, default_value_t = DEFAULT_MIN_SIZE)]
    pub min_size: usize,

    /// Attempts per map before giving up
    #[arg(short = 'a', long, default_value_t = DEFAULT_MAX_ATTEMPTS)]
    pub max_attempts: usize,

    /// Number of maps to generate from one random stream
    #[arg(short, long, default_value_t = DEFAULT_MAP_COUNT)]
    pub count: usize,

    /// Directory for map files (text dumps go to stdout when absent)
    #[arg(short, long, value_name = "DIR")]
    pub output: Option<PathBuf>,

    /// Also export each map as a PNG image
    #[arg(short, long)]
    pub png: bool,

    /// Export the growth of each map as an animated GIF
    #[arg(short, long)]
    pub visualize: bool,

    /// Pixels per pattern cell in image output
    #[arg(long, default_value_t = DEFAULT_PIXEL_SCALE)]
    pub scale: u32,

    /// Sixteen comma-separated shape weights, indexed by shape id
    #[arg(long, value_delimiter = ',', value_name = "W0,..,W15")]
    pub weights: Option<Vec<u32>>,

    /// Fill every cell independently, ignoring connectivity
    #[arg(long)]
    pub scatter: bool,

    /// Validate a saved text map instead of generating
    #[arg(long, value_name = "FILE")]
    pub check: Option<PathBuf>,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,
}

impl Cli {
    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }

    /// Shape catalog from `--weights`, or the reference table
    ///
    /// # Errors
    ///
    /// Returns an error if the weight list does not hold exactly sixteen
    /// positive values
    pub fn catalog(&self) -> Result<TileCatalog> {
        let Some(weights) = &self.weights else {
            return Ok(TileCatalog::reference());
        };

        let table: [u32; SHAPE_COUNT] = weights.as_slice().try_into().map_err(|_| {
            invalid_parameter(
                "weights",
                &format!("{weights:?}"),
                &format!("expected {SHAPE_COUNT} values, got {}", weights.len()),
            )
        })?;
        TileCatalog::with_weights(table)
    }

    /// Size guard settings from the arguments
    pub const fn generator_config(&self) -> GeneratorConfig {
        GeneratorConfig {
            min_size: self.min_size,
            max_attempts: self.max_attempts,
        }
    }
}

/// Orchestrates batch generation with progress tracking and export
pub struct MapRunner {
    cli: Cli,
    progress_manager: Option<ProgressManager>,
}

impl MapRunner {
    /// Create a new runner with the given CLI arguments
    pub fn new(cli: Cli) -> Self {
        let progress_manager = cli.should_show_progress().then(ProgressManager::new);

        Self {
            cli,
            progress_manager,
        }
    }

    /// Generate or check maps according to CLI arguments
    ///
    /// # Errors
    ///
    /// Returns an error if argument validation, generation, export or the
    /// map check fails
    pub fn process(&mut self) -> Result<()> {
        if let Some(path) = self.cli.check.clone() {
            return Self::check_file(&path);
        }

        if self.cli.scale == 0 {
            return Err(invalid_parameter("scale", &self.cli.scale, &"must be positive"));
        }
        if self.cli.png || self.cli.visualize {
            image_side(self.cli.width, self.cli.scale)?;
        }

        let mut generator = PipeGenerator::new(self.cli.catalog()?, self.cli.generator_config())?;
        let mut selector = RandomSelector::from_seed_option(self.cli.seed);
        match self.cli.seed {
            Some(seed) => info!("RNG is seeded to {seed}"),
            None => info!("RNG not seeded"),
        }

        if self.cli.count == 0 {
            return Ok(());
        }

        if let Some(dir) = &self.cli.output {
            std::fs::create_dir_all(dir)
                .map_err(|e| file_system_error(dir.as_path(), "create directory", e))?;
        }

        if let Some(ref mut pm) = self.progress_manager {
            pm.initialize(self.cli.count);
        }

        for index in 0..self.cli.count {
            self.generate_map(index, &mut generator, &mut selector)?;
        }

        if let Some(ref mut pm) = self.progress_manager {
            pm.finish();
        }

        Ok(())
    }

    fn generate_map(
        &mut self,
        index: usize,
        generator: &mut PipeGenerator,
        selector: &mut RandomSelector,
    ) -> Result<()> {
        let start_time = Instant::now();
        let label = Self::map_label(index);

        if let Some(ref mut pm) = self.progress_manager {
            pm.start_map(index, &label, generator.config().max_attempts);
        }

        let mut grid = TileGrid::new(self.cli.width)?;
        let mut capture = self
            .cli
            .visualize
            .then(|| VisualizationCapture::new(self.cli.scale));

        if self.cli.scatter {
            generator.scatter(&mut grid, selector)?;
            if let Some(c) = capture.as_mut() {
                c.record_frame(&grid);
            }
        } else {
            let progress = &mut self.progress_manager;
            let report = generator.generate_with(&mut grid, selector, |snapshot, event| {
                if let Some(c) = capture.as_mut() {
                    c.observe(snapshot, event);
                }
                if let (GrowthEvent::Started { attempt }, Some(pm)) = (event, progress.as_mut()) {
                    pm.update_attempt(index, attempt);
                }
            })?;
            validation::validate(&grid)?;
            info!(
                "{label}: accepted after {} attempt(s), {} frontier steps",
                report.attempts, report.steps
            );
        }

        let stats = MapStatistics::from_grid(&grid);
        info!("{label}: {stats}");

        self.write_outputs(&label, &grid, capture.as_ref(), &stats)?;

        if let Some(ref mut pm) = self.progress_manager {
            pm.complete_map(index, start_time.elapsed());
        }

        Ok(())
    }

    fn write_outputs(
        &self,
        label: &str,
        grid: &TileGrid,
        capture: Option<&VisualizationCapture>,
        stats: &MapStatistics,
    ) -> Result<()> {
        let dump = text::render(grid);

        if let Some(dir) = &self.cli.output {
            let text_path = dir.join(format!("{label}.{TEXT_EXTENSION}"));
            std::fs::write(&text_path, dump)
                .map_err(|e| file_system_error(text_path.as_path(), "write map", e))?;
        } else {
            let mut stdout = std::io::stdout().lock();
            write!(stdout, "{dump}")?;
            if !self.cli.quiet {
                writeln!(stdout, "{label}: {stats}")?;
            }
        }

        if self.cli.png {
            let png_path = self.output_path(&format!("{label}.png"));
            export_grid_as_png(grid, &png_path, self.cli.scale)?;
        }

        if let Some(capture) = capture {
            let gif_path = self.output_path(&format!("{label}{VISUALIZATION_SUFFIX}.gif"));
            capture.export_gif(&gif_path, GIF_FRAME_DELAY_MS)?;
        }

        Ok(())
    }

    /// Validate a saved text map and print every violation found
    fn check_file(path: &Path) -> Result<()> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| file_system_error(path, "read map", e))?;
        let grid = text::parse(&content)?;

        let violations = validation::all_violations(&grid);
        let stats = MapStatistics::from_grid(&grid);

        let mut stdout = std::io::stdout().lock();
        writeln!(stdout, "{}: {stats}", path.display())?;
        for violation in &violations {
            writeln!(stdout, "  {violation}")?;
        }

        validation::validate(&grid)
    }

    fn output_path(&self, file_name: &str) -> PathBuf {
        self.cli
            .output
            .as_ref()
            .map_or_else(|| PathBuf::from(file_name), |dir| dir.join(file_name))
    }

    /// File stem for the map at `index`
    pub fn map_label(index: usize) -> String {
        format!("{OUTPUT_STEM}_{index:03}")
    }
}
