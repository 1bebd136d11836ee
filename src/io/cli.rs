//! Command-line interface for rendering batches of seeded compositions

use crate::algorithm::config::Preset;
use crate::algorithm::session::Session;
use crate::io::configuration::{DEFAULT_COUNT, DEFAULT_FRAMES, DEFAULT_SEED, OUTPUT_PREFIX};
use crate::io::error::{Result, path_error};
use crate::io::image::export_canvas_as_png;
use crate::io::progress::ProgressManager;
use clap::Parser;
use std::path::{Path, PathBuf};
use std::time::Instant;
use tracing::info;

#[derive(Parser)]
#[command(name = "mondrian")]
#[command(
    author,
    version,
    about = "Render seeded cut-line and color-block compositions"
)]
/// Command-line arguments for the composition renderer
// CLI tools commonly need multiple boolean flags for various features and user preferences
#[allow(clippy::struct_excessive_bools)]
pub struct Cli {
    /// Directory the compositions are written to
    #[arg(value_name = "OUTPUT")]
    pub output: PathBuf,

    /// Seed of the first composition; later ones use consecutive seeds
    #[arg(short, long, default_value_t = DEFAULT_SEED)]
    pub seed: u64,

    /// Number of animation frames to simulate per composition
    #[arg(short, long, default_value_t = DEFAULT_FRAMES)]
    pub frames: u64,

    /// Number of compositions to render
    #[arg(short, long, default_value_t = DEFAULT_COUNT)]
    pub count: u64,

    /// Parameter preset
    #[arg(short, long, value_enum, default_value_t = Preset::Split)]
    pub preset: Preset,

    /// Also export the animation as a GIF
    #[arg(short, long)]
    pub animate: bool,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Render compositions even if output exists
    #[arg(short, long)]
    pub no_skip: bool,

    /// Log every line and fill
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Check if existing output files should be skipped
    pub const fn skip_existing(&self) -> bool {
        !self.no_skip
    }

    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }

    /// Seeds of every composition this invocation renders
    pub fn seeds(&self) -> impl Iterator<Item = u64> + use<> {
        let first = self.seed;
        (0..self.count).map(move |offset| first.wrapping_add(offset))
    }
}

/// Orchestrates rendering of a batch of compositions with progress tracking
pub struct BatchRunner {
    cli: Cli,
    progress_manager: Option<ProgressManager>,
}

impl BatchRunner {
    /// Create a new batch runner with the given CLI arguments
    pub fn new(cli: Cli) -> Self {
        let progress_manager = cli.should_show_progress().then(ProgressManager::new);

        Self {
            cli,
            progress_manager,
        }
    }

    /// Render every composition requested on the command line
    ///
    /// # Errors
    ///
    /// Returns an error if the output location is unusable, a session cannot
    /// be created, or an export fails
    pub fn process(&mut self) -> Result<()> {
        self.validate_output()?;
        let seeds = self.collect_seeds();

        if seeds.is_empty() {
            return Ok(());
        }

        if let Some(ref mut pm) = self.progress_manager {
            pm.initialize(seeds.len());
        }

        for (index, seed) in seeds.iter().enumerate() {
            self.process_seed(*seed, index)?;
        }

        if let Some(ref mut pm) = self.progress_manager {
            pm.finish();
        }

        Ok(())
    }

    fn validate_output(&self) -> Result<()> {
        if self.cli.output.is_file() {
            return Err(path_error(
                &self.cli.output,
                "Output must be a directory, not a file",
            ));
        }
        Ok(())
    }

    fn collect_seeds(&self) -> Vec<u64> {
        self.cli
            .seeds()
            .filter(|&seed| self.should_render(seed))
            .collect()
    }

    fn should_render(&self, seed: u64) -> bool {
        if !self.cli.skip_existing() {
            return true;
        }

        let output_path = Self::get_output_path(&self.cli.output, seed);
        if output_path.exists() {
            info!(seed, path = %output_path.display(), "Skipping (output exists)");
            false
        } else {
            true
        }
    }

    fn process_seed(&mut self, seed: u64, index: usize) -> Result<()> {
        let start_time = Instant::now();

        if let Some(ref mut pm) = self.progress_manager {
            pm.start_run(index, seed, self.cli.frames);
        }

        let mut session = Session::from_preset(self.cli.preset, seed)?;
        if self.cli.animate {
            session.enable_visualization();
        }

        for _ in 0..self.cli.frames {
            session.tick();
            if let Some(ref mut pm) = self.progress_manager {
                pm.update_frame(index, session.frame());
            }
        }

        let output_path = Self::get_output_path(&self.cli.output, seed);
        export_canvas_as_png(&session.render(), &output_path)?;

        if self.cli.animate {
            let animation_path = Self::get_animation_path(&self.cli.output, seed);
            session.export_visualization(&animation_path)?;
        }

        if let Some(ref mut pm) = self.progress_manager {
            pm.complete_run(index);
        }

        info!(
            seed,
            lines = session.horizontal_lines().len() + session.vertical_lines().len(),
            filled = session.colored().len(),
            elapsed_ms = start_time.elapsed().as_millis() as u64,
            path = %output_path.display(),
            "Composition rendered"
        );

        Ok(())
    }

    /// Path of the PNG written for `seed`
    pub fn get_output_path(output_dir: &Path, seed: u64) -> PathBuf {
        output_dir.join(format!("{OUTPUT_PREFIX}_{seed}.png"))
    }

    /// Path of the GIF written for `seed`
    pub fn get_animation_path(output_dir: &Path, seed: u64) -> PathBuf {
        output_dir.join(format!("{OUTPUT_PREFIX}_{seed}.gif"))
    }
}
