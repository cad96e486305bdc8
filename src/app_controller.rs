use anyhow::{Result, Context, anyhow};
use indicatif::{ProgressBar, ProgressStyle};
use log::{error, warn, info, debug};
use std::path::{Path, PathBuf};

use crate::app_config::Config;
use crate::captions::CaptionSet;
use crate::errors::AppError;
use crate::export::{self, ExportFormat};
use crate::file_utils::FileManager;

// @module: Application controller for caption conversion

/// What happened to one input file
#[derive(Debug, Clone, PartialEq)]
pub enum ConversionOutcome {
    /// Files written, in format order
    Written(Vec<PathBuf>),
    /// Nothing written because these outputs already exist
    Skipped(Vec<PathBuf>),
}

/// Counts for a folder run
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FolderSummary {
    pub converted: usize,
    pub skipped: usize,
    pub failed: usize,
}

/// Main application controller for caption conversion
pub struct Controller {
    // @field: App configuration
    config: Config,
}

impl Controller {
    // @method: Create a new controller with the given configuration
    pub fn with_config(config: Config) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Configuration in use
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Validate a raw payload and render every configured format in memory
    pub fn convert_str(&self, raw: &str) -> Result<Vec<(ExportFormat, String)>, AppError> {
        let set = CaptionSet::from_json_str(raw)?;
        info!("Gathering metadata...");
        debug!("{} events, {} chapters", set.len(), set.chapters().len());

        let rendered = export::render_all(&set, &self.config.formats, &self.config.export_options())?;
        Ok(rendered)
    }

    /// Convert one caption JSON file into the files for `prefix`.
    ///
    /// Every output is rendered before the first write, so an invalid payload
    /// leaves the output directory untouched.
    pub fn run(&self, input_file: &Path, prefix: &Path, force_overwrite: bool) -> Result<ConversionOutcome> {
        if !FileManager::file_exists(input_file) {
            return Err(anyhow!("Input file does not exist: {:?}", input_file));
        }

        let targets: Vec<PathBuf> = self
            .config
            .formats
            .iter()
            .map(|format| format.output_path(prefix))
            .collect();

        for target in &targets {
            if FileManager::same_file(input_file, target)? {
                return Err(anyhow!(
                    "Output {:?} would overwrite the input file {:?}; choose another output prefix",
                    target,
                    input_file
                ));
            }
        }

        let existing: Vec<PathBuf> = targets.iter().filter(|t| t.exists()).cloned().collect();
        if !existing.is_empty() && !force_overwrite {
            warn!("Output files already exist for {:?}. Use -f to force overwrite.", input_file);
            return Ok(ConversionOutcome::Skipped(existing));
        }

        let raw = FileManager::read_to_string(input_file)?;
        let rendered = self
            .convert_str(&raw)
            .with_context(|| format!("Failed to convert {:?}", input_file))?;

        let mut written = Vec::with_capacity(rendered.len());
        for ((_, content), target) in rendered.iter().zip(targets) {
            FileManager::write_to_file(&target, content)?;
            debug!("Wrote {:?}", target);
            written.push(target);
        }

        info!("Success: {:?} ({} files)", prefix, written.len());
        Ok(ConversionOutcome::Written(written))
    }

    /// Convert every `*.json` file directly inside `input_dir`
    pub fn run_folder(&self, input_dir: &Path, output_dir: Option<&Path>, force_overwrite: bool) -> Result<FolderSummary> {
        if !FileManager::dir_exists(input_dir) {
            return Err(anyhow!("Input directory does not exist: {:?}", input_dir));
        }

        let inputs = FileManager::find_files(input_dir, "json")?;
        if inputs.is_empty() {
            return Err(anyhow!("No caption JSON files found in directory: {:?}", input_dir));
        }

        let folder_pb = ProgressBar::new(inputs.len() as u64);
        let style = ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} files ({percent}%) {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar());
        folder_pb.set_style(style);
        folder_pb.set_message("Converting captions");

        let mut summary = FolderSummary::default();

        for input in &inputs {
            let file_name = input
                .file_name()
                .map(|f| f.to_string_lossy().to_string())
                .unwrap_or_else(|| "unknown".to_string());
            folder_pb.set_message(format!("Converting: {}", file_name));

            let prefix = FileManager::output_prefix(input, output_dir, None);
            match self.run(input, &prefix, force_overwrite) {
                Ok(ConversionOutcome::Written(_)) => summary.converted += 1,
                Ok(ConversionOutcome::Skipped(_)) => summary.skipped += 1,
                Err(e) => {
                    error!("Error processing file {}: {}", file_name, e);
                    summary.failed += 1;
                }
            }

            folder_pb.inc(1);
        }

        folder_pb.finish_and_clear();
        info!(
            "Finished {} files: {} converted, {} skipped, {} failed",
            inputs.len(),
            summary.converted,
            summary.skipped,
            summary.failed
        );

        Ok(summary)
    }
}
