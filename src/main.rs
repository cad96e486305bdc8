// Module-specific lints configuration
#![allow(clippy::uninlined_format_args)]

use anyhow::{Result, anyhow};
use log::{info, LevelFilter, Log, Metadata, Record, Level, SetLoggerError};
use std::path::PathBuf;
use std::io::Write;
use clap::{Parser, ValueEnum, CommandFactory, Subcommand};
use clap_complete::{generate, Shell};

use legiscribe::app_config::{Config, LogLevel};
use legiscribe::app_controller::{ConversionOutcome, Controller};
use legiscribe::export::ExportFormat;
use legiscribe::file_utils::FileManager;

/// CLI Wrapper for ExportFormat to implement ValueEnum
#[derive(Debug, Clone, ValueEnum)]
enum CliExportFormat {
    Json,
    Srt,
    Vtt,
    ChaptersVtt,
    ChaptersTxt,
    Txt,
}

impl From<CliExportFormat> for ExportFormat {
    fn from(cli_format: CliExportFormat) -> Self {
        match cli_format {
            CliExportFormat::Json => ExportFormat::Json,
            CliExportFormat::Srt => ExportFormat::Srt,
            CliExportFormat::Vtt => ExportFormat::Vtt,
            CliExportFormat::ChaptersVtt => ExportFormat::VttChapters,
            CliExportFormat::ChaptersTxt => ExportFormat::ChaptersTxt,
            CliExportFormat::Txt => ExportFormat::Transcript,
        }
    }
}

/// CLI Wrapper for LogLevel to implement ValueEnum
#[derive(Debug, Clone, ValueEnum)]
enum CliLogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<CliLogLevel> for LogLevel {
    fn from(cli_level: CliLogLevel) -> Self {
        match cli_level {
            CliLogLevel::Error => LogLevel::Error,
            CliLogLevel::Warn => LogLevel::Warn,
            CliLogLevel::Info => LogLevel::Info,
            CliLogLevel::Debug => LogLevel::Debug,
            CliLogLevel::Trace => LogLevel::Trace,
        }
    }
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Convert Granicus caption JSON into subtitle, chapter and transcript files
    Convert(ConvertArgs),

    /// Generate shell completions for legiscribe
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(Parser, Debug)]
struct ConvertArgs {
    /// Caption JSON file, or a directory of them
    #[arg(value_name = "INPUT_PATH")]
    input_path: PathBuf,

    /// Directory for output files (default: `captions/` next to the input)
    #[arg(short, long)]
    output_dir: Option<PathBuf>,

    /// Output file name prefix (default: input file stem, single file only)
    #[arg(short, long)]
    prefix: Option<String>,

    /// Seconds an SRT cue stays on screen
    #[arg(long)]
    srt_ttl: Option<f64>,

    /// Seconds a WebVTT cue stays on screen
    #[arg(long)]
    vtt_ttl: Option<f64>,

    /// Formats to write (default: all)
    #[arg(long, value_enum, value_delimiter = ',')]
    formats: Vec<CliExportFormat>,

    /// Leave WebVTT cues without numeric identifiers
    #[arg(long)]
    no_vtt_numbers: bool,

    /// Force overwrite of existing output files
    #[arg(short, long)]
    force_overwrite: bool,

    /// Configuration file path
    #[arg(short, long, default_value = "conf.json")]
    config_path: PathBuf,

    /// Set logging level
    #[arg(short, long, value_enum)]
    log_level: Option<CliLogLevel>,
}

/// legiscribe - Granicus caption converter
///
/// Converts Granicus closed-caption JSON into WebVTT, SRT, chapter markers
/// and plain-text transcripts.
#[derive(Parser, Debug)]
#[command(name = "legiscribe")]
#[command(version)]
#[command(about = "Granicus caption JSON to WebVTT/SRT/chapters converter")]
#[command(long_about = "legiscribe converts Granicus closed-caption JSON into subtitle and chapter files.

EXAMPLES:
    legiscribe convert oakland_2206.json                  # Writes captions/oakland_2206.{json,srt,vtt,...}
    legiscribe convert -o out -p meeting clip.json        # Writes out/meeting.*
    legiscribe convert --formats srt,chapters-txt clip.json
    legiscribe convert --srt-ttl 4 -f /archive/           # Convert every *.json in a directory
    legiscribe completions bash > legiscribe.bash

OUTPUT FILES:
    .json          normalized caption events
    .srt           SubRip cues
    .vtt           WebVTT cues
    .chapters.vtt  WebVTT chapter track
    .chapters.txt  '<timecode> <title>' lines for MP4Box -chap
    .txt           plain transcript")]
struct CommandLineOptions {
    #[command(subcommand)]
    command: Commands,
}

// @struct: Custom logger implementation
struct CustomLogger {
    level: LevelFilter,
}

impl CustomLogger {
    // @creates: New logger with specified level
    fn new(level: LevelFilter) -> Self {
        CustomLogger { level }
    }

    // @initializes: Global logger
    fn init(level: LevelFilter) -> Result<(), SetLoggerError> {
        let logger = Box::new(CustomLogger::new(level));
        log::set_boxed_logger(logger)?;
        log::set_max_level(level);
        Ok(())
    }

    // @returns: ANSI colour for log level
    fn color_for_level(level: Level) -> &'static str {
        match level {
            Level::Error => "\x1B[1;31m",
            Level::Warn => "\x1B[1;33m",
            Level::Info => "\x1B[1;32m",
            Level::Debug => "\x1B[1;36m",
            Level::Trace => "\x1B[1;35m",
        }
    }
}

impl Log for CustomLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            let now = chrono::Local::now().format("%H:%M:%S.%3f");
            let color = Self::color_for_level(record.level());

            let mut stderr = std::io::stderr();
            let _ = writeln!(
                stderr,
                "{}{} {:<5} {}\x1B[0m",
                color, now, record.level(), record.args()
            );
        }
    }

    fn flush(&self) {
        let _ = std::io::stderr().flush();
    }
}

fn main() -> Result<()> {
    // The logger accepts everything; the max level is narrowed once config is loaded
    CustomLogger::init(LevelFilter::Trace)?;
    log::set_max_level(LevelFilter::Info);

    let cli = CommandLineOptions::parse();

    match cli.command {
        Commands::Completions { shell } => {
            let mut cmd = CommandLineOptions::command();
            generate(shell, &mut cmd, "legiscribe", &mut std::io::stdout());
            Ok(())
        }
        Commands::Convert(args) => run_convert(args),
    }
}

fn run_convert(options: ConvertArgs) -> Result<()> {
    // If log level is set via command line, apply it immediately
    if let Some(cmd_log_level) = &options.log_level {
        let level: LogLevel = cmd_log_level.clone().into();
        log::set_max_level(level.to_level_filter());
    }

    let mut config = Config::load_or_default(&options.config_path)?;

    // Override config with CLI options if provided
    if let Some(ttl) = options.srt_ttl {
        config.srt.ttl_secs = ttl;
    }
    if let Some(ttl) = options.vtt_ttl {
        config.vtt.ttl_secs = ttl;
    }
    if options.no_vtt_numbers {
        config.vtt.numbered = false;
    }
    if !options.formats.is_empty() {
        config.formats = options.formats.iter().cloned().map(ExportFormat::from).collect();
    }
    if let Some(log_level) = &options.log_level {
        config.log_level = log_level.clone().into();
    }

    log::set_max_level(config.log_level.to_level_filter());

    let controller = Controller::with_config(config)?;
    let output_dir = options.output_dir.as_deref();

    if options.input_path.is_file() {
        let prefix = FileManager::output_prefix(&options.input_path, output_dir, options.prefix.as_deref());
        match controller.run(&options.input_path, &prefix, options.force_overwrite)? {
            ConversionOutcome::Written(paths) => {
                for path in paths {
                    info!("Wrote {}", path.display());
                }
            }
            ConversionOutcome::Skipped(existing) => {
                info!("Skipped, {} output file(s) already exist", existing.len());
            }
        }
    } else if options.input_path.is_dir() {
        if options.prefix.is_some() {
            return Err(anyhow!("--prefix applies to a single input file, not a directory"));
        }
        let summary = controller.run_folder(&options.input_path, output_dir, options.force_overwrite)?;
        if summary.failed > 0 {
            return Err(anyhow!("{} file(s) failed to convert", summary.failed));
        }
    } else {
        return Err(anyhow!("Input path does not exist: {:?}", options.input_path));
    }

    Ok(())
}
