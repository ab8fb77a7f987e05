// Module-specific lints configuration
#![allow(clippy::uninlined_format_args)]

use anyhow::{Result, anyhow};
use clap::{CommandFactory, Parser, Subcommand, ValueEnum};
use clap_complete::{generate, Shell};
use log::{error, LevelFilter, Log, Metadata, Record, Level, SetLoggerError};
use std::io::Write;
use std::path::PathBuf;
use std::process::ExitCode;

use srtconv::app_config::{self, Config};
use srtconv::{Controller, OutputMode, TimelinePolicy};

/// CLI Wrapper for OutputMode to implement ValueEnum
#[derive(Debug, Clone, ValueEnum)]
enum CliOutputMode {
    /// Parsed entries as is, for debugging
    Raw,
    /// Text only, timing and entry numbers removed
    Text,
    /// Subtitle track with caption lines written back to back
    #[value(alias = "srtcatline")]
    Concatenated,
}

impl From<CliOutputMode> for OutputMode {
    fn from(cli_mode: CliOutputMode) -> Self {
        match cli_mode {
            CliOutputMode::Raw => OutputMode::Raw,
            CliOutputMode::Text => OutputMode::Text,
            CliOutputMode::Concatenated => OutputMode::Concatenated,
        }
    }
}

/// CLI Wrapper for TimelinePolicy to implement ValueEnum
#[derive(Debug, Clone, ValueEnum)]
enum CliTimelinePolicy {
    /// Leave times untouched
    None,
    /// Remove the empty time between entries
    #[value(name = "remove_gap", alias = "rm_gap", alias = "remove-gap")]
    RemoveGap,
}

impl From<CliTimelinePolicy> for TimelinePolicy {
    fn from(cli_policy: CliTimelinePolicy) -> Self {
        match cli_policy {
            CliTimelinePolicy::None => TimelinePolicy::None,
            CliTimelinePolicy::RemoveGap => TimelinePolicy::RemoveGap,
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

impl From<CliLogLevel> for app_config::LogLevel {
    fn from(cli_level: CliLogLevel) -> Self {
        match cli_level {
            CliLogLevel::Error => app_config::LogLevel::Error,
            CliLogLevel::Warn => app_config::LogLevel::Warn,
            CliLogLevel::Info => app_config::LogLevel::Info,
            CliLogLevel::Debug => app_config::LogLevel::Debug,
            CliLogLevel::Trace => app_config::LogLevel::Trace,
        }
    }
}

#[derive(clap::Args, Debug, Clone)]
struct LoggingArgs {
    /// Verbose mode on (same as --log-level debug)
    #[arg(short, long)]
    verbose: bool,

    /// Set logging level
    #[arg(short, long, value_enum)]
    log_level: Option<CliLogLevel>,
}

#[derive(clap::Args, Debug, Clone)]
struct ConvertArgs {
    /// Input subtitle file
    #[arg(short, long, value_name = "FILE")]
    infile: PathBuf,

    /// Output file
    #[arg(short, long, value_name = "FILE")]
    outfile: PathBuf,

    /// Output type
    #[arg(long, value_enum)]
    outtype: Option<CliOutputMode>,

    /// Timeline operation
    #[arg(long, value_enum)]
    timeline: Option<CliTimelinePolicy>,

    /// Gap/overlap in seconds treated as no gap
    #[arg(long, value_name = "SECONDS")]
    tolerance: Option<f64>,

    /// JSON configuration file
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    #[command(flatten)]
    logging: LoggingArgs,
}

#[derive(clap::Args, Debug, Clone)]
struct TranscriptArgs {
    /// Input transcript file (`M:SS text` per line)
    #[arg(short, long, value_name = "FILE")]
    infile: PathBuf,

    /// Output subtitle file
    #[arg(short, long, value_name = "FILE")]
    outfile: PathBuf,

    #[command(flatten)]
    logging: LoggingArgs,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Convert a subtitle file (default command)
    Convert(ConvertArgs),

    /// Generate a subtitle file from a video transcript
    Txt2srt(TranscriptArgs),

    /// Generate shell completions for srtconv
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// srtconv - subtitle file conversion
#[derive(Parser, Debug)]
#[command(name = "srtconv")]
#[command(version)]
#[command(about = "Convert subtitle files to transcripts and clean up their timeline")]
#[command(args_conflicts_with_subcommands = true)]
#[command(long_about = "Convert subtitle files to transcripts and clean up their timeline.

EXAMPLES:
    srtconv -i input.srt -o output.txt --outtype text
    srtconv -i input.srt -o output.srt --outtype concatenated
    srtconv -i input.srt -o output.srt --outtype concatenated --timeline remove_gap
    srtconv txt2srt -i transcript.txt -o output.srt
    srtconv completions bash > srtconv.bash

KNOWN ISSUES:
    An empty line completes an entry, so the last entry must be followed by an
    empty line or it is dropped, and two empty lines in a row are an error.")]
struct CommandLineOptions {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Input subtitle file
    #[arg(short, long, value_name = "FILE")]
    infile: Option<PathBuf>,

    /// Output file
    #[arg(short, long, value_name = "FILE")]
    outfile: Option<PathBuf>,

    /// Output type
    #[arg(long, value_enum)]
    outtype: Option<CliOutputMode>,

    /// Timeline operation
    #[arg(long, value_enum)]
    timeline: Option<CliTimelinePolicy>,

    /// Gap/overlap in seconds treated as no gap
    #[arg(long, value_name = "SECONDS")]
    tolerance: Option<f64>,

    /// JSON configuration file
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    #[command(flatten)]
    logging: LoggingArgs,
}

// @struct: Custom logger implementation, filtering on the global max level
// so the level can be raised after the configuration is loaded
struct CustomLogger;

impl CustomLogger {
    // @initializes: Global logger
    fn init(level: LevelFilter) -> Result<(), SetLoggerError> {
        log::set_boxed_logger(Box::new(CustomLogger))?;
        log::set_max_level(level);
        Ok(())
    }

    // @returns: Tag and ANSI colour for log level
    fn style_for_level(level: Level) -> (&'static str, &'static str) {
        match level {
            Level::Error => ("error:", "1;31"),
            Level::Warn => ("warning:", "1;33"),
            Level::Info => ("", "1;32"),
            Level::Debug => ("verbose:", "1;36"),
            Level::Trace => ("trace:", "1;35"),
        }
    }
}

impl Log for CustomLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            let now = chrono::Local::now().format("%H:%M:%S.%3f");
            let (tag, colour) = Self::style_for_level(record.level());

            let mut stderr = std::io::stderr();
            let _ = writeln!(stderr, "\x1B[{}m{} {} {}\x1B[0m", colour, now, tag, record.args());
        }
    }

    fn flush(&self) {
        let _ = std::io::stderr().flush();
    }
}

fn apply_log_level(logging: &LoggingArgs, config: &mut Config) {
    if let Some(level) = &logging.log_level {
        config.log_level = level.clone().into();
    }
    if logging.verbose {
        config.log_level = app_config::LogLevel::Debug;
    }
    log::set_max_level(config.log_level.to_level_filter());
}

fn run_convert(args: ConvertArgs) -> Result<()> {
    let mut config = match &args.config {
        Some(path) => Config::from_file(path)?,
        None => Config::default(),
    };

    if let Some(outtype) = args.outtype {
        config.output_mode = outtype.into();
    }
    if let Some(timeline) = args.timeline {
        config.timeline_policy = timeline.into();
    }
    if let Some(tolerance) = args.tolerance {
        config.tolerance_secs = tolerance;
    }
    apply_log_level(&args.logging, &mut config);

    let controller = Controller::with_config(config)?;
    controller.run(&args.infile, &args.outfile)?;
    Ok(())
}

fn run_transcript(args: TranscriptArgs) -> Result<()> {
    let mut config = Config::default();
    apply_log_level(&args.logging, &mut config);

    let controller = Controller::with_config(config)?;
    controller.run_transcript(&args.infile, &args.outfile)?;
    Ok(())
}

fn run(cli: CommandLineOptions) -> Result<()> {
    match cli.command {
        Some(Commands::Completions { shell }) => {
            let mut cmd = CommandLineOptions::command();
            generate(shell, &mut cmd, "srtconv", &mut std::io::stdout());
            Ok(())
        }
        Some(Commands::Convert(args)) => run_convert(args),
        Some(Commands::Txt2srt(args)) => run_transcript(args),
        None => {
            // Default behavior - top-level args are the convert args
            let infile = cli.infile
                .ok_or_else(|| anyhow!("No input file. Use -i to specify the input file."))?;
            let outfile = cli.outfile
                .ok_or_else(|| anyhow!("No output file. Use -o to specify the output file."))?;

            run_convert(ConvertArgs {
                infile,
                outfile,
                outtype: cli.outtype,
                timeline: cli.timeline,
                tolerance: cli.tolerance,
                config: cli.config,
                logging: cli.logging,
            })
        }
    }
}

fn main() -> ExitCode {
    if let Err(e) = CustomLogger::init(app_config::LogLevel::default().to_level_filter()) {
        eprintln!("Failed to initialize logger: {}", e);
    }

    let cli = CommandLineOptions::parse();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{:#}", e);
            ExitCode::FAILURE
        }
    }
}
