// Module-specific lints configuration
#![allow(clippy::uninlined_format_args)]

use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand, ValueEnum};
use clap_complete::{generate, Shell};
use log::{error, Level, LevelFilter, Log, Metadata, Record, SetLoggerError};
use std::io::Write;
use std::path::PathBuf;

use txt2srt::app_config::{self, Config};
use txt2srt::{Controller, InputSource};

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

#[derive(Subcommand, Debug)]
enum Commands {
    /// Generate shell completions for txt2srt
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// txt2srt - plain text to SubRip subtitles
///
/// Every non-empty line of the input becomes one subtitle, and all subtitles
/// share the total duration equally.
#[derive(Parser, Debug)]
#[command(name = "txt2srt")]
#[command(version)]
#[command(about = "Convert plain text lines into an evenly timed SRT subtitle file")]
#[command(long_about = "txt2srt turns a text file (one line of dialogue per line) into an SRT file.
Blank lines are skipped and every remaining line gets an equal share of the total duration.

EXAMPLES:
    txt2srt lyrics.txt -d 5:30                # Writes subtitle.srt in the current directory
    txt2srt lyrics.txt -d 3:05 -o song.srt    # Choose the output file
    cat script.txt | txt2srt -d 0:45 --stdout # Read stdin, print the result
    txt2srt --text $'Hello\\nWorld' -d 0:10   # Convert text given inline (bash)
    txt2srt completions bash > txt2srt.bash   # Generate bash completions

CONFIGURATION:
    Settings are read from conf.json by default (see --config-path). Missing
    settings fall back to a 5:30 duration and a subtitle.srt output file.")]
struct CommandLineOptions {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Text file to convert; '-' or nothing reads standard input
    #[arg(value_name = "INPUT_PATH", conflicts_with = "text")]
    input_path: Option<PathBuf>,

    /// Convert this text instead of reading a file
    #[arg(long)]
    text: Option<String>,

    /// Total duration to distribute, as M:S (e.g. 5:30)
    #[arg(short, long)]
    duration: Option<String>,

    /// Output subtitle file
    #[arg(short, long, conflicts_with = "stdout")]
    output: Option<PathBuf>,

    /// Print the subtitles instead of writing a file
    #[arg(long)]
    stdout: bool,

    /// Force overwrite of an existing output file
    #[arg(short, long)]
    force_overwrite: bool,

    /// Configuration file path
    #[arg(short, long, default_value = "conf.json")]
    config_path: String,

    /// Set logging level
    #[arg(short, long, value_enum)]
    log_level: Option<CliLogLevel>,
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

    // @returns: Emoji and ANSI color for log level
    fn style_for_level(level: Level) -> (&'static str, &'static str) {
        match level {
            Level::Error => ("❌", "1;31"),
            Level::Warn => ("🚧", "1;33"),
            Level::Info => ("✅", "1;32"),
            Level::Debug => ("🔍", "1;36"),
            Level::Trace => ("📋", "1;35"),
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
            let (emoji, color) = Self::style_for_level(record.level());

            let _ = writeln!(
                std::io::stderr(),
                "\x1B[{}m{} {} {}\x1B[0m",
                color, now, emoji, record.args()
            );
        }
    }

    fn flush(&self) {
        let _ = std::io::stderr().flush();
    }
}

#[tokio::main]
async fn main() {
    // The logger accepts everything; the effective level is set through max_level
    if let Err(e) = CustomLogger::init(LevelFilter::Trace) {
        eprintln!("Failed to initialize logger: {}", e);
    }
    log::set_max_level(LevelFilter::Info);

    let cli = CommandLineOptions::parse();

    if let Some(Commands::Completions { shell }) = cli.command {
        let mut cmd = CommandLineOptions::command();
        generate(shell, &mut cmd, "txt2srt", &mut std::io::stdout());
        return;
    }

    if let Err(e) = run_convert(cli).await {
        error!("{:#}", e);
        std::process::exit(1);
    }
}

async fn run_convert(options: CommandLineOptions) -> Result<()> {
    // If log level is set via command line, apply it before loading the config
    if let Some(cmd_log_level) = &options.log_level {
        let level: app_config::LogLevel = cmd_log_level.clone().into();
        log::set_max_level(level.to_level_filter());
    }

    let mut config = Config::load_or_default(&options.config_path)?;

    if let Some(log_level) = &options.log_level {
        config.log_level = log_level.clone().into();
    } else {
        log::set_max_level(config.log_level.to_level_filter());
    }

    let mut controller = Controller::with_config(config)?;

    let source = InputSource::from_args(options.text, options.input_path);
    let target = controller.output_target(options.stdout, options.output);

    controller
        .run(&source, options.duration.as_deref(), &target, options.force_overwrite)
        .await?;

    Ok(())
}
