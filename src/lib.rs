/*!
 * # txt2srt - plain text to SubRip subtitles
 *
 * A Rust library for turning a script (one line of dialogue per line) into an
 * SRT subtitle file whose cues evenly share a known total duration.
 *
 * ## Features
 *
 * - Blank lines are skipped, every other line becomes one cue
 * - Durations are given as `M:S` (e.g. `5:30`)
 * - Timestamps are truncated to the millisecond, never rounded
 * - Everything runs locally, the text never leaves the machine
 *
 * ## Architecture
 *
 * The library is organized in these main modules:
 * - `line_splitter`: Raw text to caption lines
 * - `duration`: `M:S` duration parsing
 * - `subtitle_processor`: Cue timing and SRT rendering
 * - `app_config`: Configuration management
 * - `app_controller`: Input acquisition, conversion and output delivery
 * - `file_utils`: File system operations
 * - `errors`: Custom error types for the application
 *
 * ## License
 *
 * This project is licensed under the MIT License
 */

// Global lints configuration
// These lints will be allowed but not auto-fixed
#![allow(clippy::uninlined_format_args)]
#![allow(clippy::redundant_closure_for_method_calls)]

// Public modules
pub mod app_config;
pub mod app_controller;
pub mod duration;
pub mod errors;
pub mod file_utils;
pub mod line_splitter;
pub mod subtitle_processor;

// Re-export main types for easier usage
pub use app_config::Config;
pub use app_controller::{convert, Controller, InputSource, OutputTarget};
pub use duration::{parse_duration, DurationSpec};
pub use errors::{AppError, ConversionError};
pub use line_splitter::split_lines;
pub use subtitle_processor::{format_srt, format_timestamp, Cue, CueSheet};
