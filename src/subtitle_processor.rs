use std::fmt;
use std::path::Path;
use anyhow::Result;
use log::debug;
use crate::errors::ConversionError;
use crate::file_utils::FileManager;

// @module: SRT cue timing and rendering

/// Format seconds as an SRT timestamp (`HH:MM:SS,mmm`).
///
/// Every field is truncated, never rounded, so `10.0 / 3.0` renders as
/// `00:00:03,333`. Negative and non-finite values render as zero.
pub fn format_timestamp(seconds: f64) -> String {
    let seconds = if seconds.is_finite() { seconds.max(0.0) } else { 0.0 };

    let hours = (seconds / 3600.0).floor() as u64;
    let minutes = ((seconds % 3600.0) / 60.0).floor() as u64;
    let secs = (seconds % 60.0).floor() as u64;
    let millis = ((seconds % 1.0) * 1000.0).floor() as u64;

    format!("{:02}:{:02}:{:02},{:03}", hours, minutes, secs, millis)
}

// @struct: Single timed subtitle entry
#[derive(Debug, Clone, PartialEq)]
pub struct Cue {
    // @field: 1-based sequence number
    pub index: usize,

    // @field: Start time in seconds
    pub start_seconds: f64,

    // @field: End time in seconds
    pub end_seconds: f64,

    // @field: Caption text, exactly as it appeared in the input
    pub text: String,
}

impl Cue {
    pub fn new(index: usize, start_seconds: f64, end_seconds: f64, text: String) -> Self {
        Cue {
            index,
            start_seconds,
            end_seconds,
            text,
        }
    }

    /// Convert start time to formatted SRT timestamp
    pub fn format_start_time(&self) -> String {
        format_timestamp(self.start_seconds)
    }

    /// Convert end time to formatted SRT timestamp
    pub fn format_end_time(&self) -> String {
        format_timestamp(self.end_seconds)
    }
}

/// Renders one block: index, time range, text. Blocks are separated by a
/// blank line when joined, see [`CueSheet::render`].
impl fmt::Display for Cue {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "{}", self.index)?;
        writeln!(f, "{} --> {}", self.format_start_time(), self.format_end_time())?;
        writeln!(f, "{}", self.text)
    }
}

/// Ordered cues that evenly partition a total duration
#[derive(Debug, Clone, PartialEq)]
pub struct CueSheet {
    /// Cues in index order
    pub cues: Vec<Cue>,

    /// Length the cues cover, in seconds
    pub total_seconds: f64,
}

impl CueSheet {
    /// Give every line an equal share of `total_seconds`.
    ///
    /// Cue `i` runs from `slot * i` to `slot * (i + 1)` where
    /// `slot = total_seconds / lines.len()`. No lines means no cues; the
    /// division is never attempted.
    pub fn from_lines<S: AsRef<str>>(lines: &[S], total_seconds: f64) -> Self {
        if lines.is_empty() {
            debug!("No lines to caption, producing an empty cue sheet");
            return CueSheet {
                cues: Vec::new(),
                total_seconds,
            };
        }

        let time_per_line = total_seconds / lines.len() as f64;
        debug!(
            "Distributing {}s over {} lines ({}s per line)",
            total_seconds,
            lines.len(),
            time_per_line
        );

        let cues = lines
            .iter()
            .enumerate()
            .map(|(i, line)| {
                Cue::new(
                    i + 1,
                    time_per_line * i as f64,
                    time_per_line * (i + 1) as f64,
                    line.as_ref().to_string(),
                )
            })
            .collect();

        CueSheet { cues, total_seconds }
    }

    pub fn len(&self) -> usize {
        self.cues.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cues.is_empty()
    }

    // @validates: At least one cue to deliver
    pub fn check_not_empty(&self) -> Result<(), ConversionError> {
        if self.cues.is_empty() {
            return Err(ConversionError::EmptyInput);
        }
        Ok(())
    }

    /// Render all cues as SRT text, one blank line between blocks.
    pub fn render(&self) -> String {
        self.cues
            .iter()
            .map(|cue| cue.to_string())
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Write the rendered cues to an SRT file, creating parent directories
    pub async fn write_to_srt<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        FileManager::write_to_file(path, &self.render()).await
    }
}

impl fmt::Display for CueSheet {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(&self.render())
    }
}

/// Format lines into SRT text spanning `total_seconds`.
///
/// An empty slice yields an empty string.
pub fn format_srt<S: AsRef<str>>(lines: &[S], total_seconds: f64) -> String {
    CueSheet::from_lines(lines, total_seconds).render()
}
