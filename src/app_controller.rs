use log::{debug, info, warn};
use std::path::{Path, PathBuf};
use std::time::Instant;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use crate::app_config::Config;
use crate::duration::DurationSpec;
use crate::errors::{AppError, ConversionError};
use crate::file_utils::FileManager;
use crate::line_splitter;
use crate::subtitle_processor::CueSheet;

// @module: Application controller for text to subtitle conversion

/// Where the raw text comes from
#[derive(Debug, Clone, PartialEq)]
pub enum InputSource {
    /// Text given directly
    Text(String),
    /// Full contents of a text file
    File(PathBuf),
    /// Plain text piped on standard input
    Stdin,
}

impl InputSource {
    /// Pick the source from command line values: inline text wins, then a
    /// path, where `-` or no path means standard input.
    pub fn from_args(text: Option<String>, input_path: Option<PathBuf>) -> Self {
        match (text, input_path) {
            (Some(text), _) => InputSource::Text(text),
            (None, Some(path)) if path.as_os_str() == "-" => InputSource::Stdin,
            (None, Some(path)) => InputSource::File(path),
            (None, None) => InputSource::Stdin,
        }
    }
}

/// Where the rendered subtitles go
#[derive(Debug, Clone, PartialEq)]
pub enum OutputTarget {
    /// Write an .srt file
    File(PathBuf),
    /// Print to standard output
    Stdout,
}

/// Convert raw text into SRT text spanning the given `M:S` duration.
///
/// Input without any non-empty line converts to an empty string.
pub fn convert(raw: &str, duration: &str) -> Result<String, ConversionError> {
    let total_seconds = DurationSpec::parse(duration)?.total_seconds();
    let lines = line_splitter::split_lines(raw);
    Ok(CueSheet::from_lines(&lines, total_seconds).render())
}

/// Main application controller for one conversion session
pub struct Controller {
    // @field: App configuration
    config: Config,

    // @field: Current raw input, replaced only by a successful read
    input: String,
}

impl Controller {
    /// Create a new controller for test purposes with default configuration
    pub fn new_for_test() -> Result<Self, AppError> {
        Self::with_config(Config::default())
    }

    // @method: Create a new controller with the given configuration
    pub fn with_config(config: Config) -> Result<Self, AppError> {
        config
            .validate()
            .map_err(|e| AppError::Config(e.to_string()))?;

        Ok(Self {
            config,
            input: String::new(),
        })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Current raw input text
    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn set_input<S: Into<String>>(&mut self, text: S) {
        self.input = text.into();
    }

    /// Default destination: the configured file name in the current directory
    pub fn default_output_target(&self) -> OutputTarget {
        OutputTarget::File(FileManager::generate_output_path(".", &self.config.output_file_name))
    }

    /// Pick the destination from command line values: `--stdout` wins, then
    /// an explicit path, then the default file.
    pub fn output_target(&self, to_stdout: bool, output: Option<PathBuf>) -> OutputTarget {
        if to_stdout {
            OutputTarget::Stdout
        } else if let Some(output) = output {
            OutputTarget::File(output)
        } else {
            self.default_output_target()
        }
    }

    /// Replace the current input with the full contents of `source`.
    ///
    /// On failure the previous input is kept.
    pub async fn load_input(&mut self, source: &InputSource) -> Result<(), AppError> {
        let text = match source {
            InputSource::Text(text) => text.clone(),
            InputSource::File(path) => Self::read_input_file(path).await?,
            InputSource::Stdin => {
                let mut text = String::new();
                tokio::io::stdin()
                    .read_to_string(&mut text)
                    .await
                    .map_err(|e| AppError::FileRead {
                        path: PathBuf::from("<stdin>"),
                        message: e.to_string(),
                    })?;
                text
            }
        };

        let text = line_splitter::strip_byte_order_mark(text);

        debug!(
            "Loaded {} bytes of input ({} caption lines)",
            text.len(),
            line_splitter::count_lines(&text)
        );
        self.input = text;
        Ok(())
    }

    async fn read_input_file(path: &Path) -> Result<String, AppError> {
        if !FileManager::file_exists(path) {
            return Err(AppError::FileRead {
                path: path.to_path_buf(),
                message: "file does not exist".to_string(),
            });
        }

        FileManager::read_to_string(path)
            .await
            .map_err(|e| AppError::FileRead {
                path: path.to_path_buf(),
                message: format!("{:#}", e),
            })
    }

    /// Build cues from the current input, using the configured duration when
    /// `duration` is None.
    pub fn convert(&self, duration: Option<&str>) -> Result<CueSheet, ConversionError> {
        let spec = match duration {
            Some(duration) => DurationSpec::parse(duration)?,
            None => self.config.duration()?,
        };

        let lines = line_splitter::split_lines(&self.input);
        let sheet = CueSheet::from_lines(&lines, spec.total_seconds());

        if spec.has_uncarried_seconds() {
            warn!(
                "Duration {} has {} seconds; using {} seconds in total without carrying into minutes",
                spec,
                spec.seconds,
                spec.total_seconds()
            );
        }

        if sheet.is_empty() {
            debug!("Input has no non-empty lines");
        } else {
            info!("Converted {} lines over {}", sheet.len(), spec);
        }

        Ok(sheet)
    }

    /// Deliver rendered cues to `target`.
    ///
    /// Returns the written path, or None when nothing was written: empty
    /// output, stdout, or an existing file without `force_overwrite`.
    pub async fn deliver(&self, sheet: &CueSheet, target: &OutputTarget, force_overwrite: bool) -> Result<Option<PathBuf>, AppError> {
        if let Err(e) = sheet.check_not_empty() {
            warn!("{}, no subtitles written", e);
            return Ok(None);
        }

        match target {
            OutputTarget::Stdout => {
                let output = sheet.render();
                let mut stdout = tokio::io::stdout();
                stdout.write_all(output.as_bytes()).await?;
                stdout.flush().await?;
                Ok(None)
            }
            OutputTarget::File(path) => {
                if path.exists() && !force_overwrite {
                    warn!("Output file already exists: {:?}. Use -f to force overwrite.", path);
                    return Ok(None);
                }

                sheet
                    .write_to_srt(path)
                    .await
                    .map_err(|e| AppError::FileWrite {
                        path: path.clone(),
                        message: format!("{:#}", e),
                    })?;

                info!("Success: {:?}", path);
                Ok(Some(path.clone()))
            }
        }
    }

    /// Run one full conversion: acquire input, convert, deliver
    pub async fn run(&mut self, source: &InputSource, duration: Option<&str>, target: &OutputTarget, force_overwrite: bool) -> Result<Option<PathBuf>, AppError> {
        let start_time = Instant::now();

        self.load_input(source).await?;
        let sheet = self.convert(duration)?;
        let written = self.deliver(&sheet, target, force_overwrite).await?;

        debug!("Conversion finished in {:?}", start_time.elapsed());
        Ok(written)
    }
}
