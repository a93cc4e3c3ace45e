/*!
 * Common test utilities for the txt2srt test suite
 */

use std::path::{Path, PathBuf};
use std::fs;
use anyhow::Result;
use tempfile::TempDir;

/// Creates a temporary directory for test files
pub fn create_temp_dir() -> Result<TempDir> {
    Ok(TempDir::new()?)
}

/// Creates a test file with the given content in the specified directory
pub fn create_test_file(dir: &Path, filename: &str, content: &str) -> Result<PathBuf> {
    let file_path = dir.join(filename);
    fs::write(&file_path, content)?;
    Ok(file_path)
}

/// Creates a sample script with blank lines between some of the dialogue
pub fn create_test_script(dir: &Path, filename: &str) -> Result<PathBuf> {
    let content = "First line of the song\n\nSecond line\n   \nThird line\nFourth line\n";
    create_test_file(dir, filename, content)
}

/// Route log output through the test harness
pub fn init_test_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Pull every (start, end) pair in seconds out of rendered SRT text
pub fn parse_time_ranges(srt: &str) -> Vec<(f64, f64)> {
    srt.lines()
        .filter_map(|line| line.split_once(" --> "))
        .map(|(start, end)| (timestamp_to_seconds(start), timestamp_to_seconds(end)))
        .collect()
}

fn timestamp_to_seconds(ts: &str) -> f64 {
    let (hms, millis) = ts.split_once(',').expect("timestamp has milliseconds");
    let parts: Vec<f64> = hms.split(':').map(|p| p.parse().expect("numeric field")).collect();
    parts[0] * 3600.0 + parts[1] * 60.0 + parts[2] + millis.parse::<f64>().expect("numeric millis") / 1000.0
}
