use anyhow::{Result, Context};
use std::path::{Path, PathBuf};

// @module: File and directory utilities

// @struct: File operations utility
pub struct FileManager;

impl FileManager {
    // @checks: File existence
    pub fn file_exists<P: AsRef<Path>>(path: P) -> bool {
        path.as_ref().exists() && path.as_ref().is_file()
    }

    // @creates: Directory and parents if needed
    pub async fn ensure_dir<P: AsRef<Path>>(path: P) -> Result<()> {
        let path = path.as_ref();
        if !path.as_os_str().is_empty() && !path.exists() {
            tokio::fs::create_dir_all(path)
                .await
                .with_context(|| format!("Failed to create directory: {:?}", path))?;
        }
        Ok(())
    }

    // @generates: Output path for the subtitle file
    // @params: output_dir, file_name; an extension-less name gets ".srt"
    pub fn generate_output_path<P: AsRef<Path>>(output_dir: P, file_name: &str) -> PathBuf {
        let mut output_path = output_dir.as_ref().join(file_name);
        if output_path.extension().is_none() {
            output_path.set_extension("srt");
        }
        output_path
    }

    /// Read a file to a string
    pub async fn read_to_string<P: AsRef<Path>>(path: P) -> Result<String> {
        tokio::fs::read_to_string(&path)
            .await
            .with_context(|| format!("Failed to read file: {:?}", path.as_ref()))
    }

    /// Write a string to a file
    pub async fn write_to_file<P: AsRef<Path>>(path: P, content: &str) -> Result<()> {
        // Ensure the parent directory exists
        if let Some(parent) = path.as_ref().parent() {
            Self::ensure_dir(parent).await?;
        }

        tokio::fs::write(&path, content)
            .await
            .with_context(|| format!("Failed to write to file: {:?}", path.as_ref()))?;

        Ok(())
    }
}
