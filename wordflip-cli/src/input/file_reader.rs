//! File reading utilities

use crate::error::CliError;
use anyhow::{Context, Result};
use std::fs;
use std::io::{self, Read};
use std::path::Path;
use wordflip_api::ApiError;

/// File reader with UTF-8 validation
pub struct FileReader;

impl FileReader {
    /// Read a file as UTF-8 text
    pub fn read_text(path: &Path) -> Result<String> {
        Self::read_text_limited(path, None)
    }

    /// Read a file as UTF-8 text, rejecting files larger than `limit` bytes
    /// before any of their content is loaded
    pub fn read_text_limited(path: &Path, limit: Option<usize>) -> Result<String> {
        if !path.exists() {
            return Err(CliError::FileNotFound(path.display().to_string()).into());
        }

        if let Some(limit) = limit {
            let size = fs::metadata(path)
                .with_context(|| format!("Failed to read file: {}", path.display()))?
                .len();
            check_size(usize::try_from(size).unwrap_or(usize::MAX), limit)?;
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read file: {}", path.display()))?;

        Ok(content)
    }

    /// Read all of standard input as UTF-8 text
    pub fn read_stdin() -> Result<String> {
        Self::read_stdin_limited(None)
    }

    /// Read standard input, stopping once more than `limit` bytes arrive
    pub fn read_stdin_limited(limit: Option<usize>) -> Result<String> {
        Self::read_limited(io::stdin().lock(), limit).context("Failed to read standard input")
    }

    fn read_limited<R: Read>(reader: R, limit: Option<usize>) -> Result<String> {
        // One byte past the limit is enough to tell it was exceeded
        let cap = limit.map_or(u64::MAX, |limit| {
            u64::try_from(limit).unwrap_or(u64::MAX).saturating_add(1)
        });

        let mut bytes = Vec::new();
        reader.take(cap).read_to_end(&mut bytes)?;
        if let Some(limit) = limit {
            check_size(bytes.len(), limit)?;
        }

        Ok(String::from_utf8(bytes)?)
    }
}

fn check_size(size: usize, limit: usize) -> Result<(), CliError> {
    if size > limit {
        return Err(ApiError::InputTooLarge { size, limit }.into());
    }
    Ok(())
}
