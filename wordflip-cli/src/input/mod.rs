//! Input handling module

pub mod file_reader;
pub mod glob_resolver;

pub use file_reader::FileReader;
pub use glob_resolver::resolve_patterns;

use anyhow::Result;
use std::fmt;
use std::path::PathBuf;

/// Pattern that selects standard input
pub const STDIN_PATTERN: &str = "-";

/// A single resolved input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSource {
    /// Standard input
    Stdin,
    /// A file on disk
    File(PathBuf),
}

impl InputSource {
    /// Read the full text of the source, refusing inputs over `limit` bytes
    pub fn read_text(&self, limit: Option<usize>) -> Result<String> {
        match self {
            InputSource::Stdin => FileReader::read_stdin_limited(limit),
            InputSource::File(path) => FileReader::read_text_limited(path, limit),
        }
    }
}

impl fmt::Display for InputSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InputSource::Stdin => f.write_str("<stdin>"),
            InputSource::File(path) => write!(f, "{}", path.display()),
        }
    }
}

/// Resolve command-line patterns into input sources.
///
/// `-` selects standard input, which is always placed first and included at
/// most once; everything else is expanded as a glob.
pub fn resolve_sources(patterns: &[String]) -> Result<Vec<InputSource>> {
    let use_stdin = patterns.iter().any(|p| p == STDIN_PATTERN);
    let file_patterns: Vec<String> = patterns
        .iter()
        .filter(|p| p.as_str() != STDIN_PATTERN)
        .cloned()
        .collect();

    let mut sources = Vec::new();
    if use_stdin {
        sources.push(InputSource::Stdin);
    }
    if !file_patterns.is_empty() {
        sources.extend(
            resolve_patterns(&file_patterns)?
                .into_iter()
                .map(InputSource::File),
        );
    }

    Ok(sources)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_stdin_only() {
        let sources = resolve_sources(&["-".to_string()]).unwrap();
        assert_eq!(sources, [InputSource::Stdin]);
    }

    #[test]
    fn test_stdin_and_files() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("a.txt");
        fs::write(&path, "a").unwrap();

        let patterns = vec![
            path.to_string_lossy().into_owned(),
            "-".to_string(),
            "-".to_string(),
        ];
        let sources = resolve_sources(&patterns).unwrap();
        assert_eq!(sources, [InputSource::Stdin, InputSource::File(path)]);
    }

    #[test]
    fn test_display() {
        assert_eq!(InputSource::Stdin.to_string(), "<stdin>");
        assert_eq!(
            InputSource::File(PathBuf::from("dir/file.txt")).to_string(),
            "dir/file.txt"
        );
    }
}
