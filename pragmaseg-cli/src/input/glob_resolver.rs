//! File pattern resolution using glob

use crate::error::CliError;
use anyhow::{Context, Result};
use glob::glob;
use std::fmt;
use std::path::{Path, PathBuf};

/// Input argument that stands for standard input
pub const STDIN_MARKER: &str = "-";

/// One resolved input
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub enum InputSource {
    Stdin,
    File(PathBuf),
}

impl fmt::Display for InputSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InputSource::Stdin => f.write_str("<stdin>"),
            InputSource::File(path) => write!(f, "{}", path.display()),
        }
    }
}

fn is_glob(pattern: &str) -> bool {
    pattern.contains(['*', '?', '['])
}

/// Resolve file patterns to inputs, in argument order. Files matched by a
/// single glob are sorted; duplicates are dropped.
pub fn resolve_patterns(patterns: &[String]) -> Result<Vec<InputSource>> {
    let mut inputs: Vec<InputSource> = Vec::new();

    for pattern in patterns {
        if pattern == STDIN_MARKER {
            if !inputs.contains(&InputSource::Stdin) {
                inputs.push(InputSource::Stdin);
            }
            continue;
        }

        if !is_glob(pattern) {
            let path = Path::new(pattern);
            if path.is_file() {
                push_file(&mut inputs, path.to_path_buf());
                continue;
            }
            if !path.exists() {
                log::warn!("{}", CliError::FileNotFound(pattern.clone()));
                continue;
            }
        }

        let paths = glob(pattern)
            .map_err(|e| CliError::InvalidPattern(format!("{pattern} ({e})")))?;

        let mut matched = Vec::new();
        for path_result in paths {
            let path =
                path_result.with_context(|| format!("Error resolving pattern: {}", pattern))?;

            if path.is_file() {
                matched.push(path);
            }
        }
        matched.sort();
        for path in matched {
            push_file(&mut inputs, path);
        }
    }

    if inputs.is_empty() {
        anyhow::bail!("No files found matching the provided patterns");
    }

    Ok(inputs)
}

fn push_file(inputs: &mut Vec<InputSource>, path: PathBuf) {
    let source = InputSource::File(path);
    if !inputs.contains(&source) {
        inputs.push(source);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn touch(dir: &TempDir, name: &str) -> PathBuf {
        let path = dir.path().join(name);
        fs::write(&path, "text").unwrap();
        path
    }

    #[test]
    fn test_glob_matches_sorted() {
        let dir = TempDir::new().unwrap();
        let b = touch(&dir, "b.txt");
        let a = touch(&dir, "a.txt");
        touch(&dir, "c.md");

        let pattern = dir.path().join("*.txt").display().to_string();
        let inputs = resolve_patterns(&[pattern]).unwrap();
        assert_eq!(inputs, vec![InputSource::File(a), InputSource::File(b)]);
    }

    #[test]
    fn test_argument_order_and_dedup() {
        let dir = TempDir::new().unwrap();
        let a = touch(&dir, "a.txt");
        let b = touch(&dir, "b.txt");

        let patterns = vec![
            b.display().to_string(),
            a.display().to_string(),
            b.display().to_string(),
        ];
        let inputs = resolve_patterns(&patterns).unwrap();
        assert_eq!(inputs, vec![InputSource::File(b), InputSource::File(a)]);
    }

    #[test]
    fn test_stdin_marker() {
        let inputs = resolve_patterns(&["-".to_string()]).unwrap();
        assert_eq!(inputs, vec![InputSource::Stdin]);
        assert_eq!(InputSource::Stdin.to_string(), "<stdin>");
    }

    #[test]
    fn test_no_files_found() {
        let err = resolve_patterns(&["/nonexistent/*.txt".to_string()]).unwrap_err();
        assert!(err.to_string().contains("No files found"));

        let err = resolve_patterns(&["/nonexistent/file.txt".to_string()]).unwrap_err();
        assert!(err.to_string().contains("No files found"));
    }

    #[test]
    fn test_invalid_pattern() {
        let err = resolve_patterns(&["[".to_string()]).unwrap_err();
        assert!(err.to_string().starts_with("Invalid file pattern"));
    }
}
