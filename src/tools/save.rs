//! Guarded save tool
//!
//! Appends research notes to a shared output file. A minimum-content policy
//! blocks the model from persisting trivial or premature fragments.

use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

use chrono::Local;

use crate::core::Result;

/// Sentinel returned when content is below the save threshold
pub const REFUSE_SENTINEL: &str = "REFUSE_SAVE: content_too_short";

/// Minimum trimmed content length (in characters) accepted for a save
const MIN_CONTENT_CHARS: usize = 200;

/// Tool that persists research notes under a guard policy
pub struct SaveTool {
    path: PathBuf,
}

impl SaveTool {
    /// Create a save tool targeting the given file
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Target file path
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Save research notes, appending one timestamped block.
    ///
    /// Content whose trimmed length is under the threshold is refused via
    /// the sentinel string; nothing is written in that case. Accepted
    /// content is appended (never truncated or rewritten), creating the
    /// file and its directory on first use.
    pub fn save(&self, data: &str) -> Result<String> {
        let trimmed = data.trim();

        if trimmed.chars().count() < MIN_CONTENT_CHARS {
            return Ok(REFUSE_SENTINEL.to_string());
        }

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }

        let timestamp = Local::now().format("%Y-%m-%d %H:%M:%S");
        let block = format!(
            "--- Research Output ---\nTimestamp: {}\n\n{}\n\n",
            timestamp, trimmed
        );

        // Append-only: concurrent runs interleave whole blocks, never bytes
        // within one, as long as the OS honors O_APPEND
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        file.write_all(block.as_bytes())?;

        Ok(format!("Data successfully saved to {}", self.path.display()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn tool_in(dir: &TempDir) -> SaveTool {
        SaveTool::new(dir.path().join("outputs").join("research_output.txt"))
    }

    fn long_content() -> String {
        "The movable-type printing press spread rapidly across Europe. ".repeat(5)
    }

    #[test]
    fn test_refuses_short_content() {
        let dir = TempDir::new().unwrap();
        let tool = tool_in(&dir);

        let result = tool.save("too short").unwrap();
        assert_eq!(result, REFUSE_SENTINEL);
        assert!(!tool.path().exists());
    }

    #[test]
    fn test_refusal_is_idempotent() {
        let dir = TempDir::new().unwrap();
        let tool = tool_in(&dir);

        for _ in 0..3 {
            assert_eq!(tool.save("   tiny   ").unwrap(), REFUSE_SENTINEL);
        }
        assert!(!tool.path().exists());
    }

    #[test]
    fn test_whitespace_padding_does_not_pass_guard() {
        let dir = TempDir::new().unwrap();
        let tool = tool_in(&dir);

        let padded = format!("{}short{}", " ".repeat(300), " ".repeat(300));
        assert_eq!(tool.save(&padded).unwrap(), REFUSE_SENTINEL);
        assert!(!tool.path().exists());
    }

    #[test]
    fn test_accepted_save_writes_one_block() {
        let dir = TempDir::new().unwrap();
        let tool = tool_in(&dir);
        let content = long_content();

        let result = tool.save(&content).unwrap();
        assert!(result.starts_with("Data successfully saved to"));

        let written = fs::read_to_string(tool.path()).unwrap();
        assert!(written.starts_with("--- Research Output ---\nTimestamp: "));
        assert!(written.contains(content.trim()));
        assert!(written.ends_with("\n\n"));
        assert_eq!(written.matches("--- Research Output ---").count(), 1);
    }

    #[test]
    fn test_appends_preserve_prior_blocks() {
        let dir = TempDir::new().unwrap();
        let tool = tool_in(&dir);
        let content = long_content();

        tool.save(&content).unwrap();
        let first = fs::read_to_string(tool.path()).unwrap();

        tool.save(&content).unwrap();
        let second = fs::read_to_string(tool.path()).unwrap();

        assert!(second.starts_with(&first));
        assert_eq!(second.matches("--- Research Output ---").count(), 2);
    }

    #[test]
    fn test_threshold_counts_chars_not_bytes() {
        let dir = TempDir::new().unwrap();
        let tool = tool_in(&dir);

        // 199 multibyte chars stay under the threshold even at 3 bytes each
        let content = "漢".repeat(199);
        assert_eq!(tool.save(&content).unwrap(), REFUSE_SENTINEL);

        let content = "漢".repeat(200);
        assert!(tool.save(&content).unwrap().starts_with("Data successfully"));
    }
}
