use std::fmt;

/// Result of cutting a source text at its marker line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TruncateOutcome {
    Truncated {
        content: String,
        original_lines: usize,
        kept_lines: usize,
    },
    MarkerNotFound {
        lines: usize,
    },
}

/// Completion line printed after a successful rewrite.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Summary {
    pub original_lines: usize,
    pub kept_lines: usize,
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "File cleanup complete: {} -> {} lines",
            self.original_lines, self.kept_lines
        )
    }
}

/// Both `\n` and `\r\n` end a line, and a trailing terminator does not open
/// an empty last line. Rejoined output always uses `\n`.
pub fn split_lines(content: &str) -> Vec<&str> {
    content.lines().collect()
}

pub fn find_marker(content: &str, marker: &str) -> Option<usize> {
    split_lines(content)
        .iter()
        .position(|line| line.contains(marker))
}

/// Keep every line up to and including the first one containing `marker`.
pub fn truncate_after_marker(content: &str, marker: &str) -> TruncateOutcome {
    let lines = split_lines(content);
    match lines.iter().position(|line| line.contains(marker)) {
        Some(idx) => {
            let kept = &lines[..=idx];
            TruncateOutcome::Truncated {
                content: kept.join("\n"),
                original_lines: lines.len(),
                kept_lines: kept.len(),
            }
        }
        None => TruncateOutcome::MarkerNotFound { lines: lines.len() },
    }
}
