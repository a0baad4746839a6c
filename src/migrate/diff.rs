use colored::*;
use similar::{ChangeTag, TextDiff};
use std::fmt;

/// Line-level difference between two versions of a rewritten file.
#[derive(Debug, Clone)]
pub struct FileDiff {
    pub path: String,
    pub old_content: String,
    pub new_content: String,
    pub additions: usize,
    pub deletions: usize,
}

impl FileDiff {
    pub fn new(path: impl Into<String>, old_content: String, new_content: String) -> Self {
        let (additions, deletions) = TextDiff::from_lines(&old_content, &new_content)
            .iter_all_changes()
            .fold((0, 0), |(add, del), change| match change.tag() {
                ChangeTag::Insert => (add + 1, del),
                ChangeTag::Delete => (add, del + 1),
                ChangeTag::Equal => (add, del),
            });

        Self {
            path: path.into(),
            old_content,
            new_content,
            additions,
            deletions,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.additions == 0 && self.deletions == 0
    }

    /// Colored unified diff with three lines of context.
    pub fn unified_diff(&self) -> String {
        let diff = TextDiff::from_lines(&self.old_content, &self.new_content);
        let mut output = String::new();

        output.push_str(&format!("--- {}\n", self.path.dimmed()));
        output.push_str(&format!("+++ {}\n", self.path.dimmed()));

        for hunk in diff.unified_diff().context_radius(3).iter_hunks() {
            output.push_str(&format!("{}\n", hunk.header().to_string().cyan()));
            for change in hunk.iter_changes() {
                let line = match change.tag() {
                    ChangeTag::Delete => format!("-{}", change).red().to_string(),
                    ChangeTag::Insert => format!("+{}", change).green().to_string(),
                    ChangeTag::Equal => format!(" {}", change),
                };
                output.push_str(&line);
                if change.missing_newline() {
                    output.push('\n');
                }
            }
        }

        output
    }

    /// Compact `path +N -M` summary.
    pub fn summary(&self) -> String {
        if self.is_empty() {
            format!("{} (no changes)", self.path.dimmed())
        } else {
            format!(
                "{} {} {}",
                self.path.bold(),
                format!("+{}", self.additions).green(),
                format!("-{}", self.deletions).red()
            )
        }
    }
}

impl fmt::Display for FileDiff {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} +{} -{}", self.path, self.additions, self.deletions)
    }
}
