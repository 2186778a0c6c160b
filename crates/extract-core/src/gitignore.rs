//! Gitignore Loader
//!
//! Reads `<root>/.gitignore` into a compiled ruleset. A missing, unreadable
//! or effectively empty file yields `None`; it never fails a scan.

use std::fs;
use std::path::Path;

use ignore::gitignore::{Gitignore, GitignoreBuilder};

const GITIGNORE_FILE: &str = ".gitignore";

/// Compiled `.gitignore` rules for a single scan root.
#[derive(Debug)]
pub struct GitignoreRules {
    matcher: Gitignore,
}

impl GitignoreRules {
    /// Load the scan root's `.gitignore`, if it yields any rules.
    pub fn load(root: &Path) -> Option<Self> {
        let content = fs::read_to_string(root.join(GITIGNORE_FILE)).ok()?;
        Self::from_lines(root, content.lines())
    }

    /// Compile rules from raw lines. Blank and `#` lines are dropped first.
    pub fn from_lines<'a>(root: &Path, lines: impl IntoIterator<Item = &'a str>) -> Option<Self> {
        let patterns: Vec<&str> = lines
            .into_iter()
            .map(str::trim)
            .filter(|line| !line.is_empty() && !line.starts_with('#'))
            .collect();

        if patterns.is_empty() {
            return None;
        }

        let mut builder = GitignoreBuilder::new(root);
        for pattern in patterns {
            // a single malformed line is skipped rather than dropping the file
            let _ = builder.add_line(None, pattern);
        }

        builder.build().ok().map(|matcher| Self { matcher })
    }

    /// Whether a root-relative, forward-slash path is ignored.
    ///
    /// A file under an ignored directory counts as ignored.
    pub fn is_ignored(&self, relative_path: &str, is_dir: bool) -> bool {
        let path = Path::new(relative_path);
        if path.has_root() {
            return false;
        }
        self.matcher
            .matched_path_or_any_parents(path, is_dir)
            .is_ignore()
    }

    /// Number of compiled rules.
    pub fn len(&self) -> usize {
        self.matcher.len()
    }

    pub fn is_empty(&self) -> bool {
        self.matcher.is_empty()
    }
}
