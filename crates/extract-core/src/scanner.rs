//! Classifier / Walker
//!
//! Walks the project root in lexical order and sorts every regular file into
//! one of three buckets. Precedence, first match wins:
//!
//! 1. gitignore or config exclusion → counted as excluded
//! 2. data pattern → `data`
//! 3. local pattern → `code` if it is also a main local file, else `locals`
//! 4. anything else → `code`

use std::path::Path;

use walkdir::WalkDir;

use crate::config::Config;
use crate::error::{ExtractError, Result};
use crate::gitignore::GitignoreRules;

/// Output bucket for a classified file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Code,
    Data,
    Locals,
}

impl Category {
    pub const ALL: [Category; 3] = [Category::Code, Category::Data, Category::Locals];

    /// Markdown file name written for this bucket.
    pub fn file_name(self) -> &'static str {
        match self {
            Self::Code => "project-code.md",
            Self::Data => "project-data.md",
            Self::Locals => "project-locals.md",
        }
    }

    /// Markdown document title for this bucket.
    pub fn title(self) -> &'static str {
        match self {
            Self::Code => "Project Code Files",
            Self::Data => "Project Data Files",
            Self::Locals => "Project Local Files",
        }
    }
}

/// Result of a single scan. Paths are root-relative with forward slashes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScanResult {
    pub code: Vec<String>,
    pub data: Vec<String>,
    pub locals: Vec<String>,
    /// Every walked entry below the root, directories included
    pub total: usize,
    /// Files dropped by gitignore or exclude patterns
    pub excluded: usize,
}

impl ScanResult {
    pub fn files(&self, category: Category) -> &[String] {
        match category {
            Category::Code => &self.code,
            Category::Data => &self.data,
            Category::Locals => &self.locals,
        }
    }

    /// Number of files that landed in a bucket.
    pub fn categorized(&self) -> usize {
        self.code.len() + self.data.len() + self.locals.len()
    }
}

/// Classify a single file path that survived exclusion.
pub fn classify(config: &Config, relative_path: &str) -> Category {
    if config.is_data_file(relative_path) {
        Category::Data
    } else if config.is_local_file(relative_path) {
        if config.is_main_local_file(relative_path) {
            Category::Code
        } else {
            Category::Locals
        }
    } else {
        Category::Code
    }
}

/// Scan the configured project root.
///
/// Validation errors are returned before anything is walked. Any walk error
/// aborts the scan without partial results.
pub fn scan(config: &Config) -> Result<ScanResult> {
    config.validate()?;

    let root = config.project_root.as_path();
    let gitignore = GitignoreRules::load(root);
    let mut result = ScanResult::default();

    let walker = WalkDir::new(root)
        .min_depth(1)
        .sort_by_file_name()
        .into_iter();

    for entry in walker {
        let entry = entry.map_err(|e| ExtractError::Traversal {
            path: e.path().unwrap_or(root).to_path_buf(),
            source: e,
        })?;

        let relative = relative_slash_path(root, entry.path());
        result.total += 1;

        let is_dir = entry.file_type().is_dir();
        if is_dir {
            continue;
        }

        let ignored = gitignore
            .as_ref()
            .is_some_and(|rules| rules.is_ignored(&relative, is_dir));
        if ignored || config.is_excluded(&relative) {
            result.excluded += 1;
            continue;
        }

        match classify(config, &relative) {
            Category::Code => result.code.push(relative),
            Category::Data => result.data.push(relative),
            Category::Locals => result.locals.push(relative),
        }
    }

    Ok(result)
}

fn relative_slash_path(root: &Path, path: &Path) -> String {
    let relative = path.strip_prefix(root).unwrap_or(path);
    relative
        .components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/")
}
