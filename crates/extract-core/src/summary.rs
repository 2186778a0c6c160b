use std::fs;
use std::path::Path;

use crate::scanner::{Category, ScanResult};

/// Per-category byte totals for a finished scan.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SizeSummary {
    pub code: u64,
    pub data: u64,
    pub locals: u64,
}

impl SizeSummary {
    pub fn from_scan(result: &ScanResult, root: &Path) -> Self {
        Self {
            code: total_size(result.files(Category::Code), root),
            data: total_size(result.files(Category::Data), root),
            locals: total_size(result.files(Category::Locals), root),
        }
    }

    pub fn get(&self, category: Category) -> u64 {
        match category {
            Category::Code => self.code,
            Category::Data => self.data,
            Category::Locals => self.locals,
        }
    }

    pub fn total(&self) -> u64 {
        self.code + self.data + self.locals
    }
}

/// Sum file sizes under `root`. Files that cannot be stat'ed count as zero.
pub fn total_size(files: &[String], root: &Path) -> u64 {
    files
        .iter()
        .filter_map(|f| fs::metadata(root.join(f)).ok())
        .map(|m| m.len())
        .sum()
}

/// Human readable size using binary units, e.g. `1.5 KB`.
pub fn format_file_size(size: u64) -> String {
    const UNIT: u64 = 1024;
    const PREFIXES: &[char] = &['K', 'M', 'G', 'T', 'P', 'E'];

    if size < UNIT {
        return format!("{} B", size);
    }

    let mut div = UNIT;
    let mut exp = 0;
    let mut n = size / UNIT;
    while n >= UNIT {
        div *= UNIT;
        exp += 1;
        n /= UNIT;
    }

    format!("{:.1} {}B", size as f64 / div as f64, PREFIXES[exp])
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn formats_sizes() {
        assert_eq!(format_file_size(0), "0 B");
        assert_eq!(format_file_size(1023), "1023 B");
        assert_eq!(format_file_size(1024), "1.0 KB");
        assert_eq!(format_file_size(1536), "1.5 KB");
        assert_eq!(format_file_size(5 * 1024 * 1024), "5.0 MB");
        assert_eq!(format_file_size(u64::MAX), "16.0 EB");
    }

    #[test]
    fn sums_existing_files_only() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("a.txt"), "12345").unwrap();
        fs::write(dir.path().join("b.txt"), "123").unwrap();

        let files = vec![
            "a.txt".to_string(),
            "b.txt".to_string(),
            "missing.txt".to_string(),
        ];
        assert_eq!(total_size(&files, dir.path()), 8);
    }

    #[test]
    fn summary_per_category() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("main.go"), "package main").unwrap();
        fs::write(dir.path().join("seed.json"), "{}").unwrap();

        let result = ScanResult {
            code: vec!["main.go".to_string()],
            data: vec!["seed.json".to_string()],
            ..Default::default()
        };
        let sizes = SizeSummary::from_scan(&result, dir.path());
        assert_eq!(sizes.get(Category::Code), 12);
        assert_eq!(sizes.get(Category::Data), 2);
        assert_eq!(sizes.locals, 0);
        assert_eq!(sizes.total(), 14);
    }
}
