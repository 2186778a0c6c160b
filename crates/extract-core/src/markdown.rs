//! Markdown writer
//!
//! Renders a list of project files into a single markdown document, one
//! section per file with its content in a fenced block.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::Local;

use crate::config::Config;
use crate::error::{ExtractError, Result};
use crate::scanner::{Category, ScanResult};

/// Write one markdown document per category into `output_dir`.
///
/// Returns the written paths in category order.
pub fn write_all(output_dir: &Path, result: &ScanResult, config: &Config) -> Result<Vec<PathBuf>> {
    fs::create_dir_all(output_dir).map_err(|e| ExtractError::Write {
        path: output_dir.to_path_buf(),
        source: e,
    })?;

    let mut written = Vec::with_capacity(Category::ALL.len());
    for category in Category::ALL {
        let path = output_dir.join(category.file_name());
        write_markdown(&path, category.title(), result.files(category), config)?;
        written.push(path);
    }
    Ok(written)
}

/// Write a single markdown document listing `items` with their contents.
pub fn write_markdown(path: &Path, title: &str, items: &[String], config: &Config) -> Result<()> {
    let content = render(title, items, config)?;
    fs::write(path, content).map_err(|e| ExtractError::Write {
        path: path.to_path_buf(),
        source: e,
    })
}

/// Render the document body. File contents are read from the project root.
pub fn render(title: &str, items: &[String], config: &Config) -> Result<String> {
    let mut out = String::new();

    out.push_str(&format!("# {}\n\n", title));
    if !config.project_name.is_empty() {
        out.push_str(&format!("- **Project:** {}\n", config.project_name));
    }
    out.push_str(&format!(
        "- **Generated:** {}\n",
        Local::now().format("%Y-%m-%d %H:%M:%S")
    ));
    out.push_str(&format!("- **Files:** {}\n", items.len()));

    for item in items {
        let source = config.project_root.join(item);
        let bytes = fs::read(&source).map_err(|e| ExtractError::SourceRead {
            path: source.clone(),
            source: e,
        })?;

        out.push_str(&format!("\n## {}\n\n", item));
        match String::from_utf8(bytes) {
            Ok(text) => push_code_block(&mut out, language_for(item), &text),
            Err(_) => out.push_str("_Binary file omitted._\n"),
        }
    }

    Ok(out)
}

fn push_code_block(out: &mut String, language: &str, text: &str) {
    let fence = "`".repeat(fence_len(text));
    out.push_str(&fence);
    out.push_str(language);
    out.push('\n');
    out.push_str(text);
    if !text.ends_with('\n') {
        out.push('\n');
    }
    out.push_str(&fence);
    out.push('\n');
}

/// One backtick longer than the longest run in the content, minimum three.
fn fence_len(text: &str) -> usize {
    let mut longest = 0;
    let mut run = 0;
    for c in text.chars() {
        if c == '`' {
            run += 1;
            longest = longest.max(run);
        } else {
            run = 0;
        }
    }
    (longest + 1).max(3)
}

/// Fence info string for a file path.
pub fn language_for(path: &str) -> &'static str {
    let name = path.rsplit('/').next().unwrap_or(path);
    match name {
        "Dockerfile" => return "dockerfile",
        "Makefile" => return "makefile",
        _ => {}
    }

    let ext = match name.rsplit_once('.') {
        Some((stem, ext)) if !stem.is_empty() => ext.to_lowercase(),
        _ => return "",
    };

    match ext.as_str() {
        "rs" => "rust",
        "go" => "go",
        "py" => "python",
        "js" | "mjs" | "cjs" => "javascript",
        "jsx" => "jsx",
        "ts" => "typescript",
        "tsx" => "tsx",
        "vue" => "vue",
        "dart" => "dart",
        "php" => "php",
        "rb" => "ruby",
        "java" => "java",
        "kt" | "kts" => "kotlin",
        "swift" => "swift",
        "c" | "h" => "c",
        "cpp" | "cc" | "hpp" => "cpp",
        "cs" => "csharp",
        "sh" | "bash" => "bash",
        "html" | "htm" => "html",
        "css" => "css",
        "scss" => "scss",
        "json" | "arb" => "json",
        "yaml" | "yml" => "yaml",
        "toml" => "toml",
        "xml" => "xml",
        "sql" => "sql",
        "md" => "markdown",
        _ => "",
    }
}
