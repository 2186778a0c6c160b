use std::fs;
use std::path::{Component, Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{ExtractError, Result};
use crate::pattern;

/// Config file names searched in the working directory, in order of preference.
pub const DEFAULT_CONFIG_FILES: &[&str] = &[
    "extract.config.yml",
    "extract.config.yaml",
    "extract-config.yaml",
    "extract-config.yml",
    ".extract-config.yaml",
    ".extract-config.yml",
    "extract.yaml",
    "extract.yml",
];

/// Main local files that are treated as code even when they match a local pattern.
pub const DEFAULT_MAIN_LOCAL_FILES: &[&str] = &["main.*", "index.*", "app.*"];

/// Exclusions applied to every project, ahead of user-declared ones.
pub const BUILTIN_EXCLUSIONS: &[&str] = &[
    // Version control
    ".git/**",
    ".svn/**",
    ".hg/**",
    ".bzr/**",
    // IDE and editor files
    ".vscode/**",
    ".idea/**",
    "*.swp",
    "*.swo",
    "*~",
    ".DS_Store",
    "Thumbs.db",
    // OS generated files
    "desktop.ini",
    ".Spotlight-V100",
    ".Trashes",
    "ehthumbs.db",
    // Temporary files
    "*.tmp",
    "*.temp",
    "*.bak",
    "*.backup",
    // Logs
    "*.log",
    "logs/**",
    // Cache and build artifacts
    "*.cache",
    ".cache/**",
    "build/**",
    "dist/**",
    "out/**",
    "target/**",
    // Environment and secrets
    ".env",
    ".env.*",
    "*.key",
    "*.pem",
    "*.p12",
    "*.pfx",
    // Archives and binaries
    "*.zip",
    "*.tar",
    "*.tar.gz",
    "*.rar",
    "*.7z",
    "*.exe",
    "*.dll",
    "*.so",
    "*.dylib",
    // Coverage reports
    "coverage/**",
    "*.coverage",
    "lcov.info",
];

/// On-disk config document. Every key is optional.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ConfigFile {
    /// Informational only
    #[serde(default)]
    pub project_name: String,

    #[serde(default)]
    pub project_path: String,

    #[serde(default)]
    pub data_patterns: Vec<String>,

    #[serde(default)]
    pub local_patterns: Vec<String>,

    #[serde(default)]
    pub exclude_patterns: Vec<String>,

    /// `None` (absent or null) falls back to [`DEFAULT_MAIN_LOCAL_FILES`]
    #[serde(default)]
    pub main_local_files: Option<Vec<String>>,

    #[serde(default)]
    pub use_regex: bool,
}

impl ConfigFile {
    /// Parse a document, picking the format from the file extension.
    ///
    /// `.json` and `.toml` use their own parsers; anything else is YAML.
    pub fn parse(path: &Path, content: &str) -> Result<Self> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or("")
            .to_lowercase();

        let parsed: std::result::Result<Self, String> = match ext.as_str() {
            "json" => serde_json::from_str(content).map_err(|e| e.to_string()),
            "toml" => toml::from_str(content).map_err(|e| e.to_string()),
            _ => serde_yaml::from_str::<Option<Self>>(content)
                .map(Option::unwrap_or_default)
                .map_err(|e| e.to_string()),
        };

        parsed.map_err(|message| ExtractError::ConfigParse {
            path: path.to_path_buf(),
            message,
        })
    }
}

/// Resolved configuration used by the scanner.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub project_name: String,
    /// Absolute traversal root
    pub project_root: PathBuf,
    pub data_patterns: Vec<String>,
    pub local_patterns: Vec<String>,
    pub main_local_patterns: Vec<String>,
    /// Builtin exclusions followed by user-declared ones
    pub exclude_patterns: Vec<String>,
    pub use_regex: bool,
}

impl Config {
    /// Load and resolve a config document.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| ExtractError::ConfigRead {
            path: path.to_path_buf(),
            source: e,
        })?;

        let file = ConfigFile::parse(path, &content)?;
        Self::from_file(file)
    }

    /// Merge builtin exclusions, apply defaults and absolutize the project root.
    pub fn from_file(file: ConfigFile) -> Result<Self> {
        let mut exclude_patterns: Vec<String> =
            BUILTIN_EXCLUSIONS.iter().map(|s| s.to_string()).collect();
        exclude_patterns.extend(file.exclude_patterns);

        let main_local_patterns = file.main_local_files.unwrap_or_else(|| {
            DEFAULT_MAIN_LOCAL_FILES
                .iter()
                .map(|s| s.to_string())
                .collect()
        });

        let project_path = if file.project_path.is_empty() {
            "."
        } else {
            file.project_path.as_str()
        };

        Ok(Self {
            project_name: file.project_name,
            project_root: absolutize(Path::new(project_path))?,
            data_patterns: file.data_patterns,
            local_patterns: file.local_patterns,
            main_local_patterns,
            exclude_patterns,
            use_regex: file.use_regex,
        })
    }

    /// Config rooted at `root` with no user patterns.
    pub fn for_root(root: impl Into<PathBuf>) -> Self {
        Self {
            project_name: String::new(),
            project_root: root.into(),
            data_patterns: Vec::new(),
            local_patterns: Vec::new(),
            main_local_patterns: DEFAULT_MAIN_LOCAL_FILES
                .iter()
                .map(|s| s.to_string())
                .collect(),
            exclude_patterns: BUILTIN_EXCLUSIONS.iter().map(|s| s.to_string()).collect(),
            use_regex: false,
        }
    }

    /// Check the project root before any traversal.
    pub fn validate(&self) -> Result<()> {
        if self.project_root.as_os_str().is_empty() {
            return Err(ExtractError::MissingProjectRoot);
        }

        let metadata =
            fs::metadata(&self.project_root).map_err(|_| ExtractError::ProjectRootNotFound {
                path: self.project_root.clone(),
            })?;

        if !metadata.is_dir() {
            return Err(ExtractError::ProjectRootNotDirectory {
                path: self.project_root.clone(),
            });
        }

        Ok(())
    }

    pub fn is_data_file(&self, path: &str) -> bool {
        pattern::matches_any(path, &self.data_patterns, self.use_regex)
    }

    pub fn is_local_file(&self, path: &str) -> bool {
        pattern::matches_any(path, &self.local_patterns, self.use_regex)
    }

    pub fn is_main_local_file(&self, path: &str) -> bool {
        pattern::matches_any(path, &self.main_local_patterns, self.use_regex)
    }

    pub fn is_excluded(&self, path: &str) -> bool {
        pattern::matches_any(path, &self.exclude_patterns, self.use_regex)
    }
}

/// Find the first default config file present in `dir`.
pub fn find_default_config(dir: &Path) -> Result<PathBuf> {
    DEFAULT_CONFIG_FILES
        .iter()
        .map(|name| dir.join(name))
        .find(|path| path.is_file())
        .ok_or_else(|| ExtractError::NoConfigFound {
            candidates: DEFAULT_CONFIG_FILES.join(", "),
        })
}

/// Resolve against the working directory, dropping `.` components.
fn absolutize(path: &Path) -> Result<PathBuf> {
    let joined = if path.is_absolute() {
        path.to_path_buf()
    } else {
        std::env::current_dir()?.join(path)
    };

    Ok(joined
        .components()
        .filter(|c| !matches!(c, Component::CurDir))
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn write_config(dir: &Path, name: &str, content: &str) -> PathBuf {
        let path = dir.join(name);
        fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn builtins_come_before_user_excludes() {
        let dir = TempDir::new().unwrap();
        let path = write_config(
            dir.path(),
            "extract.config.yml",
            &format!(
                "project_path: {}\nexclude_patterns:\n  - \"*.g.dart\"\n",
                dir.path().display()
            ),
        );

        let config = Config::load(&path).unwrap();
        let builtin_len = BUILTIN_EXCLUSIONS.len();
        assert_eq!(config.exclude_patterns.len(), builtin_len + 1);
        assert_eq!(config.exclude_patterns[0], ".git/**");
        assert_eq!(config.exclude_patterns[builtin_len], "*.g.dart");
    }

    #[test]
    fn main_local_files_default_when_absent() {
        let config = Config::from_file(ConfigFile::default()).unwrap();
        assert_eq!(
            config.main_local_patterns,
            vec!["main.*", "index.*", "app.*"]
        );
    }

    #[test]
    fn main_local_files_default_when_null() {
        let file = ConfigFile::parse(Path::new("c.yml"), "main_local_files: ~\n").unwrap();
        let config = Config::from_file(file).unwrap();
        assert_eq!(config.main_local_patterns.len(), 3);
    }

    #[test]
    fn explicit_empty_main_local_files_is_kept() {
        let file = ConfigFile::parse(Path::new("c.yml"), "main_local_files: []\n").unwrap();
        let config = Config::from_file(file).unwrap();
        assert!(config.main_local_patterns.is_empty());
    }

    #[test]
    fn empty_project_path_resolves_to_cwd() {
        let config = Config::from_file(ConfigFile::default()).unwrap();
        assert!(config.project_root.is_absolute());
        assert_eq!(config.project_root, std::env::current_dir().unwrap());
    }

    #[test]
    fn relative_project_path_is_absolutized() {
        let file = ConfigFile {
            project_path: "./some/project".to_string(),
            ..Default::default()
        };
        let config = Config::from_file(file).unwrap();
        assert!(config.project_root.is_absolute());
        assert!(config.project_root.ends_with("some/project"));
    }

    #[test]
    fn empty_yaml_document_is_all_defaults() {
        let file = ConfigFile::parse(Path::new("extract.yml"), "").unwrap();
        assert!(file.data_patterns.is_empty());
        assert!(!file.use_regex);
        assert!(file.main_local_files.is_none());
    }

    #[test]
    fn parses_full_yaml_document() {
        let yaml = r#"
project_name: demo
project_path: /tmp/demo
data_patterns:
  - "*.data.json"
  - "data/**"
local_patterns: ["*.yaml"]
main_local_files: ["main.*"]
use_regex: true
"#;
        let file = ConfigFile::parse(Path::new("extract.config.yml"), yaml).unwrap();
        assert_eq!(file.project_name, "demo");
        assert_eq!(file.data_patterns, vec!["*.data.json", "data/**"]);
        assert_eq!(file.local_patterns, vec!["*.yaml"]);
        assert_eq!(file.main_local_files, Some(vec!["main.*".to_string()]));
        assert!(file.use_regex);
    }

    #[test]
    fn parses_json_document() {
        let json = r#"{"project_name": "demo", "data_patterns": ["*.csv"], "use_regex": true}"#;
        let file = ConfigFile::parse(Path::new("extract.json"), json).unwrap();
        assert_eq!(file.data_patterns, vec!["*.csv"]);
        assert!(file.use_regex);
    }

    #[test]
    fn parses_toml_document() {
        let toml = "project_name = \"demo\"\nlocal_patterns = [\"*.toml\"]\n";
        let file = ConfigFile::parse(Path::new("extract.toml"), toml).unwrap();
        assert_eq!(file.local_patterns, vec!["*.toml"]);
    }

    #[test]
    fn malformed_document_is_parse_error() {
        let err = ConfigFile::parse(Path::new("bad.yml"), "data_patterns: [unclosed").unwrap_err();
        assert!(matches!(err, ExtractError::ConfigParse { .. }));
        assert!(err.to_string().contains("bad.yml"));
    }

    #[test]
    fn missing_file_is_read_error() {
        let dir = TempDir::new().unwrap();
        let err = Config::load(&dir.path().join("absent.yml")).unwrap_err();
        assert!(matches!(err, ExtractError::ConfigRead { .. }));
        assert_eq!(err.exit_code(), 2);
    }

    #[test]
    fn validate_rejects_missing_root() {
        let dir = TempDir::new().unwrap();
        let config = Config::for_root(dir.path().join("does-not-exist"));
        let err = config.validate().unwrap_err();
        assert!(matches!(err, ExtractError::ProjectRootNotFound { .. }));
    }

    #[test]
    fn validate_rejects_empty_root() {
        let config = Config::for_root(PathBuf::new());
        assert!(matches!(
            config.validate().unwrap_err(),
            ExtractError::MissingProjectRoot
        ));
    }

    #[test]
    fn validate_rejects_file_root() {
        let dir = TempDir::new().unwrap();
        let file = write_config(dir.path(), "plain.txt", "hi");
        let config = Config::for_root(file);
        assert!(matches!(
            config.validate().unwrap_err(),
            ExtractError::ProjectRootNotDirectory { .. }
        ));
    }

    #[test]
    fn validate_accepts_directory() {
        let dir = TempDir::new().unwrap();
        assert!(Config::for_root(dir.path()).validate().is_ok());
    }

    #[test]
    fn category_predicates_use_their_lists() {
        let mut config = Config::for_root("/project");
        config.data_patterns = vec!["*.data.json".to_string()];
        config.local_patterns = vec!["*.yaml".to_string()];

        assert!(config.is_data_file("seed.data.json"));
        assert!(config.is_local_file("config.yaml"));
        assert!(config.is_main_local_file("src/main.go"));
        assert!(config.is_excluded(".git/HEAD"));
        assert!(config.is_excluded("server.log"));
        assert!(!config.is_excluded("src/lib.rs"));
    }

    #[test]
    fn regex_flag_flows_into_predicates() {
        let mut config = Config::for_root("/project");
        config.data_patterns = vec![r"re:^fixtures/.*\.json$".to_string()];
        assert!(!config.is_data_file("fixtures/a.json"));

        config.use_regex = true;
        assert!(config.is_data_file("fixtures/a.json"));
        assert!(!config.is_data_file("src/fixtures/a.json"));
    }

    #[test]
    fn finds_default_config_in_preference_order() {
        let dir = TempDir::new().unwrap();
        write_config(dir.path(), "extract.yml", "");
        write_config(dir.path(), "extract-config.yaml", "");

        let found = find_default_config(dir.path()).unwrap();
        assert_eq!(found, dir.path().join("extract-config.yaml"));
    }

    #[test]
    fn no_default_config_lists_candidates() {
        let dir = TempDir::new().unwrap();
        let err = find_default_config(dir.path()).unwrap_err();
        assert!(err.to_string().contains("extract.config.yml"));
    }
}
