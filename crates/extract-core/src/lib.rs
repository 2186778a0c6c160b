pub mod config;
pub mod error;
pub mod gitignore;
pub mod markdown;
pub mod pattern;
pub mod scanner;
pub mod summary;
pub mod template;

pub use config::{
    find_default_config, Config, ConfigFile, BUILTIN_EXCLUSIONS, DEFAULT_CONFIG_FILES,
    DEFAULT_MAIN_LOCAL_FILES,
};
pub use error::{ExtractError, Result};
pub use gitignore::GitignoreRules;
pub use markdown::{write_all, write_markdown};
pub use pattern::{matches, matches_any, REGEX_PREFIX};
pub use scanner::{classify, scan, Category, ScanResult};
pub use summary::{format_file_size, total_size, SizeSummary};
pub use template::{Template, DEFAULT_TEMPLATE_OUTPUT, TEMPLATES};
