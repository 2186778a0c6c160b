use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("Failed to read config file {path}: {source}")]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file {path}: {message}")]
    ConfigParse { path: PathBuf, message: String },

    #[error("project_path is required")]
    MissingProjectRoot,

    #[error("project_path does not exist: {path}")]
    ProjectRootNotFound { path: PathBuf },

    #[error("project_path is not a directory: {path}")]
    ProjectRootNotDirectory { path: PathBuf },

    #[error("Failed to scan directory {path}: {source}")]
    Traversal {
        path: PathBuf,
        #[source]
        source: walkdir::Error,
    },

    #[error("Failed to read source file {path}: {source}")]
    SourceRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Template not found: {name}")]
    TemplateNotFound { name: String },

    #[error("No config file found. Specify one with -c or create one of: {candidates}")]
    NoConfigFound { candidates: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, ExtractError>;

impl ExtractError {
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::ConfigRead { .. } | Self::ConfigParse { .. } => 2,
            Self::MissingProjectRoot
            | Self::ProjectRootNotFound { .. }
            | Self::ProjectRootNotDirectory { .. } => 3,
            Self::Traversal { .. } => 4,
            Self::SourceRead { .. } | Self::Write { .. } => 5,
            Self::TemplateNotFound { .. } | Self::NoConfigFound { .. } => 6,
            Self::Io(_) => 1,
        }
    }
}
