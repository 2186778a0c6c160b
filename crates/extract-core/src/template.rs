//! Built-in config templates, compiled into the binary.

use std::fs;
use std::path::Path;

use crate::error::{ExtractError, Result};

/// Config file written by `init` when no output path is given.
pub const DEFAULT_TEMPLATE_OUTPUT: &str = "extract.config.yml";

/// A named config template.
#[derive(Debug, Clone, Copy)]
pub struct Template {
    pub name: &'static str,
    pub description: &'static str,
    pub content: &'static str,
}

pub const TEMPLATES: &[Template] = &[
    Template {
        name: "common",
        description: "Universal template with common exclusions",
        content: include_str!("../templates/common.yaml"),
    },
    Template {
        name: "flutter",
        description: "Flutter/Dart projects with .data.dart, .g.dart handling",
        content: include_str!("../templates/flutter.yaml"),
    },
    Template {
        name: "go",
        description: "Go projects with vendor/, bin/ exclusions",
        content: include_str!("../templates/go.yaml"),
    },
    Template {
        name: "laravel",
        description: "PHP Laravel projects with vendor/, storage/ exclusions",
        content: include_str!("../templates/laravel.yaml"),
    },
    Template {
        name: "nodejs",
        description: "Node.js projects with standard npm exclusions",
        content: include_str!("../templates/nodejs.yaml"),
    },
    Template {
        name: "python",
        description: "Python projects with __pycache__/, .pyc exclusions",
        content: include_str!("../templates/python.yaml"),
    },
    Template {
        name: "react",
        description: "React projects with build/, node_modules/ exclusions",
        content: include_str!("../templates/react.yaml"),
    },
    Template {
        name: "vue",
        description: "Vue.js projects with node_modules/, dist/ exclusions",
        content: include_str!("../templates/vue.yaml"),
    },
];

/// Look up a template by name.
pub fn get(name: &str) -> Result<&'static Template> {
    TEMPLATES
        .iter()
        .find(|t| t.name == name)
        .ok_or_else(|| ExtractError::TemplateNotFound {
            name: name.to_string(),
        })
}

impl Template {
    /// Write the template to `path`, creating parent directories.
    pub fn write_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| ExtractError::Write {
                path: parent.to_path_buf(),
                source: e,
            })?;
        }

        fs::write(path, self.content).map_err(|e| ExtractError::Write {
            path: path.to_path_buf(),
            source: e,
        })
    }
}
