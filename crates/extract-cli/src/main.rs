use std::io;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{CommandFactory, Parser};
use clap_complete::generate;
use colored::Colorize;

use extract_core::config::{find_default_config, Config};
use extract_core::scanner::{self, Category, ScanResult};
use extract_core::summary::{format_file_size, SizeSummary};
use extract_core::{markdown, template, Result};

mod args;
mod logger;
use args::{Cli, Commands, Shell};
use logger::{ConsoleLogger, Logger};

fn main() -> ExitCode {
    let cli = Cli::parse();
    let log = ConsoleLogger::new(cli.verbose, cli.quiet);

    let result = match cli.command {
        Some(Commands::Generate { config, output_dir }) => {
            current_dir().and_then(|cwd| handle_generate(config, &output_dir, &cwd, &log))
        }
        Some(Commands::Init {
            template,
            output,
            list,
        }) => handle_init(template.as_deref(), output, list, &log),
        Some(Commands::Completions { shell }) => {
            handle_completions(shell);
            Ok(())
        }
        None => {
            Cli::command().print_help().ok();
            Ok(())
        }
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log.error(&e.to_string());
            ExitCode::from(e.exit_code() as u8)
        }
    }
}

fn current_dir() -> Result<PathBuf> {
    Ok(std::env::current_dir()?)
}

fn handle_completions(shell: Shell) {
    let mut cmd = Cli::command();
    let shell = match shell {
        Shell::Bash => clap_complete::Shell::Bash,
        Shell::Zsh => clap_complete::Shell::Zsh,
        Shell::Fish => clap_complete::Shell::Fish,
        Shell::PowerShell => clap_complete::Shell::PowerShell,
        Shell::Elvish => clap_complete::Shell::Elvish,
    };
    generate(shell, &mut cmd, "extract-cli", &mut io::stdout());
}

fn handle_generate(
    config_path: Option<PathBuf>,
    output_dir: &Path,
    cwd: &Path,
    log: &dyn Logger,
) -> Result<()> {
    let config_path = match config_path {
        Some(path) => path,
        None => find_default_config(cwd)?,
    };

    log.info(&format!("Loading config from: {}", config_path.display()));
    let config = Config::load(&config_path)?;

    log.info(&format!(
        "Scanning project directory: {}",
        config.project_root.display()
    ));
    let result = scanner::scan(&config)?;

    if result.categorized() == 0 {
        log.warn(&format!(
            "No files left to categorize in {}",
            config.project_root.display()
        ));
    }

    for category in Category::ALL {
        log.info(&format!(
            "Writing {} ({} files)",
            output_dir.join(category.file_name()).display(),
            result.files(category).len()
        ));
    }
    markdown::write_all(output_dir, &result, &config)?;

    let sizes = SizeSummary::from_scan(&result, &config.project_root);
    print_summary(&result, &sizes, output_dir);

    Ok(())
}

fn print_summary(result: &ScanResult, sizes: &SizeSummary, output_dir: &Path) {
    println!();
    println!("{}", "✓ Generation completed successfully!".green());
    println!(
        "Total files scanned: {} ({})",
        result.total,
        format_file_size(sizes.total())
    );

    let labels = [
        (Category::Code, "Code files"),
        (Category::Data, "Data files"),
        (Category::Locals, "Local files"),
    ];
    for (category, label) in labels {
        println!(
            "├─ {}: {} ({})",
            label,
            result.files(category).len(),
            format_file_size(sizes.get(category))
        );
    }
    println!("└─ Excluded files: {}", result.excluded);
    println!();
    println!("Markdown files written to: {}", output_dir.display());
}

fn handle_init(
    name: Option<&str>,
    output: Option<PathBuf>,
    list: bool,
    log: &dyn Logger,
) -> Result<()> {
    if list {
        print_templates();
        return Ok(());
    }

    // clap enforces the template unless --list is given
    let name = name.unwrap_or("common");
    let output = output.unwrap_or_else(|| PathBuf::from(template::DEFAULT_TEMPLATE_OUTPUT));

    log.info(&format!("Loading template: {}", name));
    let tpl = match template::get(name) {
        Ok(tpl) => tpl,
        Err(e) => {
            println!();
            print_templates();
            return Err(e);
        }
    };

    log.info(&format!("Writing config to: {}", output.display()));
    tpl.write_to(&output)?;

    log.success(&format!("Config file created: {}", output.display()));
    println!("Template: {}", tpl.name.cyan());
    println!(
        "You can now edit the config and run: {}",
        format!("extract-cli generate -c {}", output.display()).cyan()
    );

    Ok(())
}

fn print_templates() {
    println!("Available templates:");
    for tpl in template::TEMPLATES {
        println!("  - {} {}", tpl.name.cyan(), tpl.description.dimmed());
    }
}
