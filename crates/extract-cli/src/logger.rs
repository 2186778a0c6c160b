use colored::Colorize;

/// Status output for command handlers.
pub trait Logger {
    fn info(&self, msg: &str);
    fn success(&self, msg: &str);
    fn warn(&self, msg: &str);
    fn error(&self, msg: &str);
}

/// Writes colored, tagged lines to stderr.
///
/// `info` needs `verbose`; `quiet` silences everything except errors.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleLogger {
    pub verbose: bool,
    pub quiet: bool,
}

impl ConsoleLogger {
    pub fn new(verbose: bool, quiet: bool) -> Self {
        Self { verbose, quiet }
    }
}

impl Logger for ConsoleLogger {
    fn info(&self, msg: &str) {
        if self.verbose && !self.quiet {
            eprintln!("{} {}", "[INFO]".cyan(), msg);
        }
    }

    fn success(&self, msg: &str) {
        if !self.quiet {
            eprintln!("{} {}", "[SUCCESS]".green(), msg);
        }
    }

    fn warn(&self, msg: &str) {
        if !self.quiet {
            eprintln!("{} {}", "[WARN]".yellow(), msg);
        }
    }

    fn error(&self, msg: &str) {
        eprintln!("{} {}", "[ERROR]".red().bold(), msg);
    }
}
