//! CLI presenter for output formatting

use colored::*;
use serde::Serialize;

/// Presenter for CLI output formatting.
///
/// Status lines go to stderr, results go to stdout.
pub struct Presenter {
    verbose: bool,
}

impl Presenter {
    /// Create a new presenter
    pub fn new() -> Self {
        Self { verbose: false }
    }

    /// Create a presenter that also prints debug lines
    pub fn with_verbose(verbose: bool) -> Self {
        Self { verbose }
    }

    pub fn is_verbose(&self) -> bool {
        self.verbose
    }

    /// Print debug message to stderr (verbose mode only)
    pub fn debug(&self, message: &str) {
        if self.verbose {
            eprintln!("{} {}", "·".dimmed(), message.dimmed());
        }
    }

    /// Print info message to stderr
    pub fn info(&self, message: &str) {
        eprintln!("{} {}", "ℹ".cyan(), message);
    }

    /// Print success message to stderr
    pub fn success(&self, message: &str) {
        eprintln!("{} {}", "✓".green(), message);
    }

    /// Print warning message to stderr
    pub fn warn(&self, message: &str) {
        eprintln!("{} {}", "⚠".yellow(), message);
    }

    /// Print error message to stderr
    pub fn error(&self, message: &str) {
        eprintln!("{} {}", "✗".red(), message);
    }

    /// Output text to stdout
    pub fn output(&self, text: &str) {
        println!("{}", text);
    }

    /// Output a value to stdout as a single line of JSON
    pub fn output_json<T: Serialize>(&self, value: &T) {
        match serde_json::to_string(value) {
            Ok(json) => println!("{}", json),
            Err(e) => self.error(&format!("Failed to encode JSON output: {}", e)),
        }
    }

    /// Print a key-value pair (for config list)
    pub fn key_value(&self, key: &str, value: &str) {
        println!("{}: {}", key.cyan(), value);
    }
}

impl Default for Presenter {
    fn default() -> Self {
        Self::new()
    }
}
