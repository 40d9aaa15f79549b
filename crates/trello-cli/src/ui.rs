//! User-facing report output.
//!
//! Commands report through [`Reporter`] so the console formatting stays out
//! of the workflow logic.

use colored::Colorize;

/// Sink for human-readable command outcomes.
pub trait Reporter {
    /// Something was created.
    fn success(&mut self, message: &str);

    /// Follow-up detail about a completed step.
    fn info(&mut self, message: &str);

    /// Guidance after a failure.
    fn hint(&mut self, message: &str);

    /// The command failed.
    fn failure(&mut self, message: &str);
}

/// Colored terminal output.
#[derive(Debug, Default, Clone, Copy)]
pub struct ConsoleReporter;

impl Reporter for ConsoleReporter {
    fn success(&mut self, message: &str) {
        println!("{}", message.green());
    }

    fn info(&mut self, message: &str) {
        println!("{}", message.blue());
    }

    fn hint(&mut self, message: &str) {
        eprintln!("{}", message.yellow());
    }

    fn failure(&mut self, message: &str) {
        eprintln!("{}", message.red());
    }
}
