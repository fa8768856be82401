//! Output formatting for CLI results

use colored::Colorize;
use serde::Serialize;
use tabled::Tabled;

use crate::cli::OutputFormat;
use crate::error::Result;

pub mod json;
pub mod table;

/// Trait for types that can be formatted for output
pub trait Formattable {
    /// Format the data according to the specified format
    fn format(&self, format: OutputFormat) -> Result<String>;

    /// Format and print to stdout
    fn print(&self, format: OutputFormat) -> Result<()> {
        println!("{}", self.format(format)?);
        Ok(())
    }
}

impl<T: Tabled + Serialize> Formattable for Vec<T> {
    fn format(&self, format: OutputFormat) -> Result<String> {
        match format {
            OutputFormat::Table => Ok(table::format_table(self.as_slice())),
            OutputFormat::Json => Ok(json::format_json(self.as_slice())?),
        }
    }
}

/// Success marker printed after each completed step.
pub fn ok_marker() -> String {
    "OK".green().bold().to_string()
}

/// Failure marker printed before an error report.
pub fn failed_marker() -> String {
    "FAILED".red().bold().to_string()
}

pub fn say_ok() {
    println!("{}\n", ok_marker());
}

pub fn say_failed() {
    eprintln!("{}", failed_marker());
}
