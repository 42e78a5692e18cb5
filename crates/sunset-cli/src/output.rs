//! Output formatting and writing utilities
//!
//! This module provides utilities for formatting and writing output in the
//! supported formats (human-readable, JSON, YAML), with diagnostics routed
//! through one writer so quiet mode and color handling stay consistent.

use crate::cli::OutputFormat;
use crate::error::Result;
use colored::Colorize;
use serde::Serialize;
use std::io::{self, Write};

/// Render a serializable value in the requested output format
pub fn render<T: Serialize>(format: OutputFormat, value: &T) -> Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string(value)?),
        OutputFormat::JsonPretty => Ok(serde_json::to_string_pretty(value)?),
        OutputFormat::Yaml => Ok(serde_yaml::to_string(value)?),
        // For human format, use pretty JSON as fallback
        OutputFormat::Human => Ok(serde_json::to_string_pretty(value)?),
    }
}

/// Output writer that handles different output formats and colors
pub struct OutputWriter {
    format: OutputFormat,
    use_color: bool,
    quiet: bool,
    writer: Box<dyn Write>,
}

impl OutputWriter {
    /// Create a new output writer for stdout
    pub fn new(format: OutputFormat, use_color: bool, quiet: bool) -> Self {
        Self {
            format,
            use_color,
            quiet,
            writer: Box::new(io::stdout()),
        }
    }

    /// Create an output writer with a custom writer
    pub fn with_writer(
        format: OutputFormat,
        use_color: bool,
        quiet: bool,
        writer: Box<dyn Write>,
    ) -> Self {
        Self {
            format,
            use_color,
            quiet,
            writer,
        }
    }

    /// Get the output format
    pub fn format(&self) -> OutputFormat {
        self.format
    }

    /// Write a line of output
    pub fn writeln(&mut self, content: &str) -> Result<()> {
        writeln!(self.writer, "{}", content)?;
        self.writer.flush()?;
        Ok(())
    }

    /// Write an info message (human format only)
    pub fn info(&mut self, message: &str) -> Result<()> {
        if self.quiet || self.format != OutputFormat::Human {
            return Ok(());
        }

        if self.use_color {
            self.writeln(&format!("{} {}", "ℹ".blue(), message))
        } else {
            self.writeln(&format!("INFO: {}", message))
        }
    }

    /// Write a success message (human format only)
    pub fn success(&mut self, message: &str) -> Result<()> {
        if self.quiet || self.format != OutputFormat::Human {
            return Ok(());
        }

        if self.use_color {
            self.writeln(&format!("{}", message.green()))
        } else {
            self.writeln(message)
        }
    }

    /// Write a warning diagnostic
    pub fn warning(&mut self, message: &str) -> Result<()> {
        if self.quiet {
            return Ok(());
        }

        if self.use_color {
            self.writeln(&format!("{} {}", "⚠".yellow(), message))
        } else {
            self.writeln(&format!("WARNING: {}", message))
        }
    }

    /// Write an error diagnostic (never suppressed)
    pub fn error(&mut self, message: &str) -> Result<()> {
        if self.use_color {
            self.writeln(&format!("{} {}", "✗".red(), message))
        } else {
            self.writeln(&format!("ERROR: {}", message))
        }
    }

    /// Write a section header (human format only)
    pub fn section(&mut self, title: &str) -> Result<()> {
        if self.quiet || self.format != OutputFormat::Human {
            return Ok(());
        }

        if self.use_color {
            self.writeln(&format!("\n{}", title.bold().underline()))
        } else {
            self.writeln(&format!("\n=== {} ===", title))
        }
    }

    /// Write structured data in the configured output format
    pub fn data<T: Serialize>(&mut self, value: &T) -> Result<()> {
        let rendered = render(self.format, value)?;
        self.writeln(rendered.trim_end())
    }
}
