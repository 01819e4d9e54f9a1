//! Markdown log of dispatches.

use crate::parser::BoundArguments;
use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Logger for dispatched commands.
///
/// Appends one markdown entry per dispatch step: the bound arguments when a
/// verb is about to run, its failure, and its completion.
#[derive(Debug)]
pub struct Logger {
    log_file: PathBuf,
}

impl Logger {
    /// Initialize logger.
    ///
    /// # Arguments
    /// * `log_file` - Path to log file. If None, creates a timestamped file in temp directory.
    pub fn new(log_file: Option<&Path>) -> Result<Self> {
        let log_file = match log_file {
            Some(p) => p.to_path_buf(),
            None => {
                let mut dir = std::env::temp_dir();
                dir.push("director-logs");
                std::fs::create_dir_all(&dir).with_context(|| {
                    format!("Failed to create log directory: {}", dir.display())
                })?;
                let filename = format!(
                    "dispatch_{}_{}.md",
                    Utc::now().timestamp_millis(),
                    std::process::id()
                );
                dir.join(filename)
            }
        };

        if let Some(parent) = log_file.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create log directory: {}", parent.display()))?;
        }

        let logger = Self { log_file };

        if !logger.log_file.exists() {
            logger.initialize_log_file()?;
        }

        Ok(logger)
    }

    fn initialize_log_file(&self) -> Result<()> {
        let mut file = File::create(&self.log_file)
            .with_context(|| format!("Failed to create log file: {}", self.log_file.display()))?;

        let now: DateTime<Utc> = Utc::now();

        writeln!(file, "# Dispatch Log\n")?;
        writeln!(file, "Log started: {}\n", now.to_rfc3339())?;
        writeln!(file, "---\n")?;

        Ok(())
    }

    fn append_to_log(&self, content: &str) -> Result<()> {
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.log_file)
            .with_context(|| format!("Failed to open log file: {}", self.log_file.display()))?;

        write!(file, "{}", content).with_context(|| "Failed to write to log file")?;

        Ok(())
    }

    /// Log a verb about to run.
    ///
    /// # Arguments
    /// * `noun` - Resolved noun.
    /// * `verb` - Resolved verb.
    /// * `args` - Arguments bound for the verb.
    pub fn log_dispatch(&self, noun: &str, verb: &str, args: &BoundArguments) -> Result<()> {
        let now: DateTime<Utc> = Utc::now();
        let arguments = serde_json::to_string_pretty(args)
            .with_context(|| "Failed to serialize bound arguments")?;
        let content = format!(
            "## Dispatch - {}\n\n**Noun:** {}\n**Verb:** {}\n\n**Arguments:**\n```json\n{}\n```\n\n",
            now.to_rfc3339(),
            noun,
            verb,
            arguments
        );

        self.append_to_log(&content)?;
        debug!(noun, verb, "Dispatch logged");
        Ok(())
    }

    /// Log a verb failure.
    ///
    /// # Arguments
    /// * `noun` - Resolved noun.
    /// * `verb` - Resolved verb.
    /// * `error` - The verb's error.
    /// * `filtered` - Number of filters that matched it.
    pub fn log_failure(
        &self,
        noun: &str,
        verb: &str,
        error: &dyn std::error::Error,
        filtered: usize,
    ) -> Result<()> {
        let now: DateTime<Utc> = Utc::now();
        let content = format!(
            "### Failure - {}\n\n**Command:** `{} {}`\n**Error:** {}\n**Filters matched:** {}\n\n---\n\n",
            now.to_rfc3339(),
            noun,
            verb,
            error,
            filtered
        );

        self.append_to_log(&content)?;
        info!(noun, verb, filtered, "Failure logged");
        Ok(())
    }

    /// Log a verb that completed.
    pub fn log_completion(&self, noun: &str, verb: &str) -> Result<()> {
        let now: DateTime<Utc> = Utc::now();
        let content = format!(
            "### Completed - {}\n\n**Command:** `{} {}`\n\n---\n\n",
            now.to_rfc3339(),
            noun,
            verb
        );

        self.append_to_log(&content)?;
        debug!(noun, verb, "Completion logged");
        Ok(())
    }

    /// Get the log file path.
    pub fn log_file(&self) -> &Path {
        &self.log_file
    }
}
