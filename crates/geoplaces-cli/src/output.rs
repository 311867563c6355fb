use console::style;
use serde::Serialize;
use std::fmt::Display;
use tabled::{settings::Style, Table, Tabled};

/// Output format mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Human,
    Json,
}

/// Writes command results to stdout and diagnostics to stderr.
///
/// In JSON mode only [`OutputWriter::result`] and [`OutputWriter::data`]
/// touch stdout, so the output of a command is always one JSON document.
pub struct OutputWriter {
    format: OutputFormat,
}

impl OutputWriter {
    pub fn new(json: bool) -> Self {
        Self {
            format: if json {
                OutputFormat::Json
            } else {
                OutputFormat::Human
            },
        }
    }

    pub fn success(&self, message: impl Display) {
        if self.format == OutputFormat::Human {
            println!("{} {}", style("✓").green().bold(), message);
        }
    }

    pub fn info(&self, message: impl Display) {
        if self.format == OutputFormat::Human {
            println!("{} {}", style("ℹ").blue().bold(), message);
        }
    }

    pub fn warning(&self, message: impl Display) {
        match self.format {
            OutputFormat::Human => {
                eprintln!("{} {}", style("⚠").yellow().bold(), message);
            }
            OutputFormat::Json => {
                eprintln!("{}", status_json("warning", &message));
            }
        }
    }

    pub fn error(&self, message: impl Display) {
        match self.format {
            OutputFormat::Human => {
                eprintln!("{} {}", style("✗").red().bold(), message);
            }
            OutputFormat::Json => {
                eprintln!("{}", status_json("error", &message));
            }
        }
    }

    pub fn table<T: Tabled>(&self, data: Vec<T>) {
        if self.format == OutputFormat::Json {
            return;
        }

        if data.is_empty() {
            println!("{}", style("(no data)").dim());
        } else {
            let mut table = Table::new(data);
            table.with(Style::rounded());
            println!("{}", table);
        }
    }

    /// Print a value as pretty JSON regardless of mode
    pub fn data<T: Serialize>(&self, data: &T) -> anyhow::Result<()> {
        let json_str = serde_json::to_string_pretty(data)?;
        println!("{}", json_str);
        Ok(())
    }

    pub fn result<T: Serialize>(&self, data: T) -> anyhow::Result<()> {
        match self.format {
            OutputFormat::Human => {
                self.data(&data)?;
            }
            OutputFormat::Json => {
                let output = serde_json::json!({
                    "status": "success",
                    "data": data,
                });
                println!("{}", serde_json::to_string_pretty(&output)?);
            }
        }
        Ok(())
    }

    pub fn kv(&self, key: impl Display, value: impl Display) {
        if self.format == OutputFormat::Human {
            println!("{}: {}", style(key).bold(), value);
        }
    }

    pub fn section(&self, title: impl Display) {
        if self.format == OutputFormat::Human {
            println!("\n{}", style(title).bold().underlined());
        }
    }

    pub fn is_json(&self) -> bool {
        matches!(self.format, OutputFormat::Json)
    }
}

fn status_json(status: &str, message: &impl Display) -> String {
    serde_json::json!({
        "status": status,
        "message": message.to_string(),
    })
    .to_string()
}
