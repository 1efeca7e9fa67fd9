use clap::Parser;

use crate::adapters::outbound::formatters::{JsonFormatter, TextFormatter};
use crate::ports::outbound::GraphFormatter;

#[derive(Debug, Clone, Copy)]
pub enum OutputFormat {
    Json,
    Text,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "json" => Ok(OutputFormat::Json),
            "text" | "txt" => Ok(OutputFormat::Text),
            _ => Err(format!(
                "Invalid format: {}. Please specify 'json' or 'text'",
                s
            )),
        }
    }
}

impl OutputFormat {
    /// Creates a formatter instance for the specified output format
    ///
    /// # Returns
    /// A boxed GraphFormatter trait object appropriate for this format
    pub fn create_formatter(&self) -> Box<dyn GraphFormatter> {
        match self {
            OutputFormat::Json => Box::new(JsonFormatter::new()),
            OutputFormat::Text => Box::new(TextFormatter::new()),
        }
    }
}

/// Resolve the transitive dependency graph of a package
#[derive(Parser, Debug)]
#[command(name = "deptree")]
#[command(version)]
#[command(about = "Resolve the transitive dependency graph of a package", long_about = None)]
pub struct Args {
    /// Package name (e.g. "lodash" or "@babel/core")
    pub name: String,

    /// Version requirement (e.g. "4.17.21", "^1.2.3", ">=2.0.0 <3.0.0")
    pub requirement: String,

    /// Package ecosystem: npm, maven, gem, crates, composer or golang
    #[arg(short, long, default_value = "npm")]
    pub ecosystem: String,

    /// Maximum resolution depth (0 resolves nothing beyond the entry)
    #[arg(short, long)]
    pub depth: Option<u32>,

    /// Path to a JSON knowledge base file with declared dependencies
    #[arg(long = "kb", value_name = "FILE", conflicts_with = "kb_url")]
    pub kb_file: Option<String>,

    /// Base URL of a dependency knowledge base service
    #[arg(long = "kb-url", value_name = "URL")]
    pub kb_url: Option<String>,

    /// Output format: json or text
    #[arg(short, long)]
    pub format: Option<OutputFormat>,

    /// Output file path (if not specified, outputs to stdout)
    #[arg(short, long)]
    pub output: Option<String>,

    /// Number of concurrent resolution workers
    #[arg(long, value_name = "N")]
    pub max_workers: Option<usize>,

    /// Capacity of the internal job and result queues
    #[arg(long, value_name = "N")]
    pub max_queue_limit: Option<usize>,

    /// Overall resolution timeout in seconds
    #[arg(long, value_name = "SECONDS")]
    pub timeout: Option<u64>,

    /// Stop collecting once the graph holds this many dependencies
    #[arg(long, value_name = "N")]
    pub max_dependencies: Option<usize>,

    /// Path to a config file (defaults to ./deptree.config.yml if present)
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<String>,
}

impl Args {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_output_format_from_str_json() {
        let format = OutputFormat::from_str("json").unwrap();
        assert!(matches!(format, OutputFormat::Json));
    }

    #[test]
    fn test_output_format_from_str_json_case_insensitive() {
        let format = OutputFormat::from_str("JSON").unwrap();
        assert!(matches!(format, OutputFormat::Json));

        let format = OutputFormat::from_str("Json").unwrap();
        assert!(matches!(format, OutputFormat::Json));
    }

    #[test]
    fn test_output_format_from_str_text() {
        let format = OutputFormat::from_str("text").unwrap();
        assert!(matches!(format, OutputFormat::Text));

        let format = OutputFormat::from_str("txt").unwrap();
        assert!(matches!(format, OutputFormat::Text));
    }

    #[test]
    fn test_output_format_from_str_invalid() {
        let result = OutputFormat::from_str("yaml");
        assert!(result.is_err());
        let error = result.unwrap_err();
        assert!(error.contains("Invalid format"));
        assert!(error.contains("yaml"));
        assert!(error.contains("json"));
        assert!(error.contains("text"));
    }

    #[test]
    fn test_output_format_from_str_empty() {
        let result = OutputFormat::from_str("");
        assert!(result.is_err());
    }

    #[test]
    fn test_args_parse_minimal() {
        let args = Args::try_parse_from(["deptree", "lodash", "4.17.21"]).unwrap();
        assert_eq!(args.name, "lodash");
        assert_eq!(args.requirement, "4.17.21");
        assert_eq!(args.ecosystem, "npm");
        assert!(args.depth.is_none());
        assert!(args.kb_file.is_none());
    }

    #[test]
    fn test_args_parse_full() {
        let args = Args::try_parse_from([
            "deptree",
            "tar-stream",
            "^2.1.0",
            "--ecosystem",
            "npm",
            "--depth",
            "3",
            "--kb",
            "deps.json",
            "--format",
            "text",
            "--max-workers",
            "4",
            "--timeout",
            "10",
        ])
        .unwrap();
        assert_eq!(args.name, "tar-stream");
        assert_eq!(args.depth, Some(3));
        assert_eq!(args.kb_file.as_deref(), Some("deps.json"));
        assert!(matches!(args.format, Some(OutputFormat::Text)));
        assert_eq!(args.max_workers, Some(4));
        assert_eq!(args.timeout, Some(10));
    }

    #[test]
    fn test_args_kb_file_conflicts_with_kb_url() {
        let result = Args::try_parse_from([
            "deptree",
            "lodash",
            "4.17.21",
            "--kb",
            "deps.json",
            "--kb-url",
            "http://localhost:8080",
        ]);
        assert!(result.is_err());
    }
}
