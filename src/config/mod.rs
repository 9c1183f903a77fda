pub mod cli;

use crate::core::export::ExportFormat;
use crate::utils::error::{CatalogueError, Result};
use crate::utils::validation::{validate_path, Validate};
use clap::Parser;

#[derive(Debug, Clone, Parser)]
#[command(name = "program-catalogue")]
#[command(about = "Export the English-taught program catalogue")]
pub struct CliConfig {
    /// Output format: json, csv, tsv or bundle
    #[arg(long, default_value = "json")]
    pub format: ExportFormat,

    #[arg(long, default_value = "./output")]
    pub output_path: String,

    #[arg(long, help = "Print the export to stdout instead of writing a file")]
    pub stdout: bool,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON lines")]
    pub log_json: bool,
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        if self.stdout {
            if self.format.is_binary() {
                return Err(CatalogueError::InvalidConfigValueError {
                    field: "format".to_string(),
                    value: self.format.to_string(),
                    reason: "binary formats cannot be printed to stdout".to_string(),
                });
            }
        } else {
            validate_path("output_path", &self.output_path)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = CliConfig::parse_from(["program-catalogue"]);
        assert_eq!(config.format, ExportFormat::Json);
        assert_eq!(config.output_path, "./output");
        assert!(!config.stdout);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_bundle_to_stdout_rejected() {
        let config = CliConfig::parse_from(["program-catalogue", "--format", "bundle", "--stdout"]);
        assert!(config.validate().is_err());

        let config = CliConfig::parse_from(["program-catalogue", "--format", "csv", "--stdout"]);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_empty_output_path_rejected() {
        let config = CliConfig::parse_from(["program-catalogue", "--output-path", ""]);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_unknown_format_rejected() {
        let result = CliConfig::try_parse_from(["program-catalogue", "--format", "xml"]);
        assert!(result.is_err());
    }
}
