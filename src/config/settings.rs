use crate::app::prompts::Language;
use crate::config::toml_config::{TomlConfig, LOG_LEVELS};
use crate::domain::model::{OutputFormat, OversizePolicy};
use crate::domain::ports::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{validate_one_of, Validate};

#[cfg(feature = "cli")]
use crate::config::CliConfig;

/// Effective settings after merging the TOML file with command-line flags.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub oversize_policy: OversizePolicy,
    pub output_format: OutputFormat,
    pub language: Language,
    pub show_bins: bool,
    pub monitor: bool,
    pub verbose: bool,
    pub log_level: String,
    pub json_logs: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            oversize_policy: OversizePolicy::default(),
            output_format: OutputFormat::default(),
            language: Language::default(),
            show_bins: false,
            monitor: false,
            verbose: false,
            log_level: "warn".to_string(),
            json_logs: false,
        }
    }
}

impl Settings {
    pub fn from_toml(file: &TomlConfig) -> Self {
        let defaults = Self::default();
        Self {
            oversize_policy: file.oversize_policy().unwrap_or(defaults.oversize_policy),
            output_format: file.output_format().unwrap_or(defaults.output_format),
            language: file.language().unwrap_or(defaults.language),
            show_bins: file.show_bins(),
            monitor: file.monitoring_enabled(),
            verbose: false,
            log_level: file
                .log_level()
                .map(str::to_ascii_lowercase)
                .unwrap_or(defaults.log_level),
            json_logs: file.json_logs(),
        }
    }

    /// Loads the file named by `--config`, if any, and applies the flags on top.
    #[cfg(feature = "cli")]
    pub fn resolve(cli: &CliConfig) -> Result<Self> {
        cli.validate()?;

        let mut settings = match &cli.config {
            Some(path) => {
                let file = TomlConfig::from_file(path)?;
                file.validate()?;
                Self::from_toml(&file)
            }
            None => Self::default(),
        };
        settings.apply_cli_overrides(cli);
        settings.validate()?;
        Ok(settings)
    }

    #[cfg(feature = "cli")]
    pub fn apply_cli_overrides(&mut self, cli: &CliConfig) {
        if let Some(policy) = cli.oversize {
            self.oversize_policy = policy;
        }
        if let Some(format) = cli.format {
            self.output_format = format;
        }
        if let Some(language) = cli.lang {
            self.language = language;
        }
        self.show_bins |= cli.show_bins;
        self.monitor |= cli.monitor;
        self.verbose = cli.verbose;
    }
}

impl Validate for Settings {
    fn validate(&self) -> Result<()> {
        validate_one_of("logging.level", &self.log_level, &LOG_LEVELS)
    }
}

impl ConfigProvider for Settings {
    fn oversize_policy(&self) -> OversizePolicy {
        self.oversize_policy
    }

    fn output_format(&self) -> OutputFormat {
        self.output_format
    }

    fn show_bins(&self) -> bool {
        self.show_bins
    }

    fn monitoring_enabled(&self) -> bool {
        self.monitor
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = Settings::default();
        assert_eq!(settings.oversize_policy(), OversizePolicy::Reject);
        assert_eq!(settings.output_format(), OutputFormat::Text);
        assert_eq!(settings.language, Language::En);
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn test_from_toml() {
        let file = TomlConfig::from_toml_str(
            "[packing]\noversize_policy = \"accept\"\n[logging]\nlevel = \"INFO\"\n",
        )
        .unwrap();
        let settings = Settings::from_toml(&file);
        assert_eq!(settings.oversize_policy, OversizePolicy::Accept);
        assert_eq!(settings.log_level, "info");
        assert_eq!(settings.output_format, OutputFormat::Text);
    }

    #[cfg(feature = "cli")]
    #[test]
    fn test_cli_overrides_file() {
        use clap::Parser;
        use std::io::Write;

        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"[packing]\noversize_policy = \"accept\"\n[output]\nformat = \"json\"\n")
            .unwrap();
        let path = file.path().to_str().unwrap().to_string();

        let cli = CliConfig::parse_from([
            "first-fit",
            "--config",
            path.as_str(),
            "--oversize",
            "reject",
            "--show-bins",
        ]);
        let settings = Settings::resolve(&cli).unwrap();

        assert_eq!(settings.oversize_policy, OversizePolicy::Reject);
        assert_eq!(settings.output_format, OutputFormat::Json);
        assert!(settings.show_bins);
    }
}
