use std::path::PathBuf;

use anyhow::{Result, ensure};
use serde::Deserialize;

use crate::cli::CliArgs;

use super::resolved::ResolvedSettings;

/// Mirror of the configuration file representation before CLI overrides and
/// validation are applied.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct RawSettings {
    dataset: DatasetSection,
    profile: ProfileSection,
    output: OutputSection,
    log_level: Option<String>,
}

/// Dataset options as they are read from disk.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
struct DatasetSection {
    path: Option<PathBuf>,
}

/// Profile selection options prior to validation.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
struct ProfileSection {
    name: Option<String>,
    dir: Option<PathBuf>,
}

/// Output options prior to validation.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
struct OutputSection {
    format: Option<String>,
    limit: Option<usize>,
}

impl RawSettings {
    /// Apply CLI overrides on top of the raw configuration values.
    pub(super) fn apply_cli_overrides(&mut self, cli: &CliArgs) {
        if let Some(data) = cli.data.clone() {
            self.dataset.path = Some(data);
        }
        if let Some(profile) = cli.profile.clone() {
            self.profile.name = Some(profile);
        }
        if let Some(dir) = cli.profile_dir.clone() {
            self.profile.dir = Some(dir);
        }
        if let Some(format) = cli.output {
            self.output.format = Some(
                match format {
                    crate::cli::OutputFormat::Plain => "plain",
                    crate::cli::OutputFormat::Json => "json",
                }
                .to_string(),
            );
        }
        if let Some(limit) = cli.limit {
            self.output.limit = Some(limit);
        }
        if let Some(level) = cli.log_level.clone() {
            self.log_level = Some(level);
        }
    }

    /// Validate the combined values into application-ready settings.
    pub(super) fn resolve(self) -> Result<ResolvedSettings> {
        let data_path = self
            .dataset
            .path
            .ok_or_else(|| anyhow::anyhow!("no dataset given; pass --data or set dataset.path"))?;
        let output = match self.output.format.as_deref() {
            None => crate::cli::OutputFormat::default(),
            Some(label) => crate::cli::OutputFormat::from_label(label).ok_or_else(|| {
                anyhow::anyhow!("unknown output format '{label}' (expected plain or json)")
            })?,
        };
        if let Some(name) = &self.profile.name {
            ensure!(!name.trim().is_empty(), "profile name must not be blank");
        }
        Ok(ResolvedSettings {
            data_path,
            profile: self.profile.name,
            profile_dir: self.profile.dir,
            output,
            limit: self.output.limit,
            log_level: self.log_level,
        })
    }
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use super::*;

    #[test]
    fn cli_overrides_replace_file_values() {
        let mut raw = RawSettings {
            dataset: DatasetSection {
                path: Some(PathBuf::from("from-file.json")),
            },
            ..RawSettings::default()
        };
        let cli = CliArgs::parse_from(["jobsieve", "--data", "from-cli.json", "--limit", "5"]);
        raw.apply_cli_overrides(&cli);
        let resolved = raw.resolve().expect("resolves");
        assert_eq!(resolved.data_path, PathBuf::from("from-cli.json"));
        assert_eq!(resolved.limit, Some(5));
    }

    #[test]
    fn missing_dataset_path_is_an_error() {
        assert!(RawSettings::default().resolve().is_err());
    }

    #[test]
    fn unknown_output_formats_are_rejected() {
        let raw = RawSettings {
            dataset: DatasetSection {
                path: Some(PathBuf::from("jobs.json")),
            },
            output: OutputSection {
                format: Some("yaml".into()),
                limit: None,
            },
            ..RawSettings::default()
        };
        assert!(raw.resolve().is_err());
    }
}
