use std::path::PathBuf;

use crate::cli::OutputFormat;

/// Application-ready settings derived from user input, config files and
/// sensible defaults.
#[derive(Debug)]
pub(crate) struct ResolvedSettings {
    pub(crate) data_path: PathBuf,
    pub(crate) profile: Option<String>,
    pub(crate) profile_dir: Option<PathBuf>,
    pub(crate) output: OutputFormat,
    pub(crate) limit: Option<usize>,
    pub(crate) log_level: Option<String>,
}

impl ResolvedSettings {
    /// Print a human readable summary of the effective settings.
    pub(crate) fn print_summary(&self) {
        println!("Effective settings:");
        println!("  Dataset: {}", self.data_path.display());
        println!(
            "  Profile: {}",
            self.profile.as_deref().unwrap_or("(pass-through)")
        );
        if let Some(dir) = &self.profile_dir {
            println!("  Profile directory: {}", dir.display());
        }
        println!(
            "  Output: {}",
            match self.output {
                OutputFormat::Plain => "plain",
                OutputFormat::Json => "json",
            }
        );
        match self.limit {
            Some(limit) => println!("  Limit: {limit}"),
            None => println!("  Limit: unlimited"),
        }
        if let Some(level) = &self.log_level {
            println!("  Log level: {level}");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn summary_prints_without_panic() {
        let settings = ResolvedSettings {
            data_path: PathBuf::from("/tmp/jobs.json"),
            profile: Some("default".into()),
            profile_dir: None,
            output: OutputFormat::Plain,
            limit: Some(20),
            log_level: Some("debug".into()),
        };

        settings.print_summary();
    }
}
