use std::fs;
use std::sync::mpsc;

use anyhow::{Context, Result};
use tracing::info;

use jobsieve::{
    Coordinator, DatasetSnapshot, FilterConfig, JobRecord, ProfileStore, RankedResult, RawRecord,
    SortConfig,
};

use crate::settings::ResolvedSettings;

/// Coordinates loading the dataset, resolving the profile and running one
/// ranked pipeline pass.
#[derive(Debug)]
pub(crate) struct RankWorkflow {
    snapshot: DatasetSnapshot,
    filter: FilterConfig,
    sort: SortConfig,
}

impl RankWorkflow {
    pub(crate) fn from_settings(settings: &ResolvedSettings) -> Result<Self> {
        let snapshot = load_snapshot(settings)?;
        let (filter, sort) = load_configs(settings)?;
        Ok(Self {
            snapshot,
            filter,
            sort,
        })
    }

    /// Submit one request and block until its result is delivered.
    ///
    /// A single submission is never superseded, so exactly one delivery
    /// arrives.
    pub(crate) fn run(self) -> Result<RankedResult> {
        let (tx, rx) = mpsc::channel();
        let coordinator = Coordinator::spawn(move |result: &RankedResult| {
            let _ = tx.send(result.clone());
        });
        let sequence = coordinator.submit(self.snapshot, self.filter, self.sort);
        let result = rx
            .recv()
            .with_context(|| format!("pipeline worker exited before delivering result {sequence}"))?;
        info!(
            sequence = result.sequence(),
            listings = result.len(),
            "pipeline pass complete"
        );
        Ok(result)
    }
}

fn load_snapshot(settings: &ResolvedSettings) -> Result<DatasetSnapshot> {
    let raw = fs::read_to_string(&settings.data_path)
        .with_context(|| format!("cannot read dataset {}", settings.data_path.display()))?;
    let raw_records: Vec<RawRecord> = serde_json::from_str(&raw)
        .with_context(|| format!("dataset {} is not a JSON array of listings", settings.data_path.display()))?;
    info!(
        records = raw_records.len(),
        path = %settings.data_path.display(),
        "loaded dataset"
    );
    Ok(raw_records
        .into_iter()
        .map(JobRecord::from_raw)
        .collect::<Vec<_>>()
        .into())
}

fn load_configs(settings: &ResolvedSettings) -> Result<(FilterConfig, SortConfig)> {
    let Some(name) = &settings.profile else {
        return Ok((FilterConfig::new(), SortConfig::new()));
    };
    let store = match &settings.profile_dir {
        Some(dir) => ProfileStore::at(dir.clone()),
        None => ProfileStore::open_default()?,
    };
    let profile = store.load(name)?;
    profile
        .resolve()
        .with_context(|| format!("profile '{name}' failed validation"))
}

/// Open the profile store selected by the settings-independent CLI flags.
pub(crate) fn profile_store(dir: Option<std::path::PathBuf>) -> Result<ProfileStore> {
    match dir {
        Some(dir) => Ok(ProfileStore::at(dir)),
        None => ProfileStore::open_default(),
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write as _;
    use std::path::PathBuf;

    use crate::cli::OutputFormat;

    use super::*;

    fn settings(data_path: PathBuf) -> ResolvedSettings {
        ResolvedSettings {
            data_path,
            profile: None,
            profile_dir: None,
            output: OutputFormat::Plain,
            limit: None,
            log_level: None,
        }
    }

    #[test]
    fn end_to_end_pass_ranks_a_json_export() {
        let mut file = tempfile::NamedTempFile::new().expect("tempfile");
        write!(
            file,
            r#"[
                {{"id": "a", "title": "Engineer", "location": "California", "description": "PhD"}},
                {{"id": "b", "title": "Engineer", "location": "Texas", "description": ""}}
            ]"#
        )
        .expect("writes");

        let workflow =
            RankWorkflow::from_settings(&settings(file.path().to_path_buf())).expect("builds");
        let result = workflow.run().expect("runs");
        assert_eq!(result.len(), 2);
        assert_eq!(result.sequence(), 1);
    }

    #[test]
    fn missing_dataset_files_surface_context() {
        let err = RankWorkflow::from_settings(&settings(PathBuf::from("/nonexistent/jobs.json")))
            .expect_err("fails");
        assert!(err.to_string().contains("cannot read dataset"));
    }
}
