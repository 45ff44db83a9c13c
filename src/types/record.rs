use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::degrees::DegreeMentions;
use super::location::state_token;

/// Where a listing expects work to happen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum WorkModel {
    OnSite,
    Hybrid,
    Remote,
    Unknown,
}

/// Employment type of a listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum JobType {
    FullTime,
    PartTime,
    Contract,
    Internship,
    Unknown,
}

/// Site and URL the listing was collected from.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceInfo {
    pub site: String,
    pub url: String,
}

/// A job listing as exported by the collection side, before ingestion.
///
/// Every field is optional; ingestion resolves whatever is missing to an
/// explicit unknown sentinel instead of failing.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RawRecord {
    pub id: Option<String>,
    pub site: Option<String>,
    pub job_url: Option<String>,
    pub title: Option<String>,
    pub company: Option<String>,
    pub location: Option<String>,
    pub date_posted: Option<String>,
    pub job_type: Option<String>,
    pub is_remote: Option<bool>,
    pub work_from_home_type: Option<String>,
    pub description: Option<String>,
}

/// One immutable job listing plus the derived fields criteria operate on.
///
/// Constructed once by [`JobRecord::from_raw`]; the engines never mutate it.
#[derive(Debug, Clone, PartialEq)]
pub struct JobRecord {
    pub id: String,
    pub title: String,
    pub company: String,
    pub location: String,
    /// Normalized state/region token derived from `location`.
    pub state: Option<String>,
    pub posted: Option<NaiveDate>,
    pub work_model: WorkModel,
    pub job_type: JobType,
    pub description: String,
    /// Degree classes mentioned in the description, extracted at ingestion.
    pub degrees: DegreeMentions,
    pub source: SourceInfo,
    title_lc: String,
    description_lc: String,
}

impl JobRecord {
    /// Ingest a raw collected record, deriving the cached match views.
    #[must_use]
    pub fn from_raw(raw: RawRecord) -> Self {
        let title = raw.title.unwrap_or_default();
        let description = raw.description.unwrap_or_default();
        let location = raw.location.unwrap_or_default();
        let work_model = parse_work_model(raw.work_from_home_type.as_deref(), raw.is_remote);
        let job_type = raw.job_type.as_deref().map_or(JobType::Unknown, parse_job_type);
        let posted = raw
            .date_posted
            .as_deref()
            .and_then(|date| NaiveDate::parse_from_str(date.trim(), "%Y-%m-%d").ok());
        Self {
            state: state_token(&location),
            posted,
            work_model,
            job_type,
            degrees: DegreeMentions::extract(&description),
            source: SourceInfo {
                site: raw.site.unwrap_or_default(),
                url: raw.job_url.unwrap_or_default(),
            },
            title_lc: title.to_lowercase(),
            description_lc: description.to_lowercase(),
            id: raw.id.unwrap_or_default(),
            company: raw.company.unwrap_or_default(),
            location,
            title,
            description,
        }
    }

    /// Cached lowercase title, used for repeated term matching.
    #[must_use]
    pub fn title_lc(&self) -> &str {
        &self.title_lc
    }

    /// Cached lowercase description, used for repeated term matching.
    #[must_use]
    pub fn description_lc(&self) -> &str {
        &self.description_lc
    }
}

/// Resolve the work model, preferring an explicit work-from-home type over
/// the coarser remote flag.
fn parse_work_model(work_from_home_type: Option<&str>, is_remote: Option<bool>) -> WorkModel {
    if let Some(label) = work_from_home_type {
        match label.trim().to_lowercase().as_str() {
            "remote" => return WorkModel::Remote,
            "hybrid" => return WorkModel::Hybrid,
            "onsite" | "on-site" | "on_site" | "in-person" => return WorkModel::OnSite,
            _ => {}
        }
    }
    match is_remote {
        Some(true) => WorkModel::Remote,
        Some(false) => WorkModel::OnSite,
        None => WorkModel::Unknown,
    }
}

fn parse_job_type(label: &str) -> JobType {
    match label.trim().to_lowercase().replace(['-', '_', ' '], "").as_str() {
        "fulltime" => JobType::FullTime,
        "parttime" => JobType::PartTime,
        "contract" | "contractor" => JobType::Contract,
        "internship" | "intern" => JobType::Internship,
        _ => JobType::Unknown,
    }
}
