//! Degree-mention extraction over a fixed vocabulary.
//!
//! Extraction runs once per record at ingestion; scoring only ever consults
//! the cached [`DegreeMentions`] set.

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

/// Degree classes recognized by the scoring model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Degree {
    Bachelor,
    Master,
    Doctorate,
}

impl fmt::Display for Degree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Degree::Bachelor => "bachelor",
            Degree::Master => "master",
            Degree::Doctorate => "doctorate",
        };
        f.write_str(label)
    }
}

static BACHELOR: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?xi)
        \b(?:
            b\.?a\.?|
            b\.?s\.?|
            b\.?sc\.?|
            b\.?s\.?e\.?|
            b\.?eng\.?|
            b\.?b\.?a\.?|
            bfa|bit|
            bachelor'?s?|
            undergrad(?:uate)?|
            four-year\s+degree|
            4-year\s+degree|
            university\s+degree|
            degree\s+in\s+\w+
        )\b",
    )
    .expect("bachelor vocabulary compiles")
});

static MASTER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?xi)
        \b(?:
            m\.?a\.?|
            m\.?s\.?|
            m\.?b\.?a\.?|
            m\.?sc\.?|
            m\.?s\.?e\.?|
            m\.?eng\.?|
            mph|mcs|mfa|
            master'?s?|
            graduate\s+degree|
            advanced\s+degree|
            post-?graduate
        )\b",
    )
    .expect("master vocabulary compiles")
});

static DOCTORATE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?xi)
        \b(?:
            ph\.?d\.?|
            doctor(?:ate|al)|
            jd|md|edd|dphil
        )\b",
    )
    .expect("doctorate vocabulary compiles")
});

/// Which degree classes a record's text mentions. Computed once at ingestion.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DegreeMentions {
    bachelor: bool,
    master: bool,
    doctorate: bool,
}

impl DegreeMentions {
    /// Scan `text` for mentions of each degree class.
    #[must_use]
    pub fn extract(text: &str) -> Self {
        // "BS/MS" style listings separate degrees with slashes.
        let text = text.replace('/', " ");
        Self {
            bachelor: BACHELOR.is_match(&text),
            master: MASTER.is_match(&text),
            doctorate: DOCTORATE.is_match(&text),
        }
    }

    #[must_use]
    pub fn contains(self, degree: Degree) -> bool {
        match degree {
            Degree::Bachelor => self.bachelor,
            Degree::Master => self.master,
            Degree::Doctorate => self.doctorate,
        }
    }

    #[must_use]
    pub fn is_empty(self) -> bool {
        !(self.bachelor || self.master || self.doctorate)
    }

    /// Iterate over the mentioned degree classes in a fixed order.
    pub fn iter(self) -> impl Iterator<Item = Degree> {
        [Degree::Bachelor, Degree::Master, Degree::Doctorate]
            .into_iter()
            .filter(move |degree| self.contains(*degree))
    }
}
