//! Normalization of free-text location strings into US state tokens.

/// US state names paired with their 2-letter abbreviations.
const STATES: &[(&str, &str)] = &[
    ("alaska", "ak"),
    ("alabama", "al"),
    ("arkansas", "ar"),
    ("arizona", "az"),
    ("california", "ca"),
    ("colorado", "co"),
    ("connecticut", "ct"),
    ("district of columbia", "dc"),
    ("delaware", "de"),
    ("florida", "fl"),
    ("georgia", "ga"),
    ("hawaii", "hi"),
    ("iowa", "ia"),
    ("idaho", "id"),
    ("illinois", "il"),
    ("indiana", "in"),
    ("kansas", "ks"),
    ("kentucky", "ky"),
    ("louisiana", "la"),
    ("massachusetts", "ma"),
    ("maryland", "md"),
    ("maine", "me"),
    ("michigan", "mi"),
    ("minnesota", "mn"),
    ("missouri", "mo"),
    ("mississippi", "ms"),
    ("montana", "mt"),
    ("north carolina", "nc"),
    ("north dakota", "nd"),
    ("nebraska", "ne"),
    ("new hampshire", "nh"),
    ("new jersey", "nj"),
    ("new mexico", "nm"),
    ("nevada", "nv"),
    ("new york", "ny"),
    ("ohio", "oh"),
    ("oklahoma", "ok"),
    ("oregon", "or"),
    ("pennsylvania", "pa"),
    ("rhode island", "ri"),
    ("south carolina", "sc"),
    ("south dakota", "sd"),
    ("tennessee", "tn"),
    ("texas", "tx"),
    ("utah", "ut"),
    ("virginia", "va"),
    ("vermont", "vt"),
    ("washington", "wa"),
    ("wisconsin", "wi"),
    ("west virginia", "wv"),
    ("wyoming", "wy"),
];

const COUNTRY_TOKENS: &[&str] = &["us", "usa", "united states", "united states of america"];

/// Look up the abbreviation for a state name, accepting abbreviations as-is.
fn lookup_abbr(token: &str) -> Option<&'static str> {
    STATES
        .iter()
        .find(|(name, abbr)| *name == token || *abbr == token)
        .map(|(_, abbr)| *abbr)
}

fn is_country(token: &str) -> bool {
    COUNTRY_TOKENS.contains(&token)
}

/// Extract a normalized uppercase state token from a free-text location.
///
/// Handles the comma-separated shapes produced by the collection side:
/// a bare state, `City, State`, `State, Country` and `City, State, Country`.
/// Anything unrecognizable yields `None`.
#[must_use]
pub fn state_token(location: &str) -> Option<String> {
    let parts: Vec<String> = location
        .split(',')
        .map(|part| part.trim().to_lowercase())
        .collect();
    let token = match parts.as_slice() {
        [single] => lookup_abbr(single)?.to_string(),
        [first, second] if is_country(second) => lookup_abbr(first)?.to_string(),
        [_, second] => lookup_abbr(second)?.to_string(),
        // Three parts are assumed to be "City, State, Country"; an
        // unrecognized middle token is kept verbatim so collector-specific
        // region codes still rank.
        [_, second, _] => lookup_abbr(second).map_or_else(|| second.clone(), str::to_string),
        _ => return None,
    };
    if token.is_empty() {
        None
    } else {
        Some(token.to_uppercase())
    }
}

/// Normalize a user-entered priority entry to the same token space as
/// [`state_token`], so "California" and "CA" rank the same records.
#[must_use]
pub(crate) fn normalize_region(entry: &str) -> String {
    let trimmed = entry.trim().to_lowercase();
    lookup_abbr(&trimmed)
        .map_or(trimmed, str::to_string)
        .to_uppercase()
}
