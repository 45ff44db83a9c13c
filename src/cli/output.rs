use anyhow::Result;
use jobsieve::RankedResult;
use serde_json::json;

/// Print a plain-text line per ranked listing, best first.
pub(crate) fn print_plain(result: &RankedResult, limit: Option<usize>) {
    if result.is_empty() {
        println!("No listings matched the current filters.");
        return;
    }

    let shown = limit.unwrap_or(result.len()).min(result.len());
    for (record, scored) in result.records().take(shown) {
        let posted = record
            .posted
            .map_or_else(|| "----------".to_string(), |date| date.to_string());
        let location = if record.location.is_empty() {
            "unknown location"
        } else {
            record.location.as_str()
        };
        println!(
            "{total:>8.2}  {posted}  {title} | {company} ({location}) [{site}]",
            total = scored.breakdown.total,
            title = record.title,
            company = record.company,
            site = record.source.site,
        );
    }
    if shown < result.len() {
        println!("... and {} more", result.len() - shown);
    }
}

/// Format the ranked result as a JSON string.
pub(crate) fn format_result_json(result: &RankedResult, limit: Option<usize>) -> Result<String> {
    let shown = limit.unwrap_or(result.len()).min(result.len());
    let listings: Vec<_> = result
        .records()
        .take(shown)
        .map(|(record, scored)| {
            json!({
                "id": record.id,
                "title": record.title,
                "company": record.company,
                "location": record.location,
                "posted": record.posted,
                "url": record.source.url,
                "score": scored.breakdown,
            })
        })
        .collect();

    let payload = json!({
        "sequence": result.sequence(),
        "total": result.len(),
        "listings": listings,
    });

    Ok(serde_json::to_string_pretty(&payload)?)
}

/// Print the JSON representation of the ranked result.
pub(crate) fn print_json(result: &RankedResult, limit: Option<usize>) -> Result<()> {
    println!("{}", format_result_json(result, limit)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::sync::mpsc;
    use std::time::Duration;

    use serde_json::Value;

    use jobsieve::{Coordinator, DatasetSnapshot, FilterConfig, JobRecord, RawRecord, SortConfig};

    use super::*;

    fn ranked() -> RankedResult {
        let snapshot: DatasetSnapshot = vec![JobRecord::from_raw(RawRecord {
            id: Some("li-1".into()),
            title: Some("Engineer".into()),
            company: Some("Acme".into()),
            ..RawRecord::default()
        })]
        .into();
        let (tx, rx) = mpsc::channel();
        let coordinator = Coordinator::spawn(move |result: &RankedResult| {
            let _ = tx.send(result.clone());
        });
        coordinator.submit(snapshot, FilterConfig::new(), SortConfig::new());
        rx.recv_timeout(Duration::from_secs(5)).expect("delivered")
    }

    #[test]
    fn json_format_includes_scores_and_sequence() {
        let json = format_result_json(&ranked(), None).expect("json");
        let value: Value = serde_json::from_str(&json).expect("parse");
        assert_eq!(value["sequence"], 1);
        assert_eq!(value["listings"][0]["id"], "li-1");
        assert_eq!(value["listings"][0]["score"]["location"], -1.0);
    }

    #[test]
    fn limits_truncate_the_listing_array() {
        let json = format_result_json(&ranked(), Some(0)).expect("json");
        let value: Value = serde_json::from_str(&json).expect("parse");
        assert_eq!(value["total"], 1);
        assert_eq!(value["listings"].as_array().map(Vec::len), Some(0));
    }
}
