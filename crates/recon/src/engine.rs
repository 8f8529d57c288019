use std::collections::{BTreeMap, BTreeSet};

use crate::model::{CatalogRecord, NeededList, ReconReport};
use crate::normalize::{normalize_key, thumbnail_filename};

/// Reconcile fetched catalog records against the needed list.
///
/// Stage order is fixed: thumbnails are derived for every record, records
/// without a url are dropped, then the join retains records whose
/// normalized report number is in the needed set. A url-less record never
/// reaches the join, so its report number is reported as a gap even when
/// it would have matched.
pub fn reconcile(records: Vec<CatalogRecord>, needed: &NeededList) -> ReconReport {
    // Normalized key → raw forms. Raw forms sharing a key are all
    // satisfied by one matching record.
    let mut raw_by_key: BTreeMap<String, Vec<&str>> = BTreeMap::new();
    for raw in needed.iter() {
        raw_by_key.entry(normalize_key(raw)).or_default().push(raw);
    }

    let mut kept = Vec::new();
    let mut dropped_no_url = 0usize;
    let mut matched_keys: BTreeSet<String> = BTreeSet::new();

    for mut record in records {
        record.thumbnail = thumbnail_filename(&record.report_number);

        if record.url.is_empty() {
            dropped_no_url += 1;
            continue;
        }

        let key = normalize_key(&record.report_number);
        if raw_by_key.contains_key(&key) {
            matched_keys.insert(key);
            kept.push(record);
        }
    }

    let mut gaps: Vec<String> = raw_by_key
        .iter()
        .filter(|(key, _)| !matched_keys.contains(key.as_str()))
        .flat_map(|(_, raws)| raws.iter().map(|r| r.to_string()))
        .collect();
    gaps.sort();

    ReconReport {
        kept,
        dropped_no_url,
        gaps,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(key: &str, report_number: &str, url: &str) -> CatalogRecord {
        CatalogRecord {
            key: key.into(),
            title: format!("Title {key}"),
            report_number: report_number.into(),
            url: url.into(),
            item_type: "report".into(),
            date: "2001".into(),
            thumbnail: String::new(),
        }
    }

    #[test]
    fn retains_only_needed_records_with_urls() {
        let needed = NeededList::from_raw(["PNW 615", "AGNET"]);
        let records = vec![
            record("K1", "pnw 615", "https://example.org/pnw615"),
            record("K2", "FS123", "https://example.org/fs123"),
            record("K3", "AGNET", ""),
        ];

        let report = reconcile(records, &needed);

        assert_eq!(report.kept.len(), 1);
        assert_eq!(report.kept[0].key, "K1");
        assert_eq!(report.kept[0].thumbnail, "pnw_615.png");
        assert_eq!(report.dropped_no_url, 1);
        assert_eq!(report.gaps, ["AGNET"]);
    }

    #[test]
    fn multiple_records_sharing_a_key_are_all_kept() {
        let needed = NeededList::from_raw(["PNW 615"]);
        let records = vec![
            record("K1", "PNW 615", "https://example.org/a"),
            record("K2", "pnw-615", "https://example.org/b"),
        ];
        let report = reconcile(records, &needed);
        assert_eq!(report.kept.len(), 2);
        assert!(report.gaps.is_empty());
    }

    #[test]
    fn raw_forms_sharing_a_key_satisfied_by_one_match() {
        let needed = NeededList::from_raw(["PNW 615", "pnw-615"]);
        let report = reconcile(
            vec![record("K1", "PNW615", "https://example.org/p")],
            &needed,
        );
        assert!(report.gaps.is_empty());
    }

    #[test]
    fn unmatched_raw_forms_each_reported_once() {
        let needed = NeededList::from_raw(["PNW 615", "pnw-615", "AGNET"]);
        let report = reconcile(vec![], &needed);
        assert_eq!(report.gaps, ["AGNET", "PNW 615", "pnw-615"]);
    }

    #[test]
    fn empty_needed_list_keeps_nothing() {
        let needed = NeededList::default();
        let report = reconcile(
            vec![record("K1", "PNW 615", "https://example.org/p")],
            &needed,
        );
        assert!(report.kept.is_empty());
        assert!(report.gaps.is_empty());
    }

    #[test]
    fn record_order_is_preserved() {
        let needed = NeededList::from_raw(["A1", "B2", "C3"]);
        let records = vec![
            record("K3", "C3", "https://example.org/c"),
            record("K1", "A1", "https://example.org/a"),
            record("K2", "B2", "https://example.org/b"),
        ];
        let report = reconcile(records, &needed);
        let keys: Vec<&str> = report.kept.iter().map(|r| r.key.as_str()).collect();
        assert_eq!(keys, ["K3", "K1", "K2"]);
    }
}
