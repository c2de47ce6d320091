//! Inventory validator for the literal tables.
//!
//! Operates on the live tables, no file I/O:
//! - roster ids are dense and start at 0, and only the chief is titled
//! - every occurrence key is canonical, in range and unique, with a
//!   non-empty record list
//! - every record in the literal table is typed and carries an ISO date
//! - per variant, each size group holds exactly C(n, k) combinations and
//!   the occurred count equals the number of projected keys
//! - the restricted projection is type-free

use coalition_roster::data::{CASES, JUSTICES, ROSTER_SIZE};
use coalition_roster::{
    binomial, canonical_key, generate_all_combinations, OccurrenceStore, Statistics, Variant,
};
use regex::Regex;

use crate::report::{ConformanceReport, TestResult};

/// Validates the roster and occurrence tables against both variants.
pub fn validate() -> ConformanceReport {
    let mut report = ConformanceReport::new();
    report.push(check_roster());
    report.push(check_keys());
    report.push(check_records());
    for variant in [Variant::Full, Variant::Restricted] {
        report.push(check_universe(variant));
    }
    report.push(check_restricted_projection());
    report
}

fn check_roster() -> TestResult {
    let mut issues: Vec<String> = JUSTICES
        .iter()
        .enumerate()
        .filter(|(i, j)| j.id != *i)
        .map(|(i, j)| format!("roster entry {} has id {}", i, j.id))
        .collect();
    let titled = JUSTICES.iter().filter(|j| j.title.is_some()).count();
    if titled != 1 {
        issues.push(format!("{titled} justices carry a title, expected 1"));
    }
    TestResult::from_issues(
        "data/roster",
        format!("All {} roster ids are dense", ROSTER_SIZE),
        "Roster ids are not dense",
        issues,
    )
}

fn check_keys() -> TestResult {
    let mut issues = Vec::new();
    let mut seen = std::collections::HashSet::new();
    for (key, records) in CASES {
        let ids: Result<Vec<usize>, _> = key.split(',').map(str::parse::<usize>).collect();
        match ids.map_err(|e| e.to_string()).and_then(|ids| {
            canonical_key(&ids).map_err(|e| e.to_string())
        }) {
            Ok(canonical) if canonical == *key => {}
            Ok(canonical) => issues.push(format!("key {key} should be {canonical}")),
            Err(e) => issues.push(format!("key {key}: {e}")),
        }
        if records.is_empty() {
            issues.push(format!("key {key} has no records"));
        }
        if !seen.insert(*key) {
            issues.push(format!("key {key} appears twice"));
        }
    }
    TestResult::from_issues(
        "data/keys",
        format!("All {} occurrence keys are canonical and unique", CASES.len()),
        "Malformed occurrence keys",
        issues,
    )
}

fn check_records() -> TestResult {
    let date = Regex::new(r"^\d{4}-\d{2}-\d{2}$").ok();
    let mut issues = Vec::new();
    for (key, records) in CASES {
        for record in records.iter() {
            if record.opinion.is_none() {
                issues.push(format!("{key}: {} has no opinion type", record.case_name));
            }
            if !date.as_ref().is_some_and(|re| re.is_match(record.date)) {
                issues.push(format!("{key}: {} has date {:?}", record.case_name, record.date));
            }
        }
    }
    TestResult::from_issues(
        "data/records",
        "All case records are typed and dated",
        "Malformed case records",
        issues,
    )
}

fn check_universe(variant: Variant) -> TestResult {
    let validator = format!("data/universe/{}", variant.as_str());
    let all = match generate_all_combinations(ROSTER_SIZE, Variant::MIN_SIZE, variant.max_size())
    {
        Ok(all) => all,
        Err(e) => return TestResult::fail(validator, format!("Generation failed: {e}")),
    };

    let mut issues = Vec::new();
    for size in variant.size_range() {
        let count = all.iter().filter(|c| c.len() == size).count();
        let expected = binomial(ROSTER_SIZE, size);
        if count != expected {
            issues.push(format!("size {size}: {count} combinations, expected {expected}"));
        }
    }

    let store = OccurrenceStore::for_variant(variant);
    let stats = Statistics::compute(&all, store);
    if stats.occurred_count != store.len() {
        issues.push(format!(
            "{} combinations occurred but the store holds {} keys",
            stats.occurred_count,
            store.len()
        ));
    }

    TestResult::from_issues(
        validator,
        format!(
            "{} combinations, {} occurred",
            stats.total_combinations, stats.occurred_count
        ),
        "Combination universe does not match the roster",
        issues,
    )
}

fn check_restricted_projection() -> TestResult {
    let store = OccurrenceStore::for_variant(Variant::Restricted);
    let issues: Vec<String> = store
        .entries()
        .filter(|(_, records)| records.iter().any(|r| r.opinion.is_some()))
        .map(|(key, _)| format!("{key} keeps an opinion type"))
        .collect();
    TestResult::from_issues(
        "data/restricted",
        "Restricted records are type-free",
        "Restricted records carry opinion types",
        issues,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn literal_tables_pass() {
        let report = validate();
        let failures: Vec<_> = report.results.iter().filter(|r| r.is_failure()).collect();
        assert!(failures.is_empty(), "Inventory failures: {:#?}", failures);
        assert_eq!(report.results.len(), 6);
    }
}
