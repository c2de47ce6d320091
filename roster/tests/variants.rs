//! End-to-end checks of both variants against the literal tables.

use coalition_roster::data::CASES;
use coalition_roster::{
    generate_all_combinations, OccurrenceStore, Session, SizeFilter, Statistics, Variant,
};

#[test]
fn full_variant_universe() {
    let all = generate_all_combinations(9, 2, 9).unwrap();
    assert_eq!(all.len(), 502, "2^9 - 1 - 9 combinations");
    assert_eq!(all.iter().filter(|c| c.len() == 2).count(), 36);
    assert_eq!(all.iter().filter(|c| c.len() == 9).count(), 1);

    let store = OccurrenceStore::for_variant(Variant::Full);
    let unanimous: Vec<usize> = (0..9).collect();
    assert!(store.has_occurred(&unanimous).unwrap());
    let records = store.records_for(&unanimous).unwrap();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].case_name, "Smith v. United States");

    assert!(!store.has_occurred(&[1, 3, 5]).unwrap());
    assert!(store.records_for(&[1, 3, 5]).unwrap().is_empty());
}

#[test]
fn restricted_variant_universe() {
    let all = generate_all_combinations(9, 2, 4).unwrap();
    assert_eq!(all.len(), 36 + 84 + 126);

    let store = OccurrenceStore::for_variant(Variant::Restricted);
    assert!(store.has_occurred(&[0, 6]).unwrap());
    let records = store.records_for(&[0, 6]).unwrap();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].case_name, "Harris v. State of Georgia");
}

/// `has_occurred` is true for exactly the keys in the table.
#[test]
fn occurred_set_matches_table() {
    let store = OccurrenceStore::for_variant(Variant::Full);
    let all = generate_all_combinations(9, 2, 9).unwrap();
    let table_keys: Vec<&str> = CASES.iter().map(|(k, _)| *k).collect();
    for c in &all {
        assert_eq!(
            store.has_occurred(c.ids()).unwrap(),
            table_keys.contains(&c.key().as_str()),
            "Mismatch for {}",
            c.key()
        );
    }
    let stats = Statistics::compute(&all, store);
    assert_eq!(stats.occurred_count, table_keys.len());
}

#[test]
fn completion_rate_for_full_variant() {
    let session = Session::new(Variant::Full).unwrap();
    assert_eq!(session.statistics().completion_rate_label().unwrap(), "4.0%");
}

#[test]
fn size_three_then_all_restores_everything() {
    let mut session = Session::new(Variant::Restricted).unwrap();
    session.select_size(SizeFilter::Size(3)).unwrap();
    session.toggle_required_member(3, 0).unwrap();
    session.toggle_required_member(3, 4).unwrap();
    let narrowed: usize = session
        .visible_groups()
        .iter()
        .map(|g| g.combinations.len())
        .sum();
    assert_eq!(narrowed, 7);

    session.select_size(SizeFilter::All).unwrap();
    let groups = session.visible_groups();
    let restored: usize = groups.iter().map(|g| g.combinations.len()).sum();
    assert_eq!(restored, 246);
    assert!(session.required(3).is_some_and(|r| r.is_empty()));
}
