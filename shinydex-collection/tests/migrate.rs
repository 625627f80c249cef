use shinydex_collection::{
    CaughtEntry, CaughtRecord, Collection, StoredRecord, migrate_methods,
    migrate_methods_with_report, parse_collection, to_stored,
};

fn record(entries: Vec<CaughtEntry>) -> StoredRecord {
    StoredRecord::Record(CaughtRecord {
        caught: true,
        entries,
        ..Default::default()
    })
}

fn sample() -> Collection {
    let mut collection = Collection::new();
    collection.insert("0001".into(), StoredRecord::Legacy(true));
    collection.insert("0002".into(), StoredRecord::Legacy(false));
    collection.insert(
        "0003".into(),
        record(vec![
            CaughtEntry::new("Omega Ruby", "Hordes"),
            CaughtEntry::new("", "Masuda Method"),
            CaughtEntry::new("Sun", ""),
            CaughtEntry::new("Stadium", "Random Encounters"),
            CaughtEntry::new("Diamond", "Poké Radar"),
            CaughtEntry::new("Sword", "Catch Combo"),
        ]),
    );
    collection
}

#[test]
fn horde_alias_is_rewritten() {
    let collection =
        parse_collection(r#"{ "k": { "entries": [{ "method": "Hordes", "game": "Omega Ruby" }] } }"#)
            .unwrap();
    let migrated = migrate_methods(&collection);
    assert_eq!(migrated["k"].entries[0].method, "Horde Encounters");
    assert_eq!(migrated["k"].entries[0].game, "Omega Ruby");
    assert!(!migrated["k"].caught);
}

#[test]
fn legacy_booleans_become_records() {
    let migrated = migrate_methods(&sample());
    assert_eq!(migrated["0001"], CaughtRecord::from_legacy(true));
    assert_eq!(migrated["0002"], CaughtRecord::from_legacy(false));
    assert!(migrated["0001"].caught);
    assert!(migrated["0001"].entries.is_empty());
    assert!(!migrated["0002"].caught);
}

#[test]
fn entry_rules() {
    let migrated = migrate_methods(&sample());
    let methods: Vec<&str> = migrated["0003"]
        .entries
        .iter()
        .map(|e| e.method.as_str())
        .collect();
    assert_eq!(
        methods,
        vec!["Horde Encounters", "", "", "", "Poké Radar", ""]
    );
}

#[test]
fn report_counts() {
    let (_, report) = migrate_methods_with_report(&sample());
    assert_eq!(report.records_processed, 3);
    assert_eq!(report.legacy_records_upgraded, 2);
    assert_eq!(report.entries_processed, 6);
    assert_eq!(report.methods_migrated, 1);
    assert_eq!(report.methods_removed, 3);
    assert!(report.changed());
}

#[test]
fn keys_are_preserved_and_input_untouched() {
    let input = sample();
    let before = input.clone();
    let migrated = migrate_methods(&input);
    assert_eq!(input, before);
    assert!(input.keys().eq(migrated.keys()));
}

#[test]
fn migration_is_idempotent() {
    let once = migrate_methods(&sample());
    let (twice, report) = migrate_methods_with_report(&to_stored(&once));
    assert_eq!(once, twice);
    assert!(!report.changed());
}

#[test]
fn orphaned_methods_are_always_cleared() {
    let mut collection = Collection::new();
    let entries = ["Random Encounters", "Hordes", "anything", "Masuda Method"]
        .iter()
        .map(|m| CaughtEntry::new("", *m))
        .collect();
    collection.insert("x".into(), record(entries));
    let migrated = migrate_methods(&collection);
    assert!(migrated["x"].entries.iter().all(|e| e.method.is_empty()));
}

#[test]
fn labels_must_match_exactly() {
    let mut collection = Collection::new();
    collection.insert(
        "x".into(),
        record(vec![
            CaughtEntry::new("Sun", "sos chaining"),
            CaughtEntry::new("Omega Ruby", "hordes"),
            CaughtEntry::new("Sun", "SOS Chain"),
        ]),
    );
    let migrated = migrate_methods(&collection);
    let methods: Vec<&str> = migrated["x"]
        .entries
        .iter()
        .map(|e| e.method.as_str())
        .collect();
    assert_eq!(methods, vec!["", "", "SOS Chaining"]);
}

#[test]
fn other_entry_fields_are_kept() {
    let collection = parse_collection(
        r#"{ "25": { "caught": true, "entries": [
            { "date": "2024-02-11", "ball": "Dream", "mark": "", "game": "Sword",
              "method": "KO Method", "checks": "312", "notes": "finally", "entryId": 7 }
        ] } }"#,
    )
    .unwrap();
    let migrated = migrate_methods(&collection);
    let entry = &migrated["25"].entries[0];
    assert_eq!(entry.method, "Knockout Count");
    assert_eq!(entry.ball, "Dream");
    assert_eq!(entry.notes, "finally");
    assert_eq!(entry.checks, serde_json::json!("312"));
    assert_eq!(entry.entry_id, serde_json::json!(7));
}
