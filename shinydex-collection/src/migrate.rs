//! Method migration for stored collections.
//!
//! When the rule catalog renames or drops a method, saved entries still
//! carry the old label. The migrator rewrites labels it can map to a
//! current method for the entry's game and clears the rest. Legacy boolean
//! records are upgraded to the structured shape on the way through.
//!
//! The input is only borrowed; the caller keeps the original for comparison.

use std::fmt;

use shinydex_core::Game;

use crate::aliases;
use crate::types::{CaughtEntry, CaughtRecord, Collection, MigratedCollection, StoredRecord};

/// What happens to one entry's method label.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MethodFix {
    Keep,
    Rewrite(&'static str),
    Clear,
}

/// Counters from one migration pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MigrationReport {
    pub records_processed: usize,
    pub legacy_records_upgraded: usize,
    pub entries_processed: usize,
    pub methods_migrated: usize,
    pub methods_removed: usize,
}

impl MigrationReport {
    /// Whether the migrated collection differs from the input.
    pub fn changed(&self) -> bool {
        self.legacy_records_upgraded > 0 || self.methods_migrated > 0 || self.methods_removed > 0
    }
}

impl fmt::Display for MigrationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} records ({} legacy upgraded), {} entries, {} methods migrated, {} removed",
            self.records_processed,
            self.legacy_records_upgraded,
            self.entries_processed,
            self.methods_migrated,
            self.methods_removed,
        )
    }
}

/// Decide what to do with `method` for an entry logged in `game`.
pub fn fix_method(game: &str, method: &str) -> MethodFix {
    if method.is_empty() {
        return MethodFix::Keep;
    }
    if game.trim().is_empty() {
        return MethodFix::Clear;
    }
    let Some(game) = Game::from_title(game) else {
        return MethodFix::Clear;
    };
    let profile = game.profile();
    if profile.has_method(method) {
        return MethodFix::Keep;
    }
    match aliases::resolve_for_game(&profile, method) {
        Some(canonical) => MethodFix::Rewrite(canonical),
        None => MethodFix::Clear,
    }
}

/// Migrate every record, returning a new collection with the same keys.
pub fn migrate_methods(collection: &Collection) -> MigratedCollection {
    let (migrated, report) = migrate_methods_with_report(collection);
    if report.changed() {
        log::info!("Method migration: {report}");
    } else {
        log::debug!("Method migration: nothing to change ({report})");
    }
    migrated
}

/// Like [`migrate_methods`], also returning the counters.
pub fn migrate_methods_with_report(collection: &Collection) -> (MigratedCollection, MigrationReport) {
    let mut report = MigrationReport::default();
    let migrated = collection
        .iter()
        .map(|(key, stored)| {
            report.records_processed += 1;
            let record = match stored {
                StoredRecord::Legacy(caught) => {
                    report.legacy_records_upgraded += 1;
                    CaughtRecord::from_legacy(*caught)
                }
                StoredRecord::Record(record) => migrate_record(key, record, &mut report),
            };
            (key.clone(), record)
        })
        .collect();
    (migrated, report)
}

fn migrate_record(key: &str, record: &CaughtRecord, report: &mut MigrationReport) -> CaughtRecord {
    let entries = record
        .entries
        .iter()
        .map(|entry| {
            report.entries_processed += 1;
            migrate_entry(key, entry, report)
        })
        .collect();
    CaughtRecord {
        caught: record.caught,
        entries,
        extra: record.extra.clone(),
    }
}

fn migrate_entry(key: &str, entry: &CaughtEntry, report: &mut MigrationReport) -> CaughtEntry {
    let mut entry = entry.clone();
    match fix_method(&entry.game, &entry.method) {
        MethodFix::Keep => {}
        MethodFix::Rewrite(canonical) => {
            log::debug!(
                "{key}: '{}' -> '{canonical}' ({})",
                entry.method,
                entry.game
            );
            entry.method = canonical.to_string();
            report.methods_migrated += 1;
        }
        MethodFix::Clear => {
            log::debug!("{key}: cleared '{}' (game '{}')", entry.method, entry.game);
            entry.method.clear();
            report.methods_removed += 1;
        }
    }
    entry
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fix_method_cases() {
        assert_eq!(fix_method("", "Masuda Method"), MethodFix::Clear);
        assert_eq!(fix_method("  ", "Masuda Method"), MethodFix::Clear);
        assert_eq!(fix_method("Sun", ""), MethodFix::Keep);
        assert_eq!(fix_method("", ""), MethodFix::Keep);
        assert_eq!(fix_method("Colosseum", "Random Encounters"), MethodFix::Clear);
        assert_eq!(fix_method("Sun", "SOS Chaining"), MethodFix::Keep);
        assert_eq!(fix_method("Sun", "SOS Chain"), MethodFix::Rewrite("SOS Chaining"));
        assert_eq!(fix_method("Sun", "Poké Radar"), MethodFix::Clear);
        assert_eq!(fix_method("Sun", "Radar"), MethodFix::Clear);
    }

    #[test]
    fn near_miss_labels_are_cleared() {
        assert_eq!(fix_method("Sun", "sos chaining"), MethodFix::Clear);
        assert_eq!(fix_method("Omega Ruby", "hordes"), MethodFix::Clear);
        assert_eq!(fix_method("Omega Ruby", " Hordes "), MethodFix::Clear);
        assert_eq!(fix_method("Omega Ruby", "Hordes"), MethodFix::Rewrite("Horde Encounters"));
    }

    #[test]
    fn report_changed_flag() {
        assert!(!MigrationReport::default().changed());
        let report = MigrationReport {
            methods_removed: 1,
            ..Default::default()
        };
        assert!(report.changed());
    }

    #[test]
    fn report_display() {
        let report = MigrationReport {
            records_processed: 3,
            legacy_records_upgraded: 1,
            entries_processed: 4,
            methods_migrated: 2,
            methods_removed: 1,
        };
        assert_eq!(
            report.to_string(),
            "3 records (1 legacy upgraded), 4 entries, 2 methods migrated, 1 removed"
        );
    }
}
