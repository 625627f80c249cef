use std::path::Path;

use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use shinydex_collection::{
    Collection, MethodFix, StoredRecord, fix_method, load_collection, migrate_methods_with_report,
    save_collection,
};

use crate::error::CliError;

/// One planned change to an entry's method label.
#[derive(Debug, PartialEq, Eq)]
pub(crate) struct PlannedChange {
    pub key: String,
    pub game: String,
    pub from: String,
    pub to: Option<&'static str>,
}

/// Every rewrite or removal the migrator would make, in key order.
pub(crate) fn plan_changes(collection: &Collection) -> Vec<PlannedChange> {
    let mut changes = Vec::new();
    for (key, stored) in collection {
        let StoredRecord::Record(record) = stored else {
            continue;
        };
        for entry in &record.entries {
            let to = match fix_method(&entry.game, &entry.method) {
                MethodFix::Keep => continue,
                MethodFix::Rewrite(canonical) => Some(canonical),
                MethodFix::Clear => None,
            };
            changes.push(PlannedChange {
                key: key.clone(),
                game: entry.game.clone(),
                from: entry.method.clone(),
                to,
            });
        }
    }
    changes
}

/// Run the migrate command.
pub(crate) fn run_migrate(file: &Path, dry_run: bool, output: Option<&Path>) -> Result<(), CliError> {
    let collection = load_collection(file)?;
    let (migrated, report) = migrate_methods_with_report(&collection);

    let changes = plan_changes(&collection);
    for change in &changes {
        let game = if change.game.is_empty() {
            "no game"
        } else {
            change.game.as_str()
        };
        match change.to {
            Some(to) => log::info!(
                "  {} {} {} {} ({})",
                change.key.if_supports_color(Stdout, |t| t.bold()),
                change.from.if_supports_color(Stdout, |t| t.yellow()),
                "→".if_supports_color(Stdout, |t| t.dimmed()),
                to.if_supports_color(Stdout, |t| t.green()),
                game,
            ),
            None => log::info!(
                "  {} {} {} ({})",
                change.key.if_supports_color(Stdout, |t| t.bold()),
                change.from.if_supports_color(Stdout, |t| t.red()),
                "cleared".if_supports_color(Stdout, |t| t.dimmed()),
                game,
            ),
        }
    }
    if !changes.is_empty() {
        log::info!("");
    }
    log::info!("{}", report);

    if dry_run {
        log::info!(
            "{}",
            "Dry run: nothing written".if_supports_color(Stdout, |t| t.dimmed()),
        );
        return Ok(());
    }

    let target = output.unwrap_or(file);
    if !report.changed() && output.is_none() {
        log::info!("{} is already up to date", file.display());
        return Ok(());
    }
    save_collection(target, &migrated)?;
    log::info!(
        "Wrote {}",
        target.display().if_supports_color(Stdout, |t| t.cyan()),
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use shinydex_collection::{CaughtEntry, CaughtRecord};
    use tempfile::TempDir;

    fn sample() -> Collection {
        let mut collection = Collection::new();
        collection.insert("0001".into(), StoredRecord::Legacy(true));
        collection.insert(
            "0002".into(),
            StoredRecord::Record(CaughtRecord {
                caught: true,
                entries: vec![
                    CaughtEntry::new("Omega Ruby", "Hordes"),
                    CaughtEntry::new("Sun", "SOS Chaining"),
                    CaughtEntry::new("", "Masuda Method"),
                ],
                ..Default::default()
            }),
        );
        collection
    }

    #[test]
    fn plans_rewrites_and_removals() {
        let changes = plan_changes(&sample());
        assert_eq!(
            changes,
            vec![
                PlannedChange {
                    key: "0002".into(),
                    game: "Omega Ruby".into(),
                    from: "Hordes".into(),
                    to: Some("Horde Encounters"),
                },
                PlannedChange {
                    key: "0002".into(),
                    game: String::new(),
                    from: "Masuda Method".into(),
                    to: None,
                },
            ]
        );
    }

    #[test]
    fn dry_run_leaves_file_alone() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("collection.json");
        let original = serde_json::to_string(&sample()).unwrap();
        std::fs::write(&path, &original).unwrap();

        run_migrate(&path, true, None).unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), original);
    }

    #[test]
    fn writes_in_place_or_to_output() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("collection.json");
        std::fs::write(&path, serde_json::to_string(&sample()).unwrap()).unwrap();

        let out = tmp.path().join("out.json");
        run_migrate(&path, false, Some(&out)).unwrap();
        let written = load_collection(&out).unwrap();
        let StoredRecord::Record(record) = &written["0002"] else {
            panic!("expected structured record");
        };
        assert_eq!(record.entries[0].method, "Horde Encounters");
        assert_eq!(written["0001"], StoredRecord::Record(CaughtRecord::from_legacy(true)));

        run_migrate(&path, false, None).unwrap();
        assert_eq!(load_collection(&path).unwrap(), written);
    }

    #[test]
    fn missing_file_is_an_error() {
        let tmp = TempDir::new().unwrap();
        let err = run_migrate(&tmp.path().join("missing.json"), false, None).unwrap_err();
        assert!(matches!(err, CliError::Collection(_)));
    }
}
