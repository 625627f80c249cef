//! Hunt defaults stored in `~/.config/shinydex/settings.toml`.
//!
//! ```toml
//! [hunt]
//! default_game = "Scarlet"
//! shiny_charm = true
//! ```
//!
//! Updates go through `toml::Value` so keys this tool does not own are
//! preserved.

use std::io;
use std::path::{Path, PathBuf};

use shinydex_core::Game;

/// Defaults read from the `[hunt]` table.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) struct HuntSettings {
    pub default_game: Option<Game>,
    pub shiny_charm: bool,
}

/// Canonical path to the settings file: `~/.config/shinydex/settings.toml`.
pub(crate) fn settings_path() -> PathBuf {
    let config = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
    config.join("shinydex").join("settings.toml")
}

/// Read the `[hunt]` table, falling back to defaults for anything missing
/// or unreadable.
pub(crate) fn load_hunt_settings(path: &Path) -> HuntSettings {
    let Ok(contents) = std::fs::read_to_string(path) else {
        return HuntSettings::default();
    };
    let doc: toml::Value = match contents.parse() {
        Ok(doc) => doc,
        Err(e) => {
            log::warn!("Failed to parse settings at {}: {}", path.display(), e);
            return HuntSettings::default();
        }
    };
    let Some(hunt) = doc.get("hunt") else {
        return HuntSettings::default();
    };

    let default_game = hunt
        .get("default_game")
        .and_then(|v| v.as_str())
        .and_then(|title| match title.parse::<Game>() {
            Ok(game) => Some(game),
            Err(e) => {
                log::warn!("Ignoring hunt.default_game in {}: {}", path.display(), e);
                None
            }
        });
    let shiny_charm = hunt
        .get("shiny_charm")
        .and_then(|v| v.as_bool())
        .unwrap_or(false);

    HuntSettings {
        default_game,
        shiny_charm,
    }
}

/// Set one key in the `[hunt]` table, keeping everything else in the file.
///
/// A file that exists but does not parse is an error; it is never replaced.
pub(crate) fn save_hunt_value(path: &Path, key: &str, value: toml::Value) -> io::Result<()> {
    let mut doc: toml::Value = match std::fs::read_to_string(path) {
        Ok(contents) => contents.parse().map_err(|e| {
            io::Error::new(
                io::ErrorKind::InvalidData,
                format!("{} is not valid TOML, leaving it untouched: {}", path.display(), e),
            )
        })?,
        Err(e) if e.kind() == io::ErrorKind::NotFound => toml::Value::Table(Default::default()),
        Err(e) => return Err(e),
    };

    let table = doc
        .as_table_mut()
        .ok_or_else(|| io::Error::other("settings.toml root is not a table"))?;
    let hunt = table
        .entry("hunt")
        .or_insert_with(|| toml::Value::Table(Default::default()));
    let hunt_table = hunt
        .as_table_mut()
        .ok_or_else(|| io::Error::other("[hunt] is not a table"))?;
    hunt_table.insert(key.to_string(), value);

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let serialized = toml::to_string_pretty(&doc).map_err(io::Error::other)?;
    let tmp = path.with_extension("toml.tmp");
    std::fs::write(&tmp, &serialized)?;
    std::fs::rename(&tmp, path)?;

    Ok(())
}

/// The full settings file re-serialized for display.
pub(crate) fn load_settings_string(path: &Path) -> Option<String> {
    let contents = std::fs::read_to_string(path).ok()?;
    let doc: toml::Value = contents.parse().ok()?;
    toml::to_string_pretty(&doc).ok()
}
