use std::path::Path;

use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use shinydex_core::Game;

use crate::error::CliError;
use crate::settings::{self, load_hunt_settings, load_settings_string, save_hunt_value};

/// Show the resolved hunt defaults and the raw file.
pub(crate) fn run_config_show(path: &Path) {
    log::info!(
        "{}",
        "Hunt Settings".if_supports_color(Stdout, |t| t.bold()),
    );
    log::info!("");

    if path.exists() {
        log::info!(
            "  Settings file: {} {}",
            path.display().if_supports_color(Stdout, |t| t.cyan()),
            "(exists)".if_supports_color(Stdout, |t| t.green()),
        );
    } else {
        log::info!(
            "  Settings file: {} {}",
            path.display().if_supports_color(Stdout, |t| t.cyan()),
            "(not found)".if_supports_color(Stdout, |t| t.dimmed()),
        );
    }
    log::info!("");

    let hunt = load_hunt_settings(path);
    match hunt.default_game {
        Some(game) => log::info!(
            "  {} {}",
            "default_game:".if_supports_color(Stdout, |t| t.cyan()),
            game,
        ),
        None => log::info!(
            "  {} {}",
            "default_game:".if_supports_color(Stdout, |t| t.cyan()),
            "not set".if_supports_color(Stdout, |t| t.yellow()),
        ),
    }
    log::info!(
        "  {} {}",
        "shiny_charm:".if_supports_color(Stdout, |t| t.cyan()),
        hunt.shiny_charm,
    );

    if let Some(raw) = load_settings_string(path) {
        log::debug!("Raw settings:\n{}", raw);
    }
}

pub(crate) fn run_config_path() {
    println!("{}", settings::settings_path().display());
}

pub(crate) fn run_config_set_game(path: &Path, game: Game) -> Result<(), CliError> {
    save_hunt_value(path, "default_game", toml::Value::String(game.title().to_string()))
        .map_err(|e| CliError::config(format!("failed to write {}: {}", path.display(), e)))?;
    log::info!("Default game set to {}", game.if_supports_color(Stdout, |t| t.cyan()));
    Ok(())
}

pub(crate) fn run_config_set_charm(path: &Path, enabled: bool) -> Result<(), CliError> {
    save_hunt_value(path, "shiny_charm", toml::Value::Boolean(enabled))
        .map_err(|e| CliError::config(format!("failed to write {}: {}", path.display(), e)))?;
    log::info!(
        "Shiny Charm {}",
        if enabled { "on by default" } else { "off by default" }
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn set_game_and_charm_round_trip() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("settings.toml");

        run_config_set_game(&path, Game::LegendsArceus).unwrap();
        run_config_set_charm(&path, true).unwrap();

        let hunt = load_hunt_settings(&path);
        assert_eq!(hunt.default_game, Some(Game::LegendsArceus));
        assert!(hunt.shiny_charm);

        run_config_set_charm(&path, false).unwrap();
        assert!(!load_hunt_settings(&path).shiny_charm);
    }

    #[test]
    fn set_charm_refuses_unparseable_file() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("settings.toml");
        std::fs::write(&path, "note = \"mine\"\n[hunt\n").unwrap();

        let err = run_config_set_charm(&path, true).unwrap_err();
        assert!(matches!(err, CliError::Config(_)));
        assert!(std::fs::read_to_string(&path).unwrap().contains("note = \"mine\""));
    }
}
