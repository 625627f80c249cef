use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use shinydex_core::{Game, Modifier};
use shinydex_odds::{dynamic_family, format_odds};

use crate::error::CliError;

/// Run the methods command.
pub(crate) fn run_methods(game: Game, json: bool) -> Result<(), CliError> {
    let profile = game.profile();

    if json {
        println!("{}", serde_json::to_string_pretty(profile.methods)?);
        return Ok(());
    }

    log::info!(
        "{} {}",
        game.title().if_supports_color(Stdout, |t| t.bold()),
        format!("({} methods)", profile.methods.len()).if_supports_color(Stdout, |t| t.dimmed()),
    );

    let width = profile
        .methods
        .iter()
        .map(|m| m.name.chars().count())
        .max()
        .unwrap_or(0);

    for method in profile.methods {
        let counter = dynamic_family(game, method.name)
            .and_then(|f| f.progress_label())
            .map(|label| format!(" [{label}]"))
            .unwrap_or_default();
        let pad = width - method.name.chars().count();
        log::info!(
            "  {}{}  {:>7}{}",
            method.name.if_supports_color(Stdout, |t| t.cyan()),
            " ".repeat(pad),
            format_odds(method.base_odds),
            counter.if_supports_color(Stdout, |t| t.dimmed()),
        );
        log::debug!("    {}", method.description);
    }

    if !profile.modifiers.is_empty() {
        log::info!("");
        let names: Vec<String> = profile
            .modifiers
            .iter()
            .map(|(modifier, magnitude)| match modifier {
                Modifier::SparklingPower => modifier.display_name().to_string(),
                _ => format!("{} (÷{})", modifier.display_name(), magnitude),
            })
            .collect();
        log::info!("  Modifiers: {}", names.join(", "));
    }
    Ok(())
}
