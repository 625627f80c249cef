use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;
use serde::Serialize;

use shinydex_core::{Game, GameProfile, LiveEvent, Modifier, ModifierState};
use shinydex_odds::display::cumulative_percent;
use shinydex_odds::tables::event_method;
use shinydex_odds::{OddsQuery, describe, dynamic_family, percent};

use crate::error::CliError;

/// Machine-readable result of one lookup.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct OddsReport {
    pub game: &'static str,
    pub method: String,
    pub odds: u32,
    pub percent: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub progress: Option<u32>,
    pub modifiers: ModifierState,
}

/// Resolve one lookup and build its report. Never fails; unknown methods
/// resolve to the fallback odds.
pub(crate) fn lookup(
    game: Game,
    method: &str,
    modifiers: ModifierState,
    progress: Option<u32>,
) -> OddsReport {
    let mut query = OddsQuery::new(game.title(), method).modifiers(modifiers);
    if let Some(p) = progress {
        query = query.progress(p);
    }
    let odds = query.resolve();
    OddsReport {
        game: game.title(),
        method: method.to_string(),
        odds,
        percent: percent(odds),
        progress,
        modifiers: query.modifiers,
    }
}

/// Modifiers that are switched on but do nothing for this game or method.
fn ineffective_modifiers(profile: &GameProfile, method: &str, state: &ModifierState) -> Vec<&'static str> {
    let mut unused = Vec::new();
    if state.shiny_charm && !profile.defines(Modifier::ShinyCharm) {
        unused.push(Modifier::ShinyCharm.display_name());
    }
    if state.lure && !(profile.defines(Modifier::Lure) && profile.lure_eligible(method)) {
        unused.push(Modifier::Lure.display_name());
    }
    if state.shiny_parent
        && !(profile.defines(Modifier::ShinyParent) && profile.is_breeding_method(method))
    {
        unused.push(Modifier::ShinyParent.display_name());
    }
    if state.sparkling_tier() > 0 && !profile.defines(Modifier::SparklingPower) {
        unused.push(Modifier::SparklingPower.display_name());
    }
    unused
}

/// Active GO events that do not boost this method, with the method each one does boost.
fn ineffective_events(game: Game, method: &str, state: &ModifierState) -> Vec<(LiveEvent, &'static str)> {
    LiveEvent::all()
        .iter()
        .copied()
        .filter(|&event| state.is_event_active(event))
        .map(|event| (event, event_method(event)))
        .filter(|&(_, target)| game != Game::PokemonGo || target != method)
        .collect()
}

/// Run the odds command.
pub(crate) fn run_odds(
    game: Game,
    method: &str,
    modifiers: ModifierState,
    progress: Option<u32>,
    encounters: Option<u32>,
    json: bool,
) -> Result<(), CliError> {
    // Advisories stay off stdout when it carries JSON.
    let advisory = if json { log::Level::Debug } else { log::Level::Warn };

    let profile = game.profile();
    if !profile.has_method(method) {
        log::log!(
            advisory,
            "'{}' is not a method in {}; using fallback odds (see `shinydex methods \"{}\"`)",
            method,
            game,
            game.title(),
        );
    }
    for name in ineffective_modifiers(&profile, method, &modifiers) {
        log::log!(advisory, "{} has no effect on {} in {}", name, method, game);
    }
    for (event, target) in ineffective_events(game, method, &modifiers) {
        log::log!(
            advisory,
            "--event {} only boosts {} in {}",
            event.short_name(),
            target,
            Game::PokemonGo,
        );
    }

    let family = dynamic_family(game, method);
    let label = family.and_then(|f| f.progress_label());
    if progress.is_some() && label.is_none() {
        log::log!(
            advisory,
            "{} does not use a progress counter; --progress ignored",
            method
        );
    }

    let report = lookup(game, method, modifiers, progress);

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    log::info!(
        "{} {} {}",
        game.title().if_supports_color(Stdout, |t| t.bold()),
        "·".if_supports_color(Stdout, |t| t.dimmed()),
        method.if_supports_color(Stdout, |t| t.cyan()),
    );
    log::info!(
        "  Odds: {}",
        describe(report.odds).if_supports_color(Stdout, |t| t.green()),
    );
    if let Some(label) = label {
        match progress {
            Some(p) => log::info!("  {}: {}", capitalize(label), p),
            None => log::info!(
                "  {}",
                format!("No {label} given; showing the starting odds (use --progress)")
                    .if_supports_color(Stdout, |t| t.dimmed()),
            ),
        }
    }
    if let Some(n) = encounters {
        log::info!(
            "  Chance within {} encounters: {:.1}%",
            n,
            cumulative_percent(report.odds, n),
        );
    }
    Ok(())
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_reports_resolved_odds() {
        let report = lookup(Game::OmegaRuby, "Horde Encounters", ModifierState::new(), None);
        assert_eq!(report.game, "Omega Ruby");
        assert_eq!(report.odds, 819);
        assert!((report.percent - 100.0 / 819.0).abs() < 1e-9);
    }

    #[test]
    fn lookup_json_shape() {
        let state = ModifierState::new().charm(true);
        let report = lookup(Game::X, "Chain Fishing", state, Some(0));
        let value = serde_json::to_value(&report).unwrap();
        assert_eq!(value["game"], "X");
        assert_eq!(value["odds"], 1365);
        assert_eq!(value["progress"], 0);
        assert_eq!(value["modifiers"]["shinyCharm"], true);

        let no_progress = lookup(Game::X, "Random Encounters", ModifierState::new(), None);
        let value = serde_json::to_value(&no_progress).unwrap();
        assert!(value.get("progress").is_none());
    }

    #[test]
    fn flags_modifiers_that_do_nothing() {
        let state = ModifierState::new().charm(true).lure(true).sparkling(2);
        let black = Game::Black.profile();
        assert_eq!(
            ineffective_modifiers(&black, "Random Encounters", &state),
            vec!["Shiny Charm", "Lure", "Sparkling Power"]
        );

        let lgp = Game::LetsGoPikachu.profile();
        assert_eq!(
            ineffective_modifiers(&lgp, "Soft Resets", &ModifierState::new().lure(true)),
            vec!["Lure"]
        );
        assert!(ineffective_modifiers(&lgp, "Random Encounters", &ModifierState::new().lure(true)).is_empty());

        let gold = Game::Gold.profile();
        let parent = ModifierState::new().shiny_parent(true);
        assert!(ineffective_modifiers(&gold, "Breeding", &parent).is_empty());
        assert_eq!(ineffective_modifiers(&gold, "Fishing", &parent), vec!["Shiny Parent"]);
    }

    #[test]
    fn flags_events_for_other_methods() {
        let state = ModifierState::new()
            .event(LiveEvent::CommunityDay)
            .event(LiveEvent::HatchDay);
        assert_eq!(
            ineffective_events(Game::PokemonGo, "Hatching Eggs", &state),
            vec![(LiveEvent::CommunityDay, "Wild Encounters")]
        );
        assert_eq!(ineffective_events(Game::Scarlet, "Random Encounters", &state).len(), 2);
        assert!(ineffective_events(Game::PokemonGo, "Raid Battles", &ModifierState::new()).is_empty());
    }

    #[test]
    fn capitalize_label() {
        assert_eq!(capitalize("radar chain"), "Radar chain");
        assert_eq!(capitalize(""), "");
    }
}
