//! Odds resolution: dynamic tables, then published overrides, then the
//! generic divide-by-magnitude path.

use serde::Serialize;
use shinydex_core::methods::*;
use shinydex_core::{
    FALLBACK_ODDS, Game, GameProfile, MethodDefinition, Modifier, ModifierState,
};

use crate::overrides::{ModifierCombo, lookup_override};
use crate::tables;

/// Method families whose odds depend on a progress counter or per-game rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DynamicFamily {
    RadarGen4,
    RadarGen6,
    RadarRemake,
    ChainFishing,
    KnockoutCount,
    SearchLevel,
    SosChain,
    CatchCombo,
    MassOutbreak,
    /// Legends: Arceus roll counting, with the method's own bonus rolls.
    RollCount { bonus_rolls: u32 },
    TwoTier,
    LiveService,
}

impl DynamicFamily {
    /// What the progress counter means for this family, if it is used at all.
    pub fn progress_label(&self) -> Option<&'static str> {
        match self {
            Self::RadarGen4 | Self::RadarGen6 | Self::RadarRemake => Some("radar chain"),
            Self::ChainFishing => Some("fishing streak"),
            Self::KnockoutCount => Some("number battled"),
            Self::SearchLevel => Some("search level"),
            Self::SosChain => Some("SOS chain"),
            Self::CatchCombo => Some("catch combo"),
            Self::MassOutbreak => Some("outbreak Pokémon cleared"),
            Self::RollCount { .. } | Self::TwoTier | Self::LiveService => None,
        }
    }

    fn resolve(&self, method: &MethodDefinition, state: &ModifierState, progress: u32) -> u32 {
        let charm = state.shiny_charm;
        match *self {
            Self::RadarGen4 => tables::radar_gen4(progress),
            Self::RadarGen6 => tables::radar_gen6(progress),
            Self::RadarRemake => tables::radar_remake(progress),
            Self::ChainFishing => tables::chain_fishing(progress, charm),
            Self::KnockoutCount => tables::knockout_count(progress, charm),
            Self::SearchLevel => tables::search_level(progress, charm),
            Self::SosChain => tables::sos_chain(progress, charm),
            Self::CatchCombo => tables::catch_combo(progress, charm, state.lure),
            Self::MassOutbreak => tables::mass_outbreak(
                state.sparkling_tier(),
                progress,
                charm,
                state.event_boosted,
            ),
            Self::RollCount { bonus_rolls } => tables::rolls_to_odds(tables::roll_count(
                bonus_rolls,
                state.research_level_10,
                state.perfect_research,
                charm,
            )),
            Self::TwoTier => tables::two_tier(charm),
            Self::LiveService => tables::live_event(method.name, state).unwrap_or(method.base_odds),
        }
    }
}

/// Dynamic family handling `method` in `game`, if any.
pub fn dynamic_family(game: Game, method: &str) -> Option<DynamicFamily> {
    use DynamicFamily::*;

    let family = match (game, method) {
        (Game::Diamond | Game::Pearl | Game::Platinum, POKE_RADAR) => RadarGen4,
        (Game::X | Game::Y, POKE_RADAR) => RadarGen6,
        (Game::BrilliantDiamond | Game::ShiningPearl, POKE_RADAR) => RadarRemake,
        (Game::X | Game::Y | Game::OmegaRuby | Game::AlphaSapphire, CHAIN_FISHING) => {
            ChainFishing
        }
        (Game::Sword | Game::Shield, KNOCKOUT_COUNT) => KnockoutCount,
        (Game::OmegaRuby | Game::AlphaSapphire, DEXNAV) => SearchLevel,
        (Game::Sun | Game::Moon | Game::UltraSun | Game::UltraMoon, SOS_CHAINING) => SosChain,
        (Game::LetsGoPikachu | Game::LetsGoEevee, CATCH_COMBO) => CatchCombo,
        (Game::Scarlet | Game::Violet, MASS_OUTBREAKS) => MassOutbreak,
        (Game::LegendsArceus, RANDOM_ENCOUNTERS) => RollCount { bonus_rolls: 0 },
        (Game::LegendsArceus, MASS_OUTBREAKS) => RollCount {
            bonus_rolls: tables::OUTBREAK_BONUS_ROLLS,
        },
        (Game::LegendsArceus, MASSIVE_MASS_OUTBREAKS) => RollCount {
            bonus_rolls: tables::MASSIVE_OUTBREAK_BONUS_ROLLS,
        },
        (Game::LegendsZA, RANDOM_ENCOUNTERS | WILD_ZONES) => TwoTier,
        (Game::PokemonGo, _) => LiveService,
        _ => return None,
    };
    Some(family)
}

/// Resolve the 1-in-N odds for a free-text title and method.
///
/// Never fails: an unknown title or method yields [`FALLBACK_ODDS`].
/// `progress` is the chain, streak, level, or count for dynamic families
/// and is ignored elsewhere; `None` means 0.
pub fn resolve_odds(
    title: &str,
    method: &str,
    modifiers: &ModifierState,
    progress: Option<u32>,
) -> u32 {
    match Game::from_title(title) {
        Some(game) => resolve_game_odds(game, method, modifiers, progress),
        None => {
            log::debug!("Unknown title '{title}', using fallback odds");
            FALLBACK_ODDS
        }
    }
}

/// Same as [`resolve_odds`] for an already-parsed game.
pub fn resolve_game_odds(
    game: Game,
    method: &str,
    modifiers: &ModifierState,
    progress: Option<u32>,
) -> u32 {
    let profile = game.profile();
    let Some(definition) = profile.method(method) else {
        log::debug!("Unknown method '{method}' for {game}, using fallback odds");
        return FALLBACK_ODDS;
    };

    if let Some(family) = dynamic_family(game, method) {
        return family
            .resolve(definition, modifiers, progress.unwrap_or(0))
            .max(1);
    }

    let combo = ModifierCombo::normalize(&profile, modifiers);
    if let Some(odds) = lookup_override(game, method, combo) {
        return odds;
    }

    generic_odds(&profile, definition, modifiers)
}

/// Base odds divided by each active modifier's magnitude.
fn generic_odds(profile: &GameProfile, method: &MethodDefinition, state: &ModifierState) -> u32 {
    let mut odds = method.base_odds;

    if state.shiny_charm {
        if let Some(magnitude) = profile.modifier(Modifier::ShinyCharm).filter(|m| *m > 0) {
            odds = div_round(odds, magnitude);
        }
    }
    if state.shiny_parent && profile.is_breeding_method(method.name) {
        if let Some(magnitude) = profile.modifier(Modifier::ShinyParent).filter(|m| *m > 0) {
            odds /= magnitude;
        }
    }
    if state.lure && profile.lure_eligible(method.name) {
        if let Some(magnitude) = profile.modifier(Modifier::Lure).filter(|m| *m > 0) {
            odds /= magnitude;
        }
    }

    odds.max(1)
}

fn div_round(value: u32, divisor: u32) -> u32 {
    (value + divisor / 2) / divisor
}

/// A single odds request, for callers that build one up step by step.
#[derive(Debug, Clone, Default)]
pub struct OddsQuery {
    pub title: String,
    pub method: String,
    pub modifiers: ModifierState,
    pub progress: Option<u32>,
}

impl OddsQuery {
    pub fn new(title: impl Into<String>, method: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            method: method.into(),
            ..Self::default()
        }
    }

    pub fn modifiers(mut self, modifiers: ModifierState) -> Self {
        self.modifiers = modifiers;
        self
    }

    pub fn progress(mut self, progress: u32) -> Self {
        self.progress = Some(progress);
        self
    }

    pub fn resolve(&self) -> u32 {
        resolve_odds(&self.title, &self.method, &self.modifiers, self.progress)
    }
}
