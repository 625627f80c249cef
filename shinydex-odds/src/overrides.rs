//! Published odds that do not follow `base / magnitude`.
//!
//! Rows are keyed by (game, method, modifier combination). A row only fires
//! when the normalized combination matches exactly.

use serde::Serialize;
use shinydex_core::methods::*;
use shinydex_core::{Game, GameProfile, Modifier, ModifierState};

/// The modifier inputs an override row can key on.
///
/// Built from a [`ModifierState`] with every modifier the game does not
/// define switched off, so stray flags from the client never select a row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub struct ModifierCombo {
    pub charm: bool,
    pub lure: bool,
    pub sparkling: u8,
}

impl ModifierCombo {
    pub fn normalize(profile: &GameProfile, state: &ModifierState) -> Self {
        Self {
            charm: state.shiny_charm && profile.defines(Modifier::ShinyCharm),
            lure: state.lure && profile.defines(Modifier::Lure),
            sparkling: if profile.defines(Modifier::SparklingPower) {
                state.sparkling_tier()
            } else {
                0
            },
        }
    }

    fn without_sparkling(self) -> Self {
        Self {
            sparkling: 0,
            ..self
        }
    }
}

/// One published override.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct OverrideRow {
    pub games: &'static [Game],
    pub method: &'static str,
    pub combo: ModifierCombo,
    pub odds: u32,
}

const fn combo(charm: bool, lure: bool, sparkling: u8) -> ModifierCombo {
    ModifierCombo {
        charm,
        lure,
        sparkling,
    }
}

const fn row(games: &'static [Game], method: &'static str, combo: ModifierCombo, odds: u32) -> OverrideRow {
    OverrideRow {
        games,
        method,
        combo,
        odds,
    }
}

const CHARM: ModifierCombo = combo(true, false, 0);

const UNOVA_2: &[Game] = &[Game::Black2, Game::White2];
const KALOS: &[Game] = &[Game::X, Game::Y];
const LETS_GO: &[Game] = &[Game::LetsGoPikachu, Game::LetsGoEevee];
const GALAR: &[Game] = &[Game::Sword, Game::Shield];
const PALDEA: &[Game] = &[Game::Scarlet, Game::Violet];

/// Games where Masuda Method with the charm is 1/512.
const MASUDA_512: &[Game] = &[
    Game::X,
    Game::Y,
    Game::OmegaRuby,
    Game::AlphaSapphire,
    Game::Sun,
    Game::Moon,
    Game::UltraSun,
    Game::UltraMoon,
    Game::Sword,
    Game::Shield,
    Game::BrilliantDiamond,
    Game::ShiningPearl,
    Game::Scarlet,
    Game::Violet,
];

const OVERRIDES: &[OverrideRow] = &[
    // Masuda Method + charm
    row(UNOVA_2, MASUDA_METHOD, CHARM, 1024),
    row(MASUDA_512, MASUDA_METHOD, CHARM, 512),
    // Friend Safari has five rolls; the charm adds two
    row(KALOS, FRIEND_SAFARI, CHARM, 585),
    // Let's Go charm and lure together
    row(LETS_GO, RANDOM_ENCOUNTERS, combo(true, true, 0), 1024),
    // Raids ignore the charm
    row(GALAR, MAX_RAID_BATTLES, CHARM, 4096),
    row(GALAR, DYNAMAX_ADVENTURES, CHARM, 100),
    row(PALDEA, TERA_RAID_BATTLES, CHARM, 4096),
    // Sparkling Power, with and without charm
    row(PALDEA, RANDOM_ENCOUNTERS, combo(false, false, 1), 2048),
    row(PALDEA, RANDOM_ENCOUNTERS, combo(false, false, 2), 1365),
    row(PALDEA, RANDOM_ENCOUNTERS, combo(false, false, 3), 1024),
    row(PALDEA, RANDOM_ENCOUNTERS, combo(true, false, 1), 1024),
    row(PALDEA, RANDOM_ENCOUNTERS, combo(true, false, 2), 819),
    row(PALDEA, RANDOM_ENCOUNTERS, combo(true, false, 3), 683),
];

/// Every override row, for auditing and tests.
pub fn override_rows() -> &'static [OverrideRow] {
    OVERRIDES
}

fn find_row(game: Game, method: &str, combo: ModifierCombo) -> Option<&'static OverrideRow> {
    OVERRIDES
        .iter()
        .find(|r| r.method == method && r.combo == combo && r.games.contains(&game))
}

/// Published odds for this exact combination, if any.
///
/// Sparkling Power only matters where a row names it; a method without
/// sparkling rows is looked up again with the tier dropped.
pub fn lookup_override(game: Game, method: &str, combo: ModifierCombo) -> Option<u32> {
    find_row(game, method, combo)
        .or_else(|| {
            if combo.sparkling > 0 {
                find_row(game, method, combo.without_sparkling())
            } else {
                None
            }
        })
        .map(|r| r.odds)
}
