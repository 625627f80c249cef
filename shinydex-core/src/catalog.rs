//! Static rule catalog: per-game encounter methods and named modifiers.
//!
//! Everything here is read-only `'static` data. Method names are the exact
//! labels saved entries carry, so the tables double as the set of valid
//! methods the migrator checks against.

use serde::Serialize;

use crate::game::Game;

/// Canonical method labels shared across games.
pub mod methods {
    pub const RANDOM_ENCOUNTERS: &str = "Random Encounters";
    pub const SOFT_RESETS: &str = "Soft Resets";
    pub const BREEDING: &str = "Breeding";
    pub const FISHING: &str = "Fishing";
    pub const ODD_EGG: &str = "Odd Egg";
    pub const MASUDA_METHOD: &str = "Masuda Method";
    pub const POKE_RADAR: &str = "Poké Radar";
    pub const POKEWALKER: &str = "Pokéwalker";
    pub const SHAKING_GRASS: &str = "Shaking Grass";
    pub const CHAIN_FISHING: &str = "Chain Fishing";
    pub const FRIEND_SAFARI: &str = "Friend Safari";
    pub const HORDE_ENCOUNTERS: &str = "Horde Encounters";
    pub const DEXNAV: &str = "DexNav";
    pub const SOS_CHAINING: &str = "SOS Chaining";
    pub const CATCH_COMBO: &str = "Catch Combo";
    pub const KNOCKOUT_COUNT: &str = "Knockout Count";
    pub const MAX_RAID_BATTLES: &str = "Max Raid Battles";
    pub const DYNAMAX_ADVENTURES: &str = "Dynamax Adventures";
    pub const GRAND_UNDERGROUND: &str = "Grand Underground";
    pub const MASS_OUTBREAKS: &str = "Mass Outbreaks";
    pub const MASSIVE_MASS_OUTBREAKS: &str = "Massive Mass Outbreaks";
    pub const TERA_RAID_BATTLES: &str = "Tera Raid Battles";
    pub const WILD_ZONES: &str = "Wild Zones";
    pub const WILD_ENCOUNTERS: &str = "Wild Encounters";
    pub const RAID_BATTLES: &str = "Raid Battles";
    pub const FIELD_RESEARCH: &str = "Field Research";
    pub const DAILY_ADVENTURE_INCENSE: &str = "Daily Adventure Incense";
    pub const HATCHING_EGGS: &str = "Hatching Eggs";
    pub const GO_BATTLE_LEAGUE: &str = "GO Battle League";
}

use methods::*;

/// One way of encountering a Pokémon in a given game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MethodDefinition {
    pub name: &'static str,
    /// Denominator of the 1-in-N shiny chance with no modifiers active.
    pub base_odds: u32,
    pub description: &'static str,
}

/// Named odds modifiers a game may define.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Modifier {
    ShinyCharm,
    /// Breeding with a shiny parent (generation 2).
    ShinyParent,
    Lure,
    SparklingPower,
}

impl Modifier {
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::ShinyCharm => "Shiny Charm",
            Self::ShinyParent => "Shiny Parent",
            Self::Lure => "Lure",
            Self::SparklingPower => "Sparkling Power",
        }
    }
}

/// A game's full rule set: ordered methods plus modifier magnitudes.
///
/// A magnitude is a plain divisor on the generic path. Where a method resolves
/// through an override row or a dynamic table, the magnitude is nominal.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct GameProfile {
    pub game: Game,
    pub methods: &'static [MethodDefinition],
    pub modifiers: &'static [(Modifier, u32)],
    /// Methods a lure affects, when the game defines one.
    pub lure_methods: &'static [&'static str],
}

impl GameProfile {
    pub fn title(&self) -> &'static str {
        self.game.title()
    }

    /// Find a method by exact name.
    pub fn method(&self, name: &str) -> Option<&'static MethodDefinition> {
        self.methods.iter().find(|m| m.name == name)
    }

    pub fn has_method(&self, name: &str) -> bool {
        self.method(name).is_some()
    }

    /// Magnitude of a modifier, or `None` if this game does not define it.
    pub fn modifier(&self, modifier: Modifier) -> Option<u32> {
        self.modifiers
            .iter()
            .find(|(m, _)| *m == modifier)
            .map(|(_, magnitude)| *magnitude)
    }

    pub fn defines(&self, modifier: Modifier) -> bool {
        self.modifier(modifier).is_some()
    }

    pub fn lure_eligible(&self, method: &str) -> bool {
        self.lure_methods.contains(&method)
    }

    pub fn is_breeding_method(&self, method: &str) -> bool {
        method == BREEDING
    }
}

/// Ordered method list for a free-text title. Unknown titles yield an empty list.
pub fn list_methods(title: &str) -> &'static [MethodDefinition] {
    Game::from_title(title)
        .map(|game| profile(game).methods)
        .unwrap_or(&[])
}

/// Whether `method` is a current method name for `title`.
pub fn is_valid_method(title: &str, method: &str) -> bool {
    Game::from_title(title).is_some_and(|game| profile(game).has_method(method))
}

const fn method(name: &'static str, base_odds: u32, description: &'static str) -> MethodDefinition {
    MethodDefinition {
        name,
        base_odds,
        description,
    }
}

// ── Modifier sets ───────────────────────────────────────────────────────────

const NO_MODIFIERS: &[(Modifier, u32)] = &[];
const GEN2_MODIFIERS: &[(Modifier, u32)] = &[(Modifier::ShinyParent, 128)];
const CHARM_MODIFIERS: &[(Modifier, u32)] = &[(Modifier::ShinyCharm, 3)];
const LETS_GO_MODIFIERS: &[(Modifier, u32)] = &[(Modifier::ShinyCharm, 3), (Modifier::Lure, 2)];
const LEGENDS_MODIFIERS: &[(Modifier, u32)] = &[(Modifier::ShinyCharm, 4)];
const PALDEA_MODIFIERS: &[(Modifier, u32)] =
    &[(Modifier::ShinyCharm, 3), (Modifier::SparklingPower, 4)];

const NO_LURE: &[&str] = &[];
const LETS_GO_LURE_METHODS: &[&str] = &[RANDOM_ENCOUNTERS];

// ── Method tables ───────────────────────────────────────────────────────────

const GEN2_METHODS: &[MethodDefinition] = &[
    method(RANDOM_ENCOUNTERS, 8192, "Wild encounters in grass, caves, or water"),
    method(SOFT_RESETS, 8192, "Resetting before a static or gift encounter"),
    method(BREEDING, 8192, "Hatching eggs; a shiny parent greatly boosts odds"),
    method(FISHING, 8192, "Encounters from any rod"),
];

const CRYSTAL_METHODS: &[MethodDefinition] = &[
    method(RANDOM_ENCOUNTERS, 8192, "Wild encounters in grass, caves, or water"),
    method(SOFT_RESETS, 8192, "Resetting before a static or gift encounter"),
    method(BREEDING, 8192, "Hatching eggs; a shiny parent greatly boosts odds"),
    method(FISHING, 8192, "Encounters from any rod"),
    method(ODD_EGG, 7, "The Day-Care gift egg with a fixed shiny chance"),
];

const GEN3_METHODS: &[MethodDefinition] = &[
    method(RANDOM_ENCOUNTERS, 8192, "Wild encounters in grass, caves, or water"),
    method(SOFT_RESETS, 8192, "Resetting before a static or gift encounter"),
    method(BREEDING, 8192, "Hatching eggs from the Day Care"),
    method(FISHING, 8192, "Encounters from any rod"),
];

const SINNOH_METHODS: &[MethodDefinition] = &[
    method(RANDOM_ENCOUNTERS, 8192, "Wild encounters in grass, caves, or water"),
    method(SOFT_RESETS, 8192, "Resetting before a static or gift encounter"),
    method(BREEDING, 8192, "Hatching eggs from the Day Care"),
    method(MASUDA_METHOD, 1638, "Breeding with a parent from a foreign-language game"),
    method(POKE_RADAR, 8200, "Chaining Poké Radar patches; odds shown at chain 0"),
];

const JOHTO_REMAKE_METHODS: &[MethodDefinition] = &[
    method(RANDOM_ENCOUNTERS, 8192, "Wild encounters in grass, caves, or water"),
    method(SOFT_RESETS, 8192, "Resetting before a static or gift encounter"),
    method(BREEDING, 8192, "Hatching eggs from the Day Care"),
    method(MASUDA_METHOD, 1638, "Breeding with a parent from a foreign-language game"),
    method(POKEWALKER, 8192, "Catches made on the Pokéwalker accessory"),
];

const UNOVA_METHODS: &[MethodDefinition] = &[
    method(RANDOM_ENCOUNTERS, 8192, "Wild encounters in grass, caves, or water"),
    method(SOFT_RESETS, 8192, "Resetting before a static or gift encounter"),
    method(BREEDING, 8192, "Hatching eggs from the Day Care"),
    method(MASUDA_METHOD, 1365, "Breeding with a parent from a foreign-language game"),
    method(SHAKING_GRASS, 8192, "Encounters from rustling grass and dust clouds"),
];

const KALOS_METHODS: &[MethodDefinition] = &[
    method(RANDOM_ENCOUNTERS, 4096, "Wild encounters in grass, caves, or water"),
    method(SOFT_RESETS, 4096, "Resetting before a static or gift encounter"),
    method(BREEDING, 4096, "Hatching eggs from the Day Care"),
    method(MASUDA_METHOD, 683, "Breeding with a parent from a foreign-language game"),
    method(POKE_RADAR, 4096, "Chaining Poké Radar patches"),
    method(CHAIN_FISHING, 4096, "Consecutive successful hooks on the same spot"),
    method(FRIEND_SAFARI, 819, "Encounters in a friend's Safari"),
    method(HORDE_ENCOUNTERS, 819, "Five-Pokémon horde battles, odds per horde"),
];

const HOENN_REMAKE_METHODS: &[MethodDefinition] = &[
    method(RANDOM_ENCOUNTERS, 4096, "Wild encounters in grass, caves, or water"),
    method(SOFT_RESETS, 4096, "Resetting before a static or gift encounter"),
    method(BREEDING, 4096, "Hatching eggs from the Day Care"),
    method(MASUDA_METHOD, 683, "Breeding with a parent from a foreign-language game"),
    method(DEXNAV, 4096, "DexNav sneaking; odds improve with search level"),
    method(CHAIN_FISHING, 4096, "Consecutive successful hooks on the same spot"),
    method(HORDE_ENCOUNTERS, 819, "Five-Pokémon horde battles, odds per horde"),
];

const ALOLA_METHODS: &[MethodDefinition] = &[
    method(RANDOM_ENCOUNTERS, 4096, "Wild encounters in grass, caves, or water"),
    method(SOFT_RESETS, 4096, "Resetting before a static or gift encounter"),
    method(BREEDING, 4096, "Hatching eggs from the Nursery"),
    method(MASUDA_METHOD, 683, "Breeding with a parent from a foreign-language game"),
    method(SOS_CHAINING, 4096, "Chaining ally calls in SOS battles"),
];

const LETS_GO_METHODS: &[MethodDefinition] = &[
    method(RANDOM_ENCOUNTERS, 4096, "Overworld spawns; a lure adds one roll"),
    method(SOFT_RESETS, 4096, "Resetting before a static encounter"),
    method(CATCH_COMBO, 4096, "Catching the same species consecutively"),
];

const GALAR_METHODS: &[MethodDefinition] = &[
    method(RANDOM_ENCOUNTERS, 4096, "Wild encounters in grass, caves, or water"),
    method(SOFT_RESETS, 4096, "Resetting before a static or gift encounter"),
    method(BREEDING, 4096, "Hatching eggs from the Nursery"),
    method(MASUDA_METHOD, 683, "Breeding with a parent from a foreign-language game"),
    method(KNOCKOUT_COUNT, 4096, "Species knocked out; odds improve at thresholds"),
    method(MAX_RAID_BATTLES, 4096, "Dynamax raid dens; unaffected by the Shiny Charm"),
    method(DYNAMAX_ADVENTURES, 300, "Max Lair runs"),
];

const SINNOH_REMAKE_METHODS: &[MethodDefinition] = &[
    method(RANDOM_ENCOUNTERS, 4096, "Wild encounters in grass, caves, or water"),
    method(SOFT_RESETS, 4096, "Resetting before a static or gift encounter"),
    method(BREEDING, 4096, "Hatching eggs from the Day Care"),
    method(MASUDA_METHOD, 683, "Breeding with a parent from a foreign-language game"),
    method(POKE_RADAR, 4096, "Chaining Poké Radar patches"),
    method(GRAND_UNDERGROUND, 4096, "Hideaway encounters in the Grand Underground"),
];

const HISUI_METHODS: &[MethodDefinition] = &[
    method(RANDOM_ENCOUNTERS, 4096, "Overworld spawns; research level adds rolls"),
    method(MASS_OUTBREAKS, 158, "Regular mass outbreaks (+25 rolls)"),
    method(MASSIVE_MASS_OUTBREAKS, 315, "Massive mass outbreaks (+12 rolls)"),
];

const PALDEA_METHODS: &[MethodDefinition] = &[
    method(RANDOM_ENCOUNTERS, 4096, "Overworld spawns; sparkling power adds rolls"),
    method(SOFT_RESETS, 4096, "Resetting before a static or gift encounter"),
    method(BREEDING, 4096, "Picnic eggs"),
    method(MASUDA_METHOD, 683, "Breeding with a parent from a foreign-language game"),
    method(MASS_OUTBREAKS, 4096, "Outbreaks; clearing 30 and 60 add rolls"),
    method(TERA_RAID_BATTLES, 4096, "Tera raids; unaffected by the Shiny Charm"),
];

const LUMIOSE_METHODS: &[MethodDefinition] = &[
    method(RANDOM_ENCOUNTERS, 4096, "Overworld spawns around Lumiose City"),
    method(SOFT_RESETS, 4096, "Resetting before a static or gift encounter"),
    method(WILD_ZONES, 4096, "Respawning Wild Zone encounters"),
];

const GO_METHODS: &[MethodDefinition] = &[
    method(WILD_ENCOUNTERS, 512, "Map spawns; boosted during Community Day"),
    method(RAID_BATTLES, 20, "Raid rewards; boosted during Raid Day"),
    method(FIELD_RESEARCH, 512, "Research rewards; boosted during Research Day"),
    method(DAILY_ADVENTURE_INCENSE, 512, "Daily incense spawns"),
    method(HATCHING_EGGS, 512, "Hatches; boosted during Hatch Day"),
    method(GO_BATTLE_LEAGUE, 512, "Battle league reward encounters"),
];

/// Profile for one game.
pub(crate) fn profile(game: Game) -> GameProfile {
    let (methods, modifiers, lure_methods): (
        &'static [MethodDefinition],
        &'static [(Modifier, u32)],
        &'static [&'static str],
    ) = match game {
        Game::Gold | Game::Silver => (GEN2_METHODS, GEN2_MODIFIERS, NO_LURE),
        Game::Crystal => (CRYSTAL_METHODS, GEN2_MODIFIERS, NO_LURE),

        Game::Ruby
        | Game::Sapphire
        | Game::Emerald
        | Game::FireRed
        | Game::LeafGreen => (GEN3_METHODS, NO_MODIFIERS, NO_LURE),

        Game::Diamond | Game::Pearl | Game::Platinum => (SINNOH_METHODS, NO_MODIFIERS, NO_LURE),
        Game::HeartGold | Game::SoulSilver => (JOHTO_REMAKE_METHODS, NO_MODIFIERS, NO_LURE),

        Game::Black | Game::White => (UNOVA_METHODS, NO_MODIFIERS, NO_LURE),
        Game::Black2 | Game::White2 => (UNOVA_METHODS, CHARM_MODIFIERS, NO_LURE),

        Game::X | Game::Y => (KALOS_METHODS, CHARM_MODIFIERS, NO_LURE),
        Game::OmegaRuby | Game::AlphaSapphire => (HOENN_REMAKE_METHODS, CHARM_MODIFIERS, NO_LURE),

        Game::Sun | Game::Moon | Game::UltraSun | Game::UltraMoon => {
            (ALOLA_METHODS, CHARM_MODIFIERS, NO_LURE)
        }
        Game::LetsGoPikachu | Game::LetsGoEevee => {
            (LETS_GO_METHODS, LETS_GO_MODIFIERS, LETS_GO_LURE_METHODS)
        }

        Game::Sword | Game::Shield => (GALAR_METHODS, CHARM_MODIFIERS, NO_LURE),
        Game::BrilliantDiamond | Game::ShiningPearl => {
            (SINNOH_REMAKE_METHODS, CHARM_MODIFIERS, NO_LURE)
        }
        Game::LegendsArceus => (HISUI_METHODS, LEGENDS_MODIFIERS, NO_LURE),

        Game::Scarlet | Game::Violet => (PALDEA_METHODS, PALDEA_MODIFIERS, NO_LURE),
        Game::LegendsZA => (LUMIOSE_METHODS, LEGENDS_MODIFIERS, NO_LURE),

        Game::PokemonGo => (GO_METHODS, NO_MODIFIERS, NO_LURE),
    };

    GameProfile {
        game,
        methods,
        modifiers,
        lure_methods,
    }
}
