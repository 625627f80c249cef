//! Legacy method labels and their current names.

use shinydex_core::GameProfile;
use shinydex_core::methods::*;

/// Legacy label → canonical method name.
const METHOD_ALIASES: &[(&str, &str)] = &[
    ("Hordes", HORDE_ENCOUNTERS),
    ("Horde", HORDE_ENCOUNTERS),
    ("Horde Encounter", HORDE_ENCOUNTERS),
    ("Masuda", MASUDA_METHOD),
    ("PokeRadar", POKE_RADAR),
    ("Poke Radar", POKE_RADAR),
    ("Radar", POKE_RADAR),
    ("Radar Chaining", POKE_RADAR),
    ("Fishing Chain", CHAIN_FISHING),
    ("Consecutive Fishing", CHAIN_FISHING),
    ("DexNav Chain", DEXNAV),
    ("DexNav Search", DEXNAV),
    ("SOS", SOS_CHAINING),
    ("SOS Chain", SOS_CHAINING),
    ("SOS Battles", SOS_CHAINING),
    ("Catch Combos", CATCH_COMBO),
    ("Catch Chain", CATCH_COMBO),
    ("KO Method", KNOCKOUT_COUNT),
    ("KO Count", KNOCKOUT_COUNT),
    ("Number Battled", KNOCKOUT_COUNT),
    ("Max Raids", MAX_RAID_BATTLES),
    ("Dynamax Raids", MAX_RAID_BATTLES),
    ("Dynamax Adventure", DYNAMAX_ADVENTURES),
    ("Max Lair", DYNAMAX_ADVENTURES),
    ("Outbreak", MASS_OUTBREAKS),
    ("Outbreaks", MASS_OUTBREAKS),
    ("Mass Outbreak", MASS_OUTBREAKS),
    ("Massive Outbreak", MASSIVE_MASS_OUTBREAKS),
    ("MMO", MASSIVE_MASS_OUTBREAKS),
    ("Tera Raid", TERA_RAID_BATTLES),
    ("Tera Raids", TERA_RAID_BATTLES),
    ("Full Odds", RANDOM_ENCOUNTERS),
    ("Random Encounter", RANDOM_ENCOUNTERS),
    ("Wild", RANDOM_ENCOUNTERS),
    ("Soft Reset", SOFT_RESETS),
    ("Soft Resetting", SOFT_RESETS),
    ("SR", SOFT_RESETS),
    ("Egg", BREEDING),
    ("Eggs", BREEDING),
    ("Rustling Grass", SHAKING_GRASS),
    ("Pokewalker", POKEWALKER),
    ("Underground", GRAND_UNDERGROUND),
    ("Wild Zone", WILD_ZONES),
    ("Community Day", WILD_ENCOUNTERS),
    ("Raid", RAID_BATTLES),
    ("Raids", RAID_BATTLES),
    ("Research", FIELD_RESEARCH),
    ("Incense", DAILY_ADVENTURE_INCENSE),
    ("Hatching", HATCHING_EGGS),
];

/// Every alias pair, for auditing and tests.
pub fn method_aliases() -> &'static [(&'static str, &'static str)] {
    METHOD_ALIASES
}

/// Canonical name for a legacy label. Labels must match an alias exactly.
pub fn canonical_method(label: &str) -> Option<&'static str> {
    METHOD_ALIASES
        .iter()
        .find(|(alias, _)| *alias == label)
        .map(|(_, canonical)| *canonical)
}

/// Current method name in `profile` for a legacy label, if its alias
/// target exists in that game.
pub fn resolve_for_game(profile: &GameProfile, label: &str) -> Option<&'static str> {
    canonical_method(label).filter(|canonical| profile.has_method(canonical))
}
