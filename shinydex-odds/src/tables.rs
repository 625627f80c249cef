//! Chain, streak, and level dependent odds tables.
//!
//! Each resolver is a standalone pure function keyed by the caller on
//! (game, method). Tables are published values and are kept verbatim, even
//! where neighbouring rows do not follow a formula.

use shinydex_core::{LiveEvent, ModifierState, methods};

/// Chain length at which every Poké Radar variant stops improving.
pub const RADAR_CHAIN_CAP: u32 = 40;

/// Published rate for a fully capped generation 4 radar chain.
pub const RADAR_GEN4_CAPPED: u32 = 99;

fn round_inverse(p: f64) -> u32 {
    (1.0 / p).round() as u32
}

// ── Poké Radar ──────────────────────────────────────────────────────────────

/// Diamond/Pearl/Platinum radar.
///
/// `p = (65535 / (8200 - chain * 200)) / 65536`. A chain at the cap reports
/// the published capped rate instead of the formula value.
pub fn radar_gen4(chain: u32) -> u32 {
    if chain >= RADAR_CHAIN_CAP {
        return RADAR_GEN4_CAPPED;
    }
    let threshold = 65535.0 / (8200.0 - f64::from(chain) * 200.0);
    round_inverse(threshold / 65536.0)
}

/// X/Y radar: linear from 4096 at chain 0 down to 99 at the cap.
pub fn radar_gen6(chain: u32) -> u32 {
    let chain = f64::from(chain.min(RADAR_CHAIN_CAP));
    let span = f64::from(4096 - 99);
    (4096.0 - span * chain / f64::from(RADAR_CHAIN_CAP)).round() as u32
}

/// Brilliant Diamond/Shining Pearl radar, indexed by chain 0–40.
const RADAR_REMAKE_TABLE: [u32; 41] = [
    4096, 3855, 3640, 3449, 3277, 3121, 2979, 2849, 2731, 2621, // 0-9
    2521, 2427, 2341, 2260, 2185, 2114, 2048, 1986, 1928, 1872, // 10-19
    1820, 1771, 1725, 1680, 1638, 1598, 1560, 1524, 1489, 1456, // 20-29
    1130, 1111, 1092, 1074, 1057, 1040, 585, 512, 455, 410, // 30-39
    99,
];

pub fn radar_remake(chain: u32) -> u32 {
    RADAR_REMAKE_TABLE[chain.min(RADAR_CHAIN_CAP) as usize]
}

// ── Chain fishing ───────────────────────────────────────────────────────────

pub const FISHING_STREAK_CAP: u32 = 20;

/// X/Y and Omega Ruby/Alpha Sapphire consecutive fishing.
///
/// Each streak step adds two shiny attempts, up to 41; the charm adds two
/// more. A zero streak with the charm is fixed at 1365.
pub fn chain_fishing(streak: u32, charm: bool) -> u32 {
    if streak == 0 && charm {
        return 1365;
    }
    let mut attempts = (1 + 2 * streak.min(FISHING_STREAK_CAP)).min(41);
    if charm {
        attempts += 2;
    }
    let miss = (4095.0_f64 / 4096.0).powi(attempts as i32);
    round_inverse(1.0 - miss)
}

// ── Knockout count ──────────────────────────────────────────────────────────

/// Sword/Shield "number battled" thresholds: (threshold, no charm, charm).
const KNOCKOUT_TABLE: [(u32, u32, u32); 6] = [
    (1, 4096, 1365),
    (50, 2048, 1024),
    (100, 1365, 819),
    (200, 1024, 683),
    (300, 819, 585),
    (500, 683, 512),
];

/// Uses the highest threshold not above `count`; counts below 1 use the first row.
pub fn knockout_count(count: u32, charm: bool) -> u32 {
    let row = KNOCKOUT_TABLE
        .iter()
        .rev()
        .find(|(threshold, _, _)| *threshold <= count)
        .unwrap_or(&KNOCKOUT_TABLE[0]);
    if charm { row.2 } else { row.1 }
}

// ── DexNav search level ─────────────────────────────────────────────────────

/// One DexNav level band.
#[derive(Debug, Clone, Copy)]
struct SearchBand {
    min: u32,
    max: u32,
    odds: u32,
    charm_odds: u32,
    /// Used on every fifth level inside the band.
    fifth: u32,
    fifth_charm: u32,
}

const fn band(min: u32, max: u32, odds: u32, charm_odds: u32, fifth: u32, fifth_charm: u32) -> SearchBand {
    SearchBand {
        min,
        max,
        odds,
        charm_odds,
        fifth,
        fifth_charm,
    }
}

const SEARCH_LEVEL_TABLE: [SearchBand; 17] = [
    band(0, 9, 4096, 1365, 2048, 1024),
    band(10, 19, 3855, 1310, 1986, 993),
    band(20, 29, 3641, 1260, 1928, 964),
    band(30, 39, 3449, 1214, 1872, 936),
    band(40, 49, 3277, 1170, 1820, 910),
    band(50, 59, 3121, 1130, 1771, 886),
    band(60, 69, 2979, 1092, 1725, 862),
    band(70, 79, 2849, 1057, 1680, 840),
    band(80, 89, 2731, 1024, 1638, 819),
    band(90, 99, 2621, 993, 1598, 799),
    band(100, 149, 2521, 964, 1560, 780),
    band(150, 199, 2427, 936, 1524, 762),
    band(200, 299, 1928, 819, 1260, 630),
    band(300, 399, 1725, 762, 1170, 585),
    band(400, 599, 1560, 712, 1092, 546),
    band(600, 799, 1489, 683, 1057, 528),
    band(800, u32::MAX, 1425, 655, 1024, 512),
];

/// Levels that are multiples of five get the band's bonus pair, except 0, 50, and 100.
pub fn is_fifth_search_level(level: u32) -> bool {
    level % 5 == 0 && !matches!(level, 0 | 50 | 100)
}

/// Omega Ruby/Alpha Sapphire DexNav odds for a search level.
pub fn search_level(level: u32, charm: bool) -> u32 {
    let band = SEARCH_LEVEL_TABLE
        .iter()
        .find(|b| (b.min..=b.max).contains(&level))
        .unwrap_or(&SEARCH_LEVEL_TABLE[SEARCH_LEVEL_TABLE.len() - 1]);
    match (is_fifth_search_level(level), charm) {
        (true, true) => band.fifth_charm,
        (true, false) => band.fifth,
        (false, true) => band.charm_odds,
        (false, false) => band.odds,
    }
}

// ── SOS chaining ────────────────────────────────────────────────────────────

/// Sun/Moon SOS bands: (upper bound inclusive, no charm, charm).
const SOS_TABLE: [(u32, u32, u32); 4] = [
    (10, 4096, 1365),
    (20, 819, 585),
    (30, 455, 372),
    (u32::MAX, 315, 273),
];

pub fn sos_chain(chain: u32, charm: bool) -> u32 {
    let (_, odds, charm_odds) = SOS_TABLE
        .iter()
        .find(|(upper, _, _)| chain <= *upper)
        .copied()
        .unwrap_or(SOS_TABLE[SOS_TABLE.len() - 1]);
    if charm { charm_odds } else { odds }
}

// ── Catch combo ─────────────────────────────────────────────────────────────

/// One Let's Go combo band. `both` is its own published column.
#[derive(Debug, Clone, Copy)]
struct ComboBand {
    upper: u32,
    none: u32,
    charm: u32,
    lure: u32,
    both: u32,
}

const CATCH_COMBO_TABLE: [ComboBand; 4] = [
    ComboBand { upper: 10, none: 4096, charm: 1365, lure: 2048, both: 1024 },
    ComboBand { upper: 20, none: 1365, charm: 819, lure: 1024, both: 683 },
    ComboBand { upper: 30, none: 1024, charm: 683, lure: 819, both: 585 },
    ComboBand { upper: u32::MAX, none: 819, charm: 585, lure: 683, both: 512 },
];

pub fn catch_combo(combo: u32, charm: bool, lure: bool) -> u32 {
    let band = CATCH_COMBO_TABLE
        .iter()
        .find(|b| combo <= b.upper)
        .unwrap_or(&CATCH_COMBO_TABLE[CATCH_COMBO_TABLE.len() - 1]);
    match (charm, lure) {
        (false, false) => band.none,
        (true, false) => band.charm,
        (false, true) => band.lure,
        (true, true) => band.both,
    }
}

// ── Mass outbreaks ──────────────────────────────────────────────────────────

/// Scarlet/Violet outbreaks, `[tier][cleared band] = (no charm, charm)`.
/// Cleared bands are 0–29, 30–59, and 60+.
const OUTBREAK_TABLE: [[(u32, u32); 3]; 4] = [
    [(4096, 1365), (2048, 1024), (1365, 819)],
    [(2048, 1024), (1365, 819), (1024, 683)],
    [(1365, 819), (1024, 683), (819, 585)],
    [(1024, 683), (819, 585), (683, 512)],
];

/// Event-boosted outbreaks use these worse rates instead.
const EVENT_OUTBREAK_TABLE: [[(u32, u32); 3]; 4] = [
    [(4096, 1365), (4096, 1365), (2048, 1024)],
    [(2048, 1024), (2048, 1024), (1365, 819)],
    [(1365, 819), (1365, 819), (1024, 683)],
    [(1024, 683), (1024, 683), (819, 585)],
];

fn cleared_band(cleared: u32) -> usize {
    match cleared {
        0..=29 => 0,
        30..=59 => 1,
        _ => 2,
    }
}

pub fn mass_outbreak(sparkling_tier: u8, cleared: u32, charm: bool, event_boosted: bool) -> u32 {
    let table = if event_boosted {
        &EVENT_OUTBREAK_TABLE
    } else {
        &OUTBREAK_TABLE
    };
    let (odds, charm_odds) = table[usize::from(sparkling_tier.min(3))][cleared_band(cleared)];
    if charm { charm_odds } else { odds }
}

// ── Roll counting ───────────────────────────────────────────────────────────

/// Extra rolls granted by regular mass outbreaks in Legends: Arceus.
pub const OUTBREAK_BONUS_ROLLS: u32 = 25;
/// Extra rolls granted by massive mass outbreaks in Legends: Arceus.
pub const MASSIVE_OUTBREAK_BONUS_ROLLS: u32 = 12;

/// Total shiny rolls for a Legends: Arceus encounter.
///
/// The charm is worth 4 rolls on its own but 3 once the research level 10
/// roll is active, whatever the perfect research state.
pub fn roll_count(bonus_rolls: u32, research_level_10: bool, perfect_research: bool, charm: bool) -> u32 {
    let mut rolls = 1 + bonus_rolls;
    if research_level_10 {
        rolls += 1;
    }
    if perfect_research {
        rolls += 2;
    }
    if charm {
        rolls += if research_level_10 { 3 } else { 4 };
    }
    rolls
}

pub fn rolls_to_odds(rolls: u32) -> u32 {
    (4096.0 / f64::from(rolls.max(1))).round() as u32
}

// ── Two-tier table ──────────────────────────────────────────────────────────

/// Legends: Z-A overworld odds: (no charm, charm).
const TWO_TIER_TABLE: (u32, u32) = (4096, 1024);

pub fn two_tier(charm: bool) -> u32 {
    if charm { TWO_TIER_TABLE.1 } else { TWO_TIER_TABLE.0 }
}

// ── Live-service events ─────────────────────────────────────────────────────

/// Pokémon GO event rates: each event boosts exactly one method.
const EVENT_TABLE: [(LiveEvent, &str, u32); 5] = [
    (LiveEvent::CommunityDay, methods::WILD_ENCOUNTERS, 25),
    (LiveEvent::RaidDay, methods::RAID_BATTLES, 10),
    (LiveEvent::ResearchDay, methods::FIELD_RESEARCH, 10),
    (LiveEvent::BirdIncense, methods::DAILY_ADVENTURE_INCENSE, 2048),
    (LiveEvent::HatchDay, methods::HATCHING_EGGS, 10),
];

/// Event target for a live-service event.
pub fn event_method(event: LiveEvent) -> &'static str {
    EVENT_TABLE
        .iter()
        .find(|(e, _, _)| *e == event)
        .map_or("", |(_, method, _)| *method)
}

/// First active event that targets `method`, if any. Events never stack.
pub fn live_event(method: &str, state: &ModifierState) -> Option<u32> {
    EVENT_TABLE
        .iter()
        .find(|(event, target, _)| state.is_event_active(*event) && *target == method)
        .map(|(_, _, odds)| *odds)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_non_increasing(name: &str, values: impl Iterator<Item = u32>) {
        let values: Vec<u32> = values.collect();
        for (i, pair) in values.windows(2).enumerate() {
            assert!(
                pair[0] >= pair[1],
                "{} increased from {} to {} at step {}",
                name,
                pair[0],
                pair[1],
                i + 1
            );
        }
    }

    #[test]
    fn radar_gen4_formula() {
        assert_eq!(radar_gen4(0), 8200);
        assert_eq!(radar_gen4(39), 400);
        assert_eq!(radar_gen4(40), 99);
        assert_eq!(radar_gen4(500), 99);
    }

    #[test]
    fn radar_gen6_interpolates() {
        assert_eq!(radar_gen6(0), 4096);
        assert_eq!(radar_gen6(20), 2098);
        assert_eq!(radar_gen6(40), 99);
        assert_eq!(radar_gen6(41), 99);
    }

    #[test]
    fn radar_remake_is_verbatim() {
        assert_eq!(radar_remake(0), 4096);
        assert_eq!(radar_remake(29), 1456);
        assert_eq!(radar_remake(30), 1130);
        assert_eq!(radar_remake(36), 585);
        assert_eq!(radar_remake(40), 99);
        assert_eq!(radar_remake(1000), 99);
    }

    #[test]
    fn radars_are_monotonic_and_capped() {
        assert_non_increasing("radar gen4", (0..60).map(radar_gen4));
        assert_non_increasing("radar gen6", (0..60).map(radar_gen6));
        assert_non_increasing("radar remake", (0..60).map(radar_remake));
    }

    #[test]
    fn chain_fishing_values() {
        assert_eq!(chain_fishing(0, false), 4096);
        assert_eq!(chain_fishing(0, true), 1365);
        assert_eq!(chain_fishing(20, false), chain_fishing(35, false));
        assert_eq!(chain_fishing(20, true), chain_fishing(99, true));
        assert!(chain_fishing(20, false) < 120);
    }

    #[test]
    fn chain_fishing_is_monotonic() {
        assert_non_increasing("fishing", (0..40).map(|s| chain_fishing(s, false)));
        assert_non_increasing("fishing charm", (0..40).map(|s| chain_fishing(s, true)));
    }

    #[test]
    fn knockout_thresholds() {
        assert_eq!(knockout_count(0, false), 4096);
        assert_eq!(knockout_count(49, false), 4096);
        assert_eq!(knockout_count(50, false), 2048);
        assert_eq!(knockout_count(199, true), 819);
        assert_eq!(knockout_count(500, true), 512);
        assert_eq!(knockout_count(9999, false), 683);
        assert_non_increasing("knockout", (0..700).map(|c| knockout_count(c, true)));
    }

    #[test]
    fn search_level_fifth_levels() {
        assert_eq!(search_level(0, false), 4096);
        assert_eq!(search_level(5, false), 2048);
        assert_eq!(search_level(5, true), 1024);
        assert_eq!(search_level(6, false), 4096);
        assert_eq!(search_level(50, false), 3121);
        assert_eq!(search_level(55, false), 1771);
        assert_eq!(search_level(100, true), 964);
        assert_eq!(search_level(105, true), 780);
        assert_eq!(search_level(999, false), 1425);
    }

    #[test]
    fn search_level_in_band_is_monotonic() {
        let in_band = (0..1200).filter(|l| !is_fifth_search_level(*l));
        assert_non_increasing("search level", in_band.clone().map(|l| search_level(l, false)));
        assert_non_increasing("search level charm", in_band.map(|l| search_level(l, true)));
    }

    #[test]
    fn sos_bands() {
        assert_eq!(sos_chain(0, false), 4096);
        assert_eq!(sos_chain(10, true), 1365);
        assert_eq!(sos_chain(11, false), 819);
        assert_eq!(sos_chain(30, true), 372);
        assert_eq!(sos_chain(31, false), 315);
        assert_eq!(sos_chain(255, true), 273);
        assert_non_increasing("sos", (0..80).map(|c| sos_chain(c, false)));
    }

    #[test]
    fn catch_combo_combined_column_is_not_a_product() {
        assert_eq!(catch_combo(0, true, true), 1024);
        assert_ne!(catch_combo(0, true, true), 4096 / 3 / 2);
        assert_eq!(catch_combo(31, false, false), 819);
        assert_eq!(catch_combo(31, true, true), 512);
        for (charm, lure) in [(false, false), (true, false), (false, true), (true, true)] {
            assert_non_increasing("combo", (0..60).map(|c| catch_combo(c, charm, lure)));
        }
    }

    #[test]
    fn outbreak_tables() {
        assert_eq!(mass_outbreak(0, 0, false, false), 4096);
        assert_eq!(mass_outbreak(3, 60, true, false), 512);
        assert_eq!(mass_outbreak(3, 60, true, true), 585);
        assert_eq!(mass_outbreak(9, 0, false, false), 1024);
        for tier in 0..=3 {
            for cleared in [0, 29, 30, 59, 60, 200] {
                assert!(
                    mass_outbreak(tier, cleared, false, true) >= mass_outbreak(tier, cleared, false, false),
                    "event table should never beat the regular table"
                );
            }
            assert_non_increasing("outbreak", (0..100).map(|c| mass_outbreak(tier, c, true, false)));
        }
    }

    #[test]
    fn roll_counting() {
        assert_eq!(roll_count(0, false, false, false), 1);
        assert_eq!(roll_count(0, false, false, true), 5);
        assert_eq!(roll_count(0, true, false, true), 5);
        assert_eq!(roll_count(0, true, true, true), 7);
        assert_eq!(roll_count(0, false, true, true), 7);
        assert_eq!(rolls_to_odds(1), 4096);
        assert_eq!(rolls_to_odds(5), 819);
        assert_eq!(rolls_to_odds(7), 585);
        assert_eq!(rolls_to_odds(26), 158);
    }

    #[test]
    fn live_events_target_one_method_each() {
        let state = ModifierState::new().event(LiveEvent::CommunityDay);
        assert_eq!(live_event(methods::WILD_ENCOUNTERS, &state), Some(25));
        assert_eq!(live_event(methods::RAID_BATTLES, &state), None);

        let all = LiveEvent::all()
            .iter()
            .fold(ModifierState::new(), |s, e| s.event(*e));
        assert_eq!(live_event(methods::HATCHING_EGGS, &all), Some(10));
        assert_eq!(live_event(methods::GO_BATTLE_LEAGUE, &all), None);
        assert_eq!(event_method(LiveEvent::RaidDay), methods::RAID_BATTLES);
    }
}
