use serde::{Deserialize, Serialize};

/// Modifier flags and levels for a single odds calculation.
///
/// Built fresh per request and never persisted. Deserializes from the
/// camelCase payload the web client sends; missing fields are off.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ModifierState {
    pub shiny_charm: bool,
    pub lure: bool,
    /// Breeding with a shiny parent (generation 2).
    pub shiny_parent: bool,
    /// Sparkling Power tier, 0–3. Higher values are treated as 3.
    pub sparkling_power: u8,
    /// Research level 10 reached for the species (Legends: Arceus).
    pub research_level_10: bool,
    /// Research task list completed for the species (Legends: Arceus).
    pub perfect_research: bool,
    /// Outbreak is part of a boosted event (Scarlet/Violet).
    pub event_boosted: bool,

    // Pokémon GO events
    pub community_day: bool,
    pub raid_day: bool,
    pub research_day: bool,
    pub bird_incense: bool,
    pub hatch_day: bool,
}

impl ModifierState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn charm(mut self, on: bool) -> Self {
        self.shiny_charm = on;
        self
    }

    pub fn lure(mut self, on: bool) -> Self {
        self.lure = on;
        self
    }

    pub fn shiny_parent(mut self, on: bool) -> Self {
        self.shiny_parent = on;
        self
    }

    pub fn sparkling(mut self, tier: u8) -> Self {
        self.sparkling_power = tier;
        self
    }

    pub fn research_level_10(mut self, on: bool) -> Self {
        self.research_level_10 = on;
        self
    }

    pub fn perfect_research(mut self, on: bool) -> Self {
        self.perfect_research = on;
        self
    }

    pub fn event_boosted(mut self, on: bool) -> Self {
        self.event_boosted = on;
        self
    }

    pub fn event(mut self, event: LiveEvent) -> Self {
        match event {
            LiveEvent::CommunityDay => self.community_day = true,
            LiveEvent::RaidDay => self.raid_day = true,
            LiveEvent::ResearchDay => self.research_day = true,
            LiveEvent::BirdIncense => self.bird_incense = true,
            LiveEvent::HatchDay => self.hatch_day = true,
        }
        self
    }

    /// Sparkling Power tier clamped to the 0–3 range.
    pub fn sparkling_tier(&self) -> u8 {
        self.sparkling_power.min(3)
    }

    pub fn is_event_active(&self, event: LiveEvent) -> bool {
        match event {
            LiveEvent::CommunityDay => self.community_day,
            LiveEvent::RaidDay => self.raid_day,
            LiveEvent::ResearchDay => self.research_day,
            LiveEvent::BirdIncense => self.bird_incense,
            LiveEvent::HatchDay => self.hatch_day,
        }
    }
}

/// Pokémon GO event types, in precedence order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LiveEvent {
    CommunityDay,
    RaidDay,
    ResearchDay,
    /// Daily Adventure Incense during the regional-bird rotation.
    BirdIncense,
    HatchDay,
}

const ALL_EVENTS: &[LiveEvent] = &[
    LiveEvent::CommunityDay,
    LiveEvent::RaidDay,
    LiveEvent::ResearchDay,
    LiveEvent::BirdIncense,
    LiveEvent::HatchDay,
];

impl LiveEvent {
    /// All events, highest precedence first.
    pub fn all() -> &'static [LiveEvent] {
        ALL_EVENTS
    }

    pub fn short_name(&self) -> &'static str {
        match self {
            Self::CommunityDay => "community-day",
            Self::RaidDay => "raid-day",
            Self::ResearchDay => "research-day",
            Self::BirdIncense => "bird-incense",
            Self::HatchDay => "hatch-day",
        }
    }
}

impl std::str::FromStr for LiveEvent {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_lowercase().replace(['_', ' '], "-");
        ALL_EVENTS
            .iter()
            .copied()
            .find(|e| e.short_name() == lower)
            .ok_or_else(|| format!("unknown event: '{s}'"))
    }
}
