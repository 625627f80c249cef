use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::catalog::{self, GameProfile};

/// Game titles the rule catalog knows about.
///
/// This enum centralizes title identity (display title, generation and
/// accepted aliases) so free-text titles from saved entries resolve the
/// same way everywhere.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Game {
    // Generation 2
    Gold,
    Silver,
    Crystal,

    // Generation 3
    Ruby,
    Sapphire,
    Emerald,
    FireRed,
    LeafGreen,

    // Generation 4
    Diamond,
    Pearl,
    Platinum,
    HeartGold,
    SoulSilver,

    // Generation 5
    Black,
    White,
    Black2,
    White2,

    // Generation 6
    X,
    Y,
    OmegaRuby,
    AlphaSapphire,

    // Generation 7
    Sun,
    Moon,
    UltraSun,
    UltraMoon,
    LetsGoPikachu,
    LetsGoEevee,

    // Generation 8
    Sword,
    Shield,
    BrilliantDiamond,
    ShiningPearl,
    LegendsArceus,

    // Generation 9
    Scarlet,
    Violet,
    LegendsZA,

    // Mobile
    PokemonGo,
}

/// All game variants in release order.
const ALL_GAMES: &[Game] = &[
    Game::Gold,
    Game::Silver,
    Game::Crystal,
    Game::Ruby,
    Game::Sapphire,
    Game::Emerald,
    Game::FireRed,
    Game::LeafGreen,
    Game::Diamond,
    Game::Pearl,
    Game::Platinum,
    Game::HeartGold,
    Game::SoulSilver,
    Game::Black,
    Game::White,
    Game::Black2,
    Game::White2,
    Game::X,
    Game::Y,
    Game::OmegaRuby,
    Game::AlphaSapphire,
    Game::Sun,
    Game::Moon,
    Game::UltraSun,
    Game::UltraMoon,
    Game::LetsGoPikachu,
    Game::LetsGoEevee,
    Game::Sword,
    Game::Shield,
    Game::BrilliantDiamond,
    Game::ShiningPearl,
    Game::LegendsArceus,
    Game::Scarlet,
    Game::Violet,
    Game::LegendsZA,
    Game::PokemonGo,
];

impl Game {
    /// Display title, exactly as saved entries record it in their `game` field.
    pub fn title(&self) -> &'static str {
        match self {
            Self::Gold => "Gold",
            Self::Silver => "Silver",
            Self::Crystal => "Crystal",
            Self::Ruby => "Ruby",
            Self::Sapphire => "Sapphire",
            Self::Emerald => "Emerald",
            Self::FireRed => "FireRed",
            Self::LeafGreen => "LeafGreen",
            Self::Diamond => "Diamond",
            Self::Pearl => "Pearl",
            Self::Platinum => "Platinum",
            Self::HeartGold => "HeartGold",
            Self::SoulSilver => "SoulSilver",
            Self::Black => "Black",
            Self::White => "White",
            Self::Black2 => "Black 2",
            Self::White2 => "White 2",
            Self::X => "X",
            Self::Y => "Y",
            Self::OmegaRuby => "Omega Ruby",
            Self::AlphaSapphire => "Alpha Sapphire",
            Self::Sun => "Sun",
            Self::Moon => "Moon",
            Self::UltraSun => "Ultra Sun",
            Self::UltraMoon => "Ultra Moon",
            Self::LetsGoPikachu => "Let's Go Pikachu",
            Self::LetsGoEevee => "Let's Go Eevee",
            Self::Sword => "Sword",
            Self::Shield => "Shield",
            Self::BrilliantDiamond => "Brilliant Diamond",
            Self::ShiningPearl => "Shining Pearl",
            Self::LegendsArceus => "Legends: Arceus",
            Self::Scarlet => "Scarlet",
            Self::Violet => "Violet",
            Self::LegendsZA => "Legends: Z-A",
            Self::PokemonGo => "Pokémon GO",
        }
    }

    /// Generation the title belongs to. The mobile title reports 0.
    pub fn generation(&self) -> u8 {
        match self {
            Self::Gold | Self::Silver | Self::Crystal => 2,

            Self::Ruby
            | Self::Sapphire
            | Self::Emerald
            | Self::FireRed
            | Self::LeafGreen => 3,

            Self::Diamond
            | Self::Pearl
            | Self::Platinum
            | Self::HeartGold
            | Self::SoulSilver => 4,

            Self::Black | Self::White | Self::Black2 | Self::White2 => 5,

            Self::X | Self::Y | Self::OmegaRuby | Self::AlphaSapphire => 6,

            Self::Sun
            | Self::Moon
            | Self::UltraSun
            | Self::UltraMoon
            | Self::LetsGoPikachu
            | Self::LetsGoEevee => 7,

            Self::Sword
            | Self::Shield
            | Self::BrilliantDiamond
            | Self::ShiningPearl
            | Self::LegendsArceus => 8,

            Self::Scarlet | Self::Violet | Self::LegendsZA => 9,

            Self::PokemonGo => 0,
        }
    }

    /// All accepted names for this game (case-insensitive matching).
    ///
    /// The first alias is always the lowercased display title. Short forms
    /// are only listed when they name exactly one game.
    pub fn aliases(&self) -> &'static [&'static str] {
        match self {
            Self::Gold => &["gold"],
            Self::Silver => &["silver"],
            Self::Crystal => &["crystal"],
            Self::Ruby => &["ruby"],
            Self::Sapphire => &["sapphire"],
            Self::Emerald => &["emerald"],
            Self::FireRed => &["firered", "fire red", "fr"],
            Self::LeafGreen => &["leafgreen", "leaf green", "lg"],
            Self::Diamond => &["diamond"],
            Self::Pearl => &["pearl"],
            Self::Platinum => &["platinum", "pt"],
            Self::HeartGold => &["heartgold", "heart gold", "hg"],
            Self::SoulSilver => &["soulsilver", "soul silver", "ss"],
            Self::Black => &["black", "b1"],
            Self::White => &["white", "w1"],
            Self::Black2 => &["black 2", "black2", "b2"],
            Self::White2 => &["white 2", "white2", "w2"],
            Self::X => &["x"],
            Self::Y => &["y"],
            Self::OmegaRuby => &["omega ruby", "omegaruby", "or"],
            Self::AlphaSapphire => &["alpha sapphire", "alphasapphire", "as"],
            Self::Sun => &["sun"],
            Self::Moon => &["moon"],
            Self::UltraSun => &["ultra sun", "ultrasun", "us"],
            Self::UltraMoon => &["ultra moon", "ultramoon", "um"],
            Self::LetsGoPikachu => &[
                "let's go pikachu",
                "lets go pikachu",
                "let's go, pikachu!",
                "lgp",
            ],
            Self::LetsGoEevee => &[
                "let's go eevee",
                "lets go eevee",
                "let's go, eevee!",
                "lge",
            ],
            Self::Sword => &["sword"],
            Self::Shield => &["shield"],
            Self::BrilliantDiamond => &["brilliant diamond", "brilliantdiamond", "bd"],
            Self::ShiningPearl => &["shining pearl", "shiningpearl", "sp"],
            Self::LegendsArceus => &["legends: arceus", "legends arceus", "pla"],
            Self::Scarlet => &["scarlet"],
            Self::Violet => &["violet"],
            Self::LegendsZA => &["legends: z-a", "legends z-a", "legends za", "za"],
            Self::PokemonGo => &["pokémon go", "pokemon go", "go"],
        }
    }

    /// Rule profile (methods and modifiers) for this game.
    pub fn profile(&self) -> GameProfile {
        catalog::profile(*self)
    }

    /// Look up a game from a free-text title, returning `None` when unknown.
    pub fn from_title(title: &str) -> Option<Game> {
        title.parse().ok()
    }

    /// All 36 game variants.
    pub fn all() -> &'static [Game] {
        ALL_GAMES
    }
}

impl std::fmt::Display for Game {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.title())
    }
}

/// Error returned when a string cannot be parsed into a `Game`.
#[derive(Debug, Clone, Error)]
#[error("unknown game: '{0}'")]
pub struct GameParseError(pub String);

impl std::str::FromStr for Game {
    type Err = GameParseError;

    /// Parse a game from its title or any alias (case-insensitive, trimmed).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_lowercase();
        if lower.is_empty() {
            return Err(GameParseError(s.to_string()));
        }
        ALL_GAMES
            .iter()
            .copied()
            .find(|game| game.aliases().iter().any(|alias| *alias == lower))
            .ok_or_else(|| GameParseError(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_has_36_variants() {
        assert_eq!(Game::all().len(), 36);
    }

    #[test]
    fn titles_round_trip() {
        for &game in Game::all() {
            let parsed: Game = game.title().parse().unwrap();
            assert_eq!(parsed, game, "round-trip failed for {:?}", game);
        }
    }

    #[test]
    fn first_alias_is_lowercased_title() {
        for &game in Game::all() {
            assert_eq!(
                game.aliases()[0],
                game.title().to_lowercase(),
                "first alias should be the title for {:?}",
                game,
            );
        }
    }

    #[test]
    fn aliases_are_unique_across_games() {
        let mut seen = std::collections::HashSet::new();
        for &game in Game::all() {
            for alias in game.aliases() {
                assert!(seen.insert(*alias), "alias '{}' is used twice", alias);
            }
        }
    }

    #[test]
    fn aliases_resolve_correctly() {
        let cases = [
            ("hg", Game::HeartGold),
            ("B2", Game::Black2),
            ("or", Game::OmegaRuby),
            ("Lets Go Pikachu", Game::LetsGoPikachu),
            ("PLA", Game::LegendsArceus),
            ("Pokemon GO", Game::PokemonGo),
            ("  scarlet ", Game::Scarlet),
            ("Legends ZA", Game::LegendsZA),
        ];
        for (input, expected) in cases {
            let parsed: Game = input.parse().unwrap();
            assert_eq!(parsed, expected, "alias '{}' should parse to {:?}", input, expected);
        }
    }

    #[test]
    fn pair_names_are_rejected() {
        for input in ["ORAS", "SV", "SwSh", "BDSP", ""] {
            assert!(Game::from_title(input).is_none(), "'{}' should not parse", input);
        }
    }

    #[test]
    fn generations_are_in_release_order() {
        let gens: Vec<u8> = Game::all()
            .iter()
            .filter(|g| **g != Game::PokemonGo)
            .map(|g| g.generation())
            .collect();
        assert!(gens.windows(2).all(|w| w[0] <= w[1]));
    }

    #[test]
    fn display_returns_title() {
        assert_eq!(Game::OmegaRuby.to_string(), "Omega Ruby");
        assert_eq!(Game::LegendsArceus.to_string(), "Legends: Arceus");
    }
}
