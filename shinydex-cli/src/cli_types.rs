//! CLI type definitions: command enums and argument structs.

use std::path::PathBuf;

use clap::builder::BoolishValueParser;
use clap::{Args, Parser, Subcommand};

use shinydex_core::{Game, LiveEvent, ModifierState};

#[derive(Parser)]
#[command(name = "shinydex")]
#[command(about = "Shiny odds calculator and collection method migrator", long_about = None)]
pub(crate) struct Cli {
    /// Only show warnings and errors (suppress normal output)
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Enable verbose/debug logging (timestamps + debug-level messages)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Modifier switches shared by odds lookups.
#[derive(Args, Clone, Default)]
pub(crate) struct ModifierArgs {
    /// Shiny Charm is owned
    #[arg(long)]
    pub charm: bool,

    /// Ignore a Shiny Charm set as default in settings.toml
    #[arg(long, conflicts_with = "charm")]
    pub no_charm: bool,

    /// Lure is active (Let's Go)
    #[arg(long)]
    pub lure: bool,

    /// Breeding with a shiny parent (generation 2)
    #[arg(long)]
    pub shiny_parent: bool,

    /// Sparkling Power level, 0-3 (Scarlet/Violet)
    #[arg(long, value_parser = clap::value_parser!(u8).range(0..=3))]
    pub sparkling: Option<u8>,

    /// Research level 10 reached (Legends: Arceus)
    #[arg(long = "research-10")]
    pub research_10: bool,

    /// Perfect research (Legends: Arceus)
    #[arg(long)]
    pub perfect_research: bool,

    /// Event-boosted outbreak (Scarlet/Violet)
    #[arg(long)]
    pub event_boosted: bool,

    /// Active GO events (e.g., community-day,hatch-day)
    #[arg(long, value_delimiter = ',')]
    pub event: Vec<LiveEvent>,
}

impl ModifierArgs {
    /// Build the modifier state, taking the charm default from settings.
    pub fn to_state(&self, charm_default: bool) -> ModifierState {
        let charm = self.charm || (charm_default && !self.no_charm);
        let mut state = ModifierState::new()
            .charm(charm)
            .lure(self.lure)
            .shiny_parent(self.shiny_parent)
            .sparkling(self.sparkling.unwrap_or(0))
            .research_level_10(self.research_10)
            .perfect_research(self.perfect_research)
            .event_boosted(self.event_boosted);
        for &event in &self.event {
            state = state.event(event);
        }
        state
    }
}

#[derive(Subcommand)]
pub(crate) enum Commands {
    /// Resolve shiny odds for a game and method
    Odds {
        /// Game title or alias (e.g., "Omega Ruby", or, b2)
        game: Game,

        /// Method name as listed by `shinydex methods`
        method: String,

        #[command(flatten)]
        modifiers: ModifierArgs,

        /// Chain length, streak, battle count or level, for methods that use one
        #[arg(short, long)]
        progress: Option<u32>,

        /// Also show the chance of at least one shiny within this many encounters
        #[arg(long)]
        encounters: Option<u32>,

        /// Print a JSON object instead of text
        #[arg(long)]
        json: bool,
    },

    /// List a game's methods with their base odds
    Methods {
        /// Game title or alias (defaults to hunt.default_game)
        game: Option<Game>,

        /// Print a JSON array instead of text
        #[arg(long)]
        json: bool,
    },

    /// List all known games
    Games,

    /// Rewrite stale method labels in a collection JSON file
    Migrate {
        /// Collection file to migrate
        file: PathBuf,

        /// Show what would change without writing anything
        #[arg(short = 'n', long)]
        dry_run: bool,

        /// Write the result here instead of over the input file
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Manage hunt defaults in settings.toml
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
pub(crate) enum ConfigAction {
    /// Show current settings
    Show,
    /// Print the settings file path
    Path,
    /// Set the game used when a command omits one
    SetGame {
        /// Game title or alias
        game: Game,
    },
    /// Set whether odds lookups assume a Shiny Charm
    SetCharm {
        /// true/false, yes/no, on/off
        #[arg(action = clap::ArgAction::Set, value_parser = BoolishValueParser::new())]
        enabled: bool,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_odds_with_modifiers() {
        let cli = Cli::try_parse_from([
            "shinydex",
            "odds",
            "OR",
            "Horde Encounters",
            "--charm",
            "--event",
            "community-day,hatch-day",
            "-p",
            "12",
        ])
        .unwrap();
        let Commands::Odds {
            game,
            method,
            modifiers,
            progress,
            ..
        } = cli.command
        else {
            panic!("expected odds command");
        };
        assert_eq!(game, Game::OmegaRuby);
        assert_eq!(method, "Horde Encounters");
        assert_eq!(progress, Some(12));
        let state = modifiers.to_state(false);
        assert!(state.shiny_charm);
        assert!(state.community_day);
        assert!(state.hatch_day);
        assert!(!state.raid_day);
    }

    #[test]
    fn rejects_ambiguous_game_and_bad_sparkling() {
        assert!(Cli::try_parse_from(["shinydex", "odds", "ORAS", "DexNav"]).is_err());
        assert!(
            Cli::try_parse_from(["shinydex", "odds", "Scarlet", "Random Encounters", "--sparkling", "4"])
                .is_err()
        );
    }

    #[test]
    fn charm_default_and_override() {
        let args = ModifierArgs::default();
        assert!(args.to_state(true).shiny_charm);
        assert!(!args.to_state(false).shiny_charm);

        let no_charm = ModifierArgs {
            no_charm: true,
            ..Default::default()
        };
        assert!(!no_charm.to_state(true).shiny_charm);
    }

    #[test]
    fn set_charm_accepts_boolish_values() {
        for (arg, expected) in [("on", true), ("no", false), ("true", true)] {
            let cli = Cli::try_parse_from(["shinydex", "config", "set-charm", arg]).unwrap();
            let Commands::Config {
                action: ConfigAction::SetCharm { enabled },
            } = cli.command
            else {
                panic!("expected config set-charm");
            };
            assert_eq!(enabled, expected, "{arg}");
        }
    }
}
