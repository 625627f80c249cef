//! shinydex CLI
//!
//! Command-line interface for shiny odds lookups and collection migration.

mod cli_types;
mod commands;
mod error;
mod settings;

use std::io::Write;

use clap::Parser;

use cli_types::{Cli, Commands, ConfigAction};
use commands::config::{run_config_path, run_config_set_charm, run_config_set_game, run_config_show};
use commands::games::run_games;
use commands::methods::run_methods;
use commands::migrate::run_migrate;
use commands::odds::run_odds;
use error::CliError;

fn main() {
    let cli = Cli::parse();
    init_logging(cli.quiet, cli.verbose);

    if let Err(e) = run(cli) {
        log::error!("{}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), CliError> {
    let settings_path = settings::settings_path();

    match cli.command {
        Commands::Odds {
            game,
            method,
            modifiers,
            progress,
            encounters,
            json,
        } => {
            let hunt = settings::load_hunt_settings(&settings_path);
            let state = modifiers.to_state(hunt.shiny_charm);
            run_odds(game, &method, state, progress, encounters, json)
        }
        Commands::Methods { game, json } => {
            let game = match game {
                Some(game) => game,
                None => settings::load_hunt_settings(&settings_path)
                    .default_game
                    .ok_or(CliError::NoGame)?,
            };
            run_methods(game, json)
        }
        Commands::Games => {
            run_games();
            Ok(())
        }
        Commands::Migrate {
            file,
            dry_run,
            output,
        } => run_migrate(&file, dry_run, output.as_deref()),
        Commands::Config { action } => match action {
            ConfigAction::Show => {
                run_config_show(&settings_path);
                Ok(())
            }
            ConfigAction::Path => {
                run_config_path();
                Ok(())
            }
            ConfigAction::SetGame { game } => run_config_set_game(&settings_path, game),
            ConfigAction::SetCharm { enabled } => run_config_set_charm(&settings_path, enabled),
        },
    }
}

/// Route `log` output to stdout. Normal runs print bare messages, since
/// command output goes through `log::info!`; `--verbose` adds timestamps
/// and debug records. `RUST_LOG` still overrides the level.
fn init_logging(quiet: bool, verbose: bool) {
    let level = if verbose {
        log::LevelFilter::Debug
    } else if quiet {
        log::LevelFilter::Warn
    } else {
        log::LevelFilter::Info
    };

    let mut builder = env_logger::Builder::new();
    builder.filter_level(level).parse_default_env();
    if verbose {
        builder.format_timestamp_millis();
    } else {
        builder.format(|buf, record| match record.level() {
            log::Level::Info => writeln!(buf, "{}", record.args()),
            level => writeln!(
                buf,
                "{}: {}",
                level.as_str().to_lowercase(),
                record.args()
            ),
        });
    }
    builder.target(env_logger::Target::Stdout).init();
}
