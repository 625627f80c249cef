use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use shinydex_core::Game;

fn generation_heading(generation: u8) -> String {
    match generation {
        0 => "Mobile".to_string(),
        n => format!("Generation {n}"),
    }
}

/// Short aliases worth showing: everything except the lowercased title.
fn short_aliases(game: Game) -> Vec<&'static str> {
    game.aliases().iter().skip(1).copied().collect()
}

pub(crate) fn run_games() {
    log::info!("Supported games:");
    log::info!("");

    let mut current_generation = None;

    for &game in Game::all() {
        if current_generation != Some(game.generation()) {
            if current_generation.is_some() {
                log::info!("");
            }
            current_generation = Some(game.generation());
            log::info!(
                "{}:",
                generation_heading(game.generation()).if_supports_color(Stdout, |t| t.bold()),
            );
        }

        let aliases = short_aliases(game);
        log::info!(
            "  {}{}",
            game.title().if_supports_color(Stdout, |t| t.cyan()),
            if aliases.is_empty() {
                String::new()
            } else {
                format!(
                    " {}",
                    format!("({})", aliases.join(", ")).if_supports_color(Stdout, |t| t.dimmed())
                )
            },
        );
    }
}
