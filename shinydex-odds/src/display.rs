//! Display helpers for odds denominators.
//!
//! Shared by the CLI and any other frontend so "1/N" strings and
//! percentages are formatted the same way everywhere.

/// Format a denominator as "1/N".
pub fn format_odds(denominator: u32) -> String {
    format!("1/{}", denominator.max(1))
}

/// Chance per encounter as a percentage.
pub fn percent(denominator: u32) -> f64 {
    100.0 / f64::from(denominator.max(1))
}

/// Chance of at least one shiny within `encounters` tries, as a percentage.
pub fn cumulative_percent(denominator: u32, encounters: u32) -> f64 {
    let miss = 1.0 - 1.0 / f64::from(denominator.max(1));
    100.0 * (1.0 - miss.powf(f64::from(encounters)))
}

/// Human-readable odds line, e.g. "1/4096 (0.024%)".
pub fn describe(denominator: u32) -> String {
    format!("{} ({:.3}%)", format_odds(denominator), percent(denominator))
}
