//! Shiny odds resolution.
//!
//! [`resolve_odds`] is the single entry point: it delegates to a dynamic
//! table for chain and streak methods, applies published overrides, and
//! otherwise divides the catalog base odds by the active modifiers. It is a
//! pure function of its inputs and never fails.

pub mod display;
pub mod overrides;
pub mod resolve;
pub mod tables;

pub use display::{describe, format_odds, percent};
pub use overrides::{ModifierCombo, OverrideRow, lookup_override, override_rows};
pub use resolve::{DynamicFamily, OddsQuery, dynamic_family, resolve_game_odds, resolve_odds};
pub use shinydex_core::{FALLBACK_ODDS, Game, LiveEvent, ModifierState};
