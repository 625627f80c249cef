//! Rule catalog for shiny hunting: games, encounter methods, and modifiers.
//!
//! All catalog data is static and read-only, so every type here is cheap to
//! copy and safe to share across threads.

pub mod catalog;
pub mod game;
pub mod modifiers;

pub use catalog::{
    GameProfile, MethodDefinition, Modifier, is_valid_method, list_methods, methods,
};
pub use game::{Game, GameParseError};
pub use modifiers::{LiveEvent, ModifierState};

/// Denominator returned whenever a title or method is not in the catalog.
pub const FALLBACK_ODDS: u32 = 4096;
