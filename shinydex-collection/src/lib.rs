//! Stored collection types, legacy method aliases, and the method migrator.
//!
//! The migrator never mutates its input and never fails: orphaned or
//! unknown methods are cleared, renamed ones are rewritten, and legacy
//! boolean records are upgraded. Only the file helpers in [`io`] return
//! errors.

pub mod aliases;
pub mod io;
pub mod migrate;
pub mod types;

pub use aliases::{canonical_method, method_aliases};
pub use io::{CollectionError, load_collection, parse_collection, save_collection};
pub use migrate::{MethodFix, MigrationReport, fix_method, migrate_methods, migrate_methods_with_report};
pub use types::*;
