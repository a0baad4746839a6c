//! Migrate a JavaScript project from ESLint and Prettier to Biome.
//!
//! The [`migrate`] module holds the individual steps and the
//! [`migrate::MigrationEngine`] that sequences them.

pub mod error;
pub mod migrate;

pub use error::{MigrateError, Result};
