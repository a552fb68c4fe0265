mod dialect;
mod error;
mod executor;
mod merge;
mod options;

/// Provides SQL-specific functionality.
pub mod sql;

pub use dialect::Dialect;
pub use executor::{upsert, upsert_row};
pub use merge::{merge, merge_row, OnConflict};
pub use options::{ConnectionOptions, Driver, OptionsError};

pub(crate) use error::UpsertErr;

use cfg_if::cfg_if;

cfg_if! {
    if #[cfg(any(feature = "mysql", feature = "postgres", feature = "sqlite"))] {
        mod providers;
    }
}
