mod error;
mod outcome;
mod record;
mod row;
mod value;

/// Contains the records of the HR sample schema.
pub mod hr;

pub use error::UpsertError;
pub use outcome::{Outcome, RowsAffected};
pub use record::Record;
pub use row::Row;
pub use value::{Column, Value};
