use std::fmt::{Display, Formatter, Result as FormatResult};

/// Represents the path an upsert took.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Outcome {
    /// Indicates the key was absent and the row was inserted.
    Inserted,

    /// Indicates the key was present and the row was updated.
    Updated,

    /// Indicates a single native statement either inserted or updated the row.
    Merged,
}

impl Display for Outcome {
    fn fmt(&self, f: &mut Formatter<'_>) -> FormatResult {
        f.write_str(match self {
            Self::Inserted => "inserted",
            Self::Updated => "updated",
            Self::Merged => "merged",
        })
    }
}

/// Represents the number of rows affected by an upsert.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct RowsAffected {
    outcome: Outcome,
    rows: u64,
}

impl RowsAffected {
    /// Initializes a new [`RowsAffected`].
    ///
    /// # Arguments
    ///
    /// * `outcome` - the [outcome](Outcome) of the upsert
    /// * `rows` - the number of rows reported by the database
    pub fn new(outcome: Outcome, rows: u64) -> Self {
        Self { outcome, rows }
    }

    /// Gets the [outcome](Outcome) of the upsert.
    pub fn outcome(&self) -> Outcome {
        self.outcome
    }

    /// Gets the number of rows reported by the database.
    ///
    /// # Remarks
    ///
    /// For a [merge](Outcome::Merged) the count is whatever the database reports for the native statement.
    /// MySQL, for example, reports `2` when an existing row is changed.
    pub fn rows(&self) -> u64 {
        self.rows
    }
}

impl Display for RowsAffected {
    fn fmt(&self, f: &mut Formatter<'_>) -> FormatResult {
        write!(f, "{} row(s) {}", self.rows, self.outcome)
    }
}
