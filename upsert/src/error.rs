use std::error::Error;
use thiserror::Error;

/// Represents the possible upsert errors.
///
/// # Remarks
///
/// Every failure aborts the upsert. Nothing is retried and nothing is rolled back; the variants exist for
/// diagnostics rather than recovery.
#[derive(Error, Debug)]
pub enum UpsertError {
    /// Indicates the connection could not be established or used.
    #[error("the database connection failed: {0}")]
    Connection(#[source] Box<dyn Error + Send + Sync>),

    /// Indicates a statement was rejected, such as malformed SQL, a type mismatch or a constraint violation.
    #[error("the statement failed: {0}")]
    Statement(#[source] Box<dyn Error + Send + Sync>),

    /// Indicates the existence query for the specified table did not return a count.
    #[error("the count query for table {0} returned no rows")]
    MissingCount(String),
}
