use sqlx::Database;

/// Defines the database-specific behavior of an upsert.
pub trait Dialect: Database {
    /// Writes the placeholder of a bound parameter.
    ///
    /// # Arguments
    ///
    /// * `sql` - the SQL text to append the placeholder to
    /// * `position` - the one-based position of the parameter
    ///
    /// # Remarks
    ///
    /// The default implementation writes the positional `?` placeholder.
    fn write_placeholder(sql: &mut String, _position: usize) {
        sql.push('?');
    }

    /// Gets the number of rows affected by an executed statement.
    ///
    /// # Arguments
    ///
    /// * `result` - the result of the executed statement
    fn rows_affected(result: &<Self as Database>::QueryResult) -> u64;
}
