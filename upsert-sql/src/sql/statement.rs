use crate::Dialect;
use sqlx::{query::Query, Database, Encode, Type};
use std::{fmt::Display, marker::PhantomData};
use upsert::Value;

/// Represents a SQL statement and the values bound to its placeholders.
pub struct Statement<DB: Dialect> {
    _db: PhantomData<DB>,
    sql: String,
    values: Vec<Value>,
}

impl<DB: Dialect> Statement<DB> {
    /// Initializes a new [`Statement`].
    ///
    /// # Arguments
    ///
    /// * `init` - the initial SQL text
    pub fn new<S: Into<String>>(init: S) -> Self {
        Self {
            _db: PhantomData,
            sql: init.into(),
            values: Vec::new(),
        }
    }

    /// Appends SQL text to the statement.
    ///
    /// # Arguments
    ///
    /// * `text` - the SQL text to append
    pub fn push(&mut self, text: impl Display) -> &mut Self {
        use std::fmt::Write;
        let _ = write!(self.sql, "{text}");
        self
    }

    /// Appends a placeholder for the specified value to the statement.
    ///
    /// # Arguments
    ///
    /// * `value` - the [value](Value) bound to the placeholder
    pub fn push_bind(&mut self, value: &Value) -> &mut Self {
        self.values.push(value.clone());
        DB::write_placeholder(&mut self.sql, self.values.len());
        self
    }

    /// Gets the SQL text of the statement.
    pub fn sql(&self) -> &str {
        &self.sql
    }

    /// Gets the values bound to the statement, in placeholder order.
    pub fn values(&self) -> &[Value] {
        &self.values
    }

    /// Returns a query for the statement with every value bound.
    pub fn query(&self) -> Query<'_, DB, <DB as Database>::Arguments<'_>>
    where
        i32: for<'db> Encode<'db, DB> + Type<DB>,
        String: for<'db> Encode<'db, DB> + Type<DB>,
    {
        let mut query = sqlx::query(&self.sql);

        for value in &self.values {
            query = match value {
                Value::Text(text) => query.bind(text.clone()),
                Value::Integer(number) => query.bind(*number),
            };
        }

        query
    }
}
