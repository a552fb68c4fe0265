use crate::Column;

/// Represents the parameters of a single upsert.
///
/// # Remarks
///
/// A row carries everything needed to render the statements of an upsert: the table, the natural key
/// and the attribute columns. Attribute order is significant; it is the order of the `SET` list of an
/// update and the order of the columns following the key in an insert.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Row {
    schema: Option<&'static str>,
    table: &'static str,
    key: Column,
    attributes: Vec<Column>,
}

impl Row {
    /// Initializes a new [`Row`].
    ///
    /// # Arguments
    ///
    /// * `table` - the name of the target table
    /// * `key` - the natural key [column](Column)
    /// * `attributes` - the non-key attribute [columns](Column)
    pub fn new(table: &'static str, key: Column, attributes: Vec<Column>) -> Self {
        Self {
            schema: None,
            table,
            key,
            attributes,
        }
    }

    /// Qualifies the row's table with the specified schema.
    ///
    /// # Arguments
    ///
    /// * `schema` - the name of the schema containing the table
    pub fn in_schema(mut self, schema: &'static str) -> Self {
        self.schema = Some(schema);
        self
    }

    /// Gets the associated schema name, if any.
    pub fn schema(&self) -> Option<&'static str> {
        self.schema
    }

    /// Gets the table name.
    pub fn table(&self) -> &'static str {
        self.table
    }

    /// Gets the natural key [column](Column).
    pub fn key(&self) -> &Column {
        &self.key
    }

    /// Gets the non-key attribute [columns](Column).
    pub fn attributes(&self) -> &[Column] {
        &self.attributes
    }
}
