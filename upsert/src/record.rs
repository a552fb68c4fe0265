use crate::{Column, Row};

/// Defines the behavior of a record persisted by natural key.
pub trait Record {
    /// Gets the name of the table the record is persisted in.
    const TABLE: &'static str;

    /// Gets the name of the natural key column.
    const KEY: &'static str;

    /// Gets the natural key value.
    fn key(&self) -> &str;

    /// Gets the non-key attribute [columns](Column) in statement order.
    fn attributes(&self) -> Vec<Column>;

    /// Converts the record into the [row](Row) an upsert is executed with.
    fn to_row(&self) -> Row {
        Row::new(
            Self::TABLE,
            Column::new(Self::KEY, self.key()),
            self.attributes(),
        )
    }
}
