pub(crate) mod command;
mod ident;
mod statement;

pub use ident::Ident;
pub use statement::Statement;

use upsert::Row;

/// Returns the table identifier of the specified row.
///
/// # Arguments
///
/// * `row` - the [row](Row) to get the table identifier of
pub fn table(row: &Row) -> Ident<'static> {
    match row.schema() {
        Some(schema) => Ident::qualified(schema, row.table()),
        None => Ident::unqualified(row.table()),
    }
}
