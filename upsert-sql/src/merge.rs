use crate::{sql, sql::command, Dialect, UpsertErr};
use sqlx::{Connection, Database, Encode, Executor, IntoArguments, Type};
use tracing::{debug, instrument};
use upsert::{Outcome, Record, Row, RowsAffected, UpsertError};

/// Defines the behavior of a native, single statement upsert.
pub trait OnConflict: Dialect {
    /// Gets the clause appended to an `INSERT` so that an existing key updates the row instead.
    ///
    /// # Arguments
    ///
    /// * `row` - the [row](Row) being merged
    fn on_conflict(row: &Row) -> String;
}

/// Inserts or updates a record with a single atomic statement.
///
/// # Arguments
///
/// * `db` - the open, caller-owned database [connection](Connection)
/// * `record` - the [record](Record) to insert or update
pub async fn merge<C, R>(db: &mut C, record: &R) -> Result<RowsAffected, UpsertError>
where
    C: Connection,
    C::Database: OnConflict,
    R: Record,
    for<'q> <C::Database as Database>::Arguments<'q>: IntoArguments<'q, C::Database>,
    for<'db> &'db mut C: Executor<'db, Database = C::Database>,
    i32: for<'db> Encode<'db, C::Database> + Type<C::Database>,
    String: for<'db> Encode<'db, C::Database> + Type<C::Database>,
{
    merge_row(db, &record.to_row()).await
}

/// Inserts or updates a row with a single atomic statement.
///
/// # Arguments
///
/// * `db` - the open, caller-owned database [connection](Connection)
/// * `row` - the [row](Row) to insert or update
///
/// # Remarks
///
/// Unlike [`upsert_row`](crate::upsert_row), there is no existence query. The `INSERT` carries the
/// database's [conflict clause](OnConflict::on_conflict), so the database decides between inserting and
/// updating. Which of the two happened cannot be observed, so the outcome is always [`Outcome::Merged`].
#[instrument(
    name = "merge",
    skip_all,
    fields(table = row.table(), key = %row.key().value()),
    err
)]
pub async fn merge_row<C>(db: &mut C, row: &Row) -> Result<RowsAffected, UpsertError>
where
    C: Connection,
    C::Database: OnConflict,
    for<'q> <C::Database as Database>::Arguments<'q>: IntoArguments<'q, C::Database>,
    for<'db> &'db mut C: Executor<'db, Database = C::Database>,
    i32: for<'db> Encode<'db, C::Database> + Type<C::Database>,
    String: for<'db> Encode<'db, C::Database> + Type<C::Database>,
{
    let table = sql::table(row);
    let mut insert = command::insert::<C::Database>(&table, row);

    insert
        .push(' ')
        .push(<C::Database as OnConflict>::on_conflict(row));

    let result = insert.query().execute(&mut *db).await.upsert_err()?;
    let affected = RowsAffected::new(
        Outcome::Merged,
        <C::Database as Dialect>::rows_affected(&result),
    );

    debug!(rows = affected.rows(), "rows merged");

    Ok(affected)
}
