use crate::{sql, sql::command, Dialect, UpsertErr};
use sqlx::{
    ColumnIndex, Connection, Database, Decode, Encode, Executor, IntoArguments, Row as _, Type,
};
use tracing::{debug, instrument};
use upsert::{Outcome, Record, Row, RowsAffected, UpsertError};

/// Inserts or updates a record.
///
/// # Arguments
///
/// * `db` - the open, caller-owned database [connection](Connection)
/// * `record` - the [record](Record) to insert or update
///
/// # Remarks
///
/// See [`upsert_row`] for the statements executed.
pub async fn upsert<C, R>(db: &mut C, record: &R) -> Result<RowsAffected, UpsertError>
where
    C: Connection,
    C::Database: Dialect,
    R: Record,
    for<'q> <C::Database as Database>::Arguments<'q>: IntoArguments<'q, C::Database>,
    for<'db> &'db mut C: Executor<'db, Database = C::Database>,
    usize: ColumnIndex<<C::Database as Database>::Row>,
    i32: for<'db> Encode<'db, C::Database> + Type<C::Database>,
    i64: for<'db> Decode<'db, C::Database> + Type<C::Database>,
    String: for<'db> Encode<'db, C::Database> + Type<C::Database>,
{
    upsert_row(db, &record.to_row()).await
}

/// Inserts or updates a row.
///
/// # Arguments
///
/// * `db` - the open, caller-owned database [connection](Connection)
/// * `row` - the [row](Row) to insert or update
///
/// # Remarks
///
/// The existence of the natural key is checked with `SELECT COUNT(*)`. A positive count is followed by an
/// `UPDATE` of every attribute, otherwise an `INSERT` of the key and every attribute. The key is bound as
/// is; it is never trimmed or case-folded. Whether it matches an existing key exactly is decided by the
/// collation of the key column. SQLite and PostgreSQL compare text exactly by default, while MySQL needs a
/// binary `NO PAD` collation such as `utf8mb4_0900_bin` on the key column.
///
/// The check and the write are separate statements and are not wrapped in a transaction. A concurrent
/// writer may insert or delete the same key in between, which results in a duplicate key error or an
/// update of zero rows. Use [`merge_row`](crate::merge_row) when a single atomic statement is required.
#[instrument(
    name = "upsert",
    skip_all,
    fields(table = row.table(), key = %row.key().value()),
    err
)]
pub async fn upsert_row<C>(db: &mut C, row: &Row) -> Result<RowsAffected, UpsertError>
where
    C: Connection,
    C::Database: Dialect,
    for<'q> <C::Database as Database>::Arguments<'q>: IntoArguments<'q, C::Database>,
    for<'db> &'db mut C: Executor<'db, Database = C::Database>,
    usize: ColumnIndex<<C::Database as Database>::Row>,
    i32: for<'db> Encode<'db, C::Database> + Type<C::Database>,
    i64: for<'db> Decode<'db, C::Database> + Type<C::Database>,
    String: for<'db> Encode<'db, C::Database> + Type<C::Database>,
{
    const COUNT: usize = 0;

    let table = sql::table(row);
    let select = command::count::<C::Database>(&table, row.key());
    let count: i64 = match select.query().fetch_optional(&mut *db).await.upsert_err()? {
        Some(result) => result.try_get(COUNT).upsert_err()?,
        None => return Err(UpsertError::MissingCount(table.quote().into_owned())),
    };
    let (outcome, statement) = if count > 0 {
        (Outcome::Updated, command::update::<C::Database>(&table, row))
    } else {
        (Outcome::Inserted, command::insert::<C::Database>(&table, row))
    };
    let result = statement.query().execute(&mut *db).await.upsert_err()?;
    let affected = RowsAffected::new(outcome, <C::Database as Dialect>::rows_affected(&result));

    debug!(rows = affected.rows(), "rows {outcome}");

    Ok(affected)
}
