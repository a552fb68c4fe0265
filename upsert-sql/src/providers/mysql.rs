use crate::{sql::command, Dialect, OnConflict};
use sqlx::{mysql::MySqlQueryResult, MySql};
use upsert::Row;

/// MySQL compares keys under the collation of the key column. The default collations are case-insensitive
/// and those with the `PAD SPACE` attribute ignore trailing spaces, so `'es'` and `'ES '` both match `'ES'`.
/// Exact key matching requires a binary `NO PAD` collation on the key column, such as `utf8mb4_0900_bin`.
impl Dialect for MySql {
    fn rows_affected(result: &MySqlQueryResult) -> u64 {
        result.rows_affected()
    }
}

/// The conflict target is implied by the primary key and is subject to the same collation rules as the
/// existence query of [`upsert_row`](crate::upsert_row).
impl OnConflict for MySql {
    fn on_conflict(row: &Row) -> String {
        command::on_duplicate_key(row)
    }
}
