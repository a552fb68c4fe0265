use crate::{sql::command, Dialect, OnConflict};
use sqlx::{sqlite::SqliteQueryResult, Sqlite};
use upsert::Row;

impl Dialect for Sqlite {
    fn rows_affected(result: &SqliteQueryResult) -> u64 {
        result.rows_affected()
    }
}

impl OnConflict for Sqlite {
    fn on_conflict(row: &Row) -> String {
        command::on_conflict_excluded(row)
    }
}
