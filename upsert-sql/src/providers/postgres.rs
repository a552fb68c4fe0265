use crate::{sql::command, Dialect, OnConflict};
use sqlx::{postgres::PgQueryResult, Postgres};
use upsert::Row;

impl Dialect for Postgres {
    fn write_placeholder(sql: &mut String, position: usize) {
        sql.push('$');
        sql.push_str(&position.to_string());
    }

    fn rows_affected(result: &PgQueryResult) -> u64 {
        result.rows_affected()
    }
}

impl OnConflict for Postgres {
    fn on_conflict(row: &Row) -> String {
        command::on_conflict_excluded(row)
    }
}
