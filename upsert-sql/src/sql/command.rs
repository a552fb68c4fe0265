use super::{Ident, Statement};
use crate::Dialect;
use std::borrow::Cow;
use upsert::{Column, Row};

#[inline]
fn column(column: &Column) -> Cow<'static, str> {
    Ident::unqualified(column.name()).quote()
}

/// Returns a statement that counts the rows whose key equals the specified key.
///
/// # Arguments
///
/// * `table` - the [identifier](Ident) of the table to count
/// * `key` - the key [column](Column) and its value
pub fn count<DB: Dialect>(table: &Ident<'_>, key: &Column) -> Statement<DB> {
    let mut select = Statement::new("SELECT COUNT(*) FROM ");

    select
        .push(table.quote())
        .push(" WHERE ")
        .push(column(key))
        .push(" = ")
        .push_bind(key.value());

    select
}

/// Returns a statement that overwrites every attribute of the row with the matching key.
///
/// # Arguments
///
/// * `table` - the [identifier](Ident) of the table to update
/// * `row` - the [row](Row) to update
pub fn update<DB: Dialect>(table: &Ident<'_>, row: &Row) -> Statement<DB> {
    let mut update = Statement::new("UPDATE ");

    update.push(table.quote()).push(" SET ");

    // a key-only row still needs a SET list; rewriting the key leaves the row as is
    let attributes = if row.attributes().is_empty() {
        std::slice::from_ref(row.key())
    } else {
        row.attributes()
    };

    for (i, attribute) in attributes.iter().enumerate() {
        if i > 0 {
            update.push(", ");
        }

        update
            .push(column(attribute))
            .push(" = ")
            .push_bind(attribute.value());
    }

    update
        .push(" WHERE ")
        .push(column(row.key()))
        .push(" = ")
        .push_bind(row.key().value());

    update
}

/// Returns a statement that inserts the key followed by every attribute.
///
/// # Arguments
///
/// * `table` - the [identifier](Ident) of the table to insert into
/// * `row` - the [row](Row) to insert
pub fn insert<DB: Dialect>(table: &Ident<'_>, row: &Row) -> Statement<DB> {
    let columns: Vec<_> = std::iter::once(row.key())
        .chain(row.attributes())
        .collect();
    let mut insert = Statement::new("INSERT INTO ");

    insert.push(table.quote()).push(" (");

    for (i, col) in columns.iter().enumerate() {
        if i > 0 {
            insert.push(", ");
        }

        insert.push(column(col));
    }

    insert.push(") VALUES (");

    for (i, col) in columns.iter().enumerate() {
        if i > 0 {
            insert.push(", ");
        }

        insert.push_bind(col.value());
    }

    insert.push(')');
    insert
}

#[cfg(any(feature = "postgres", feature = "sqlite"))]
/// Returns an `ON CONFLICT` clause that overwrites every attribute with the proposed value.
pub fn on_conflict_excluded(row: &Row) -> String {
    let key = column(row.key());

    if row.attributes().is_empty() {
        return format!("ON CONFLICT ({key}) DO NOTHING");
    }

    let set = row
        .attributes()
        .iter()
        .map(|attribute| {
            let name = column(attribute);
            format!("{name} = EXCLUDED.{name}")
        })
        .collect::<Vec<_>>()
        .join(", ");

    format!("ON CONFLICT ({key}) DO UPDATE SET {set}")
}

#[cfg(feature = "mysql")]
/// Returns an `ON DUPLICATE KEY` clause that overwrites every attribute with the proposed value.
pub fn on_duplicate_key(row: &Row) -> String {
    let attributes = if row.attributes().is_empty() {
        std::slice::from_ref(row.key())
    } else {
        row.attributes()
    };
    let set = attributes
        .iter()
        .map(|attribute| {
            let name = column(attribute);
            format!("{name} = VALUES({name})")
        })
        .collect::<Vec<_>>()
        .join(", ");

    format!("ON DUPLICATE KEY UPDATE {set}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sql;
    use rstest::rstest;
    use sqlx::{Postgres, Sqlite};
    use upsert::{
        hr::{Country, Job},
        Record, Value,
    };

    fn spain() -> Row {
        Country::new("ES", 1, "Spain").to_row()
    }

    fn ciso() -> Row {
        Job::new(
            "SEC_CISO",
            "Chief Information Security Officer",
            11600,
            18350,
        )
        .to_row()
    }

    #[rstest]
    #[case(spain(), "SELECT COUNT(*) FROM countries WHERE country_id = ?")]
    #[case(ciso(), "SELECT COUNT(*) FROM jobs WHERE job_id = ?")]
    fn count_should_select_by_natural_key(#[case] row: Row, #[case] expected: &str) {
        // arrange
        let table = sql::table(&row);

        // act
        let select = count::<Sqlite>(&table, row.key());

        // assert
        assert_eq!(select.sql(), expected)
    }

    #[rstest]
    #[case(
        spain(),
        "UPDATE countries SET country_name = ?, region_id = ? WHERE country_id = ?"
    )]
    #[case(
        ciso(),
        "UPDATE jobs SET job_title = ?, min_salary = ?, max_salary = ? WHERE job_id = ?"
    )]
    fn update_should_set_every_attribute(#[case] row: Row, #[case] expected: &str) {
        // arrange
        let table = sql::table(&row);

        // act
        let update = update::<Sqlite>(&table, &row);

        // assert
        assert_eq!(update.sql(), expected)
    }

    #[rstest]
    #[case(
        spain(),
        "INSERT INTO countries (country_id, country_name, region_id) VALUES (?, ?, ?)"
    )]
    #[case(
        ciso(),
        "INSERT INTO jobs (job_id, job_title, min_salary, max_salary) VALUES (?, ?, ?, ?)"
    )]
    fn insert_should_list_key_then_attributes(#[case] row: Row, #[case] expected: &str) {
        // arrange
        let table = sql::table(&row);

        // act
        let insert = insert::<Sqlite>(&table, &row);

        // assert
        assert_eq!(insert.sql(), expected)
    }

    #[test]
    fn insert_should_bind_values_in_placeholder_order() {
        // arrange
        let row = spain();
        let table = sql::table(&row);

        // act
        let insert = insert::<Sqlite>(&table, &row);

        // assert
        assert_eq!(
            insert.values(),
            [Value::from("ES"), Value::from("Spain"), Value::from(1)]
        )
    }

    #[test]
    fn update_should_use_numbered_placeholders_for_postgres() {
        // arrange
        let row = ciso();
        let table = sql::table(&row);

        // act
        let update = update::<Postgres>(&table, &row);

        // assert
        assert_eq!(
            update.sql(),
            "UPDATE jobs SET job_title = $1, min_salary = $2, max_salary = $3 WHERE job_id = $4"
        )
    }

    #[test]
    fn count_should_qualify_table_with_schema() {
        // arrange
        let row = spain().in_schema("hr");
        let table = sql::table(&row);

        // act
        let select = count::<Sqlite>(&table, row.key());

        // assert
        assert_eq!(
            select.sql(),
            "SELECT COUNT(*) FROM hr.countries WHERE country_id = ?"
        )
    }

    #[test]
    fn update_should_rewrite_key_when_row_has_no_attributes() {
        // arrange
        let row = Row::new("regions", Column::new("region_id", 1), Vec::new());
        let table = sql::table(&row);

        // act
        let update = update::<Sqlite>(&table, &row);

        // assert
        assert_eq!(
            update.sql(),
            "UPDATE regions SET region_id = ? WHERE region_id = ?"
        )
    }

    #[rstest]
    #[case(
        spain(),
        "ON CONFLICT (country_id) DO UPDATE SET country_name = EXCLUDED.country_name, region_id = EXCLUDED.region_id"
    )]
    #[case(
        Row::new("regions", Column::new("region_id", 1), Vec::new()),
        "ON CONFLICT (region_id) DO NOTHING"
    )]
    fn on_conflict_should_overwrite_attributes(#[case] row: Row, #[case] expected: &str) {
        // arrange

        // act
        let clause = on_conflict_excluded(&row);

        // assert
        assert_eq!(clause, expected)
    }

    #[test]
    fn on_duplicate_key_should_overwrite_attributes() {
        // arrange
        let row = ciso();

        // act
        let clause = on_duplicate_key(&row);

        // assert
        assert_eq!(
            clause,
            "ON DUPLICATE KEY UPDATE job_title = VALUES(job_title), min_salary = VALUES(min_salary), max_salary = VALUES(max_salary)"
        )
    }
}
