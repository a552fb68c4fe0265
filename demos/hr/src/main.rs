use sqlx::{
    ColumnIndex, Connection, Database, Decode, Encode, Executor, IntoArguments, MySqlConnection,
    PgConnection, SqliteConnection, Type,
};
use std::{env, error::Error};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;
use upsert::{
    hr::{Country, Job},
    UpsertError,
};
use upsert_sql::{upsert, ConnectionOptions, Dialect, Driver};

const SERVICE_NAME: &str = "orcl";

/// Reads the connection options from the `HR_DATABASE` environment variable as JSON, if present.
fn options() -> Result<ConnectionOptions, serde_json::Error> {
    match env::var("HR_DATABASE") {
        Ok(json) => serde_json::from_str(&json),
        Err(_) => Ok(ConnectionOptions::new(
            Driver::Postgres,
            "localhost",
            SERVICE_NAME,
        )),
    }
}

async fn write<C>(db: &mut C) -> Result<(), UpsertError>
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
    let spain = Country::new("ES", 1, "Spain");
    let affected = upsert(&mut *db, &spain).await?;

    info!(country = spain.country_id(), "{affected}");

    let ciso = Job::new(
        "SEC_CISO",
        "Chief Information Security Officer",
        11600,
        18350,
    );
    let affected = upsert(&mut *db, &ciso).await?;

    info!(job = ciso.job_id(), "{affected}");

    Ok(())
}

async fn run<C>(url: &str) -> Result<(), Box<dyn Error>>
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
    let mut db = C::connect(url).await?;

    info!("connection established");

    // the connection is closed whether or not the writes succeed
    let result = write(&mut db).await;
    let closed = db.close().await;

    settle(result, closed)
}

/// Reports the failed writes, if any, ahead of a failure to close the connection.
fn settle(
    written: Result<(), UpsertError>,
    closed: Result<(), sqlx::Error>,
) -> Result<(), Box<dyn Error>> {
    written?;
    Ok(closed?)
}

#[tokio::main]
async fn main() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt().with_env_filter(filter).init();

    let options = match options() {
        Ok(options) => options,
        Err(error) => {
            error!(%error, "invalid HR_DATABASE options");
            return;
        }
    };
    let (driver, url) = match options.driver().and_then(|driver| Ok((driver, options.url()?))) {
        Ok(parts) => parts,
        Err(error) => {
            error!(%error, "invalid connection options");
            return;
        }
    };
    let result = match driver {
        Driver::Postgres => run::<PgConnection>(&url).await,
        Driver::MySql => run::<MySqlConnection>(&url).await,
        Driver::Sqlite => run::<SqliteConnection>(&url).await,
    };

    if let Err(error) = result {
        error!(%error, "error while working with the database");
    }
}
