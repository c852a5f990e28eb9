use crate::database::error::DatabaseError;
use crate::database::error::DatabaseError::{ConnectionFailed, MissingDatabaseUrl};
use crate::database::migrations::run_migrations;
use crate::error::Result;
use crate::tools::env_args::retrieve_expected_arg_value;
use crate::tools::log_error_and_return;
use diesel::SqliteConnection;
use diesel::connection::SimpleConnection;
use diesel::r2d2::{ConnectionManager, Pool};
use r2d2::CustomizeConnection;

pub(crate) mod dao;
pub(crate) mod error;
mod migrations;
mod model;
mod schema;

pub type DatabasePool = Pool<ConnectionManager<SqliteConnection>>;

/// SQLite forgets its pragmas once a connection is closed,
/// so they are applied each time the pool hands out a connection.
#[derive(Debug)]
struct ConnectionOptions {
    busy_timeout_ms: u32,
}

impl CustomizeConnection<SqliteConnection, diesel::r2d2::Error> for ConnectionOptions {
    fn on_acquire(&self, connection: &mut SqliteConnection) -> Result<(), diesel::r2d2::Error> {
        connection
            .batch_execute(&format!(
                "PRAGMA foreign_keys = ON; PRAGMA busy_timeout = {};",
                self.busy_timeout_ms
            ))
            .map_err(diesel::r2d2::Error::QueryError)
    }
}

/// Open the database whose location is given by `--database-url`
/// and bring its schema up to date.
pub fn init_db() -> Result<DatabasePool> {
    let database_url = retrieve_expected_arg_value("--database-url", MissingDatabaseUrl)?;
    let pool = build_pool(&database_url)?;
    let mut connection = pool
        .get()
        .map_err(log_error_and_return(ConnectionFailed))?;
    run_migrations(&mut *connection)?;
    info!("Database is ready [url: {database_url}]");

    Ok(pool)
}

fn build_pool(database_url: &str) -> Result<DatabasePool, DatabaseError> {
    Pool::builder()
        .connection_customizer(Box::new(ConnectionOptions {
            busy_timeout_ms: 5000,
        }))
        .build(ConnectionManager::<SqliteConnection>::new(database_url))
        .map_err(log_error_and_return(ConnectionFailed))
}

/// Run `function` against a freshly migrated database living in a temporary folder.
#[cfg(test)]
pub fn with_temp_database<F, T>(function: F) -> T
where
    F: FnOnce(DatabasePool) -> T,
{
    let temp_dir = crate::tools::test::tests::temp_dir();
    let database_url = temp_dir.join("database.db").to_str().unwrap().to_owned();
    let pool = build_pool(&database_url).unwrap();
    run_migrations(&mut *pool.get().unwrap()).unwrap();

    let result = function(pool);
    let _ = std::fs::remove_dir_all(temp_dir);
    result
}
