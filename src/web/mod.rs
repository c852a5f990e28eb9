use crate::database::DatabasePool;
use crate::web::server::build_server;
use rocket::{Build, Rocket};

mod api;
pub(crate) mod authentication;
pub(crate) mod error;
mod frontend;
mod server;
pub(crate) mod session_storage;

pub fn start_servers(pool: DatabasePool) -> Rocket<Build> {
    build_server(pool)
}
