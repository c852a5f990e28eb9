mod admin;
mod content;
mod database;
mod error;
mod registration;
mod student;
mod tools;
mod web;

#[macro_use]
extern crate rocket;

use crate::database::init_db;
use crate::web::start_servers;

#[launch]
fn rocket() -> _ {
    env_logger::init();

    let pool = match init_db() {
        Ok(pool) => pool,
        Err(error) => {
            error!("Can't initialize the database, aborting...\n{error:#?}");
            panic!("Initialization failed, aborting.");
        }
    };
    start_servers(pool)
}
