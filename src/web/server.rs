use crate::database::DatabasePool;
use crate::tools::env_args::retrieve_parsed_arg_value;
use crate::web::api::server::ApiServer;
use crate::web::frontend::server::FrontendServer;
use rocket::{Build, Rocket};

const PORT_ARG: &str = "--port";
const DEFAULT_PORT: u16 = 8000;

/// A part of the app (API, frontend) plugging its states, routes and catchers into Rocket.
pub trait Server {
    fn configure(&self, rocket_build: Rocket<Build>) -> Rocket<Build>;
}

pub fn build_server(pool: DatabasePool) -> Rocket<Build> {
    let port = get_port();
    let rocket_build = rocket::build()
        .configure(rocket::Config::figment().merge(("port", port)))
        .manage(pool);

    let servers: Vec<Box<dyn Server>> =
        vec![Box::new(ApiServer::new()), Box::new(FrontendServer::new())];
    servers
        .iter()
        .fold(rocket_build, |rocket_build, server| server.configure(rocket_build))
}

fn get_port() -> u16 {
    retrieve_parsed_arg_value(PORT_ARG).unwrap_or(DEFAULT_PORT)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tools::env_args::with_env_args;
    use parameterized::{ide, parameterized};

    ide!();

    #[test]
    fn should_get_custom_port() {
        let port = with_env_args(vec![format!("{PORT_ARG}=10")], get_port);

        assert_eq!(10, port);
    }

    #[parameterized(args = {
        vec![format!("{PORT_ARG}=doe")],
        vec![format!("{PORT_ARG}=")],
        vec![format!("{PORT_ARG}=70000")],
        vec![]
    })]
    fn should_get_default_port(args: Vec<String>) {
        let port = with_env_args(args, get_port);

        assert_eq!(DEFAULT_PORT, port);
    }
}
