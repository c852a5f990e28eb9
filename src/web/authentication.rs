use crate::admin::credentials::AdminSession;
use crate::tools::log_error_and_return;
use crate::web::session_storage::SessionStorage;
use rocket::State;
use rocket::http::{Cookie, CookieJar, Status};
use rocket::outcome::{Outcome, try_outcome};
use rocket::request::{self, FromRequest, Request};
use std::sync::Mutex;

pub const ADMIN_SESSION_COOKIE: &str = "Admin-Session";

/// If an endpoint is restricted to admins,
/// then its implementation should require an [AdminSession] parameter.
/// Rocket will summon this guard to ensure the caller logged in beforehand.
/// If they didn't, or if their session expired, then the caller receives an Unauthorized status.
///
/// The session token is passed from the caller to the server using an `Admin-Session` private cookie.
#[rocket::async_trait]
impl<'r> FromRequest<'r> for AdminSession {
    type Error = ();

    async fn from_request(req: &'r Request<'_>) -> request::Outcome<Self, Self::Error> {
        let Some(cookie) = get_session_cookie(req.cookies()) else {
            return Outcome::Forward(Status::Unauthorized);
        };

        let session_storage = try_outcome!(req.guard::<&State<Mutex<SessionStorage>>>().await);
        match session_storage.lock() {
            Ok(mut session_storage) => match session_storage.get(cookie.value()) {
                None => Outcome::Forward(Status::Unauthorized),
                Some(session) => Outcome::Success(session.clone()),
            },
            Err(error) => {
                log_error_and_return(Outcome::Error((Status::InternalServerError, ())))(error)
            }
        }
    }
}

#[cfg(not(test))]
pub fn get_session_cookie(cookie_jar: &CookieJar<'_>) -> Option<Cookie<'static>> {
    cookie_jar.get_private(ADMIN_SESSION_COOKIE)
}

/// For tests, we have to ensure the cookie is there, pending or not. Otherwise, it doesn't work.
/// Thus, the need to hijack the normal method.
#[cfg(test)]
pub fn get_session_cookie(cookie_jar: &CookieJar<'_>) -> Option<Cookie<'static>> {
    cookie_jar.get_pending(ADMIN_SESSION_COOKIE)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rocket::local::asynchronous::Client;

    const TOKEN: &str = "0ea9a5fb-0f46-4057-902a-2552ed956bde";

    #[async_test]
    async fn should_request_succeed() {
        let session = AdminSession::new("admin".to_owned());
        let mut session_storage = SessionStorage::default();
        session_storage.store(TOKEN.to_owned(), session.clone());

        let rocket = rocket::build().manage(Mutex::new(session_storage));
        let client = Client::tracked(rocket).await.unwrap();
        let request = client
            .get("http://localhost")
            .cookie(Cookie::new(ADMIN_SESSION_COOKIE, TOKEN));

        let outcome = AdminSession::from_request(&request).await;
        assert!(outcome.is_success());
        assert_eq!(session, outcome.succeeded().unwrap());
    }

    #[async_test]
    async fn should_request_fail_when_no_matching_session() {
        let rocket = rocket::build().manage(Mutex::new(SessionStorage::default()));
        let client = Client::tracked(rocket).await.unwrap();
        let request = client
            .get("http://localhost")
            .cookie(Cookie::new(ADMIN_SESSION_COOKIE, TOKEN));

        let outcome = AdminSession::from_request(&request).await;
        assert!(outcome.is_forward());
        assert_eq!(Status::Unauthorized, outcome.forwarded().unwrap());
    }

    #[async_test]
    async fn should_request_fail_when_no_cookie() {
        let rocket = rocket::build().manage(Mutex::new(SessionStorage::default()));
        let client = Client::tracked(rocket).await.unwrap();
        let request = client.get("http://localhost");

        let outcome = AdminSession::from_request(&request).await;
        assert!(outcome.is_forward());
        assert_eq!(Status::Unauthorized, outcome.forwarded().unwrap());
    }
}
