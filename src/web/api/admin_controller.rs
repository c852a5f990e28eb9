use crate::admin::authenticate;
use crate::admin::config::AdminConfig;
use crate::admin::credentials::{AdminCredentials, AdminSession};
use crate::database::{DatabasePool, dao};
use crate::web::authentication::{ADMIN_SESSION_COOKIE, get_session_cookie};
use crate::web::error::ApiError;
use crate::web::session_storage::SessionStorage;
use dto::dashboard::DashboardStatistics;
use rocket::State;
use rocket::http::{Cookie, CookieJar, Status};
use rocket::serde::json::Json;
use rocket::time::Duration;
use std::sync::Mutex;
use uuid::Uuid;

/// Log an admin in.
/// If the credentials match the configured ones,
/// then a new UUID is created and the session is stored with this UUID.
/// The UUID is returned to the caller through a private cookie, so that it is their new access token.
#[post("/admin/login", format = "application/json", data = "<credentials>")]
pub async fn login(
    admin_config: &State<AdminConfig>,
    session_storage: &State<Mutex<SessionStorage>>,
    cookie_jar: &CookieJar<'_>,
    credentials: Json<AdminCredentials>,
) -> Result<Status, ApiError> {
    let credentials = credentials.into_inner();
    authenticate(admin_config, &credentials)?;

    let mut session_storage = session_storage.lock().map_err(ApiError::internal)?;
    let token = Uuid::new_v4().to_string();
    let cookie = Cookie::build((ADMIN_SESSION_COOKIE.to_owned(), token.clone()))
        .max_age(Duration::days(1))
        .build();
    cookie_jar.add_private(cookie);
    session_storage.store(
        token,
        AdminSession::new(credentials.login().trim().to_owned()),
    );
    info!("Admin logged in [login: {}]", credentials.login().trim());

    Ok(Status::Ok)
}

#[post("/admin/logout")]
pub async fn logout(
    session_storage: &State<Mutex<SessionStorage>>,
    cookie_jar: &CookieJar<'_>,
    session: AdminSession,
) -> Result<Status, ApiError> {
    if let Some(cookie) = get_session_cookie(cookie_jar) {
        let mut session_storage = session_storage.lock().map_err(ApiError::internal)?;
        session_storage.remove(cookie.value());
    }
    cookie_jar.remove_private(ADMIN_SESSION_COOKIE);
    info!("Admin logged out [login: {}]", session.login());

    Ok(Status::NoContent)
}

#[get("/admin/dashboard")]
pub async fn dashboard(
    pool: &State<DatabasePool>,
    _session: AdminSession,
) -> Result<Json<DashboardStatistics>, ApiError> {
    let mut connection = pool.get()?;
    let statistics = dao::statistics::compute(&mut connection)?;

    Ok(Json(statistics))
}
