use std::fmt::Debug;

pub mod env_args;
pub mod test;
pub mod validation;

/// Build a closure that logs the error it is given and returns `value_to_return` instead.
/// Handy with `map_err` when the caller only cares about a status, not the underlying error.
pub fn log_error_and_return<E: Debug, T>(value_to_return: T) -> impl FnOnce(E) -> T {
    |e| {
        error!("{e:#?}");
        value_to_return
    }
}

/// Same as [log_error_and_return], with `context` logged on top of the error.
pub fn log_message_and_return<E: Debug, T>(
    context: &str,
    value_to_return: T,
) -> impl FnOnce(E) -> T {
    move |error| {
        error!("{context} [error: {error:#?}]");
        value_to_return
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::database::error::DatabaseError;
    use rocket::http::Status;

    #[test]
    fn should_swap_error_for_status() {
        let result: Result<(), Status> =
            Err(DatabaseError::NotFound).map_err(log_error_and_return(Status::InternalServerError));

        assert_eq!(Err(Status::InternalServerError), result);
    }

    #[test]
    fn should_swap_error_for_status_with_context() {
        let result: Result<(), Status> = Err(DatabaseError::ConnectionFailed).map_err(
            log_message_and_return("Can't load events", Status::ServiceUnavailable),
        );

        assert_eq!(Err(Status::ServiceUnavailable), result);
    }
}
