//! Result helper extensions for HTTP handlers.

use std::fmt::Display;

use salvo::prelude::StatusError;
use tracing::error;

/// Map any error to a logged internal server error.
pub(crate) trait ResultExt<T> {
    fn or_500(self, context: &str) -> Result<T, StatusError>;
}

impl<T, E> ResultExt<T> for Result<T, E>
where
    E: Display,
{
    fn or_500(self, context: &str) -> Result<T, StatusError> {
        self.map_err(|error| {
            error!("{context}: {error}");

            StatusError::internal_server_error()
        })
    }
}

#[cfg(test)]
mod tests {
    use salvo::http::StatusCode;

    use super::*;

    #[test]
    fn errors_become_opaque_500s() {
        let result: Result<(), &str> = Err("connection reset");

        let error = result.or_500("failed to load cart").err();

        assert_eq!(error.map(|e| e.code), Some(StatusCode::INTERNAL_SERVER_ERROR));
    }

    #[test]
    fn ok_values_pass_through() {
        let result: Result<u64, &str> = Ok(3_600);

        assert_eq!(result.or_500("unused").ok(), Some(3_600));
    }
}
