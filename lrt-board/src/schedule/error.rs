//! Schedule client error types.

/// Errors from the schedule fetcher.
///
/// Transport problems and "the service answered but has no usable
/// schedule" are distinct variants, but the board layer treats them
/// the same way: clear the snapshot and show the no-data state.
#[derive(Debug, thiserror::Error)]
pub enum ScheduleError {
    /// HTTP request failed (network error, timeout, etc.)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// API returned a non-success HTTP status
    #[error("API error {status}: {message}")]
    Api { status: u16, message: String },

    /// Failed to parse response JSON
    #[error("JSON parse error: {message}")]
    Json {
        message: String,
        body: Option<String>,
    },

    /// Transport succeeded but the response status marks the schedule
    /// as unusable
    #[error("no usable schedule (status {0})")]
    Unavailable(i32),
}

impl ScheduleError {
    /// Whether this is the data-unavailable case rather than a
    /// transport failure.
    pub fn is_unavailable(&self) -> bool {
        matches!(self, ScheduleError::Unavailable(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = ScheduleError::Api {
            status: 500,
            message: "Internal Server Error".into(),
        };
        assert_eq!(err.to_string(), "API error 500: Internal Server Error");

        let err = ScheduleError::Unavailable(0);
        assert_eq!(err.to_string(), "no usable schedule (status 0)");

        let err = ScheduleError::Json {
            message: "expected value".into(),
            body: Some("<html>".into()),
        };
        assert!(err.to_string().contains("JSON parse error"));
    }

    #[test]
    fn unavailable_classification() {
        assert!(ScheduleError::Unavailable(0).is_unavailable());
        assert!(
            !ScheduleError::Api {
                status: 502,
                message: String::new(),
            }
            .is_unavailable()
        );
    }
}
