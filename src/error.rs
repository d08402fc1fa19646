//! Crate-level error types.

use std::fmt;

/// Errors produced by the rondo crate.
#[derive(Debug)]
pub enum RondoError {
    /// An option value is out of its valid range.
    InvalidOptions(String),
    /// The title catalogue cannot serve every content index.
    Catalog(String),
    /// Generic I/O failure.
    Io(std::io::Error),
    /// TOML options parsing/serialization failure.
    OptionsParse(String),
    /// The host surface (DOM, window) rejected an operation.
    Host(String),
}

impl fmt::Display for RondoError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidOptions(msg) => write!(f, "invalid options: {msg}"),
            Self::Catalog(msg) => write!(f, "title catalog error: {msg}"),
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::OptionsParse(msg) => {
                write!(f, "options parse error: {msg}")
            }
            Self::Host(msg) => write!(f, "host error: {msg}"),
        }
    }
}

impl std::error::Error for RondoError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for RondoError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_names_the_failing_area() {
        let err = RondoError::InvalidOptions("damping must be in (0, 1]".into());
        assert_eq!(err.to_string(), "invalid options: damping must be in (0, 1]");
        let err = RondoError::Host("no window".into());
        assert_eq!(err.to_string(), "host error: no window");
    }

    #[test]
    fn io_errors_keep_their_source() {
        use std::error::Error;
        let err: RondoError =
            std::io::Error::new(std::io::ErrorKind::NotFound, "gone").into();
        assert!(err.source().is_some());
        assert!(RondoError::Catalog("empty".into()).source().is_none());
    }
}
