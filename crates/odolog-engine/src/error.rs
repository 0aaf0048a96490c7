use std::fmt;

/// Result type for odolog-engine operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur in the domain layer
#[derive(Debug)]
pub enum Error {
    /// Input violates a domain rule (negative cost, zero interval, ...)
    Validation(String),

    /// add-part with a name that is already tracked
    DuplicatePart(String),

    /// change-part on a name that is not tracked
    NotFound(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Validation(msg) => write!(f, "Invalid input: {}", msg),
            Error::DuplicatePart(name) => {
                write!(
                    f,
                    "Part '{}' is already tracked. Use change-part to record a change.",
                    name
                )
            }
            Error::NotFound(name) => {
                write!(f, "Part '{}' is not tracked. Add it first with add-part.", name)
            }
        }
    }
}

impl std::error::Error for Error {}
