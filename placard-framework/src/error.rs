use std::fmt;

/// Fatal registry construction failures. Any of these means a broken
/// deployment; the process must not serve a request after one occurs.
#[derive(Debug)]
pub enum ConfigurationError {
    /// A registered controller declares no usable route (empty path or name).
    MissingRoute { position: usize },
    /// Two controllers declare the same route name.
    DuplicateName { name: String },
    /// Two controllers declare the same request path.
    DuplicatePath { path: String },
}

impl fmt::Display for ConfigurationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigurationError::MissingRoute { position } => {
                write!(f, "Controller at position {} declares no route", position)
            }
            ConfigurationError::DuplicateName { name } => {
                write!(f, "Duplicate route name `{}`", name)
            }
            ConfigurationError::DuplicatePath { path } => {
                write!(f, "Duplicate route path `{}`", path)
            }
        }
    }
}

impl std::error::Error for ConfigurationError {}

/// Per-request lookup failures. `PathNotFound` is the expected 404 case;
/// `NameNotFound` means internal link construction asked for a route that
/// does not exist, which callers should treat as a configuration bug.
#[derive(Debug)]
pub enum NotFoundError {
    PathNotFound { path: String },
    NameNotFound { name: String },
}

impl fmt::Display for NotFoundError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NotFoundError::PathNotFound { path } => {
                write!(f, "No route found for path `{}`", path)
            }
            NotFoundError::NameNotFound { name } => {
                write!(f, "No route found for name `{}`", name)
            }
        }
    }
}

impl std::error::Error for NotFoundError {}
