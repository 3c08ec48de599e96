use std::{fmt, path::Path};

/// Problems encountered reading a file before any parsing happens.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadingError<'i> {
    pub problem: String,
    pub details: String,
    pub filename: &'i Path,
}

impl<'i> fmt::Display for LoadingError<'i> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self
            .details
            .is_empty()
        {
            write!(f, "{}: {}", self.filename.display(), self.problem)
        } else {
            write!(
                f,
                "{}: {}: {}",
                self.filename.display(),
                self.problem,
                self.details
            )
        }
    }
}

/// A selections file (a previous export) that couldn't be understood. Line
/// and column are one-origin, as reported by serde_json.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectionsError {
    pub line: usize,
    pub column: usize,
    pub details: String,
}

impl From<serde_json::Error> for SelectionsError {
    fn from(error: serde_json::Error) -> Self {
        SelectionsError {
            line: error.line(),
            column: error.column(),
            details: error.to_string(),
        }
    }
}

impl fmt::Display for SelectionsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "malformed selections at {}:{}: {}",
            self.line, self.column, self.details
        )
    }
}

impl std::error::Error for SelectionsError {}
