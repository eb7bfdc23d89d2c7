use crate::libretto::{GradeError, Rejection};
use crate::util::{DateError, SortKeyError};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    Rejected(Rejection),
    InvalidGrade(GradeError),
    InvalidDate(DateError),
    InvalidSortKey(SortKeyError),
    Config(crate::config::Error),
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self {
            Error::Rejected(reason) => write!(f, "record rejected: {}", reason),
            Error::InvalidGrade(error) => write!(f, "invalid grade: {}", error),
            Error::InvalidDate(error) => write!(f, "invalid date: {}", error),
            Error::InvalidSortKey(error) => write!(f, "invalid sort key: {}", error),
            Error::Config(error) => write!(f, "configuration error: {}", error),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Rejected(reason) => Some(reason),
            Error::InvalidGrade(error) => Some(error),
            Error::InvalidDate(error) => Some(error),
            Error::InvalidSortKey(error) => Some(error),
            Error::Config(error) => Some(error),
        }
    }
}

impl From<Rejection> for Error {
    fn from(value: Rejection) -> Self {
        Error::Rejected(value)
    }
}

impl From<GradeError> for Error {
    fn from(value: GradeError) -> Self {
        Error::InvalidGrade(value)
    }
}

impl From<DateError> for Error {
    fn from(value: DateError) -> Self {
        Error::InvalidDate(value)
    }
}

impl From<SortKeyError> for Error {
    fn from(value: SortKeyError) -> Self {
        Error::InvalidSortKey(value)
    }
}

impl From<crate::config::Error> for Error {
    fn from(value: crate::config::Error) -> Self {
        Error::Config(value)
    }
}
