//! A personal academic transcript: the exams a student passed, one record per course.

mod config;
mod error;
pub mod libretto;
pub mod util;

pub use self::config::{Config, Error as ConfigError};
pub use self::error::Error;
pub use self::libretto::{BoostRule, Entry, Grade, GradeError, Record, Rejection, Transcript};
pub use self::util::{Date, DateError, SortKey, SortKeyError};
