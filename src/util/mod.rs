mod date;
mod ordering;

pub use self::date::{Date, Error as DateError};
pub use self::ordering::{Error as SortKeyError, SortKey};
