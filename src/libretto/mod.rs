mod boost;
mod entry;
mod grade;
mod record;
mod transcript;


pub use self::boost::BoostRule;
pub use self::entry::Entry;
pub use self::grade::{Error as GradeError, Grade};
pub use self::record::Record;
pub use self::transcript::{Rejection, Transcript};
