use crate::libretto::{BoostRule, Grade, GradeError, Transcript};
use crate::util::{SortKey, SortKeyError};

/// The tunable parameters for working with a transcript.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Config {
    pub boost: BoostRule,
    pub prune_threshold: Grade,
    pub sort: SortKey,
}

impl Config {
    pub const ENV_PRUNE_THRESHOLD: &'static str = "LIBRETTO_PRUNE_THRESHOLD";
    pub const ENV_SORT: &'static str = "LIBRETTO_SORT";
    pub const ENV_BOOST_CAP: &'static str = "LIBRETTO_BOOST_CAP";

    /// Read the configuration from the environment, falling back to the defaults for unset variables.
    pub fn from_env() -> Result<Self, Error> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, Error> {
        let defaults = Config::default();

        let prune_threshold = match lookup(Self::ENV_PRUNE_THRESHOLD) {
            Some(value) => value
                .parse::<Grade>()
                .map_err(|error| Error::InvalidGrade(Self::ENV_PRUNE_THRESHOLD, error))?,
            None => defaults.prune_threshold,
        };

        let cap = match lookup(Self::ENV_BOOST_CAP) {
            Some(value) => value
                .parse::<Grade>()
                .map_err(|error| Error::InvalidGrade(Self::ENV_BOOST_CAP, error))?,
            None => defaults.boost.cap,
        };

        let sort = match lookup(Self::ENV_SORT) {
            Some(value) => value
                .parse::<SortKey>()
                .map_err(|error| Error::InvalidSortKey(Self::ENV_SORT, error))?,
            None => defaults.sort,
        };

        Ok(Config {
            boost: BoostRule {
                cap,
                ..defaults.boost
            },
            prune_threshold,
            sort,
        })
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            boost: BoostRule::DEFAULT,
            prune_threshold: Transcript::DEFAULT_PRUNE_THRESHOLD,
            sort: SortKey::default(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    InvalidGrade(&'static str, GradeError),
    InvalidSortKey(&'static str, SortKeyError),
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::InvalidGrade(variable, error) => {
                write!(f, "env variable {} is not a valid grade: {}", variable, error)
            }
            Error::InvalidSortKey(variable, error) => {
                write!(f, "env variable {} is not a valid sort key: {}", variable, error)
            }
        }
    }
}

impl std::error::Error for Error {}
