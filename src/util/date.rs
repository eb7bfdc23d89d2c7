use chrono::{DateTime, Local, NaiveDate, Utc};

/// The day an exam was passed.
///
/// Any calendar date is accepted, including dates after today.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Date(NaiveDate);

impl Date {
    const FORMAT: &'static str = "%Y-%m-%d";

    /// Get the current date in the local time zone.
    pub fn today() -> Date {
        Date(Local::now().date_naive())
    }

    /// Access the underlying calendar date.
    pub fn as_naive(&self) -> NaiveDate {
        self.0
    }
}

impl std::fmt::Display for Date {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0.format(Self::FORMAT))
    }
}

impl From<NaiveDate> for Date {
    fn from(value: NaiveDate) -> Self {
        Date(value)
    }
}

impl From<DateTime<Utc>> for Date {
    fn from(value: DateTime<Utc>) -> Self {
        Date(value.date_naive())
    }
}

impl TryFrom<&str> for Date {
    type Error = Error;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        NaiveDate::parse_from_str(value.trim(), Self::FORMAT)
            .map(Date)
            .or(Err(Error::InvalidFormat))
    }
}

impl std::str::FromStr for Date {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Date::try_from(s)
    }
}

impl<'de> serde::Deserialize<'de> for Date {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        deserializer.deserialize_any(DateVisitor)
    }
}

impl serde::Serialize for Date {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(self)
    }
}

#[derive(Default)]
struct DateVisitor;

impl<'de> serde::de::Visitor<'de> for DateVisitor {
    type Value = Date;

    fn expecting(&self, formatter: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            formatter,
            "a unix timestamp or a string in the form '2000-01-31'"
        )
    }

    fn visit_i64<E>(self, unix_time: i64) -> Result<Self::Value, E>
    where
        E: serde::de::Error,
    {
        DateTime::<Utc>::from_timestamp(unix_time, 0)
            .map(Date::from)
            .ok_or_else(|| E::invalid_value(serde::de::Unexpected::Signed(unix_time), &self))
    }

    fn visit_u64<E>(self, unix_time: u64) -> Result<Self::Value, E>
    where
        E: serde::de::Error,
    {
        i64::try_from(unix_time)
            .map_err(|_| E::invalid_value(serde::de::Unexpected::Unsigned(unix_time), &self))
            .and_then(|value| self.visit_i64(value))
    }

    fn visit_str<E>(self, v: &str) -> Result<Self::Value, E>
    where
        E: serde::de::Error,
    {
        Date::try_from(v).map_err(|_| E::invalid_value(serde::de::Unexpected::Str(v), &self))
    }
}

/// An error raised while constructing a date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// The text is not a date in the form `YYYY-MM-DD`.
    InvalidFormat,
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Error::InvalidFormat => "the date is not in the form YYYY-MM-DD",
        })
    }
}

impl std::error::Error for Error {}
