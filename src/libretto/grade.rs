/// The mark of a passed exam, conventionally between 18 and 30.
///
/// No range is enforced: callers are responsible for passing sensible values. The only exception is the sign: a
/// grade is never negative, so negative numbers are rejected when parsing or deserializing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Grade(u32);

impl Grade {
    /// The lowest grade which counts as a pass.
    pub const MIN_PASSING: Grade = Grade(18);
    /// The highest regular grade.
    pub const MAX: Grade = Grade(30);

    pub const fn new(value: u32) -> Self {
        Grade(value)
    }

    pub const fn value(self) -> u32 {
        self.0
    }

    /// Check if the grade counts as a pass.
    pub fn is_passing(self) -> bool {
        self >= Self::MIN_PASSING
    }

    /// Raise the grade by `increment`, never exceeding `cap`.
    pub fn raised(self, increment: u32, cap: Grade) -> Grade {
        std::cmp::min(Grade(self.0.saturating_add(increment)), cap)
    }
}

impl From<u32> for Grade {
    fn from(value: u32) -> Self {
        Grade(value)
    }
}

impl From<Grade> for u32 {
    fn from(value: Grade) -> Self {
        value.0
    }
}

impl PartialEq<u32> for Grade {
    fn eq(&self, other: &u32) -> bool {
        self.0 == *other
    }
}

impl std::fmt::Display for Grade {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for Grade {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Grade(u32::from_str(s.trim())?))
    }
}

impl<'de> serde::Deserialize<'de> for Grade {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        deserializer.deserialize_any(GradeVisitor)
    }
}

impl serde::Serialize for Grade {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_u32(self.0)
    }
}

struct GradeVisitor;

impl<'de> serde::de::Visitor<'de> for GradeVisitor {
    type Value = Grade;

    fn expecting(&self, formatter: &mut std::fmt::Formatter) -> std::fmt::Result {
        formatter.write_str("a non-negative grade like 28 or \"28\"")
    }

    fn visit_u64<E>(self, grade: u64) -> Result<Self::Value, E>
    where
        E: serde::de::Error,
    {
        u32::try_from(grade)
            .map(Grade)
            .map_err(|_| E::invalid_value(serde::de::Unexpected::Unsigned(grade), &self))
    }

    fn visit_i64<E>(self, grade: i64) -> Result<Self::Value, E>
    where
        E: serde::de::Error,
    {
        u32::try_from(grade)
            .map(Grade)
            .map_err(|_| E::invalid_value(serde::de::Unexpected::Signed(grade), &self))
    }

    fn visit_str<E>(self, v: &str) -> Result<Self::Value, E>
    where
        E: serde::de::Error,
    {
        v.parse().map_err(|error: Error| E::custom(error.to_string()))
    }
}

/// An error occuring while parsing a grade.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    InvalidNumber,
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Error::InvalidNumber => "The grade is not a non-negative integer",
        })
    }
}

impl std::error::Error for Error {}

impl From<std::num::ParseIntError> for Error {
    fn from(_: std::num::ParseIntError) -> Self {
        Self::InvalidNumber
    }
}
