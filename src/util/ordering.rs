/// The criterion a transcript is sorted by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortKey {
    /// Alphabetically by course name.
    #[default]
    Course,
    /// Numerically by grade.
    Grade,
}

impl SortKey {
    /// The names accepted when parsing a key.
    pub const NAMES: &'static [&'static str] = &["course", "grade"];
}

impl std::fmt::Display for SortKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            SortKey::Course => "course",
            SortKey::Grade => "grade",
        })
    }
}

impl std::str::FromStr for SortKey {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            value if value.eq_ignore_ascii_case("course") => Ok(SortKey::Course),
            value if value.eq_ignore_ascii_case("grade") => Ok(SortKey::Grade),
            _ => Err(Error::UnknownKey),
        }
    }
}

impl<'de> serde::Deserialize<'de> for SortKey {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let value = String::deserialize(deserializer)?;
        value
            .parse()
            .map_err(|_| serde::de::Error::unknown_variant(&value, Self::NAMES))
    }
}

impl serde::Serialize for SortKey {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(self)
    }
}

/// An error returned while parsing a sort key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// The key names neither the course nor the grade.
    UnknownKey,
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "unknown sort key, expected one of: {}", SortKey::NAMES.join(", "))
    }
}

impl std::error::Error for Error {}
