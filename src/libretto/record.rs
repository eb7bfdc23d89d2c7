use serde::{Deserialize, Serialize};

use super::Grade;
use crate::util::Date;

/// A passed exam.
///
/// Two records are considered equal if they refer to the same course, regardless of grade and date.
/// This allows finding the record of a course by comparing against a lookup key.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Record {
    course: String,
    grade: Grade,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    date: Option<Date>,
}

impl Record {
    pub fn new(course: impl Into<String>, grade: Grade, date: Option<Date>) -> Self {
        Record {
            course: course.into(),
            grade,
            date,
        }
    }

    /// A record only usable for lookups by course.
    pub(crate) fn lookup_key(course: &str) -> Self {
        Record::new(course, Grade::default(), None)
    }

    pub fn course(&self) -> &str {
        &self.course
    }

    pub fn grade(&self) -> Grade {
        self.grade
    }

    pub fn set_grade(&mut self, grade: Grade) {
        self.grade = grade;
    }

    pub fn date(&self) -> Option<Date> {
        self.date
    }

    /// Compare two records by their grade. Records with the same grade compare as equal.
    pub fn cmp_by_grade(a: &Record, b: &Record) -> std::cmp::Ordering {
        a.grade.cmp(&b.grade)
    }

    /// Check whether `other` has the same course and the same grade.
    pub fn is_same_result(&self, other: &Record) -> bool {
        self == other && self.grade == other.grade
    }
}

impl PartialEq for Record {
    fn eq(&self, other: &Self) -> bool {
        self.course == other.course
    }
}

impl Eq for Record {}

impl std::hash::Hash for Record {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.course.hash(state);
    }
}

impl PartialOrd for Record {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Record {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.course.cmp(&other.course)
    }
}

impl std::fmt::Display for Record {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.course, self.grade)?;
        if let Some(date) = self.date {
            write!(f, " ({})", date)?;
        }
        Ok(())
    }
}
