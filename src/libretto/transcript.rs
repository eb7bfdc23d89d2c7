use tracing::{debug, trace};

use super::{BoostRule, Entry, Grade, Record};
use crate::util::SortKey;

/// The reason a record was refused by a transcript.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rejection {
    /// The course is already recorded with the very same grade.
    Duplicate,
    /// The course is already recorded with another grade.
    Conflict,
}

impl std::fmt::Display for Rejection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Rejection::Duplicate => "the course is already recorded with the same grade",
            Rejection::Conflict => "the course is already recorded with a different grade",
        })
    }
}

impl std::error::Error for Rejection {}

/// The ordered collection of all passed exams of a student.
///
/// A transcript never contains two records for the same course. Records are kept in insertion order until the
/// transcript is sorted explicitly.
#[derive(Debug, Default)]
pub struct Transcript {
    entries: Vec<Entry>,
}

impl Transcript {
    /// The threshold used by [`Transcript::prune`].
    pub const DEFAULT_PRUNE_THRESHOLD: Grade = Grade::new(24);

    /// Create a new, empty transcript.
    pub fn new() -> Self {
        Self::default()
    }

    /// Copy the transcript while sharing the records.
    ///
    /// Grades changed through an entry of one transcript are visible in the other one.
    pub fn shallow_copy(&self) -> Self {
        Transcript {
            entries: self.entries.clone(),
        }
    }

    /// Copy the transcript together with all of its records.
    pub fn deep_copy(&self) -> Self {
        Transcript {
            entries: self
                .entries
                .iter()
                .map(|entry| Entry::new(entry.detach()))
                .collect(),
        }
    }

    /// Add a record unless its course is already present.
    ///
    /// Returns `false` if the record is either a duplicate or in conflict with an existing one. Use
    /// [`Transcript::try_insert`] to learn which of the two happened.
    pub fn insert(&mut self, record: impl Into<Entry>) -> bool {
        self.try_insert(record).is_ok()
    }

    /// Add a record unless its course is already present, reporting why it was refused.
    pub fn try_insert(&mut self, record: impl Into<Entry>) -> Result<(), Rejection> {
        let entry = record.into();
        let rejection = self.classify(&entry.borrow());

        match rejection {
            Some(reason) => {
                debug!(course = %entry.course(), grade = %entry.grade(), %reason, "record rejected");
                Err(reason)
            }
            None => {
                debug!(course = %entry.course(), grade = %entry.grade(), "record inserted");
                self.entries.push(entry);
                Ok(())
            }
        }
    }

    /// Find the stored record of a course.
    pub fn find_by_course(&self, course: &str) -> Option<Entry> {
        let key = Record::lookup_key(course);
        self.entries
            .iter()
            .find(|entry| *entry.borrow() == key)
            .cloned()
    }

    /// Check if the course of `record` is present with the same grade.
    pub fn is_duplicate(&self, record: &Record) -> bool {
        self.classify(record) == Some(Rejection::Duplicate)
    }

    /// Check if the course of `record` is present with a different grade.
    pub fn is_conflict(&self, record: &Record) -> bool {
        self.classify(record) == Some(Rejection::Conflict)
    }

    fn classify(&self, record: &Record) -> Option<Rejection> {
        let existing = self.find_by_course(record.course())?;
        let same_result = existing.borrow().is_same_result(record);
        Some(match same_result {
            true => Rejection::Duplicate,
            false => Rejection::Conflict,
        })
    }

    /// Format all records with the given grade, one per line.
    pub fn filter_by_grade(&self, grade: Grade) -> String {
        self.entries
            .iter()
            .filter(|entry| entry.grade() == grade)
            .map(|entry| format!("{}\n", entry))
            .collect()
    }

    /// Create a new transcript holding the (shared) records with the given grade.
    pub fn extract_by_grade(&self, grade: Grade) -> Transcript {
        self.entries
            .iter()
            .filter(|entry| entry.grade() == grade)
            .cloned()
            .collect()
    }

    /// Create an improved copy of the transcript using the default [`BoostRule`].
    pub fn boost_grades(&self) -> Transcript {
        self.boost_grades_with(&BoostRule::DEFAULT)
    }

    /// Create an improved copy of the transcript. The records of `self` stay untouched.
    pub fn boost_grades_with(&self, rule: &BoostRule) -> Transcript {
        self.entries
            .iter()
            .map(|entry| {
                let mut record = entry.detach();
                record.set_grade(rule.apply(record.grade()));
                record
            })
            .collect()
    }

    /// Sort the records alphabetically by course.
    pub fn sort_by_course(&mut self) {
        trace!(records = self.entries.len(), "sorting by course");
        self.entries.sort_by(|a, b| Ord::cmp(&*a.borrow(), &*b.borrow()));
    }

    /// Sort the records by ascending grade. Records with equal grades keep their relative order.
    pub fn sort_by_grade(&mut self) {
        trace!(records = self.entries.len(), "sorting by grade");
        self.entries
            .sort_by(|a, b| Record::cmp_by_grade(&a.borrow(), &b.borrow()));
    }

    pub fn sort(&mut self, key: SortKey) {
        match key {
            SortKey::Course => self.sort_by_course(),
            SortKey::Grade => self.sort_by_grade(),
        }
    }

    /// Remove all records graded below [`Transcript::DEFAULT_PRUNE_THRESHOLD`].
    pub fn prune(&mut self) -> usize {
        self.prune_below(Self::DEFAULT_PRUNE_THRESHOLD)
    }

    /// Remove all records with a grade strictly below `threshold`, returning how many were dropped.
    pub fn prune_below(&mut self, threshold: Grade) -> usize {
        let doomed: Vec<Entry> = self
            .entries
            .iter()
            .filter(|entry| entry.grade() < threshold)
            .cloned()
            .collect();

        for entry in &doomed {
            debug!(course = %entry.course(), grade = %entry.grade(), %threshold, "record pruned");
        }

        self.entries
            .retain(|entry| !doomed.iter().any(|removed| removed.ptr_eq(entry)));
        doomed.len()
    }

    /// Format all records, one per line.
    pub fn render(&self) -> String {
        self.to_string()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over the (shared) entries in their current order.
    pub fn iter(&self) -> std::slice::Iter<'_, Entry> {
        self.entries.iter()
    }

    /// Copy the current records out of the transcript.
    pub fn records(&self) -> Vec<Record> {
        self.entries.iter().map(Entry::detach).collect()
    }
}

impl<T: Into<Entry>> Extend<T> for Transcript {
    /// Insert every record, silently skipping duplicates and conflicts.
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for record in iter {
            self.insert(record);
        }
    }
}

impl<T: Into<Entry>> FromIterator<T> for Transcript {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut transcript = Transcript::new();
        transcript.extend(iter);
        transcript
    }
}

impl<'a> IntoIterator for &'a Transcript {
    type Item = &'a Entry;
    type IntoIter = std::slice::Iter<'a, Entry>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl std::fmt::Display for Transcript {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for entry in &self.entries {
            writeln!(f, "{}", entry)?;
        }
        Ok(())
    }
}

impl serde::Serialize for Transcript {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_seq(&self.entries)
    }
}

impl<'de> serde::Deserialize<'de> for Transcript {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let records = <Vec<Record> as serde::Deserialize>::deserialize(deserializer)?;
        let mut transcript = Transcript::new();
        for record in records {
            let course = record.course().to_owned();
            transcript.try_insert(record).map_err(|reason| {
                <D::Error as serde::de::Error>::custom(format!(
                    "record for '{}' refused: {}",
                    course, reason
                ))
            })?;
        }
        Ok(transcript)
    }
}
