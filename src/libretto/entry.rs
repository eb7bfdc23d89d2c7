use std::{
    cell::{Ref, RefCell},
    rc::Rc,
};

use super::{Grade, Record};
use crate::util::Date;

/// A record stored within a transcript.
///
/// Cloning an entry does NOT copy the record: both handles point to the same instance and a grade change through
/// one of them is visible through the other. Use [`Entry::detach`] to get an independent copy.
#[derive(Debug, Clone)]
pub struct Entry(Rc<RefCell<Record>>);

impl Entry {
    pub fn new(record: Record) -> Self {
        Entry(Rc::new(RefCell::new(record)))
    }

    /// Borrow the shared record.
    ///
    /// The returned guard must be dropped before the grade is changed through any handle of the same record,
    /// otherwise [`Entry::set_grade`] panics.
    pub fn borrow(&self) -> Ref<'_, Record> {
        self.0.borrow()
    }

    pub fn course(&self) -> String {
        self.0.borrow().course().to_owned()
    }

    pub fn grade(&self) -> Grade {
        self.0.borrow().grade()
    }

    /// Change the grade for every holder of this entry.
    ///
    /// # Panics
    ///
    /// Panics if a guard returned by [`Entry::borrow`] on this record is still alive.
    pub fn set_grade(&self, grade: Grade) {
        self.0.borrow_mut().set_grade(grade);
    }

    pub fn date(&self) -> Option<Date> {
        self.0.borrow().date()
    }

    /// Copy the record into a value sharing nothing with this entry.
    pub fn detach(&self) -> Record {
        self.0.borrow().clone()
    }

    /// Check if both entries refer to the very same record instance.
    pub fn ptr_eq(&self, other: &Entry) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl From<Record> for Entry {
    fn from(value: Record) -> Self {
        Entry::new(value)
    }
}

impl PartialEq for Entry {
    fn eq(&self, other: &Self) -> bool {
        self.ptr_eq(other) || *self.borrow() == *other.borrow()
    }
}

impl Eq for Entry {}

impl std::fmt::Display for Entry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        std::fmt::Display::fmt(&*self.borrow(), f)
    }
}

impl serde::Serialize for Entry {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serde::Serialize::serialize(&*self.borrow(), serializer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clone_aliases_record() {
        let entry = Entry::from(Record::new("Analisi I", Grade::new(24), None));
        let alias = entry.clone();

        alias.set_grade(Grade::new(27));
        assert_eq!(entry.grade(), Grade::new(27));
        assert!(entry.ptr_eq(&alias));
    }

    #[test]
    fn test_detach_is_independent() {
        let entry = Entry::from(Record::new("Analisi I", Grade::new(24), None));
        let mut detached = entry.detach();

        detached.set_grade(Grade::new(30));
        assert_eq!(entry.grade(), Grade::new(24));
        assert_eq!(detached, *entry.borrow());
    }

    #[test]
    fn test_equality_follows_course() {
        let first = Entry::from(Record::new("Analisi I", Grade::new(24), None));
        let second = Entry::from(Record::new("Analisi I", Grade::new(30), None));
        let third = Entry::from(Record::new("Fisica I", Grade::new(24), None));

        assert_eq!(first, second);
        assert!(!first.ptr_eq(&second));
        assert_ne!(first, third);
    }

    #[test]
    fn test_course_does_not_hold_borrow() {
        let entry = Entry::from(Record::new("Analisi I", Grade::new(24), None));
        let alias = entry.clone();

        let course = entry.course();
        alias.set_grade(Grade::new(28));
        assert_eq!(course, "Analisi I");
        assert_eq!(entry.grade(), Grade::new(28));
    }

    #[test]
    fn test_accessors() {
        let date = Date::try_from("2019-09-12").expect("valid date");
        let entry = Entry::from(Record::new("Chimica", Grade::new(22), Some(date)));

        assert_eq!(entry.course(), "Chimica");
        assert_eq!(entry.date(), Some(date));
        assert_eq!(entry.to_string(), "Chimica: 22 (2019-09-12)");
        assert_eq!(
            serde_json::to_string(&entry).expect("valid serialization"),
            r#"{"course":"Chimica","grade":22,"date":"2019-09-12"}"#
        );
    }
}
