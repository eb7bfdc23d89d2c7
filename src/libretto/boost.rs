use super::Grade;

/// The rule used to improve every grade of a transcript.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoostRule {
    /// Grades at or above this value receive `high_increment`.
    pub high_threshold: Grade,
    pub high_increment: u32,
    /// Grades at or above this value (but below `high_threshold`) receive `low_increment`.
    pub low_threshold: Grade,
    pub low_increment: u32,
    /// The upper bound for grades raised by `high_increment`.
    pub cap: Grade,
}

impl BoostRule {
    pub const DEFAULT: BoostRule = BoostRule {
        high_threshold: Grade::new(24),
        high_increment: 2,
        low_threshold: Grade::MIN_PASSING,
        low_increment: 1,
        cap: Grade::MAX,
    };

    /// Calculate the improved grade. Grades below `low_threshold` stay untouched.
    pub fn apply(&self, grade: Grade) -> Grade {
        if grade >= self.high_threshold {
            grade.raised(self.high_increment, self.cap)
        } else if grade >= self.low_threshold {
            Grade::new(grade.value().saturating_add(self.low_increment))
        } else {
            grade
        }
    }
}

impl Default for BoostRule {
    fn default() -> Self {
        Self::DEFAULT
    }
}
