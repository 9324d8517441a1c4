//! Eligibility and grading rules.
//!
//! Every threshold the tool applies lives here: letter-grade bands, level
//! bands, the eligibility gate, and the intake ranges that reject a student
//! outright. All functions are pure.

use std::ops::RangeInclusive;

use crate::model::{Behavior, LetterGrade, Level, Student, Subject};

/// Ages accepted at intake.
pub const AGE_RANGE: RangeInclusive<u32> = 16..=18;

/// Points per correct quiz answer.
pub const POINTS_PER_QUESTION: u32 = 5;

/// Lowest score that counts as a pass for eligibility.
pub const PASS_SCORE: u32 = 60;

impl LetterGrade {
    /// Letter band for a quiz score.
    pub fn from_score(score: u32) -> Self {
        match score {
            90..=u32::MAX => LetterGrade::AStar,
            80..=89 => LetterGrade::A,
            70..=79 => LetterGrade::B,
            60..=69 => LetterGrade::C,
            _ => LetterGrade::F,
        }
    }
}

impl Level {
    /// Placement tier for a quiz score.
    ///
    /// Level 1 needs strictly more than 80, so a score of exactly 80 is an
    /// `A` that still lands in Level 2.
    pub fn from_score(score: u32) -> Self {
        if score > 80 {
            Level::One
        } else if score >= PASS_SCORE {
            Level::Two
        } else {
            Level::NotQualified
        }
    }
}

impl Subject {
    /// Grades accepted at intake for this subject.
    pub fn accepted_grades(&self) -> RangeInclusive<i64> {
        match self {
            Subject::ComputerScience => 7..=8,
            Subject::Mathematics => 6..=8,
            Subject::English => 5..=8,
        }
    }

    /// Minimum grade this subject needs for eligibility.
    pub fn eligibility_minimum(&self) -> u8 {
        match self {
            Subject::ComputerScience => 6,
            Subject::Mathematics => 5,
            Subject::English => 4,
        }
    }
}

/// Letter grade and level for a quiz score.
pub fn classify(test_score: u32) -> (LetterGrade, Level) {
    (
        LetterGrade::from_score(test_score),
        Level::from_score(test_score),
    )
}

/// Whether a student passes every eligibility clause.
///
/// Only raw intake fields and the test score are consulted; the derived
/// grade and level never are.
pub fn is_eligible(student: &Student) -> bool {
    AGE_RANGE.contains(&student.age)
        && student.cs_grade >= Subject::ComputerScience.eligibility_minimum()
        && student.math_grade >= Subject::Mathematics.eligibility_minimum()
        && student.eng_grade >= Subject::English.eligibility_minimum()
        && student.behavior == Behavior::Good
        && student.test_score >= PASS_SCORE
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Gender;

    fn eligible_student() -> Student {
        Student {
            name: "Sam".into(),
            age: 16,
            gender: Gender::Female,
            cs_grade: 6,
            math_grade: 5,
            eng_grade: 4,
            behavior: Behavior::Good,
            test_score: 60,
            grade: None,
            level: None,
        }
    }

    #[test]
    fn letter_bands() {
        assert_eq!(classify(100).0, LetterGrade::AStar);
        assert_eq!(classify(90).0, LetterGrade::AStar);
        assert_eq!(classify(89).0, LetterGrade::A);
        assert_eq!(classify(80).0, LetterGrade::A);
        assert_eq!(classify(79).0, LetterGrade::B);
        assert_eq!(classify(70).0, LetterGrade::B);
        assert_eq!(classify(69).0, LetterGrade::C);
        assert_eq!(classify(60).0, LetterGrade::C);
        assert_eq!(classify(59).0, LetterGrade::F);
        assert_eq!(classify(0).0, LetterGrade::F);
    }

    #[test]
    fn eighty_is_an_a_in_level_two() {
        assert_eq!(classify(80), (LetterGrade::A, Level::Two));
        assert_eq!(classify(85), (LetterGrade::A, Level::One));
    }

    #[test]
    fn level_bands() {
        assert_eq!(Level::from_score(81), Level::One);
        assert_eq!(Level::from_score(60), Level::Two);
        assert_eq!(classify(59), (LetterGrade::F, Level::NotQualified));
    }

    #[test]
    fn minimal_student_is_eligible() {
        assert!(is_eligible(&eligible_student()));
    }

    #[test]
    fn each_failing_clause_blocks_eligibility() {
        let cases: [(&str, fn(&mut Student)); 7] = [
            ("age above", |s| s.age = 19),
            ("age below", |s| s.age = 15),
            ("cs", |s| s.cs_grade = 5),
            ("math", |s| s.math_grade = 4),
            ("english", |s| s.eng_grade = 3),
            ("behavior", |s| s.behavior = Behavior::Bad),
            ("score", |s| s.test_score = 59),
        ];
        for (clause, break_clause) in cases {
            let mut student = eligible_student();
            break_clause(&mut student);
            assert!(!is_eligible(&student), "{clause} clause should fail");
        }
    }

    #[test]
    fn eligibility_ignores_derived_fields() {
        let mut student = eligible_student();
        student.grade = Some(LetterGrade::F);
        student.level = Some(Level::NotQualified);
        assert!(is_eligible(&student));
    }

    #[test]
    fn intake_grade_bands() {
        let cs = Subject::ComputerScience.accepted_grades();
        assert!(!cs.contains(&6) && cs.contains(&7) && cs.contains(&8) && !cs.contains(&9));
        let math = Subject::Mathematics.accepted_grades();
        assert!(!math.contains(&5) && math.contains(&6) && !math.contains(&9));
        let eng = Subject::English.accepted_grades();
        assert!(!eng.contains(&4) && eng.contains(&5) && !eng.contains(&9));
    }
}
