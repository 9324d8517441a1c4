//! Core data model types for aptreg.
//!
//! A [`Student`] is built from validated [`Intake`] answers plus a quiz
//! score, graded once, and then only ever read.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Student gender as captured at intake.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Gender {
    Male,
    Female,
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Gender::Male => write!(f, "Male"),
            Gender::Female => write!(f, "Female"),
        }
    }
}

impl FromStr for Gender {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "male" => Ok(Gender::Male),
            "female" => Ok(Gender::Female),
            other => Err(format!("unknown gender: {other}")),
        }
    }
}

/// Instructor behavior reference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Behavior {
    Good,
    Bad,
}

impl fmt::Display for Behavior {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Behavior::Good => write!(f, "good"),
            Behavior::Bad => write!(f, "bad"),
        }
    }
}

impl FromStr for Behavior {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "good" => Ok(Behavior::Good),
            "bad" => Ok(Behavior::Bad),
            other => Err(format!("unknown behavior reference: {other}")),
        }
    }
}

/// Letter grade derived from the quiz score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum LetterGrade {
    #[serde(rename = "A*")]
    AStar,
    A,
    B,
    C,
    F,
}

impl fmt::Display for LetterGrade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LetterGrade::AStar => write!(f, "A*"),
            LetterGrade::A => write!(f, "A"),
            LetterGrade::B => write!(f, "B"),
            LetterGrade::C => write!(f, "C"),
            LetterGrade::F => write!(f, "F"),
        }
    }
}

/// Course-placement tier derived from the quiz score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Level {
    #[serde(rename = "Level 1")]
    One,
    #[serde(rename = "Level 2")]
    Two,
    #[serde(rename = "Not Qualified")]
    NotQualified,
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Level::One => write!(f, "Level 1"),
            Level::Two => write!(f, "Level 2"),
            Level::NotQualified => write!(f, "Not Qualified"),
        }
    }
}

/// Subjects whose prior grades are collected at intake.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Subject {
    ComputerScience,
    Mathematics,
    English,
}

impl Subject {
    /// Intake order.
    pub const ALL: [Subject; 3] = [
        Subject::ComputerScience,
        Subject::Mathematics,
        Subject::English,
    ];

    /// Console prompt used to ask for this subject's grade.
    pub fn prompt(&self) -> &'static str {
        match self {
            Subject::ComputerScience => "Enter GCSE Computer Science grade: ",
            Subject::Mathematics => "Enter Mathematics grade: ",
            Subject::English => "Enter English grade: ",
        }
    }
}

impl fmt::Display for Subject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Subject::ComputerScience => write!(f, "Computer Science"),
            Subject::Mathematics => write!(f, "Mathematics"),
            Subject::English => write!(f, "English"),
        }
    }
}

/// Validated intake answers, collected before the quiz runs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Intake {
    pub name: String,
    pub age: u32,
    pub gender: Gender,
    pub cs_grade: u8,
    pub math_grade: u8,
    pub eng_grade: u8,
    pub behavior: Behavior,
}

/// A registered student. Field order matches the record store columns.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Student {
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "Age")]
    pub age: u32,
    #[serde(rename = "Gender")]
    pub gender: Gender,
    #[serde(rename = "CS Grade")]
    pub cs_grade: u8,
    #[serde(rename = "Math Grade")]
    pub math_grade: u8,
    #[serde(rename = "Eng Grade")]
    pub eng_grade: u8,
    #[serde(rename = "Behavior")]
    pub behavior: Behavior,
    #[serde(rename = "Test Score")]
    pub test_score: u32,
    /// `None` until [`Student::calculate_grade_and_level`] runs.
    #[serde(rename = "Grade")]
    pub grade: Option<LetterGrade>,
    /// `None` until [`Student::calculate_grade_and_level`] runs.
    #[serde(rename = "Level")]
    pub level: Option<Level>,
}

impl Student {
    /// Build an ungraded student from intake answers and a quiz score.
    pub fn new(intake: Intake, test_score: u32) -> Self {
        Self {
            name: intake.name,
            age: intake.age,
            gender: intake.gender,
            cs_grade: intake.cs_grade,
            math_grade: intake.math_grade,
            eng_grade: intake.eng_grade,
            behavior: intake.behavior,
            test_score,
            grade: None,
            level: None,
        }
    }

    /// Attach the letter grade and level derived from the test score.
    pub fn calculate_grade_and_level(&mut self) {
        let (grade, level) = crate::rules::classify(self.test_score);
        self.grade = Some(grade);
        self.level = Some(level);
    }

    /// Whether this student passes every eligibility clause.
    pub fn is_eligible(&self) -> bool {
        crate::rules::is_eligible(self)
    }
}
