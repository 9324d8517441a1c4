//! Registry summary: one line per student plus per-level gender counts.

use anyhow::{Context, Result};
use serde::Serialize;

use crate::model::{Gender, LetterGrade, Level, Student};

/// Student count for one level, split by gender.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct LevelCount {
    pub students: usize,
    pub males: usize,
    pub females: usize,
}

impl LevelCount {
    fn add(&mut self, gender: Gender) {
        self.students += 1;
        match gender {
            Gender::Male => self.males += 1,
            Gender::Female => self.females += 1,
        }
    }
}

/// Per-student row of the report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StudentLine {
    pub name: String,
    pub age: u32,
    pub gender: Gender,
    pub grade: Option<LetterGrade>,
    pub level: Option<Level>,
    pub eligible: bool,
    pub test_score: u32,
}

impl StudentLine {
    fn eligibility(&self) -> &'static str {
        if self.eligible {
            "Eligible"
        } else {
            "Not Eligible"
        }
    }
}

/// Aggregated report over an ordered sequence of students.
///
/// Only Level 1 and Level 2 are tallied; Not Qualified and ungraded
/// students appear in the per-student lines but in no count.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Summary {
    pub students: Vec<StudentLine>,
    pub level_1: LevelCount,
    pub level_2: LevelCount,
}

impl Summary {
    pub fn from_students(students: &[Student]) -> Self {
        students.iter().fold(Self::default(), |mut summary, student| {
            summary.add(student);
            summary
        })
    }

    fn add(&mut self, student: &Student) {
        self.students.push(StudentLine {
            name: student.name.clone(),
            age: student.age,
            gender: student.gender,
            grade: student.grade,
            level: student.level,
            eligible: student.is_eligible(),
            test_score: student.test_score,
        });
        match student.level {
            Some(Level::One) => self.level_1.add(student.gender),
            Some(Level::Two) => self.level_2.add(student.gender),
            Some(Level::NotQualified) | None => {}
        }
    }

    /// Tallied levels in report order.
    pub fn levels(&self) -> [(Level, LevelCount); 2] {
        [(Level::One, self.level_1), (Level::Two, self.level_2)]
    }

    /// Console report lines.
    pub fn lines(&self) -> Vec<String> {
        let mut lines: Vec<String> = self
            .students
            .iter()
            .map(|s| {
                format!(
                    "Name: {}, Age: {}, Gender: {}, Grade: {}, Level: {}, Eligibility: {}, Test Score: {}",
                    s.name,
                    s.age,
                    s.gender,
                    display_or_none(s.grade),
                    display_or_none(s.level),
                    s.eligibility(),
                    s.test_score
                )
            })
            .collect();

        lines.push("\n--- Summary ---".to_string());
        for (level, count) in self.levels() {
            lines.push(format!("{level}: {} students", count.students));
            lines.push(format!(
                "  Males: {}, Females: {}",
                count.males, count.females
            ));
        }
        lines
    }

    pub fn render_text(&self) -> String {
        self.lines().join("\n")
    }

    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).context("failed to serialize summary")
    }
}

fn display_or_none<T: std::fmt::Display>(value: Option<T>) -> String {
    value.map_or_else(|| "None".to_string(), |v| v.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Behavior, Intake};

    fn graded(name: &str, gender: Gender, score: u32) -> Student {
        let mut student = Student::new(
            Intake {
                name: name.into(),
                age: 17,
                gender,
                cs_grade: 7,
                math_grade: 6,
                eng_grade: 5,
                behavior: Behavior::Good,
            },
            score,
        );
        student.calculate_grade_and_level();
        student
    }

    #[test]
    fn empty_registry() {
        let summary = Summary::from_students(&[]);
        assert!(summary.students.is_empty());
        assert_eq!(
            summary.render_text(),
            "\n--- Summary ---\nLevel 1: 0 students\n  Males: 0, Females: 0\nLevel 2: 0 students\n  Males: 0, Females: 0"
        );
    }

    #[test]
    fn counts_by_level_and_gender() {
        let students = vec![
            graded("A", Gender::Male, 95),
            graded("B", Gender::Female, 85),
            graded("C", Gender::Female, 80),
            graded("D", Gender::Male, 60),
            graded("E", Gender::Male, 30),
        ];
        let summary = Summary::from_students(&students);
        assert_eq!(
            summary.level_1,
            LevelCount {
                students: 2,
                males: 1,
                females: 1
            }
        );
        assert_eq!(
            summary.level_2,
            LevelCount {
                students: 2,
                males: 1,
                females: 1
            }
        );
        assert_eq!(summary.students.len(), 5);
    }

    #[test]
    fn student_line_wording() {
        let summary = Summary::from_students(&[graded("Alex", Gender::Male, 85)]);
        assert_eq!(
            summary.lines()[0],
            "Name: Alex, Age: 17, Gender: Male, Grade: A, Level: Level 1, Eligibility: Eligible, Test Score: 85"
        );
    }

    #[test]
    fn failing_student_is_not_eligible_and_uncounted() {
        let summary = Summary::from_students(&[graded("Sam", Gender::Female, 40)]);
        let text = summary.render_text();
        assert!(text.contains("Grade: F, Level: Not Qualified, Eligibility: Not Eligible"));
        assert_eq!(summary.level_1.students + summary.level_2.students, 0);
    }

    #[test]
    fn large_registry_does_not_recurse() {
        let students: Vec<Student> = (0..50_000)
            .map(|i| graded(&format!("s{i}"), Gender::Female, 70))
            .collect();
        let summary = Summary::from_students(&students);
        assert_eq!(summary.level_2.females, 50_000);
    }

    #[test]
    fn json_output_names_fields() {
        let summary = Summary::from_students(&[graded("Alex", Gender::Male, 85)]);
        let value: serde_json::Value = serde_json::from_str(&summary.to_json().unwrap()).unwrap();
        assert_eq!(value["level_1"]["males"], 1);
        assert_eq!(value["students"][0]["grade"], "A");
        assert_eq!(value["students"][0]["level"], "Level 1");
    }
}
