//! Interactive registration session.
//!
//! Collects intake answers, runs the aptitude test, grades and persists each
//! student, and finally prints the summary. Malformed answers are re-asked;
//! an out-of-range age or grade ends the whole session with
//! [`SessionError::Rejected`] before the current student is saved.

use rand::Rng;

use crate::error::{RangeError, SessionError};
use crate::model::{Behavior, Gender, Intake, Student, Subject};
use crate::prompt::{parse_integer, Prompter};
use crate::quiz::{administer_test, Quiz};
use crate::rules::AGE_RANGE;
use crate::store::StudentStore;
use crate::summary::Summary;

const REJECTION: &str = "You are not valid for this course";

/// One registration run over a console, a record store, and a quiz RNG.
pub struct Session<P, S, R> {
    prompter: P,
    store: S,
    rng: R,
    registry: Vec<Student>,
}

impl<P: Prompter, S: StudentStore, R: Rng> Session<P, S, R> {
    pub fn new(prompter: P, store: S, rng: R) -> Self {
        Self {
            prompter,
            store,
            rng,
            registry: Vec::new(),
        }
    }

    /// Students registered so far, in registration order.
    pub fn registry(&self) -> &[Student] {
        &self.registry
    }

    pub fn into_parts(self) -> (P, S, Vec<Student>) {
        (self.prompter, self.store, self.registry)
    }

    /// Register students until the operator declines another, then print
    /// and return the summary.
    pub fn run(&mut self) -> Result<Summary, SessionError> {
        self.prompter.say("--- Student Registration and Test ---")?;

        loop {
            self.register_one()?;

            let another = self
                .prompter
                .ask("\nAdd another student? (yes/no): ")?
                .unwrap_or_default();
            if !another.trim().eq_ignore_ascii_case("yes") {
                break;
            }
        }

        let summary = Summary::from_students(&self.registry);
        for line in summary.lines() {
            self.prompter.say(&line)?;
        }
        Ok(summary)
    }

    /// Take one student through intake, the test, grading, and persistence.
    pub fn register_one(&mut self) -> Result<&Student, SessionError> {
        let intake = self.collect_intake()?;
        let score = administer_test(Quiz::generate(&mut self.rng), &mut self.prompter)?;

        let mut student = Student::new(intake, score);
        student.calculate_grade_and_level();
        tracing::info!(
            name = %student.name,
            score,
            grade = ?student.grade,
            level = ?student.level,
            "registered student"
        );

        self.store.append(&student)?;
        self.registry.push(student);
        Ok(&self.registry[self.registry.len() - 1])
    }

    /// Ask for every intake field in order.
    pub fn collect_intake(&mut self) -> Result<Intake, SessionError> {
        let name = self.ask_name()?;
        let age = self.ask_age()?;
        let gender = self.ask_gender()?;
        let mut grades = [0u8; Subject::ALL.len()];
        for (grade, subject) in grades.iter_mut().zip(Subject::ALL) {
            *grade = self.ask_grade(subject)?;
        }
        let [cs_grade, math_grade, eng_grade] = grades;
        let behavior = self.ask_behavior()?;

        Ok(Intake {
            name,
            age,
            gender,
            cs_grade,
            math_grade,
            eng_grade,
            behavior,
        })
    }

    fn ask_line(&mut self, prompt: &str) -> Result<String, SessionError> {
        let line = self
            .prompter
            .ask(prompt)?
            .ok_or(SessionError::InputClosed)?;
        Ok(line.trim().to_string())
    }

    fn reject(&mut self, message: &str, error: RangeError) -> SessionError {
        tracing::info!("intake rejected: {error}");
        match self.prompter.say(message) {
            Ok(()) => SessionError::Rejected(error),
            Err(e) => SessionError::Io(e),
        }
    }

    fn ask_name(&mut self) -> Result<String, SessionError> {
        loop {
            let name = self.ask_line("\nEnter student name: ")?;
            if !name.is_empty() {
                return Ok(name);
            }
            self.prompter
                .say("Name cannot be empty. Please enter your name.")?;
        }
    }

    fn ask_age(&mut self) -> Result<u32, SessionError> {
        loop {
            let input = self.ask_line("Enter age: ")?;
            if !input.is_empty() && input.bytes().all(|b| b.is_ascii_digit()) {
                // All digits, so a parse failure can only be overflow.
                let age = input.parse::<u32>().unwrap_or(u32::MAX);
                if AGE_RANGE.contains(&age) {
                    return Ok(age);
                }
                return Err(self.reject(&format!("{REJECTION}."), RangeError::Age(age)));
            }
            self.prompter.say("Invalid input. Please enter a valid age")?;
        }
    }

    fn ask_gender(&mut self) -> Result<Gender, SessionError> {
        loop {
            match self.ask_line("Enter gender (Male/Female): ")?.parse::<Gender>() {
                Ok(gender) => return Ok(gender),
                Err(_) => self
                    .prompter
                    .say("Invalid input. Please enter Male or Female.")?,
            }
        }
    }

    fn ask_grade(&mut self, subject: Subject) -> Result<u8, SessionError> {
        loop {
            let Some(grade) = parse_integer(&self.ask_line(subject.prompt())?) else {
                self.prompter.say("Invalid input. Please enter a number.")?;
                continue;
            };
            let rejected = RangeError::Grade { subject, grade };
            if !subject.accepted_grades().contains(&grade) {
                return Err(self.reject(REJECTION, rejected));
            }
            return u8::try_from(grade).map_err(|_| SessionError::Rejected(rejected));
        }
    }

    fn ask_behavior(&mut self) -> Result<Behavior, SessionError> {
        loop {
            match self.ask_line("Enter behavior reference (Good/Bad): ")?.parse::<Behavior>() {
                Ok(behavior) => return Ok(behavior),
                Err(_) => self
                    .prompter
                    .say("Invalid input. Please enter Good or Bad.")?,
            }
        }
    }
}
