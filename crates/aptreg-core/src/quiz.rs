//! Aptitude test engine.
//!
//! A quiz is twenty single-operator arithmetic questions over operands in
//! 1..=10. Each answer is scored by a pure function and folded into a
//! [`Tally`]; the quiz moves from `Asking(0)` through `Asking(19)` to
//! `Scored` and never goes back.

use std::fmt;

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::error::SessionError;
use crate::model::Level;
use crate::prompt::{parse_integer, Prompter};
use crate::rules::POINTS_PER_QUESTION;

/// Number of questions in every quiz.
pub const QUESTION_COUNT: usize = 20;

/// Highest achievable score.
pub const MAX_SCORE: u32 = QUESTION_COUNT as u32 * POINTS_PER_QUESTION;

/// Arithmetic operator used in a question.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Operator {
    Add,
    Subtract,
    Multiply,
}

impl Operator {
    pub const ALL: [Operator; 3] = [Operator::Add, Operator::Subtract, Operator::Multiply];

    /// Exact result; subtraction may go negative.
    pub fn apply(&self, left: i64, right: i64) -> i64 {
        match self {
            Operator::Add => left + right,
            Operator::Subtract => left - right,
            Operator::Multiply => left * right,
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operator::Add => write!(f, "+"),
            Operator::Subtract => write!(f, "-"),
            Operator::Multiply => write!(f, "*"),
        }
    }
}

/// One quiz question and its correct answer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    pub left: i64,
    pub operator: Operator,
    pub right: i64,
    pub answer: i64,
}

impl Question {
    pub fn new(left: i64, operator: Operator, right: i64) -> Self {
        Self {
            left,
            operator,
            right,
            answer: operator.apply(left, right),
        }
    }

    /// Prompt text, e.g. `"3 * 7"`.
    pub fn text(&self) -> String {
        format!("{} {} {}", self.left, self.operator, self.right)
    }
}

/// Draw a fresh set of [`QUESTION_COUNT`] questions.
///
/// Operands are uniform over 1..=10 and the operator uniform over
/// [`Operator::ALL`].
pub fn generate_test<R: Rng + ?Sized>(rng: &mut R) -> Vec<Question> {
    let questions: Vec<Question> = (0..QUESTION_COUNT)
        .map(|_| {
            let left = rng.random_range(1..=10);
            let right = rng.random_range(1..=10);
            let operator = Operator::ALL[rng.random_range(0..Operator::ALL.len())];
            Question::new(left, operator, right)
        })
        .collect();
    tracing::debug!(count = questions.len(), "generated aptitude test");
    questions
}

/// How a single response was judged.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnswerOutcome {
    Correct,
    Wrong,
    /// The response was not an integer.
    Invalid,
}

impl AnswerOutcome {
    pub fn points(&self) -> u32 {
        match self {
            AnswerOutcome::Correct => POINTS_PER_QUESTION,
            AnswerOutcome::Wrong | AnswerOutcome::Invalid => 0,
        }
    }
}

/// Judge one response. Never fails: unparseable text is [`AnswerOutcome::Invalid`].
pub fn score_answer(question: &Question, response: &str) -> AnswerOutcome {
    match parse_integer(response) {
        Some(value) if value == question.answer => AnswerOutcome::Correct,
        Some(_) => AnswerOutcome::Wrong,
        None => AnswerOutcome::Invalid,
    }
}

/// Running score accumulator.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Tally {
    pub score: u32,
    pub answered: usize,
}

impl Tally {
    pub fn record(self, outcome: AnswerOutcome) -> Self {
        Self {
            score: self.score + outcome.points(),
            answered: self.answered + 1,
        }
    }
}

/// Where a quiz is in its run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuizPhase {
    /// Waiting for the answer to question `i` (zero-based).
    Asking(usize),
    /// Every question has been answered.
    Scored,
}

/// A generated quiz plus its running tally.
#[derive(Debug, Clone)]
pub struct Quiz {
    questions: Vec<Question>,
    tally: Tally,
}

impl Quiz {
    pub fn generate<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self::from_questions(generate_test(rng))
    }

    pub fn from_questions(questions: Vec<Question>) -> Self {
        Self {
            questions,
            tally: Tally::default(),
        }
    }

    pub fn phase(&self) -> QuizPhase {
        if self.tally.answered < self.questions.len() {
            QuizPhase::Asking(self.tally.answered)
        } else {
            QuizPhase::Scored
        }
    }

    /// The question awaiting an answer, if any.
    pub fn current(&self) -> Option<&Question> {
        self.questions.get(self.tally.answered)
    }

    /// Score `response` against the current question and advance.
    ///
    /// Returns `None` once the quiz is already scored.
    pub fn answer(&mut self, response: &str) -> Option<AnswerOutcome> {
        let outcome = score_answer(self.current()?, response);
        self.tally = self.tally.record(outcome);
        Some(outcome)
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn remaining(&self) -> usize {
        self.questions.len() - self.tally.answered
    }

    pub fn score(&self) -> u32 {
        self.tally.score
    }
}

/// Closing line announcing the placement a score qualifies for.
pub fn level_message(level: Level) -> &'static str {
    match level {
        Level::One => "You are eligible for Level 1.",
        Level::Two => "You are eligible for Level 2.",
        Level::NotQualified => "You are Not Qualified.",
    }
}

/// Ask every question of `quiz` in order and return the final score.
pub fn administer_test<P: Prompter + ?Sized>(
    mut quiz: Quiz,
    prompter: &mut P,
) -> Result<u32, SessionError> {
    prompter.say("\n--- Aptitude Test ---")?;

    while let QuizPhase::Asking(index) = quiz.phase() {
        prompter.say(&format!(
            "There are {} questions remaining. Current score: {}/{MAX_SCORE}",
            quiz.remaining(),
            quiz.score()
        ))?;

        let (text, correct) = match quiz.current() {
            Some(q) => (q.text(), q.answer),
            None => break,
        };
        let response = prompter
            .ask(&format!("Q{}: {text} = ", index + 1))?
            .ok_or(SessionError::InputClosed)?;

        match quiz.answer(&response) {
            Some(AnswerOutcome::Correct) => prompter.say("Correct!")?,
            Some(AnswerOutcome::Wrong) => {
                prompter.say(&format!("Wrong! The correct answer was {correct}."))?
            }
            Some(AnswerOutcome::Invalid) => {
                prompter.say(&format!("Invalid input. The correct answer was {correct}."))?
            }
            None => break,
        }
    }

    let score = quiz.score();
    tracing::debug!(score, "aptitude test scored");
    prompter.say(&format!("\nTest Completed! Your score: {score}/{MAX_SCORE}"))?;
    prompter.say(level_message(Level::from_score(score)))?;
    Ok(score)
}
