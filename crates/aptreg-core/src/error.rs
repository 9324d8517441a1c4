//! Error types for registration sessions and the record store.
//!
//! Format problems (empty names, non-numeric text, unknown tokens) never show
//! up here: the session re-prompts for those. What remains are the fatal
//! intake rejections and the I/O failures underneath the console and store.

use std::path::PathBuf;

use thiserror::Error;

use crate::model::Subject;

/// An intake value that parsed cleanly but falls outside its accepted band.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RangeError {
    /// Age outside 16–18.
    #[error("age {0} is outside the accepted range 16-18")]
    Age(u32),

    /// A subject grade outside that subject's accepted band.
    #[error("{subject} grade {grade} is outside the accepted range")]
    Grade { subject: Subject, grade: i64 },
}

/// Errors raised while reading or appending the CSV record store.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The store file could not be opened.
    #[error("failed to open record store {}", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A row could not be encoded or decoded.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// Buffered rows could not be flushed to disk.
    #[error("failed to flush record store: {0}")]
    Flush(#[from] std::io::Error),
}

/// Errors that end a registration session early.
#[derive(Debug, Error)]
pub enum SessionError {
    /// An age or grade was out of range. The current student is discarded.
    #[error("not valid for this course: {0}")]
    Rejected(#[from] RangeError),

    /// Standard input ended while a prompt was waiting for an answer.
    #[error("input closed before the session finished")]
    InputClosed,

    /// Reading from or writing to the console failed.
    #[error("console I/O failed: {0}")]
    Io(#[from] std::io::Error),

    /// The registered student could not be persisted.
    #[error("failed to persist student: {0}")]
    Store(#[from] StoreError),
}

impl SessionError {
    /// Returns `true` if the session ended because an intake value was rejected.
    pub fn is_rejection(&self) -> bool {
        matches!(self, SessionError::Rejected(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejection_is_distinguishable() {
        let err = SessionError::from(RangeError::Age(19));
        assert!(err.is_rejection());
        assert!(!SessionError::InputClosed.is_rejection());
    }

    #[test]
    fn grade_error_names_subject() {
        let err = RangeError::Grade {
            subject: Subject::Mathematics,
            grade: 4,
        };
        assert_eq!(
            err.to_string(),
            "Mathematics grade 4 is outside the accepted range"
        );
    }
}
