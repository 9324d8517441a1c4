//! Append-only student record store.
//!
//! Records live in a CSV file whose header row is written exactly once, by
//! the first append to a file that does not exist yet. Later appends, from
//! this run or any other, only add rows.

use std::fs::OpenOptions;
use std::path::{Path, PathBuf};

use crate::error::StoreError;
use crate::model::Student;

/// Column header, in record order.
pub const COLUMNS: [&str; 10] = [
    "Name",
    "Age",
    "Gender",
    "CS Grade",
    "Math Grade",
    "Eng Grade",
    "Behavior",
    "Test Score",
    "Grade",
    "Level",
];

/// Durable sink for registered students.
pub trait StudentStore {
    /// Persist one student. Stored records are never rewritten.
    fn append(&mut self, student: &Student) -> Result<(), StoreError>;
}

/// CSV file store.
#[derive(Debug, Clone)]
pub struct CsvStore {
    path: PathBuf,
}

impl CsvStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read back every stored student. A missing file is an empty store.
    pub fn load(&self) -> Result<Vec<Student>, StoreError> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .from_path(&self.path)?;

        let students = reader
            .deserialize::<Student>()
            .collect::<Result<Vec<_>, _>>()?;
        tracing::debug!(
            path = %self.path.display(),
            count = students.len(),
            "loaded student records"
        );
        Ok(students)
    }
}

impl StudentStore for CsvStore {
    fn append(&mut self, student: &Student) -> Result<(), StoreError> {
        let write_header = !self.path.exists();
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .map_err(|source| StoreError::Open {
                path: self.path.clone(),
                source,
            })?;

        let mut writer = csv::WriterBuilder::new()
            .has_headers(write_header)
            .terminator(csv::Terminator::CRLF)
            .from_writer(file);
        writer.serialize(student)?;
        writer.flush()?;

        tracing::debug!(
            path = %self.path.display(),
            name = %student.name,
            header = write_header,
            "appended student record"
        );
        Ok(())
    }
}

/// In-memory store, handy for tests and dry runs.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    pub students: Vec<Student>,
}

impl StudentStore for MemoryStore {
    fn append(&mut self, student: &Student) -> Result<(), StoreError> {
        self.students.push(student.clone());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Behavior, Gender, Intake};

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
    fn header_written_once_then_rows_appended() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("students.csv");
        let mut store = CsvStore::new(&path);

        store.append(&graded("Alex", Gender::Male, 85)).unwrap();
        store.append(&graded("Jo", Gender::Female, 80)).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], COLUMNS.join(","));
        assert_eq!(lines[1], "Alex,17,Male,7,6,5,good,85,A,Level 1");
        assert_eq!(lines[2], "Jo,17,Female,7,6,5,good,80,A,Level 2");
    }

    #[test]
    fn rows_end_with_crlf() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("students.csv");
        let mut store = CsvStore::new(&path);
        store.append(&graded("Alex", Gender::Male, 85)).unwrap();
        store.append(&graded("Jo", Gender::Female, 70)).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        assert_eq!(content.matches("\r\n").count(), 3);
        assert_eq!(content.matches('\n').count(), 3);
        assert_eq!(store.load().unwrap().len(), 2);
    }

    #[test]
    fn reopening_existing_store_does_not_repeat_header() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("students.csv");

        CsvStore::new(&path)
            .append(&graded("Alex", Gender::Male, 95))
            .unwrap();
        CsvStore::new(&path)
            .append(&graded("Jo", Gender::Female, 40))
            .unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        assert_eq!(content.matches("Name,Age").count(), 1);
        assert!(content.contains("Alex,17,Male,7,6,5,good,95,A*,Level 1"));
        assert!(content.contains("Jo,17,Female,7,6,5,good,40,F,Not Qualified"));
    }

    #[test]
    fn load_returns_what_was_written() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = CsvStore::new(dir.path().join("students.csv"));
        let written = vec![
            graded("Alex", Gender::Male, 85),
            graded("Smith, Jo", Gender::Female, 65),
        ];
        for s in &written {
            store.append(s).unwrap();
        }
        assert_eq!(store.load().unwrap(), written);
    }

    #[test]
    fn ungraded_student_leaves_derived_columns_empty() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("students.csv");
        let mut store = CsvStore::new(&path);
        let mut student = graded("Alex", Gender::Male, 85);
        student.grade = None;
        student.level = None;
        store.append(&student).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content.lines().any(|l| l == "Alex,17,Male,7,6,5,good,85,,"));
        assert_eq!(store.load().unwrap(), vec![student]);
    }

    #[test]
    fn missing_file_loads_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = CsvStore::new(dir.path().join("absent.csv"));
        assert!(store.load().unwrap().is_empty());
    }

    #[test]
    fn unopenable_path_reports_open_error() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = CsvStore::new(dir.path().join("no-such-dir").join("students.csv"));
        let err = store.append(&graded("Alex", Gender::Male, 85)).unwrap_err();
        assert!(matches!(err, StoreError::Open { .. }));
    }
}
