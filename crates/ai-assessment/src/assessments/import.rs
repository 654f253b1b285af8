//! CSV answer sheets for offline assessments.
//!
//! Compliance sheets carry `question_id,status`; maturity sheets carry
//! `question_id,level`. Rows are keyed by qualified question id.

use std::collections::btree_map::Entry;
use std::fs::File;
use std::io::Read;
use std::path::Path;

use serde::Deserialize;

use super::compliance::{AnswerStatus, Answers, QuestionId};
use super::maturity::LevelAnswers;

#[derive(Debug)]
pub enum AnswerImportError {
    Io(std::io::Error),
    Csv(csv::Error),
    InvalidStatus { line: usize, value: String },
    InvalidLevel { line: usize, value: String },
    Duplicate { line: usize, question: String },
}

impl std::fmt::Display for AnswerImportError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AnswerImportError::Io(err) => write!(f, "failed to read answer sheet: {}", err),
            AnswerImportError::Csv(err) => write!(f, "invalid answer sheet CSV: {}", err),
            AnswerImportError::InvalidStatus { line, value } => {
                write!(f, "line {}: unrecognized answer status '{}'", line, value)
            }
            AnswerImportError::InvalidLevel { line, value } => write!(
                f,
                "line {}: maturity level must be a whole number from 1 to 5 (found '{}')",
                line, value
            ),
            AnswerImportError::Duplicate { line, question } => {
                write!(f, "line {}: question {} answered more than once", line, question)
            }
        }
    }
}

impl std::error::Error for AnswerImportError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AnswerImportError::Io(err) => Some(err),
            AnswerImportError::Csv(err) => Some(err),
            _ => None,
        }
    }
}

impl From<std::io::Error> for AnswerImportError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<csv::Error> for AnswerImportError {
    fn from(err: csv::Error) -> Self {
        Self::Csv(err)
    }
}

#[derive(Debug, Deserialize)]
struct StatusRow {
    question_id: String,
    status: String,
}

#[derive(Debug, Deserialize)]
struct LevelRow {
    question_id: String,
    level: String,
}

fn csv_reader<R: Read>(reader: R) -> csv::Reader<R> {
    csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader)
}

pub fn parse_compliance_answers<R: Read>(reader: R) -> Result<Answers, AnswerImportError> {
    let mut answers = Answers::new();

    // Header occupies line 1.
    for (line, record) in (2..).zip(csv_reader(reader).deserialize::<StatusRow>()) {
        let row = record?;
        let status: AnswerStatus =
            row.status
                .parse()
                .map_err(|_| AnswerImportError::InvalidStatus {
                    line,
                    value: row.status.clone(),
                })?;

        match answers.entry(QuestionId(row.question_id)) {
            Entry::Vacant(slot) => {
                slot.insert(status);
            }
            Entry::Occupied(slot) => {
                return Err(AnswerImportError::Duplicate {
                    line,
                    question: slot.key().to_string(),
                })
            }
        }
    }

    Ok(answers)
}

pub fn parse_maturity_answers<R: Read>(reader: R) -> Result<LevelAnswers, AnswerImportError> {
    let mut answers = LevelAnswers::new();

    for (line, record) in (2..).zip(csv_reader(reader).deserialize::<LevelRow>()) {
        let row = record?;
        let level = row
            .level
            .parse::<u8>()
            .ok()
            .filter(|level| (1..=5).contains(level))
            .ok_or_else(|| AnswerImportError::InvalidLevel {
                line,
                value: row.level.clone(),
            })?;

        match answers.entry(QuestionId(row.question_id)) {
            Entry::Vacant(slot) => {
                slot.insert(level);
            }
            Entry::Occupied(slot) => {
                return Err(AnswerImportError::Duplicate {
                    line,
                    question: slot.key().to_string(),
                })
            }
        }
    }

    Ok(answers)
}

pub fn load_compliance_answers<P: AsRef<Path>>(path: P) -> Result<Answers, AnswerImportError> {
    parse_compliance_answers(File::open(path)?)
}

pub fn load_maturity_answers<P: AsRef<Path>>(path: P) -> Result<LevelAnswers, AnswerImportError> {
    parse_maturity_answers(File::open(path)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn compliance_sheet_accepts_codes_and_labels() {
        let csv = "question_id,status\n\
                   classification.q1, compliant\n\
                   classification.q2,Partial - In Progress\n\
                   classification.q3,N/A - Not Applicable\n";

        let answers = parse_compliance_answers(csv.as_bytes()).expect("valid sheet");

        assert_eq!(answers.len(), 3);
        assert_eq!(
            answers.get(&QuestionId::from("classification.q1")),
            Some(&AnswerStatus::Compliant)
        );
        assert_eq!(
            answers.get(&QuestionId::from("classification.q2")),
            Some(&AnswerStatus::Partial)
        );
        assert_eq!(
            answers.get(&QuestionId::from("classification.q3")),
            Some(&AnswerStatus::NotApplicable)
        );
    }

    #[test]
    fn unknown_status_reports_its_line() {
        let csv = "question_id,status\ngpai.q1,compliant\ngpai.q2,maybe\n";

        let err = parse_compliance_answers(csv.as_bytes()).expect_err("bad status");
        match err {
            AnswerImportError::InvalidStatus { line, value } => {
                assert_eq!(line, 3);
                assert_eq!(value, "maybe");
            }
            other => panic!("expected invalid status, got {other:?}"),
        }
    }

    #[test]
    fn repeated_question_is_rejected() {
        let csv = "question_id,status\ngpai.q1,compliant\ngpai.q1,partial\n";

        let err = parse_compliance_answers(csv.as_bytes()).expect_err("duplicate");
        assert!(matches!(err, AnswerImportError::Duplicate { line: 3, .. }));
    }

    #[test]
    fn maturity_sheet_parses_levels() {
        let csv = "question_id,level\nstrategy_leadership.q1,4\nstrategy_leadership.q2, 2\n";

        let answers = parse_maturity_answers(csv.as_bytes()).expect("valid sheet");
        assert_eq!(
            answers.get(&QuestionId::from("strategy_leadership.q1")),
            Some(&4)
        );
        assert_eq!(
            answers.get(&QuestionId::from("strategy_leadership.q2")),
            Some(&2)
        );
    }

    #[test]
    fn maturity_level_outside_scale_is_rejected() {
        for bad in ["0", "6", "three"] {
            let csv = format!("question_id,level\nvalue_innovation.q1,{bad}\n");
            let err = parse_maturity_answers(csv.as_bytes()).expect_err("bad level");
            assert!(
                matches!(err, AnswerImportError::InvalidLevel { line: 2, .. }),
                "{bad}: {err:?}"
            );
        }
    }

    #[test]
    fn missing_column_is_a_csv_error() {
        let csv = "question_id\ngpai.q1\n";
        let err = parse_compliance_answers(csv.as_bytes()).expect_err("no status column");
        assert!(matches!(err, AnswerImportError::Csv(_)));
    }
}
