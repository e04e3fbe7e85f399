use crate::model::{GradingPolicy, InvalidPolicy, StudentRecord};
use thiserror::Error;

/// First rule broken by a student record.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum InvalidStudent {
    #[error(transparent)]
    Policy(#[from] InvalidPolicy),
    #[error("no student record")]
    Missing,
    #[error("student name is empty")]
    EmptyName,
    #[error("student has no marks")]
    NoMarks,
    #[error("mark for {subject} is not a number")]
    NonNumericMark { subject: String },
    #[error("mark {mark} for {subject} is outside [0, {max_mark}]")]
    MarkOutOfRange {
        subject: String,
        mark: f64,
        max_mark: f64,
    },
}

/// A student record that passed validation, with its scores in declaration
/// order.
#[derive(Clone, Debug, PartialEq)]
pub struct ValidStudent<'a> {
    pub name: &'a str,
    pub scores: Vec<(&'a str, f64)>,
}

/// Check the rules in order and stop at the first broken one. The policy
/// itself is checked before the record.
pub fn validate<'a>(
    student: Option<&'a StudentRecord>,
    policy: &GradingPolicy,
) -> Result<ValidStudent<'a>, InvalidStudent> {
    policy.check()?;
    let student = student.ok_or(InvalidStudent::Missing)?;
    if student.name.is_empty() {
        return Err(InvalidStudent::EmptyName);
    }
    if student.marks.is_empty() {
        return Err(InvalidStudent::NoMarks);
    }
    let scores = student
        .marks
        .iter()
        .map(|(subject, mark)| {
            let score = mark
                .score()
                .ok_or_else(|| InvalidStudent::NonNumericMark {
                    subject: subject.clone(),
                })?;
            if policy.in_range(score) {
                Ok((subject.as_str(), score))
            } else {
                Err(InvalidStudent::MarkOutOfRange {
                    subject: subject.clone(),
                    mark: score,
                    max_mark: policy.max_mark,
                })
            }
        })
        .collect::<Result<Vec<_>, _>>()?;
    Ok(ValidStudent {
        name: &student.name,
        scores,
    })
}
