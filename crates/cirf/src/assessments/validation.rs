use serde::Serialize;

use super::catalog::AssessmentDefinition;
use super::domain::{AnswerValue, Answers};

/// Minimum share of each section's Likert questions that must be answered.
const SECTION_COMPLETION_RATIO: f64 = 0.5;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, thiserror::Error)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum ValidationError {
    #[error("answer to {question_id} must be between 1 and 7, got {value}")]
    #[serde(rename_all = "camelCase")]
    OutOfRange { question_id: String, value: i64 },
    #[error("answer to {question_id} must be a whole number between 1 and 7")]
    #[serde(rename_all = "camelCase")]
    ExpectedLikert { question_id: String },
    #[error("{question_id} is required")]
    #[serde(rename_all = "camelCase")]
    MissingRequired { question_id: String },
    #[error("'{value}' is not a valid option for {question_id}")]
    #[serde(rename_all = "camelCase")]
    UnknownOption { question_id: String, value: String },
    #[error("section {section} needs at least {required} answers, got {answered}")]
    SectionIncomplete {
        section: String,
        answered: usize,
        required: usize,
    },
}

/// All problems found in one submission, in check order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, thiserror::Error)]
#[error("submission failed validation with {} issue(s)", .0.len())]
pub struct InvalidSubmission(pub Vec<ValidationError>);

/// Run every check and report all failures at once.
pub fn validate_submission(
    definition: &AssessmentDefinition,
    answers: &Answers,
) -> Result<(), InvalidSubmission> {
    let mut out_of_range = Vec::new();
    let mut expected_likert = Vec::new();
    for question in definition.questions {
        match answers.get(question.id) {
            Some(AnswerValue::Likert(value)) if !(1..=7).contains(value) => {
                out_of_range.push(ValidationError::OutOfRange {
                    question_id: question.id.to_string(),
                    value: *value,
                });
            }
            Some(AnswerValue::Likert(_)) | None => {}
            Some(_) => expected_likert.push(ValidationError::ExpectedLikert {
                question_id: question.id.to_string(),
            }),
        }
    }

    let mut missing = Vec::new();
    let mut unknown = Vec::new();
    for question in definition.profile_questions {
        let id = question.id.to_string();
        match answers.get(question.id) {
            None => {
                if question.required {
                    missing.push(ValidationError::MissingRequired { question_id: id });
                }
            }
            Some(AnswerValue::Choice(value)) if value.trim().is_empty() => {
                if question.required {
                    missing.push(ValidationError::MissingRequired { question_id: id });
                }
            }
            Some(AnswerValue::Choice(value)) => {
                if !question.accepts(value) {
                    unknown.push(ValidationError::UnknownOption {
                        question_id: id,
                        value: value.clone(),
                    });
                }
            }
            Some(AnswerValue::Choices(values)) => {
                if values.is_empty() && question.required {
                    missing.push(ValidationError::MissingRequired {
                        question_id: id.clone(),
                    });
                }
                for value in values.iter().filter(|value| !question.accepts(value)) {
                    unknown.push(ValidationError::UnknownOption {
                        question_id: id.clone(),
                        value: value.clone(),
                    });
                }
            }
            Some(other) => unknown.push(ValidationError::UnknownOption {
                question_id: id,
                value: describe(other),
            }),
        }
    }

    let mut incomplete = Vec::new();
    for section in definition.scored_sections() {
        let total = definition.questions_in_section(section.id).count();
        let answered = definition
            .questions_in_section(section.id)
            .filter(|question| {
                answers
                    .get(question.id)
                    .and_then(AnswerValue::as_likert)
                    .is_some()
            })
            .count();
        let required = required_answers(total);
        if answered < required {
            incomplete.push(ValidationError::SectionIncomplete {
                section: section.id.to_string(),
                answered,
                required,
            });
        }
    }

    let errors: Vec<_> = [out_of_range, expected_likert, missing, unknown, incomplete]
        .into_iter()
        .flatten()
        .collect();

    if errors.is_empty() {
        Ok(())
    } else {
        Err(InvalidSubmission(errors))
    }
}

fn required_answers(total: usize) -> usize {
    (total as f64 * SECTION_COMPLETION_RATIO).ceil() as usize
}

fn describe(value: &AnswerValue) -> String {
    match value {
        AnswerValue::Likert(number) => number.to_string(),
        AnswerValue::Other(raw) => raw.to_string(),
        AnswerValue::Choice(text) => text.clone(),
        AnswerValue::Choices(values) => values.join(","),
    }
}
