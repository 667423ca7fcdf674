use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// The six self-assessments offered by the framework.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AssessmentType {
    Cirf,
    Cimm,
    Cira,
    Tbl,
    Ciss,
    Pricing,
}

impl AssessmentType {
    pub const ALL: [AssessmentType; 6] = [
        AssessmentType::Cirf,
        AssessmentType::Cimm,
        AssessmentType::Cira,
        AssessmentType::Tbl,
        AssessmentType::Ciss,
        AssessmentType::Pricing,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            AssessmentType::Cirf => "cirf",
            AssessmentType::Cimm => "cimm",
            AssessmentType::Cira => "cira",
            AssessmentType::Tbl => "tbl",
            AssessmentType::Ciss => "ciss",
            AssessmentType::Pricing => "pricing",
        }
    }

    /// CIRF is the entry point every other assessment builds on.
    pub fn is_foundational(&self) -> bool {
        matches!(self, AssessmentType::Cirf)
    }
}

impl fmt::Display for AssessmentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AssessmentType {
    type Err = UnknownAssessmentType;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let normalized = value.trim().to_ascii_lowercase();
        AssessmentType::ALL
            .into_iter()
            .find(|kind| kind.as_str() == normalized)
            .ok_or_else(|| UnknownAssessmentType(value.to_string()))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown assessment type '{0}'")]
pub struct UnknownAssessmentType(pub String);

/// Opaque user identity supplied by the authentication layer.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct UserId(pub String);

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AssessmentId(pub Uuid);

impl AssessmentId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for AssessmentId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for AssessmentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl FromStr for AssessmentId {
    type Err = uuid::Error;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Uuid::parse_str(value).map(Self)
    }
}

/// A single answer as submitted by the client.
///
/// Likert questions expect an integer; profile questions take a single option
/// or a list of options. Anything else is kept so validation can report it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AnswerValue {
    Likert(i64),
    Choice(String),
    Choices(Vec<String>),
    Other(serde_json::Value),
}

impl AnswerValue {
    /// The integer value when this is a Likert answer inside 1..=7.
    pub fn as_likert(&self) -> Option<u8> {
        match self {
            AnswerValue::Likert(value) if (1..=7).contains(value) => u8::try_from(*value).ok(),
            _ => None,
        }
    }
}

pub type Answers = BTreeMap<String, AnswerValue>;

/// Body of a submission request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssessmentSubmission {
    pub assessment_type: AssessmentType,
    pub answers: Answers,
}
