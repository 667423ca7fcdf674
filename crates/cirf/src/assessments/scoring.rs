use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::catalog::Question;
use super::domain::Answers;

/// Derived score for one submission. Never authoritative: it can always be
/// recomputed from the stored answers and the question bank.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreCard {
    pub overall_score: u8,
    pub section_scores: BTreeMap<String, u8>,
}

/// Map a 1-7 answer onto 0-100, flipping reverse-scored items first.
/// Values outside the scale map to 0.
pub fn normalize_likert(value: u8, reverse: bool) -> f64 {
    if !(1..=7).contains(&value) {
        return 0.0;
    }
    let value = if reverse { 8 - value } else { value };
    f64::from(value - 1) / 6.0 * 100.0
}

/// Weighted overall score and unweighted per-section means.
///
/// Answers that are missing, non-numeric or outside 1..=7 are skipped. A
/// section without any usable answer gets no entry.
pub fn score_answers(answers: &Answers, questions: &[Question]) -> ScoreCard {
    let mut weighted_sum = 0.0;
    let mut total_weight = 0.0;
    let mut sections: BTreeMap<&str, (f64, u32)> = BTreeMap::new();

    for question in questions {
        let Some(value) = answers.get(question.id).and_then(|answer| answer.as_likert()) else {
            continue;
        };

        let normalized = normalize_likert(value, question.reverse);
        let weight = question.effective_weight();
        weighted_sum += normalized * weight;
        total_weight += weight;

        let entry = sections.entry(question.section).or_insert((0.0, 0));
        entry.0 += normalized;
        entry.1 += 1;
    }

    let overall_score = if total_weight > 0.0 {
        round_percent(weighted_sum / total_weight)
    } else {
        0
    };

    let section_scores = sections
        .into_iter()
        .map(|(section, (sum, count))| (section.to_string(), round_percent(sum / f64::from(count))))
        .collect();

    ScoreCard {
        overall_score,
        section_scores,
    }
}

/// Round half away from zero into 0..=100.
pub(crate) fn round_percent(value: f64) -> u8 {
    if !value.is_finite() {
        return 0;
    }
    value.round().clamp(0.0, 100.0) as u8
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InterpretationLevel {
    Emerging,
    Developing,
    Established,
    Thriving,
}

impl InterpretationLevel {
    pub fn for_score(score: u8) -> Self {
        match score {
            80.. => Self::Thriving,
            60..=79 => Self::Established,
            40..=59 => Self::Developing,
            _ => Self::Emerging,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Emerging => "Emerging",
            Self::Developing => "Developing",
            Self::Established => "Established",
            Self::Thriving => "Thriving",
        }
    }

    pub fn color(&self) -> &'static str {
        match self {
            Self::Emerging => "terracotta",
            Self::Developing => "gold",
            Self::Established => "ocean",
            Self::Thriving => "sage",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Self::Emerging => "Early stage with foundational work needed.",
            Self::Developing => "Good progress with significant growth opportunities.",
            Self::Established => "Solid performance with some areas for improvement.",
            Self::Thriving => "Excellent performance with strong foundations across all dimensions.",
        }
    }
}

/// Presentation view of an [`InterpretationLevel`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Interpretation {
    pub level: InterpretationLevel,
    pub label: &'static str,
    pub color: &'static str,
    pub description: &'static str,
}

impl Interpretation {
    pub fn for_score(score: u8) -> Self {
        Self::from(InterpretationLevel::for_score(score))
    }
}

impl From<InterpretationLevel> for Interpretation {
    fn from(level: InterpretationLevel) -> Self {
        Self {
            level,
            label: level.label(),
            color: level.color(),
            description: level.description(),
        }
    }
}
