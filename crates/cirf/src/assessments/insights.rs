//! Construct-level readings of a submission: which constructs reinforce each
//! other and which ones most need work. Purely derived from answers; never
//! feeds back into the overall score.

use std::collections::BTreeMap;

use serde::Serialize;

use super::catalog::Question;
use super::domain::Answers;
use super::scoring::{normalize_likert, round_percent};

/// Both constructs in a pair must reach this score for the synergy to count.
pub const SYNERGY_THRESHOLD: f64 = 0.70;
const FOCUS_THRESHOLD: f64 = 0.70;
const FOCUS_TARGET: u8 = 70;
const MAX_FOCUS_AREAS: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SynergyPair {
    pub first: &'static str,
    pub second: &'static str,
    pub bonus: f64,
    pub label: &'static str,
}

pub const SYNERGY_PAIRS: &[SynergyPair] = &[
    SynergyPair {
        first: "culturalAuthenticity",
        second: "adaptiveResponse",
        bonus: 0.092,
        label: "Cultural Integrity + Adaptive Capacity",
    },
    SynergyPair {
        first: "communityInvolvement",
        second: "adaptiveResponse",
        bonus: 0.077,
        label: "Community Relevance + Adaptive Capacity",
    },
    SynergyPair {
        first: "productDevelopment",
        second: "culturalAuthenticity",
        bonus: 0.071,
        label: "Economic Value + Cultural Integrity",
    },
    SynergyPair {
        first: "communityDecisionMaking",
        second: "benefitDistribution",
        bonus: 0.065,
        label: "Community Control + Community Benefit",
    },
    SynergyPair {
        first: "ipProtection",
        second: "culturalPreservation",
        bonus: 0.058,
        label: "IP Protection + Cultural Protection",
    },
];

struct ConstructGuidance {
    construct: &'static str,
    area: &'static str,
    action: &'static str,
    impact: &'static str,
}

const GUIDANCE: &[ConstructGuidance] = &[
    ConstructGuidance {
        construct: "traditionalKnowledge",
        area: "Traditional Knowledge Documentation",
        action: "Document and digitize traditional knowledge with community elders",
        impact: "Foundation for authentic cultural innovation",
    },
    ConstructGuidance {
        construct: "practitionerAccess",
        area: "Practitioner Networks",
        action: "Develop relationships with skilled traditional practitioners",
        impact: "Essential for maintaining cultural integrity",
    },
    ConstructGuidance {
        construct: "culturalAuthenticity",
        area: "Cultural Authenticity",
        action: "Ensure community validation and cultural protocol adherence",
        impact: "Critical for market differentiation and community trust",
    },
    ConstructGuidance {
        construct: "communityInvolvement",
        area: "Community Involvement",
        action: "Establish community advisory boards and decision-making processes",
        impact: "Key predictor of long-term success (+23.9 pp)",
    },
    ConstructGuidance {
        construct: "adaptiveResponse",
        area: "Adaptive Capacity",
        action: "Develop systematic learning and response mechanisms",
        impact: "Highest discriminatory power (+64.7 pp)",
    },
    ConstructGuidance {
        construct: "financialReserves",
        area: "Financial Resilience",
        action: "Build operating reserves of 3-6 months expenses",
        impact: "Critical buffer against disruptions",
    },
    ConstructGuidance {
        construct: "communityDecisionMaking",
        area: "Community Governance",
        action: "Ensure community members control key strategic decisions",
        impact: "Strong predictor of sustainable outcomes (+33.7 pp)",
    },
    ConstructGuidance {
        construct: "ipProtection",
        area: "Intellectual Property Protection",
        action: "Establish legal protections for cultural knowledge and designs",
        impact: "Prevents exploitation and ensures fair compensation",
    },
    ConstructGuidance {
        construct: "intergenerationalPlanning",
        area: "Intergenerational Continuity",
        action: "Develop youth training programs and succession plans",
        impact: "Essential for long-term sustainability",
    },
    ConstructGuidance {
        construct: "productDevelopment",
        area: "Innovation Pipeline",
        action: "Establish regular cycles of culturally-grounded product development",
        impact: "Drives economic value creation (+36.8 pp)",
    },
];

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FocusArea {
    pub priority: u8,
    pub construct: &'static str,
    pub area: &'static str,
    pub current_score: u8,
    pub target_score: u8,
    pub impact: &'static str,
    pub action: &'static str,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConstructInsights {
    /// Weighted construct means in 0.0..=1.0.
    pub construct_scores: BTreeMap<String, f64>,
    pub active_synergies: Vec<SynergyPair>,
    /// Sum of active synergy bonuses, as a whole percentage.
    pub synergy_bonus: u8,
    pub focus_areas: Vec<FocusArea>,
}

pub fn construct_scores(answers: &Answers, questions: &[Question]) -> BTreeMap<String, f64> {
    let mut totals: BTreeMap<&str, (f64, f64, f64, u32)> = BTreeMap::new();

    for question in questions {
        let Some(value) = answers.get(question.id).and_then(|answer| answer.as_likert()) else {
            continue;
        };
        let normalized = normalize_likert(value, question.reverse) / 100.0;
        let weight = question.effective_weight();

        let entry = totals.entry(question.construct).or_insert((0.0, 0.0, 0.0, 0));
        entry.0 += normalized * weight;
        entry.1 += weight;
        entry.2 += normalized;
        entry.3 += 1;
    }

    totals
        .into_iter()
        .map(|(construct, (weighted, weight, plain, count))| {
            let score = if weight > 0.0 {
                weighted / weight
            } else {
                plain / f64::from(count)
            };
            (construct.to_string(), score)
        })
        .collect()
}

pub fn active_synergies(scores: &BTreeMap<String, f64>) -> Vec<SynergyPair> {
    let reaches = |construct: &str| {
        scores
            .get(construct)
            .is_some_and(|score| *score >= SYNERGY_THRESHOLD)
    };

    SYNERGY_PAIRS
        .iter()
        .filter(|pair| reaches(pair.first) && reaches(pair.second))
        .copied()
        .collect()
}

/// Weakest guided constructs below the focus threshold, lowest first.
pub fn focus_areas(scores: &BTreeMap<String, f64>) -> Vec<FocusArea> {
    let mut weak: Vec<(&ConstructGuidance, f64)> = GUIDANCE
        .iter()
        .filter_map(|guidance| {
            scores
                .get(guidance.construct)
                .filter(|score| **score < FOCUS_THRESHOLD)
                .map(|score| (guidance, *score))
        })
        .collect();
    weak.sort_by(|a, b| a.1.total_cmp(&b.1));

    weak.into_iter()
        .take(MAX_FOCUS_AREAS)
        .zip(1u8..)
        .map(|((guidance, score), priority)| FocusArea {
            priority,
            construct: guidance.construct,
            area: guidance.area,
            current_score: round_percent(score * 100.0),
            target_score: FOCUS_TARGET,
            impact: guidance.impact,
            action: guidance.action,
        })
        .collect()
}

pub fn analyze(answers: &Answers, questions: &[Question]) -> ConstructInsights {
    let construct_scores = construct_scores(answers, questions);
    let active_synergies = active_synergies(&construct_scores);
    let bonus: f64 = active_synergies.iter().map(|pair| pair.bonus).sum();
    let focus_areas = focus_areas(&construct_scores);

    ConstructInsights {
        construct_scores,
        active_synergies,
        synergy_bonus: round_percent(bonus * 100.0),
        focus_areas,
    }
}
