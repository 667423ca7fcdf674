//! Static question bank for the six assessments, plus the tool and resource
//! catalogs that completions grant.

mod cimm;
mod cira;
mod cirf;
mod ciss;
mod pricing;
mod tbl;
mod tools;

use serde::Serialize;

use super::domain::AssessmentType;

pub use tools::{resource, tool, ResourceCategory, ResourceConfig, ToolCategory, ToolConfig};
pub use tools::{RESOURCES, TOOLS};

/// One 1-7 Likert item.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Question {
    pub id: &'static str,
    pub section: &'static str,
    pub construct: &'static str,
    pub weight: f64,
    pub reverse: bool,
    pub prompt: &'static str,
}

impl Question {
    /// Weight used in the overall mean. Negative or non-finite weights count as zero.
    pub fn effective_weight(&self) -> f64 {
        let weight = self.weight;
        if weight.is_finite() && weight > 0.0 {
            weight
        } else {
            0.0
        }
    }
}

pub(crate) const fn likert(
    id: &'static str,
    section: &'static str,
    construct: &'static str,
    weight: f64,
    prompt: &'static str,
) -> Question {
    Question {
        id,
        section,
        construct,
        weight,
        reverse: false,
        prompt,
    }
}

pub(crate) const fn reversed(
    id: &'static str,
    section: &'static str,
    construct: &'static str,
    weight: f64,
    prompt: &'static str,
) -> Question {
    Question {
        id,
        section,
        construct,
        weight,
        reverse: true,
        prompt,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ChoiceOption {
    pub value: &'static str,
    pub label: &'static str,
}

/// Categorical profile question. Stored with the answers but never scored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileQuestion {
    pub id: &'static str,
    pub section: &'static str,
    pub prompt: &'static str,
    pub options: &'static [ChoiceOption],
    pub required: bool,
}

impl ProfileQuestion {
    pub fn accepts(&self, value: &str) -> bool {
        self.options.iter().any(|option| option.value == value)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Section {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AssessmentDefinition {
    #[serde(rename = "type")]
    pub kind: AssessmentType,
    pub name: &'static str,
    pub full_name: &'static str,
    pub description: &'static str,
    pub estimated_minutes: u8,
    pub credit_cost: u32,
    pub unlock_requirement: Option<AssessmentType>,
    pub unlocks: &'static [AssessmentType],
    pub grants_tools: &'static [&'static str],
    pub grants_resources: &'static [&'static str],
    pub sections: &'static [Section],
    pub questions: &'static [Question],
    pub profile_questions: &'static [ProfileQuestion],
}

impl AssessmentDefinition {
    pub fn questions_in_section<'a>(
        &'a self,
        section: &'a str,
    ) -> impl Iterator<Item = &'static Question> + 'a {
        self.questions
            .iter()
            .filter(move |question| question.section == section)
    }

    /// Sections that carry Likert questions, in presentation order.
    pub fn scored_sections(&self) -> impl Iterator<Item = &'static Section> + '_ {
        self.sections
            .iter()
            .filter(move |section| self.questions.iter().any(|q| q.section == section.id))
    }

    pub fn summary(&self) -> AssessmentSummary {
        AssessmentSummary {
            kind: self.kind,
            name: self.name,
            full_name: self.full_name,
            description: self.description,
            estimated_minutes: self.estimated_minutes,
            credit_cost: self.credit_cost,
            question_count: self.questions.len() + self.profile_questions.len(),
            sections: self.sections.iter().map(|section| section.id).collect(),
            unlock_requirement: self.unlock_requirement,
        }
    }
}

/// Listing view without the question bodies.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AssessmentSummary {
    #[serde(rename = "type")]
    pub kind: AssessmentType,
    pub name: &'static str,
    pub full_name: &'static str,
    pub description: &'static str,
    pub estimated_minutes: u8,
    pub credit_cost: u32,
    pub question_count: usize,
    pub sections: Vec<&'static str>,
    pub unlock_requirement: Option<AssessmentType>,
}

pub fn definition(kind: AssessmentType) -> &'static AssessmentDefinition {
    match kind {
        AssessmentType::Cirf => &cirf::DEFINITION,
        AssessmentType::Cimm => &cimm::DEFINITION,
        AssessmentType::Cira => &cira::DEFINITION,
        AssessmentType::Tbl => &tbl::DEFINITION,
        AssessmentType::Ciss => &ciss::DEFINITION,
        AssessmentType::Pricing => &pricing::DEFINITION,
    }
}

pub fn all() -> impl Iterator<Item = &'static AssessmentDefinition> {
    AssessmentType::ALL.into_iter().map(definition)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn question_ids_are_unique_across_the_bank() {
        let mut seen = HashSet::new();
        for definition in all() {
            for question in definition.questions {
                assert!(seen.insert(question.id), "duplicate id {}", question.id);
            }
            for question in definition.profile_questions {
                assert!(seen.insert(question.id), "duplicate id {}", question.id);
            }
        }
    }

    #[test]
    fn every_question_belongs_to_a_declared_section() {
        for definition in all() {
            let sections: HashSet<_> = definition.sections.iter().map(|s| s.id).collect();
            for question in definition.questions {
                assert!(
                    sections.contains(question.section),
                    "{} references unknown section {}",
                    question.id,
                    question.section
                );
            }
        }
    }

    #[test]
    fn question_counts_match_published_totals() {
        let counts: Vec<_> = all()
            .map(|definition| (definition.kind, definition.questions.len()))
            .collect();
        assert_eq!(
            counts,
            vec![
                (AssessmentType::Cirf, 34),
                (AssessmentType::Cimm, 20),
                (AssessmentType::Cira, 20),
                (AssessmentType::Tbl, 20),
                (AssessmentType::Ciss, 18),
                (AssessmentType::Pricing, 15),
            ]
        );
        assert_eq!(definition(AssessmentType::Cirf).profile_questions.len(), 6);
    }

    #[test]
    fn only_cirf_is_unconditional_and_costs_a_credit() {
        for definition in all() {
            if definition.kind.is_foundational() {
                assert_eq!(definition.unlock_requirement, None);
                assert_eq!(definition.credit_cost, 1);
            } else {
                assert_eq!(definition.unlock_requirement, Some(AssessmentType::Cirf));
                assert_eq!(definition.credit_cost, 0);
                assert_eq!(definition.grants_tools.len(), 2);
            }
        }
    }

    #[test]
    fn granted_tools_and_resources_exist_in_catalogs() {
        for definition in all() {
            for id in definition.grants_tools {
                assert!(tool(id).is_some(), "missing tool {id}");
            }
            for id in definition.grants_resources {
                assert!(resource(id).is_some(), "missing resource {id}");
            }
        }
    }

    #[test]
    fn only_barrier_items_are_reverse_scored() {
        let reversed: Vec<_> = all()
            .flat_map(|definition| definition.questions.iter())
            .filter(|question| question.reverse)
            .map(|question| question.id)
            .collect();
        assert_eq!(
            reversed,
            vec!["cira-ba-1", "cira-ba-2", "cira-ba-3", "cira-ba-4", "cira-ba-5"]
        );
    }

    #[test]
    fn effective_weight_ignores_invalid_values() {
        let mut question = likert("x", "s", "c", 1.5, "prompt");
        assert_eq!(question.effective_weight(), 1.5);
        question.weight = -1.0;
        assert_eq!(question.effective_weight(), 0.0);
        question.weight = f64::NAN;
        assert_eq!(question.effective_weight(), 0.0);
    }

    #[test]
    fn fractional_weights_keep_their_exact_value() {
        let question = likert("x", "s", "c", 1.3, "prompt");
        assert_eq!(question.effective_weight(), 1.3);

        let cimm_weights: Vec<f64> = definition(AssessmentType::Cimm)
            .questions
            .iter()
            .filter(|question| question.id == "cimm-id-2")
            .map(Question::effective_weight)
            .collect();
        assert_eq!(cimm_weights, vec![1.3]);
    }
}
