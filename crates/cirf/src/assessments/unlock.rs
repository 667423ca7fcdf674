//! Prerequisite rules deciding which assessments, tools and resources a user
//! can reach. Every rule is a pure function of the completed assessment types.

use std::collections::BTreeSet;

use serde::Serialize;

use super::catalog::{self, tool};
use super::domain::AssessmentType;

/// Outcome of an access check. A locked assessment is not an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum Access {
    Unlocked,
    Locked { requires: AssessmentType },
}

impl Access {
    pub fn is_unlocked(&self) -> bool {
        matches!(self, Access::Unlocked)
    }
}

pub fn prerequisite(kind: AssessmentType) -> Option<AssessmentType> {
    catalog::definition(kind).unlock_requirement
}

pub fn access(kind: AssessmentType, completed: &BTreeSet<AssessmentType>) -> Access {
    match prerequisite(kind) {
        Some(requires) if !completed.contains(&requires) => Access::Locked { requires },
        _ => Access::Unlocked,
    }
}

/// Every assessment type reachable from the given completions, in catalog order.
pub fn accessible(completed: &BTreeSet<AssessmentType>) -> Vec<AssessmentType> {
    AssessmentType::ALL
        .into_iter()
        .filter(|kind| access(*kind, completed).is_unlocked())
        .collect()
}

/// What finishing one assessment hands out.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CompletionGrants {
    pub unlocked_assessments: Vec<AssessmentType>,
    pub tools: Vec<&'static str>,
    pub resources: Vec<&'static str>,
}

pub fn completion_grants(kind: AssessmentType) -> CompletionGrants {
    let definition = catalog::definition(kind);
    CompletionGrants {
        unlocked_assessments: definition.unlocks.to_vec(),
        tools: definition.grants_tools.to_vec(),
        resources: definition.grants_resources.to_vec(),
    }
}

pub fn requirement_message(kind: AssessmentType) -> String {
    match prerequisite(kind) {
        None => "This assessment is available to all users.".to_string(),
        Some(requires) => format!(
            "Complete the {} assessment to unlock this assessment.",
            catalog::definition(requires).name
        ),
    }
}

pub fn tool_requirement_message(tool_id: &str) -> String {
    match tool(tool_id) {
        Some(tool) => format!(
            "Complete the {} assessment to unlock this tool.",
            catalog::definition(tool.unlock_requirement).name
        ),
        None => "Unknown tool.".to_string(),
    }
}

/// Tool access mirrors assessment access: the granting assessment must be completed.
pub fn tool_access(tool_id: &str, completed: &BTreeSet<AssessmentType>) -> Option<bool> {
    tool(tool_id).map(|tool| completed.contains(&tool.unlock_requirement))
}
