use serde::Serialize;

use crate::assessments::domain::AssessmentType;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ToolCategory {
    Calculator,
    Measurement,
    Analysis,
}

/// Interactive tool unlocked by completing a secondary assessment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ToolConfig {
    pub id: &'static str,
    pub name: &'static str,
    pub category: ToolCategory,
    pub unlock_requirement: AssessmentType,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ResourceCategory {
    Guides,
    Frameworks,
}

/// Downloadable document granted on completion. `id` is the access id stored with tool grants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResourceConfig {
    pub id: &'static str,
    pub title: &'static str,
    pub format: &'static str,
    pub category: ResourceCategory,
    pub unlock_requirement: AssessmentType,
}

const fn tool_config(
    id: &'static str,
    name: &'static str,
    category: ToolCategory,
    unlock_requirement: AssessmentType,
) -> ToolConfig {
    ToolConfig {
        id,
        name,
        category,
        unlock_requirement,
    }
}

#[rustfmt::skip]
pub const TOOLS: &[ToolConfig] = &[
    tool_config("innovation-intensity-ratio", "Innovation Intensity Ratio", ToolCategory::Measurement, AssessmentType::Cimm),
    tool_config("cultural-leverage-index", "Cultural Leverage Index", ToolCategory::Measurement, AssessmentType::Cimm),
    tool_config("innovation-readiness-calculator", "Innovation Readiness Calculator", ToolCategory::Calculator, AssessmentType::Cira),
    tool_config("innovation-inclusivity-score", "Innovation Inclusivity Score", ToolCategory::Measurement, AssessmentType::Cira),
    tool_config("tbl-calculator", "Triple Bottom Line Calculator", ToolCategory::Calculator, AssessmentType::Tbl),
    tool_config("economic-multiplier", "Economic Multiplier Effect", ToolCategory::Calculator, AssessmentType::Tbl),
    tool_config("sustainability-scorecard", "Sustainability Scorecard", ToolCategory::Analysis, AssessmentType::Ciss),
    tool_config("cultural-resilience-quotient", "Cultural Resilience Quotient", ToolCategory::Measurement, AssessmentType::Ciss),
    tool_config("pricing-calculator", "Cultural Product Pricing Calculator", ToolCategory::Calculator, AssessmentType::Pricing),
    tool_config("innovation-efficiency-rate", "Innovation Efficiency Rate", ToolCategory::Measurement, AssessmentType::Pricing),
];

pub const RESOURCES: &[ResourceConfig] = &[
    ResourceConfig {
        id: "resource-funding-guide-2026",
        title: "Global Funding Guide 2026",
        format: "PDF",
        category: ResourceCategory::Guides,
        unlock_requirement: AssessmentType::Cirf,
    },
    ResourceConfig {
        id: "resource-creative-reconstruction",
        title: "Creative Reconstruction Framework",
        format: "PDF",
        category: ResourceCategory::Frameworks,
        unlock_requirement: AssessmentType::Cirf,
    },
];

pub fn tool(id: &str) -> Option<&'static ToolConfig> {
    TOOLS.iter().find(|tool| tool.id == id)
}

pub fn resource(id: &str) -> Option<&'static ResourceConfig> {
    RESOURCES.iter().find(|resource| resource.id == id)
}
