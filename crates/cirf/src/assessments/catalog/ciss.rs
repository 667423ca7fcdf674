use super::{likert, AssessmentDefinition, Question, Section};
use crate::assessments::domain::AssessmentType;

pub(super) static DEFINITION: AssessmentDefinition = AssessmentDefinition {
    kind: AssessmentType::Ciss,
    name: "CISS",
    full_name: "Cultural Innovation Sustainability Scorecard",
    description: "Check if your cultural enterprise can thrive for generations, not just years.",
    estimated_minutes: 7,
    credit_cost: 0,
    unlock_requirement: Some(AssessmentType::Cirf),
    unlocks: &[],
    grants_tools: &["sustainability-scorecard", "cultural-resilience-quotient"],
    grants_resources: &[],
    sections: SECTIONS,
    questions: QUESTIONS,
    profile_questions: &[],
};

const SECTIONS: &[Section] = &[
    Section {
        id: "economicSustainability",
        title: "Economic Sustainability",
        description: "Assess long-term financial viability and stability",
    },
    Section {
        id: "culturalSustainability",
        title: "Cultural Sustainability",
        description: "Evaluate cultural preservation and continuity",
    },
    Section {
        id: "socialSustainability",
        title: "Social Sustainability",
        description: "Measure community and social system health",
    },
    Section {
        id: "environmentalSustainability",
        title: "Environmental Sustainability",
        description: "Assess ecological impact and resource management",
    },
];

#[rustfmt::skip]
const QUESTIONS: &[Question] = &[
    likert("ciss-es-1", "economicSustainability", "financialViability", 1.5, "Our business model generates sufficient revenue to cover all costs"),
    likert("ciss-es-2", "economicSustainability", "diversification", 1.3, "We have diversified revenue streams that reduce dependency risk"),
    likert("ciss-es-3", "economicSustainability", "pricingPower", 1.2, "We can maintain or increase prices over time without losing customers"),
    likert("ciss-es-4", "economicSustainability", "investmentCapacity", 1.3, "We can invest in growth and improvement from our own earnings"),
    likert("ciss-es-5", "economicSustainability", "economicResilience", 1.4, "We could survive a significant economic downturn or market disruption"),
    likert("ciss-cs-1", "culturalSustainability", "knowledgeTransmission", 1.5, "Traditional knowledge is being actively passed to younger generations"),
    likert("ciss-cs-2", "culturalSustainability", "practitionerPipeline", 1.4, "We have a pipeline of new practitioners to replace retiring masters"),
    likert("ciss-cs-3", "culturalSustainability", "authenticityMaintenance", 1.5, "We maintain cultural authenticity even as we scale or commercialize"),
    likert("ciss-cs-4", "culturalSustainability", "documentationPractice", 1.2, "We systematically document techniques and knowledge for preservation"),
    likert("ciss-cs-5", "culturalSustainability", "communityRelevance", 1.3, "Our cultural practices remain relevant and valued by the community"),
    likert("ciss-ss-1", "socialSustainability", "communityHealth", 1.4, "Our activities contribute to overall community well-being"),
    likert("ciss-ss-2", "socialSustainability", "equitableDistribution", 1.5, "Benefits from our work are distributed equitably across the community"),
    likert("ciss-ss-3", "socialSustainability", "socialCohesion", 1.2, "Our work strengthens social bonds and community relationships"),
    likert("ciss-ss-4", "socialSustainability", "youthEngagement", 1.4, "Young people are actively engaged in and excited about our cultural work"),
    likert("ciss-env-1", "environmentalSustainability", "resourceStewardship", 1.5, "We manage natural resources in ways that ensure long-term availability"),
    likert("ciss-env-2", "environmentalSustainability", "ecologicalBalance", 1.3, "Our activities maintain or improve local ecological balance"),
    likert("ciss-env-3", "environmentalSustainability", "climateAdaptation", 1.2, "We have strategies to adapt to changing environmental conditions"),
    likert("ciss-env-4", "environmentalSustainability", "traditionalEcology", 1.4, "We incorporate traditional ecological knowledge in our practices"),
];
