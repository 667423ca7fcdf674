use super::{likert, AssessmentDefinition, Question, Section};
use crate::assessments::domain::AssessmentType;

pub(super) static DEFINITION: AssessmentDefinition = AssessmentDefinition {
    kind: AssessmentType::Tbl,
    name: "TBL-CI",
    full_name: "Triple Bottom Line Cultural Innovation",
    description: "See how your work creates value across three dimensions: profit, people, and planet.",
    estimated_minutes: 8,
    credit_cost: 0,
    unlock_requirement: Some(AssessmentType::Cirf),
    unlocks: &[],
    grants_tools: &["tbl-calculator", "economic-multiplier"],
    grants_resources: &[],
    sections: SECTIONS,
    questions: QUESTIONS,
    profile_questions: &[],
};

const SECTIONS: &[Section] = &[
    Section {
        id: "economicReturns",
        title: "Economic Returns",
        description: "Is your business financially healthy? Let's check the profit side.",
    },
    Section {
        id: "socialImpact",
        title: "Social Impact",
        description: "Are you making life better for people? Let's measure the human impact.",
    },
    Section {
        id: "environmentalImpact",
        title: "Environmental Impact",
        description: "Are you being kind to the planet? Let's assess your footprint.",
    },
];

#[rustfmt::skip]
const QUESTIONS: &[Question] = &[
    likert("tbl-er-1", "economicReturns", "profitability", 1.3, "Our cultural enterprise is financially profitable or on track to profitability"),
    likert("tbl-er-2", "economicReturns", "revenueGrowth", 1.2, "Our revenue has grown consistently over the past year"),
    likert("tbl-er-3", "economicReturns", "localEconomicImpact", 1.4, "We contribute significantly to the local economy through purchases and payments"),
    likert("tbl-er-4", "economicReturns", "livelihoodSupport", 1.5, "We provide sustainable livelihoods for practitioners and team members"),
    likert("tbl-er-5", "economicReturns", "economicMultiplier", 1.2, "Our activities create indirect economic benefits beyond direct employment"),
    likert("tbl-er-6", "economicReturns", "financialResilience", 1.3, "We have financial reserves and diverse revenue streams"),
    likert("tbl-si-1", "socialImpact", "culturalPreservation", 1.5, "Our work actively preserves and transmits cultural traditions"),
    likert("tbl-si-2", "socialImpact", "communityEmpowerment", 1.4, "Community members have meaningful decision-making power in our organization"),
    likert("tbl-si-3", "socialImpact", "skillDevelopment", 1.3, "We invest in developing skills and capabilities of community members"),
    likert("tbl-si-4", "socialImpact", "inclusiveEmployment", 1.4, "We provide employment opportunities to marginalized or vulnerable groups"),
    likert("tbl-si-5", "socialImpact", "communityBenefits", 1.2, "We share benefits with the broader community beyond direct participants"),
    likert("tbl-si-6", "socialImpact", "culturalPride", 1.3, "Our work increases community pride in cultural heritage"),
    likert("tbl-si-7", "socialImpact", "intergenerationalTransfer", 1.5, "We actively facilitate knowledge transfer between generations"),
    likert("tbl-ei-1", "environmentalImpact", "sustainableMaterials", 1.4, "We source materials sustainably and responsibly"),
    likert("tbl-ei-2", "environmentalImpact", "wasteReduction", 1.2, "We minimize waste in our production processes"),
    likert("tbl-ei-3", "environmentalImpact", "energyEfficiency", 1.1, "We use energy efficiently and seek renewable sources"),
    likert("tbl-ei-4", "environmentalImpact", "traditionalEcoPractices", 1.5, "We employ traditional practices that are inherently sustainable"),
    likert("tbl-ei-5", "environmentalImpact", "biodiversityProtection", 1.3, "Our activities support or protect local biodiversity"),
    likert("tbl-ei-6", "environmentalImpact", "carbonFootprint", 1.2, "We actively work to minimize our carbon footprint"),
    likert("tbl-ei-7", "environmentalImpact", "environmentalEducation", 1.0, "We educate customers and community about environmental sustainability"),
];
