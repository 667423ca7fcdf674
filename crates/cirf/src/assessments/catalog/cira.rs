use super::{likert, reversed, AssessmentDefinition, Question, Section};
use crate::assessments::domain::AssessmentType;

pub(super) static DEFINITION: AssessmentDefinition = AssessmentDefinition {
    kind: AssessmentType::Cira,
    name: "CIRA",
    full_name: "Cultural Innovation Readiness Assessment",
    description: "Find out if you're ready to scale. Identify what's helping you grow and what's holding you back.",
    estimated_minutes: 8,
    credit_cost: 0,
    unlock_requirement: Some(AssessmentType::Cirf),
    unlocks: &[],
    grants_tools: &["innovation-readiness-calculator", "innovation-inclusivity-score"],
    grants_resources: &[],
    sections: SECTIONS,
    questions: QUESTIONS,
    profile_questions: &[],
};

const SECTIONS: &[Section] = &[
    Section {
        id: "culturalCapitalInventory",
        title: "Cultural Capital Inventory",
        description: "Assess your cultural assets and knowledge resources",
    },
    Section {
        id: "innovationEcosystem",
        title: "Innovation Ecosystem",
        description: "Evaluate your support network for innovation",
    },
    Section {
        id: "barriersAssessment",
        title: "Barriers Assessment",
        description: "Identify obstacles to cultural innovation",
    },
    Section {
        id: "readinessIndicators",
        title: "Readiness Indicators",
        description: "Measure your preparedness for innovation initiatives",
    },
];

#[rustfmt::skip]
const QUESTIONS: &[Question] = &[
    likert("cira-cci-1", "culturalCapitalInventory", "knowledgeDocumentation", 1.3, "We have documented our traditional knowledge and practices comprehensively"),
    likert("cira-cci-2", "culturalCapitalInventory", "practitionerNetwork", 1.4, "We have access to a network of skilled traditional practitioners"),
    likert("cira-cci-3", "culturalCapitalInventory", "materialAccess", 1.2, "We have reliable access to traditional materials and resources"),
    likert("cira-cci-4", "culturalCapitalInventory", "storyArchive", 1.1, "We maintain archives of cultural stories, histories, and meanings"),
    likert("cira-cci-5", "culturalCapitalInventory", "uniqueAssets", 1.5, "We possess unique cultural assets not easily replicated"),
    likert("cira-ie-1", "innovationEcosystem", "mentorAccess", 1.3, "We have access to mentors experienced in cultural innovation"),
    likert("cira-ie-2", "innovationEcosystem", "fundingAccess", 1.4, "We can access funding appropriate for cultural innovation projects"),
    likert("cira-ie-3", "innovationEcosystem", "partnerNetwork", 1.2, "We have partners who can contribute complementary skills"),
    likert("cira-ie-4", "innovationEcosystem", "marketAccess", 1.3, "We have pathways to reach customers who value cultural products"),
    likert("cira-ie-5", "innovationEcosystem", "policySupport", 1.0, "We benefit from supportive policies or programs for cultural enterprises"),
    reversed("cira-ba-1", "barriersAssessment", "skillGaps", 1.3, "We lack key skills needed for cultural innovation"),
    reversed("cira-ba-2", "barriersAssessment", "resourceConstraints", 1.4, "Limited resources significantly constrain our innovation capacity"),
    reversed("cira-ba-3", "barriersAssessment", "marketBarriers", 1.2, "Market access barriers prevent us from reaching potential customers"),
    reversed("cira-ba-4", "barriersAssessment", "culturalResistance", 1.3, "Community resistance to change limits our innovation options"),
    reversed("cira-ba-5", "barriersAssessment", "regulatoryBarriers", 1.1, "Regulatory or legal barriers impede our cultural innovations"),
    likert("cira-ri-1", "readinessIndicators", "leadershipCommitment", 1.5, "Our leadership is committed to cultural innovation"),
    likert("cira-ri-2", "readinessIndicators", "teamCapability", 1.4, "Our team has the skills and motivation to execute innovations"),
    likert("cira-ri-3", "readinessIndicators", "processReadiness", 1.2, "We have processes in place to develop and test innovations"),
    likert("cira-ri-4", "readinessIndicators", "marketInsight", 1.3, "We understand our target market and customer needs well"),
    likert("cira-ri-5", "readinessIndicators", "riskTolerance", 1.1, "We can tolerate the risks associated with innovation attempts"),
];
