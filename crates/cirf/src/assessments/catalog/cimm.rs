use super::{likert, AssessmentDefinition, Question, Section};
use crate::assessments::domain::AssessmentType;

pub(super) static DEFINITION: AssessmentDefinition = AssessmentDefinition {
    kind: AssessmentType::Cimm,
    name: "CIMM",
    full_name: "Cultural Innovation Measurement Matrix",
    description: "See how well you're balancing tradition with innovation, and where you can increase impact.",
    estimated_minutes: 8,
    credit_cost: 0,
    unlock_requirement: Some(AssessmentType::Cirf),
    unlocks: &[],
    grants_tools: &["innovation-intensity-ratio", "cultural-leverage-index"],
    grants_resources: &[],
    sections: SECTIONS,
    questions: QUESTIONS,
    profile_questions: &[],
};

const SECTIONS: &[Section] = &[
    Section {
        id: "innovationDepth",
        title: "Innovation Depth",
        description: "Are you scratching the surface or going deep? Let's measure.",
    },
    Section {
        id: "culturalIntegrity",
        title: "Cultural Integrity",
        description: "Is your community proud of what you're creating? Let's check.",
    },
    Section {
        id: "economicImpact",
        title: "Economic Impact",
        description: "Is your innovation paying off financially? Let's see the numbers.",
    },
    Section {
        id: "innovationVelocity",
        title: "Innovation Velocity",
        description: "How fast can you bring new ideas to market? Let's find out.",
    },
];

#[rustfmt::skip]
const QUESTIONS: &[Question] = &[
    likert("cimm-id-1", "innovationDepth", "knowledgeIntegration", 1.4, "Our innovations incorporate deep traditional knowledge, not just surface aesthetics"),
    likert("cimm-id-2", "innovationDepth", "techniqueTransformation", 1.3, "We have developed new applications for traditional techniques"),
    likert("cimm-id-3", "innovationDepth", "crossCulturalSynthesis", 1.2, "Our innovations meaningfully bridge cultural traditions with contemporary needs"),
    likert("cimm-id-4", "innovationDepth", "materialInnovation", 1.1, "We have innovated with traditional materials in new ways"),
    likert("cimm-id-5", "innovationDepth", "processInnovation", 1.2, "We have improved traditional processes while maintaining their essence"),
    likert("cimm-ci-1", "culturalIntegrity", "sourceAuthenticity", 1.5, "Our innovations are recognized as authentic by source communities"),
    likert("cimm-ci-2", "culturalIntegrity", "meaningPreservation", 1.4, "Cultural meanings and symbolism are preserved in our innovations"),
    likert("cimm-ci-3", "culturalIntegrity", "storyTelling", 1.1, "We communicate the cultural stories behind our innovations"),
    likert("cimm-ci-4", "culturalIntegrity", "communityConsent", 1.5, "We have explicit consent from communities for our use of cultural knowledge"),
    likert("cimm-ci-5", "culturalIntegrity", "culturalRespect", 1.3, "We actively avoid cultural misrepresentation or exploitation"),
    likert("cimm-ei-1", "economicImpact", "revenueGrowth", 1.3, "Our cultural innovations have driven significant revenue growth"),
    likert("cimm-ei-2", "economicImpact", "marketPremium", 1.4, "Our products command a premium price due to cultural value"),
    likert("cimm-ei-3", "economicImpact", "communityIncome", 1.5, "Our innovations have increased income for community members"),
    likert("cimm-ei-4", "economicImpact", "marketExpansion", 1.2, "We have successfully accessed new markets through cultural innovations"),
    likert("cimm-ei-5", "economicImpact", "investmentReturn", 1.1, "Our innovation investments have generated positive returns"),
    likert("cimm-iv-1", "innovationVelocity", "developmentSpeed", 1.2, "We can develop new cultural products faster than 12 months ago"),
    likert("cimm-iv-2", "innovationVelocity", "ideaPipeline", 1.1, "We have a pipeline of innovation ideas waiting for development"),
    likert("cimm-iv-3", "innovationVelocity", "iterationCycles", 1.3, "We iterate and improve products based on market feedback quickly"),
    likert("cimm-iv-4", "innovationVelocity", "launchFrequency", 1.0, "We launch new products or services at least quarterly"),
    likert("cimm-iv-5", "innovationVelocity", "scalingEfficiency", 1.2, "We can scale successful innovations efficiently"),
];
