use super::{likert, AssessmentDefinition, Question, Section};
use crate::assessments::domain::AssessmentType;

pub(super) static DEFINITION: AssessmentDefinition = AssessmentDefinition {
    kind: AssessmentType::Pricing,
    name: "Pricing",
    full_name: "Cultural Product Pricing Assessment",
    description: "Find the right price for your work. Stop undercharging and start capturing the true value you create.",
    estimated_minutes: 6,
    credit_cost: 0,
    unlock_requirement: Some(AssessmentType::Cirf),
    unlocks: &[],
    grants_tools: &["pricing-calculator", "innovation-efficiency-rate"],
    grants_resources: &[],
    sections: SECTIONS,
    questions: QUESTIONS,
    profile_questions: &[],
};

const SECTIONS: &[Section] = &[
    Section {
        id: "costAnalysis",
        title: "Cost Analysis",
        description: "Do you know what it really costs to make your products? Let's find out.",
    },
    Section {
        id: "valueProposition",
        title: "Value Proposition",
        description: "What makes your work worth more than the alternatives? Let's capture it.",
    },
    Section {
        id: "marketPositioning",
        title: "Market Positioning",
        description: "Are you reaching the customers who will pay what you're worth? Let's see.",
    },
    Section {
        id: "priceOptimization",
        title: "Price Optimization",
        description: "Are you leaving money on the table? Let's check your strategy.",
    },
];

#[rustfmt::skip]
const QUESTIONS: &[Question] = &[
    likert("price-ca-1", "costAnalysis", "costClarity", 1.4, "We have clear visibility into all direct costs of producing our cultural products"),
    likert("price-ca-2", "costAnalysis", "overheadAllocation", 1.2, "We accurately allocate overhead and indirect costs to products"),
    likert("price-ca-3", "costAnalysis", "laborValuation", 1.5, "Our pricing accounts for fair wages including time for mastering traditional skills"),
    likert("price-ca-4", "costAnalysis", "culturalCostInclusion", 1.3, "We include costs of cultural preservation and knowledge transfer in pricing"),
    likert("price-vp-1", "valueProposition", "uniquenessRecognition", 1.4, "Customers recognize and value the uniqueness of our cultural products"),
    likert("price-vp-2", "valueProposition", "storyValue", 1.3, "We effectively communicate the cultural story and provenance of our products"),
    likert("price-vp-3", "valueProposition", "qualityPerception", 1.4, "Our products are perceived as high quality and artisanally crafted"),
    likert("price-vp-4", "valueProposition", "impactValue", 1.2, "Customers value knowing their purchase supports cultural preservation"),
    likert("price-mp-1", "marketPositioning", "targetSegment", 1.4, "We have identified and focus on customer segments willing to pay for cultural value"),
    likert("price-mp-2", "marketPositioning", "competitiveDifferentiation", 1.3, "Our products are clearly differentiated from mass-produced alternatives"),
    likert("price-mp-3", "marketPositioning", "pricePerception", 1.2, "Our prices are perceived as fair relative to the value provided"),
    likert("price-mp-4", "marketPositioning", "premiumJustification", 1.4, "We can justify premium prices through demonstrable quality and authenticity"),
    likert("price-po-1", "priceOptimization", "pricingStrategy", 1.5, "We have a deliberate pricing strategy rather than reactive or cost-plus pricing"),
    likert("price-po-2", "priceOptimization", "priceVariation", 1.2, "We use different price points for different markets or product tiers"),
    likert("price-po-3", "priceOptimization", "priceReview", 1.3, "We regularly review and adjust prices based on costs, competition, and demand"),
];
