use super::{likert, AssessmentDefinition, ChoiceOption, ProfileQuestion, Question, Section};
use crate::assessments::domain::AssessmentType;

pub(super) static DEFINITION: AssessmentDefinition = AssessmentDefinition {
    kind: AssessmentType::Cirf,
    name: "CIRF",
    full_name: "Cultural Innovation Resilience Framework",
    description: "Discover your strengths and growth areas across 4 key dimensions. Get personalized insights to build a more sustainable cultural business.",
    estimated_minutes: 15,
    credit_cost: 1,
    unlock_requirement: None,
    unlocks: &[
        AssessmentType::Cimm,
        AssessmentType::Cira,
        AssessmentType::Tbl,
        AssessmentType::Ciss,
        AssessmentType::Pricing,
    ],
    grants_tools: &[],
    grants_resources: &[
        "resource-funding-guide-2026",
        "resource-creative-reconstruction",
    ],
    sections: SECTIONS,
    questions: QUESTIONS,
    profile_questions: PROFILE_QUESTIONS,
};

const SECTIONS: &[Section] = &[
    Section {
        id: "demographics",
        title: "Context & Demographics",
        description: "Tell us about your organization and initiative",
    },
    Section {
        id: "culturalCapital",
        title: "Cultural Capital",
        description: "Assess your cultural assets and authenticity",
    },
    Section {
        id: "innovationActivities",
        title: "Innovation Activities",
        description: "Evaluate your innovation and market activities",
    },
    Section {
        id: "organizationalCapacities",
        title: "Organizational Capacities",
        description: "Measure your organizational resilience and governance",
    },
    Section {
        id: "economicResilience",
        title: "Economic Resilience Outcomes",
        description: "Assess your economic resilience and recovery outcomes",
    },
];

#[rustfmt::skip]
const QUESTIONS: &[Question] = &[
    likert("cc-1", "culturalCapital", "traditionalKnowledge", 1.0, "Our organization has documented traditional knowledge relevant to our activities"),
    likert("cc-2", "culturalCapital", "practitionerAccess", 1.2, "We have access to skilled practitioners of traditional techniques"),
    likert("cc-3", "culturalCapital", "culturalAuthenticity", 1.3, "Our cultural practices have recognized authenticity within source communities"),
    likert("cc-4", "culturalCapital", "communityInvolvement", 1.4, "Cultural practitioners from source communities are involved in development decisions"),
    likert("cc-5", "culturalCapital", "culturalPreservation", 1.1, "Our innovations build upon (rather than replace) traditional practices"),
    likert("cc-6", "culturalCapital", "culturalMeaning", 1.0, "Cultural meanings and values are preserved in our commercial activities"),
    likert("cc-7", "culturalCapital", "practitionerRelationships", 1.0, "We have strong relationships with cultural knowledge holders"),
    likert("cc-8", "culturalCapital", "culturalMembership", 0.9, "Our team includes members from the source culture community"),
    likert("ia-1", "innovationActivities", "productDevelopment", 1.2, "We regularly develop new products/services based on cultural assets"),
    likert("ia-2", "innovationActivities", "techniqueCombination", 1.1, "We experiment with combining traditional and modern techniques"),
    likert("ia-3", "innovationActivities", "innovationLeadership", 1.3, "We have introduced innovations that others in our sector have adopted"),
    likert("ia-4", "innovationActivities", "marketExpansion", 1.0, "We have successfully entered new geographic markets"),
    likert("ia-5", "innovationActivities", "digitalDistribution", 0.9, "We use digital channels effectively for cultural product distribution"),
    likert("ia-6", "innovationActivities", "efficiencyImprovement", 1.0, "We have improved efficiency while maintaining cultural authenticity"),
    likert("ia-7", "innovationActivities", "externalCollaboration", 1.1, "We collaborate with external partners on innovation projects"),
    likert("ia-8", "innovationActivities", "feedbackIteration", 1.2, "We actively seek feedback and iterate on our offerings"),
    likert("oc-1", "organizationalCapacities", "adaptiveResponse", 1.5, "We have successfully adjusted operations in response to past disruptions"),
    likert("oc-2", "organizationalCapacities", "learningFromSetbacks", 1.3, "We have systematic processes for learning from setbacks"),
    likert("oc-3", "organizationalCapacities", "skillDiversity", 1.2, "Our team has diverse skills that allow flexibility"),
    likert("oc-4", "organizationalCapacities", "externalResources", 1.1, "We can access external resources and expertise when needed"),
    likert("oc-5", "organizationalCapacities", "ipProtection", 1.0, "We have legal protections for our cultural intellectual property"),
    likert("oc-6", "organizationalCapacities", "financialReserves", 1.2, "We maintain financial reserves for unexpected challenges"),
    likert("oc-7", "organizationalCapacities", "communityDecisionMaking", 1.4, "Community members make key strategic decisions"),
    likert("oc-8", "organizationalCapacities", "benefitDistribution", 1.3, "Benefits flow primarily to community members"),
    likert("oc-9", "organizationalCapacities", "communityOwnership", 1.4, "Community members have ownership stakes in our enterprise"),
    likert("oc-10", "organizationalCapacities", "allianceNetworks", 1.1, "We have alliance networks we can call on for support"),
    likert("er-1", "economicResilience", "revenueRetention", 1.3, "During the most recent economic shock, we maintained at least 70% of revenue"),
    likert("er-2", "economicResilience", "teamRetention", 1.2, "We retained at least 80% of our team during the last disruption"),
    likert("er-3", "economicResilience", "recoverySpeed", 1.4, "We recovered to pre-shock performance levels within 12 months"),
    likert("er-4", "economicResilience", "opportunityDiscovery", 1.1, "Disruptions have led us to discover new market opportunities"),
    likert("er-5", "economicResilience", "postShockStrength", 1.5, "Our organization is stronger now than before the last major shock"),
    likert("er-6", "economicResilience", "communitySpillover", 1.0, "Our success has spawned new initiatives in the community"),
    likert("er-7", "economicResilience", "jobCreation", 1.1, "We have created new jobs beyond our core team"),
    likert("er-8", "economicResilience", "intergenerationalPlanning", 1.2, "We have viable plans for intergenerational continuity"),
];

const fn option(value: &'static str, label: &'static str) -> ChoiceOption {
    ChoiceOption { value, label }
}

const fn profile(
    id: &'static str,
    prompt: &'static str,
    options: &'static [ChoiceOption],
) -> ProfileQuestion {
    ProfileQuestion {
        id,
        section: "demographics",
        prompt,
        options,
        required: true,
    }
}

const PROFILE_QUESTIONS: &[ProfileQuestion] = &[
    profile("demo-org-type", "What type of organization are you assessing?", ORGANIZATION_TYPES),
    profile("demo-sector", "Which cultural sector best describes your primary focus?", SECTORS),
    profile("demo-stage", "What stage is your initiative at?", STAGES),
    profile(
        "demo-team-size",
        "How many people are directly involved in the initiative?",
        TEAM_SIZES,
    ),
    profile("demo-revenue", "What is your approximate annual revenue/budget?", REVENUE_RANGES),
    profile("demo-region", "In which region is your initiative primarily based?", REGIONS),
];

const ORGANIZATION_TYPES: &[ChoiceOption] = &[
    option("cooperative", "Cooperative / Social Enterprise"),
    option("community-org", "Community Organization / NGO"),
    option("indigenous-enterprise", "Indigenous Enterprise"),
    option("cultural-institution", "Cultural Institution / Museum"),
    option("craft-guild", "Craft Guild / Artisan Collective"),
    option("for-profit", "For-Profit Cultural Business"),
    option("government", "Government / Public Agency"),
    option("other", "Other"),
];

const SECTORS: &[ChoiceOption] = &[
    option("crafts", "Crafts & Artisanal Products"),
    option("performing-arts", "Performing Arts"),
    option("visual-arts", "Visual Arts"),
    option("music", "Music & Audio"),
    option("food-beverage", "Food & Beverage"),
    option("fashion-textiles", "Fashion & Textiles"),
    option("heritage-tourism", "Heritage Tourism"),
    option("publishing-media", "Publishing & Media"),
    option("design", "Design & Creative Services"),
    option("education", "Cultural Education"),
    option("wellness", "Traditional Wellness & Medicine"),
    option("agriculture", "Cultural Agriculture & Farming"),
    option("multi-sector", "Multiple Sectors"),
];

const STAGES: &[ChoiceOption] = &[
    option("idea", "Idea / Concept Stage"),
    option("startup", "Startup (0-2 years)"),
    option("growth", "Growth Stage (2-5 years)"),
    option("scaling", "Scaling (5-10 years)"),
    option("established", "Established (10+ years)"),
];

const TEAM_SIZES: &[ChoiceOption] = &[
    option("solo", "Solo / Individual"),
    option("2-5", "2-5 people"),
    option("6-10", "6-10 people"),
    option("11-25", "11-25 people"),
    option("26-50", "26-50 people"),
    option("51+", "51+ people"),
];

const REVENUE_RANGES: &[ChoiceOption] = &[
    option("pre-revenue", "Pre-revenue / No income yet"),
    option("<10k", "Less than $10,000 USD"),
    option("10k-50k", "$10,000 - $50,000 USD"),
    option("50k-100k", "$50,000 - $100,000 USD"),
    option("100k-500k", "$100,000 - $500,000 USD"),
    option("500k+", "$500,000+ USD"),
];

const REGIONS: &[ChoiceOption] = &[
    option("africa", "Africa"),
    option("asia-pacific", "Asia Pacific"),
    option("europe", "Europe"),
    option("latin-america", "Latin America & Caribbean"),
    option("middle-east", "Middle East & North Africa"),
    option("north-america", "North America"),
    option("oceania", "Oceania"),
    option("global", "Global / Multiple Regions"),
];
