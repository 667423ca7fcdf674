use std::collections::BTreeSet;

use crate::assessments::domain::AssessmentType;
use crate::assessments::unlock::{
    access, accessible, completion_grants, requirement_message, tool_access,
    tool_requirement_message, Access,
};

fn completed(kinds: &[AssessmentType]) -> BTreeSet<AssessmentType> {
    kinds.iter().copied().collect()
}

#[test]
fn only_cirf_is_open_before_any_completion() {
    assert_eq!(accessible(&BTreeSet::new()), vec![AssessmentType::Cirf]);
    assert_eq!(
        access(AssessmentType::Tbl, &BTreeSet::new()),
        Access::Locked {
            requires: AssessmentType::Cirf
        }
    );
}

#[test]
fn completing_cirf_opens_every_secondary() {
    let open = accessible(&completed(&[AssessmentType::Cirf]));
    assert_eq!(open, AssessmentType::ALL.to_vec());
}

#[test]
fn secondary_completions_alone_do_not_unlock_anything() {
    let open = accessible(&completed(&[AssessmentType::Cimm, AssessmentType::Ciss]));
    assert_eq!(open, vec![AssessmentType::Cirf]);
}

#[test]
fn accessibility_is_monotonic_in_completions() {
    let mut done = BTreeSet::new();
    let mut previous = accessible(&done);
    for kind in AssessmentType::ALL {
        done.insert(kind);
        let current = accessible(&done);
        assert!(previous.iter().all(|kind| current.contains(kind)));
        previous = current;
    }
}

#[test]
fn cirf_completion_grants_resources_and_unlocks() {
    let grants = completion_grants(AssessmentType::Cirf);
    assert_eq!(grants.unlocked_assessments.len(), 5);
    assert!(grants.tools.is_empty());
    assert_eq!(
        grants.resources,
        vec![
            "resource-funding-guide-2026",
            "resource-creative-reconstruction"
        ]
    );
}

#[test]
fn secondary_completion_grants_its_tools() {
    let grants = completion_grants(AssessmentType::Pricing);
    assert!(grants.unlocked_assessments.is_empty());
    assert_eq!(
        grants.tools,
        vec!["pricing-calculator", "innovation-efficiency-rate"]
    );
    assert!(grants.resources.is_empty());
}

#[test]
fn requirement_messages_name_the_prerequisite() {
    assert_eq!(
        requirement_message(AssessmentType::Cirf),
        "This assessment is available to all users."
    );
    assert_eq!(
        requirement_message(AssessmentType::Cimm),
        "Complete the CIRF assessment to unlock this assessment."
    );
    assert_eq!(
        tool_requirement_message("tbl-calculator"),
        "Complete the TBL-CI assessment to unlock this tool."
    );
    assert_eq!(tool_requirement_message("crystal-ball"), "Unknown tool.");
}

#[test]
fn tool_access_requires_the_granting_assessment() {
    let done = completed(&[AssessmentType::Cirf, AssessmentType::Cira]);
    assert_eq!(tool_access("innovation-readiness-calculator", &done), Some(true));
    assert_eq!(tool_access("sustainability-scorecard", &done), Some(false));
    assert_eq!(tool_access("crystal-ball", &done), None);
}
