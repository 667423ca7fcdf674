use crate::infra::{InMemoryAssessmentStore, InMemoryDraftStore};
use clap::Args;
use cirf::assessments::catalog::{self, AssessmentDefinition};
use cirf::assessments::insights::{self, ConstructInsights};
use cirf::assessments::validation::validate_submission;
use cirf::assessments::{
    AnswerValue, Answers, AssessmentRepository, AssessmentService, AssessmentServiceError,
    AssessmentSubmission, AssessmentType, DraftInput, DraftRepository, Interpretation,
    ScoreCard, SubmissionReceipt, UserId,
};
use cirf::error::AppError;
use cirf::rate_limit::RateLimitConfig;
use std::path::PathBuf;
use std::sync::Arc;

#[derive(Args, Debug)]
pub(crate) struct ScoreArgs {
    /// Assessment the answers belong to (cirf, cimm, cira, tbl, ciss, pricing)
    #[arg(long)]
    pub(crate) assessment: AssessmentType,
    /// JSON file mapping question ids to answers
    #[arg(long)]
    pub(crate) answers: PathBuf,
}

#[derive(Args, Debug)]
pub(crate) struct DemoArgs {
    /// Identity used for the walkthrough
    #[arg(long, default_value = "demo-user")]
    pub(crate) user: String,
    /// Credits the demo user starts with
    #[arg(long, default_value_t = 1)]
    pub(crate) starting_credits: u32,
}

impl Default for DemoArgs {
    fn default() -> Self {
        Self {
            user: "demo-user".to_string(),
            starting_credits: 1,
        }
    }
}

pub(crate) fn run_score(args: ScoreArgs) -> Result<(), AppError> {
    let raw = std::fs::read_to_string(&args.answers)?;
    let answers: Answers = serde_json::from_str(&raw)?;
    let definition = catalog::definition(args.assessment);

    if let Err(invalid) = validate_submission(definition, &answers) {
        println!("Validation issues ({})", invalid.0.len());
        for issue in &invalid.0 {
            println!("- {issue}");
        }
        println!("A submission with these answers would be rejected; scoring anyway.\n");
    }

    let card = cirf::assessments::score_answers(&answers, definition.questions);
    let insights = insights::analyze(&answers, definition.questions);
    render_score(definition, &card, &insights);
    Ok(())
}

pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let store = Arc::new(InMemoryAssessmentStore::new(args.starting_credits));
    let drafts = Arc::new(InMemoryDraftStore::default());
    let service = AssessmentService::new(store.clone(), drafts.clone(), RateLimitConfig::default());
    let user = UserId(args.user);

    println!("CIRF assessment demo for {user}");
    println!("\nCatalog");
    for summary in service.catalog() {
        let gate = summary
            .unlock_requirement
            .map(|requires| format!("requires {requires}"))
            .unwrap_or_else(|| "open".to_string());
        println!(
            "- {} ({}): {} questions, ~{} min, {} credit(s), {}",
            summary.name,
            summary.full_name,
            summary.question_count,
            summary.estimated_minutes,
            summary.credit_cost,
            gate
        );
    }

    println!("\nAttempting CIMM before CIRF");
    match service.submit(&user, sample_submission(AssessmentType::Cimm)) {
        Err(AssessmentServiceError::Locked { requires, .. }) => {
            println!("  Locked: complete {requires} first");
        }
        Err(err) => println!("  Rejected: {err}"),
        Ok(_) => println!("  Unexpectedly accepted"),
    }

    service.save_draft(
        &user,
        DraftInput {
            assessment_type: AssessmentType::Cirf,
            answers: sample_answers(catalog::definition(AssessmentType::Cirf))
                .into_iter()
                .take(5)
                .collect(),
            current_section: 1,
        },
    )?;
    println!("\nSaved a partial CIRF draft");

    println!("\nSubmitting CIRF");
    let receipt = service.submit(&user, sample_submission(AssessmentType::Cirf))?;
    render_receipt(&receipt);
    let draft_left = drafts
        .fetch(&user, AssessmentType::Cirf)
        .map_err(AssessmentServiceError::from)?
        .is_some();
    println!("  Draft cleared: {}", !draft_left);

    println!("\nSubmitting TBL-CI");
    let receipt = service.submit(&user, sample_submission(AssessmentType::Tbl))?;
    render_receipt(&receipt);

    println!("\nRetaking CIRF");
    match service.submit(&user, sample_submission(AssessmentType::Cirf)) {
        Ok(receipt) => render_receipt(&receipt),
        Err(err) => println!("  Rejected: {err}"),
    }

    let progress = service.progress_summary(&user)?;
    println!(
        "\nProgress: {}/{} completed | {} unlocked | {}%",
        progress.completed_assessments,
        progress.total_assessments,
        progress.unlocked_assessments,
        progress.completion_percentage
    );
    for (kind, entry) in &progress.assessments {
        let latest = entry
            .latest_score
            .map(|score| score.to_string())
            .unwrap_or_else(|| "-".to_string());
        println!(
            "- {kind}: unlocked {} | completed {} | latest {latest} | attempts {}",
            entry.is_unlocked, entry.is_completed, entry.completion_count
        );
    }

    let unlocks = service.unlock_status(&user)?;
    println!("\nTools: {}", join_or_none(&unlocks.tools));
    println!("Resources: {}", join_or_none(&unlocks.resources));
    println!(
        "Credits left: {}",
        store
            .credit_balance(&user)
            .map_err(AssessmentServiceError::from)?
    );

    if let Some(latest) = service.history(&user)?.first() {
        let detail = service.record(&user, &latest.id)?;
        let definition = catalog::definition(detail.record.assessment_type);
        let card = ScoreCard {
            overall_score: detail.record.score,
            section_scores: detail.record.section_scores.clone(),
        };
        println!("\nLatest record {}", latest.id);
        render_score(definition, &card, &detail.insights);
    }

    Ok(())
}

/// Deterministic answer set cycling through the upper half of the scale.
pub(crate) fn sample_answers(definition: &AssessmentDefinition) -> Answers {
    let mut answers: Answers = definition
        .questions
        .iter()
        .zip([5, 6, 4, 7, 3].into_iter().cycle())
        .map(|(question, value)| (question.id.to_string(), AnswerValue::Likert(value)))
        .collect();
    for question in definition.profile_questions {
        if let Some(option) = question.options.first() {
            answers.insert(
                question.id.to_string(),
                AnswerValue::Choice(option.value.to_string()),
            );
        }
    }
    answers
}

fn sample_submission(kind: AssessmentType) -> AssessmentSubmission {
    AssessmentSubmission {
        assessment_type: kind,
        answers: sample_answers(catalog::definition(kind)),
    }
}

fn render_receipt(receipt: &SubmissionReceipt) {
    println!(
        "  Score {} ({}) | balance {}",
        receipt.score, receipt.interpretation.label, receipt.new_balance
    );
    if !receipt.unlocked_assessments.is_empty() {
        let unlocked: Vec<String> = receipt
            .unlocked_assessments
            .iter()
            .map(ToString::to_string)
            .collect();
        println!("  Unlocked: {}", unlocked.join(", "));
    }
    if !receipt.granted_tools.is_empty() {
        println!("  Tools granted: {}", receipt.granted_tools.join(", "));
    }
    if !receipt.granted_resources.is_empty() {
        println!("  Resources granted: {}", receipt.granted_resources.join(", "));
    }
}

fn render_score(definition: &AssessmentDefinition, card: &ScoreCard, insights: &ConstructInsights) {
    let interpretation = Interpretation::for_score(card.overall_score);
    println!("{} ({})", definition.full_name, definition.name);
    println!(
        "Overall score: {} - {}",
        card.overall_score, interpretation.label
    );
    println!("{}", interpretation.description);

    println!("\nSection scores");
    for section in definition.scored_sections() {
        match card.section_scores.get(section.id) {
            Some(score) => println!("- {}: {}", section.title, score),
            None => println!("- {}: no answers", section.title),
        }
    }

    if insights.active_synergies.is_empty() {
        println!("\nActive synergies: none");
    } else {
        println!("\nActive synergies (+{}%)", insights.synergy_bonus);
        for pair in &insights.active_synergies {
            println!("- {} (+{:.1}%)", pair.label, pair.bonus * 100.0);
        }
    }

    if !insights.focus_areas.is_empty() {
        println!("\nFocus areas");
        for area in &insights.focus_areas {
            println!(
                "{}. {} ({} -> {}): {}",
                area.priority, area.area, area.current_score, area.target_score, area.action
            );
        }
    }
}

fn join_or_none(values: &[String]) -> String {
    if values.is_empty() {
        "none".to_string()
    } else {
        values.join(", ")
    }
}
