use anyhow::{Context as _, Result};
use clap::Args;
use colored::{ColoredString, Colorize};
use mockprep_application::ReviewUseCase;
use mockprep_core::review::{ReviewRow, ReviewSummary, ScoreBand};
use mockprep_core::session::{QuestionType, SessionId};

use super::utils::{AppContext, print_error, print_hint};

#[derive(Args, Debug)]
pub struct ReviewArgs {
    pub session_id: SessionId,

    /// Generate model answers for subjective questions that lack one
    #[arg(long)]
    pub generate_answers: bool,
}

pub async fn run(ctx: &AppContext, args: ReviewArgs) -> Result<()> {
    let api = ctx.interview_api().await?;
    let usecase = ReviewUseCase::new(api);
    let session_id = args.session_id;
    let mut summary = usecase
        .load(session_id)
        .await
        .with_context(|| format!("Failed to load review for session {session_id}"))?;

    if args.generate_answers {
        generate_missing(&usecase, &mut summary).await;
    }
    print_summary(&summary);
    Ok(())
}

/// One question at a time; a failure is reported and the rest still run.
async fn generate_missing(usecase: &ReviewUseCase, summary: &mut ReviewSummary) {
    let missing = summary.missing_model_answers();
    if missing.is_empty() {
        print_hint("Every subjective question already has a model answer.");
        return;
    }
    for question_id in missing {
        print_hint(&format!("Generating model answer for question {question_id}..."));
        match usecase.generate_model_answer(summary, question_id).await {
            Ok(true) => {}
            Ok(false) => print_error(&format!(
                "Model answer for question {question_id} is still unavailable"
            )),
            Err(err) => print_error(&format!(
                "Failed to generate model answer for question {question_id}: {}",
                err.user_message()
            )),
        }
    }
}

/// The reference-answer lines for one row, if any.
fn model_answer_lines(row: &ReviewRow) -> Vec<String> {
    match row.question.usable_model_answer() {
        Some(answer) => {
            let mut lines = vec![format!("Model answer: {answer}")];
            if let Some(explanation) = &row.question.explanation {
                lines.push(format!("Explanation: {explanation}"));
            }
            lines
        }
        None if row.question.kind == QuestionType::Subjective => vec![
            "Model answer not available. Rerun with --generate-answers to create one.".to_string(),
        ],
        None => Vec::new(),
    }
}

fn band_label(summary: &ReviewSummary) -> ColoredString {
    let text = format!(
        "{} / {} ({}%)",
        summary.score, summary.max_score, summary.percentage
    );
    match summary.band {
        ScoreBand::Strong => text.bright_green().bold(),
        ScoreBand::Fair => text.yellow().bold(),
        ScoreBand::Weak => text.red().bold(),
    }
}

fn print_summary(summary: &ReviewSummary) {
    let session = &summary.session;
    println!(
        "{}",
        format!("=== Review: session {} ===", session.id)
            .bright_magenta()
            .bold()
    );
    if let Some(role) = &session.role {
        println!("{} {}", "Role:".bold(), role);
    }
    println!("{} {}", "Type:".bold(), session.session_type);
    println!("{} {}", "Score:".bold(), band_label(summary));
    println!(
        "{} {}/{}",
        "Answered:".bold(),
        summary.answered_count(),
        summary.rows.len()
    );
    if summary.evaluation_pending {
        print_hint("Evaluation is still running; scores may change. Check again shortly.");
    }
    println!();

    for (index, row) in summary.rows.iter().enumerate() {
        println!(
            "{}",
            format!("Q{}. {}", index + 1, row.question.question_text).bold()
        );
        match &row.answer {
            Some(answer) => {
                let text = answer.user_answer.as_deref().unwrap_or("(empty)");
                println!("  {} {}", "Your answer:".bright_black(), text);
                println!(
                    "  {} {}/{}",
                    "Score:".bright_black(),
                    answer.score,
                    row.max_points
                );
                if let Some(feedback) = &answer.ai_feedback {
                    for line in feedback.lines() {
                        println!("  {}", line.bright_blue());
                    }
                }
            }
            None => println!("  {}", "Not answered".yellow()),
        }
        for line in model_answer_lines(row) {
            println!("  {}", line.bright_black());
        }
        println!();
    }
}
