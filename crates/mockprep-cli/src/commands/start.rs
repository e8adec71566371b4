use anyhow::Result;
use clap::Args;
use colored::Colorize;
use mockprep_application::StartInterviewUseCase;
use mockprep_core::session::{
    Difficulty, Personality, QUESTION_COUNTS, SUGGESTED_ROLES, SessionType, StartSessionRequest,
};

use super::interview;
use super::utils::{AppContext, print_hint, value_or_prompt};

#[derive(Args, Debug)]
pub struct StartArgs {
    /// Role to interview for, e.g. "Backend Developer"
    #[arg(long)]
    pub role: Option<String>,

    /// subjective, mcq or full
    #[arg(long = "type", default_value = "subjective")]
    pub session_type: SessionType,

    /// One of 3, 5, 10, 15, 20
    #[arg(long, default_value_t = 5)]
    pub count: u32,

    /// easy, medium or hard; omit to let the server adapt
    #[arg(long)]
    pub difficulty: Option<Difficulty>,

    /// FRIENDLY, STRICT or TECHNICAL
    #[arg(long, default_value = "FRIENDLY")]
    pub personality: Personality,

    /// Use canned questions instead of generated ones
    #[arg(long)]
    pub mock: bool,

    /// Only create the session; do not begin the interview
    #[arg(long)]
    pub no_interview: bool,
}

pub async fn run(ctx: &AppContext, args: StartArgs) -> Result<()> {
    let auth = ctx.require_auth().await?;
    if args.role.is_none() {
        print_hint(&format!("Suggested roles: {}", SUGGESTED_ROLES.join(", ")));
    }
    let role = value_or_prompt(args.role, "Role: ")?;

    let request = StartSessionRequest {
        session_type: args.session_type,
        question_count: args.count,
        difficulty: args.difficulty,
        personality: args.personality,
        mock_mode: args.mock,
        ..StartSessionRequest::new(auth.email.clone(), role)
    };
    if !QUESTION_COUNTS.contains(&request.question_count) {
        print_hint(&format!("Allowed question counts: {QUESTION_COUNTS:?}"));
    }

    let session = StartInterviewUseCase::new(ctx.interview_api().await?)
        .start(&request)
        .await?;

    println!(
        "{}",
        format!(
            "Session {} created: {} {} questions, {} interviewer",
            session.id,
            request.question_count,
            request.session_type,
            request.personality
        )
        .bright_green()
    );
    print_hint(request.personality.description());

    if args.no_interview {
        print_hint(&format!("Begin later with `mockprep interview {}`", session.id));
        return Ok(());
    }
    interview::run(ctx, session.id).await
}
