use std::borrow::Cow;
use std::sync::Arc;

use anyhow::Result;
use colored::{ColoredString, Colorize};
use mockprep_application::{Advance, CompletionOutcome, InterviewController, InterviewSnapshot};
use mockprep_core::interview::{InterviewError, InterviewNotice, Phase, Urgency};
use mockprep_core::session::SessionId;
use rustyline::completion::{Completer, Pair};
use rustyline::highlight::Highlighter;
use rustyline::hint::Hinter;
use rustyline::validate::Validator;
use rustyline::{Context, Editor, Helper};

use super::review;
use super::utils::{AppContext, highlight_command, print_error, print_hint};

const COMMANDS: &[&str] = &[
    "/save", "/pick", "/next", "/prev", "/goto", "/followup", "/complete", "/status", "/help",
];

/// One line of REPL input.
#[derive(Debug, Clone, PartialEq, Eq)]
enum ReplCommand {
    /// Free text, appended to the draft.
    Draft(String),
    Save,
    /// 1-based option number.
    Pick(usize),
    Next,
    Prev,
    /// 1-based question number.
    Goto(usize),
    FollowUp,
    Complete,
    Status,
    Help,
    Quit,
}

impl ReplCommand {
    fn parse(line: &str) -> Result<Self, String> {
        let line = line.trim();
        if matches!(line, "quit" | "exit") {
            return Ok(ReplCommand::Quit);
        }
        if !line.starts_with('/') {
            return Ok(ReplCommand::Draft(line.to_string()));
        }

        let (name, arg) = match line.split_once(char::is_whitespace) {
            Some((name, arg)) => (name, Some(arg.trim())),
            None => (line, None),
        };
        let number = |usage: &str| -> Result<usize, String> {
            arg.and_then(|a| a.parse::<usize>().ok())
                .filter(|n| *n >= 1)
                .ok_or_else(|| format!("Usage: {usage}"))
        };

        match name {
            "/save" => Ok(ReplCommand::Save),
            "/pick" => number("/pick <option number>").map(ReplCommand::Pick),
            "/next" => Ok(ReplCommand::Next),
            "/prev" => Ok(ReplCommand::Prev),
            "/goto" => number("/goto <question number>").map(ReplCommand::Goto),
            "/followup" => Ok(ReplCommand::FollowUp),
            "/complete" => Ok(ReplCommand::Complete),
            "/status" => Ok(ReplCommand::Status),
            "/help" => Ok(ReplCommand::Help),
            other => Err(format!("Unknown command: {other}. Type /help")),
        }
    }
}

/// Completion and hints for slash commands.
struct ReplHelper;

impl Helper for ReplHelper {}

impl Completer for ReplHelper {
    type Candidate = Pair;

    fn complete(
        &self,
        line: &str,
        pos: usize,
        _ctx: &Context<'_>,
    ) -> rustyline::Result<(usize, Vec<Pair>)> {
        let line = &line[..pos];
        if !line.starts_with('/') {
            return Ok((0, vec![]));
        }
        let candidates = COMMANDS
            .iter()
            .filter(|cmd| cmd.starts_with(line))
            .map(|cmd| Pair {
                display: cmd.to_string(),
                replacement: cmd.to_string(),
            })
            .collect();
        Ok((0, candidates))
    }
}

impl Highlighter for ReplHelper {
    fn highlight<'l>(&self, line: &'l str, _pos: usize) -> Cow<'l, str> {
        highlight_command(line)
    }

    fn highlight_char(&self, _line: &str, _pos: usize, _forced: bool) -> bool {
        true
    }
}

impl Hinter for ReplHelper {
    type Hint = String;

    fn hint(&self, line: &str, pos: usize, _ctx: &Context<'_>) -> Option<String> {
        let line = &line[..pos];
        if !line.starts_with('/') || line.contains(' ') {
            return None;
        }
        COMMANDS
            .iter()
            .find(|cmd| cmd.starts_with(line) && cmd.len() > line.len())
            .map(|cmd| cmd[line.len()..].to_string())
    }
}

impl Validator for ReplHelper {}

/// Runs a timed interview for `session_id` and shows the review when it
/// completes.
pub async fn run(ctx: &AppContext, session_id: SessionId) -> Result<()> {
    let api = ctx.interview_api().await?;
    let (controller, mut notices) =
        InterviewController::new(session_id, api, ctx.config.interview.clone());
    let controller = Arc::new(controller);

    // Notices arrive from user commands and from the timer task alike.
    let printer = tokio::spawn(async move {
        while let Some(notice) = notices.recv().await {
            print_notice(&notice);
        }
    });

    println!("{}", "=== Mock Interview ===".bright_magenta().bold());
    let timer = match controller.activate().await {
        Ok(timer) => timer,
        Err(err) => {
            controller.deactivate();
            drop(controller);
            let _ = printer.await;
            return Err(err.into());
        }
    };
    print_hint("Type your answer, then /save. /help lists commands, 'quit' leaves.");
    render_question(&controller.snapshot().await);

    let mut rl = Editor::new()?;
    rl.set_helper(Some(ReplHelper));

    loop {
        let snapshot = controller.snapshot().await;
        if snapshot.phase == Phase::Done {
            break;
        }
        let prompt = format!("[{}] >> ", snapshot.clock);

        match rl.readline(&prompt) {
            Ok(line) => {
                if line.trim().is_empty() {
                    continue;
                }
                let _ = rl.add_history_entry(&line);

                match ReplCommand::parse(&line) {
                    Ok(ReplCommand::Quit) => break,
                    Ok(command) => {
                        if let Err(err) = execute(&controller, command).await {
                            report(&err);
                        }
                    }
                    Err(usage) => print_error(&usage),
                }
            }
            Err(rustyline::error::ReadlineError::Interrupted) => {
                println!("{}", "CTRL-C detected. Type 'quit' to exit.".yellow());
            }
            Err(rustyline::error::ReadlineError::Eof) => break,
            Err(err) => {
                print_error(&format!("Error: {err:?}"));
                break;
            }
        }
    }

    let finished = controller.snapshot().await.phase == Phase::Done;
    controller.deactivate();
    let _ = timer.await;
    drop(controller);
    let _ = printer.await;

    if finished {
        println!();
        review::run(
            ctx,
            review::ReviewArgs {
                session_id,
                generate_answers: false,
            },
        )
        .await
    } else {
        println!(
            "{}",
            "Interview left unfinished. Saved answers were not submitted.".yellow()
        );
        Ok(())
    }
}

async fn execute(controller: &InterviewController, command: ReplCommand) -> Result<(), InterviewError> {
    match command {
        ReplCommand::Draft(text) => {
            let draft = controller.snapshot().await.draft;
            let draft = if draft.is_empty() {
                text
            } else {
                format!("{draft}\n{text}")
            };
            controller.set_draft(draft).await;
        }
        ReplCommand::Save => {
            controller.save_answer(None).await?;
        }
        ReplCommand::Pick(number) => {
            let snapshot = controller.snapshot().await;
            let question = snapshot
                .current_question
                .ok_or(InterviewError::NoCurrentQuestion)?;
            match question.choices().get(number - 1) {
                Some(choice) => {
                    controller.save_answer(Some(choice.as_str())).await?;
                }
                None if question.is_mcq() => {
                    print_error(&format!("Pick a number from 1 to {}", question.choices().len()));
                }
                None => print_error("This question has no options. Type your answer and /save."),
            }
        }
        ReplCommand::Next => match controller.next().await? {
            Advance::Moved(_) => render_question(&controller.snapshot().await),
            Advance::Finished(outcome) => report_completion(outcome),
        },
        ReplCommand::Prev => {
            controller.previous().await?;
            render_question(&controller.snapshot().await);
        }
        ReplCommand::Goto(number) => {
            controller.jump_to(number - 1).await?;
            render_question(&controller.snapshot().await);
        }
        ReplCommand::FollowUp => {
            print_hint("Generating a follow-up...");
            match controller.request_follow_up().await? {
                Some(text) => {
                    println!("{}", "Follow-up:".bright_magenta());
                    for line in text.lines() {
                        println!("  {}", line.bright_blue());
                    }
                }
                None => print_hint("No follow-up for this answer."),
            }
        }
        ReplCommand::Complete => {
            print_hint("Submitting your interview...");
            report_completion(controller.complete().await?);
        }
        ReplCommand::Status => render_status(&controller.snapshot().await),
        ReplCommand::Help => print_help(),
        ReplCommand::Quit => {}
    }
    Ok(())
}

/// Errors the controller already announced as a notice are not repeated.
fn report(err: &InterviewError) {
    match err {
        InterviewError::NotReady(_)
        | InterviewError::NoCurrentQuestion
        | InterviewError::FollowUpInFlight => print_error(&err.to_string()),
        _ => {}
    }
}

fn report_completion(outcome: CompletionOutcome) {
    if outcome == CompletionOutcome::AlreadyInFlight {
        print_hint("Already submitting...");
    }
}

fn print_notice(notice: &InterviewNotice) {
    match notice {
        InterviewNotice::Info(text) => println!("{}", text.yellow()),
        InterviewNotice::Success(text) => println!("{}", text.bright_green()),
        InterviewNotice::Error(text) => eprintln!("{}", text.red()),
        InterviewNotice::Navigate(route) => {
            println!("{}", format!("Opening review ({})", route.path()).bright_black());
        }
    }
}

fn clock(snapshot: &InterviewSnapshot) -> ColoredString {
    match snapshot.urgency {
        Urgency::Normal => snapshot.clock.green(),
        Urgency::Warning => snapshot.clock.yellow(),
        Urgency::Danger => snapshot.clock.red().bold(),
    }
}

fn render_question(snapshot: &InterviewSnapshot) {
    let Some(question) = &snapshot.current_question else {
        print_hint("No questions in this session.");
        return;
    };

    println!();
    let mut header = format!(
        "Question {}/{} [{}]",
        snapshot.current_index + 1,
        snapshot.active_questions.len(),
        question.kind
    );
    if let Some(topic) = &question.topic {
        header.push_str(&format!(" {topic}"));
    }
    println!("{}  {}", header.bright_magenta().bold(), clock(snapshot));
    for line in question.question_text.lines() {
        println!("{line}");
    }
    for (i, choice) in question.choices().iter().enumerate() {
        println!("  {}. {}", i + 1, choice);
    }

    if let Some(answer) = snapshot.current_answer() {
        println!("{} {}", "Saved answer:".bright_green(), answer);
    } else if question.is_mcq() {
        print_hint("Choose with /pick <n>.");
    }
    if !snapshot.draft.is_empty() {
        println!("{} {}", "Draft:".bright_black(), snapshot.draft);
    }
}

fn render_status(snapshot: &InterviewSnapshot) {
    println!("{} {}", "Time left:".bold(), clock(snapshot));
    println!("{} {:.0}%", "Progress:".bold(), snapshot.progress);
    let map: Vec<String> = snapshot
        .answered
        .iter()
        .enumerate()
        .map(|(i, answered)| {
            let label = format!("{}", i + 1);
            let label = if *answered {
                label.green().to_string()
            } else {
                label.bright_black().to_string()
            };
            if i == snapshot.current_index {
                format!("[{label}]")
            } else {
                label
            }
        })
        .collect();
    println!("{} {}", "Questions:".bold(), map.join(" "));
    if let Some(follow_up) = &snapshot.follow_up {
        println!("{} {}", "Follow-up:".bold(), follow_up.bright_blue());
    }
}

fn print_help() {
    let rows = [
        ("<text>", "add a line to your draft answer"),
        ("/save", "save the draft for this question"),
        ("/pick <n>", "choose option n of a multiple-choice question"),
        ("/next, /prev", "move between questions"),
        ("/goto <n>", "jump to question n"),
        ("/followup", "ask for a follow-up on your saved answer"),
        ("/complete", "submit all saved answers and finish"),
        ("/status", "time left and answered questions"),
        ("quit", "leave without submitting"),
    ];
    for (command, description) in rows {
        println!("  {:<14} {}", command.bright_cyan(), description);
    }
}
