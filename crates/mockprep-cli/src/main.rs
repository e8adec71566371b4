use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use clap::{Parser, Subcommand};
use colored::Colorize;
use mockprep_core::session::SessionId;

mod commands;

use commands::review::ReviewArgs;
use commands::start::StartArgs;
use commands::utils::AppContext;

#[derive(Parser)]
#[command(name = "mockprep")]
#[command(about = "mockprep - timed mock interview practice", long_about = None)]
struct Cli {
    /// Use this directory instead of ~/.config/mockprep
    #[arg(long, global = true)]
    config_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Sign in and remember the session
    Login {
        #[arg(long)]
        email: Option<String>,
    },
    /// Create an account and sign in
    Register {
        #[arg(long)]
        email: Option<String>,
    },
    /// Forget the saved sign-in
    Logout,
    /// Show the signed-in user
    Whoami,
    /// Start a new interview session
    Start(StartArgs),
    /// Run the timed interview for an existing session
    Interview { session_id: SessionId },
    /// Show scores and feedback for a session
    Review(ReviewArgs),
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!(error = %format!("{err:#}"), "command failed");
            eprintln!("{}", format!("Error: {err:#}").red());
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<()> {
    let (ctx, _log_guard) = AppContext::load(cli.config_dir)?;

    match cli.command {
        Commands::Login { email } => commands::auth::login(&ctx, email).await,
        Commands::Register { email } => commands::auth::register(&ctx, email).await,
        Commands::Logout => commands::auth::logout(&ctx).await,
        Commands::Whoami => commands::auth::whoami(&ctx).await,
        Commands::Start(args) => commands::start::run(&ctx, args).await,
        Commands::Interview { session_id } => commands::interview::run(&ctx, session_id).await,
        Commands::Review(args) => commands::review::run(&ctx, args).await,
    }
}
